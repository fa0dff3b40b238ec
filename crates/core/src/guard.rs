//! Numeric guards applied at every arithmetic boundary.
//!
//! Inputs arrive from forms, laser measurements and imported JSON, so any of
//! them may be missing, `NaN` or infinite. These helpers are total: they never
//! panic and never let a non-finite value through.

/// Return `value` when it is finite, otherwise `fallback`.
pub fn safe_number(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Guard an optional input, falling back when absent or non-finite.
pub fn safe_opt(value: Option<f64>, fallback: f64) -> f64 {
    value.map_or(fallback, |v| safe_number(v, fallback))
}

/// A finite, non-negative dimension. Negative and non-finite inputs become 0.
pub fn dimension(value: Option<f64>) -> f64 {
    safe_opt(value, 0.0).max(0.0)
}

/// A positive value if one is present, otherwise `None`.
///
/// Used where "absent" and "zero" must both fall through to the next source,
/// e.g. a manual area override.
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Clamp a computed quantity so deductions can never push it below zero.
pub fn non_negative(value: f64) -> f64 {
    safe_number(value, 0.0).max(0.0)
}

/// Convert a width entered in inches to feet.
pub fn inches_to_feet(inches: f64) -> f64 {
    safe_number(inches, 0.0) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(safe_number(12.5, 0.0), 12.5);
        assert_eq!(safe_number(-3.0, 0.0), -3.0);
        assert_eq!(safe_number(0.0, 7.0), 0.0);
    }

    #[test]
    fn non_finite_values_fall_back() {
        assert_eq!(safe_number(f64::NAN, 4.0), 4.0);
        assert_eq!(safe_number(f64::INFINITY, 4.0), 4.0);
        assert_eq!(safe_number(f64::NEG_INFINITY, 4.0), 4.0);
    }

    #[test]
    fn missing_optional_falls_back() {
        assert_eq!(safe_opt(None, 8.0), 8.0);
        assert_eq!(safe_opt(Some(f64::NAN), 8.0), 8.0);
        assert_eq!(safe_opt(Some(9.0), 8.0), 9.0);
    }

    #[test]
    fn dimension_clamps_negative_to_zero() {
        assert_eq!(dimension(Some(-4.0)), 0.0);
        assert_eq!(dimension(None), 0.0);
        assert_eq!(dimension(Some(10.0)), 10.0);
    }

    #[test]
    fn positive_filters_zero_and_nan() {
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(-1.0)), None);
        assert_eq!(positive(Some(f64::NAN)), None);
        assert_eq!(positive(Some(120.0)), Some(120.0));
    }

    #[test]
    fn non_negative_clamps() {
        assert_eq!(non_negative(-21.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(316.0), 316.0);
    }

    #[test]
    fn inches_convert_to_feet() {
        assert!((inches_to_feet(6.0) - 0.5).abs() < f64::EPSILON);
        assert_eq!(inches_to_feet(f64::NAN), 0.0);
    }
}

//! Calculation, pricing and coat-count configuration.
//!
//! Every configuration type comes in two shapes:
//!
//! - the resolved snapshot (`CalculationSettings`, `PricingSettings`,
//!   `Coats`) that calculators read, with every field populated;
//! - a partial patch (`*Patch`, `CoatOverrides`) where every field is
//!   optional. Patches double as override layers: `resolve_*` walks an
//!   ordered list of layers and takes the first value set for each field,
//!   falling back to the built-in default.
//!
//! Snapshots are immutable per call. Updating settings produces a new
//! snapshot via [`CalculationSettings::apply_patch`]; resetting is
//! `Default::default()`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Declares a settings snapshot, its defaults and its validated patch type
/// from a single field list so the three can never drift apart.
macro_rules! settings {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident = $default:literal, min $min:tt;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: f64,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        #[doc = concat!("Partial update / override layer for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                #[validate(range(min = $min))]
                pub $field: Option<f64>,
            )*
        }

        impl $patch {
            /// Names of fields carrying `NaN` or an infinity.
            fn non_finite_fields(&self) -> Vec<&'static str> {
                let mut fields = Vec::new();
                $(
                    if matches!(self.$field, Some(v) if !v.is_finite()) {
                        fields.push(stringify!($field));
                    }
                )*
                fields
            }

            fn validated(&self) -> Result<(), CoreError> {
                let non_finite = self.non_finite_fields();
                if !non_finite.is_empty() {
                    return Err(CoreError::Validation(format!(
                        "non-finite value for: {}",
                        non_finite.join(", ")
                    )));
                }
                self.validate()?;
                Ok(())
            }
        }

        impl $name {
            /// Validate `patch` and return a new snapshot with its fields applied.
            ///
            /// The receiver is left untouched; a rejected patch changes nothing.
            pub fn apply_patch(&self, patch: &$patch) -> Result<Self, CoreError> {
                patch.validated()?;
                Ok(Self {
                    $( $field: patch.$field.unwrap_or(self.$field), )*
                })
            }

            /// Resolve a snapshot from ordered override layers.
            ///
            /// For each field the first layer that sets a finite value wins;
            /// fields no layer sets take the built-in default.
            pub fn resolve(layers: &[&$patch]) -> Self {
                let defaults = Self::default();
                Self {
                    $(
                        $field: layers
                            .iter()
                            .find_map(|layer| layer.$field.filter(|v| v.is_finite()))
                            .unwrap_or(defaults.$field),
                    )*
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Calculation settings
// ---------------------------------------------------------------------------

settings! {
    /// Physical trim and opening dimensions read by every geometry calculator.
    ///
    /// Heights, widths and depths of openings are in feet; trim, casing,
    /// jamb, baseboard and crown widths are in inches.
    pub struct CalculationSettings / CalculationSettingsPatch {
        door_height = 7.0, min 0.0;
        door_width = 3.0, min 0.0;
        /// Door casing width (inches).
        door_trim_width = 3.5, min 0.0;
        /// Door jamb depth (inches).
        door_jamb_width = 5.5, min 0.0;
        window_width = 3.0, min 0.0;
        window_height = 5.0, min 0.0;
        /// Window casing width (inches).
        window_trim_width = 3.5, min 0.0;
        single_closet_width = 2.5, min 0.0;
        double_closet_width = 5.0, min 0.0;
        /// Single closet casing width (inches).
        single_closet_trim_width = 3.5, min 0.0;
        /// Double closet casing width (inches).
        double_closet_trim_width = 3.5, min 0.0;
        closet_cavity_depth = 2.0, min 0.0;
        /// Baseboard height (inches).
        baseboard_width = 5.5, min 0.0;
        /// Crown moulding face width (inches).
        crown_moulding_width = 4.5, min 0.0;
        opening_width = 3.0, min 0.0;
        opening_height = 6.67, min 0.0;
        /// Generic opening casing width (inches).
        opening_trim_width = 3.5, min 0.0;
        riser_height = 0.625, min 0.0;
        /// Handrail paintable width (inches).
        handrail_width = 3.0, min 0.0;
        /// Paintable surface per spindle (sq ft).
        spindle_area = 0.75, min 0.0;
    }
}

// ---------------------------------------------------------------------------
// Pricing settings
// ---------------------------------------------------------------------------

settings! {
    /// Labor rates, paint prices, coverage rates and the coat multiplier.
    pub struct PricingSettings / PricingSettingsPatch {
        // Labor per square foot.
        wall_labor_per_sqft = 1.5, min 0.0;
        ceiling_labor_per_sqft = 1.75, min 0.0;
        built_in_labor_per_sqft = 3.0, min 0.0;
        primer_labor_per_sqft = 0.5, min 0.0;
        // Labor per linear foot.
        baseboard_labor_per_lf = 2.0, min 0.0;
        crown_labor_per_lf = 3.0, min 0.0;
        handrail_labor_per_lf = 4.0, min 0.0;
        // Labor per unit.
        door_labor_per_unit = 75.0, min 0.0;
        window_labor_per_unit = 50.0, min 0.0;
        closet_labor_per_unit = 60.0, min 0.0;
        riser_labor_per_unit = 20.0, min 0.0;
        spindle_labor_per_unit = 8.0, min 0.0;
        fireplace_labor_per_unit = 250.0, min 0.0;
        // Paint prices.
        wall_paint_per_gallon = 45.0, min 0.0;
        wall_paint_per_five_gallon = 200.0, min 0.0;
        ceiling_paint_per_gallon = 40.0, min 0.0;
        ceiling_paint_per_five_gallon = 180.0, min 0.0;
        trim_paint_per_gallon = 50.0, min 0.0;
        trim_paint_per_five_gallon = 225.0, min 0.0;
        door_paint_per_gallon = 55.0, min 0.0;
        door_paint_per_five_gallon = 250.0, min 0.0;
        primer_per_gallon = 30.0, min 0.0;
        primer_per_five_gallon = 130.0, min 0.0;
        // Coverage (sq ft per gallon).
        wall_coverage = 350.0, min 1.0;
        ceiling_coverage = 350.0, min 1.0;
        trim_coverage = 350.0, min 1.0;
        door_coverage = 350.0, min 1.0;
        primer_coverage = 350.0, min 1.0;
        /// Applied once to labor for any coat count above one.
        second_coat_labor_multiplier = 2.0, min 0.0;
        /// Used only to express labor cost as hours.
        hourly_labor_rate = 55.0, min 0.0;
    }
}

/// Resolve effective calculation settings from ordered override layers
/// (most specific first).
pub fn resolve_calculation_settings(layers: &[&CalculationSettingsPatch]) -> CalculationSettings {
    CalculationSettings::resolve(layers)
}

/// Resolve effective pricing settings from ordered override layers
/// (most specific first).
pub fn resolve_pricing_settings(layers: &[&PricingSettingsPatch]) -> PricingSettings {
    PricingSettings::resolve(layers)
}

// ---------------------------------------------------------------------------
// Coat counts
// ---------------------------------------------------------------------------

/// Global default coats for walls, ceilings, trim and doors.
pub const DEFAULT_COATS: u32 = 2;
/// Primer is off unless a layer turns it on.
pub const DEFAULT_PRIMER_COATS: u32 = 0;

/// Resolved coat counts per paint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coats {
    pub walls: u32,
    pub ceilings: u32,
    pub trim: u32,
    pub doors: u32,
    pub primer: u32,
}

impl Default for Coats {
    fn default() -> Self {
        Self {
            walls: DEFAULT_COATS,
            ceilings: DEFAULT_COATS,
            trim: DEFAULT_COATS,
            doors: DEFAULT_COATS,
            primer: DEFAULT_PRIMER_COATS,
        }
    }
}

/// Optional coat counts, carried by entities (override) and projects (default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoatOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walls: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceilings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doors: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primer: Option<u32>,
}

/// Resolve coat counts through the chain entity override, project default,
/// global default. Pass layers most specific first.
pub fn resolve_coats(layers: &[&CoatOverrides]) -> Coats {
    let defaults = Coats::default();
    let pick = |get: fn(&CoatOverrides) -> Option<u32>, fallback: u32| {
        layers.iter().find_map(|layer| get(layer)).unwrap_or(fallback)
    };
    Coats {
        walls: pick(|c| c.walls, defaults.walls),
        ceilings: pick(|c| c.ceilings, defaults.ceilings),
        trim: pick(|c| c.trim, defaults.trim),
        doors: pick(|c| c.doors, defaults.doors),
        primer: pick(|c| c.primer, defaults.primer),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- defaults --

    #[test]
    fn calculation_defaults_match_standard_openings() {
        let s = CalculationSettings::default();
        assert_eq!(s.door_height, 7.0);
        assert_eq!(s.door_width, 3.0);
        assert_eq!(s.window_width, 3.0);
        assert_eq!(s.window_height, 5.0);
        assert_eq!(s.single_closet_width, 2.5);
        assert_eq!(s.closet_cavity_depth, 2.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let s: CalculationSettings = serde_json::from_str(r#"{"doorHeight": 6.8}"#).unwrap();
        assert_eq!(s.door_height, 6.8);
        assert_eq!(s.door_width, 3.0);
    }

    // -- apply_patch --

    #[test]
    fn patch_overrides_only_set_fields() {
        let base = PricingSettings::default();
        let patch = PricingSettingsPatch {
            wall_labor_per_sqft: Some(2.25),
            ..Default::default()
        };
        let updated = base.apply_patch(&patch).unwrap();
        assert_eq!(updated.wall_labor_per_sqft, 2.25);
        assert_eq!(updated.ceiling_labor_per_sqft, base.ceiling_labor_per_sqft);
    }

    #[test]
    fn patch_rejects_negative_values() {
        let patch = CalculationSettingsPatch {
            door_width: Some(-1.0),
            ..Default::default()
        };
        let result = CalculationSettings::default().apply_patch(&patch);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("door_width"));
    }

    #[test]
    fn patch_rejects_coverage_below_floor() {
        let patch = PricingSettingsPatch {
            wall_coverage: Some(0.0),
            ..Default::default()
        };
        assert_matches!(
            PricingSettings::default().apply_patch(&patch),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn patch_rejects_non_finite_values() {
        let patch = PricingSettingsPatch {
            trim_paint_per_gallon: Some(f64::NAN),
            ..Default::default()
        };
        assert_matches!(
            PricingSettings::default().apply_patch(&patch),
            Err(CoreError::Validation(msg)) if msg.contains("trim_paint_per_gallon")
        );
    }

    #[test]
    fn reset_is_default() {
        let modified = PricingSettings::default()
            .apply_patch(&PricingSettingsPatch {
                door_labor_per_unit: Some(90.0),
                ..Default::default()
            })
            .unwrap();
        assert_ne!(modified, PricingSettings::default());
        let reset = PricingSettings::default();
        assert_eq!(reset.door_labor_per_unit, 75.0);
    }

    // -- resolve --

    #[test]
    fn first_layer_wins() {
        let project = CalculationSettingsPatch {
            door_height: Some(8.0),
            window_width: Some(4.0),
            ..Default::default()
        };
        let entity = CalculationSettingsPatch {
            door_height: Some(6.5),
            ..Default::default()
        };
        let resolved = resolve_calculation_settings(&[&entity, &project]);
        assert_eq!(resolved.door_height, 6.5);
        assert_eq!(resolved.window_width, 4.0);
        assert_eq!(resolved.window_height, 5.0);
    }

    #[test]
    fn non_finite_layer_values_are_skipped() {
        let bad = PricingSettingsPatch {
            wall_coverage: Some(f64::INFINITY),
            ..Default::default()
        };
        let good = PricingSettingsPatch {
            wall_coverage: Some(400.0),
            ..Default::default()
        };
        assert_eq!(resolve_pricing_settings(&[&bad, &good]).wall_coverage, 400.0);
    }

    #[test]
    fn no_layers_yields_defaults() {
        assert_eq!(resolve_pricing_settings(&[]), PricingSettings::default());
    }

    // -- coats --

    #[test]
    fn coats_resolve_entity_then_project_then_global() {
        let entity = CoatOverrides {
            walls: Some(3),
            ..Default::default()
        };
        let project = CoatOverrides {
            walls: Some(1),
            ceilings: Some(1),
            ..Default::default()
        };
        let coats = resolve_coats(&[&entity, &project]);
        assert_eq!(coats.walls, 3);
        assert_eq!(coats.ceilings, 1);
        assert_eq!(coats.trim, DEFAULT_COATS);
        assert_eq!(coats.primer, DEFAULT_PRIMER_COATS);
    }
}

//! Labor and material cost rules.

use crate::guard::{non_negative, safe_number};

/// Fractional gallons at or below `gallons x GALLON_NOISE` are arithmetic
/// noise, not paint: `(0.1 + 0.2) x 10` stays 3 cans instead of becoming 4.
const GALLON_NOISE: f64 = 4.0 * f64::EPSILON;

/// Labor multiplier for a coat count.
///
/// One coat is the base rate. Any count above one applies the configured
/// second-coat multiplier once, without compounding per extra coat. Zero
/// coats means the category is not painted.
pub fn coat_labor_multiplier(coats: u32, second_coat_multiplier: f64) -> f64 {
    match coats {
        0 => 0.0,
        1 => 1.0,
        _ => non_negative(second_coat_multiplier),
    }
}

/// `quantity x rate x coat multiplier`, never negative.
pub fn labor_cost(quantity: f64, rate: f64, coats: u32, second_coat_multiplier: f64) -> f64 {
    non_negative(quantity)
        * non_negative(rate)
        * coat_labor_multiplier(coats, second_coat_multiplier)
}

/// Gallons rounded up to the next whole can.
///
/// Any fraction above a few ulps of `gallons` buys another can.
pub fn whole_gallons(gallons: f64) -> f64 {
    let g = non_negative(gallons);
    let floor = g.floor();
    if g - floor <= g * GALLON_NOISE {
        floor
    } else {
        g.ceil()
    }
}

/// Material cost: whole cans times the per-gallon price.
pub fn material_cost(gallons: f64, price_per_gallon: f64) -> f64 {
    whole_gallons(gallons) * non_negative(price_per_gallon)
}

/// Round to the currency's smallest display unit (cents). Idempotent.
pub fn round_currency(value: f64) -> f64 {
    let v = safe_number(value, 0.0);
    (v * 100.0).round() / 100.0
}

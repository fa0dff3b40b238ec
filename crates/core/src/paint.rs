//! Paint consumption: gallons per paint type, and the purchase plan that
//! turns gallons into cans and buckets.

use serde::Serialize;

use crate::guard::{non_negative, safe_number};

/// Coverage never drops below this many sq ft per gallon, so a zero or
/// missing coverage rate cannot divide by zero.
pub const MIN_COVERAGE: f64 = 1.0;

/// Gallons per bucket for bulk pricing.
pub const BUCKET_GALLONS: f64 = 5.0;

/// Coverage rate with the floor applied.
pub fn effective_coverage(rate: f64) -> f64 {
    safe_number(rate, MIN_COVERAGE).max(MIN_COVERAGE)
}

/// Gallons needed to cover `area` sq ft with `coats` coats.
pub fn gallons(area: f64, coverage: f64, coats: u32) -> f64 {
    non_negative(area) / effective_coverage(coverage) * f64::from(coats)
}

/// Gallons per paint type. Baseboard, crown, casings, jambs and the other
/// trim-painted surfaces share the single `trim` bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintGallons {
    pub wall: f64,
    pub ceiling: f64,
    pub trim: f64,
    pub door: f64,
    pub primer: f64,
}

impl PaintGallons {
    pub fn total(&self) -> f64 {
        self.wall + self.ceiling + self.trim + self.door + self.primer
    }

    /// Whole gallons purchased per paint type.
    pub fn purchased(&self) -> PaintGallons {
        PaintGallons {
            wall: crate::cost::whole_gallons(self.wall),
            ceiling: crate::cost::whole_gallons(self.ceiling),
            trim: crate::cost::whole_gallons(self.trim),
            door: crate::cost::whole_gallons(self.door),
            primer: crate::cost::whole_gallons(self.primer),
        }
    }
}

impl std::ops::AddAssign for PaintGallons {
    fn add_assign(&mut self, other: Self) {
        self.wall += other.wall;
        self.ceiling += other.ceiling;
        self.trim += other.trim;
        self.door += other.door;
        self.primer += other.primer;
    }
}

// ---------------------------------------------------------------------------
// Purchase planning
// ---------------------------------------------------------------------------

/// Cheapest mix of 5-gallon buckets and 1-gallon cans for a paint type.
///
/// Counts are whole numbers carried as `f64` so a plan never saturates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePlan {
    /// Whole gallons required (`ceil(gallons)`).
    pub gallons_needed: f64,
    pub buckets: f64,
    pub cans: f64,
    pub cost: f64,
}

impl PurchasePlan {
    fn priced(gallons_needed: f64, buckets: f64, cans: f64, per_gallon: f64, per_bucket: f64) -> Self {
        Self {
            gallons_needed,
            buckets,
            cans,
            cost: buckets * per_bucket + cans * per_gallon,
        }
    }
}

/// Plan the purchase of `gallons` of paint.
///
/// Covers `ceil(gallons)` with the cheapest mix of buckets and cans. Cost is
/// linear in the bucket count up to `needed / 5` full buckets, so only three
/// mixes can win: cans only, full buckets plus leftover cans, or one extra
/// bucket in place of the leftover cans. A non-positive bucket price disables
/// buckets.
pub fn plan_purchase(gallons: f64, per_gallon: f64, per_bucket: f64) -> PurchasePlan {
    let needed = crate::cost::whole_gallons(gallons);
    let per_gallon = non_negative(per_gallon);
    let per_bucket = non_negative(per_bucket);

    let cans_only = PurchasePlan::priced(needed, 0.0, needed, per_gallon, per_bucket);
    if per_bucket <= 0.0 || needed <= 0.0 {
        return cans_only;
    }

    let full = (needed / BUCKET_GALLONS).floor();
    let leftover = non_negative(needed - full * BUCKET_GALLONS);
    let mut candidates = vec![PurchasePlan::priced(needed, full, leftover, per_gallon, per_bucket)];
    if leftover > 0.0 {
        candidates.push(PurchasePlan::priced(needed, full + 1.0, 0.0, per_gallon, per_bucket));
    }

    candidates
        .into_iter()
        .fold(cans_only, |best, plan| if plan.cost < best.cost { plan } else { best })
}

//! Good/Better/Best paint tiers.
//!
//! Each tier is a what-if projection of a [`ProjectSummary`] with only the
//! wall-paint price changed. Nothing here is persisted.

use serde::Serialize;

use crate::aggregate::ProjectSummary;
use crate::cost::round_currency;
use crate::guard::{non_negative, safe_opt};
use crate::quote::{PaintOption, QuoteBuilder};
use crate::settings::PricingSettings;

/// One projected tier, ready for a proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintTierOption {
    pub option_id: String,
    pub option_name: String,
    pub total: f64,
    pub notes: String,
    /// Whole gallons of wall paint priced for the project.
    pub wall_gallons: f64,
}

/// Project every tier in configuration order.
///
/// Non-wall costs stay at their summary values. Wall materials are repriced
/// from the same whole-can counts the summary used, so a tier at the base
/// price reproduces the summary's grand total.
pub fn paint_tier_options(
    summary: &ProjectSummary,
    options: &[PaintOption],
    pricing: &PricingSettings,
) -> Vec<PaintTierOption> {
    let wall_gallons = summary.purchased_gallons.wall;
    let base_wall_materials = summary.category_materials.wall;
    let without_wall = summary.grand_total - base_wall_materials;

    options
        .iter()
        .map(|option| {
            let price = non_negative(safe_opt(option.wall_paint_price, pricing.wall_paint_per_gallon));
            PaintTierOption {
                option_id: option.id.clone(),
                option_name: option.name.clone(),
                total: round_currency(non_negative(without_wall + wall_gallons * price)),
                notes: option.notes.clone(),
                wall_gallons,
            }
        })
        .collect()
}

/// Tiers shown on the proposal: empty unless the builder opts in.
pub fn proposal_options(
    summary: &ProjectSummary,
    builder: &QuoteBuilder,
    pricing: &PricingSettings,
) -> Vec<PaintTierOption> {
    if !builder.show_paint_options_in_proposal {
        return Vec::new();
    }
    paint_tier_options(summary, &builder.paint_options, pricing)
}

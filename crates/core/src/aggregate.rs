//! Project aggregation under the authoritative quote builder.
//!
//! Preview, save and import all call [`summarize_project`]. It resolves the
//! builder through [`Project::resolve_quote_builder`], summarizes every
//! participating entity with [`summarize_entity`] and sums displayed values.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cost::round_currency;
use crate::entity::PaintableEntity;
use crate::error::CoreError;
use crate::paint::{plan_purchase, PaintGallons, PurchasePlan};
use crate::quote::{Project, QuoteBuilder, QuoteSource, QuoteTotals};
use crate::settings::{CalculationSettings, PricingSettings};
use crate::summary::{
    labor_hours, summarize_entity, EntitySnapshot, EstimateContext, LaborBreakdown,
    MaterialBreakdown, PricingSummary,
};
use crate::types::{EntityId, ProjectId};

/// Upper bound on entities in one project computation.
pub const MAX_PROJECT_ENTITIES: usize = 500;

/// Reject projects larger than [`MAX_PROJECT_ENTITIES`].
pub fn validate_entity_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_PROJECT_ENTITIES {
        return Err(CoreError::Validation(format!(
            "Project contains {count} entities (maximum {MAX_PROJECT_ENTITIES})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Bulk-aware purchase plan per paint type for the whole project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub wall: PurchasePlan,
    pub ceiling: PurchasePlan,
    pub trim: PurchasePlan,
    pub door: PurchasePlan,
    pub primer: PurchasePlan,
}

impl ShoppingList {
    fn plan(gallons: &PaintGallons, p: &PricingSettings) -> Self {
        Self {
            wall: plan_purchase(gallons.wall, p.wall_paint_per_gallon, p.wall_paint_per_five_gallon),
            ceiling: plan_purchase(
                gallons.ceiling,
                p.ceiling_paint_per_gallon,
                p.ceiling_paint_per_five_gallon,
            ),
            trim: plan_purchase(gallons.trim, p.trim_paint_per_gallon, p.trim_paint_per_five_gallon),
            door: plan_purchase(gallons.door, p.door_paint_per_gallon, p.door_paint_per_five_gallon),
            primer: plan_purchase(gallons.primer, p.primer_per_gallon, p.primer_per_five_gallon),
        }
    }

    pub fn total_cost(&self) -> f64 {
        round_currency(
            self.wall.cost + self.ceiling.cost + self.trim.cost + self.door.cost + self.primer.cost,
        )
    }
}

/// Itemized and grand totals for one project under one quote builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub quote_source: QuoteSource,
    pub quote_name: String,
    /// Participating entities, in input order.
    pub entities: Vec<PricingSummary>,
    /// Entities left out by the builder's explicit id set.
    pub excluded_entity_ids: Vec<EntityId>,
    pub labor_total: f64,
    pub materials_total: f64,
    pub grand_total: f64,
    pub labor_hours: f64,
    pub category_labor: LaborBreakdown,
    pub category_materials: MaterialBreakdown,
    /// Raw gallons per paint type across all entities.
    pub gallons: PaintGallons,
    /// Whole gallons priced, summed per entity.
    pub purchased_gallons: PaintGallons,
    pub shopping_list: ShoppingList,
}

/// Values the save path writes back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    /// Keyed by entity id. Entities outside the quote snapshot to zero.
    pub entities: BTreeMap<EntityId, EntitySnapshot>,
    pub quote_totals: QuoteTotals,
}

/// A single-entity preview plus whether the entity takes part in the quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPreview {
    pub included_in_quote: bool,
    pub summary: PricingSummary,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Build the per-call context for a project and an already resolved builder.
pub fn project_context<'a>(
    project: &'a Project,
    builder: &'a QuoteBuilder,
    calculation: &'a CalculationSettings,
    pricing: &'a PricingSettings,
) -> EstimateContext<'a> {
    EstimateContext {
        calculation,
        pricing,
        quote_builder: builder,
        project_coats: &project.coat_defaults,
        default_wall_height: project.default_wall_height,
    }
}

/// Summarize a project under its authoritative quote builder.
pub fn summarize_project(
    project: &Project,
    entities: &[PaintableEntity],
    calculation: &CalculationSettings,
    pricing: &PricingSettings,
) -> ProjectSummary {
    let resolved = project.resolve_quote_builder();
    let builder = resolved.builder.as_ref();
    let ctx = project_context(project, builder, calculation, pricing);

    let (participating, excluded): (Vec<&PaintableEntity>, Vec<&PaintableEntity>) = entities
        .iter()
        .partition(|entity| builder.includes_entity(entity.id()));

    let summaries: Vec<PricingSummary> = participating
        .into_iter()
        .map(|entity| summarize_entity(entity, &ctx))
        .collect();

    let mut category_labor = LaborBreakdown::default();
    let mut category_materials = MaterialBreakdown::default();
    let mut gallons = PaintGallons::default();
    let mut purchased_gallons = PaintGallons::default();
    let (mut labor, mut materials, mut grand) = (0.0, 0.0, 0.0);
    for s in &summaries {
        category_labor += s.labor;
        category_materials += s.materials;
        gallons += s.gallons;
        purchased_gallons += s.purchased_gallons;
        labor += s.labor_displayed;
        materials += s.materials_displayed;
        grand += s.total_displayed;
    }

    let labor_total = round_currency(labor);
    let summary = ProjectSummary {
        project_id: project.id.clone(),
        quote_source: resolved.source.clone(),
        quote_name: builder.name.clone(),
        excluded_entity_ids: excluded.iter().map(|e| e.id().to_string()).collect(),
        labor_total,
        materials_total: round_currency(materials),
        grand_total: round_currency(grand),
        labor_hours: labor_hours(labor_total, pricing.hourly_labor_rate),
        category_labor,
        category_materials,
        shopping_list: ShoppingList::plan(&gallons, pricing),
        gallons,
        purchased_gallons,
        entities: summaries,
    };

    tracing::debug!(
        project_id = %summary.project_id,
        entities = summary.entities.len(),
        excluded = summary.excluded_entity_ids.len(),
        grand_total = summary.grand_total,
        "Project summarized",
    );
    summary
}

/// Preview one entity under the project's authoritative builder.
pub fn preview_entity(
    project: &Project,
    entity: &PaintableEntity,
    calculation: &CalculationSettings,
    pricing: &PricingSettings,
) -> EntityPreview {
    let resolved = project.resolve_quote_builder();
    let builder = resolved.builder.as_ref();
    let ctx = project_context(project, builder, calculation, pricing);
    EntityPreview {
        included_in_quote: builder.includes_entity(entity.id()),
        summary: summarize_entity(entity, &ctx),
    }
}

/// Totals cached on the quote at save time.
pub fn quote_totals(summary: &ProjectSummary) -> QuoteTotals {
    QuoteTotals {
        labor: summary.labor_total,
        materials: summary.materials_total,
        grand_total: summary.grand_total,
    }
}

/// Snapshot every entity from an already computed summary.
pub fn project_snapshot(entities: &[PaintableEntity], summary: &ProjectSummary) -> ProjectSnapshot {
    let mut snapshots: BTreeMap<EntityId, EntitySnapshot> = entities
        .iter()
        .map(|e| (e.id().to_string(), EntitySnapshot::default()))
        .collect();
    for s in &summary.entities {
        snapshots.insert(s.entity_id.clone(), s.snapshot());
    }
    ProjectSnapshot {
        entities: snapshots,
        quote_totals: quote_totals(summary),
    }
}

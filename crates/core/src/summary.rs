//! Per-entity pricing summary: the canonical entry point.
//!
//! [`summarize_entity`] is the only function that turns an entity into money.
//! Live preview, the save snapshot and the import path all call it (usually
//! through [`crate::aggregate::summarize_project`]) so their numbers are
//! bit-identical for identical inputs.
//!
//! Pipeline: geometry -> category gating (entity toggle AND quote flag) ->
//! gallons -> labor and material cost -> rounding to displayed values.

use serde::{Deserialize, Serialize};

use crate::cost::{labor_cost, material_cost, round_currency};
use crate::entity::{EntityKind, PaintableEntity, SurfaceToggles};
use crate::geometry::{compute_geometry, Geometry, GeometryContext};
use crate::guard::{inches_to_feet, non_negative};
use crate::paint::{gallons, PaintGallons};
use crate::quote::{QuoteBuilder, QuoteInclusions};
use crate::settings::{resolve_coats, CalculationSettings, CoatOverrides, Coats, PricingSettings};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Immutable configuration snapshot for one computation.
///
/// Callers must build it from one consistent read of their settings; the
/// engine never mixes snapshots.
#[derive(Debug, Clone, Copy)]
pub struct EstimateContext<'a> {
    pub calculation: &'a CalculationSettings,
    pub pricing: &'a PricingSettings,
    pub quote_builder: &'a QuoteBuilder,
    pub project_coats: &'a CoatOverrides,
    pub default_wall_height: Option<f64>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Categories actually priced after combining entity and quote filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludedCategories {
    pub walls: bool,
    pub ceilings: bool,
    pub trim: bool,
    pub baseboards: bool,
    pub crown_moulding: bool,
    pub doors: bool,
    pub door_jambs: bool,
    pub windows: bool,
    pub closets: bool,
    pub stair_risers: bool,
    pub stair_handrail: bool,
    pub stair_spindles: bool,
    pub fireplace: bool,
    pub built_in: bool,
    pub primer: bool,
}

/// Quantities priced per category (zero for excluded categories).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantities {
    /// Wall area including closet interiors.
    pub wall_area: f64,
    /// Ceiling area including closet interiors.
    pub ceiling_area: f64,
    /// Baseboard linear feet including closet interiors.
    pub baseboard_lf: f64,
    pub crown_lf: f64,
    /// Every surface painted with trim paint, in sq ft.
    pub trim_area: f64,
    pub door_count: u32,
    pub window_count: u32,
    pub closet_count: u32,
    pub riser_count: u32,
    pub spindle_count: u32,
    pub handrail_lf: f64,
    pub fireplace_count: u32,
    pub built_in_area: f64,
    pub primer_area: f64,
}

/// Labor cost per line, before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborBreakdown {
    pub walls: f64,
    pub ceilings: f64,
    pub baseboards: f64,
    pub crown_moulding: f64,
    pub doors: f64,
    pub windows: f64,
    pub closets: f64,
    pub staircase: f64,
    pub fireplace: f64,
    pub built_in: f64,
    pub primer: f64,
}

impl LaborBreakdown {
    pub fn total(&self) -> f64 {
        self.walls
            + self.ceilings
            + self.baseboards
            + self.crown_moulding
            + self.doors
            + self.windows
            + self.closets
            + self.staircase
            + self.fireplace
            + self.built_in
            + self.primer
    }
}

impl std::ops::AddAssign for LaborBreakdown {
    fn add_assign(&mut self, o: Self) {
        self.walls += o.walls;
        self.ceilings += o.ceilings;
        self.baseboards += o.baseboards;
        self.crown_moulding += o.crown_moulding;
        self.doors += o.doors;
        self.windows += o.windows;
        self.closets += o.closets;
        self.staircase += o.staircase;
        self.fireplace += o.fireplace;
        self.built_in += o.built_in;
        self.primer += o.primer;
    }
}

/// Material cost per paint type (whole cans x price).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialBreakdown {
    pub wall: f64,
    pub ceiling: f64,
    pub trim: f64,
    pub door: f64,
    pub primer: f64,
}

impl MaterialBreakdown {
    pub fn total(&self) -> f64 {
        self.wall + self.ceiling + self.trim + self.door + self.primer
    }
}

impl std::ops::AddAssign for MaterialBreakdown {
    fn add_assign(&mut self, o: Self) {
        self.wall += o.wall;
        self.ceiling += o.ceiling;
        self.trim += o.trim;
        self.door += o.door;
        self.primer += o.primer;
    }
}

/// Values snapshotted onto an entity at save/import time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySnapshot {
    pub gallon_usage: f64,
    pub labor_total: f64,
    pub materials_total: f64,
    pub grand_total: f64,
}

/// Pricing result for one entity.
///
/// `*_cost` fields are raw and diagnostic only. Proposals, exports and
/// persisted totals use the `*_displayed` fields exclusively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub entity_id: EntityId,
    pub entity_name: String,
    pub kind: EntityKind,
    pub coats: Coats,
    pub included: IncludedCategories,
    pub geometry: Geometry,
    pub quantities: Quantities,
    pub gallons: PaintGallons,
    /// Whole gallons bought per paint type.
    pub purchased_gallons: PaintGallons,
    pub labor: LaborBreakdown,
    pub materials: MaterialBreakdown,
    pub labor_cost: f64,
    pub materials_cost: f64,
    pub total_cost: f64,
    pub labor_displayed: f64,
    pub materials_displayed: f64,
    pub total_displayed: f64,
    pub labor_hours: f64,
}

impl PricingSummary {
    /// The fields written back onto the entity by save and import.
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            gallon_usage: round_hundredths(self.gallons.total()),
            labor_total: self.labor_displayed,
            materials_total: self.materials_displayed,
            grand_total: self.total_displayed,
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    round_currency(value)
}

// ---------------------------------------------------------------------------
// Gating
// ---------------------------------------------------------------------------

fn room_categories(
    t: &SurfaceToggles,
    closets: bool,
    q: &QuoteInclusions,
) -> IncludedCategories {
    IncludedCategories {
        walls: t.walls && q.walls,
        ceilings: t.ceilings && q.ceilings,
        trim: t.trim && q.trim,
        baseboards: t.baseboard && q.baseboards,
        crown_moulding: t.crown_moulding && q.trim,
        doors: t.doors && q.doors,
        door_jambs: t.door_jambs && t.trim && q.trim,
        windows: t.windows && q.windows,
        closets: closets && q.closets,
        ..IncludedCategories::default()
    }
}

/// Combine an entity's own toggles with the quote's category flags (AND).
pub fn included_categories(
    entity: &PaintableEntity,
    quote: &QuoteBuilder,
    coats: &Coats,
) -> IncludedCategories {
    let q = &quote.include;
    let mut included = match entity {
        PaintableEntity::Room(r) => room_categories(&r.paint, r.include_closet_interiors, q),
        PaintableEntity::IrregularRoom(r) => {
            room_categories(&r.paint, r.include_closet_interiors, q)
        }
        PaintableEntity::Bathroom(b) => room_categories(&b.paint, false, q),
        PaintableEntity::Staircase(s) => IncludedCategories {
            stair_risers: s.paint.risers && q.staircases,
            stair_handrail: s.paint.handrail && q.staircases,
            stair_spindles: s.paint.spindles && q.staircases,
            ..IncludedCategories::default()
        },
        PaintableEntity::Fireplace(f) => IncludedCategories {
            fireplace: f.paint && q.fireplaces,
            ..IncludedCategories::default()
        },
        PaintableEntity::BuiltIn(b) => IncludedCategories {
            built_in: b.paint && q.built_ins,
            ..IncludedCategories::default()
        },
        PaintableEntity::BrickWallSurface(b) => IncludedCategories {
            walls: b.paint && q.walls,
            ..IncludedCategories::default()
        },
    };
    included.primer = coats.primer > 0 && (included.walls || included.ceilings);
    included
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Compute the pricing summary for one entity.
///
/// Total over its input domain: missing or invalid numbers degrade to zero
/// quantities, never to an error or a `NaN`.
pub fn summarize_entity(entity: &PaintableEntity, ctx: &EstimateContext<'_>) -> PricingSummary {
    let s = ctx.calculation;
    let p = ctx.pricing;
    let m = p.second_coat_labor_multiplier;

    let geometry = compute_geometry(
        entity,
        &GeometryContext::new(s, ctx.default_wall_height),
    );
    let coats = resolve_coats(&[entity.coats(), ctx.project_coats]);
    let inc = included_categories(entity, ctx.quote_builder, &coats);
    let g = &geometry;

    let when = |on: bool, value: f64| if on { value } else { 0.0 };
    let count_when = |on: bool, value: u32| if on { value } else { 0 };

    // -- quantities --
    let room_walls = when(inc.walls, g.wall_area);
    let closet_walls = when(inc.walls && inc.closets, g.closets.wall_area);
    let room_ceiling = when(inc.ceilings, g.ceiling_area);
    let closet_ceiling = when(inc.ceilings && inc.closets, g.closets.ceiling_area);
    let baseboard_lf = when(
        inc.baseboards,
        g.baseboard_lf + when(inc.closets, g.closets.baseboard_lf),
    );
    let crown_lf = when(inc.crown_moulding, g.crown_lf);
    let casing_area = when(
        inc.trim,
        g.window_trim_area + g.door_trim_area + g.opening_trim_area + g.closets.trim_area,
    );
    let jamb_area = when(inc.door_jambs, g.door_jamb_area);
    let stair_area = when(inc.stair_risers, g.stairs.riser_area)
        + when(inc.stair_handrail, g.stairs.handrail_area)
        + when(inc.stair_spindles, g.stairs.spindle_area);
    let fireplace_area = when(inc.fireplace, g.fireplace.surface_area + g.fireplace.trim_area);
    let built_in_area = when(inc.built_in, g.built_in_area);

    let trim_area = baseboard_lf * inches_to_feet(s.baseboard_width)
        + crown_lf * inches_to_feet(s.crown_moulding_width)
        + casing_area
        + jamb_area
        + stair_area
        + fireplace_area
        + built_in_area;

    let wall_area = room_walls + closet_walls;
    let ceiling_area = room_ceiling + closet_ceiling;
    let primer_area = when(inc.primer, wall_area + ceiling_area);

    let quantities = Quantities {
        wall_area,
        ceiling_area,
        baseboard_lf,
        crown_lf,
        trim_area: non_negative(trim_area),
        door_count: count_when(inc.doors, g.door_count),
        window_count: count_when(inc.windows, g.window_count),
        closet_count: count_when(inc.closets, g.closets.units),
        riser_count: count_when(inc.stair_risers, g.stairs.risers),
        spindle_count: count_when(inc.stair_spindles, g.stairs.spindles),
        handrail_lf: when(inc.stair_handrail, g.stairs.handrail_lf),
        fireplace_count: count_when(inc.fireplace, g.fireplace.units),
        built_in_area,
        primer_area,
    };
    let qt = &quantities;

    // -- paint --
    let paint = PaintGallons {
        wall: gallons(qt.wall_area, p.wall_coverage * g.wall_coverage_factor, coats.walls),
        ceiling: gallons(qt.ceiling_area, p.ceiling_coverage, coats.ceilings),
        trim: gallons(qt.trim_area, p.trim_coverage, coats.trim),
        door: when(inc.doors, gallons(g.door_face_area, p.door_coverage, coats.doors)),
        primer: gallons(qt.primer_area, p.primer_coverage, coats.primer),
    };

    // -- labor --
    let labor = LaborBreakdown {
        walls: labor_cost(room_walls, p.wall_labor_per_sqft, coats.walls, m),
        ceilings: labor_cost(room_ceiling, p.ceiling_labor_per_sqft, coats.ceilings, m),
        baseboards: labor_cost(qt.baseboard_lf, p.baseboard_labor_per_lf, coats.trim, m),
        crown_moulding: labor_cost(qt.crown_lf, p.crown_labor_per_lf, coats.trim, m),
        doors: labor_cost(f64::from(qt.door_count), p.door_labor_per_unit, coats.doors, m),
        windows: labor_cost(f64::from(qt.window_count), p.window_labor_per_unit, coats.trim, m),
        closets: labor_cost(
            f64::from(qt.closet_count),
            p.closet_labor_per_unit,
            coats.walls,
            m,
        ),
        staircase: labor_cost(f64::from(qt.riser_count), p.riser_labor_per_unit, coats.trim, m)
            + labor_cost(
                f64::from(qt.spindle_count),
                p.spindle_labor_per_unit,
                coats.trim,
                m,
            )
            + labor_cost(qt.handrail_lf, p.handrail_labor_per_lf, coats.trim, m),
        fireplace: labor_cost(
            f64::from(qt.fireplace_count),
            p.fireplace_labor_per_unit,
            coats.trim,
            m,
        ),
        built_in: labor_cost(qt.built_in_area, p.built_in_labor_per_sqft, coats.trim, m),
        primer: labor_cost(qt.primer_area, p.primer_labor_per_sqft, coats.primer, m),
    };

    // -- materials --
    let materials = MaterialBreakdown {
        wall: material_cost(paint.wall, p.wall_paint_per_gallon),
        ceiling: material_cost(paint.ceiling, p.ceiling_paint_per_gallon),
        trim: material_cost(paint.trim, p.trim_paint_per_gallon),
        door: material_cost(paint.door, p.door_paint_per_gallon),
        primer: material_cost(paint.primer, p.primer_per_gallon),
    };

    let labor_total = labor.total();
    let materials_total = materials.total();
    let total_cost = labor_total + materials_total;
    let labor_displayed = round_currency(labor_total);

    let summary = PricingSummary {
        entity_id: entity.id().to_string(),
        entity_name: entity.name().to_string(),
        kind: entity.kind(),
        coats,
        included: inc,
        geometry,
        quantities,
        purchased_gallons: paint.purchased(),
        gallons: paint,
        labor,
        materials,
        labor_cost: labor_total,
        materials_cost: materials_total,
        total_cost,
        labor_displayed,
        materials_displayed: round_currency(materials_total),
        total_displayed: round_currency(total_cost),
        labor_hours: labor_hours(labor_displayed, p.hourly_labor_rate),
    };

    tracing::debug!(
        entity_id = %summary.entity_id,
        kind = %summary.kind,
        total = summary.total_displayed,
        "Entity summarized",
    );
    summary
}

/// Express a labor amount as hours at the configured hourly rate.
pub fn labor_hours(labor: f64, hourly_rate: f64) -> f64 {
    if hourly_rate.is_finite() && hourly_rate > 0.0 {
        round_hundredths(non_negative(labor) / hourly_rate)
    } else {
        0.0
    }
}

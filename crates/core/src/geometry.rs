//! Entity geometry: paintable areas, linear footage and unit counts.
//!
//! Every calculator is a pure function of the entity, the calculation
//! settings and the effective default wall height. Missing or invalid inputs
//! never error; they simply measure as zero ("nothing to paint").
//!
//! Units: lengths are feet, areas square feet. Trim, casing, jamb, baseboard
//! and crown widths come from settings in inches and are converted here.

use serde::Serialize;

use crate::entity::{
    Bathroom, BrickWallSurface, BuiltIn, CeilingType, Fireplace, IrregularRoom, Opening,
    PaintableEntity, Room, Staircase,
};
use crate::guard::{dimension, inches_to_feet, non_negative, positive};
use crate::settings::CalculationSettings;

/// Wall height used when neither the entity nor the project supplies one.
pub const DEFAULT_WALL_HEIGHT: f64 = 8.0;

/// Ceiling slope multiplier for cathedral ceilings when the room width or
/// peak height is unknown.
pub const CATHEDRAL_FALLBACK_FACTOR: f64 = 1.3;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Closet interiors, modeled as fixed-depth cavities behind an opening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetGeometry {
    pub units: u32,
    pub wall_area: f64,
    pub ceiling_area: f64,
    pub baseboard_lf: f64,
    /// Casing around the closet openings (paintable trim, not interior).
    pub trim_area: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StairGeometry {
    pub risers: u32,
    pub riser_area: f64,
    pub handrail_lf: f64,
    pub handrail_area: f64,
    pub spindles: u32,
    pub spindle_area: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FireplaceGeometry {
    pub units: u32,
    pub surface_area: f64,
    pub trim_area: f64,
}

/// Quantities measured for one entity. Fields that do not apply to an
/// entity's shape stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Wall area before opening deductions.
    pub gross_wall_area: f64,
    /// Wall area after window, door, opening and fixture deductions.
    pub wall_area: f64,
    pub ceiling_area: f64,
    pub baseboard_lf: f64,
    pub crown_lf: f64,
    pub window_count: u32,
    pub door_count: u32,
    /// Both faces of every door slab.
    pub door_face_area: f64,
    pub window_trim_area: f64,
    pub door_trim_area: f64,
    pub door_jamb_area: f64,
    pub opening_trim_area: f64,
    pub closets: ClosetGeometry,
    pub stairs: StairGeometry,
    pub fireplace: FireplaceGeometry,
    pub built_in_area: f64,
    /// Fraction of nominal wall coverage achieved on this surface.
    pub wall_coverage_factor: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            gross_wall_area: 0.0,
            wall_area: 0.0,
            ceiling_area: 0.0,
            baseboard_lf: 0.0,
            crown_lf: 0.0,
            window_count: 0,
            door_count: 0,
            door_face_area: 0.0,
            window_trim_area: 0.0,
            door_trim_area: 0.0,
            door_jamb_area: 0.0,
            opening_trim_area: 0.0,
            closets: ClosetGeometry::default(),
            stairs: StairGeometry::default(),
            fireplace: FireplaceGeometry::default(),
            built_in_area: 0.0,
            wall_coverage_factor: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Inputs shared by every geometry calculator.
#[derive(Debug, Clone, Copy)]
pub struct GeometryContext<'a> {
    pub settings: &'a CalculationSettings,
    /// Wall height applied when the entity does not carry its own.
    pub default_wall_height: f64,
}

impl<'a> GeometryContext<'a> {
    pub fn new(settings: &'a CalculationSettings, default_wall_height: Option<f64>) -> Self {
        Self {
            settings,
            default_wall_height: positive(default_wall_height).unwrap_or(DEFAULT_WALL_HEIGHT),
        }
    }

    fn wall_height(&self, entity_height: Option<f64>) -> f64 {
        positive(entity_height).unwrap_or(self.default_wall_height)
    }
}

/// A shape that can be measured into paintable quantities.
pub trait Measure {
    fn measure(&self, ctx: &GeometryContext<'_>) -> Geometry;
}

/// Measure any entity variant.
pub fn compute_geometry(entity: &PaintableEntity, ctx: &GeometryContext<'_>) -> Geometry {
    match entity {
        PaintableEntity::Room(e) => e.measure(ctx),
        PaintableEntity::Bathroom(e) => e.measure(ctx),
        PaintableEntity::IrregularRoom(e) => e.measure(ctx),
        PaintableEntity::Staircase(e) => e.measure(ctx),
        PaintableEntity::Fireplace(e) => e.measure(ctx),
        PaintableEntity::BuiltIn(e) => e.measure(ctx),
        PaintableEntity::BrickWallSurface(e) => e.measure(ctx),
    }
}

// ---------------------------------------------------------------------------
// Shared room rules
// ---------------------------------------------------------------------------

/// Window, door and opening inputs common to every room-like shape.
struct Openings<'a> {
    windows: u32,
    doors: u32,
    generic: &'a [Opening],
    single_closets: u32,
    double_closets: u32,
    /// Extra non-painted wall area (bathroom fixtures).
    fixture_area: f64,
}

/// Apply deductions, trim additions, baseboard and crown rules to a room
/// shell of the given perimeter and gross wall area.
///
/// A shell without walls measures as empty: openings, casings and closets
/// only exist inside a wall.
fn room_shell(
    perimeter: f64,
    gross_wall_area: f64,
    closet_height: f64,
    openings: &Openings<'_>,
    s: &CalculationSettings,
) -> Geometry {
    if non_negative(perimeter) <= 0.0 && non_negative(gross_wall_area) <= 0.0 {
        return Geometry::default();
    }

    let windows = f64::from(openings.windows);
    let doors = f64::from(openings.doors);

    let door_height = dimension(Some(s.door_height));
    let door_width = dimension(Some(s.door_width));
    let window_width = dimension(Some(s.window_width));
    let window_height = dimension(Some(s.window_height));
    let door_trim = inches_to_feet(dimension(Some(s.door_trim_width)));
    let window_trim = inches_to_feet(dimension(Some(s.window_trim_width)));
    let jamb = inches_to_feet(dimension(Some(s.door_jamb_width)));

    // Door casing and jamb run up both sides and across the head.
    let door_run = 2.0 * door_height + door_width;

    let mut deductions = windows * window_width * window_height + doors * door_height * door_width;
    let mut baseboard_allowance = doors * (door_width + 2.0 * door_trim);
    let mut opening_trim_area = 0.0;

    for opening in openings.generic {
        let count = f64::from(opening.count);
        let width = positive(opening.width).unwrap_or(dimension(Some(s.opening_width)));
        let height = positive(opening.height).unwrap_or(dimension(Some(s.opening_height)));
        let trim = inches_to_feet(
            positive(opening.trim_width).unwrap_or(dimension(Some(s.opening_trim_width))),
        );
        deductions += count * width * height;
        baseboard_allowance += count * (width + 2.0 * trim);
        opening_trim_area += count * trim * (2.0 * height + width);
    }

    let closets = closet_geometry(
        openings.single_closets,
        openings.double_closets,
        closet_height,
        s,
    );
    let single_width = dimension(Some(s.single_closet_width));
    let double_width = dimension(Some(s.double_closet_width));
    let single_trim = inches_to_feet(dimension(Some(s.single_closet_trim_width)));
    let double_trim = inches_to_feet(dimension(Some(s.double_closet_trim_width)));
    let singles = f64::from(openings.single_closets);
    let doubles = f64::from(openings.double_closets);
    deductions += (singles * single_width + doubles * double_width) * door_height;
    baseboard_allowance +=
        singles * (single_width + 2.0 * single_trim) + doubles * (double_width + 2.0 * double_trim);

    deductions += dimension(Some(openings.fixture_area));

    Geometry {
        gross_wall_area: non_negative(gross_wall_area),
        wall_area: non_negative(gross_wall_area - deductions),
        baseboard_lf: non_negative(perimeter - baseboard_allowance),
        crown_lf: non_negative(perimeter),
        window_count: openings.windows,
        door_count: openings.doors,
        door_face_area: doors * door_height * door_width * 2.0,
        window_trim_area: windows * window_trim * 2.0 * (window_width + window_height),
        door_trim_area: doors * door_trim * door_run,
        door_jamb_area: doors * jamb * door_run,
        opening_trim_area,
        closets,
        ..Geometry::default()
    }
}

/// Closet cavities: each unit adds `(opening + 2 x depth) x height` of wall,
/// `opening x depth` of ceiling and `opening + 2 x depth` of baseboard.
pub fn closet_geometry(
    single: u32,
    double: u32,
    height: f64,
    s: &CalculationSettings,
) -> ClosetGeometry {
    let depth = dimension(Some(s.closet_cavity_depth));
    let height = non_negative(height);
    let door_height = dimension(Some(s.door_height));

    let unit = |count: u32, width: f64, trim_inches: f64| {
        let n = f64::from(count);
        let width = dimension(Some(width));
        let trim = inches_to_feet(dimension(Some(trim_inches)));
        (
            n * (width + 2.0 * depth) * height,
            n * width * depth,
            n * (width + 2.0 * depth),
            n * trim * (2.0 * door_height + width),
        )
    };

    let (sw, sc, sb, st) = unit(single, s.single_closet_width, s.single_closet_trim_width);
    let (dw, dc, db, dt) = unit(double, s.double_closet_width, s.double_closet_trim_width);

    ClosetGeometry {
        units: single + double,
        wall_area: sw + dw,
        ceiling_area: sc + dc,
        baseboard_lf: sb + db,
        trim_area: st + dt,
    }
}

/// Ceiling area: manual area when positive, otherwise length x width.
fn flat_ceiling(length: f64, width: f64, manual_area: Option<f64>) -> f64 {
    positive(manual_area).unwrap_or(length * width)
}

/// Slope multiplier for a cathedral ceiling rising from `height` to `peak`
/// across a span of `width`.
pub fn cathedral_factor(width: f64, height: f64, peak: Option<f64>) -> f64 {
    match positive(peak) {
        Some(peak) if width > 0.0 => {
            let rise = (peak - height).max(0.0);
            let run = width / 2.0;
            (1.0 + (rise / run).powi(2)).sqrt()
        }
        _ => CATHEDRAL_FALLBACK_FACTOR,
    }
}

fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    if length > 0.0 && width > 0.0 {
        2.0 * (length + width)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

impl Measure for Room {
    fn measure(&self, ctx: &GeometryContext<'_>) -> Geometry {
        let length = dimension(self.length);
        let width = dimension(self.width);
        let height = ctx.wall_height(self.height);
        let perimeter = rectangle_perimeter(length, width);

        let (wall_height, ceiling_area) = match self.ceiling_type {
            CeilingType::Flat => (height, flat_ceiling(length, width, self.manual_area)),
            CeilingType::Cathedral => {
                let peak = positive(self.cathedral_peak_height).filter(|p| *p > height);
                let wall_height = peak.map_or(height, |p| (height + p) / 2.0);
                let factor = cathedral_factor(width, height, self.cathedral_peak_height);
                (wall_height, flat_ceiling(length, width, self.manual_area) * factor)
            }
        };

        let mut geometry = room_shell(
            perimeter,
            perimeter * wall_height,
            height,
            &Openings {
                windows: self.window_count,
                doors: self.door_count,
                generic: &self.openings,
                single_closets: self.single_closets,
                double_closets: self.double_closets,
                fixture_area: 0.0,
            },
            ctx.settings,
        );
        geometry.ceiling_area = non_negative(ceiling_area);
        geometry
    }
}

impl Measure for Bathroom {
    fn measure(&self, ctx: &GeometryContext<'_>) -> Geometry {
        let length = dimension(self.length);
        let width = dimension(self.width);
        let height = ctx.wall_height(self.height);
        let perimeter = rectangle_perimeter(length, width);

        let mut geometry = room_shell(
            perimeter,
            perimeter * height,
            height,
            &Openings {
                windows: self.window_count,
                doors: self.door_count,
                generic: &[],
                single_closets: 0,
                double_closets: 0,
                fixture_area: dimension(self.fixture_wall_area),
            },
            ctx.settings,
        );
        geometry.ceiling_area = non_negative(flat_ceiling(length, width, self.manual_area));
        geometry
    }
}

impl Measure for IrregularRoom {
    fn measure(&self, ctx: &GeometryContext<'_>) -> Geometry {
        let room_height = ctx.wall_height(self.height);

        let perimeter: f64 = self.walls.iter().map(|w| dimension(w.width)).sum();
        let gross: f64 = self
            .walls
            .iter()
            .map(|w| {
                positive(w.area).unwrap_or_else(|| {
                    dimension(w.width) * positive(w.height).unwrap_or(room_height)
                })
            })
            .sum();

        let mut geometry = room_shell(
            perimeter,
            gross,
            room_height,
            &Openings {
                windows: self.window_count,
                doors: self.door_count,
                generic: &self.openings,
                single_closets: self.single_closets,
                double_closets: self.double_closets,
                fixture_area: 0.0,
            },
            ctx.settings,
        );
        geometry.ceiling_area = positive(self.manual_area).unwrap_or(0.0);
        geometry
    }
}

impl Measure for Staircase {
    fn measure(&self, ctx: &GeometryContext<'_>) -> Geometry {
        let s = ctx.settings;
        let riser_height = positive(self.riser_height).unwrap_or(dimension(Some(s.riser_height)));
        let stair_width = dimension(self.stair_width);
        let handrail_lf = dimension(self.handrail_length);

        Geometry {
            stairs: StairGeometry {
                risers: self.riser_count,
                riser_area: f64::from(self.riser_count) * stair_width * riser_height,
                handrail_lf,
                handrail_area: handrail_lf * inches_to_feet(dimension(Some(s.handrail_width))),
                spindles: self.spindle_count,
                spindle_area: f64::from(self.spindle_count) * dimension(Some(s.spindle_area)),
            },
            ..Geometry::default()
        }
    }
}

impl Measure for Fireplace {
    fn measure(&self, ctx: &GeometryContext<'_>) -> Geometry {
        let face = dimension(self.width) * dimension(self.height);
        let mantel = self.mantel.as_ref().map_or(0.0, |m| {
            dimension(m.length) * (dimension(m.depth) + dimension(m.thickness))
        });
        let trim_width = inches_to_feet(
            positive(self.trim_width).unwrap_or(dimension(Some(ctx.settings.door_trim_width))),
        );

        Geometry {
            fireplace: FireplaceGeometry {
                units: 1,
                surface_area: face + mantel,
                trim_area: dimension(self.trim_length) * trim_width,
            },
            ..Geometry::default()
        }
    }
}

impl Measure for BuiltIn {
    fn measure(&self, _ctx: &GeometryContext<'_>) -> Geometry {
        let w = dimension(self.width);
        let h = dimension(self.height);
        let d = dimension(self.depth);
        // Six faces of the carcass plus a width-per-shelf allowance.
        let area = 2.0 * (w * h) + 2.0 * (w * d) + 2.0 * (h * d) + f64::from(self.shelf_count) * w;

        Geometry {
            built_in_area: area,
            ..Geometry::default()
        }
    }
}

impl Measure for BrickWallSurface {
    fn measure(&self, _ctx: &GeometryContext<'_>) -> Geometry {
        let area = positive(self.manual_area)
            .unwrap_or_else(|| dimension(self.width) * dimension(self.height));

        Geometry {
            gross_wall_area: area,
            wall_area: area,
            wall_coverage_factor: self.surface.coverage_factor(),
            ..Geometry::default()
        }
    }
}

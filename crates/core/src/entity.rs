//! Paintable entities: the closed set of structures a project can price.
//!
//! Each variant carries only the inputs relevant to its shape. Geometry is
//! dispatched through [`crate::geometry::Measure`] rather than probing
//! optional fields.

use serde::{Deserialize, Serialize};

use crate::settings::CoatOverrides;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Shared toggles
// ---------------------------------------------------------------------------

/// "Paint this category" toggles carried by room-like entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceToggles {
    pub walls: bool,
    pub ceilings: bool,
    pub trim: bool,
    pub baseboard: bool,
    pub crown_moulding: bool,
    pub windows: bool,
    pub doors: bool,
    pub door_jambs: bool,
}

impl Default for SurfaceToggles {
    fn default() -> Self {
        Self {
            walls: true,
            ceilings: true,
            trim: true,
            baseboard: true,
            crown_moulding: false,
            windows: true,
            doors: true,
            door_jambs: false,
        }
    }
}

/// Toggles for the parts of a staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StairToggles {
    pub risers: bool,
    pub handrail: bool,
    pub spindles: bool,
}

impl Default for StairToggles {
    fn default() -> Self {
        Self {
            risers: true,
            handrail: true,
            spindles: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Room building blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CeilingType {
    #[default]
    Flat,
    Cathedral,
}

/// A generic wall opening (archway, pass-through). Dimensions fall back to
/// the calculation settings when not given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    #[serde(default = "one")]
    pub count: u32,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    /// Casing width in inches.
    #[serde(default)]
    pub trim_width: Option<f64>,
}

fn one() -> u32 {
    1
}

/// One independently measured wall of an irregular room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallSegment {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Directly entered area; overrides width x height when positive.
    pub area: Option<f64>,
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Room {
    pub id: EntityId,
    pub name: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Floor area override used for the ceiling when positive.
    pub manual_area: Option<f64>,
    pub ceiling_type: CeilingType,
    pub cathedral_peak_height: Option<f64>,
    pub window_count: u32,
    pub door_count: u32,
    pub single_closets: u32,
    pub double_closets: u32,
    /// Whether closet interiors are added to the quote at all.
    pub include_closet_interiors: bool,
    pub openings: Vec<Opening>,
    pub paint: SurfaceToggles,
    pub coats: CoatOverrides,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            name: String::new(),
            length: None,
            width: None,
            height: None,
            manual_area: None,
            ceiling_type: CeilingType::Flat,
            cathedral_peak_height: None,
            window_count: 0,
            door_count: 0,
            single_closets: 0,
            double_closets: 0,
            include_closet_interiors: true,
            openings: Vec::new(),
            paint: SurfaceToggles::default(),
            coats: CoatOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bathroom {
    pub id: EntityId,
    pub name: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub manual_area: Option<f64>,
    pub window_count: u32,
    pub door_count: u32,
    /// Tile, vanity and mirror area that is not painted.
    pub fixture_wall_area: Option<f64>,
    pub paint: SurfaceToggles,
    pub coats: CoatOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IrregularRoom {
    pub id: EntityId,
    pub name: String,
    pub walls: Vec<WallSegment>,
    /// Default height for segments that do not carry their own.
    pub height: Option<f64>,
    /// Floor area, used for the ceiling.
    pub manual_area: Option<f64>,
    pub window_count: u32,
    pub door_count: u32,
    pub single_closets: u32,
    pub double_closets: u32,
    pub include_closet_interiors: bool,
    pub openings: Vec<Opening>,
    pub paint: SurfaceToggles,
    pub coats: CoatOverrides,
}

impl Default for IrregularRoom {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            name: String::new(),
            walls: Vec::new(),
            height: None,
            manual_area: None,
            window_count: 0,
            door_count: 0,
            single_closets: 0,
            double_closets: 0,
            include_closet_interiors: true,
            openings: Vec::new(),
            paint: SurfaceToggles::default(),
            coats: CoatOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Staircase {
    pub id: EntityId,
    pub name: String,
    pub riser_count: u32,
    pub stair_width: Option<f64>,
    /// Overrides the calculation-settings riser height (feet).
    pub riser_height: Option<f64>,
    pub handrail_length: Option<f64>,
    pub spindle_count: u32,
    pub paint: StairToggles,
    pub coats: CoatOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mantel {
    pub length: Option<f64>,
    pub depth: Option<f64>,
    pub thickness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fireplace {
    pub id: EntityId,
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub mantel: Option<Mantel>,
    pub trim_length: Option<f64>,
    /// Trim width in inches; defaults to the door casing width.
    pub trim_width: Option<f64>,
    pub paint: bool,
    pub coats: CoatOverrides,
}

impl Default for Fireplace {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            name: String::new(),
            width: None,
            height: None,
            mantel: None,
            trim_length: None,
            trim_width: None,
            paint: true,
            coats: CoatOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuiltIn {
    pub id: EntityId,
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub shelf_count: u32,
    pub paint: bool,
    pub coats: CoatOverrides,
}

impl Default for BuiltIn {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            name: String::new(),
            width: None,
            height: None,
            depth: None,
            shelf_count: 0,
            paint: true,
            coats: CoatOverrides::default(),
        }
    }
}

/// Texture of a brick or panelled wall surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceTexture {
    #[default]
    Brick,
    Panel,
}

impl SurfaceTexture {
    /// Fraction of the nominal coverage rate achieved on this texture.
    pub fn coverage_factor(self) -> f64 {
        match self {
            Self::Brick => 0.6,
            Self::Panel => 0.85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrickWallSurface {
    pub id: EntityId,
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub manual_area: Option<f64>,
    pub surface: SurfaceTexture,
    pub paint: bool,
    pub coats: CoatOverrides,
}

impl Default for BrickWallSurface {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            name: String::new(),
            width: None,
            height: None,
            manual_area: None,
            surface: SurfaceTexture::Brick,
            paint: true,
            coats: CoatOverrides::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// The tagged union
// ---------------------------------------------------------------------------

/// Discriminant of [`PaintableEntity`], used in summaries and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Room,
    Bathroom,
    IrregularRoom,
    Staircase,
    Fireplace,
    BuiltIn,
    BrickWallSurface,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Bathroom => "bathroom",
            Self::IrregularRoom => "irregular_room",
            Self::Staircase => "staircase",
            Self::Fireplace => "fireplace",
            Self::BuiltIn => "built_in",
            Self::BrickWallSurface => "brick_wall_surface",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any paintable structure on a project, tagged by `kind` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PaintableEntity {
    Room(Room),
    Bathroom(Bathroom),
    IrregularRoom(IrregularRoom),
    Staircase(Staircase),
    Fireplace(Fireplace),
    BuiltIn(BuiltIn),
    BrickWallSurface(BrickWallSurface),
}

impl PaintableEntity {
    pub fn id(&self) -> &str {
        match self {
            Self::Room(e) => &e.id,
            Self::Bathroom(e) => &e.id,
            Self::IrregularRoom(e) => &e.id,
            Self::Staircase(e) => &e.id,
            Self::Fireplace(e) => &e.id,
            Self::BuiltIn(e) => &e.id,
            Self::BrickWallSurface(e) => &e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Room(e) => &e.name,
            Self::Bathroom(e) => &e.name,
            Self::IrregularRoom(e) => &e.name,
            Self::Staircase(e) => &e.name,
            Self::Fireplace(e) => &e.name,
            Self::BuiltIn(e) => &e.name,
            Self::BrickWallSurface(e) => &e.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Room(_) => EntityKind::Room,
            Self::Bathroom(_) => EntityKind::Bathroom,
            Self::IrregularRoom(_) => EntityKind::IrregularRoom,
            Self::Staircase(_) => EntityKind::Staircase,
            Self::Fireplace(_) => EntityKind::Fireplace,
            Self::BuiltIn(_) => EntityKind::BuiltIn,
            Self::BrickWallSurface(_) => EntityKind::BrickWallSurface,
        }
    }

    /// Entity-level coat overrides (the most specific coat layer).
    pub fn coats(&self) -> &CoatOverrides {
        match self {
            Self::Room(e) => &e.coats,
            Self::Bathroom(e) => &e.coats,
            Self::IrregularRoom(e) => &e.coats,
            Self::Staircase(e) => &e.coats,
            Self::Fireplace(e) => &e.coats,
            Self::BuiltIn(e) => &e.coats,
            Self::BrickWallSurface(e) => &e.coats,
        }
    }
}

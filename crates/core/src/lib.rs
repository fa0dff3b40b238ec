//! Brushquote pricing and quantity engine.
//!
//! Turns paintable entities (rooms, bathrooms, staircases, fireplaces and so
//! on) into areas, gallons, labor and material costs, then aggregates them
//! under a project's authoritative quote:
//!
//! - [`geometry`]: per-variant quantity calculators.
//! - [`paint`] and [`cost`]: gallons, whole-can materials, coat-aware labor.
//! - [`summary::summarize_entity`]: the canonical per-entity entry point.
//! - [`aggregate::summarize_project`]: project totals for preview, save and
//!   import alike.
//! - [`options`]: Good/Better/Best wall-paint projections.
//!
//! Everything is synchronous and pure. Configuration arrives as immutable
//! snapshots per call; persistence belongs to the caller.

pub mod aggregate;
pub mod cost;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod guard;
pub mod import;
pub mod options;
pub mod paint;
pub mod quote;
pub mod settings;
pub mod summary;
pub mod types;

pub use aggregate::{preview_entity, summarize_project, ProjectSummary};
pub use entity::PaintableEntity;
pub use error::CoreError;
pub use quote::{Project, QuoteBuilder};
pub use settings::{CalculationSettings, PricingSettings};
pub use summary::{summarize_entity, PricingSummary};

//! Quotes, quote builders and the project that owns them.
//!
//! [`Project::resolve_quote_builder`] is the single place that decides which
//! builder is authoritative. Preview, save and import all go through it, so
//! the three can never disagree about filters.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::settings::CoatOverrides;
use crate::types::{EntityId, ProjectId, QuoteId};

/// Id given to the quote synthesized from a legacy bare builder.
pub const LEGACY_QUOTE_ID: &str = "legacy";

/// Name of a freshly constructed default builder.
pub const DEFAULT_QUOTE_NAME: &str = "Standard";

// ---------------------------------------------------------------------------
// Paint tiers
// ---------------------------------------------------------------------------

/// A Good/Better/Best paint tier that overrides the wall-paint price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintOption {
    pub id: String,
    pub name: String,
    /// Wall paint price per gallon for this tier; `None` keeps the base price.
    #[serde(default)]
    pub wall_paint_price: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Quote builder
// ---------------------------------------------------------------------------

/// Category inclusion flags of a quote. All default to included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteInclusions {
    pub walls: bool,
    pub ceilings: bool,
    pub trim: bool,
    pub doors: bool,
    pub windows: bool,
    pub baseboards: bool,
    pub closets: bool,
    pub staircases: bool,
    pub fireplaces: bool,
    pub built_ins: bool,
}

impl Default for QuoteInclusions {
    fn default() -> Self {
        Self {
            walls: true,
            ceilings: true,
            trim: true,
            doors: true,
            windows: true,
            baseboards: true,
            closets: true,
            staircases: true,
            fireplaces: true,
            built_ins: true,
        }
    }
}

/// A named filter over which categories and entities a quote prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteBuilder {
    pub name: String,
    #[serde(flatten)]
    pub include: QuoteInclusions,
    /// Restricts participation to these entities; `None` means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_room_ids: Option<BTreeSet<EntityId>>,
    pub show_paint_options_in_proposal: bool,
    pub paint_options: Vec<PaintOption>,
}

impl Default for QuoteBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_QUOTE_NAME.to_string(),
            include: QuoteInclusions::default(),
            included_room_ids: None,
            show_paint_options_in_proposal: false,
            paint_options: Vec::new(),
        }
    }
}

impl QuoteBuilder {
    /// Whether an entity participates in this quote at all.
    pub fn includes_entity(&self, id: &str) -> bool {
        self.included_room_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(id))
    }
}

// ---------------------------------------------------------------------------
// Quotes & projects
// ---------------------------------------------------------------------------

/// Cached totals of a quote, written by the save path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub labor: f64,
    pub materials: f64,
    pub grand_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub quote_builder: QuoteBuilder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<QuoteTotals>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub quotes: Vec<Quote>,
    pub active_quote_id: Option<QuoteId>,
    /// Legacy single builder. Only read by migration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_builder: Option<QuoteBuilder>,
    /// Project-level coat defaults (between entity overrides and globals).
    pub coat_defaults: CoatOverrides,
    /// Wall height for entities that do not specify one.
    pub default_wall_height: Option<f64>,
}

/// Where the authoritative builder came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "quoteId", rename_all = "camelCase")]
pub enum QuoteSource {
    /// The quote named by `active_quote_id`.
    Active(QuoteId),
    /// The active id was missing or dangling; the first quote was used.
    FirstAvailable(QuoteId),
    /// An unmigrated legacy builder.
    Legacy,
    /// Nothing configured; a fresh default builder.
    Default,
}

impl QuoteSource {
    pub fn quote_id(&self) -> Option<&str> {
        match self {
            Self::Active(id) | Self::FirstAvailable(id) => Some(id),
            Self::Legacy | Self::Default => None,
        }
    }
}

/// The outcome of builder resolution.
#[derive(Debug, Clone)]
pub struct ResolvedQuote<'a> {
    pub source: QuoteSource,
    pub builder: Cow<'a, QuoteBuilder>,
}

impl Project {
    /// Resolve the authoritative quote builder.
    ///
    /// Order: the active quote, then the first available quote, then a legacy
    /// bare builder, then a freshly constructed default.
    pub fn resolve_quote_builder(&self) -> ResolvedQuote<'_> {
        if let Some(active_id) = &self.active_quote_id {
            if let Some(quote) = self.quotes.iter().find(|q| &q.id == active_id) {
                return ResolvedQuote {
                    source: QuoteSource::Active(quote.id.clone()),
                    builder: Cow::Borrowed(&quote.quote_builder),
                };
            }
        }

        if let Some(first) = self.quotes.first() {
            tracing::warn!(
                project_id = %self.id,
                active_quote_id = ?self.active_quote_id,
                fallback_quote_id = %first.id,
                "Active quote not found, falling back to first quote",
            );
            return ResolvedQuote {
                source: QuoteSource::FirstAvailable(first.id.clone()),
                builder: Cow::Borrowed(&first.quote_builder),
            };
        }

        if let Some(legacy) = &self.quote_builder {
            tracing::warn!(project_id = %self.id, "Using unmigrated legacy quote builder");
            return ResolvedQuote {
                source: QuoteSource::Legacy,
                builder: Cow::Borrowed(legacy),
            };
        }

        ResolvedQuote {
            source: QuoteSource::Default,
            builder: Cow::Owned(QuoteBuilder::default()),
        }
    }

    /// Wrap a legacy bare builder into a single active quote.
    ///
    /// Idempotent: a project that already has quotes only loses its stale
    /// bare builder, and a migrated project is left unchanged. Returns
    /// whether anything changed.
    pub fn migrate_legacy_quote_builder(&mut self) -> bool {
        let Some(legacy) = self.quote_builder.take() else {
            return false;
        };

        if self.quotes.is_empty() {
            tracing::info!(project_id = %self.id, "Migrating legacy quote builder");
            self.quotes.push(Quote {
                id: LEGACY_QUOTE_ID.to_string(),
                title: legacy.name.clone(),
                quote_builder: legacy,
                totals: None,
            });
            self.active_quote_id = Some(LEGACY_QUOTE_ID.to_string());
        } else {
            tracing::debug!(project_id = %self.id, "Dropping legacy builder; quotes already present");
        }
        true
    }

    /// Mutable access to the quote the resolver would pick, if any.
    pub fn resolved_quote_mut(&mut self) -> Option<&mut Quote> {
        let index = self
            .active_quote_id
            .as_ref()
            .and_then(|id| self.quotes.iter().position(|q| &q.id == id))
            .or(if self.quotes.is_empty() { None } else { Some(0) })?;
        self.quotes.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: &str, name: &str) -> Quote {
        Quote {
            id: id.to_string(),
            title: name.to_string(),
            quote_builder: QuoteBuilder {
                name: name.to_string(),
                ..Default::default()
            },
            totals: None,
        }
    }

    // -- resolution order --

    #[test]
    fn active_quote_wins() {
        let project = Project {
            quotes: vec![quote("a", "A"), quote("b", "B")],
            active_quote_id: Some("b".into()),
            quote_builder: Some(QuoteBuilder::default()),
            ..Default::default()
        };
        let resolved = project.resolve_quote_builder();
        assert_eq!(resolved.source, QuoteSource::Active("b".into()));
        assert_eq!(resolved.builder.name, "B");
    }

    #[test]
    fn dangling_active_id_falls_back_to_first_quote() {
        let project = Project {
            quotes: vec![quote("a", "A"), quote("b", "B")],
            active_quote_id: Some("deleted".into()),
            ..Default::default()
        };
        let resolved = project.resolve_quote_builder();
        assert_eq!(resolved.source, QuoteSource::FirstAvailable("a".into()));
        assert_eq!(resolved.builder.name, "A");
    }

    #[test]
    fn legacy_builder_used_when_no_quotes() {
        let project = Project {
            quote_builder: Some(QuoteBuilder {
                name: "Old".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let resolved = project.resolve_quote_builder();
        assert_eq!(resolved.source, QuoteSource::Legacy);
        assert_eq!(resolved.builder.name, "Old");
    }

    #[test]
    fn empty_project_gets_default_builder() {
        let project = Project::default();
        let resolved = project.resolve_quote_builder();
        assert_eq!(resolved.source, QuoteSource::Default);
        assert_eq!(*resolved.builder, QuoteBuilder::default());
        assert_eq!(resolved.source.quote_id(), None);
    }

    // -- migration --

    #[test]
    fn migration_wraps_legacy_builder() {
        let mut project = Project {
            quote_builder: Some(QuoteBuilder {
                name: "Old".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(project.migrate_legacy_quote_builder());
        assert!(project.quote_builder.is_none());
        assert_eq!(project.quotes.len(), 1);
        assert_eq!(project.active_quote_id.as_deref(), Some(LEGACY_QUOTE_ID));
        assert_eq!(
            project.resolve_quote_builder().source,
            QuoteSource::Active(LEGACY_QUOTE_ID.into())
        );
    }

    #[test]
    fn migration_is_idempotent() {
        let mut project = Project {
            quote_builder: Some(QuoteBuilder::default()),
            ..Default::default()
        };
        project.migrate_legacy_quote_builder();
        let once = project.clone();
        assert!(!project.migrate_legacy_quote_builder());
        assert_eq!(project, once);
    }

    #[test]
    fn migration_keeps_existing_quotes() {
        let mut project = Project {
            quotes: vec![quote("a", "A")],
            active_quote_id: Some("a".into()),
            quote_builder: Some(QuoteBuilder::default()),
            ..Default::default()
        };
        assert!(project.migrate_legacy_quote_builder());
        assert_eq!(project.quotes.len(), 1);
        assert_eq!(project.quotes[0].id, "a");
        assert!(project.quote_builder.is_none());
    }

    // -- builder --

    #[test]
    fn all_entities_included_by_default() {
        assert!(QuoteBuilder::default().includes_entity("anything"));
    }

    #[test]
    fn explicit_ids_restrict_entities() {
        let builder = QuoteBuilder {
            included_room_ids: Some(["r1".to_string()].into_iter().collect()),
            ..Default::default()
        };
        assert!(builder.includes_entity("r1"));
        assert!(!builder.includes_entity("r2"));
    }

    #[test]
    fn builder_flags_deserialize_flat() {
        let builder: QuoteBuilder =
            serde_json::from_str(r#"{"name": "Walls only", "ceilings": false, "trim": false}"#)
                .unwrap();
        assert!(builder.include.walls);
        assert!(!builder.include.ceilings);
        assert!(!builder.include.trim);
        assert!(builder.included_room_ids.is_none());
    }

    #[test]
    fn resolved_quote_mut_follows_resolution() {
        let mut project = Project {
            quotes: vec![quote("a", "A"), quote("b", "B")],
            active_quote_id: Some("gone".into()),
            ..Default::default()
        };
        assert_eq!(project.resolved_quote_mut().map(|q| q.id.clone()), Some("a".into()));
        project.active_quote_id = Some("b".into());
        assert_eq!(project.resolved_quote_mut().map(|q| q.id.clone()), Some("b".into()));
    }
}

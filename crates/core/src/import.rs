//! Project import from an external JSON document.
//!
//! The document is `{ "project": {...}, "entities": [...] }`. Import parses
//! it, migrates a legacy quote builder, then computes snapshots through the
//! same [`summarize_project`] the preview and save paths use.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::aggregate::{
    project_snapshot, summarize_project, validate_entity_count, ProjectSummary,
};
use crate::entity::PaintableEntity;
use crate::error::CoreError;
use crate::quote::Project;
use crate::settings::{CalculationSettings, PricingSettings};
use crate::summary::EntitySnapshot;

/// The external import document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocument {
    pub project: Project,
    #[serde(default)]
    pub entities: Vec<PaintableEntity>,
}

/// An entity with the snapshot fields the store writes alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedEntity {
    #[serde(flatten)]
    pub entity: PaintableEntity,
    pub snapshot: EntitySnapshot,
}

/// Result of an import, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedProject {
    /// The project after migration, with totals cached on the resolved quote.
    pub project: Project,
    pub entities: Vec<ImportedEntity>,
    pub summary: ProjectSummary,
    pub migrated_legacy_quote: bool,
}

/// Parse and import a JSON document.
pub fn import_project_json(
    json: &str,
    calculation: &CalculationSettings,
    pricing: &PricingSettings,
) -> Result<ImportedProject, CoreError> {
    let document: ImportDocument = serde_json::from_str(json)
        .map_err(|e| CoreError::Import(format!("Malformed project document: {e}")))?;
    import_project(document, calculation, pricing)
}

/// Import an already parsed document.
pub fn import_project(
    document: ImportDocument,
    calculation: &CalculationSettings,
    pricing: &PricingSettings,
) -> Result<ImportedProject, CoreError> {
    let ImportDocument {
        mut project,
        entities,
    } = document;

    validate_entities(&entities)?;

    let migrated_legacy_quote = project.migrate_legacy_quote_builder();
    let summary = summarize_project(&project, &entities, calculation, pricing);
    let snapshot = project_snapshot(&entities, &summary);

    if let Some(quote) = project.resolved_quote_mut() {
        quote.totals = Some(snapshot.quote_totals);
    }

    let entities = entities
        .into_iter()
        .map(|entity| {
            let snapshot = snapshot
                .entities
                .get(entity.id())
                .copied()
                .unwrap_or_default();
            ImportedEntity { entity, snapshot }
        })
        .collect();

    tracing::info!(
        project_id = %project.id,
        entities = summary.entities.len(),
        migrated_legacy_quote,
        grand_total = summary.grand_total,
        "Project imported",
    );

    Ok(ImportedProject {
        project,
        entities,
        summary,
        migrated_legacy_quote,
    })
}

/// Reject documents the store could not key consistently.
fn validate_entities(entities: &[PaintableEntity]) -> Result<(), CoreError> {
    validate_entity_count(entities.len())?;

    let mut seen = HashSet::new();
    for entity in entities {
        let id = entity.id();
        if id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "A {} entity has an empty id",
                entity.kind()
            )));
        }
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!("Duplicate entity id: {id}")));
        }
    }
    Ok(())
}

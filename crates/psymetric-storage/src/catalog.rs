//! Reference-data catalog: scales, normative tables and cut-points in one
//! JSON file.
//!
//! Files carry a `catalog_version`; older files are migrated on load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use psymetric_core::models::cut_point::CutPointRecord;
use psymetric_core::models::norms::NormativeRecord;
use psymetric_core::models::scale::{
    ItemDefinition, ResponseType, ScaleDefinition, TargetPopulation, TotalPolicy,
};
use psymetric_scoring::error::ScoringError;
use psymetric_scoring::normalize::parse_response_type;
use psymetric_scoring::validate::validate_scale;

use crate::error::StorageError;

/// Current catalog version. Bump this when changing the file shape.
/// Each bump requires a corresponding step in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Format version. Missing or 0 = legacy export.
    #[serde(default)]
    pub catalog_version: u32,
    #[serde(default)]
    pub scales: Vec<ScaleRecord>,
    #[serde(default)]
    pub norms: Vec<NormativeRecord>,
    #[serde(default)]
    pub cut_points: Vec<CutPointRecord>,
}

/// A scale as written in a catalog file, with textual response types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleRecord {
    pub id: String,
    pub name: String,
    pub population: TargetPopulation,
    #[serde(default)]
    pub estimated_minutes: u32,
    #[serde(default)]
    pub total_policy: TotalPolicy,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub sequence: u32,
    pub text: String,
    pub response_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub subscale: Option<String>,
}

impl ScaleRecord {
    /// Resolve response-type tags and validate the resulting definition.
    pub fn into_definition(self) -> Result<ScaleDefinition, ScoringError> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                let sequence = item.sequence;
                let response_type = parse_response_type(&item.response_type, item.options)
                    .map_err(|e| ScoringError::Item {
                        sequence,
                        source: Box::new(e),
                    })?;
                Ok(ItemDefinition {
                    sequence,
                    text: item.text,
                    response_type,
                    inverted: item.inverted,
                    subscale: item.subscale,
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        let definition = ScaleDefinition {
            id: self.id,
            name: self.name,
            population: self.population,
            estimated_minutes: self.estimated_minutes,
            total_policy: self.total_policy,
            description: self.description,
            items,
        };
        validate_scale(&definition)?;
        Ok(definition)
    }
}

impl From<&ScaleDefinition> for ScaleRecord {
    fn from(scale: &ScaleDefinition) -> Self {
        Self {
            id: scale.id.clone(),
            name: scale.name.clone(),
            population: scale.population,
            estimated_minutes: scale.estimated_minutes,
            total_policy: scale.total_policy,
            description: scale.description.clone(),
            items: scale
                .items
                .iter()
                .map(|item| ItemRecord {
                    sequence: item.sequence,
                    text: item.text.clone(),
                    response_type: item.response_type.tag().to_string(),
                    options: match &item.response_type {
                        ResponseType::MultipleChoice { options } => options.clone(),
                        _ => Vec::new(),
                    },
                    inverted: item.inverted,
                    subscale: item.subscale.clone(),
                })
                .collect(),
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog, StorageError> {
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    info!(
        path = %path.display(),
        scales = catalog.scales.len(),
        norms = catalog.norms.len(),
        cut_points = catalog.cut_points.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn parse_catalog(contents: &str) -> Result<Catalog, StorageError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("catalog_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let catalog: Catalog = serde_json::from_value(migrated)?;
    Ok(catalog)
}

pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), StorageError> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = catalog.clone();
    stamped.catalog_version = CURRENT_VERSION;
    let contents = serde_json::to_string_pretty(&stamped)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, StorageError> {
    if from_version > CURRENT_VERSION {
        return Err(StorageError::UnsupportedCatalogVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: legacy exports name the equivalence raw score `puntuacion_directa`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| StorageError::InvalidCatalog("catalog is not a JSON object".to_string()))?;
        if let Some(norms) = obj.get_mut("norms").and_then(|n| n.as_array_mut()) {
            for record in norms {
                let Some(rows) = record.get_mut("equivalences").and_then(|e| e.as_array_mut()) else {
                    continue;
                };
                for row in rows {
                    if let Some(fields) = row.as_object_mut()
                        && let Some(raw) = fields.remove("puntuacion_directa")
                    {
                        fields.entry("raw_score").or_insert(raw);
                    }
                }
            }
        }
        obj.insert(
            "catalog_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        info!("migrated catalog v0 → v1 (equivalence raw scores)");
    }

    Ok(json)
}

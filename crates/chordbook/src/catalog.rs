use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Catalog;
use crate::Result;

/// Header written alongside the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    /// ISO-8601 generation time
    pub generated_at: String,
    pub version: String,
    /// Number of top-level keys in `chords`
    pub total_chords: usize,
    pub keys: Vec<String>,
    pub data_source: String,
}

/// The serialized output: `{ meta, chords }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub meta: CatalogMeta,
    pub chords: Catalog,
}

impl CatalogDocument {
    /// Wrap a catalog, stamping it with the current time.
    pub fn new(chords: Catalog, version: &str, data_source: &str) -> Self {
        Self::generated_at(chords, version, data_source, Utc::now())
    }

    /// Wrap a catalog with an explicit generation time.
    pub fn generated_at(
        chords: Catalog,
        version: &str,
        data_source: &str,
        at: DateTime<Utc>,
    ) -> Self {
        let keys: Vec<String> = chords.keys().cloned().collect();
        Self {
            meta: CatalogMeta {
                generated_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
                version: version.to_string(),
                total_chords: keys.len(),
                keys,
                data_source: data_source.to_string(),
            },
            chords,
        }
    }

    /// Indented JSON, for `chords.json`.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whitespace-free JSON, for `chords.min.json`.
    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

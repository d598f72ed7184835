use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::difficulty::chord_difficulty;
use crate::fingering::analyze_position;
use crate::key::normalize_key;
use crate::metadata::generate_metadata;
use crate::quality::classify_quality;
use crate::symbol::build_symbol;
use crate::theory::{MusicTheory, TonalTheory};
use crate::types::{Catalog, ChordDatabase, GuitarChord, RawChord};
use crate::{Error, Result};

/// Suffix key used when a raw chord has an empty suffix.
pub const DEFAULT_SUFFIX: &str = "major";

/// A chord left out of the catalog, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedChord {
    pub key: String,
    pub suffix: String,
    pub reason: String,
}

/// Counts from one assembly pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub parsed: usize,
    pub skipped: Vec<SkippedChord>,
    pub keys: usize,
}

/// The catalog plus what happened while building it.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub catalog: Catalog,
    pub report: AssemblyReport,
}

/// Builds the enriched catalog from a raw chord database.
///
/// Each chord is assembled independently; one that fails is logged and
/// left out while the rest of the pass continues.
pub struct ChordAssembler {
    theory: Arc<dyn MusicTheory>,
}

impl Default for ChordAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordAssembler {
    /// Create with the built-in theory backend.
    pub fn new() -> Self {
        Self {
            theory: Arc::new(TonalTheory::default()),
        }
    }

    /// Create with a custom theory backend (for testing or alternate spelling).
    pub fn with_theory(theory: Arc<dyn MusicTheory>) -> Self {
        Self { theory }
    }

    /// Enrich every chord in the database.
    pub fn assemble(&self, database: &ChordDatabase) -> Assembly {
        let mut catalog = Catalog::new();
        let mut report = AssemblyReport::default();

        for (raw_key, chords) in database {
            let key = normalize_key(raw_key);
            let entries = catalog.entry(key.clone()).or_default();

            for raw in chords {
                let suffix = suffix_key(&raw.suffix);
                match self.assemble_chord(&key, raw) {
                    Ok(chord) => {
                        debug!(key = %key, suffix = %suffix, "assembled chord");
                        entries.insert(suffix.to_string(), chord);
                        report.parsed += 1;
                    }
                    Err(e) => {
                        warn!(key = %raw_key, suffix = %raw.suffix, error = %e, "skipping chord");
                        report.skipped.push(SkippedChord {
                            key: raw_key.clone(),
                            suffix: raw.suffix.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        report.keys = catalog.len();
        info!(
            parsed = report.parsed,
            skipped = report.skipped.len(),
            keys = report.keys,
            "catalog assembled"
        );

        Assembly { catalog, report }
    }

    /// Enrich one chord under an already-normalized key.
    pub fn assemble_chord(&self, key: &str, raw: &RawChord) -> Result<GuitarChord> {
        let suffix = suffix_key(&raw.suffix);
        let symbol = build_symbol(key, &raw.suffix);

        let identity = self
            .theory
            .resolve_symbol(&symbol)
            .ok_or_else(|| Error::UnresolvedSymbol {
                symbol: symbol.clone(),
            })?;

        let root = if identity.tonic.is_empty() {
            key
        } else {
            identity.tonic.as_str()
        };

        let fingerings = raw
            .positions
            .iter()
            .map(|position| analyze_position(position, suffix, root, self.theory.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let difficulty = chord_difficulty(&fingerings);
        let metadata = generate_metadata(suffix, &fingerings, difficulty);

        Ok(GuitarChord {
            id: chord_id(key, suffix),
            symbol,
            name: identity.name,
            tonic: identity.tonic,
            aliases: identity.aliases,
            intervals: identity.intervals,
            notes: identity.notes,
            quality: classify_quality(suffix),
            fingerings,
            difficulty,
            common_progressions: metadata.common_progressions,
            tags: metadata.tags,
            genre_tags: metadata.genre_tags,
        })
    }
}

/// `""` becomes `"major"`; everything else is kept as-is.
pub fn suffix_key(suffix: &str) -> &str {
    if suffix.is_empty() {
        DEFAULT_SUFFIX
    } else {
        suffix
    }
}

/// Stable chord id: `C#-maj7`, `A-m/C`.
pub fn chord_id(key: &str, suffix: &str) -> String {
    format!("{}-{}", key, suffix)
}

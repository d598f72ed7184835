//! Guitar chord catalog enrichment.
//!
//! Takes a raw per-key database of fingering diagrams and builds an enriched
//! catalog: canonical chord symbols, spelled notes and intervals, barre
//! geometry, difficulty scores, and descriptive tags.
//!
//! # Example
//!
//! ```
//! use chordbook::{ChordAssembler, ChordDatabase};
//!
//! let json = r#"{"Csharp": [{"key": "Csharp", "suffix": "", "positions": []}]}"#;
//! let database: ChordDatabase = serde_json::from_str(json).unwrap();
//!
//! let assembly = ChordAssembler::new().assemble(&database);
//! let chord = &assembly.catalog["C#"]["major"];
//! assert_eq!(chord.notes, vec!["C#", "E#", "G#"]);
//! assert_eq!(chord.difficulty, 3.0);
//! ```

pub mod assembler;
pub mod catalog;
pub mod chord_types;
pub mod difficulty;
pub mod fingering;
pub mod key;
pub mod metadata;
pub mod pitch;
pub mod quality;
pub mod symbol;
pub mod theory;
pub mod types;

pub use assembler::{Assembly, AssemblyReport, ChordAssembler, SkippedChord};
pub use catalog::{CatalogDocument, CatalogMeta};
pub use key::normalize_key;
pub use quality::classify_quality;
pub use symbol::build_symbol;
pub use theory::{ChordIdentity, MidiSpelling, MusicTheory, TonalTheory};
pub use types::{
    BarreInfo, Catalog, ChordDatabase, ChordQuality, GuitarChord, GuitarFingering, RawChord,
    RawPosition,
};

/// Errors from chord enrichment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not resolve chord symbol {symbol:?}")]
    UnresolvedSymbol { symbol: String },

    #[error("position must have 6 frets and 6 fingers, got {frets} and {fingers}")]
    MalformedPosition { frets: usize, fingers: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

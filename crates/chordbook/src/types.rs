use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Source database: raw key ("Csharp") to the chords listed under it.
pub type ChordDatabase = BTreeMap<String, Vec<RawChord>>;

/// Output catalog: normalized key ("C#") to suffix code to enriched chord.
pub type Catalog = BTreeMap<String, BTreeMap<String, GuitarChord>>;

/// One chord entry from the source database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawChord {
    pub key: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub positions: Vec<RawPosition>,
}

/// One fingering diagram as it appears in the source database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    /// Per string, low E first: -1 muted, 0 open
    pub frets: Vec<i32>,
    pub fingers: Vec<i32>,
    #[serde(default = "default_base_fret")]
    pub base_fret: i32,
    #[serde(default, deserialize_with = "one_or_many")]
    pub barres: Vec<i32>,
    #[serde(default)]
    pub capo: Option<bool>,
    #[serde(default)]
    pub midi: Vec<i32>,
}

fn default_base_fret() -> i32 {
    1
}

/// Some source entries give a single barre fret instead of a list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(i32),
        Many(Vec<i32>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(fret) => vec![fret],
        OneOrMany::Many(frets) => frets,
        OneOrMany::Null(()) => Vec::new(),
    })
}

/// A barre: one finger across strings `to_string..=from_string` at `fret`.
///
/// Strings are numbered 6 (low E) to 1 (high E), so `from_string >= to_string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarreInfo {
    pub from_string: u8,
    pub to_string: u8,
    pub fret: i32,
}

/// An analyzed fingering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitarFingering {
    pub id: String,
    pub name: String,
    pub frets: Vec<i32>,
    pub fingers: Vec<i32>,
    pub base_fret: i32,
    pub muted_strings: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barre: Option<BarreInfo>,
    pub midi: Vec<i32>,
    pub notes: Vec<String>,
    pub intervals: Vec<String>,
    pub difficulty: f64,
    pub capo: bool,
}

/// A fully enriched chord, one per key + suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitarChord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub tonic: String,
    pub aliases: Vec<String>,
    pub intervals: Vec<String>,
    pub notes: Vec<String>,
    pub quality: ChordQuality,
    pub fingerings: Vec<GuitarFingering>,
    pub difficulty: f64,
    pub common_progressions: Vec<String>,
    pub tags: Vec<String>,
    pub genre_tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordQuality {
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    AugmentedSeventh,
    MinorNinth,
    MajorNinth,
    DominantNinth,
    Diminished,
    Augmented,
    Suspended,
    Minor,
    Power,
    Sixth,
    SixNine,
    Major,
}

impl ChordQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordQuality::MajorSeventh => "major-seventh",
            ChordQuality::MinorSeventh => "minor-seventh",
            ChordQuality::DiminishedSeventh => "diminished-seventh",
            ChordQuality::AugmentedSeventh => "augmented-seventh",
            ChordQuality::MinorNinth => "minor-ninth",
            ChordQuality::MajorNinth => "major-ninth",
            ChordQuality::DominantNinth => "dominant-ninth",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Suspended => "suspended",
            ChordQuality::Minor => "minor",
            ChordQuality::Power => "power",
            ChordQuality::Sixth => "sixth",
            ChordQuality::SixNine => "six-nine",
            ChordQuality::Major => "major",
        }
    }
}

impl std::fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_position_accepts_source_shapes() {
        let json = r#"{"frets":[-1,3,2,0,1,0],"fingers":[0,3,2,0,1,0],"baseFret":1,"barres":[],"midi":[48,52,55,60,64]}"#;
        let pos: RawPosition = serde_json::from_str(json).unwrap();
        assert_eq!(pos.base_fret, 1);
        assert!(pos.barres.is_empty());
        assert_eq!(pos.capo, None);

        let json = r#"{"frets":[1,3,3,2,1,1],"fingers":[1,3,4,2,1,1],"baseFret":1,"barres":1,"capo":true,"midi":[]}"#;
        let pos: RawPosition = serde_json::from_str(json).unwrap();
        assert_eq!(pos.barres, vec![1]);
        assert_eq!(pos.capo, Some(true));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"frets":[0,2,2,1,0,0],"fingers":[0,2,3,1,0,0]}"#;
        let pos: RawPosition = serde_json::from_str(json).unwrap();
        assert_eq!(pos.base_fret, 1);
        assert!(pos.barres.is_empty());
        assert!(pos.midi.is_empty());
    }

    #[test]
    fn quality_serializes_kebab_case() {
        let json = serde_json::to_string(&ChordQuality::SixNine).unwrap();
        assert_eq!(json, "\"six-nine\"");
        assert_eq!(ChordQuality::MajorSeventh.to_string(), "major-seventh");
    }

    #[test]
    fn fingering_omits_absent_barre() {
        let fingering = GuitarFingering {
            id: "C-major-1".into(),
            name: "Open Position".into(),
            frets: vec![-1, 3, 2, 0, 1, 0],
            fingers: vec![0, 3, 2, 0, 1, 0],
            base_fret: 1,
            muted_strings: vec![6],
            barre: None,
            midi: vec![],
            notes: vec![],
            intervals: vec![],
            difficulty: 1.0,
            capo: false,
        };
        let value = serde_json::to_value(&fingering).unwrap();
        assert!(value.get("barre").is_none());
        assert_eq!(value["mutedStrings"], serde_json::json!([6]));
        assert_eq!(value["baseFret"], serde_json::json!(1));
    }
}

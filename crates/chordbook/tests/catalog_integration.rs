//! End-to-end tests: raw chords-db style JSON in, enriched catalog out.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chordbook::{
    CatalogDocument, ChordAssembler, ChordDatabase, ChordQuality, MidiSpelling, TonalTheory,
};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn load_fixture(name: &str) -> ChordDatabase {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.json", name));

    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Fixture {} is invalid: {}", name, e))
}

#[test]
fn sample_database_counts() {
    let db = load_fixture("guitar_sample");
    let assembly = ChordAssembler::new().assemble(&db);

    let keys: Vec<&String> = assembly.catalog.keys().collect();
    assert_eq!(keys, vec!["A", "C#", "E", "F#"]);
    assert_eq!(assembly.report.parsed, 5);
    assert_eq!(assembly.report.keys, 4);

    let skipped: Vec<(&str, &str)> = assembly
        .report
        .skipped
        .iter()
        .map(|s| (s.key.as_str(), s.suffix.as_str()))
        .collect();
    assert_eq!(skipped, vec![("Csharp", "weird"), ("Fsharp", "bogus")]);
    assert!(assembly.catalog["F#"].is_empty());
}

#[test]
fn a_minor_is_fully_enriched() {
    let db = load_fixture("guitar_sample");
    let catalog = ChordAssembler::new().assemble(&db).catalog;
    let chord = &catalog["A"]["minor"];

    assert_eq!(chord.symbol, "Am");
    assert_eq!(chord.tonic, "A");
    assert_eq!(chord.notes, vec!["A", "C", "E"]);
    assert_eq!(chord.quality, ChordQuality::Minor);
    assert_eq!(chord.fingerings.len(), 2);

    let open = &chord.fingerings[0];
    assert_eq!(open.name, "Open Position");
    assert_eq!(open.muted_strings, vec![6]);
    assert_eq!(open.notes, vec!["A", "E", "A", "C", "E"]);
    assert_eq!(open.intervals, vec!["1P", "5P", "1P", "3m", "5P"]);
    assert_eq!(open.difficulty, 1.0);

    let barre = &chord.fingerings[1];
    assert_eq!(barre.name, "Barre - 1st fret");
    let info = barre.barre.unwrap();
    assert_eq!((info.from_string, info.to_string, info.fret), (6, 1, 1));
    assert!(barre.capo);
    assert_eq!(barre.difficulty, 2.5);

    assert_eq!(chord.difficulty, 1.8);
    assert_eq!(chord.tags, vec!["barre", "open-chord", "capo", "beginner"]);
    assert_eq!(chord.genre_tags, vec!["all-genres", "essential"]);
    assert_eq!(chord.common_progressions[0], "i-iv-v");
}

#[test]
fn slash_chord_keeps_its_suffix_key() {
    let db = load_fixture("guitar_sample");
    let catalog = ChordAssembler::new().assemble(&db).catalog;
    let chord = &catalog["A"]["m/C"];

    assert_eq!(chord.symbol, "Am/C");
    assert_eq!(chord.name, "A minor over C");
    assert_eq!(chord.notes, vec!["A", "C", "E"]);
    assert_eq!(chord.tags, vec!["open-chord", "beginner"]);
}

#[test]
fn sharp_key_and_bare_barre_number() {
    let db = load_fixture("guitar_sample");
    let catalog = ChordAssembler::new().assemble(&db).catalog;

    let major = &catalog["C#"]["major"];
    assert_eq!(major.notes, vec!["C#", "E#", "G#"]);
    let fingering = &major.fingerings[0];
    assert_eq!(fingering.id, "C#-major-4");
    assert_eq!(fingering.barre.map(|b| (b.from_string, b.to_string)), Some((5, 1)));
    assert_eq!(fingering.difficulty, 3.0);

    let half_dim = &catalog["C#"]["m7b5"];
    assert_eq!(half_dim.notes, vec!["C#", "E", "G", "B"]);
    assert_eq!(half_dim.quality, ChordQuality::MinorSeventh);
    assert_eq!(half_dim.difficulty, 3.0);
    assert!(half_dim.fingerings.is_empty());
}

#[test]
fn sharp_spelling_changes_fingering_notes_only() {
    let db = load_fixture("guitar_sample");
    let assembler = ChordAssembler::with_theory(Arc::new(TonalTheory::new(MidiSpelling::Sharps)));
    let catalog = assembler.assemble(&db).catalog;

    let fingering = &catalog["C#"]["major"].fingerings[0];
    assert_eq!(fingering.notes, vec!["C#", "G#", "C#", "F", "G#"]);
    assert_eq!(fingering.intervals, vec!["1P", "5P", "1P", "4d", "5P"]);
}

#[test]
fn minimal_database_with_no_positions() {
    let db: ChordDatabase =
        serde_json::from_str(r#"{"Csharp": [{"key": "Csharp", "suffix": "", "positions": []}]}"#)
            .unwrap();
    let assembly = ChordAssembler::new().assemble(&db);

    let chord = &assembly.catalog["C#"]["major"];
    assert_eq!(chord.difficulty, 3.0);
    assert!(chord.fingerings.is_empty());
    assert!(assembly.report.skipped.is_empty());
}

#[test]
fn assembling_twice_gives_identical_chords() {
    let db = load_fixture("guitar_sample");
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let render = || {
        let catalog = ChordAssembler::new().assemble(&db).catalog;
        CatalogDocument::generated_at(catalog, "1.0.0", "chords-db", at)
            .to_pretty_json()
            .unwrap()
    };

    assert_eq!(render(), render());

    let first = serde_json::to_string(&ChordAssembler::new().assemble(&db).catalog).unwrap();
    let second = serde_json::to_string(&ChordAssembler::new().assemble(&db).catalog).unwrap();
    assert_eq!(first, second);
}

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chordbook::{CatalogDocument, ChordAssembler, ChordDatabase, MidiSpelling, TonalTheory};
use chordconf::{ChordConfig, Spelling};
use tracing::info;

pub const PRETTY_FILE: &str = "chords.json";
pub const MINIFIED_FILE: &str = "chords.min.json";

fn midi_spelling(spelling: Spelling) -> MidiSpelling {
    match spelling {
        Spelling::Flats => MidiSpelling::Flats,
        Spelling::Sharps => MidiSpelling::Sharps,
    }
}

fn read_database(path: &Path) -> Result<ChordDatabase> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chord database {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse chord database {}", path.display()))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Run the whole pipeline and write the catalog files.
pub fn run(config: &ChordConfig) -> Result<()> {
    let started = Instant::now();
    info!(input = %config.paths.input.display(), "generating chord catalog");

    let database = read_database(&config.paths.input)?;

    let theory = TonalTheory::new(midi_spelling(config.theory.midi_spelling));
    let assembly = ChordAssembler::with_theory(Arc::new(theory)).assemble(&database);

    let document = CatalogDocument::new(
        assembly.catalog,
        &config.output.version,
        &config.output.data_source,
    );

    let output_dir = &config.paths.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let pretty = document
        .to_pretty_json()
        .context("Failed to render chords.json")?;
    let pretty_path: PathBuf = output_dir.join(PRETTY_FILE);
    write_output(&pretty_path, &pretty)?;

    if config.output.write_minified {
        let compact = document
            .to_compact_json()
            .context("Failed to render chords.min.json")?;
        write_output(&output_dir.join(MINIFIED_FILE), &compact)?;
    }

    info!(
        parsed = assembly.report.parsed,
        failed = assembly.report.skipped.len(),
        keys = assembly.report.keys,
        size_kb = %format!("{:.2}", pretty.len() as f64 / 1024.0),
        elapsed_ms = started.elapsed().as_millis() as u64,
        output = %pretty_path.display(),
        "chord catalog written"
    );

    Ok(())
}

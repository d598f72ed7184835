//! Configuration loading for the chord catalog generator.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/chordbook/config.toml` (system)
//! 2. `~/.config/chordbook/config.toml` (user)
//! 3. `./chordbook.toml`, or the path given with `--config`
//! 4. Environment variables (`CHORDBOOK_*`, `RUST_LOG`)
//!
//! # Example Config
//!
//! ```toml
//! [paths]
//! input = "data/guitar.json"
//! output_dir = "output"
//!
//! [output]
//! version = "1.0.0"
//! data_source = "chords-db"
//! write_minified = true
//!
//! [telemetry]
//! log_level = "info"
//!
//! [theory]
//! midi_spelling = "flats"
//! ```

pub mod loader;
pub mod sections;

pub use loader::{discover_config_files_with_override, expand_path, ConfigSources};
pub use sections::{OutputConfig, PathsConfig, Spelling, TelemetryConfig, TheoryConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Complete generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChordConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub theory: TheoryConfig,
}

impl ChordConfig {
    /// Load configuration with an optional explicit file, then apply env overrides.
    ///
    /// An explicit path takes the place of `./chordbook.toml`. System and
    /// user configs still load first.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(config_path)?;
        Ok(config)
    }

    /// Load configuration from optional path and return information about sources.
    pub fn load_with_sources_from(
        config_path: Option<&Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = ChordConfig::default();

        for path in loader::discover_config_files_with_override(config_path) {
            let file_config = loader::load_from_file(&path)?;
            config = loader::merge_configs(config, file_config);
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources);

        Ok((config, sources))
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# Chordbook Configuration\n\n");

        output.push_str("[paths]\n");
        output.push_str(&format!("input = \"{}\"\n", self.paths.input.display()));
        output.push_str(&format!(
            "output_dir = \"{}\"\n",
            self.paths.output_dir.display()
        ));

        output.push_str("\n[output]\n");
        output.push_str(&format!("version = \"{}\"\n", self.output.version));
        output.push_str(&format!("data_source = \"{}\"\n", self.output.data_source));
        output.push_str(&format!(
            "write_minified = {}\n",
            self.output.write_minified
        ));

        output.push_str("\n[telemetry]\n");
        output.push_str(&format!("log_level = \"{}\"\n", self.telemetry.log_level));

        output.push_str("\n[theory]\n");
        output.push_str(&format!(
            "midi_spelling = \"{}\"\n",
            self.theory.midi_spelling
        ));

        output
    }
}

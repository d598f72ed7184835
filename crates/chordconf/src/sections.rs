//! Configuration sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the source database is read from and outputs are written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Source chord database (JSON).
    /// Default: data/guitar.json
    #[serde(default = "PathsConfig::default_input")]
    pub input: PathBuf,

    /// Directory receiving chords.json and chords.min.json.
    /// Default: output
    #[serde(default = "PathsConfig::default_output_dir")]
    pub output_dir: PathBuf,
}

impl PathsConfig {
    pub(crate) fn default_input() -> PathBuf {
        PathBuf::from("data/guitar.json")
    }

    pub(crate) fn default_output_dir() -> PathBuf {
        PathBuf::from("output")
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            output_dir: Self::default_output_dir(),
        }
    }
}

/// What goes into the generated files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Version string stamped into `meta.version`.
    /// Default: 1.0.0
    #[serde(default = "OutputConfig::default_version")]
    pub version: String,

    /// Attribution stamped into `meta.dataSource`.
    /// Default: chords-db
    #[serde(default = "OutputConfig::default_data_source")]
    pub data_source: String,

    /// Also write the minified chords.min.json.
    /// Default: true
    #[serde(default = "OutputConfig::default_write_minified")]
    pub write_minified: bool,
}

impl OutputConfig {
    pub(crate) fn default_version() -> String {
        "1.0.0".to_string()
    }

    pub(crate) fn default_data_source() -> String {
        "chords-db".to_string()
    }

    pub(crate) fn default_write_minified() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            data_source: Self::default_data_source(),
            write_minified: Self::default_write_minified(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter (trace, debug, info, warn, error, or a full directive).
    /// Default: info
    #[serde(default = "TelemetryConfig::default_log_level")]
    pub log_level: String,
}

impl TelemetryConfig {
    pub(crate) fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}

/// Accidental preference when naming MIDI notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Flats,
    Sharps,
}

impl FromStr for Spelling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flats" | "flat" => Ok(Spelling::Flats),
            "sharps" | "sharp" => Ok(Spelling::Sharps),
            other => Err(format!("expected \"flats\" or \"sharps\", got {:?}", other)),
        }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spelling::Flats => write!(f, "flats"),
            Spelling::Sharps => write!(f, "sharps"),
        }
    }
}

/// Music theory options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TheoryConfig {
    /// Default: flats
    #[serde(default)]
    pub midi_spelling: Spelling,
}

//! Config file discovery, loading, and environment variable overlay.

use crate::sections::{OutputConfig, PathsConfig, Spelling, TelemetryConfig, TheoryConfig};
use crate::{ChordConfig, ConfigError};
use std::env;
use std::path::{Path, PathBuf};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files in load order (system, user, local).
///
/// Only existing files are returned, except for the CLI path: it replaces
/// the local `./chordbook.toml` and is returned even when missing so that
/// loading it reports the error.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let system = PathBuf::from("/etc/chordbook/config.toml");
    if system.exists() {
        files.push(system);
    }

    // XDG_CONFIG_HOME or ~/.config
    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("chordbook/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(path) = cli_path {
        files.push(path.to_path_buf());
        return files;
    }

    let local = PathBuf::from("chordbook.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Load config from a TOML file.
pub fn load_from_file(path: &Path) -> Result<ChordConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_toml(&contents, path)
}

/// Parse config from a TOML string. Missing keys keep their defaults.
pub fn parse_toml(contents: &str, path: &Path) -> Result<ChordConfig, ConfigError> {
    let table: toml::Table = contents.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut config = ChordConfig::default();

    if let Some(paths) = table.get("paths").and_then(|v| v.as_table()) {
        if let Some(v) = paths.get("input").and_then(|v| v.as_str()) {
            config.paths.input = expand_path(v);
        }
        if let Some(v) = paths.get("output_dir").and_then(|v| v.as_str()) {
            config.paths.output_dir = expand_path(v);
        }
    }

    if let Some(output) = table.get("output").and_then(|v| v.as_table()) {
        if let Some(v) = output.get("version").and_then(|v| v.as_str()) {
            config.output.version = v.to_string();
        }
        if let Some(v) = output.get("data_source").and_then(|v| v.as_str()) {
            config.output.data_source = v.to_string();
        }
        if let Some(v) = output.get("write_minified").and_then(|v| v.as_bool()) {
            config.output.write_minified = v;
        }
    }

    if let Some(telemetry) = table.get("telemetry").and_then(|v| v.as_table()) {
        if let Some(v) = telemetry.get("log_level").and_then(|v| v.as_str()) {
            config.telemetry.log_level = v.to_string();
        }
    }

    if let Some(theory) = table.get("theory").and_then(|v| v.as_table()) {
        if let Some(v) = theory.get("midi_spelling").and_then(|v| v.as_str()) {
            config.theory.midi_spelling =
                v.parse::<Spelling>().map_err(|message| ConfigError::Parse {
                    path: path.to_path_buf(),
                    message: format!("theory.midi_spelling: {}", message),
                })?;
        }
    }

    Ok(config)
}

/// Keep `overlay` where it differs from the default, otherwise `base`.
fn pick<T: PartialEq>(base: T, overlay: T, default: T) -> T {
    if overlay != default {
        overlay
    } else {
        base
    }
}

/// Merge two configs, with `overlay` taking precedence.
pub fn merge_configs(base: ChordConfig, overlay: ChordConfig) -> ChordConfig {
    let paths = PathsConfig::default();
    let output = OutputConfig::default();
    let telemetry = TelemetryConfig::default();
    let theory = TheoryConfig::default();

    ChordConfig {
        paths: PathsConfig {
            input: pick(base.paths.input, overlay.paths.input, paths.input),
            output_dir: pick(
                base.paths.output_dir,
                overlay.paths.output_dir,
                paths.output_dir,
            ),
        },
        output: OutputConfig {
            version: pick(base.output.version, overlay.output.version, output.version),
            data_source: pick(
                base.output.data_source,
                overlay.output.data_source,
                output.data_source,
            ),
            write_minified: pick(
                base.output.write_minified,
                overlay.output.write_minified,
                output.write_minified,
            ),
        },
        telemetry: TelemetryConfig {
            log_level: pick(
                base.telemetry.log_level,
                overlay.telemetry.log_level,
                telemetry.log_level,
            ),
        },
        theory: TheoryConfig {
            midi_spelling: pick(
                base.theory.midi_spelling,
                overlay.theory.midi_spelling,
                theory.midi_spelling,
            ),
        },
    }
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(config: &mut ChordConfig, sources: &mut ConfigSources) {
    // Sorted, so RUST_LOG lands after CHORDBOOK_LOG_LEVEL and wins.
    let mut vars: Vec<(String, String)> = env::vars().collect();
    vars.sort();
    apply_overrides(config, sources, vars);
}

/// Apply `CHORDBOOK_*` (and `RUST_LOG`) overrides from a variable list.
pub fn apply_overrides<I>(config: &mut ChordConfig, sources: &mut ConfigSources, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        let applied = match key.as_str() {
            "CHORDBOOK_INPUT" => {
                config.paths.input = expand_path(&value);
                true
            }
            "CHORDBOOK_OUTPUT_DIR" => {
                config.paths.output_dir = expand_path(&value);
                true
            }
            "CHORDBOOK_VERSION" => {
                config.output.version = value;
                true
            }
            "CHORDBOOK_DATA_SOURCE" => {
                config.output.data_source = value;
                true
            }
            "CHORDBOOK_LOG_LEVEL" | "RUST_LOG" => {
                config.telemetry.log_level = value;
                true
            }
            "CHORDBOOK_MIDI_SPELLING" => match value.parse() {
                Ok(spelling) => {
                    config.theory.midi_spelling = spelling;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        };

        if applied {
            sources.env_overrides.push(key);
        }
    }
}

/// Expand ~ and environment variables in a path.
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(stripped);
        }
    } else if let Some(stripped) = path.strip_prefix('$') {
        // $VAR/rest/of/path
        let (var_name, rest) = match stripped.find('/') {
            Some(slash_pos) => (&stripped[..slash_pos], &stripped[slash_pos + 1..]),
            None => (stripped, ""),
        };
        if let Ok(var_value) = env::var(var_name) {
            let base = PathBuf::from(var_value);
            return if rest.is_empty() { base } else { base.join(rest) };
        }
    }

    PathBuf::from(path)
}

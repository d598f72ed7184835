//! chordgen - builds the enriched guitar chord catalog
//!
//! Subcommands:
//! - `chordgen generate` - Read the raw database and write chords.json / chords.min.json
//! - `chordgen config` - Show the effective configuration and where it came from

use std::path::PathBuf;

use anyhow::{Context, Result};
use chordconf::ChordConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Parser)]
#[command(name = "chordgen")]
#[command(about = "Build the enriched guitar chord catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich the chord database and write the catalog files
    Generate {
        /// Source chord database (overrides paths.input)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (overrides paths.output_dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Config file (replaces ./chordbook.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip chords.min.json
        #[arg(long)]
        no_minified: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Config file (replaces ./chordbook.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(config: &ChordConfig) {
    let filter = EnvFilter::try_new(&config.telemetry.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            config,
            no_minified,
        } => {
            let mut settings =
                ChordConfig::load_from(config.as_deref()).context("Failed to load config")?;
            init_tracing(&settings);

            if let Some(input) = input {
                settings.paths.input = input;
            }
            if let Some(output_dir) = output_dir {
                settings.paths.output_dir = output_dir;
            }
            if no_minified {
                settings.output.write_minified = false;
            }

            generate::run(&settings)?;
        }
        Commands::Config { config } => {
            let (settings, sources) = ChordConfig::load_with_sources_from(config.as_deref())
                .context("Failed to load config")?;

            for file in &sources.files {
                println!("# loaded: {}", file.display());
            }
            for var in &sources.env_overrides {
                println!("# env: {}", var);
            }
            print!("{}", settings.to_toml());
        }
    }

    Ok(())
}

//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use tagcheck::config::EngineConfig;
use tagcheck::output::OutputMode;

/// tagcheck - Tag checks for map features
#[derive(Parser, Debug)]
#[command(
    name = "tagcheck",
    version,
    about = "Tag checks for map features",
    long_about = "Evaluate a catalog of compiled tag rules against map features.\n\n\
                  Each rule reports at most one finding per feature, rendered from\n\
                  the tags that matched. The seamark catalog is built in."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./tagcheck.toml, then ~/.config/tagcheck/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check features from a JSON file ("-" for stdin)
    Check {
        /// JSON array of {id, kind, tags} objects
        features: PathBuf,

        /// Compiled catalog file (default: built-in seamark catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// List the classification registry
    Classes {
        /// Compiled catalog file (default: built-in seamark catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Build a catalog and report what it contains
    Validate {
        /// Compiled catalog file (default: built-in seamark catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let cwd = std::env::current_dir()?;
    let config = EngineConfig::load(cli.config.as_deref(), &cwd)?;

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { features, catalog }) => {
            commands::check(&features, catalog.as_deref(), &config, output_mode)
        },
        Some(Command::Classes { catalog }) => {
            commands::classes(catalog.as_deref(), &config, output_mode)
        },
        Some(Command::Validate { catalog }) => {
            commands::validate(catalog.as_deref(), &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tagcheck::VERSION
                    })
                );
            } else {
                println!("tagcheck v{}", tagcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tagcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tagcheck v{}", tagcheck::VERSION);
                println!("\nRun 'tagcheck --help' for usage");
                println!("Run 'tagcheck check features.json' to check features");
            }
            Ok(())
        },
    }
}

//! stepup command-line harness.
//!
//! Runs bounded increments over integer sequences and prints the result.
//!
//! # Quick Start
//!
//! ```bash
//! # Increment the configured default sequence from index 2
//! stepup increment --from 2          # 0 1 3 4 5
//!
//! # Increment explicit values
//! stepup increment --from 1 7 8 9    # 7 9 10
//!
//! # Run the increment at every index in turn
//! stepup cascade                     # 0 2 4 6 8
//! ```

mod commands;
mod style;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stepup_config::{ConfigLoader, StepupConfig};
use tracing_subscriber::EnvFilter;

/// stepup - bounded in-place increments over integer sequences.
#[derive(Parser)]
#[command(name = "stepup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding stepup.toml (defaults to the current directory).
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Increment every element from an index to the end.
    Increment {
        /// Index of the first element to increment.
        #[arg(short, long, default_value = "0")]
        from: usize,

        /// Integers to increment (comma or space separated). Uses the configured default when omitted.
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Run the increment at every index of the sequence in turn.
    Cascade {
        /// Integers to cascade over (comma or space separated). Uses the configured default when omitted.
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            style::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Version = cli.command {
        commands::version::run();
        return Ok(());
    }

    let mut loader = ConfigLoader::new();
    if let Some(project) = &cli.project {
        loader = loader.with_project_dir(project);
    }
    let config = loader.load()?;

    init_logging(&config, cli.verbose);
    tracing::debug!(
        project = ?cli.project,
        separator = ?config.output.separator,
        "configuration loaded"
    );

    match cli.command {
        Commands::Version => Ok(()),
        Commands::Increment { from, values } => commands::increment::run(&config, &values, from),
        Commands::Cascade { values } => commands::cascade::run(&config, &values),
        Commands::Config(ConfigCommands::Show { format }) => {
            commands::config::show(&config, &format)
        }
    }
}

/// Installs the global subscriber; `RUST_LOG` wins over config and `--verbose`.
fn init_logging(config: &StepupConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

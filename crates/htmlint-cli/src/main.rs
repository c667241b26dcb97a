//! htmlint CLI tool.
//!
//! Usage:
//! ```bash
//! htmlint check [OPTIONS] [PATHS]...
//! htmlint list-rules
//! htmlint init
//! htmlint print-config [PATH]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Accessibility and htmx linter for HTML templates
#[derive(Parser)]
#[command(name = "htmlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HTMLINT_CONFIG")]
    config: Option<PathBuf>,

    /// Ignore configuration files and use the built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files and directories
    Check {
        /// Files or directories to lint (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only report errors
        #[arg(short, long)]
        quiet: bool,

        /// Glob pattern of files to skip (can be specified multiple times)
        #[arg(long, value_name = "GLOB")]
        ignore: Vec<String>,

        /// Disable a rule (can be specified multiple times)
        #[arg(long, value_name = "RULE")]
        disable: Vec<String>,

        /// Only run specific rules (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List available rules and presets
    ListRules,

    /// Create a starter .htmlvalidate.json
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration as JSON
    PrintConfig {
        /// Directory to resolve the configuration for (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per finding with a summary.
    #[default]
    Text,
    /// One line per finding, no summary.
    Compact,
    /// JSON report with a summary object.
    Json,
    /// Graphical diagnostics with source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            quiet,
            ignore,
            disable,
            rules,
            no_color,
        } => {
            let search_dir = config_resolver::search_dir(&paths);
            let source =
                config_resolver::resolve(&search_dir, cli.config.as_deref(), cli.no_config);
            let args = commands::check::CheckArgs {
                paths,
                format,
                quiet,
                ignore,
                disable,
                rules,
                no_color,
            };
            let errors = commands::check::run(args, &search_dir, &source)?;
            if errors > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
        Commands::PrintConfig { path } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref(), cli.no_config);
            commands::print_config::run(&source)
        }
    }
}

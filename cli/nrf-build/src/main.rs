//! nrf-build CLI — target and classification selection for nRF builds.

mod commands;
mod manifest;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::OutputFormat;
use manifest::BuildManifest;
use nrf_classifications::Classification;
use nrf_targets::Target;

#[derive(Parser)]
#[command(name = "nrf-build", version, about = "nRF build target and classification selection")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported target triples
    Targets {
        /// Only the targets built by default
        #[arg(long)]
        defaults: bool,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List information classifications
    Classifications {
        /// Only the classifications built by default
        #[arg(long)]
        defaults: bool,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Check that each name is a known target or classification
    Check {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Expand the target x classification build matrix
    Matrix {
        /// Target to build (repeatable; overrides nrf-build.toml)
        #[arg(long = "target")]
        targets: Vec<Target>,
        /// Classification to build (repeatable; overrides nrf-build.toml)
        #[arg(long = "classification")]
        classifications: Vec<Classification>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Targets { defaults, format } => commands::list::targets(defaults, format),

        Commands::Classifications { defaults, format } => {
            commands::list::classifications(defaults, format)
        }

        Commands::Check { names } => commands::check::run(&names),

        Commands::Matrix {
            targets,
            classifications,
            format,
        } => {
            let cwd = std::env::current_dir()?;
            let manifest = BuildManifest::find_and_load(&cwd)?;
            commands::matrix::run(manifest.as_ref(), &targets, &classifications, format)
        }
    }
}

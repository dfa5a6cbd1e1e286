//! CLI command implementations.

pub mod check;
pub mod list;
pub mod matrix;

use clap::ValueEnum;

/// Output format shared by the listing commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

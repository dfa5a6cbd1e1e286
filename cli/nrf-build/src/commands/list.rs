//! `nrf-build targets` and `nrf-build classifications`.

use anyhow::Result;

use nrf_classifications::Classification;
use nrf_targets::Target;

use super::OutputFormat;

/// Render target triples, one per line or as a JSON array.
pub fn render_targets(defaults_only: bool, format: OutputFormat) -> Result<String> {
    let targets = if defaults_only {
        Target::defaults()
    } else {
        Target::all()
    };
    render(Target::to_string_array(&targets), format)
}

/// Render classification names, one per line or as a JSON array.
pub fn render_classifications(defaults_only: bool, format: OutputFormat) -> Result<String> {
    let classifications = if defaults_only {
        Classification::defaults()
    } else {
        Classification::all()
    };
    render(Classification::to_string_array(&classifications), format)
}

fn render(names: Vec<String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(names.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)?),
    }
}

/// List targets.
pub fn targets(defaults_only: bool, format: OutputFormat) -> Result<()> {
    println!("{}", render_targets(defaults_only, format)?);
    Ok(())
}

/// List classifications.
pub fn classifications(defaults_only: bool, format: OutputFormat) -> Result<()> {
    println!("{}", render_classifications(defaults_only, format)?);
    Ok(())
}

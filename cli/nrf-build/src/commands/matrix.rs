//! `nrf-build matrix` — expand the target × classification build matrix.

use anyhow::Result;
use serde::Serialize;

use nrf_classifications::Classification;
use nrf_targets::Target;

use super::OutputFormat;
use crate::manifest::BuildManifest;

/// One build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildEntry {
    pub target: Target,
    pub classification: Classification,
}

/// Pick the targets and classifications to build.
///
/// Flags win over the manifest, and the manifest wins over the defaults.
pub fn select(
    manifest: Option<&BuildManifest>,
    targets: &[Target],
    classifications: &[Classification],
) -> (Vec<Target>, Vec<Classification>) {
    let targets = if !targets.is_empty() {
        targets.to_vec()
    } else if let Some(listed) = manifest.and_then(BuildManifest::targets) {
        listed.to_vec()
    } else {
        Target::defaults()
    };
    let classifications = if !classifications.is_empty() {
        classifications.to_vec()
    } else if let Some(listed) = manifest.and_then(BuildManifest::classifications) {
        listed.to_vec()
    } else {
        Classification::defaults()
    };
    (targets, classifications)
}

/// Cartesian product, target-major.
pub fn expand(targets: &[Target], classifications: &[Classification]) -> Vec<BuildEntry> {
    targets
        .iter()
        .flat_map(|&target| {
            classifications.iter().map(move |&classification| BuildEntry {
                target,
                classification,
            })
        })
        .collect()
}

/// Render the matrix as `target classification` lines or a JSON array.
pub fn render(entries: &[BuildEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| format!("{} {}", e.target, e.classification))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

/// Print the build matrix.
pub fn run(
    manifest: Option<&BuildManifest>,
    targets: &[Target],
    classifications: &[Classification],
    format: OutputFormat,
) -> Result<()> {
    let (targets, classifications) = select(manifest, targets, classifications);
    let entries = expand(&targets, &classifications);
    tracing::debug!(
        targets = targets.len(),
        classifications = classifications.len(),
        entries = entries.len(),
        "expanded build matrix"
    );
    println!("{}", render(&entries, format)?);
    Ok(())
}

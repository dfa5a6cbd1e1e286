//! `nrf-build.toml` manifest parsing.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use nrf_classifications::Classification;
use nrf_targets::Target;

/// File name searched for from the working directory upward.
pub const MANIFEST_FILE: &str = "nrf-build.toml";

/// The top-level manifest structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildManifest {
    /// Build selection. Absent means "use the defaults".
    #[serde(default)]
    pub build: Option<BuildConfig>,
}

/// The `[build]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    /// Targets to build for.
    #[serde(default)]
    pub targets: Option<Vec<Target>>,
    /// Classifications to build.
    #[serde(default)]
    pub classifications: Option<Vec<Classification>>,
}

impl BuildManifest {
    /// Search upward from `start_dir` for `nrf-build.toml` and parse the first one found.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<Self>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest = Self::from_toml(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                tracing::debug!(path = %candidate.display(), "loaded manifest");
                return Ok(Some(manifest));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Targets listed in the manifest, if any.
    pub fn targets(&self) -> Option<&[Target]> {
        self.build.as_ref().and_then(|b| b.targets.as_deref())
    }

    /// Classifications listed in the manifest, if any.
    pub fn classifications(&self) -> Option<&[Classification]> {
        self.build
            .as_ref()
            .and_then(|b| b.classifications.as_deref())
    }
}

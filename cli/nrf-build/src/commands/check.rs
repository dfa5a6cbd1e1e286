//! `nrf-build check` — validate names supplied by a caller.

use anyhow::{bail, Result};

use nrf_classifications::Classification;
use nrf_targets::Target;

/// What a checked name turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Target(Target),
    Classification(Classification),
}

/// Identify a name as a target or a classification.
pub fn identify(name: &str) -> Result<Kind> {
    let target_err = match Target::parse(name) {
        Ok(target) => return Ok(Kind::Target(target)),
        Err(e) => e,
    };
    match Classification::parse(name) {
        Ok(classification) => Ok(Kind::Classification(classification)),
        Err(classification_err) => bail!(
            "'{name}' is neither a known target nor a known classification \
             ({target_err}; {classification_err})"
        ),
    }
}

/// Check every name, stopping at the first unknown one.
pub fn run(names: &[String]) -> Result<()> {
    for name in names {
        match identify(name)? {
            Kind::Target(target) => println!("{target}: target"),
            Kind::Classification(classification) => {
                println!("{classification}: classification")
            }
        }
    }
    Ok(())
}

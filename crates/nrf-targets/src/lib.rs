//! Build target triples for the nRF build tooling.
//!
//! A [`Target`] names one of the platform triples artifacts are compiled for,
//! spelled the way Rust spells its target names (`arch-vendor-os-env`).
//! The set is closed: parsing accepts only the canonical spelling of each
//! triple, and the same spelling is used for display and serialization.

pub mod error;
pub mod target;

pub use error::{Result, TargetError};
pub use target::Target;

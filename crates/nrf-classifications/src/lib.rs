//! Information classification levels for nRF build artifacts.
//!
//! Every artifact is built for one [`Classification`], which decides who the
//! artifact may be distributed to.

pub mod classification;
pub mod error;

pub use classification::Classification;
pub use error::{ClassificationError, Result};

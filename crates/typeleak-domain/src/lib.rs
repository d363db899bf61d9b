//! Pure private-type auditing (no IO).
//!
//! Input: per-module documentation lookups constructed elsewhere.
//! Output: per-module outcomes + findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod analysis;
pub mod error;
pub mod model;
pub mod policy;
pub mod report;

mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use analysis::analyze_module;
pub use engine::evaluate;
pub use error::{AnalysisError, ShapeError};

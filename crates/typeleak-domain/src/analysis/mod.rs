//! The private-type audit for a single module.
//!
//! entries -> [`classify`] -> per function [`decompose`] -> [`walk`] over the
//! audited expressions -> [`private_types`] dedups and subtracts exported names.

mod classify;
mod decompose;
mod diff;
mod walk;


pub use classify::{ClassifiedEntries, SpecifiedFunction, classify};
pub use decompose::decompose;
pub use diff::private_types;
pub use walk::referenced_types;

use crate::error::AnalysisError;
use crate::model::PrivateTypeReport;
use crate::policy::AnalysisOptions;
use typeleak_types::DocEntry;

/// Compute the private-type report for one module's entry list.
pub fn analyze_module(
    module: &str,
    entries: &[DocEntry],
    options: AnalysisOptions,
) -> Result<PrivateTypeReport, AnalysisError> {
    let classified = classify(entries);
    let types = private_types(&classified, options)?;
    Ok(PrivateTypeReport {
        module: module.to_string(),
        types,
    })
}

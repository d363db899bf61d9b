use super::classify::ClassifiedEntries;
use super::decompose::decompose;
use super::walk::walk;
use crate::error::{AnalysisError, ShapeError};
use crate::policy::AnalysisOptions;
use std::collections::HashSet;
use typeleak_types::FunctionSignature;

/// Referenced user types that are not exported, distinct, in first-occurrence order.
///
/// Functions are visited in entry order; within a function the result comes first,
/// then each constraint bound in order.
pub fn private_types(
    classified: &ClassifiedEntries<'_>,
    options: AnalysisOptions,
) -> Result<Vec<String>, AnalysisError> {
    let mut referenced = Vec::new();

    for function in &classified.functions {
        let attribute = |source: ShapeError| AnalysisError {
            function: function.entry.display_name(),
            source,
        };
        let signature = decompose(function.signature).map_err(attribute)?;
        walk_signature(&signature, options, &mut referenced).map_err(attribute)?;
    }

    let mut seen = HashSet::new();
    Ok(referenced
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .filter(|name| !classified.exported_types.contains(name.as_str()))
        .collect())
}

fn walk_signature(
    signature: &FunctionSignature,
    options: AnalysisOptions,
    out: &mut Vec<String>,
) -> Result<(), ShapeError> {
    if options.audit_parameters {
        for param in &signature.params {
            walk(param, options, out)?;
        }
    }
    walk(&signature.result, options, out)?;
    for constraint in &signature.constraints {
        walk(&constraint.bound, options, out)?;
    }
    Ok(())
}

use serde_json::Value;
use thiserror::Error;
use typeleak_types::ids;

/// A documentation tree that matches none of the known structural cases.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ShapeError {
    /// The top-level signature is neither a plain nor a constrained function shape.
    #[error("unrecognized signature shape: {0}")]
    Signature(Value),
    /// A type expression node has no walker rule.
    #[error("unrecognized type node shape: {0}")]
    Node(Value),
}

/// A shape error, attributed to the function whose signature contained it.
///
/// Scoped to one module: the engine reports the module as failed and moves on.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{function}: {source}")]
pub struct AnalysisError {
    /// `name/arity` of the offending function.
    pub function: String,
    #[source]
    pub source: ShapeError,
}

impl AnalysisError {
    pub fn code(&self) -> &'static str {
        match self.source {
            ShapeError::Signature(_) => ids::CODE_UNRECOGNIZED_SIGNATURE_SHAPE,
            ShapeError::Node(_) => ids::CODE_UNRECOGNIZED_NODE_SHAPE,
        }
    }

    pub fn raw(&self) -> &Value {
        match &self.source {
            ShapeError::Signature(raw) | ShapeError::Node(raw) => raw,
        }
    }
}

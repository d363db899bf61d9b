//! Stable DTOs and IDs used across the typeleak workspace.
//!
//! This crate is intentionally boring:
//! - the module documentation input model (entries and type expressions)
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical docs-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod docs;
pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod type_expr;

pub use docs::{DocEntry, EntryKind, ModuleDocs};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::DocsPath;
pub use receipt::{
    Finding, Location, ModuleTypes, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta,
    TypeleakData, TypeleakReport, Verdict,
};
pub use type_expr::{Constraint, FunctionSignature, TypeExpr};

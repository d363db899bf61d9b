//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_TYPES_PRIVATE_IN_SIGNATURE: &str = "types.private_in_signature";
pub const CHECK_TOOL_ANALYSIS: &str = "tool.analysis";

// Codes: types.private_in_signature
pub const CODE_PRIVATE_TYPE: &str = "private_type";

// Codes: tool.analysis
pub const CODE_UNRECOGNIZED_SIGNATURE_SHAPE: &str = "unrecognized_signature_shape";
pub const CODE_UNRECOGNIZED_NODE_SHAPE: &str = "unrecognized_node_shape";
pub const CODE_MALFORMED_DOCS: &str = "malformed_docs";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

//! Module documentation input model.
//!
//! A module's documentation is a flat list of entries. Signatures stay as raw JSON
//! here; turning them into typed signatures is the analysis layer's job, because an
//! unknown signature shape is a reportable outcome rather than a decode failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Type,
    Function,
    Callback,
    /// Macros, modules, and anything else the documentation source emits.
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocEntry {
    pub kind: EntryKind,
    pub name: String,
    #[serde(default)]
    pub arity: u32,

    /// Raw specification tree, present only on functions with a declared spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<JsonValue>,
}

impl DocEntry {
    pub fn exported_type(name: &str, arity: u32) -> Self {
        Self {
            kind: EntryKind::Type,
            name: name.to_string(),
            arity,
            signature: None,
        }
    }

    pub fn function(name: &str, arity: u32, signature: Option<JsonValue>) -> Self {
        Self {
            kind: EntryKind::Function,
            name: name.to_string(),
            arity,
            signature,
        }
    }

    pub fn callback(name: &str, arity: u32) -> Self {
        Self {
            kind: EntryKind::Callback,
            name: name.to_string(),
            arity,
            signature: None,
        }
    }

    /// `name/arity`, the usual way to refer to a function.
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.name, self.arity)
    }
}

/// On-disk documentation file for one module (`<module>.docs.json`).
///
/// `entries` is `None` when the module publishes no documentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleDocs {
    pub module: String,
    #[serde(default)]
    pub entries: Option<Vec<DocEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_kinds_decode_as_other() {
        let entry: DocEntry =
            serde_json::from_value(json!({"kind": "macro", "name": "m", "arity": 2}))
                .expect("decode entry");
        assert_eq!(entry.kind, EntryKind::Other);
        assert!(entry.signature.is_none());
    }

    #[test]
    fn missing_entries_means_no_documentation() {
        let docs: ModuleDocs =
            serde_json::from_value(json!({"module": "quiet"})).expect("decode docs");
        assert_eq!(docs.module, "quiet");
        assert!(docs.entries.is_none());
    }

    #[test]
    fn function_entry_keeps_raw_signature() {
        let raw = json!({"type": "fun", "params": [], "result": {"type": "atom", "value": "ok"}});
        let entry: DocEntry = serde_json::from_value(json!({
            "kind": "function", "name": "f", "arity": 0, "signature": raw.clone()
        }))
        .expect("decode entry");
        assert_eq!(entry.signature, Some(raw));
        assert_eq!(entry.display_name(), "f/0");
    }
}

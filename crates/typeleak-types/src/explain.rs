//! Explain registry for checks and codes.
//!
//! Every code belongs to exactly one check. Example pairs are whole
//! `<module>.docs.json` documents: `before` produces the finding, `after` is clean.

use crate::ids;

#[derive(Debug, Clone)]
pub struct Explanation {
    pub title: &'static str,
    pub description: &'static str,
    pub remediation: &'static str,
    pub examples: ExamplePair,
}

/// Documentation files that do and do not trigger a finding.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    pub before: &'static str,
    pub after: &'static str,
}

/// A check id and the codes its findings carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckCodes {
    pub check_id: &'static str,
    pub codes: &'static [&'static str],
}

pub const CHECK_CODES: &[CheckCodes] = &[
    CheckCodes {
        check_id: ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE,
        codes: &[ids::CODE_PRIVATE_TYPE],
    },
    CheckCodes {
        check_id: ids::CHECK_TOOL_ANALYSIS,
        codes: &[
            ids::CODE_UNRECOGNIZED_SIGNATURE_SHAPE,
            ids::CODE_UNRECOGNIZED_NODE_SHAPE,
            ids::CODE_MALFORMED_DOCS,
        ],
    },
];

/// Look up an explanation by check_id or code.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE => Some(explain_private_in_signature()),
        ids::CHECK_TOOL_ANALYSIS => Some(explain_tool_analysis()),

        ids::CODE_PRIVATE_TYPE => Some(explain_private_type()),
        ids::CODE_UNRECOGNIZED_SIGNATURE_SHAPE => Some(explain_unrecognized_signature_shape()),
        ids::CODE_UNRECOGNIZED_NODE_SHAPE => Some(explain_unrecognized_node_shape()),
        ids::CODE_MALFORMED_DOCS => Some(explain_malformed_docs()),

        _ => None,
    }
}

/// The check group an identifier belongs to, whether it names the check or one of its codes.
pub fn check_group(identifier: &str) -> Option<&'static CheckCodes> {
    CHECK_CODES
        .iter()
        .find(|group| group.check_id == identifier || group.codes.contains(&identifier))
}

pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE, ids::CHECK_TOOL_ANALYSIS]
}

pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PRIVATE_TYPE,
        ids::CODE_UNRECOGNIZED_SIGNATURE_SHAPE,
        ids::CODE_UNRECOGNIZED_NODE_SHAPE,
        ids::CODE_MALFORMED_DOCS,
    ]
}

// --- Check-level explanations ---

fn explain_private_in_signature() -> Explanation {
    Explanation {
        title: "Private Type In Exported Signature",
        description: "\
Detects user-defined types that an exported function's result type or `when`
constraints mention, but that the module does not export itself.

Callers can receive values of such a type, yet cannot name it in their own
specifications:
- Downstream specs have to fall back to `term()` or copy the definition
- Documentation links to the type are dead
- Changing the private definition silently changes the public contract

Only the result type and constraint bounds are audited by default. Types reached
through another module (`other_mod:t()`) are never flagged here.",
        remediation: "\
Export the type from the module so its documentation lists a
`{\"kind\": \"type\"}` entry for it, or stop exposing it by returning an exported
or built-in type instead.

If the leak is intentional, list the type name in the check's allow list in
typeleak.toml.",
        examples: ExamplePair {
            before: r#"{"module": "shop_cart", "entries": [
  {"kind": "function", "name": "new", "arity": 0,
   "signature": {"type": "fun", "params": [],
                 "result": {"type": "user_type", "name": "cart", "args": []}}}
]}"#,
            after: r#"{"module": "shop_cart", "entries": [
  {"kind": "type", "name": "cart", "arity": 0},
  {"kind": "function", "name": "new", "arity": 0,
   "signature": {"type": "fun", "params": [],
                 "result": {"type": "user_type", "name": "cart", "args": []}}}
]}"#,
        },
    }
}

fn explain_tool_analysis() -> Explanation {
    Explanation {
        title: "Module Analysis Failed",
        description: "\
The module's documentation was present but could not be analyzed. The module is
reported as failed and the rest of the run continues.

This happens when:
- the documentation file is not valid JSON or has the wrong entry shape
- a function signature is neither a plain nor a constrained function shape
- a type expression uses a node shape the analyzer has no rule for",
        remediation: "\
Regenerate the documentation file with a supported exporter, or fix the offending
entry by hand. The finding message names the function and the raw node.",
        examples: ExamplePair {
            before: r#"{"module": "billing", "entries": [
  {"kind": "function", "name": "charge", "arity": 1,
   "signature": {"type": "clause_list", "clauses": []}}
]}"#,
            after: r#"{"module": "billing", "entries": [
  {"kind": "function", "name": "charge", "arity": 1,
   "signature": {"type": "fun", "params": [{"type": "var", "name": "Amount"}],
                 "result": {"type": "atom", "value": "ok"}}}
]}"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_private_type() -> Explanation {
    let mut exp = explain_private_in_signature();
    exp.title = "Private Type";
    exp
}

fn explain_unrecognized_signature_shape() -> Explanation {
    Explanation {
        title: "Unrecognized Signature Shape",
        description: "\
A function's specification is neither a plain function shape
(`{\"type\": \"fun\", \"params\": [...], \"result\": ...}`) nor a constrained one
(`{\"type\": \"bounded_fun\", \"fun\": ..., \"constraints\": [...]}`).",
        remediation: "\
Emit the signature in one of the two supported shapes. Constraints must be objects
of the form `{\"type\": \"constraint\", \"var\": \"V\", \"bound\": ...}`.",
        examples: ExamplePair {
            before: r#"{"module": "session", "entries": [
  {"kind": "function", "name": "close", "arity": 0,
   "signature": {"type": "fun", "result": {"type": "atom", "value": "ok"}}}
]}"#,
            after: r#"{"module": "session", "entries": [
  {"kind": "function", "name": "close", "arity": 0,
   "signature": {"type": "fun", "params": [], "result": {"type": "atom", "value": "ok"}}}
]}"#,
        },
    }
}

fn explain_unrecognized_node_shape() -> Explanation {
    Explanation {
        title: "Unrecognized Type Node",
        description: "\
A type expression inside a result type or constraint bound has no analysis rule:
it lacks a `type` tag, misses a required field, or is a built-in shape without an
`args` list.",
        remediation: "\
Check the exporter output for the node quoted in the finding. Built-in shapes need
an `args` list; the only non-list form accepted is `{\"type\": \"map\", \"args\": \"any\"}`.",
        examples: ExamplePair {
            before: r#"{"module": "geo", "entries": [
  {"kind": "function", "name": "origin", "arity": 0,
   "signature": {"type": "fun", "params": [],
                 "result": {"type": "tuple", "args": "any"}}}
]}"#,
            after: r#"{"module": "geo", "entries": [
  {"kind": "function", "name": "origin", "arity": 0,
   "signature": {"type": "fun", "params": [],
                 "result": {"type": "tuple", "args": [{"type": "integer", "value": 0},
                                                      {"type": "integer", "value": 0}]}}}
]}"#,
        },
    }
}

fn explain_malformed_docs() -> Explanation {
    let mut exp = explain_tool_analysis();
    exp.title = "Malformed Documentation";
    exp.remediation = "\
The file must be a JSON object with a `module` string and an `entries` list (or
`null` when the module publishes no documentation).";
    exp.examples = ExamplePair {
        before: r#"{"module": "billing", "entries": {"charge": 1}}"#,
        after: r#"{"module": "billing", "entries": [
  {"kind": "function", "name": "charge", "arity": 1}
]}"#,
    };
    exp
}

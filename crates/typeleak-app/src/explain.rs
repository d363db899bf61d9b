//! `typeleak explain <id>`: guidance for a check id or a finding code.

use serde_json::Value;
use typeleak_types::explain::{self, CHECK_CODES, CheckCodes, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        identifier: String,
        explanation: Explanation,
        /// The check that owns `identifier` (or is `identifier`).
        group: &'static CheckCodes,
    },
    NotFound { identifier: String },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    let found = explain::lookup_explanation(identifier).zip(explain::check_group(identifier));
    match found {
        Some((explanation, group)) => ExplainOutput::Found {
            identifier: identifier.to_string(),
            explanation,
            group,
        },
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
        },
    }
}

pub fn format_explanation(identifier: &str, exp: &Explanation, group: &CheckCodes) -> String {
    let mut out = format!("{identifier}: {}\n\n", exp.title);
    out.push_str(exp.description);
    out.push_str("\n\nRemediation:\n");
    push_indented(&mut out, exp.remediation);

    out.push_str("\nReported as:\n");
    push_group(&mut out, group, Some(identifier));

    out.push('\n');
    push_docs_example(&mut out, "Flagged", exp.examples.before);
    out.push('\n');
    push_docs_example(&mut out, "Clean", exp.examples.after);
    out
}

pub fn format_not_found(identifier: &str) -> String {
    let mut out = format!("unknown check id or code: {identifier}\n\n");
    out.push_str("Known checks and their codes:\n");
    for group in CHECK_CODES {
        push_group(&mut out, group, None);
    }
    out
}

fn push_group(out: &mut String, group: &CheckCodes, highlight: Option<&str>) {
    let mark = |id: &str| if highlight == Some(id) { "  <-" } else { "" };
    out.push_str(&format!("  {}{}\n", group.check_id, mark(group.check_id)));
    for code in group.codes {
        out.push_str(&format!("    {code}{}\n", mark(*code)));
    }
}

/// Pretty-prints the example as the docs file it would be on disk.
fn push_docs_example(out: &mut String, label: &str, raw: &str) {
    let parsed: Option<Value> = serde_json::from_str(raw).ok();
    let module = parsed
        .as_ref()
        .and_then(|v| v.get("module"))
        .and_then(Value::as_str)
        .unwrap_or("module");
    out.push_str(&format!("{label} ({module}.docs.json):\n"));

    let body = parsed
        .as_ref()
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .unwrap_or_else(|| raw.to_string());
    push_indented(out, &body);
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

use crate::fingerprint::fingerprint_for_module;
use crate::policy::EffectiveConfig;
use crate::report::{ModuleOutcome, ModuleResult};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::json;
use typeleak_types::{Finding, Location, ids};

pub fn run_all(modules: &[ModuleResult], cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    private_in_signature(modules, cfg, out);
    analysis_failures(modules, cfg, out);
}

/// Compile allowlist patterns. Patterns are validated by the settings layer; any that
/// still fail to compile are skipped.
pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for glob in allow.iter().filter_map(|p| Glob::new(p).ok()) {
        builder.add(glob);
    }
    builder.build().ok()
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow.map(|set| set.is_match(value)).unwrap_or(false)
}

fn location(result: &ModuleResult) -> Option<Location> {
    Some(Location {
        path: result.path.clone(),
        line: None,
        col: None,
    })
}

fn private_in_signature(modules: &[ModuleResult], cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE) else {
        return;
    };

    for result in modules {
        let ModuleOutcome::Report(report) = &result.outcome else {
            continue;
        };

        for name in &report.types {
            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE.to_string(),
                code: ids::CODE_PRIVATE_TYPE.to_string(),
                message: format!(
                    "module '{}' exposes unexported type '{}' in an exported signature",
                    report.module, name
                ),
                location: location(result),
                help: Some(
                    "Export the type, or stop exposing it through exported function specs."
                        .to_string(),
                ),
                url: None,
                fingerprint: Some(fingerprint_for_module(
                    ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE,
                    ids::CODE_PRIVATE_TYPE,
                    &report.module,
                    name,
                )),
                data: json!({
                    "module": report.module,
                    "type": name,
                }),
            });
        }
    }
}

fn analysis_failures(modules: &[ModuleResult], cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_TOOL_ANALYSIS) else {
        return;
    };

    for result in modules {
        let (code, subject, message, data) = match &result.outcome {
            ModuleOutcome::Failed(err) => (
                err.code(),
                err.function.as_str(),
                format!("module '{}' could not be analyzed: {}", result.module, err),
                json!({
                    "module": result.module,
                    "function": err.function,
                    "node": err.raw(),
                }),
            ),
            ModuleOutcome::Malformed(reason) => (
                ids::CODE_MALFORMED_DOCS,
                "docs",
                format!(
                    "module '{}' has malformed documentation: {}",
                    result.module, reason
                ),
                json!({
                    "module": result.module,
                    "reason": reason,
                }),
            ),
            ModuleOutcome::Report(_) | ModuleOutcome::Unavailable => continue,
        };

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_TOOL_ANALYSIS.to_string(),
            code: code.to_string(),
            message,
            location: location(result),
            help: Some(format!("Run `typeleak explain {code}` for supported shapes.")),
            url: None,
            fingerprint: Some(fingerprint_for_module(
                ids::CHECK_TOOL_ANALYSIS,
                code,
                &result.module,
                subject,
            )),
            data,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnalysisError, ShapeError};
    use crate::model::PrivateTypeReport;
    use crate::test_support::config;
    use typeleak_types::{DocsPath, Severity};

    fn result(module: &str, outcome: ModuleOutcome) -> ModuleResult {
        ModuleResult {
            module: module.to_string(),
            path: DocsPath::new(format!("{module}.docs.json")),
            outcome,
        }
    }

    #[test]
    fn one_finding_per_private_type() {
        let modules = vec![result(
            "cart",
            ModuleOutcome::Report(PrivateTypeReport {
                module: "cart".to_string(),
                types: vec!["item".to_string(), "line".to_string()],
            }),
        )];

        let mut out = Vec::new();
        run_all(&modules, &config(Severity::Warning), &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].code, ids::CODE_PRIVATE_TYPE);
        assert_eq!(out[0].severity, Severity::Warning);
        assert_eq!(out[0].data["type"], "item");
        assert_eq!(out[1].data["type"], "line");
        assert_eq!(
            out[0].location.as_ref().map(|l| l.path.as_str()),
            Some("cart.docs.json")
        );
        assert_ne!(out[0].fingerprint, out[1].fingerprint);
    }

    #[test]
    fn failures_and_malformed_docs_use_tool_analysis() {
        let modules = vec![
            result(
                "a",
                ModuleOutcome::Failed(AnalysisError {
                    function: "f/0".to_string(),
                    source: ShapeError::Signature(json!({"type": "x"})),
                }),
            ),
            result("b", ModuleOutcome::Malformed("expected list".to_string())),
            result("c", ModuleOutcome::Unavailable),
        ];

        let mut out = Vec::new();
        run_all(&modules, &config(Severity::Warning), &mut out);

        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|f| f.check_id == ids::CHECK_TOOL_ANALYSIS));
        assert_eq!(out[0].code, ids::CODE_UNRECOGNIZED_SIGNATURE_SHAPE);
        assert_eq!(out[0].data["function"], "f/0");
        assert_eq!(out[1].code, ids::CODE_MALFORMED_DOCS);
        assert_eq!(out[1].severity, Severity::Error);
    }

    #[test]
    fn disabled_checks_emit_nothing() {
        let mut cfg = config(Severity::Error);
        for policy in cfg.checks.values_mut() {
            policy.enabled = false;
        }
        let modules = vec![
            result("b", ModuleOutcome::Malformed("bad".to_string())),
            result(
                "c",
                ModuleOutcome::Report(PrivateTypeReport {
                    module: "c".to_string(),
                    types: vec!["t".to_string()],
                }),
            ),
        ];

        let mut out = Vec::new();
        run_all(&modules, &cfg, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn allowlist_matches_globs() {
        let allow = build_allowlist(&["internal_*".to_string(), "state".to_string()]);
        assert!(is_allowed(allow.as_ref(), "internal_ref"));
        assert!(is_allowed(allow.as_ref(), "state"));
        assert!(!is_allowed(allow.as_ref(), "cart"));
        assert!(!is_allowed(None, "state"));
        assert!(build_allowlist(&[]).is_none());
    }
}

use crate::model::{DocLookup, DocsModel, ModuleInput};
use crate::policy::{AnalysisOptions, CheckPolicy, EffectiveConfig, FailOn};
use std::collections::BTreeMap;
use typeleak_types::{DocEntry, DocsPath, FunctionSignature, Severity, TypeExpr, ids};

/// A function entry whose spec returns `result`.
pub fn returns(name: &str, result: TypeExpr) -> DocEntry {
    DocEntry::function(
        name,
        0,
        Some(FunctionSignature::plain(Vec::new(), result).to_json()),
    )
}

pub fn spec(name: &str, arity: u32, signature: FunctionSignature) -> DocEntry {
    DocEntry::function(name, arity, Some(signature.to_json()))
}

pub fn exported(names: &[&str]) -> Vec<DocEntry> {
    names.iter().map(|n| DocEntry::exported_type(n, 0)).collect()
}

pub fn found(module: &str, entries: Vec<DocEntry>) -> ModuleInput {
    ModuleInput {
        module: module.to_string(),
        path: DocsPath::new(format!("{module}.docs.json")),
        docs: DocLookup::Found(entries),
    }
}

pub fn module_with(module: &str, docs: DocLookup) -> ModuleInput {
    ModuleInput {
        module: module.to_string(),
        path: DocsPath::new(format!("{module}.docs.json")),
        docs,
    }
}

pub fn model(modules: Vec<ModuleInput>) -> DocsModel {
    DocsModel {
        docs_root: DocsPath::new("."),
        modules,
    }
}

pub fn config(severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE.to_string(),
        CheckPolicy::enabled(severity),
    );
    checks.insert(
        ids::CHECK_TOOL_ANALYSIS.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        analysis: AnalysisOptions::default(),
        checks,
    }
}

pub fn config_with_allow(severity: Severity, allow: Vec<&str>) -> EffectiveConfig {
    let mut cfg = config(severity);
    if let Some(policy) = cfg.checks.get_mut(ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE) {
        policy.allow = allow.into_iter().map(|s| s.to_string()).collect();
    }
    cfg
}

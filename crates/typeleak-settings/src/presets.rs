use std::collections::BTreeMap;
use typeleak_domain::policy::{AnalysisOptions, CheckPolicy, EffectiveConfig, FailOn};
use typeleak_types::Severity;

pub const KNOWN_PROFILES: &[&str] = &["strict", "warn", "audit"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "warn" => Some(warn_profile()),
        "audit" => Some(audit_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        analysis: AnalysisOptions::default(),
        checks: default_checks(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        analysis: AnalysisOptions::default(),
        checks: default_checks(Severity::Warning),
    }
}

fn audit_profile() -> EffectiveConfig {
    // Widest net: parameters and nested arguments too, reported as warnings.
    EffectiveConfig {
        profile: "audit".to_string(),
        fail_on: FailOn::Error,
        max_findings: 1000,
        analysis: AnalysisOptions {
            audit_parameters: true,
            recurse_type_arguments: true,
        },
        checks: default_checks(Severity::Warning),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use typeleak_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_TYPES_PRIVATE_IN_SIGNATURE.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    // A module that cannot be analyzed is never silently green.
    m.insert(
        CHECK_TOOL_ANALYSIS.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );

    m
}

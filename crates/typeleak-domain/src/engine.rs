use crate::analysis::{analyze_module, classify};
use crate::checks::{self, build_allowlist, is_allowed};
use crate::model::{DocLookup, DocsModel, ModuleInput};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, ModuleOutcome, ModuleResult, SeverityCounts};
use globset::GlobSet;
use typeleak_types::{Finding, ModuleTypes, Severity, TypeleakData, Verdict, ids};

pub fn evaluate(model: &DocsModel, cfg: &EffectiveConfig) -> DomainReport {
    let allow = cfg
        .checks
        .get(ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE)
        .and_then(|p| build_allowlist(&p.allow));

    let mut functions_scanned = 0u32;
    let modules: Vec<ModuleResult> = model
        .modules
        .iter()
        .map(|input| {
            let (result, functions) = run_module(input, cfg, allow.as_ref());
            functions_scanned += functions;
            result
        })
        .collect();

    let mut findings: Vec<Finding> = Vec::new();
    checks::run_all(&modules, cfg, &mut findings);

    // Stable sort: findings within one module keep first-occurrence order.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = TypeleakData {
        profile: cfg.profile.clone(),
        modules_scanned: count_outcomes(&modules, |o| matches!(o, ModuleOutcome::Report(_))),
        modules_skipped: count_outcomes(&modules, |o| matches!(o, ModuleOutcome::Unavailable)),
        modules_failed: count_outcomes(&modules, |o| {
            matches!(o, ModuleOutcome::Failed(_) | ModuleOutcome::Malformed(_))
        }),
        functions_scanned,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
        modules: modules
            .iter()
            .filter_map(ModuleResult::printable)
            .cloned()
            .map(ModuleTypes::from)
            .collect(),
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
        modules,
    }
}

fn run_module(
    input: &ModuleInput,
    cfg: &EffectiveConfig,
    allow: Option<&GlobSet>,
) -> (ModuleResult, u32) {
    let mut functions = 0;
    let outcome = match &input.docs {
        DocLookup::Found(entries) => {
            functions = classify(entries).functions.len() as u32;
            match analyze_module(&input.module, entries, cfg.analysis) {
                Ok(mut report) => {
                    report.types.retain(|name| !is_allowed(allow, name));
                    ModuleOutcome::Report(report)
                }
                Err(err) => ModuleOutcome::Failed(err),
            }
        }
        DocLookup::Unavailable => ModuleOutcome::Unavailable,
        DocLookup::Malformed(reason) => ModuleOutcome::Malformed(reason.clone()),
    };

    let result = ModuleResult {
        module: input.module.clone(),
        path: input.path.clone(),
        outcome,
    };
    (result, functions)
}

fn count_outcomes(modules: &[ModuleResult], pred: impl Fn(&ModuleOutcome) -> bool) -> u32 {
    modules.iter().filter(|m| pred(&m.outcome)).count() as u32
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) check_id
    // 4) code
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let path = |f: &Finding| {
        f.location
            .as_ref()
            .map(|l| l.path.as_str().to_string())
            .unwrap_or_else(|| "~".to_string())
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then_with(|| path(a).cmp(&path(b)))
        .then_with(|| a.check_id.cmp(&b.check_id))
        .then_with(|| a.code.cmp(&b.code))
}

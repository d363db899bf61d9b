//! The `check` use case: load module documentation, audit it, and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use time::OffsetDateTime;
use typeleak_repo::ModuleSelection;
use typeleak_settings::{Overrides, ResolvedConfig};
use typeleak_types::{ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, TypeleakReport, Verdict};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Directory holding `<module>.docs.json` files.
    pub docs_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Explicitly requested module names; empty means every discovered module.
    pub modules: Vec<String>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: TypeleakReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, load docs, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        typeleak_settings::TypeleakConfigV1::default()
    } else {
        typeleak_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = typeleak_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let selection = ModuleSelection {
        names: input.modules.clone(),
        include: resolved.modules.include.clone(),
        exclude: resolved.modules.exclude.clone(),
    };
    let model = typeleak_repo::build_docs_model(input.docs_root, &selection)
        .context("build docs model")?;

    let domain_report = typeleak_domain::evaluate(&model, &resolved.effective);

    tracing::info!(
        profile = resolved.effective.profile.as_str(),
        modules_scanned = domain_report.data.modules_scanned,
        modules_skipped = domain_report.data.modules_skipped,
        modules_failed = domain_report.data.modules_failed,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        verdict = ?domain_report.verdict,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "typeleak".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeleak_types::{ModuleTypes, ids};

    fn write_docs(root: &Utf8Path, module: &str, body: &str) {
        std::fs::write(root.join(format!("{module}.docs.json")), body).expect("write docs");
    }

    const SHOP_CART: &str = r#"{"module":"shop_cart","entries":[
        {"kind":"type","name":"cart","arity":0},
        {"kind":"function","name":"new","arity":0,
         "signature":{"type":"fun","params":[],
                      "result":{"type":"user_type","name":"cart","args":[]}}},
        {"kind":"function","name":"state","arity":1,
         "signature":{"type":"fun",
                      "params":[{"type":"user_type","name":"cart","args":[]}],
                      "result":{"type":"user_type","name":"cart_state","args":[]}}}
    ]}"#;

    #[test]
    fn empty_config_uses_defaults() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");

        let output = run_check(CheckInput {
            docs_root: root,
            config_text: "",
            overrides: Overrides::default(),
            modules: Vec::new(),
        })
        .expect("run_check");

        assert_eq!(output.resolved_config.effective.profile, "strict");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(output.report.tool.name, "typeleak");
    }

    #[test]
    fn private_result_type_fails_the_strict_profile() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        write_docs(root, "shop_cart", SHOP_CART);

        let output = run_check(CheckInput {
            docs_root: root,
            config_text: "",
            overrides: Overrides::default(),
            modules: Vec::new(),
        })
        .expect("run_check");

        let report = output.report;
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].check_id, ids::CHECK_TYPES_PRIVATE_IN_SIGNATURE);
        assert_eq!(
            report.data.modules,
            vec![ModuleTypes {
                module: "shop_cart".to_string(),
                types: vec!["cart_state".to_string()],
            }]
        );
        assert_eq!(report.data.functions_scanned, 2);
    }

    #[test]
    fn warn_profile_override_keeps_exit_code_zero() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        write_docs(root, "shop_cart", SHOP_CART);

        let output = run_check(CheckInput {
            docs_root: root,
            config_text: "profile = \"strict\"",
            overrides: Overrides {
                profile: Some("warn".to_string()),
                max_findings: None,
            },
            modules: Vec::new(),
        })
        .expect("run_check");

        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(verdict_exit_code(&output.report.verdict), 0);
    }

    #[test]
    fn requested_missing_module_is_skipped() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        write_docs(root, "shop_cart", SHOP_CART);

        let output = run_check(CheckInput {
            docs_root: root,
            config_text: "",
            overrides: Overrides::default(),
            modules: vec!["ghost".to_string()],
        })
        .expect("run_check");

        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.data.modules_skipped, 1);
        assert_eq!(output.report.data.modules_scanned, 0);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");

        let err = run_check(CheckInput {
            docs_root: root,
            config_text: "profile = [",
            overrides: Overrides::default(),
            modules: Vec::new(),
        })
        .expect_err("must fail");
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(&Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(&Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(&Verdict::Fail), 2);
    }
}

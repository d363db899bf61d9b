use anyhow::Context;
use time::OffsetDateTime;
use typeleak_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableModule, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
use typeleak_types::{
    Finding, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta, TypeleakData, TypeleakReport,
    Verdict, ids,
};

pub fn parse_report_json(text: &str) -> anyhow::Result<TypeleakReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse typeleak report")
}

pub fn serialize_report(report: &TypeleakReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Build a report describing a failure that prevented the check from running at all.
pub fn runtime_error_report(message: &str) -> TypeleakReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "typeleak".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Check the docs root and typeleak.toml, then re-run.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: TypeleakData {
            profile: "unknown".to_string(),
            modules_scanned: 0,
            modules_skipped: 0,
            modules_failed: 0,
            functions_scanned: 0,
            findings_total: 1,
            findings_emitted: 1,
            truncated_reason: None,
            modules: Vec::new(),
        },
    }
}

pub fn to_renderable(report: &TypeleakReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            modules_scanned: report.data.modules_scanned,
            modules_skipped: report.data.modules_skipped,
            modules_failed: report.data.modules_failed,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
            modules: report
                .data
                .modules
                .iter()
                .map(|m| RenderableModule {
                    module: m.module.clone(),
                    types: m.types.clone(),
                })
                .collect(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

use crate::DocsPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for typeleak reports.
pub const SCHEMA_REPORT_V1: &str = "typeleak.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: DocsPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stable identifier intended for dedup and trending. A hash of
    /// `check_id + code + module + salient fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Private types found in one module, distinct and in first-occurrence order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleTypes {
    pub module: String,
    pub types: Vec<String>,
}

/// Typeleak-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TypeleakData {
    pub profile: String,

    pub modules_scanned: u32,
    pub modules_skipped: u32,
    pub modules_failed: u32,
    pub functions_scanned: u32,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,

    /// Modules with at least one private type, in analysis order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<ModuleTypes>,
}

/// A generic receipt/envelope.
///
/// Keeping this generic allows the tool to embed its own data while still enforcing a
/// stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = TypeleakData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type TypeleakReport = ReportEnvelope<TypeleakData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn report_serializes_with_rfc3339_timestamps_and_lowercase_enums() {
        let report = TypeleakReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "typeleak".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:06 UTC),
            verdict: Verdict::Warn,
            findings: vec![Finding {
                severity: Severity::Warning,
                check_id: "types.private_in_signature".to_string(),
                code: "private_type".to_string(),
                message: "m".to_string(),
                location: None,
                help: None,
                url: None,
                fingerprint: None,
                data: JsonValue::Null,
            }],
            data: TypeleakData {
                profile: "warn".to_string(),
                ..TypeleakData::default()
            },
        };

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["started_at"], "2026-01-02T03:04:05Z");
        assert_eq!(value["verdict"], "warn");
        assert_eq!(value["findings"][0]["severity"], "warning");
        assert!(value["findings"][0].get("data").is_none());
        assert!(value["data"].get("modules").is_none());
        assert_eq!(value["data"]["modules_scanned"], json!(0));

        let back: TypeleakReport = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, report);
    }
}

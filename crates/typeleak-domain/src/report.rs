use crate::error::AnalysisError;
use crate::model::PrivateTypeReport;
use typeleak_types::{DocsPath, Finding, Severity, TypeleakData, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// What happened to one module during a run.
#[derive(Clone, Debug, PartialEq)]
pub enum ModuleOutcome {
    /// Analysis completed; the report may be empty.
    Report(PrivateTypeReport),
    Unavailable,
    Malformed(String),
    Failed(AnalysisError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleResult {
    pub module: String,
    pub path: DocsPath,
    pub outcome: ModuleOutcome,
}

impl ModuleResult {
    /// The report to present, if there is anything to show.
    pub fn printable(&self) -> Option<&PrivateTypeReport> {
        match &self.outcome {
            ModuleOutcome::Report(report) if !report.is_empty() => Some(report),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TypeleakData,
    pub counts: SeverityCounts,
    pub modules: Vec<ModuleResult>,
}

use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Typeleak report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!("- Verdict: **{}**\n", verdict));
    out.push_str(&format!(
        "- Modules: {} scanned, {} skipped, {} failed\n",
        report.data.modules_scanned, report.data.modules_skipped, report.data.modules_failed
    ));
    out.push_str(&format!(
        "- Findings: {} (emitted) / {} (total)\n\n",
        report.data.findings_emitted, report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    let leaky: Vec<_> = report
        .data
        .modules
        .iter()
        .filter(|m| !m.types.is_empty())
        .collect();
    if !leaky.is_empty() {
        out.push_str("## Private types in exported signatures\n\n");
        out.push_str("| Module | Types |\n| --- | --- |\n");
        for m in leaky {
            let types: Vec<String> = m.types.iter().map(|t| format!("`{}`", t)).collect();
            out.push_str(&format!("| `{}` | {} |\n", m.module, types.join(", ")));
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        match &f.location {
            Some(loc) => out.push_str(&format!(
                "- [{}] `{}` / `{}`: {} (`{}`)\n",
                sev, f.check_id, f.code, f.message, loc.path
            )),
            None => out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                sev, f.check_id, f.code, f.message
            )),
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

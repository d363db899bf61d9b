//! Render use cases: listing, markdown, and GitHub annotations from in-memory reports.

use typeleak_render::RenderableReport;

/// `Module: <name>` listing of every module with private types.
pub fn render_listing(report: &RenderableReport) -> String {
    typeleak_render::render_module_listing(&report.data.modules)
}

pub fn render_markdown(report: &RenderableReport) -> String {
    typeleak_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    typeleak_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

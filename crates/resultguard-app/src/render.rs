//! Render use cases: markdown and GitHub annotations from in-memory reports.

use resultguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    resultguard_render::render_markdown(report)
}

/// At most `max` annotations, in report order.
pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    resultguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

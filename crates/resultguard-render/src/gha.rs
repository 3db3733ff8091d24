use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col},endLine={end_line},endColumn={end_col},title=resultguard {code}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut props: Vec<String> = Vec::new();
        if let Some(loc) = &f.location {
            props.push(format!("file={}", escape_property(&loc.path)));
            let fields = [
                ("line", loc.line),
                ("col", loc.col),
                ("endLine", loc.end_line),
                ("endColumn", loc.end_col),
            ];
            for (key, value) in fields {
                if let Some(v) = value {
                    props.push(format!("{key}={v}"));
                }
            }
        }
        props.push(format!(
            "title={}",
            escape_property(&format!("resultguard {}", f.code))
        ));

        let message = escape_data(&f.message);
        out.push(format!("::{} {}::{}", level, props.join(","), message));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

use crate::{RenderableLocation, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Resultguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!("- Verdict: **{}**\n", verdict));
    if !report.data.profile.is_empty() {
        out.push_str(&format!("- Profile: `{}`\n", report.data.profile));
    }
    out.push_str(&format!(
        "- Call sites: {} scanned, {} not applicable\n- Findings: {} (emitted) / {} (total)\n\n",
        report.data.call_sites_scanned,
        report.data.not_applicable,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No ignored results.\n");
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
                "- [{}] `{}` `{}`: {}\n",
                sev,
                position(loc),
                f.code,
                f.message
            )),
            None => out.push_str(&format!("- [{}] `{}`: {}\n", sev, f.code, f.message)),
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

fn position(loc: &RenderableLocation) -> String {
    let mut s = loc.path.clone();
    if let Some(line) = loc.line {
        s.push_str(&format!(":{line}"));
        if let Some(col) = loc.col {
            s.push_str(&format!(":{col}"));
        }
    }
    s
}

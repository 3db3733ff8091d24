use anyhow::Context;
use resultguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use resultguard_types::{
    Finding, ReportEnvelope, ResultguardData, ResultguardReport, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<ResultguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse resultguard v1 report")
}

pub fn serialize_report(report: &ResultguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ResultguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            call_sites_scanned: report.data.call_sites_scanned,
            not_applicable: report.data.not_applicable,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
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
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
            end_line: loc.end_line,
            end_col: loc.end_col,
        }),
        help: f.help.clone(),
    }
}

fn envelope(verdict: Verdict, findings: Vec<Finding>, data: ResultguardData) -> ResultguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "resultguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict,
        findings,
        data,
    }
}

/// A failing report carrying a single `tool.runtime` finding.
pub fn runtime_error_report(message: &str) -> ResultguardReport {
    envelope(
        Verdict::Fail,
        vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run resultguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        ResultguardData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..ResultguardData::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_report_parses_back() {
        let report = runtime_error_report("boom");
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");

        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.verdict, Verdict::Fail);
        assert_eq!(parsed.findings[0].check_id, ids::CHECK_TOOL_RUNTIME);
        assert_eq!(parsed.findings[0].message, "boom");
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{ "schema": "otherguard.report.v1" }"#).expect_err("fail");
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn runtime_error_renders_as_fail() {
        let renderable = to_renderable(&runtime_error_report("boom"));
        assert_eq!(renderable.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(renderable.data.profile, "unknown");
        assert_eq!(renderable.data.findings_emitted, 1);
        assert!(renderable.findings[0].location.is_none());
    }

    #[test]
    fn renderable_keeps_end_positions() {
        let mut report = runtime_error_report("boom");
        report.findings.clear();
        report.findings.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_CALLS_RESULT_IGNORED.to_string(),
            code: ids::CODE_PURE_METHOD.to_string(),
            message: "Result of 'Money.plus()' is ignored".to_string(),
            location: Some(resultguard_types::Location {
                path: resultguard_types::RepoPath::new("src/Money.java"),
                line: Some(2),
                col: Some(3),
                end_line: Some(2),
                end_col: Some(14),
            }),
            help: None,
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        });

        let renderable = to_renderable(&report);
        let loc = renderable.findings[0].location.as_ref().expect("location");
        assert_eq!(loc.end_col, Some(14));
        assert_eq!(renderable.findings[0].severity, RenderableSeverity::Warning);
    }
}

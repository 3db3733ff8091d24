//! The `check` use case: resolve config, evaluate the policy over a call-site dump, and produce a
//! report.

use anyhow::Context;
use camino::Utf8Path;
use resultguard_domain::{DecisionEngine, SharedEngine};
use resultguard_settings::{Overrides, ResolvedConfig, ResultguardConfigV1};
use resultguard_types::{ReportEnvelope, ResultguardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::debug;

/// Where the call-site dump comes from.
#[derive(Clone, Copy, Debug)]
pub enum DumpSource<'a> {
    Path(&'a Utf8Path),
    Text(&'a str),
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub dump: DumpSource<'a>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ResultguardReport,
    /// The resolved configuration used, including any dropped pattern entries.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve a config. An empty text means defaults.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        ResultguardConfigV1::default()
    } else {
        resultguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    resultguard_settings::resolve_config(cfg, overrides).context("resolve config")
}

pub fn build_engine(resolved: &ResolvedConfig) -> DecisionEngine {
    DecisionEngine::new(resolved.effective.clone(), resolved.patterns.clone())
}

/// Resolve `config_text` and swap the resulting engine into `shared`.
///
/// On error the current engine stays installed.
pub fn reload_engine(
    shared: &SharedEngine,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let resolved = load_config(config_text, overrides)?;
    shared.replace(build_engine(&resolved));
    Ok(resolved)
}

/// Run the check use case: parse config, load the dump, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides.clone())?;

    let dump = match input.dump {
        DumpSource::Path(path) => resultguard_resolved::load_dump(path)?,
        DumpSource::Text(text) => resultguard_resolved::parse_dump(text)?,
    };
    let model = resultguard_resolved::build_analysis_model(&dump);

    let engine = build_engine(&resolved);
    let domain_report = resultguard_domain::evaluate(&model, &engine);
    debug!(
        verdict = ?domain_report.verdict,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        "evaluated call sites"
    );

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "resultguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
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

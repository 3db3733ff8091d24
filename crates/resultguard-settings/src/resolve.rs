use crate::model::{PatternEntry, PatternEntryV1, ResultguardConfigV1, SCHEMA_CONFIG_V1};
use crate::presets;
use anyhow::Context;
use resultguard_domain::patterns::{Pattern, PatternError, PatternSet};
use resultguard_domain::policy::{EffectiveConfig, FailOn};
use resultguard_types::Severity;
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

/// A pattern entry that could not be turned into a [`Pattern`]. The entry is skipped; the rest
/// of the configuration still loads.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("patterns[{index}]: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("patterns[{index}]: expected a table with 'class' and 'methods' strings, got {found}")]
    InvalidEntry { index: usize, found: String },

    #[error("patterns[{index}]: invalid regex '{methods}' for {class_name}: {message}")]
    InvalidRegex {
        index: usize,
        class_name: String,
        methods: String,
        message: String,
    },
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub patterns: PatternSet,
    /// Entries skipped while building `patterns`, in document order.
    pub dropped: Vec<ConfigurationError>,
}

impl ResolvedConfig {
    /// The persisted form: the two policy flags and the user patterns, in order.
    pub fn to_config(&self) -> ResultguardConfigV1 {
        ResultguardConfigV1 {
            schema: Some(SCHEMA_CONFIG_V1.to_string()),
            report_all_non_library_calls: Some(self.effective.report_all_non_library_calls),
            honor_inferred_purity: Some(self.effective.honor_inferred_purity),
            patterns: self
                .patterns
                .user_patterns()
                .iter()
                .map(|p| PatternEntry::rule(p.class_name(), p.methods()))
                .collect(),
            ..ResultguardConfigV1::default()
        }
    }
}

pub fn resolve_config(
    cfg: ResultguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());
    if !presets::known_profiles().contains(&profile.as_str()) {
        warn!(profile = %profile, "unknown profile, using strict");
    }

    let mut effective = presets::preset(&profile);

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }
    if let Some(sev) = cfg.severity.as_deref() {
        effective.severity = parse_severity(sev).context("invalid severity")?;
    }
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }
    if let Some(flag) = cfg.report_all_non_library_calls {
        effective.report_all_non_library_calls = flag;
    }
    if let Some(flag) = cfg.honor_inferred_purity {
        effective.honor_inferred_purity = flag;
    }

    let (patterns, dropped) = build_patterns(&cfg.patterns);

    Ok(ResolvedConfig {
        effective,
        patterns,
        dropped,
    })
}

fn build_patterns(entries: &[PatternEntry]) -> (PatternSet, Vec<ConfigurationError>) {
    let mut set = PatternSet::with_defaults();
    let mut dropped = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match build_pattern(index, entry) {
            Ok(pattern) => set.push(pattern),
            Err(err) => {
                warn!(%err, "dropping pattern entry");
                dropped.push(err);
            }
        }
    }

    (set, dropped)
}

fn build_pattern(index: usize, entry: &PatternEntry) -> Result<Pattern, ConfigurationError> {
    let PatternEntryV1 { class, methods } = match entry {
        PatternEntry::Rule(rule) => rule,
        PatternEntry::Malformed(value) => {
            return Err(ConfigurationError::InvalidEntry {
                index,
                found: value.type_str().to_string(),
            });
        }
    };

    let class = class
        .as_deref()
        .ok_or(ConfigurationError::MissingField {
            index,
            field: "class",
        })?;
    let methods = methods
        .as_deref()
        .ok_or(ConfigurationError::MissingField {
            index,
            field: "methods",
        })?;

    Pattern::new(class, methods).map_err(|err| match err {
        PatternError::EmptyClassName => ConfigurationError::MissingField {
            index,
            field: "class",
        },
        PatternError::InvalidRegex {
            class_name,
            methods,
            source,
        } => ConfigurationError::InvalidRegex {
            index,
            class_name,
            methods,
            message: source.to_string(),
        },
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

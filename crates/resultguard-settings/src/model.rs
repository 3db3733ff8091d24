use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "resultguard.config.v1";

/// `resultguard.toml` schema v1.
///
/// Every field is optional. Pattern entries are parsed leniently: a bad entry is kept as
/// [`PatternEntry::Malformed`] and dropped during resolution instead of failing the document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultguardConfigV1 {
    /// Optional schema string for tooling (`resultguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `strict` (default) or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Override the preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Report every ignored non-void result of a project (non-library) method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_all_non_library_calls: Option<bool>,

    /// Treat inferred `@Contract(pure = true)` like an explicit one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honor_inferred_purity: Option<bool>,

    /// Additional must-use methods, appended after the built-in table.
    ///
    /// `methods` uses Rust `regex` syntax. Lookaround, backreferences and possessive
    /// quantifiers are not supported; entries using them are dropped as invalid regexes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<PatternEntry>,
}

/// One `[[patterns]]` entry as written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PatternEntry {
    Rule(PatternEntryV1),
    /// Anything that is not a table of optional strings.
    Malformed(#[schemars(with = "serde_json::Value")] toml::Value),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternEntryV1 {
    /// Fully qualified declaring class, matched exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Regex over the method name; must match the whole name. Rust `regex` syntax, so
    /// Java-only constructs such as lookaround are rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<String>,
}

impl PatternEntry {
    pub fn rule(class: impl Into<String>, methods: impl Into<String>) -> Self {
        PatternEntry::Rule(PatternEntryV1 {
            class: Some(class.into()),
            methods: Some(methods.into()),
        })
    }
}

use resultguard_types::Severity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Resolved configuration an engine is built with. Immutable for the engine's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    /// Severity assigned to every ignored-result finding.
    pub severity: Severity,
    /// Report every non-void project method, not only known must-use ones.
    pub report_all_non_library_calls: bool,
    /// Let contracts synthesized by an inference pass count as purity declarations.
    pub honor_inferred_purity: bool,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            fail_on: FailOn::Error,
            max_findings: 200,
            severity: Severity::Error,
            report_all_non_library_calls: false,
            honor_inferred_purity: false,
        }
    }
}

use resultguard_domain::policy::{EffectiveConfig, FailOn};
use resultguard_types::Severity;

/// Preset profiles are opinionated defaults.
///
/// Unknown names fall back to `strict`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        _ => strict_profile(),
    }
}

pub fn known_profiles() -> &'static [&'static str] {
    &["strict", "warn"]
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        severity: Severity::Error,
        report_all_non_library_calls: false,
        honor_inferred_purity: false,
    }
}

// Findings are warnings, so the verdict is `warn` unless `fail_on = "warning"` is configured.
fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        severity: Severity::Warning,
        ..strict_profile()
    }
}

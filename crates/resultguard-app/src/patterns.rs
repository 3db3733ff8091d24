//! The `patterns` use case: list the effective must-use pattern set.

use resultguard_domain::patterns::PatternSource;
use resultguard_settings::ResolvedConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternListing {
    pub source: PatternSource,
    pub class_name: String,
    pub methods: String,
}

/// Built-in patterns first, then user patterns in configuration order.
pub fn run_patterns(resolved: &ResolvedConfig) -> Vec<PatternListing> {
    resolved
        .patterns
        .iter()
        .map(|(source, p)| PatternListing {
            source,
            class_name: p.class_name().to_string(),
            methods: p.methods().to_string(),
        })
        .collect()
}

pub fn format_patterns(listing: &[PatternListing]) -> String {
    let width = listing
        .iter()
        .map(|p| p.class_name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for p in listing {
        let source = match p.source {
            PatternSource::Default => "default",
            PatternSource::User => "user",
        };
        out.push_str(&format!(
            "{:<7}  {:<width$}  {}\n",
            source,
            p.class_name,
            p.methods,
            width = width
        ));
    }
    out
}

//! Property-based tests for the persisted configuration form.
//!
//! Saving a resolved config and loading it again must reproduce the same ordered
//! user pattern list and the same flag values.

use crate::model::{PatternEntry, ResultguardConfigV1};
use crate::{Overrides, parse_config_toml, resolve_config, serialize_config_toml};
use proptest::prelude::*;

/// Class names that survive trimming, with quotes, backslashes and non-ASCII text mixed in.
fn arb_class_name() -> impl Strategy<Value = String> {
    r#"[a-zA-Z"\\é日][a-zA-Z0-9._"'\\ é日$]{0,12}"#
}

/// A literal method name, escaped into a regex that matches only itself.
fn arb_escaped_methods() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9_"'\\ü本()|*.]{1,10}"#.prop_map(|name| regex::escape(&name))
}

fn arb_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_class_name(), arb_escaped_methods()), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn persisted_config_reproduces_patterns_and_flags(
        entries in arb_entries(),
        report_all in any::<bool>(),
        honor_inferred in any::<bool>(),
    ) {
        let cfg = ResultguardConfigV1 {
            report_all_non_library_calls: Some(report_all),
            honor_inferred_purity: Some(honor_inferred),
            patterns: entries
                .iter()
                .map(|(class, methods)| PatternEntry::rule(class.as_str(), methods.as_str()))
                .collect(),
            ..ResultguardConfigV1::default()
        };
        let first = resolve_config(cfg, Overrides::default()).expect("resolve");
        prop_assert!(first.dropped.is_empty());

        let text = serialize_config_toml(&first.to_config()).expect("serialize");
        let second = resolve_config(parse_config_toml(&text).expect("reparse"), Overrides::default())
            .expect("resolve again");

        let persisted: Vec<(String, String)> = second
            .patterns
            .user_patterns()
            .iter()
            .map(|p| (p.class_name().to_string(), p.methods().to_string()))
            .collect();
        prop_assert_eq!(persisted, entries);
        prop_assert_eq!(second.patterns, first.patterns);
        prop_assert_eq!(second.effective.report_all_non_library_calls, report_all);
        prop_assert_eq!(second.effective.honor_inferred_purity, honor_inferred);
    }
}

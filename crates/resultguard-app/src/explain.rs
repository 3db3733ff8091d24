//! The `explain` use case: look up check/code documentation.

use resultguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        identifier: String,
        explanation: Explanation,
    },
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code. Surrounding whitespace is ignored.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier) {
        Some(explanation) => ExplainOutput::Found {
            identifier: identifier.to_string(),
            explanation,
        },
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(identifier: &str, exp: &Explanation) -> String {
    let heading = format!("{} ({})", exp.title, identifier);
    let mut out = String::new();

    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"=".repeat(heading.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("How to fix\n----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");

    for (label, code) in [
        ("Reported:", exp.examples.before),
        ("Not reported:", exp.examples.after),
    ] {
        out.push_str(label);
        out.push_str("\n```java\n");
        out.push_str(code.trim_end());
        out.push_str("\n```\n");
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {}\n\n", identifier);
    for (title, ids) in [("Available check_ids:", check_ids), ("Available codes:", codes)] {
        out.push_str(title);
        out.push('\n');
        for id in ids {
            out.push_str(&format!("  - {}\n", id));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use resultguard_types::ids;

    #[test]
    fn explains_check_id_and_every_code() {
        assert!(matches!(
            run_explain(ids::CHECK_CALLS_RESULT_IGNORED),
            ExplainOutput::Found { .. }
        ));
        for code in explain::all_codes() {
            assert!(
                matches!(run_explain(code), ExplainOutput::Found { .. }),
                "{code} has no explanation"
            );
        }
    }

    #[test]
    fn explain_unknown_lists_alternatives() {
        match run_explain("  deps.no_wildcards ") {
            ExplainOutput::NotFound {
                identifier,
                available_check_ids,
                available_codes,
            } => {
                assert_eq!(identifier, "deps.no_wildcards");
                assert!(available_check_ids.contains(&ids::CHECK_CALLS_RESULT_IGNORED));
                assert!(available_codes.contains(&ids::CODE_SIMPLE_GETTER));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn formatted_explanation_has_java_examples() {
        let ExplainOutput::Found {
            identifier,
            explanation,
        } = run_explain(ids::CODE_CHECK_RETURN_VALUE)
        else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&identifier, &explanation);
        assert!(formatted.contains("(check_return_value)"));
        assert!(formatted.contains("How to fix"));
        assert_eq!(formatted.matches("```java").count(), 2);
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["check.one"], &["code.one", "code.two"]);
        assert!(formatted.starts_with("Unknown check_id or code: missing\n"));
        assert!(formatted.contains("Available check_ids:\n  - check.one\n"));
        assert!(formatted.contains("Available codes:\n  - code.one\n  - code.two\n"));
    }
}

//! Explain registry for checks and codes.
//!
//! Maps the check ID and each rule code to a human-readable explanation with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_CALLS_RESULT_IGNORED => Some(explain_result_ignored()),

        ids::CODE_SIMPLE_GETTER => Some(explain_simple_getter()),
        ids::CODE_NON_LIBRARY_CALL => Some(explain_non_library_call()),
        ids::CODE_PURE_METHOD => Some(explain_pure_method()),
        ids::CODE_CHECK_RETURN_VALUE => Some(explain_check_return_value()),
        ids::CODE_MUST_USE_PATTERN => Some(explain_must_use_pattern()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_CALLS_RESULT_IGNORED]
}

/// List all known codes, in rule precedence order.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_SIMPLE_GETTER,
        ids::CODE_NON_LIBRARY_CALL,
        ids::CODE_PURE_METHOD,
        ids::CODE_CHECK_RETURN_VALUE,
        ids::CODE_MUST_USE_PATTERN,
    ]
}

fn explain_result_ignored() -> Explanation {
    Explanation {
        title: "Result of Method Call Ignored",
        description: "\
Reports calls whose return value is discarded when the called method is known to be
side-effect free or is marked as must-use.

A call is considered discarded when it is:
- used as a statement on its own
- the body of a lambda whose functional interface returns void
- a method reference bound to a functional interface that returns void

The first matching rule wins, in this order:
1. simple getters (no parameters, body returns a field)
2. any project-owned call, when `report_all_non_library_calls` is enabled
3. methods with a contract annotation declaring `pure = true`
4. `@CheckReturnValue` on the method, an overridden method, a class, or the package,
   unless `@CanIgnoreReturnValue` appears closer to the method
5. the configured must-use pattern list (`java.lang.String: .*` and friends)

Void methods, constructors, unresolved calls, and calls inside broken syntax are
never reported.",
        remediation: "\
Use the returned value, or remove the call if it has no effect.

Immutable types such as `String` and `BigDecimal` return a new instance instead of
modifying the receiver, so the call needs its result assigned.",
        examples: ExamplePair {
            before: r#"String name = input;
name.trim();"#,
            after: r#"String name = input.trim();"#,
        },
    }
}

fn explain_simple_getter() -> Explanation {
    Explanation {
        title: "Ignored Getter Result",
        description: "\
The called method is a simple getter: it takes no parameters and only returns a
field. Calling it without using the result has no effect.

This rule is not affected by `@CanIgnoreReturnValue`.",
        remediation: "\
Remove the call, or use the returned value.",
        examples: ExamplePair {
            before: r#"config.getTimeout();"#,
            after: r#"long timeout = config.getTimeout();"#,
        },
    }
}

fn explain_non_library_call() -> Explanation {
    Explanation {
        title: "Ignored Result of Project Method",
        description: "\
`report_all_non_library_calls` is enabled, so every non-void method declared in
project sources must have its result used. Library methods are still checked by
the remaining rules.",
        remediation: "\
Use the returned value, make the method return void, or disable
`report_all_non_library_calls` in resultguard.toml.",
        examples: ExamplePair {
            before: r#"registry.register(handler);   // returns boolean"#,
            after: r#"if (!registry.register(handler)) {
    log.warn("handler already registered");
}"#,
        },
    }
}

fn explain_pure_method() -> Explanation {
    Explanation {
        title: "Ignored Result of Pure Method",
        description: "\
The called method carries a contract annotation with `pure = true`: it has no side
effects, so discarding the result makes the call useless.

Inferred contracts only count when `honor_inferred_purity` is enabled; contracts
written by the author always count.",
        remediation: "\
Use the returned value or remove the call.",
        examples: ExamplePair {
            before: r#"@Contract(pure = true)
static int clamp(int v, int lo, int hi) { ... }

clamp(value, 0, 10);"#,
            after: r#"value = clamp(value, 0, 10);"#,
        },
    }
}

fn explain_check_return_value() -> Explanation {
    Explanation {
        title: "CheckReturnValue Ignored",
        description: "\
The called method, something it overrides, an enclosing class, or its package is
annotated with `@CheckReturnValue`.

An `@CanIgnoreReturnValue` annotation placed between the method and the element
that carries `@CheckReturnValue` opts the method back out.",
        remediation: "\
Use the returned value. If ignoring it is intended for this method, annotate the
method with `@CanIgnoreReturnValue`.",
        examples: ExamplePair {
            before: r#"@CheckReturnValue
class Builder {
    Builder name(String n) { ... }
}

builder.name("x");"#,
            after: r#"@CheckReturnValue
class Builder {
    @CanIgnoreReturnValue
    Builder name(String n) { ... }
}

builder.name("x");"#,
        },
    }
}

fn explain_must_use_pattern() -> Explanation {
    Explanation {
        title: "Ignored Result of Must-Use Library Method",
        description: "\
The called method matches the must-use pattern list: an exact declaring class name
plus a regular expression that must match the whole method name.

The list starts with built-in entries for immutable JDK types and is extended by the
`[[patterns]]` table in resultguard.toml. Patterns match only the declaring class,
not its subclasses.",
        remediation: "\
Use the returned value. Project-specific must-use methods can be added with:

    [[patterns]]
    class = \"com.acme.Money\"
    methods = \"plus|minus\"",
        examples: ExamplePair {
            before: r#"BigDecimal total = BigDecimal.ZERO;
total.add(price);"#,
            after: r#"BigDecimal total = BigDecimal.ZERO;
total = total.add(price);"#,
        },
    }
}

//! Property-based tests for the decision policy.
//!
//! These tests use proptest to verify invariants around:
//! - rule precedence (void, getter, annotations, patterns)
//! - opt-out scoping relative to the must-check owner
//! - full-name pattern matching

use crate::annotations::{ElementPosition, OwnerKind, find_annotation};
use crate::decision::{CleanReason, Decision, DecisionEngine, SkipReason, ViolationReason};
use crate::model::{
    Annotation, ClassScope, Discard, OverriddenMethod, PackageScope, ReturnType, Symbol,
    TypeAnnotations,
};
use crate::patterns::{Pattern, PatternSet};
use crate::policy::EffectiveConfig;
use crate::test_support::{call_site, must_check, opt_out};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Shape of a symbol's search path: overrides, enclosing classes with supertypes, package.
#[derive(Clone, Debug)]
struct Shape {
    overrides: usize,
    classes: Vec<usize>,
    package: bool,
}

impl Shape {
    fn len(&self) -> usize {
        1 + self.overrides
            + self.classes.iter().map(|s| 1 + s).sum::<usize>()
            + usize::from(self.package)
    }
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (0usize..3, prop::collection::vec(0usize..3, 0..3), any::<bool>()).prop_map(
        |(overrides, classes, package)| Shape {
            overrides,
            classes,
            package,
        },
    )
}

fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_$]{0,15}").unwrap()
}

/// Project-owned classes never collide with the built-in pattern table.
fn arb_project_class() -> impl Strategy<Value = String> {
    prop::string::string_regex("com\\.acme\\.[A-Z][a-zA-Z0-9]{0,10}").unwrap()
}

fn arb_config() -> impl Strategy<Value = EffectiveConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(report_all, honor_inferred)| EffectiveConfig {
        report_all_non_library_calls: report_all,
        honor_inferred_purity: honor_inferred,
        ..EffectiveConfig::default()
    })
}

fn symbol_with_shape(class: &str, name: &str, shape: &Shape) -> Symbol {
    let mut s = Symbol::method(class, name, ReturnType::Value("int".to_string()));
    s.overrides = (0..shape.overrides)
        .map(|i| OverriddenMethod {
            declaring_class: format!("com.acme.Super{i}"),
            annotations: Vec::new(),
        })
        .collect();
    s.enclosing = shape
        .classes
        .iter()
        .enumerate()
        .map(|(i, supers)| ClassScope {
            qualified_name: format!("com.acme.Scope{i}"),
            annotations: Vec::new(),
            supertypes: (0..*supers)
                .map(|j| TypeAnnotations {
                    qualified_name: format!("com.acme.Scope{i}Super{j}"),
                    annotations: Vec::new(),
                })
                .collect(),
        })
        .collect();
    s.package = shape.package.then(|| PackageScope {
        name: "com.acme".to_string(),
        annotations: Vec::new(),
    });
    s
}

/// Attach `annotation` to the element at flattened search position `index`.
fn annotate_at(symbol: &mut Symbol, index: usize, annotation: Annotation) {
    let mut slots: Vec<&mut Vec<Annotation>> = vec![&mut symbol.annotations];
    slots.extend(symbol.overrides.iter_mut().map(|m| &mut m.annotations));
    for class in symbol.enclosing.iter_mut() {
        slots.push(&mut class.annotations);
        slots.extend(class.supertypes.iter_mut().map(|s| &mut s.annotations));
    }
    if let Some(p) = symbol.package.as_mut() {
        slots.push(&mut p.annotations);
    }
    slots[index].push(annotation);
}

fn engine_for(cfg: EffectiveConfig) -> DecisionEngine {
    DecisionEngine::new(cfg, PatternSet::with_defaults())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn void_is_always_not_applicable(
        class in arb_project_class(),
        name in arb_identifier(),
        shape in arb_shape(),
        getter in any::<bool>(),
        library in any::<bool>(),
        cfg in arb_config(),
        broken in any::<bool>(),
    ) {
        let mut target = symbol_with_shape(&class, &name, &shape);
        target.returns = ReturnType::Void;
        target.facts.simple_getter = getter;
        target.facts.library_member = library;
        annotate_at(&mut target, 0, must_check());

        let mut site = call_site(target, Discard::Statement);
        site.syntax_broken = broken;
        prop_assert_eq!(
            engine_for(cfg).decide(&site),
            Decision::NotApplicable(SkipReason::VoidReturn)
        );
    }

    #[test]
    fn getter_wins_regardless_of_opt_out(
        class in arb_project_class(),
        name in arb_identifier(),
        shape in arb_shape(),
        opt_out_at in any::<prop::sample::Index>(),
        cfg in arb_config(),
    ) {
        let mut target = symbol_with_shape(&class, &name, &shape);
        target.facts.simple_getter = true;
        let len = shape.len();
        annotate_at(&mut target, opt_out_at.index(len), opt_out());
        annotate_at(&mut target, len - 1, must_check());

        prop_assert_eq!(
            engine_for(cfg).decide(&call_site(target, Discard::Statement)),
            Decision::Violation(ViolationReason::SimpleGetter)
        );
    }

    #[test]
    fn opt_out_strictly_inside_must_check_owner_is_clean(
        class in arb_project_class(),
        name in arb_identifier(),
        shape in arb_shape(),
        picks in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let len = shape.len();
        prop_assume!(len >= 2);
        // must-check somewhere in 1..len, opt-out strictly before it.
        let owner = 1 + picks.0.index(len - 1);
        let inner = picks.1.index(owner);

        let mut target = symbol_with_shape(&class, &name, &shape);
        target.facts.library_member = true;
        annotate_at(&mut target, owner, must_check());
        annotate_at(&mut target, inner, opt_out());

        let decision = engine_for(EffectiveConfig::default()).decide(&call_site(target, Discard::Statement));
        prop_assert!(matches!(decision, Decision::Clean(CleanReason::OptedOut { .. })), "{:?}", decision);
    }

    #[test]
    fn must_check_without_opt_out_in_range_is_violation(
        class in arb_project_class(),
        name in arb_identifier(),
        shape in arb_shape(),
        picks in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let len = shape.len();
        let owner = picks.0.index(len);
        let mut target = symbol_with_shape(&class, &name, &shape);
        target.facts.library_member = true;
        annotate_at(&mut target, owner, must_check());
        // An opt-out at or beyond the owner never applies.
        let outer = owner + picks.1.index(len - owner);
        annotate_at(&mut target, outer, opt_out());

        let decision = engine_for(EffectiveConfig::default()).decide(&call_site(target, Discard::Statement));
        let is_must_check = matches!(decision, Decision::Violation(ViolationReason::MustCheckAnnotation { .. }));
        prop_assert!(is_must_check, "{:?}", decision);
    }

    #[test]
    fn no_signal_and_no_pattern_is_clean(
        class in arb_project_class(),
        name in arb_identifier(),
        shape in arb_shape(),
        honor_inferred in any::<bool>(),
    ) {
        let target = symbol_with_shape(&class, &name, &shape);
        let cfg = EffectiveConfig {
            honor_inferred_purity: honor_inferred,
            ..EffectiveConfig::default()
        };
        prop_assert_eq!(
            engine_for(cfg).decide(&call_site(target, Discard::Statement)),
            Decision::Clean(CleanReason::NoSignal)
        );
    }

    #[test]
    fn stop_at_bounds_every_lookup(
        shape in arb_shape(),
        picks in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let len = shape.len();
        let at = picks.0.index(len);
        let stop = picks.1.index(len + 1);
        let mut target = symbol_with_shape("com.acme.T", "m", &shape);
        annotate_at(&mut target, at, opt_out());

        let found = find_annotation(
            &target,
            crate::annotations::OPT_OUT_ANNOTATIONS,
            Some(ElementPosition::new(stop)),
        );
        prop_assert_eq!(found.is_some(), at < stop);
        if let Some(m) = found {
            prop_assert_eq!(m.owner.position.index(), at);
            if at == 0 {
                prop_assert_eq!(m.owner.kind, OwnerKind::Method);
            }
        }
    }

    #[test]
    fn escaped_method_name_pattern_matches_only_that_name(
        name in arb_identifier(),
        other in arb_identifier(),
    ) {
        let pattern = Pattern::new("com.acme.Money", regex::escape(&name)).unwrap();
        prop_assert!(pattern.matches("com.acme.Money", &name));
        prop_assert_eq!(pattern.matches("com.acme.Money", &other), name == other);
        prop_assert!(!pattern.matches("com.acme.Money2", &name));
    }
}

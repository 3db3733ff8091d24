use crate::annotations::{MUST_CHECK_ANNOTATIONS, OPT_OUT_ANNOTATIONS};
use crate::decision::DecisionEngine;
use crate::model::{Annotation, CallKind, CallSite, ClassScope, Discard, ReturnType, Symbol};
use crate::patterns::PatternSet;
use crate::policy::EffectiveConfig;
use resultguard_types::{Location, RepoPath};

pub fn must_check() -> Annotation {
    Annotation::new(MUST_CHECK_ANNOTATIONS[0])
}

pub fn opt_out() -> Annotation {
    Annotation::new(OPT_OUT_ANNOTATIONS[0])
}

/// A non-void, project-owned method with no annotations.
pub fn project_method(class: &str, name: &str) -> Symbol {
    Symbol::method(class, name, ReturnType::Value("int".to_string()))
}

pub fn annotated(class: &str, annotations: Vec<Annotation>) -> ClassScope {
    ClassScope {
        qualified_name: class.to_string(),
        annotations,
        supertypes: Vec::new(),
    }
}

pub fn call_site(target: Symbol, discard: Discard) -> CallSite {
    call_site_at(target, discard, 1, 1)
}

pub fn call_site_at(target: Symbol, discard: Discard, line: u32, col: u32) -> CallSite {
    CallSite {
        target: Some(target),
        kind: CallKind::MethodCall,
        discard,
        syntax_broken: false,
        location: Location {
            path: RepoPath::new("src/Main.java"),
            line: Some(line),
            col: Some(col),
            end_line: None,
            end_col: None,
        },
        name_location: None,
    }
}

pub fn engine() -> DecisionEngine {
    engine_with(EffectiveConfig::default(), PatternSet::with_defaults())
}

pub fn engine_with(config: EffectiveConfig, patterns: PatternSet) -> DecisionEngine {
    DecisionEngine::new(config, patterns)
}

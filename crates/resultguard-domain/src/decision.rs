//! The ignored-result policy for a single call site.

use crate::annotations::{self, AnnotationQuery, OwnerKind};
use crate::model::{CallKind, CallSite, Origin, Symbol};
use crate::patterns::PatternSet;
use crate::policy::EffectiveConfig;
use crate::purity;
use resultguard_types::ids;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Violation(ViolationReason),
    Clean(CleanReason),
    NotApplicable(SkipReason),
}

impl Decision {
    pub fn is_violation(&self) -> bool {
        matches!(self, Decision::Violation(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationReason {
    SimpleGetter,
    NonLibraryCall,
    PureMethod {
        origin: Origin,
    },
    MustCheckAnnotation {
        annotation: String,
        owner_kind: OwnerKind,
        owner: String,
    },
    MustUsePattern {
        class_name: String,
        methods: String,
    },
}

impl ViolationReason {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationReason::SimpleGetter => ids::CODE_SIMPLE_GETTER,
            ViolationReason::NonLibraryCall => ids::CODE_NON_LIBRARY_CALL,
            ViolationReason::PureMethod { .. } => ids::CODE_PURE_METHOD,
            ViolationReason::MustCheckAnnotation { .. } => ids::CODE_CHECK_RETURN_VALUE,
            ViolationReason::MustUsePattern { .. } => ids::CODE_MUST_USE_PATTERN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CleanReason {
    /// An opt-out annotation sits between the method and the must-check owner.
    OptedOut { annotation: String, owner: String },
    NoSignal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    ValueUsed,
    /// Unresolved call or constructor.
    ResolutionGap,
    VoidReturn,
    UnknownDeclaringClass,
    BrokenSyntax,
}

/// Immutable policy evaluator. Safe to share across threads; `decide` takes `&self` only.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    config: EffectiveConfig,
    patterns: PatternSet,
}

impl DecisionEngine {
    pub fn new(config: EffectiveConfig, patterns: PatternSet) -> Self {
        Self { config, patterns }
    }

    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    pub fn decide(&self, site: &CallSite) -> Decision {
        if !site.discards_value() {
            return Decision::NotApplicable(SkipReason::ValueUsed);
        }
        let Some(target) = site.target.as_ref() else {
            return Decision::NotApplicable(SkipReason::ResolutionGap);
        };
        if target.is_constructor {
            return Decision::NotApplicable(SkipReason::ResolutionGap);
        }

        // A method reference has no error container of its own.
        let syntax_broken = site.kind == CallKind::MethodCall && site.syntax_broken;
        let decision = self.decide_target(target, syntax_broken);
        debug!(
            method = %target.qualified_name(),
            discard = ?site.discard,
            ?decision,
            "decided call site"
        );
        decision
    }

    /// Rules 1-8, first applicable rule wins.
    pub fn decide_target(&self, target: &Symbol, syntax_broken: bool) -> Decision {
        if target.returns.is_void() {
            return Decision::NotApplicable(SkipReason::VoidReturn);
        }
        if target.declaring_class.is_none() {
            return Decision::NotApplicable(SkipReason::UnknownDeclaringClass);
        }
        if syntax_broken {
            return Decision::NotApplicable(SkipReason::BrokenSyntax);
        }

        if purity::is_simple_getter(target) {
            return Decision::Violation(ViolationReason::SimpleGetter);
        }
        if self.config.report_all_non_library_calls && !purity::is_library_member(target) {
            return Decision::Violation(ViolationReason::NonLibraryCall);
        }
        if let Some(info) = purity::purity_annotation(target)
            && info.counts_as_pure(self.config.honor_inferred_purity)
        {
            return Decision::Violation(ViolationReason::PureMethod {
                origin: info.origin,
            });
        }

        if let Some(must_check) =
            AnnotationQuery::new(target, annotations::MUST_CHECK_ANNOTATIONS).find()
        {
            let opt_out = AnnotationQuery::new(target, annotations::OPT_OUT_ANNOTATIONS)
                .stop_at(must_check.owner.position)
                .find();
            return match opt_out {
                Some(found) => Decision::Clean(CleanReason::OptedOut {
                    annotation: found.annotation.name.clone(),
                    owner: found.owner.label.to_string(),
                }),
                None => Decision::Violation(ViolationReason::MustCheckAnnotation {
                    annotation: must_check.annotation.name.clone(),
                    owner_kind: must_check.owner.kind,
                    owner: must_check.owner.label.to_string(),
                }),
            };
        }

        match self.patterns.find_match(target) {
            Some(pattern) => Decision::Violation(ViolationReason::MustUsePattern {
                class_name: pattern.class_name().to_string(),
                methods: pattern.methods().to_string(),
            }),
            None => Decision::Clean(CleanReason::NoSignal),
        }
    }
}

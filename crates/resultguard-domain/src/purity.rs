//! Purity signals: getter shape, library membership, and contract annotations.
//!
//! All three are facts computed by the resolver; this module only interprets them.

use crate::model::{Origin, Symbol};

/// Contract annotation as seen by the decision policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurityInfo {
    pub origin: Origin,
    /// `pure = true` was present. An absent attribute reads as false.
    pub declared_pure: bool,
}

impl PurityInfo {
    pub fn is_inferred(&self) -> bool {
        self.origin == Origin::Inferred
    }

    /// Rule 6: an explicit contract always counts, an inferred one only when honored.
    pub fn counts_as_pure(&self, honor_inferred: bool) -> bool {
        self.declared_pure && (honor_inferred || !self.is_inferred())
    }
}

pub fn is_simple_getter(symbol: &Symbol) -> bool {
    symbol.facts.simple_getter && !symbol.returns.is_void()
}

pub fn is_library_member(symbol: &Symbol) -> bool {
    symbol.facts.library_member
}

pub fn purity_annotation(symbol: &Symbol) -> Option<PurityInfo> {
    symbol.facts.purity.as_ref().map(|p| PurityInfo {
        origin: p.origin,
        declared_pure: p.pure == Some(true),
    })
}

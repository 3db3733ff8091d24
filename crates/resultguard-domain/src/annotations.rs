//! Annotation lookup over a method's hierarchy and its lexical scope.
//!
//! The search path is flattened into numbered positions:
//! 1. the method itself
//! 2. overridden methods, nearest first
//! 3. each enclosing class (nearest first), followed by that class's supertypes
//! 4. the package, once the outermost class has been searched
//!
//! A match reports the position of the element that carries it. Passing that position back as
//! `stop_at` bounds a second lookup to the elements strictly closer to the method.

use crate::model::{Annotation, Symbol};
use serde::Serialize;
use std::iter;

/// Callers must use the return value.
pub const MUST_CHECK_ANNOTATIONS: &[&str] = &[
    "javax.annotation.CheckReturnValue",
    "com.google.errorprone.annotations.CheckReturnValue",
];

/// Ignoring the return value is acceptable; overrides a must-check annotation further out.
pub const OPT_OUT_ANNOTATIONS: &[&str] = &["com.google.errorprone.annotations.CanIgnoreReturnValue"];

/// Index into a symbol's flattened search path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementPosition(usize);

impl ElementPosition {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    Method,
    OverriddenMethod,
    Class,
    Supertype,
    Package,
}

/// The element carrying a matched annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Owner<'a> {
    pub position: ElementPosition,
    pub kind: OwnerKind,
    /// Method name, declaring class of an overridden method, class or package name.
    pub label: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotationMatch<'a> {
    pub annotation: &'a Annotation,
    pub owner: Owner<'a>,
}

/// A lookup request: which symbol, which annotation names, and where to stop.
#[derive(Clone, Copy, Debug)]
pub struct AnnotationQuery<'a> {
    pub symbol: &'a Symbol,
    pub names: &'a [&'a str],
    pub stop_at: Option<ElementPosition>,
}

impl<'a> AnnotationQuery<'a> {
    pub fn new(symbol: &'a Symbol, names: &'a [&'a str]) -> Self {
        Self {
            symbol,
            names,
            stop_at: None,
        }
    }

    pub fn stop_at(mut self, position: ElementPosition) -> Self {
        self.stop_at = Some(position);
        self
    }

    pub fn find(&self) -> Option<AnnotationMatch<'a>> {
        find_annotation(self.symbol, self.names, self.stop_at)
    }
}

struct Element<'a> {
    kind: OwnerKind,
    label: &'a str,
    annotations: &'a [Annotation],
}

fn search_path(symbol: &Symbol) -> impl Iterator<Item = Element<'_>> {
    let method = iter::once(Element {
        kind: OwnerKind::Method,
        label: symbol.name.as_str(),
        annotations: &symbol.annotations,
    });
    let overridden = symbol.overrides.iter().map(|m| Element {
        kind: OwnerKind::OverriddenMethod,
        label: m.declaring_class.as_str(),
        annotations: &m.annotations,
    });
    let classes = symbol.enclosing.iter().flat_map(|class| {
        iter::once(Element {
            kind: OwnerKind::Class,
            label: class.qualified_name.as_str(),
            annotations: &class.annotations,
        })
        .chain(class.supertypes.iter().map(|s| Element {
            kind: OwnerKind::Supertype,
            label: s.qualified_name.as_str(),
            annotations: &s.annotations,
        }))
    });
    // An unresolvable package simply ends the path.
    let package = symbol.package.iter().map(|p| Element {
        kind: OwnerKind::Package,
        label: p.name.as_str(),
        annotations: &p.annotations,
    });

    method.chain(overridden).chain(classes).chain(package)
}

/// First annotation named in `names`, searching from the method outwards.
///
/// Elements at or beyond `stop_at` are never inspected.
pub fn find_annotation<'a>(
    symbol: &'a Symbol,
    names: &[&str],
    stop_at: Option<ElementPosition>,
) -> Option<AnnotationMatch<'a>> {
    for (index, element) in search_path(symbol).enumerate() {
        let position = ElementPosition(index);
        if stop_at.is_some_and(|stop| position >= stop) {
            return None;
        }
        if let Some(annotation) = element
            .annotations
            .iter()
            .find(|a| names.contains(&a.name.as_str()))
        {
            return Some(AnnotationMatch {
                annotation,
                owner: Owner {
                    position,
                    kind: element.kind,
                    label: element.label,
                },
            });
        }
    }
    None
}

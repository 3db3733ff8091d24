use crate::dump::{CallSiteDumpV1, RangeRecord, SymbolRecord};
use resultguard_domain::model::{
    Annotation, CallSite, ClassRef, ClassScope, OverriddenMethod, PackageScope, Origin,
    PurityAnnotation, ReturnType, Symbol, SymbolFacts, TypeAnnotations,
};
use resultguard_types::{Location, RepoPath};
use std::collections::BTreeMap;
use tracing::warn;

/// Resolves symbol ids from a dump into domain symbols.
#[derive(Clone, Copy, Debug)]
pub struct SymbolIndex<'a> {
    symbols: &'a BTreeMap<String, SymbolRecord>,
}

impl<'a> SymbolIndex<'a> {
    pub fn new(dump: &'a CallSiteDumpV1) -> Self {
        Self {
            symbols: &dump.symbols,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// `None` for an unknown id. Dangling override ids are logged and skipped.
    pub fn resolve_symbol(&self, id: &str) -> Option<Symbol> {
        let record = self.symbols.get(id)?;
        Some(Symbol {
            declaring_class: record.declaring_class.as_ref().map(|qualified| {
                match &record.declaring_class_simple {
                    Some(simple) => ClassRef {
                        qualified_name: qualified.clone(),
                        simple_name: simple.clone(),
                    },
                    None => ClassRef::new(qualified.clone()),
                }
            }),
            name: record.name.clone(),
            returns: match &record.return_type {
                Some(ty) => ReturnType::Value(ty.clone()),
                None => ReturnType::Void,
            },
            is_constructor: record.constructor,
            is_static: record.is_static,
            annotations: annotations(&record.annotations),
            overrides: self.overridden(id, &record.overrides),
            enclosing: record
                .enclosing
                .iter()
                .map(|class| ClassScope {
                    qualified_name: class.name.clone(),
                    annotations: annotations(&class.annotations),
                    supertypes: class
                        .supertypes
                        .iter()
                        .map(|t| TypeAnnotations {
                            qualified_name: t.name.clone(),
                            annotations: annotations(&t.annotations),
                        })
                        .collect(),
                })
                .collect(),
            package: record.package.as_ref().map(|p| PackageScope {
                name: p.name.clone(),
                annotations: annotations(&p.annotations),
            }),
            facts: SymbolFacts {
                simple_getter: record.simple_getter,
                library_member: record.library,
                purity: record.purity.as_ref().map(|p| PurityAnnotation {
                    origin: if p.inferred {
                        Origin::Inferred
                    } else {
                        Origin::Explicit
                    },
                    pure: p.pure,
                }),
            },
        })
    }

    fn overridden(&self, id: &str, ids: &[String]) -> Vec<OverriddenMethod> {
        ids.iter()
            .filter_map(|super_id| {
                let Some(record) = self.symbols.get(super_id) else {
                    warn!(symbol = id, overridden = %super_id, "dangling override id, skipping");
                    return None;
                };
                Some(OverriddenMethod {
                    declaring_class: record.declaring_class.clone().unwrap_or_default(),
                    annotations: annotations(&record.annotations),
                })
            })
            .collect()
    }

    /// Resolve one recorded call site. Unknown targets become unresolved calls.
    pub(crate) fn call_site(
        &self,
        path: &RepoPath,
        record: &crate::dump::CallSiteRecord,
    ) -> CallSite {
        let target = record.target.as_deref().and_then(|id| {
            let resolved = self.resolve_symbol(id);
            if resolved.is_none() {
                warn!(path = %path.as_str(), target = id, "unknown call target id");
            }
            resolved
        });
        CallSite {
            target,
            kind: record.kind,
            discard: record.discard,
            syntax_broken: record.syntax_broken,
            location: location(path, record.range),
            name_location: record.name_range.map(|r| location(path, Some(r))),
        }
    }
}

fn annotations(names: &[String]) -> Vec<Annotation> {
    names.iter().map(Annotation::new).collect()
}

fn location(path: &RepoPath, range: Option<RangeRecord>) -> Location {
    Location {
        path: path.clone(),
        line: range.map(|r| r.line),
        col: range.map(|r| r.col),
        end_line: range.and_then(|r| r.end_line),
        end_col: range.and_then(|r| r.end_col),
    }
}

//! Wire format of the call-site dump produced by the Java front end.

use resultguard_domain::model::{CallKind, Discard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CALLSITES_V1: &str = "resultguard.callsites.v1";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallSiteDumpV1 {
    pub schema: String,
    /// Symbol id -> record. Ids are opaque to resultguard.
    #[serde(default)]
    pub symbols: BTreeMap<String, SymbolRecord>,
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    #[serde(default)]
    pub declaring_class: Option<String>,
    /// Derived from `declaring_class` when absent.
    #[serde(default)]
    pub declaring_class_simple: Option<String>,
    pub name: String,
    /// `null` for void.
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub constructor: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Ids of overridden methods, nearest first.
    #[serde(default)]
    pub overrides: Vec<String>,
    /// Enclosing classes, nearest first.
    #[serde(default)]
    pub enclosing: Vec<ClassRecord>,
    #[serde(default)]
    pub package: Option<PackageRecord>,
    #[serde(default)]
    pub simple_getter: bool,
    #[serde(default)]
    pub library: bool,
    #[serde(default)]
    pub purity: Option<PurityRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub supertypes: Vec<TypeRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// `@Contract` on the method. `pure` is absent when the attribute is not set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PurityRecord {
    #[serde(default)]
    pub inferred: bool,
    #[serde(default)]
    pub pure: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(default)]
    pub call_sites: Vec<CallSiteRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallSiteRecord {
    /// Symbol id, or `null` when the front end could not resolve the call.
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub kind: CallKind,
    pub discard: Discard,
    #[serde(default)]
    pub syntax_broken: bool,
    #[serde(default)]
    pub range: Option<RangeRecord>,
    #[serde(default)]
    pub name_range: Option<RangeRecord>,
}

/// 1-based line/column range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub line: u32,
    pub col: u32,
    #[serde(default)]
    pub end_line: Option<u32>,
    #[serde(default)]
    pub end_col: Option<u32>,
}

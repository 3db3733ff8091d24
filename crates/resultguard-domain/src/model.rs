use resultguard_types::{Location, RepoPath};
use serde::{Deserialize, Serialize};

/// Everything the resolver handed over for one analysis pass.
#[derive(Clone, Debug, Default)]
pub struct AnalysisModel {
    pub files: Vec<SourceFileModel>,
}

#[derive(Clone, Debug, Default)]
pub struct SourceFileModel {
    pub path: RepoPath,
    pub call_sites: Vec<CallSite>,
}

impl AnalysisModel {
    pub fn call_sites(&self) -> impl Iterator<Item = &CallSite> {
        self.files.iter().flat_map(|f| f.call_sites.iter())
    }
}

/// A fully qualified annotation reference, e.g. `javax.annotation.CheckReturnValue`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub name: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRef {
    pub qualified_name: String,
    pub simple_name: String,
}

impl ClassRef {
    /// Derives the simple name from the last `.` or `$` separated segment.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&qualified_name)
            .to_string();
        Self {
            qualified_name,
            simple_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Value(String),
}

impl ReturnType {
    pub fn is_void(&self) -> bool {
        matches!(self, ReturnType::Void)
    }
}

/// A supertype method the symbol overrides.
#[derive(Clone, Debug, Default)]
pub struct OverriddenMethod {
    pub declaring_class: String,
    pub annotations: Vec<Annotation>,
}

/// Annotations declared on a supertype of an enclosing class.
#[derive(Clone, Debug, Default)]
pub struct TypeAnnotations {
    pub qualified_name: String,
    pub annotations: Vec<Annotation>,
}

/// A lexical container of the method: its declaring class or an outer class.
#[derive(Clone, Debug, Default)]
pub struct ClassScope {
    pub qualified_name: String,
    pub annotations: Vec<Annotation>,
    /// Superclasses and interfaces, nearest first.
    pub supertypes: Vec<TypeAnnotations>,
}

#[derive(Clone, Debug, Default)]
pub struct PackageScope {
    pub name: String,
    pub annotations: Vec<Annotation>,
}

/// Whether an annotation was written by the author or synthesized by an inference pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Explicit,
    Inferred,
}

/// A contract annotation attached to the method. `pure` is `None` when the attribute is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurityAnnotation {
    pub origin: Origin,
    pub pure: Option<bool>,
}

/// Facts the resolver computed from the method body and its origin.
#[derive(Clone, Debug, Default)]
pub struct SymbolFacts {
    /// No parameters, non-void, body is exactly `return this.field;`.
    pub simple_getter: bool,
    /// Declared in a dependency rather than project sources.
    pub library_member: bool,
    pub purity: Option<PurityAnnotation>,
}

/// Resolved identity of a called method.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// `None` when the declaring class cannot be determined.
    pub declaring_class: Option<ClassRef>,
    pub name: String,
    pub returns: ReturnType,
    pub is_constructor: bool,
    pub is_static: bool,
    pub annotations: Vec<Annotation>,
    /// Nearest first.
    pub overrides: Vec<OverriddenMethod>,
    /// Nearest first; the first entry is normally the declaring class.
    pub enclosing: Vec<ClassScope>,
    pub package: Option<PackageScope>,
    pub facts: SymbolFacts,
}

impl Symbol {
    /// A plain instance method with no annotations or resolver facts.
    pub fn method(
        declaring_class: impl Into<String>,
        name: impl Into<String>,
        returns: ReturnType,
    ) -> Self {
        Self {
            declaring_class: Some(ClassRef::new(declaring_class)),
            name: name.into(),
            returns,
            is_constructor: false,
            is_static: false,
            annotations: Vec::new(),
            overrides: Vec::new(),
            enclosing: Vec::new(),
            package: None,
            facts: SymbolFacts::default(),
        }
    }

    /// `java.lang.String.trim`, or just the method name when the class is unknown.
    pub fn qualified_name(&self) -> String {
        match &self.declaring_class {
            Some(class) => format!("{}.{}", class.qualified_name, self.name),
            None => self.name.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    #[default]
    MethodCall,
    MethodReference,
}

/// How the value produced at a call site is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discard {
    /// `foo.bar();`
    Statement,
    /// `() -> foo.bar()` where the functional interface returns void.
    VoidLambda,
    /// `foo::bar` where the functional interface returns void.
    VoidFunctionalInterface,
    /// The value is consumed.
    Used,
}

impl Discard {
    pub fn is_discarded(self) -> bool {
        !matches!(self, Discard::Used)
    }
}

#[derive(Clone, Debug)]
pub struct CallSite {
    /// `None` when the resolver could not resolve the call.
    pub target: Option<Symbol>,
    pub kind: CallKind,
    pub discard: Discard,
    /// Set when the containing syntax has error nodes.
    pub syntax_broken: bool,
    /// The whole call expression.
    pub location: Location,
    /// The name token of a method reference.
    pub name_location: Option<Location>,
}

impl CallSite {
    /// Method references only discard through a void functional interface.
    pub fn discards_value(&self) -> bool {
        match self.kind {
            CallKind::MethodCall => self.discard.is_discarded(),
            CallKind::MethodReference => self.discard == Discard::VoidFunctionalInterface,
        }
    }

    /// The range a finding should highlight.
    pub fn highlight(&self) -> &Location {
        match self.kind {
            CallKind::MethodReference => self.name_location.as_ref().unwrap_or(&self.location),
            CallKind::MethodCall => &self.location,
        }
    }
}

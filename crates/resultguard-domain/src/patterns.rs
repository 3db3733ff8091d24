//! Must-use method patterns: an exact declaring class plus a method-name regex.
//!
//! The built-in table covers JDK types whose methods are free of side effects. User patterns are
//! appended after it; duplicates are harmless because matching is existential.

use crate::model::Symbol;
use regex::Regex;
use std::sync::LazyLock;

const DEFAULT_PATTERN_TABLE: &[(&str, &str)] = &[
    ("java.io.File", ".*"),
    ("java.io.InputStream", "read|skip|available|markSupported"),
    ("java.io.Reader", "read|skip|ready|markSupported"),
    ("java.lang.Boolean", ".*"),
    ("java.lang.Byte", ".*"),
    ("java.lang.Character", ".*"),
    ("java.lang.Double", ".*"),
    ("java.lang.Float", ".*"),
    ("java.lang.Integer", ".*"),
    ("java.lang.Long", ".*"),
    ("java.lang.Math", ".*"),
    ("java.lang.Object", "equals|hashCode|toString"),
    ("java.lang.Short", ".*"),
    ("java.lang.StrictMath", ".*"),
    ("java.lang.String", ".*"),
    ("java.math.BigInteger", ".*"),
    ("java.math.BigDecimal", ".*"),
    ("java.net.InetAddress", ".*"),
    ("java.net.URI", ".*"),
    ("java.util.List", "of"),
    ("java.util.Set", "of"),
    ("java.util.Map", "of|ofEntries|entry"),
    (
        "java.util.Collections",
        "unmodifiable.*|singleton.*|checked.*|min|max|stream",
    ),
    ("java.util.UUID", ".*"),
    (
        "java.util.regex.Matcher",
        "pattern|toMatchResult|start|end|group|groupCount|matches|find|lookingAt|quoteReplacement|replaceAll|replaceFirst|regionStart|regionEnd|hasTransparentBounds|hasAnchoringBounds|hitEnd|requireEnd",
    ),
    ("java.util.regex.Pattern", ".*"),
    ("java.util.stream.BaseStream", ".*"),
];

static DEFAULT_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    DEFAULT_PATTERN_TABLE
        .iter()
        .map(|(class_name, methods)| {
            Pattern::new(*class_name, *methods).expect("built-in method patterns must compile")
        })
        .collect()
});

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern has an empty class name")]
    EmptyClassName,

    #[error("invalid method pattern '{methods}' for {class_name}: {source}")]
    InvalidRegex {
        class_name: String,
        methods: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Clone, Debug)]
pub struct Pattern {
    class_name: String,
    methods: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `methods` so that it must match the whole method name.
    pub fn new(
        class_name: impl Into<String>,
        methods: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let class_name = class_name.into();
        let methods = methods.into();
        if class_name.trim().is_empty() {
            return Err(PatternError::EmptyClassName);
        }
        let invalid = |source: regex::Error| PatternError::InvalidRegex {
            class_name: class_name.clone(),
            methods: methods.clone(),
            source,
        };
        // A stray `)` could otherwise close the anchoring group early.
        Regex::new(&methods).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{methods})$")).map_err(invalid)?;
        Ok(Self {
            class_name,
            methods,
            regex,
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The regex as written, without the anchoring added at compile time.
    pub fn methods(&self) -> &str {
        &self.methods
    }

    pub fn matches(&self, class_name: &str, method_name: &str) -> bool {
        self.class_name == class_name && self.regex.is_match(method_name)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name && self.methods == other.methods
    }
}

impl Eq for Pattern {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternSource {
    Default,
    User,
}

/// Ordered default + user patterns. Rebuilt on configuration change, never edited while shared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternSet {
    user: Vec<Pattern>,
}

impl PatternSet {
    /// The built-in table with no user additions.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn default_patterns() -> &'static [Pattern] {
        &DEFAULT_PATTERNS
    }

    pub fn push(&mut self, pattern: Pattern) {
        self.user.push(pattern);
    }

    pub fn user_patterns(&self) -> &[Pattern] {
        &self.user
    }

    /// Defaults first, then user patterns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PatternSource, &Pattern)> {
        Self::default_patterns()
            .iter()
            .map(|p| (PatternSource::Default, p))
            .chain(self.user.iter().map(|p| (PatternSource::User, p)))
    }

    pub fn len(&self) -> usize {
        Self::default_patterns().len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First pattern matching the symbol's exact declaring class and method name.
    pub fn find_match(&self, symbol: &Symbol) -> Option<&Pattern> {
        let class = symbol.declaring_class.as_ref()?;
        self.iter()
            .map(|(_, p)| p)
            .find(|p| p.matches(&class.qualified_name, &symbol.name))
    }

    pub fn matches(&self, symbol: &Symbol) -> bool {
        self.find_match(symbol).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReturnType;

    fn value_method(class: &str, name: &str) -> Symbol {
        Symbol::method(class, name, ReturnType::Value("java.lang.Object".to_string()))
    }

    #[test]
    fn default_table_compiles_and_has_expected_size() {
        assert_eq!(PatternSet::default_patterns().len(), 27);
        assert_eq!(PatternSet::with_defaults().len(), 27);
    }

    #[test]
    fn string_methods_match_by_default() {
        let set = PatternSet::with_defaults();
        assert!(set.matches(&value_method("java.lang.String", "trim")));
        assert!(set.matches(&value_method("java.lang.String", "substring")));
    }

    #[test]
    fn regex_must_match_whole_method_name() {
        let set = PatternSet::with_defaults();
        assert!(set.matches(&value_method("java.util.List", "of")));
        assert!(!set.matches(&value_method("java.util.List", "offset")));
        assert!(!set.matches(&value_method("java.util.List", "copyOf")));
        assert!(set.matches(&value_method("java.util.Collections", "unmodifiableList")));
        assert!(!set.matches(&value_method("java.util.Collections", "sort")));
    }

    #[test]
    fn class_name_is_exact_not_hierarchical() {
        let set = PatternSet::with_defaults();
        assert!(!set.matches(&value_method("java.io.FileInputStream", "read")));
        assert!(!set.matches(&value_method("java.lang.StringBuilder", "append")));
        assert!(set.matches(&value_method("java.io.InputStream", "read")));
    }

    #[test]
    fn unknown_declaring_class_never_matches() {
        let mut symbol = value_method("java.lang.String", "trim");
        symbol.declaring_class = None;
        assert!(!PatternSet::with_defaults().matches(&symbol));
    }

    #[test]
    fn user_patterns_are_appended_after_defaults() {
        let mut set = PatternSet::with_defaults();
        set.push(Pattern::new("com.acme.Money", "plus|minus").expect("valid"));
        set.push(Pattern::new("com.acme.Money", "plus|minus").expect("valid"));

        assert_eq!(set.len(), 29);
        let last = set.iter().last().expect("non-empty");
        assert_eq!(last.0, PatternSource::User);
        assert_eq!(last.1.class_name(), "com.acme.Money");
        assert!(set.matches(&value_method("com.acme.Money", "minus")));
        assert!(!set.matches(&value_method("com.acme.Money", "times")));
    }

    #[test]
    fn invalid_regex_is_rejected_with_context() {
        let err = Pattern::new("com.acme.Money", "plus(").expect_err("unbalanced group");
        let msg = err.to_string();
        assert!(msg.contains("com.acme.Money"));
        assert!(msg.contains("plus("));
    }

    #[test]
    fn unbalanced_close_paren_cannot_escape_anchoring() {
        let err = Pattern::new("com.acme.Money", "plus)|(?:minus").expect_err("unbalanced");
        assert!(matches!(err, PatternError::InvalidRegex { .. }));
    }

    #[test]
    fn java_only_lookaround_is_rejected() {
        assert!(Pattern::new("com.acme.Money", "(?!get).*").is_err());
    }

    #[test]
    fn empty_class_name_is_rejected() {
        assert!(matches!(
            Pattern::new("  ", ".*"),
            Err(PatternError::EmptyClassName)
        ));
    }

    #[test]
    fn alternation_is_grouped_before_anchoring() {
        let pattern = Pattern::new("java.io.Reader", "read|skip").expect("valid");
        assert!(pattern.matches("java.io.Reader", "skip"));
        assert!(!pattern.matches("java.io.Reader", "readLine"));
        assert!(!pattern.matches("java.io.Reader", "unskip"));
    }
}

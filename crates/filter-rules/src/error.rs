use std::fmt;

use thiserror::Error;

/// Classification of a rule string that could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// The rule does not start with `Ignore` or `Keep`.
    UnknownOperation,
    /// No recognised filter type follows the operation keyword.
    UnknownFilterType,
    /// Parentheses are missing or unbalanced, or the content is empty.
    MalformedRuleSyntax,
}

impl ParseErrorKind {
    /// Returns a short lowercase description of the failure class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownOperation => "unknown operation",
            Self::UnknownFilterType => "unknown filter type",
            Self::MalformedRuleSyntax => "malformed rule syntax",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a rule string cannot be turned into a
/// [`FilterDefinition`](crate::FilterDefinition).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub struct ParseError {
    kind: ParseErrorKind,
    rule: String,
    fragment: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, rule: &str, fragment: &str) -> Self {
        Self {
            kind,
            rule: rule.to_owned(),
            fragment: fragment.to_owned(),
        }
    }

    /// Returns the classification describing why parsing failed.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the trimmed rule text that was rejected.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Returns the part of the rule the parser could not accept.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::UnknownOperation => write!(
                f,
                "filter rule '{}' has an unknown operation '{}': expected 'Ignore' or 'Keep'",
                self.rule, self.fragment
            ),
            ParseErrorKind::UnknownFilterType => write!(
                f,
                concat!(
                    "filter rule '{}' has an unknown filter type '{}': ",
                    "expected 'Schema', 'Type', 'Name' or 'MultiPartName'"
                ),
                self.rule, self.fragment
            ),
            ParseErrorKind::MalformedRuleSyntax => write!(
                f,
                "filter rule '{}' is malformed near '{}': expected a non-empty '(...)' pattern",
                self.rule, self.fragment
            ),
        }
    }
}

/// Error produced when a rule pattern cannot be compiled into a regular expression.
#[derive(Debug, Error)]
#[error("failed to compile filter pattern '{pattern}': {source}")]
pub struct FilterError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl FilterError {
    pub(crate) fn new(pattern: String, source: regex::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Error returned while building a [`FilterSet`](crate::FilterSet).
///
/// Carries the zero-based position of the rule that failed so callers can
/// point at the offending line or argument.
#[derive(Debug, Error)]
pub enum FilterSetError {
    /// A raw rule string could not be parsed.
    #[error("rule {index}: {source}")]
    Parse {
        /// Position of the rule in the input sequence.
        index: usize,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },
    /// A parsed rule carried an invalid regular expression.
    #[error("rule {index}: {source}")]
    Filter {
        /// Position of the rule in the input sequence.
        index: usize,
        /// Underlying compilation failure.
        #[source]
        source: FilterError,
    },
}

impl FilterSetError {
    /// Returns the position of the rule that failed.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Parse { index, .. } | Self::Filter { index, .. } => *index,
        }
    }
}

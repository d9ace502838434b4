use std::fmt;
use std::str::FromStr;

use crate::{FilterOperation, FilterType, MatchType, ParseError, parser};

/// Parsed, immutable filter rule.
///
/// Definitions are produced by [`parse`](crate::parse) (or [`FromStr`]) and
/// never change afterwards. The [`Display`](fmt::Display) implementation
/// renders canonical rule text that parses back to an equal definition.
///
/// Only [`parse`](crate::parse) guarantees a non-empty pattern and non-empty
/// options. The builder constructors and serde deserialization take their
/// input as given.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterDefinition {
    pub(crate) operation: FilterOperation,
    pub(crate) filter_type: FilterType,
    pub(crate) match_type: MatchType,
    pub(crate) pattern: String,
    pub(crate) options: Vec<String>,
}

impl FilterDefinition {
    /// Creates a definition from already validated parts.
    ///
    /// No content normalisation or validation happens here: an empty
    /// `pattern` is accepted. Use [`parse`](crate::parse) to go through the
    /// DSL rules.
    #[must_use]
    pub fn new(
        operation: FilterOperation,
        filter_type: FilterType,
        match_type: MatchType,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            filter_type,
            match_type,
            pattern: pattern.into(),
            options: Vec::new(),
        }
    }

    /// Creates an `Ignore` definition matching `pattern`.
    ///
    /// Like [`new`](Self::new), the pattern is not validated.
    #[must_use]
    pub fn ignore(filter_type: FilterType, pattern: impl Into<String>) -> Self {
        Self::new(
            FilterOperation::Ignore,
            filter_type,
            MatchType::DoesMatch,
            pattern,
        )
    }

    /// Creates a `Keep` definition matching `pattern`.
    ///
    /// Like [`new`](Self::new), the pattern is not validated.
    #[must_use]
    pub fn keep(filter_type: FilterType, pattern: impl Into<String>) -> Self {
        Self::new(
            FilterOperation::Keep,
            filter_type,
            MatchType::DoesMatch,
            pattern,
        )
    }

    /// Sets the match type.
    #[must_use]
    pub const fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Appends an auxiliary qualifier.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Returns the rule operation.
    #[must_use]
    pub const fn operation(&self) -> FilterOperation {
        self.operation
    }

    /// Returns the attribute the pattern is matched against.
    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Returns whether a pattern hit or a pattern miss makes the rule apply.
    #[must_use]
    pub const fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Returns the regular expression (or verbatim multi-part content).
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the auxiliary qualifiers in the order they were written.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the schema qualifier of a `Type` rule, if one was supplied.
    #[must_use]
    pub fn schema_qualifier(&self) -> Option<&str> {
        match self.filter_type {
            FilterType::Type => self.options.first().map(String::as_str),
            FilterType::Schema | FilterType::Name | FilterType::MultiPartName => None,
        }
    }
}

impl FromStr for FilterDefinition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl fmt::Display for FilterDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operation, self.filter_type)?;
        if self.match_type.is_negated() {
            f.write_str("!")?;
        }
        write!(f, "({}", self.pattern)?;
        for option in &self.options {
            write!(f, ", {option}")?;
        }
        f.write_str(")")
    }
}

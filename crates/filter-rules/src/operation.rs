use std::fmt;

/// What happens to schema objects matched by a rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterOperation {
    /// Exclude matching objects from the deployment.
    Ignore,
    /// Retain only matching objects for the rule's dimension.
    Keep,
}

impl FilterOperation {
    /// Every operation in the order the parser tries them.
    pub const ALL: [Self; 2] = [Self::Ignore, Self::Keep];

    /// Returns the DSL keyword introducing the operation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Ignore => "Ignore",
            Self::Keep => "Keep",
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::FilterOperation;

    #[test]
    fn display_variants_match_keywords() {
        let cases = [
            (FilterOperation::Ignore, "Ignore"),
            (FilterOperation::Keep, "Keep"),
        ];

        for (operation, expected) in cases {
            assert_eq!(operation.to_string(), expected);
        }
    }

    #[test]
    fn keywords_are_not_prefixes_of_each_other() {
        let ignore = FilterOperation::Ignore.keyword();
        let keep = FilterOperation::Keep.keyword();
        assert!(!ignore.starts_with(keep));
        assert!(!keep.starts_with(ignore));
    }
}

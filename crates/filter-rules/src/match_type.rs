/// Whether a pattern hit means the rule applies or the rule applies on a miss.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchType {
    /// The rule applies when the pattern matches.
    #[default]
    DoesMatch,
    /// The rule applies when the pattern does not match (`!` in the DSL).
    DoesNotMatch,
}

impl MatchType {
    /// Returns `true` for [`MatchType::DoesNotMatch`].
    #[must_use]
    pub const fn is_negated(self) -> bool {
        matches!(self, Self::DoesNotMatch)
    }

    /// Combines a raw pattern outcome with this match type.
    #[must_use]
    pub const fn resolve(self, matched: bool) -> bool {
        match self {
            Self::DoesMatch => matched,
            Self::DoesNotMatch => !matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatchType;

    #[test]
    fn resolve_negates_only_for_does_not_match() {
        assert!(MatchType::DoesMatch.resolve(true));
        assert!(!MatchType::DoesMatch.resolve(false));
        assert!(!MatchType::DoesNotMatch.resolve(true));
        assert!(MatchType::DoesNotMatch.resolve(false));
    }

    #[test]
    fn default_is_does_match() {
        assert_eq!(MatchType::default(), MatchType::DoesMatch);
        assert!(!MatchType::default().is_negated());
    }
}

use crate::{FilterDefinition, FilterOperation, SchemaObject};

/// Outcome of evaluating one rule of a [`FilterSet`](crate::FilterSet)
/// against one object.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuleVerdict<'a> {
    index: usize,
    definition: &'a FilterDefinition,
    applies: bool,
}

impl<'a> RuleVerdict<'a> {
    pub(crate) const fn new(index: usize, definition: &'a FilterDefinition, applies: bool) -> Self {
        Self {
            index,
            definition,
            applies,
        }
    }

    /// Returns the rule's position in the set.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the evaluated rule.
    #[must_use]
    pub const fn definition(&self) -> &'a FilterDefinition {
        self.definition
    }

    /// Returns the rule's operation.
    #[must_use]
    pub const fn operation(&self) -> FilterOperation {
        self.definition.operation()
    }

    /// Returns whether the rule applies to the object (negation already
    /// accounted for).
    #[must_use]
    pub const fn applies(&self) -> bool {
        self.applies
    }
}

/// Host-supplied policy turning per-rule verdicts into a keep/ignore decision.
///
/// No policy ships with the crate: how `Ignore` and `Keep` rules interact is
/// decided by the deployment pipeline. Closures of the matching shape
/// implement the trait.
///
/// # Examples
///
/// ```
/// use filter_rules::{CombinationPolicy, FilterOperation, FilterSet, RuleVerdict, SchemaObject};
///
/// // Drop anything an Ignore rule applies to.
/// let ignore_wins = |_: &SchemaObject, verdicts: &[RuleVerdict<'_>]| {
///     !verdicts
///         .iter()
///         .any(|v| v.applies() && v.operation() == FilterOperation::Ignore)
/// };
///
/// let set = FilterSet::parse_rules(["IgnoreSchema(^dev$)"]).unwrap();
/// assert!(!set.keeps(&SchemaObject::new("Table", "dev", "Orders"), &ignore_wins));
/// assert!(set.keeps(&SchemaObject::new("Table", "dbo", "Orders"), &ignore_wins));
/// ```
pub trait CombinationPolicy {
    /// Returns `true` when `object` should be kept in the deployment.
    fn keep(&self, object: &SchemaObject, verdicts: &[RuleVerdict<'_>]) -> bool;
}

impl<F> CombinationPolicy for F
where
    F: Fn(&SchemaObject, &[RuleVerdict<'_>]) -> bool,
{
    fn keep(&self, object: &SchemaObject, verdicts: &[RuleVerdict<'_>]) -> bool {
        self(object, verdicts)
    }
}

use std::sync::Arc;

use crate::debug_filter::trace_object_decision;
use crate::{
    CombinationPolicy, CompiledFilter, FilterDefinition, FilterSetError, RuleVerdict,
    SchemaObject, parse,
};

/// Compiled, immutable, ordered collection of filter rules.
///
/// A `FilterSet` evaluates every rule against an object and hands the
/// verdicts, in definition order, to a host-supplied
/// [`CombinationPolicy`]. It is cheaply cloneable (the compiled rules live
/// behind an [`Arc`]) and can be shared across threads.
///
/// # Examples
///
/// ```
/// use filter_rules::{FilterSet, SchemaObject};
///
/// let set = FilterSet::parse_rules([
///     "IgnoreType(Table, dbo)",
///     "KeepName!(^tmp_)",
/// ]).unwrap();
///
/// let object = SchemaObject::new("Table", "dbo", "Orders");
/// let verdicts = set.verdicts(&object);
/// assert!(verdicts[0].applies());
/// assert!(verdicts[1].applies());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    rules: Arc<[CompiledFilter]>,
}

impl FilterSet {
    /// Compiles `definitions` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterSetError::Filter`] for the first definition whose
    /// pattern is not a valid regular expression.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, FilterSetError>
    where
        I: IntoIterator<Item = FilterDefinition>,
    {
        let rules = definitions
            .into_iter()
            .enumerate()
            .map(|(index, definition)| {
                CompiledFilter::new(definition)
                    .map_err(|source| FilterSetError::Filter { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules: rules.into(),
        })
    }

    /// Parses and compiles raw rule strings in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterSetError::Parse`] or [`FilterSetError::Filter`] for
    /// the first rule that fails, tagged with its position.
    pub fn parse_rules<I, S>(rules: I) -> Result<Self, FilterSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let definitions = rules
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                parse(raw.as_ref()).map_err(|source| FilterSetError::Parse { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_definitions(definitions)
    }

    /// Returns `true` if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterates over the parsed definitions in order.
    pub fn definitions(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.rules.iter().map(CompiledFilter::definition)
    }

    /// Evaluates every rule against `object`, in definition order.
    #[must_use]
    pub fn verdicts(&self, object: &SchemaObject) -> Vec<RuleVerdict<'_>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleVerdict::new(index, rule.definition(), rule.applies(object)))
            .collect()
    }

    /// Returns the policy's keep/ignore decision for `object`.
    #[must_use]
    pub fn keeps<P>(&self, object: &SchemaObject, policy: &P) -> bool
    where
        P: CombinationPolicy + ?Sized,
    {
        let verdicts = self.verdicts(object);
        let kept = policy.keep(object, &verdicts);
        let applied = verdicts.iter().filter(|verdict| verdict.applies()).count();
        trace_object_decision(object.multi_part_name(), kept, applied);
        kept
    }

    /// Returns the policy's decision for each object, in input order.
    ///
    /// With the `parallel` feature the objects are spread across the `rayon`
    /// thread pool; results keep the input order either way.
    #[must_use]
    pub fn evaluate_all<P>(&self, objects: &[SchemaObject], policy: &P) -> Vec<bool>
    where
        P: CombinationPolicy + Sync + ?Sized,
    {
        map_objects(objects, |object| self.keeps(object, policy))
    }

    /// Returns the per-rule verdicts for each object, in input order.
    ///
    /// Runs on the `rayon` pool with the `parallel` feature, like
    /// [`evaluate_all`](Self::evaluate_all).
    #[must_use]
    pub fn verdicts_all(&self, objects: &[SchemaObject]) -> Vec<Vec<RuleVerdict<'_>>> {
        map_objects(objects, |object| self.verdicts(object))
    }
}

#[cfg(feature = "parallel")]
fn map_objects<T, F>(objects: &[SchemaObject], evaluate: F) -> Vec<T>
where
    T: Send,
    F: Fn(&SchemaObject) -> T + Send + Sync,
{
    use rayon::prelude::*;
    objects.par_iter().map(evaluate).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_objects<T, F>(objects: &[SchemaObject], evaluate: F) -> Vec<T>
where
    F: Fn(&SchemaObject) -> T,
{
    objects.iter().map(evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterOperation, FilterType};

    fn ignore_wins(_: &SchemaObject, verdicts: &[RuleVerdict<'_>]) -> bool {
        !verdicts
            .iter()
            .any(|verdict| verdict.applies() && verdict.operation() == FilterOperation::Ignore)
    }

    #[test]
    fn default_set_is_empty() {
        let set = FilterSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.verdicts(&SchemaObject::new("Table", "dbo", "Orders")).is_empty());
    }

    #[test]
    fn parse_rules_keeps_order() {
        let set = FilterSet::parse_rules(["KeepSchema(dbo)", "IgnoreName(Audit)"]).unwrap();
        let types: Vec<FilterType> = set.definitions().map(FilterDefinition::filter_type).collect();
        assert_eq!(types, [FilterType::Schema, FilterType::Name]);
    }

    #[test]
    fn parse_rules_reports_failing_index() {
        let error = FilterSet::parse_rules(["KeepSchema(dbo)", "KeepColumn(x)"]).unwrap_err();
        assert_eq!(error.index(), 1);
        assert!(matches!(error, FilterSetError::Parse { .. }));
    }

    #[test]
    fn invalid_regex_reports_failing_index() {
        let error = FilterSet::parse_rules(["KeepName([)"]).unwrap_err();
        assert_eq!(error.index(), 0);
        assert!(matches!(error, FilterSetError::Filter { .. }));
    }

    #[test]
    fn verdicts_follow_rule_order() {
        let set = FilterSet::parse_rules(["IgnoreSchema(dev)", "IgnoreSchema(dbo)"]).unwrap();
        let verdicts = set.verdicts(&SchemaObject::new("Table", "dbo", "Orders"));

        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].index(), 0);
        assert!(!verdicts[0].applies());
        assert!(verdicts[1].applies());
    }

    #[test]
    fn keeps_delegates_to_policy() {
        let set = FilterSet::parse_rules(["IgnoreType(Table, dbo)"]).unwrap();

        assert!(!set.keeps(&SchemaObject::new("Table", "dbo", "Orders"), &ignore_wins));
        assert!(set.keeps(&SchemaObject::new("Table", "dev", "Orders"), &ignore_wins));
    }

    #[test]
    fn evaluate_all_preserves_input_order() {
        let set = FilterSet::parse_rules(["IgnoreSchema(^dev$)"]).unwrap();
        let objects = [
            SchemaObject::new("Table", "dev", "A"),
            SchemaObject::new("Table", "dbo", "B"),
            SchemaObject::new("View", "dev", "C"),
        ];

        assert_eq!(set.evaluate_all(&objects, &ignore_wins), [false, true, false]);
    }

    #[test]
    fn verdicts_all_matches_single_object_verdicts() {
        let set = FilterSet::parse_rules(["IgnoreSchema(^dev$)", "KeepName!(^tmp)"]).unwrap();
        let objects = [
            SchemaObject::new("Table", "dev", "tmp_a"),
            SchemaObject::new("Table", "dbo", "Orders"),
        ];

        let all = set.verdicts_all(&objects);
        assert_eq!(all.len(), 2);
        for (object, verdicts) in objects.iter().zip(&all) {
            assert_eq!(verdicts, &set.verdicts(object));
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_evaluation_preserves_input_order() {
        let set = FilterSet::parse_rules(["IgnoreName(^even_)"]).unwrap();
        let objects: Vec<SchemaObject> = (0..512)
            .map(|index| {
                let prefix = if index % 2 == 0 { "even" } else { "odd" };
                SchemaObject::new("Table", "dbo", format!("{prefix}_{index}"))
            })
            .collect();

        let kept = set.evaluate_all(&objects, &ignore_wins);
        let expected: Vec<bool> = (0..512).map(|index| index % 2 == 1).collect();
        assert_eq!(kept, expected);

        let verdicts = set.verdicts_all(&objects);
        for (index, row) in verdicts.iter().enumerate() {
            assert_eq!(row[0].applies(), index % 2 == 0, "object {index}");
        }
    }

    #[test]
    fn clones_share_compiled_rules() {
        let set = FilterSet::parse_rules(["KeepSchema(dbo)"]).unwrap();
        let clone = set.clone();
        assert!(Arc::ptr_eq(&set.rules, &clone.rules));
    }
}

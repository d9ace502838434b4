use regex::Regex;

use crate::debug_filter::trace_rule_evaluate;
use crate::{FilterDefinition, FilterError, SchemaObject};

/// A [`FilterDefinition`] paired with its compiled regular expression.
#[derive(Clone, Debug)]
pub struct CompiledFilter {
    definition: FilterDefinition,
    regex: Regex,
}

impl CompiledFilter {
    /// Compiles the definition's pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when the pattern is not a valid regular
    /// expression.
    pub fn new(definition: FilterDefinition) -> Result<Self, FilterError> {
        let regex = Regex::new(definition.pattern())
            .map_err(|error| FilterError::new(definition.pattern().to_owned(), error))?;
        Ok(Self { definition, regex })
    }

    /// Returns the underlying definition.
    #[must_use]
    pub const fn definition(&self) -> &FilterDefinition {
        &self.definition
    }

    /// Returns whether the rule applies to `object`.
    ///
    /// The pattern is searched (not anchored) in the attribute selected by
    /// the filter type. A `Type` rule with a schema qualifier only matches
    /// objects whose effective schema equals the qualifier, ignoring ASCII
    /// case. The `!` marker negates the combined outcome, so a negated
    /// qualified rule applies to every object outside that schema.
    #[must_use]
    pub fn applies(&self, object: &SchemaObject) -> bool {
        let definition = &self.definition;
        let in_scope = definition
            .schema_qualifier()
            .is_none_or(|qualifier| object.effective_schema().eq_ignore_ascii_case(qualifier));

        let matched =
            in_scope && self.regex.is_match(object.attribute(definition.filter_type()));
        let applies = definition.match_type().resolve(matched);
        trace_rule_evaluate(object.multi_part_name(), definition.pattern(), matched, applies);
        applies
    }
}

/// Compiles `definition` and evaluates it against a single object.
///
/// Prefer [`CompiledFilter`] or [`FilterSet`](crate::FilterSet) when the same
/// rule is checked against many objects.
///
/// # Errors
///
/// Returns [`FilterError`] when the pattern is not a valid regular expression.
pub fn applies(definition: &FilterDefinition, object: &SchemaObject) -> Result<bool, FilterError> {
    CompiledFilter::new(definition.clone()).map(|compiled| compiled.applies(object))
}

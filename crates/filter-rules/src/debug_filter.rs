//! Structured tracing for rule parsing and evaluation.
//!
//! Every helper is compiled behind the `tracing` feature flag and collapses
//! to an inline no-op when the feature is disabled.

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
pub(crate) const FILTER_TARGET: &str = "schema_filter::filter";

/// Traces a rule string that parsed successfully.
///
/// # Arguments
///
/// * `rule` - The trimmed rule text
/// * `operation` - The operation keyword (`Ignore`/`Keep`)
/// * `filter_type` - The effective filter type keyword after normalisation
/// * `negated` - Whether the rule carried the `!` marker
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_parsed(rule: &str, operation: &str, filter_type: &str, negated: bool) {
    tracing::debug!(
        target: FILTER_TARGET,
        rule = %rule,
        operation = %operation,
        filter_type = %filter_type,
        negated = negated,
        "rule_parsed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_parsed(_rule: &str, _operation: &str, _filter_type: &str, _negated: bool) {}

/// Traces a rule string the parser rejected.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_rejected(rule: &str, kind: &str, fragment: &str) {
    tracing::debug!(
        target: FILTER_TARGET,
        rule = %rule,
        kind = %kind,
        fragment = %fragment,
        "rule_rejected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_rejected(_rule: &str, _kind: &str, _fragment: &str) {}

/// Traces evaluation of one object against one rule.
///
/// # Arguments
///
/// * `object` - The object's multi-part name
/// * `pattern` - The rule pattern being tested
/// * `matched` - Raw regular expression outcome
/// * `applies` - Outcome after negation and schema qualification
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_evaluate(object: &str, pattern: &str, matched: bool, applies: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        object = %object,
        pattern = %pattern,
        matched = matched,
        applies = applies,
        "rule_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_evaluate(_object: &str, _pattern: &str, _matched: bool, _applies: bool) {}

/// Traces the final keep/ignore decision a combination policy made.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_object_decision(object: &str, kept: bool, applied_rules: usize) {
    tracing::info!(
        target: FILTER_TARGET,
        object = %object,
        kept = kept,
        applied_rules = applied_rules,
        "object_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_object_decision(_object: &str, _kept: bool, _applied_rules: usize) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_accept_arbitrary_input() {
        trace_rule_parsed("KeepSchema(dev)", "Keep", "Schema", false);
        trace_rule_rejected("DropType(x)", "unknown operation", "DropType");
        trace_rule_evaluate("dev,Orders", "dev", true, true);
        trace_object_decision("dev,Orders", false, 1);
    }
}

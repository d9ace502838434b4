use crate::debug_filter::{trace_rule_parsed, trace_rule_rejected};
use crate::normalize::normalize_content;
use crate::report::DiagnosticReporter;
use crate::{FilterDefinition, FilterOperation, FilterType, MatchType, ParseError, ParseErrorKind};

const NEGATION_MARKER: char = '!';
const OPEN_PAREN: char = '(';
const CLOSE_PAREN: char = ')';

/// Parses a single rule string such as `IgnoreType(Table, dbo)`.
///
/// Surrounding whitespace is ignored. Keywords are case-sensitive and must be
/// written without separating whitespace: `<Operation><Type>[!](<content>)`.
///
/// # Errors
///
/// Returns a [`ParseError`] whose [`kind`](ParseError::kind) is
/// [`UnknownOperation`](ParseErrorKind::UnknownOperation),
/// [`UnknownFilterType`](ParseErrorKind::UnknownFilterType) or
/// [`MalformedRuleSyntax`](ParseErrorKind::MalformedRuleSyntax).
///
/// # Examples
///
/// ```
/// use filter_rules::{FilterOperation, FilterType, MatchType, parse};
///
/// let definition = parse("IgnoreType(Table, dbo)").unwrap();
/// assert_eq!(definition.operation(), FilterOperation::Ignore);
/// assert_eq!(definition.filter_type(), FilterType::Type);
/// assert_eq!(definition.match_type(), MatchType::DoesMatch);
/// assert_eq!(definition.pattern(), "Table");
/// assert_eq!(definition.options(), ["dbo".to_owned()]);
/// ```
pub fn parse(raw: &str) -> Result<FilterDefinition, ParseError> {
    let rule = raw.trim();
    let result = parse_trimmed(rule);
    match &result {
        Ok(definition) => trace_rule_parsed(
            rule,
            definition.operation.keyword(),
            definition.filter_type.keyword(),
            definition.match_type.is_negated(),
        ),
        Err(error) => trace_rule_rejected(rule, error.kind().as_str(), error.fragment()),
    }
    result
}

/// Parses `raw` and hands any failure to `reporter` before returning it.
///
/// The error is always propagated; the reporter only observes it.
pub fn parse_with_reporter<R>(raw: &str, reporter: &mut R) -> Result<FilterDefinition, ParseError>
where
    R: DiagnosticReporter + ?Sized,
{
    parse(raw).inspect_err(|error| reporter.report(&error.to_string()))
}

fn parse_trimmed(rule: &str) -> Result<FilterDefinition, ParseError> {
    let (operation, remainder) = split_operation(rule)?;
    let (declared, remainder) = split_filter_type(rule, remainder)?;
    let (match_type, remainder) = split_negation(remainder);
    let content = parenthesized_content(rule, remainder)?;

    let (filter_type, pattern, options) = normalize_content(declared, content).into_parts();
    if pattern.trim().is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MalformedRuleSyntax,
            rule,
            content,
        ));
    }

    Ok(FilterDefinition {
        operation,
        filter_type,
        match_type,
        pattern,
        options,
    })
}

fn split_operation(rule: &str) -> Result<(FilterOperation, &str), ParseError> {
    FilterOperation::ALL
        .iter()
        .find_map(|operation| {
            rule.strip_prefix(operation.keyword())
                .map(|remainder| (*operation, remainder))
        })
        .ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownOperation,
                rule,
                leading_word(rule),
            )
        })
}

fn split_filter_type<'a>(
    rule: &str,
    remainder: &'a str,
) -> Result<(FilterType, &'a str), ParseError> {
    // A keyword only counts when the next character cannot extend it, so
    // `KeepNamespace(...)` is an unknown type rather than `Name` + garbage.
    FilterType::BY_KEYWORD_LENGTH
        .iter()
        .find_map(|filter_type| {
            remainder
                .strip_prefix(filter_type.keyword())
                .filter(|rest| !rest.starts_with(is_word_char))
                .map(|rest| (*filter_type, rest))
        })
        .ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownFilterType,
                rule,
                leading_word(remainder),
            )
        })
}

fn split_negation(remainder: &str) -> (MatchType, &str) {
    match remainder.strip_prefix(NEGATION_MARKER) {
        Some(rest) => (MatchType::DoesNotMatch, rest),
        None => (MatchType::DoesMatch, remainder),
    }
}

fn parenthesized_content<'a>(rule: &str, remainder: &'a str) -> Result<&'a str, ParseError> {
    let malformed = || ParseError::new(ParseErrorKind::MalformedRuleSyntax, rule, remainder);

    let content = remainder
        .strip_prefix(OPEN_PAREN)
        .and_then(|inner| inner.strip_suffix(CLOSE_PAREN))
        .ok_or_else(malformed)?;

    if content.trim().is_empty() {
        return Err(malformed());
    }

    Ok(content)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Returns the identifier-like prefix of `text`, or all of `text` when it
/// does not start with one.
fn leading_word(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
        .map_or(text.len(), |(index, _)| index);
    if end == 0 { text } else { &text[..end] }
}

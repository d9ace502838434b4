//! Content normalisation applied after the rule header has been parsed.
//!
//! The parenthesised content of a rule is split on `,` into a primary pattern
//! followed by auxiliary options, with two exceptions:
//!
//! - A rule declared as `Name` whose content contains a comma is a multi-part
//!   name written with the short keyword. It is reclassified to
//!   [`FilterType::MultiPartName`] and the whole content becomes the pattern.
//! - A rule declared as `MultiPartName` is never split.

use crate::FilterType;

/// Separator between the pattern and each auxiliary option.
pub const CONTENT_SEPARATOR: char = ',';

/// Result of splitting a rule's parenthesised content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedContent {
    filter_type: FilterType,
    pattern: String,
    options: Vec<String>,
}

impl NormalizedContent {
    /// Returns the effective filter type after reclassification.
    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Returns the primary pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the trimmed auxiliary options.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub(crate) fn into_parts(self) -> (FilterType, String, Vec<String>) {
        (self.filter_type, self.pattern, self.options)
    }
}

/// Splits `content` according to the declared filter type.
///
/// Empty option segments (`Table,,dbo`, trailing commas) are dropped. The
/// returned pattern may be empty; the parser rejects that case.
#[must_use]
pub fn normalize_content(declared: FilterType, content: &str) -> NormalizedContent {
    match declared {
        FilterType::MultiPartName => verbatim(FilterType::MultiPartName, content),
        FilterType::Name if content.contains(CONTENT_SEPARATOR) => {
            verbatim(FilterType::MultiPartName, content)
        }
        FilterType::Schema | FilterType::Type | FilterType::Name => {
            let mut segments = content.split(CONTENT_SEPARATOR).map(str::trim);
            let pattern = segments.next().unwrap_or_default().to_owned();
            let options = segments
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect();
            NormalizedContent {
                filter_type: declared,
                pattern,
                options,
            }
        }
    }
}

fn verbatim(filter_type: FilterType, content: &str) -> NormalizedContent {
    NormalizedContent {
        filter_type,
        pattern: content.to_owned(),
        options: Vec::new(),
    }
}

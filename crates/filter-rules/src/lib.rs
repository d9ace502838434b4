#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filter_rules` parses the schema filter DSL used to include or exclude
//! database objects from a deployment package, and matches the parsed rules
//! against schema object descriptors. A rule names an operation, the object
//! attribute it inspects, an optional negation marker, and a regular
//! expression with optional qualifiers:
//!
//! ```text
//! IgnoreType(Table, dbo)      ignore tables in schema dbo
//! KeepSchema(^sales$)         keep objects in schema sales
//! KeepName!([a-zA-Z]99.*)     keep objects whose name does not match
//! KeepName(dev,Table.*)       multi-part name match (reclassified from Name)
//! ```
//!
//! # Design
//!
//! - [`parse`] turns one rule string into an immutable [`FilterDefinition`]
//!   by ordered literal matching over the closed [`FilterOperation`] and
//!   [`FilterType`] enumerations. Splitting the parenthesised content is a
//!   separate step, [`normalize_content`], where a `Name` rule containing a
//!   comma becomes a `MultiPartName` rule.
//! - [`CompiledFilter`] pairs a definition with its compiled
//!   [`regex::Regex`] and answers whether the rule applies to a
//!   [`SchemaObject`].
//! - [`FilterSet`] holds compiled rules in order and reports per-rule
//!   [`RuleVerdict`]s. Turning those verdicts into a keep/ignore decision is
//!   left to a host-supplied [`CombinationPolicy`].
//!
//! # Invariants
//!
//! - A successfully parsed definition always has a non-empty pattern.
//! - Options preserve the order they were written in.
//! - A rule declared `MultiPartName` is never split on commas.
//! - A `DoesNotMatch` rule applies exactly when its `DoesMatch` twin does
//!   not, for every object. A `Type` rule's schema qualifier is part of the
//!   match, so it is negated along with the pattern.
//!
//! # Errors
//!
//! [`parse`] reports [`ParseError`] with a [`ParseErrorKind`] and the
//! offending fragment. Compiling a pattern reports [`FilterError`] wrapping
//! the [`regex::Error`]. [`FilterSet`] constructors wrap both in
//! [`FilterSetError`] along with the failing rule's position.
//!
//! # Features
//!
//! - `tracing`: structured events for parsing and evaluation under the
//!   `schema_filter::filter` target, plus `TracingReporter`.
//! - `serde`: `Serialize`/`Deserialize` for the data model.
//! - `parallel`: [`FilterSet::evaluate_all`] runs on the `rayon` pool.
//!
//! # Examples
//!
//! ```
//! use filter_rules::{FilterSet, FilterType, SchemaObject, parse};
//!
//! let definition = parse("KeepName(dev,Table.*)").unwrap();
//! assert_eq!(definition.filter_type(), FilterType::MultiPartName);
//!
//! let set = FilterSet::parse_rules(["IgnoreType(Table, dbo)"]).unwrap();
//! let verdicts = set.verdicts(&SchemaObject::new("Table", "dbo", "Orders"));
//! assert!(verdicts[0].applies());
//! ```

mod compiled;
pub mod debug_filter;
mod decision;
mod definition;
mod error;
mod filter_type;
mod match_type;
pub mod normalize;
mod object;
mod operation;
mod parser;
pub mod report;
mod set;

pub use compiled::{CompiledFilter, applies};
pub use decision::{CombinationPolicy, RuleVerdict};
pub use definition::FilterDefinition;
pub use error::{FilterError, FilterSetError, ParseError, ParseErrorKind};
pub use filter_type::FilterType;
pub use match_type::MatchType;
pub use normalize::{NormalizedContent, normalize_content};
pub use object::{MULTI_PART_SEPARATOR, SchemaObject};
pub use operation::FilterOperation;
pub use parser::{parse, parse_with_reporter};
#[cfg(feature = "tracing")]
pub use report::TracingReporter;
pub use report::{DiagnosticReporter, NoopReporter, WriterReporter};
pub use set::FilterSet;

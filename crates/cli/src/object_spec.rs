//! Parsing of `TYPE:PART[.PART...]` object arguments.

use filter_rules::SchemaObject;
use thiserror::Error;

/// Separates the object type from the qualified name.
const TYPE_SEPARATOR: char = ':';

/// Separates the parts of a qualified name on the command line.
const PART_SEPARATOR: char = '.';

/// An object named on the command line together with its original text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ObjectSpec {
    label: String,
    object: SchemaObject,
}

impl ObjectSpec {
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub(crate) const fn object(&self) -> &SchemaObject {
        &self.object
    }
}

/// Reasons an object argument is rejected.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub(crate) enum ObjectSpecError {
    #[error("object '{0}' must have the form TYPE:PART[.PART...]")]
    MissingType(String),
    #[error("object '{0}' has an empty name part")]
    EmptyPart(String),
}

/// Parses one object argument.
///
/// The first part is the schema, the last part the name, and all parts
/// joined with `,` form the multi-part name.
pub(crate) fn parse_object_spec(text: &str) -> Result<ObjectSpec, ObjectSpecError> {
    let Some((object_type, qualified)) = text.split_once(TYPE_SEPARATOR) else {
        return Err(ObjectSpecError::MissingType(text.to_owned()));
    };
    let object_type = object_type.trim();
    if object_type.is_empty() {
        return Err(ObjectSpecError::MissingType(text.to_owned()));
    }

    let parts: Vec<&str> = qualified.split(PART_SEPARATOR).map(str::trim).collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(ObjectSpecError::EmptyPart(text.to_owned()));
    }

    let object = SchemaObject::from_parts(object_type, parts)
        .ok_or_else(|| ObjectSpecError::EmptyPart(text.to_owned()))?;
    Ok(ObjectSpec {
        label: text.to_owned(),
        object,
    })
}

use crate::FilterType;

/// Separator used when joining name parts into a multi-part name.
pub const MULTI_PART_SEPARATOR: &str = ",";

/// Minimal description of a database schema object supplied by the host.
///
/// The multi-part name defaults to the schema and simple name joined with
/// [`MULTI_PART_SEPARATOR`] (`dev,Orders`), the form `MultiPartName` rules
/// such as `KeepName(dev,Table.*)` are written against.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaObject {
    object_type: String,
    schema: String,
    name: String,
    multi_part_name: String,
    containing_schema: Option<String>,
}

impl SchemaObject {
    /// Creates a descriptor for `schema.name` of the given type.
    #[must_use]
    pub fn new(
        object_type: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let schema = schema.into();
        let name = name.into();
        let multi_part_name = [schema.as_str(), name.as_str()].join(MULTI_PART_SEPARATOR);
        Self {
            object_type: object_type.into(),
            schema,
            name,
            multi_part_name,
            containing_schema: None,
        }
    }

    /// Creates a descriptor from every part of a qualified name.
    ///
    /// The first part is the schema and the last part the simple name; a
    /// single part is used for both. Returns `None` when `parts` is empty.
    #[must_use]
    pub fn from_parts<I, S>(object_type: impl Into<String>, parts: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        let schema = parts.first()?.clone();
        let name = parts.last()?.clone();
        Some(Self {
            object_type: object_type.into(),
            schema,
            name,
            multi_part_name: parts.join(MULTI_PART_SEPARATOR),
            containing_schema: None,
        })
    }

    /// Overrides the multi-part name.
    #[must_use]
    pub fn with_multi_part_name(mut self, multi_part_name: impl Into<String>) -> Self {
        self.multi_part_name = multi_part_name.into();
        self
    }

    /// Records the schema of the object that owns this one (for example the
    /// table an index belongs to).
    #[must_use]
    pub fn with_containing_schema(mut self, schema: impl Into<String>) -> Self {
        self.containing_schema = Some(schema.into());
        self
    }

    /// Returns the object's type name.
    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Returns the schema name.
    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Returns the simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn multi_part_name(&self) -> &str {
        &self.multi_part_name
    }

    /// Returns the owning schema, if one was recorded.
    #[must_use]
    pub fn containing_schema(&self) -> Option<&str> {
        self.containing_schema.as_deref()
    }

    /// Returns the schema a schema qualifier is compared with.
    #[must_use]
    pub fn effective_schema(&self) -> &str {
        self.containing_schema().unwrap_or(&self.schema)
    }

    /// Returns the attribute a rule of `filter_type` is matched against.
    #[must_use]
    pub fn attribute(&self, filter_type: FilterType) -> &str {
        match filter_type {
            FilterType::Schema => &self.schema,
            FilterType::Type => &self.object_type,
            FilterType::Name => &self.name,
            FilterType::MultiPartName => &self.multi_part_name,
        }
    }
}

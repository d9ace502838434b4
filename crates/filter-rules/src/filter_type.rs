use std::fmt;

/// Attribute of a schema object that a rule's pattern is matched against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterType {
    /// The object's schema name (`dbo`, `dev`).
    Schema,
    /// The object's type name (`Table`, `View`, `StoredProcedure`).
    Type,
    /// The object's simple, unqualified name.
    Name,
    /// The object's fully qualified, comma-joined name.
    MultiPartName,
}

impl FilterType {
    /// Every filter type ordered longest keyword first.
    ///
    /// The parser walks this list and takes the first keyword that prefixes
    /// the remaining input, so a shorter keyword can never shadow a longer one.
    pub const BY_KEYWORD_LENGTH: [Self; 4] =
        [Self::MultiPartName, Self::Schema, Self::Type, Self::Name];

    /// Returns the DSL keyword naming the filter type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Schema => "Schema",
            Self::Type => "Type",
            Self::Name => "Name",
            Self::MultiPartName => "MultiPartName",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

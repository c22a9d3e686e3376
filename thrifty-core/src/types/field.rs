use super::TType;

/// Wire-level identifier of a union field.
pub type FieldId = i16;

/// The id reported by a union that has no active field. Never a valid field id.
pub const UNSET_FIELD_ID: FieldId = 0;

/// Describes one declared field of a union
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct UnionField {
    /// Declared name of the field, e.g. `intValue`
    pub name: &'static str,

    /// Wire identifier, unique and positive within the union
    pub id: FieldId,

    /// Wire type of the payload
    pub ttype: TType,

    /// Name of the Rust variant holding this field, e.g. `IntValue`
    pub variant: &'static str,

    /// The payload type as written in the declaration, e.g. `Vec<i64>`
    pub type_name: &'static str,

    /// Doc comment lines, collected by the derive. They tend to start with a space.
    pub doc: &'static [&'static str],
}

impl UnionField {
    /// Returns a builder for UnionField
    pub const fn builder() -> UnionFieldBuilder {
        UnionFieldBuilder::new()
    }
}

/// Builder for UnionField
pub struct UnionFieldBuilder {
    name: Option<&'static str>,
    id: Option<FieldId>,
    ttype: Option<TType>,
    variant: Option<&'static str>,
    type_name: &'static str,
    doc: &'static [&'static str],
}

impl UnionFieldBuilder {
    /// Creates a new UnionFieldBuilder
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            name: None,
            id: None,
            ttype: None,
            variant: None,
            type_name: "",
            doc: &[],
        }
    }

    /// Sets the declared name
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the wire identifier
    pub const fn id(mut self, id: FieldId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the wire type
    pub const fn ttype(mut self, ttype: TType) -> Self {
        self.ttype = Some(ttype);
        self
    }

    /// Sets the Rust variant name
    pub const fn variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the declared payload type
    pub const fn type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// Sets the doc comment
    pub const fn doc(mut self, doc: &'static [&'static str]) -> Self {
        self.doc = doc;
        self
    }

    /// Builds the UnionField
    ///
    /// # Panics
    ///
    /// Panics (at compile time, when used in a const) if the name, id, wire
    /// type or variant is missing.
    pub const fn build(self) -> UnionField {
        UnionField {
            name: self.name.unwrap(),
            id: self.id.unwrap(),
            ttype: self.ttype.unwrap(),
            variant: self.variant.unwrap(),
            type_name: self.type_name,
            doc: self.doc,
        }
    }
}

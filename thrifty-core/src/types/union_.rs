use super::{FieldId, UnionField};

/// The fixed field table of a union type
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct UnionShape {
    /// Name of the union, e.g. `ComplexUnion`
    pub name: &'static str,

    /// All declared fields, in declaration order
    pub fields: &'static [UnionField],

    /// Doc comment lines for the union
    pub doc: &'static [&'static str],
}

impl UnionShape {
    /// Returns a builder for UnionShape
    pub const fn builder() -> UnionShapeBuilder {
        UnionShapeBuilder::new()
    }

    /// Looks up a field by wire id. The unset id never matches.
    pub fn field_by_id(&self, id: FieldId) -> Option<&'static UnionField> {
        let fields: &'static [UnionField] = self.fields;
        fields.iter().find(|field| field.id == id)
    }

    /// Looks up a field by declared name
    pub fn field_by_name(&self, name: &str) -> Option<&'static UnionField> {
        let fields: &'static [UnionField] = self.fields;
        fields.iter().find(|field| field.name == name)
    }
}

impl core::fmt::Display for UnionShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builder for UnionShape
pub struct UnionShapeBuilder {
    name: Option<&'static str>,
    fields: &'static [UnionField],
    doc: &'static [&'static str],
}

impl UnionShapeBuilder {
    /// Creates a new UnionShapeBuilder
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            name: None,
            fields: &[],
            doc: &[],
        }
    }

    /// Sets the union name
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the field table
    pub const fn fields(mut self, fields: &'static [UnionField]) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the doc comment
    pub const fn doc(mut self, doc: &'static [&'static str]) -> Self {
        self.doc = doc;
        self
    }

    /// Builds the UnionShape
    pub const fn build(self) -> UnionShape {
        UnionShape {
            name: self.name.unwrap(),
            fields: self.fields,
            doc: self.doc,
        }
    }
}

/// The closed variant table of an enum type
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct EnumShape {
    /// Name of the enum
    pub name: &'static str,

    /// All variants, in declaration order
    pub variants: &'static [EnumVariant],

    /// Doc comment lines for the enum
    pub doc: &'static [&'static str],
}

impl EnumShape {
    /// Returns a builder for EnumShape
    pub const fn builder() -> EnumShapeBuilder {
        EnumShapeBuilder::new()
    }

    /// Looks up the variant declared with `value`
    pub fn variant_by_value(&self, value: i32) -> Option<&'static EnumVariant> {
        let variants: &'static [EnumVariant] = self.variants;
        variants.iter().find(|variant| variant.value == value)
    }

    /// Looks up a variant by declared name
    pub fn variant_by_name(&self, name: &str) -> Option<&'static EnumVariant> {
        let variants: &'static [EnumVariant] = self.variants;
        variants.iter().find(|variant| variant.name == name)
    }
}

impl core::fmt::Display for EnumShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builder for EnumShape
pub struct EnumShapeBuilder {
    name: Option<&'static str>,
    variants: &'static [EnumVariant],
    doc: &'static [&'static str],
}

impl EnumShapeBuilder {
    /// Creates a new EnumShapeBuilder
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            name: None,
            variants: &[],
            doc: &[],
        }
    }

    /// Sets the enum name
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the variants
    pub const fn variants(mut self, variants: &'static [EnumVariant]) -> Self {
        self.variants = variants;
        self
    }

    /// Sets the doc comment
    pub const fn doc(mut self, doc: &'static [&'static str]) -> Self {
        self.doc = doc;
        self
    }

    /// Builds the EnumShape
    pub const fn build(self) -> EnumShape {
        EnumShape {
            name: self.name.unwrap(),
            variants: self.variants,
            doc: self.doc,
        }
    }
}

/// Describes a variant of an enum
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct EnumVariant {
    /// Declared name of the variant, e.g. `ONE`
    pub name: &'static str,

    /// The integer this variant is bound to
    pub value: i32,

    /// Doc comment for the variant
    pub doc: &'static [&'static str],
}

impl EnumVariant {
    /// Returns a builder for EnumVariant
    pub const fn builder() -> EnumVariantBuilder {
        EnumVariantBuilder::new()
    }
}

/// Builder for EnumVariant
pub struct EnumVariantBuilder {
    name: Option<&'static str>,
    value: Option<i32>,
    doc: &'static [&'static str],
}

impl EnumVariantBuilder {
    /// Creates a new EnumVariantBuilder
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            name: None,
            value: None,
            doc: &[],
        }
    }

    /// Sets the name for the EnumVariant
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the integer value for the EnumVariant
    pub const fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the doc comment for the EnumVariant
    pub const fn doc(mut self, doc: &'static [&'static str]) -> Self {
        self.doc = doc;
        self
    }

    /// Builds the EnumVariant
    pub const fn build(self) -> EnumVariant {
        EnumVariant {
            name: self.name.unwrap(),
            value: self.value.unwrap(),
            doc: self.doc,
        }
    }
}

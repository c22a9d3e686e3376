use crate::{EnumShape, FieldId, TType, UnionShape, Value};

/// A typed getter was called for a field that is not the active one.
///
/// This signals a logic error in the caller: check `is_foo()` or
/// [`crate::ThriftUnion::active_id`] first, or know which field was last set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InvalidUnionAccess {
    /// The union type
    pub union_name: &'static str,
    /// Declared name of the field that was asked for
    pub requested: &'static str,
    /// Declared name of the active field, `None` if the union is unset
    pub active: Option<&'static str>,
}

impl InvalidUnionAccess {
    /// Builds the error for an access to `requested` while `active` is set.
    pub fn new(shape: &UnionShape, requested: &'static str, active: Option<&'static str>) -> Self {
        Self {
            union_name: shape.name,
            requested,
            active,
        }
    }
}

impl core::fmt::Display for InvalidUnionAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.active {
            Some(active) => write!(
                f,
                "cannot access field `{}` of union `{}`: the active field is `{}`",
                self.requested, self.union_name, active
            ),
            None => write!(
                f,
                "cannot access field `{}` of union `{}`: the union is unset",
                self.requested, self.union_name
            ),
        }
    }
}

impl core::error::Error for InvalidUnionAccess {}

/// An integer did not match any declared variant of a closed enum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UnknownEnumValue {
    /// The enum type
    pub enum_name: &'static str,
    /// The integer that matched nothing
    pub value: i32,
}

impl UnknownEnumValue {
    /// Builds the error for `value` not being declared in `shape`.
    pub fn new(shape: &EnumShape, value: i32) -> Self {
        trace!("no variant of {} is bound to {}", shape.name, value);
        Self {
            enum_name: shape.name,
            value,
        }
    }
}

impl core::fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown value {} for enum `{}`",
            self.value, self.enum_name
        )
    }
}

impl core::error::Error for UnknownEnumValue {}

/// Errors raised while converting between typed payloads and [`Value`]s.
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ValueError {
    /// The value has a different wire type than the Rust side expects
    TypeMismatch {
        /// Wire type the Rust side expects
        expected: TType,
        /// Wire type that was found
        actual: TType,
    },

    /// A union was asked to set a field id it does not declare
    UnknownField {
        /// The union type
        union_name: &'static str,
        /// The undeclared id
        id: FieldId,
    },

    /// A struct value carrying several fields was decoded as a union
    MultipleFields {
        /// The union type
        union_name: &'static str,
        /// How many fields the struct carried
        count: usize,
    },

    /// An enum payload carried an undeclared integer
    UnknownEnumValue(UnknownEnumValue),

    /// A binary payload was read as a string but is not UTF-8
    InvalidUtf8 {
        /// Length of the valid prefix, in bytes
        valid_up_to: usize,
    },
}

impl ValueError {
    /// A [`ValueError::TypeMismatch`] between what was expected and what `found` is.
    pub fn mismatch(expected: TType, found: &Value) -> Self {
        ValueError::TypeMismatch {
            expected,
            actual: found.ttype(),
        }
    }

    /// A [`ValueError::UnknownField`] for `shape`.
    pub fn unknown_field(shape: &UnionShape, id: FieldId) -> Self {
        trace!("union {} has no field with id {}", shape.name, id);
        ValueError::UnknownField {
            union_name: shape.name,
            id,
        }
    }
}

impl core::fmt::Display for ValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueError::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {expected}, but got {actual}")
            }
            ValueError::UnknownField { union_name, id } => {
                write!(f, "union `{union_name}` has no field with id {id}")
            }
            ValueError::MultipleFields { union_name, count } => write!(
                f,
                "union `{union_name}` can hold one field, but {count} were given"
            ),
            ValueError::UnknownEnumValue(inner) => write!(f, "{inner}"),
            ValueError::InvalidUtf8 { valid_up_to } => write!(
                f,
                "binary payload is not valid UTF-8 after byte {valid_up_to}"
            ),
        }
    }
}

impl core::error::Error for ValueError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ValueError::UnknownEnumValue(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<UnknownEnumValue> for ValueError {
    fn from(inner: UnknownEnumValue) -> Self {
        ValueError::UnknownEnumValue(inner)
    }
}

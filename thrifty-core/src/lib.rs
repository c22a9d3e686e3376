#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        {
            log::trace!($($tt)*);
        }
    };
}

// Static field tables and the wire type table
mod types;
pub use types::*;

// Dynamic payloads handed to and from protocol codecs
mod value;
pub use value::*;

mod error;
pub use error::*;

// String form shared by every derived union
mod fmt;
pub use fmt::*;

// Definition for `core::` types
mod impls_core;

// Definition for `alloc::` types
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
#[cfg(feature = "std")]
mod impls_std;

mod impls_ordered_float;

#[cfg(feature = "bytes")]
mod impls_bytes;

/// A type that can appear as a field payload: it knows its wire type and
/// converts to and from the dynamic [`Value`] a protocol codec works with.
pub trait ThriftType: Sized {
    /// Wire type recorded in the field table for fields of this type.
    const TTYPE: TType;

    /// Converts `self` into a dynamic value, cloning the payload.
    fn to_value(&self) -> Value;

    /// Rebuilds a typed value from a dynamic one.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

/// A union: at most one declared field is active at a time.
///
/// Usually implemented with `#[derive(ThriftUnion)]`, which also emits the
/// per-field accessors (`set_foo`, `foo`, `foo_mut`, `into_foo`, `is_foo`).
pub trait ThriftUnion: ThriftType {
    /// The fixed `{ name -> (id, type) }` table for this union.
    const SHAPE: &'static UnionShape;

    /// Returns a union with no active field.
    fn unset() -> Self;

    /// Field id of the active field, or [`UNSET_FIELD_ID`].
    fn active_id(&self) -> FieldId;

    /// Returns true if no field has been set yet.
    fn is_unset(&self) -> bool {
        self.active_id() == UNSET_FIELD_ID
    }

    /// Table entry for the active field, if any.
    fn active_field(&self) -> Option<&'static UnionField> {
        Self::SHAPE.field_by_id(self.active_id())
    }

    /// Declared name of the active field, if any.
    fn active_name(&self) -> Option<&'static str> {
        self.active_field().map(|field| field.name)
    }

    /// The active payload as a dynamic value, for encoders.
    fn active_value(&self) -> Option<Value>;

    /// Sets the field with wire id `id` from a decoded payload. This is the
    /// setter table a decoder dispatches through.
    fn set_by_id(&mut self, id: FieldId, value: Value) -> Result<(), ValueError>;
}

/// A closed set of named variants, each bound to an explicit `i32`.
///
/// Usually implemented with `#[derive(ThriftEnum)]` on a `#[repr(i32)]` enum.
pub trait ThriftEnum: ThriftType + Copy + Eq + 'static {
    /// The `(name, value)` table for this enum.
    const SHAPE: &'static EnumShape;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The declared integer for this variant. Never fails.
    fn to_i32(self) -> i32;

    /// Looks up the variant declared with `value`.
    fn from_i32(value: i32) -> Result<Self, UnknownEnumValue>;

    /// The declared name for this variant.
    fn name(self) -> &'static str;

    /// Looks up a variant by its declared name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
    }
}

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use thrifty_core::*;

/// Derive [`ThriftUnion`] (and [`ThriftType`], `Default`, `Debug`) for an
/// enum standing for a Thrift union.
///
/// Every field is a single-payload tuple variant with a wire id. Exactly one
/// unit variant, marked `#[thrift(unset)]`, stands for the state before any
/// field is set.
///
/// ```rust
/// # use thrifty::ThriftUnion;
/// #[derive(Clone, PartialEq, Eq, Hash, ThriftUnion)]
/// #[thrift(rename_all = "camelCase")]
/// enum Payload {
///     #[thrift(unset)]
///     Unset,
///     #[thrift(id = 1)]
///     IntValue(i64),
///     #[thrift(id = 14, rename = "stringRef")]
///     Text(Box<String>),
/// }
/// ```
///
/// For each field variant `Foo(T)` this generates `set_foo(&mut self, T)`,
/// `foo(&self) -> Result<&T, InvalidUnionAccess>`, `foo_mut`, `into_foo`
/// and `is_foo`, plus `const fn new()` returning the unset union. The
/// accessors take the visibility of the enum.
///
/// Don't derive `Debug` yourself: the generated one prints the active field's
/// id, declared name and type next to its value.
///
/// # Container Attributes
///
/// * `rename_all = ".."` Derive declared field names from the variant names.
///   The possible values are: `"snake_case"`, `"SCREAMING_SNAKE_CASE"`,
///   `"PascalCase"`, `"camelCase"`, `"kebab-case"`, `"SCREAMING-KEBAB-CASE"`.
///
/// # Variant Attributes
///
/// * `id = N` The wire identifier, from 1 to 32767. Required on every field,
///   and unique within the union.
///
/// * `unset` Marks the unit variant standing for "no field set".
///
/// * `rename = ".."` The declared name, overriding `rename_all`.
pub use thrifty_macros::ThriftUnion;

/// Derive [`ThriftEnum`] (and [`ThriftType`], `TryFrom<i32>`, `From<Self>
/// for i32`, `Display`) for a `#[repr(i32)]` enum.
///
/// Every variant needs an explicit value. The enum must also be `Clone`,
/// `Copy`, `PartialEq` and `Eq`.
///
/// ```rust
/// # use thrifty::ThriftEnum;
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, ThriftEnum)]
/// #[repr(i32)]
/// enum Priority {
///     Low = 1,
///     #[thrift(rename = "URGENT")]
///     High = 10,
/// }
///
/// assert_eq!(i32::from(Priority::High), 10);
/// assert_eq!(Priority::High.to_string(), "URGENT");
/// ```
///
/// # Container Attributes
///
/// * `rename_all = ".."` Same rules as for unions.
///
/// # Variant Attributes
///
/// * `rename = ".."` The declared name.
pub use thrifty_macros::ThriftEnum;

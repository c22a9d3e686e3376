use alloc::{string::String, vec::Vec};
use ordered_float::OrderedFloat;

use crate::{FieldId, TType, ThriftEnum, ThriftType, ThriftUnion, ValueError};

/// A decoded payload whose static type is not known yet.
///
/// This is what sits between a protocol codec and the typed unions: an
/// encoder asks a union for its [`ThriftUnion::active_value`], a decoder
/// builds one of these from the wire and hands it to
/// [`ThriftUnion::set_by_id`]. Equality and hashing are structural all the
/// way down. The ordering only exists so that unordered containers can
/// convert into a canonical element order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Value {
    /// `bool`
    Bool(bool),
    /// `byte`
    Byte(i8),
    /// `i16`
    I16(i16),
    /// `i32`, also carries enum values
    I32(i32),
    /// `i64`
    I64(i64),
    /// `double`
    Double(OrderedFloat<f64>),
    /// `string`
    String(String),
    /// `binary`
    Binary(Vec<u8>),
    /// `list<elem>`
    List {
        /// Wire type of every element
        elem: TType,
        /// The elements, in order
        items: Vec<Value>,
    },
    /// `set<elem>`
    Set {
        /// Wire type of every element
        elem: TType,
        /// The elements, sorted when they come from a hashed set
        items: Vec<Value>,
    },
    /// `map<key, value>`
    Map {
        /// Wire type of every key
        key: TType,
        /// Wire type of every value
        value: TType,
        /// The entries, sorted by key when they come from a hashed map
        entries: Vec<(Value, Value)>,
    },
    /// A struct or union: `(field id, payload)` pairs. A union carries zero or one.
    Struct(Vec<(FieldId, Value)>),
}

impl Value {
    /// Wire type of this value
    pub fn ttype(&self) -> TType {
        match self {
            Value::Bool(_) => TType::Bool,
            Value::Byte(_) => TType::Byte,
            Value::I16(_) => TType::I16,
            Value::I32(_) => TType::I32,
            Value::I64(_) => TType::I64,
            Value::Double(_) => TType::Double,
            Value::String(_) | Value::Binary(_) => TType::String,
            Value::List { .. } => TType::List,
            Value::Set { .. } => TType::Set,
            Value::Map { .. } => TType::Map,
            Value::Struct(_) => TType::Struct,
        }
    }
}

/// [`ThriftType::to_value`] for derived enums
pub fn enum_to_value<E: ThriftEnum>(value: &E) -> Value {
    Value::I32(value.to_i32())
}

/// [`ThriftType::from_value`] for derived enums
pub fn enum_from_value<E: ThriftEnum>(value: Value) -> Result<E, ValueError> {
    match value {
        Value::I32(raw) => E::from_i32(raw).map_err(ValueError::from),
        other => Err(ValueError::mismatch(TType::I32, &other)),
    }
}

/// [`ThriftType::to_value`] for derived unions: a struct with the active
/// field, or with no field at all when unset.
pub fn union_to_value<U: ThriftUnion>(union: &U) -> Value {
    let mut fields = Vec::new();
    if let Some(value) = union.active_value() {
        fields.push((union.active_id(), value));
    }
    Value::Struct(fields)
}

/// [`ThriftType::from_value`] for derived unions. Rejects structs carrying
/// more than one field; an empty struct decodes to the unset union.
pub fn union_from_value<U: ThriftUnion>(value: Value) -> Result<U, ValueError> {
    let fields = match value {
        Value::Struct(fields) => fields,
        other => return Err(ValueError::mismatch(TType::Struct, &other)),
    };
    if fields.len() > 1 {
        trace!(
            "union {} decoded with {} fields, refusing",
            U::SHAPE.name,
            fields.len()
        );
        return Err(ValueError::MultipleFields {
            union_name: U::SHAPE.name,
            count: fields.len(),
        });
    }

    let mut union = U::unset();
    for (id, payload) in fields {
        trace!("union {}: dispatching field id {}", U::SHAPE.name, id);
        union.set_by_id(id, payload)?;
    }
    Ok(union)
}

/// Shorthand used by the container impls: checks a container header against
/// the element type the Rust side expects.
pub(crate) fn expect_elem<T: ThriftType>(elem: TType) -> Result<(), ValueError> {
    if elem == T::TTYPE {
        Ok(())
    } else {
        Err(ValueError::TypeMismatch {
            expected: T::TTYPE,
            actual: elem,
        })
    }
}

use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet},
    string::String,
    vec::Vec,
};

use crate::value::expect_elem;
use crate::{TType, ThriftType, Value, ValueError};

impl ThriftType for String {
    const TTYPE: TType = TType::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s),
            // `string` and `binary` share a wire type
            Value::Binary(v) => String::from_utf8(v).map_err(|e| ValueError::InvalidUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            }),
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

// `cpp2.ref`-style fields: boxing changes nothing on the wire.
impl<T: ThriftType> ThriftType for Box<T> {
    const TTYPE: TType = T::TTYPE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        T::from_value(value).map(Box::new)
    }
}

impl<T: ThriftType> ThriftType for Vec<T> {
    const TTYPE: TType = TType::List;

    fn to_value(&self) -> Value {
        Value::List {
            elem: T::TTYPE,
            items: self.iter().map(ThriftType::to_value).collect(),
        }
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::List { elem, items } => {
                expect_elem::<T>(elem)?;
                items.into_iter().map(T::from_value).collect()
            }
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

impl<T: ThriftType + Ord> ThriftType for BTreeSet<T> {
    const TTYPE: TType = TType::Set;

    fn to_value(&self) -> Value {
        Value::Set {
            elem: T::TTYPE,
            items: self.iter().map(ThriftType::to_value).collect(),
        }
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Set { elem, items } => {
                expect_elem::<T>(elem)?;
                items.into_iter().map(T::from_value).collect()
            }
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

impl<K: ThriftType + Ord, V: ThriftType> ThriftType for BTreeMap<K, V> {
    const TTYPE: TType = TType::Map;

    fn to_value(&self) -> Value {
        Value::Map {
            key: K::TTYPE,
            value: V::TTYPE,
            entries: self
                .iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        }
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Map {
                key,
                value,
                entries,
            } => {
                expect_elem::<K>(key)?;
                expect_elem::<V>(value)?;
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
                    .collect()
            }
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

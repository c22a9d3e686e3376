use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, HashSet};

use alloc::vec::Vec;

use crate::value::expect_elem;
use crate::{TType, ThriftType, Value, ValueError};

// Unions holding these cannot derive `Hash`; use the BTree collections for
// payloads that need deep hashing. Iteration order is not stable, so the
// converted elements are sorted.

impl<T, S> ThriftType for HashSet<T, S>
where
    T: ThriftType + Eq + Hash,
    S: BuildHasher + Default,
{
    const TTYPE: TType = TType::Set;

    fn to_value(&self) -> Value {
        let mut items: Vec<Value> = self.iter().map(ThriftType::to_value).collect();
        items.sort_unstable();
        Value::Set {
            elem: T::TTYPE,
            items,
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

impl<K, V, S> ThriftType for HashMap<K, V, S>
where
    K: ThriftType + Eq + Hash,
    V: ThriftType,
    S: BuildHasher + Default,
{
    const TTYPE: TType = TType::Map;

    fn to_value(&self) -> Value {
        let mut entries: Vec<(Value, Value)> = self
            .iter()
            .map(|(k, v)| (k.to_value(), v.to_value()))
            .collect();
        // keys are unique, so ordering by key alone is total
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Value::Map {
            key: K::TTYPE,
            value: V::TTYPE,
            entries,
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

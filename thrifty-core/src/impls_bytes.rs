use bytes::Bytes;

use crate::{TType, ThriftType, Value, ValueError};

impl ThriftType for Bytes {
    const TTYPE: TType = TType::String;

    fn to_value(&self) -> Value {
        Value::Binary(self.to_vec())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Binary(v) => Ok(Bytes::from(v)),
            Value::String(s) => Ok(Bytes::from(s.into_bytes())),
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

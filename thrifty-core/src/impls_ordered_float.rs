use ordered_float::OrderedFloat;

use crate::{TType, ThriftType, Value, ValueError};

impl ThriftType for OrderedFloat<f64> {
    const TTYPE: TType = TType::Double;

    fn to_value(&self) -> Value {
        Value::Double(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Double(v) => Ok(v),
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

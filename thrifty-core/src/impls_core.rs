use ordered_float::OrderedFloat;

use crate::{TType, ThriftType, Value, ValueError};

macro_rules! impl_thrift_scalar {
    ($type:ty, $ttype:ident, $variant:ident) => {
        impl ThriftType for $type {
            const TTYPE: TType = TType::$ttype;

            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(ValueError::mismatch(Self::TTYPE, &other)),
                }
            }
        }
    };
}

impl_thrift_scalar!(bool, Bool, Bool);
impl_thrift_scalar!(i8, Byte, Byte);
impl_thrift_scalar!(i16, I16, I16);
impl_thrift_scalar!(i32, I32, I32);
impl_thrift_scalar!(i64, I64, I64);

// Plain `f64` has no `Eq`/`Hash`, so unions holding one can't derive them.
// Prefer `OrderedFloat<f64>` for union payloads.
impl ThriftType for f64 {
    const TTYPE: TType = TType::Double;

    fn to_value(&self) -> Value {
        Value::Double(OrderedFloat(*self))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Double(v) => Ok(v.0),
            other => Err(ValueError::mismatch(Self::TTYPE, &other)),
        }
    }
}

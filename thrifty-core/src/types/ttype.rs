use crate::{
    EnumShape, EnumVariant, ThriftEnum, ThriftType, UnknownEnumValue, Value, ValueError,
    enum_from_value,
};

/// Wire type of a value, as carried in Thrift field and container headers.
///
/// This is itself a closed enum with explicit wire values, implemented by hand.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(i32)]
pub enum TType {
    /// End of a struct's field list
    Stop = 0,
    /// No value
    Void = 1,
    /// `bool`
    Bool = 2,
    /// `byte` (`i8`)
    Byte = 3,
    /// `double` (`f64`)
    Double = 4,
    /// `i16`
    I16 = 6,
    /// `i32`, also used for enums
    I32 = 8,
    /// `i64`
    I64 = 10,
    /// `string` and `binary`
    String = 11,
    /// Structs, unions and exceptions
    Struct = 12,
    /// `map<K, V>`
    Map = 13,
    /// `set<T>`
    Set = 14,
    /// `list<T>`
    List = 15,
}

impl TType {
    const fn variant(name: &'static str, value: TType) -> EnumVariant {
        EnumVariant::builder().name(name).value(value as i32).build()
    }
}

impl ThriftEnum for TType {
    const SHAPE: &'static EnumShape = &const {
        EnumShape::builder()
            .name("TType")
            .variants(&const {
                [
                    TType::variant("STOP", TType::Stop),
                    TType::variant("VOID", TType::Void),
                    TType::variant("BOOL", TType::Bool),
                    TType::variant("BYTE", TType::Byte),
                    TType::variant("DOUBLE", TType::Double),
                    TType::variant("I16", TType::I16),
                    TType::variant("I32", TType::I32),
                    TType::variant("I64", TType::I64),
                    TType::variant("STRING", TType::String),
                    TType::variant("STRUCT", TType::Struct),
                    TType::variant("MAP", TType::Map),
                    TType::variant("SET", TType::Set),
                    TType::variant("LIST", TType::List),
                ]
            })
            .build()
    };

    const VARIANTS: &'static [Self] = &[
        TType::Stop,
        TType::Void,
        TType::Bool,
        TType::Byte,
        TType::Double,
        TType::I16,
        TType::I32,
        TType::I64,
        TType::String,
        TType::Struct,
        TType::Map,
        TType::Set,
        TType::List,
    ];

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn from_i32(value: i32) -> Result<Self, UnknownEnumValue> {
        Ok(match value {
            0 => TType::Stop,
            1 => TType::Void,
            2 => TType::Bool,
            3 => TType::Byte,
            4 => TType::Double,
            6 => TType::I16,
            8 => TType::I32,
            10 => TType::I64,
            11 => TType::String,
            12 => TType::Struct,
            13 => TType::Map,
            14 => TType::Set,
            15 => TType::List,
            _ => return Err(UnknownEnumValue::new(Self::SHAPE, value)),
        })
    }

    fn name(self) -> &'static str {
        match self {
            TType::Stop => "STOP",
            TType::Void => "VOID",
            TType::Bool => "BOOL",
            TType::Byte => "BYTE",
            TType::Double => "DOUBLE",
            TType::I16 => "I16",
            TType::I32 => "I32",
            TType::I64 => "I64",
            TType::String => "STRING",
            TType::Struct => "STRUCT",
            TType::Map => "MAP",
            TType::Set => "SET",
            TType::List => "LIST",
        }
    }
}

impl ThriftType for TType {
    const TTYPE: TType = TType::I32;

    fn to_value(&self) -> Value {
        Value::I32(self.to_i32())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        enum_from_value(value)
    }
}

impl core::fmt::Display for TType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for TType {
    type Error = UnknownEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value)
    }
}

use std::collections::{BTreeMap, HashMap, HashSet};

use bytes::Bytes;

use thrifty::{TType, ThriftEnum, ThriftType, ThriftUnion, UnknownEnumValue, Value, ValueError};
use thrifty_testhelpers::test;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ThriftEnum)]
#[repr(i32)]
enum Color {
    Red = 1,
    Green = 2,
}

// holds an `f64`, so no `Eq`
#[derive(Clone, PartialEq, ThriftUnion)]
#[thrift(rename_all = "camelCase")]
enum Reading {
    #[thrift(unset)]
    Unset,
    #[thrift(id = 1)]
    Count(i64),
    #[thrift(id = 2)]
    Label(String),
    #[thrift(id = 3)]
    Tags(Vec<String>),
    #[thrift(id = 4)]
    Hue(Color),
    #[thrift(id = 5)]
    Lookup(BTreeMap<i16, String>),
    #[thrift(id = 6)]
    Ratio(f64),
}

#[test]
fn active_value_mirrors_the_typed_payload() {
    let mut r = Reading::new();
    assert_eq!(r.active_value(), None);

    r.set_count(12);
    assert_eq!(r.active_value(), Some(Value::I64(12)));

    r.set_tags(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(
        r.active_value(),
        Some(Value::List {
            elem: TType::String,
            items: vec![Value::String("a".into()), Value::String("b".into())],
        })
    );

    r.set_hue(Color::Green);
    assert_eq!(r.active_value(), Some(Value::I32(2)));
}

#[test]
fn set_by_id_dispatches_on_the_wire_id() {
    let mut r = Reading::new();

    r.set_by_id(2, Value::String("two".into()))?;
    assert_eq!(r.label()?, "two");
    assert_eq!(r.active_id(), 2);

    r.set_by_id(4, Value::I32(1))?;
    assert_eq!(r.hue()?, &Color::Red);

    r.set_by_id(
        5,
        Value::Map {
            key: TType::I16,
            value: TType::String,
            entries: vec![(Value::I16(7), Value::String("seven".into()))],
        },
    )?;
    assert_eq!(r.lookup()?.get(&7).map(String::as_str), Some("seven"));
}

#[test]
fn set_by_id_rejects_unknown_ids_and_keeps_the_old_value() {
    let mut r = Reading::new();
    r.set_count(1);

    assert_eq!(
        r.set_by_id(99, Value::I64(5)),
        Err(ValueError::UnknownField {
            union_name: "Reading",
            id: 99,
        })
    );
    assert_eq!(
        r.set_by_id(0, Value::I64(5)),
        Err(ValueError::UnknownField {
            union_name: "Reading",
            id: 0,
        })
    );
    assert_eq!(r.count(), Ok(&1));
}

#[test]
fn set_by_id_rejects_mismatched_payloads() {
    let mut r = Reading::new();
    r.set_label("kept".to_string());

    assert_eq!(
        r.set_by_id(1, Value::String("not a number".into())),
        Err(ValueError::TypeMismatch {
            expected: TType::I64,
            actual: TType::String,
        })
    );
    assert_eq!(r.label()?, "kept");

    let err = r.set_by_id(4, Value::I32(9)).unwrap_err();
    assert_eq!(
        err,
        ValueError::UnknownEnumValue(UnknownEnumValue {
            enum_name: "Color",
            value: 9,
        })
    );
    assert_eq!(err.to_string(), "unknown value 9 for enum `Color`");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn union_round_trips_through_value() {
    let mut r = Reading::new();
    r.set_lookup(BTreeMap::from([(1, "one".to_string()), (2, "two".to_string())]));

    let value = r.to_value();
    assert_eq!(value.ttype(), TType::Struct);
    let Value::Struct(fields) = &value else {
        panic!("expected a struct, got {value:?}");
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, 5);

    assert_eq!(Reading::from_value(value)?, r);

    let unset = Reading::new().to_value();
    assert_eq!(unset, Value::Struct(vec![]));
    assert!(Reading::from_value(unset)?.is_unset());
}

#[test]
fn decoding_refuses_more_than_one_field() {
    let value = Value::Struct(vec![(1, Value::I64(1)), (2, Value::String("x".into()))]);
    let err = Reading::from_value(value).unwrap_err();
    assert_eq!(
        err,
        ValueError::MultipleFields {
            union_name: "Reading",
            count: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "union `Reading` can hold one field, but 2 were given"
    );

    assert_eq!(
        Reading::from_value(Value::I64(1)),
        Err(ValueError::TypeMismatch {
            expected: TType::Struct,
            actual: TType::I64,
        })
    );
}

#[test]
fn doubles_compare_by_value() {
    let mut a = Reading::new();
    a.set_ratio(0.5);
    assert_eq!(a.active_value(), Some(Value::Double(0.5.into())));
    assert_eq!(<Reading as ThriftUnion>::SHAPE.field_by_id(6).map(|f| f.ttype), Some(TType::Double));

    let mut b = Reading::new();
    b.set_by_id(6, Value::Double(0.5.into()))?;
    assert_eq!(a, b);
}

#[test]
fn hash_maps_are_accepted_as_payloads() {
    let map: HashMap<i32, bool> = HashMap::from([(1, true), (2, false)]);
    let value = map.to_value();
    assert_eq!(<HashMap<i32, bool> as ThriftType>::TTYPE, TType::Map);
    assert_eq!(HashMap::<i32, bool>::from_value(value)?, map);
}

#[test]
fn hash_sets_are_accepted_as_payloads() {
    let set: HashSet<String> = ["b", "a", "c"].into_iter().map(String::from).collect();
    let value = set.to_value();
    assert_eq!(
        value,
        Value::Set {
            elem: TType::String,
            items: vec![
                Value::String("a".into()),
                Value::String("b".into()),
                Value::String("c".into()),
            ],
        }
    );
    assert_eq!(HashSet::<String>::from_value(value)?, set);

    assert_eq!(
        HashSet::<String>::from_value(Value::Set {
            elem: TType::I32,
            items: vec![],
        }),
        Err(ValueError::TypeMismatch {
            expected: TType::String,
            actual: TType::I32,
        })
    );
}

#[derive(Clone, PartialEq, Eq, Hash, ThriftUnion)]
enum Blob {
    #[thrift(unset)]
    Empty,
    #[thrift(id = 1)]
    Raw(Bytes),
    #[thrift(id = 2)]
    Text(String),
}

#[test]
fn binary_and_string_payloads_interchange() {
    let mut blob = Blob::new();
    blob.set_by_id(1, Value::String("as text".into()))?;
    assert_eq!(blob.raw()?, &Bytes::from_static(b"as text"));
    assert_eq!(blob.active_value(), Some(Value::Binary(b"as text".to_vec())));

    blob.set_by_id(2, Value::Binary(b"as bytes".to_vec()))?;
    assert_eq!(blob.text()?, "as bytes");

    let err = blob.set_by_id(2, Value::Binary(vec![0xc3])).unwrap_err();
    assert_eq!(err, ValueError::InvalidUtf8 { valid_up_to: 0 });
    assert_eq!(blob.text()?, "as bytes");
}

#[test]
fn enums_encode_as_i32() {
    assert_eq!(<Color as ThriftType>::TTYPE, TType::I32);
    assert_eq!(Color::Green.to_value(), Value::I32(2));
    assert_eq!(Color::from_value(Value::I32(1))?, Color::Red);
    assert_eq!(
        Color::from_value(Value::I16(1)),
        Err(ValueError::TypeMismatch {
            expected: TType::I32,
            actual: TType::I16,
        })
    );
    assert_eq!(Color::VARIANTS, &[Color::Red, Color::Green]);
}

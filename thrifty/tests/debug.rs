use std::collections::BTreeMap;

use insta::assert_snapshot;
use thrifty::ThriftUnion;
use thrifty_testhelpers::test;

#[derive(Clone, PartialEq, Eq, ThriftUnion)]
#[thrift(rename_all = "camelCase")]
enum ComplexUnion {
    #[thrift(unset)]
    Unset,
    #[thrift(id = 1)]
    IntValue(i64),
    #[thrift(id = 5)]
    StringValue(String),
    #[thrift(id = 2)]
    IntListValue(Vec<i64>),
    #[thrift(id = 9)]
    TypedefValue(BTreeMap<i16, String>),
    #[thrift(id = 14)]
    StringRef(Box<String>),
}

#[test]
fn unset_union() {
    assert_snapshot!(format!("{:?}", ComplexUnion::new()), @r#"ComplexUnion { value: None, id: 0, name: None, type: "<unset>" }"#);
}

#[test]
fn scalar_payload() {
    let mut u = ComplexUnion::new();
    u.set_int_value(42);
    assert_snapshot!(format!("{u:?}"), @r#"ComplexUnion { value: 42, id: 1, name: "intValue", type: "i64" }"#);

    u.set_string_value("hi".to_string());
    assert_snapshot!(format!("{u:?}"), @r#"ComplexUnion { value: "hi", id: 5, name: "stringValue", type: "String" }"#);
}

#[test]
fn container_payloads() {
    let mut u = ComplexUnion::new();
    u.set_int_list_value(vec![1, 2]);
    assert_snapshot!(format!("{u:?}"), @r#"ComplexUnion { value: [1, 2], id: 2, name: "intListValue", type: "Vec" }"#);

    u.set_typedef_value(BTreeMap::from([(3, "c".to_string())]));
    assert_snapshot!(format!("{u:?}"), @r#"ComplexUnion { value: {3: "c"}, id: 9, name: "typedefValue", type: "BTreeMap" }"#);

    u.set_string_ref(Box::new("r".to_string()));
    assert_snapshot!(format!("{u:?}"), @r#"ComplexUnion { value: "r", id: 14, name: "stringRef", type: "Box" }"#);
}

#[test]
fn debug_plays_no_part_in_equality() {
    let mut a = ComplexUnion::new();
    let mut b = ComplexUnion::new();
    a.set_int_value(1);
    b.set_int_value(1);
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
    assert_eq!(a, b);
}

#[test]
fn alternate_form_spans_lines() {
    let mut u = ComplexUnion::new();
    u.set_int_value(7);
    assert_snapshot!(format!("{u:#?}"), @r#"
    ComplexUnion {
        value: 7,
        id: 1,
        name: "intValue",
        type: "i64",
    }
    "#);
}

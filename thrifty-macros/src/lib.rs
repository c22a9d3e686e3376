#![doc = include_str!("../README.md")]

#[proc_macro_derive(ThriftUnion, attributes(thrift))]
pub fn thrift_union(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    thrifty_macros_emit::thrift_union_derive(input.into()).into()
}

#[proc_macro_derive(ThriftEnum, attributes(thrift))]
pub fn thrift_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    thrifty_macros_emit::thrift_enum_derive(input.into()).into()
}

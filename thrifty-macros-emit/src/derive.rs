use thrifty_macros_parse::*;
use quote::quote;

use crate::{process_enum, process_union};

/// Entry point for `#[derive(ThriftUnion)]`
pub fn thrift_union_derive(input: TokenStream) -> TokenStream {
    let mut i = input.to_token_iter();
    match i.parse::<Cons<Enum, EndOfStream>>() {
        Ok(it) => process_union::process_union(it.first),
        Err(_) => compile_error("ThriftUnion can only be derived for enums"),
    }
}

/// Entry point for `#[derive(ThriftEnum)]`
pub fn thrift_enum_derive(input: TokenStream) -> TokenStream {
    let mut i = input.to_token_iter();
    match i.parse::<Cons<Enum, EndOfStream>>() {
        Ok(it) => process_enum::process_enum(it.first),
        Err(_) => compile_error("ThriftEnum can only be derived for enums"),
    }
}

pub(crate) fn compile_error(msg: &str) -> TokenStream {
    quote! { ::core::compile_error!(#msg); }
}

/// Doc lines as a `&[..]` slice expression
pub(crate) fn doc_slice<'a>(attrs: impl Iterator<Item = &'a Attribute>) -> TokenStream {
    let lines = doc_lines(attrs);
    quote! { &[#(#lines),*] }
}

/// Prints a type the way it was written: `Vec < i64 >` becomes `Vec<i64>`.
pub(crate) fn type_display(tokens: &TokenStream) -> String {
    tokens
        .to_string()
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace("& ", "&")
}

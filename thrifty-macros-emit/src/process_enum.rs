use quote::quote;

use super::*;
use crate::derive::{compile_error, doc_slice};

struct EnumVariantDecl {
    variant: Ident,
    name: PName,
    value: i32,
    doc: TokenStream,
}

/// Processes a `#[repr(i32)]` enum with explicit discriminants
///
/// Example input:
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Eq, ThriftEnum)]
/// #[thrift(rename_all = "SCREAMING_SNAKE_CASE")]
/// #[repr(i32)]
/// enum Enum {
///     One = 1,
///     Two = 2,
///     Three = 3,
/// }
/// ```
pub(crate) fn process_enum(parsed: Enum) -> TokenStream {
    match process_enum_inner(&parsed) {
        Ok(tokens) => tokens,
        Err(msg) => compile_error(&msg),
    }
}

fn process_enum_inner(parsed: &Enum) -> Result<TokenStream, String> {
    let enum_name = parsed.name.to_string();

    // rustc checks the discriminants against the repr, so we only need to
    // know it is there
    let is_i32 = parsed
        .attrs()
        .flat_map(Attribute::repr_items)
        .any(|repr| repr == "i32");
    if !is_i32 {
        return Err(format!("`{enum_name}` needs #[repr(i32)]"));
    }

    let container_attrs = parse_thrift_attrs(parsed.attrs())?;
    let rule = container_rule(&container_attrs);
    if container_attrs.len() != usize::from(rule.is_some()) {
        return Err(format!(
            "`{enum_name}`: only `rename_all` is allowed on the enum itself"
        ));
    }

    let mut variants: Vec<EnumVariantDecl> = Vec::new();
    for variant in parsed.variants() {
        let variant_name = variant.name.to_string();
        if variant.payload.is_some() || variant.struct_body.is_some() {
            return Err(format!(
                "`{enum_name}::{variant_name}`: enum variants cannot carry a payload"
            ));
        }
        let Some(discriminant) = &variant.discriminant else {
            return Err(format!(
                "`{enum_name}::{variant_name}` needs an explicit value, e.g. `{variant_name} = 1`"
            ));
        };
        let value = discriminant_value(discriminant).ok_or_else(|| {
            format!("`{enum_name}::{variant_name}`: the value must be an i32 literal")
        })?;

        let attrs = parse_thrift_attrs(variant.attrs())?;
        if attrs
            .iter()
            .any(|attr| !matches!(attr, PThriftAttr::Rename(_)))
        {
            return Err(format!(
                "`{enum_name}::{variant_name}`: only `rename` is allowed on enum variants"
            ));
        }

        let name = PName::new(rule, rename_of(&attrs), variant_name);
        if let Some(other) = variants.iter().find(|v| v.name.effective == name.effective) {
            return Err(format!(
                "`{enum_name}`: `{}` and `{}` are both named \"{}\"",
                other.name.raw, name.raw, name.effective
            ));
        }

        variants.push(EnumVariantDecl {
            variant: variant.name.clone(),
            name,
            value,
            doc: doc_slice(variant.attrs()),
        });
    }

    if variants.is_empty() {
        return Err(format!("`{enum_name}` needs at least one variant"));
    }

    Ok(emit(parsed, &enum_name, &variants))
}

fn discriminant_value(discriminant: &Discriminant) -> Option<i32> {
    let magnitude = parse_int(&discriminant.value.to_string())?;
    let value = if discriminant.neg.is_some() {
        -magnitude
    } else {
        magnitude
    };
    i32::try_from(value).ok()
}

/// `-3` has to be emitted as two tokens to be usable as a pattern
fn value_tokens(value: i32) -> TokenStream {
    let magnitude = Literal::i64_unsuffixed(i64::from(value).abs());
    if value < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

fn emit(parsed: &Enum, enum_name: &str, variants: &[EnumVariantDecl]) -> TokenStream {
    let name = &parsed.name;
    let container_doc = doc_slice(parsed.attrs());

    let variant_shapes = variants.iter().map(|v| {
        let declared = &v.name.effective;
        let value = value_tokens(v.value);
        let doc = &v.doc;
        quote! {
            ::thrifty::EnumVariant::builder()
                .name(#declared)
                .value(#value)
                .doc(#doc)
                .build()
        }
    });

    let idents: Vec<&Ident> = variants.iter().map(|v| &v.variant).collect();
    let values: Vec<TokenStream> = variants.iter().map(|v| value_tokens(v.value)).collect();
    let declared: Vec<&str> = variants.iter().map(|v| v.name.effective.as_str()).collect();

    quote! {
        #[automatically_derived]
        impl ::thrifty::ThriftEnum for #name {
            const SHAPE: &'static ::thrifty::EnumShape = &const {
                ::thrifty::EnumShape::builder()
                    .name(#enum_name)
                    .variants(&const {[ #(#variant_shapes),* ]})
                    .doc(#container_doc)
                    .build()
            };

            const VARIANTS: &'static [Self] = &[ #(Self::#idents),* ];

            fn to_i32(self) -> i32 {
                self as i32
            }

            fn from_i32(value: i32) -> ::core::result::Result<Self, ::thrifty::UnknownEnumValue> {
                match value {
                    #(#values => ::core::result::Result::Ok(Self::#idents),)*
                    _ => ::core::result::Result::Err(::thrifty::UnknownEnumValue::new(
                        <Self as ::thrifty::ThriftEnum>::SHAPE,
                        value,
                    )),
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #declared,)*
                }
            }
        }

        #[automatically_derived]
        impl ::thrifty::ThriftType for #name {
            const TTYPE: ::thrifty::TType = ::thrifty::TType::I32;

            fn to_value(&self) -> ::thrifty::Value {
                ::thrifty::enum_to_value(self)
            }

            fn from_value(value: ::thrifty::Value) -> ::core::result::Result<Self, ::thrifty::ValueError> {
                ::thrifty::enum_from_value(value)
            }
        }

        #[automatically_derived]
        impl ::core::convert::TryFrom<i32> for #name {
            type Error = ::thrifty::UnknownEnumValue;

            fn try_from(value: i32) -> ::core::result::Result<Self, Self::Error> {
                <Self as ::thrifty::ThriftEnum>::from_i32(value)
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#name> for i32 {
            fn from(value: #name) -> i32 {
                <#name as ::thrifty::ThriftEnum>::to_i32(value)
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::thrifty::ThriftEnum>::name(*self))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(input: TokenStream) -> String {
        crate::thrift_enum_derive(input).to_string()
    }

    #[test]
    fn negative_values_become_two_tokens() {
        assert_eq!(value_tokens(3).to_string(), "3");
        assert_eq!(value_tokens(-3).to_string(), "- 3");
        assert_eq!(value_tokens(i32::MIN).to_string(), "- 2147483648");
    }

    #[test]
    fn emits_declared_names() {
        let out = derive(quote! {
            #[thrift(rename_all = "SCREAMING_SNAKE_CASE")]
            #[repr(i32)]
            pub enum Enum {
                One = 1,
                Two = 2,
                #[thrift(rename = "three")]
                Three = 3,
                NotFound = -1,
            }
        });
        assert!(!out.contains("compile_error"), "{out}");
        assert!(out.contains("Self :: One => \"ONE\""), "{out}");
        assert!(out.contains("Self :: NotFound => \"NOT_FOUND\""), "{out}");
        assert!(out.contains("Self :: Three => \"three\""), "{out}");
        assert!(out.contains("- 1 => :: core :: result :: Result :: Ok (Self :: NotFound)"), "{out}");
    }

    #[test]
    fn rejects_bad_declarations() {
        let cases = [
            (
                quote! { enum E { A = 1 } },
                "`E` needs #[repr(i32)]",
            ),
            (
                quote! { #[repr(u8)] enum E { A = 1 } },
                "`E` needs #[repr(i32)]",
            ),
            (
                quote! { #[repr(i32)] enum E { A = 1, B } },
                "`E::B` needs an explicit value, e.g. `B = 1`",
            ),
            (
                quote! { #[repr(i32)] enum E { A = 1, B(i32) = 2 } },
                "`E::B`: enum variants cannot carry a payload",
            ),
            (
                quote! { #[repr(i32)] enum E { #[thrift(rename = "X")] A = 1, #[thrift(rename = "X")] B = 2 } },
                "`E`: `A` and `B` are both named \\\"X\\\"",
            ),
            (
                quote! { #[repr(i32)] enum E { #[thrift(id = 1)] A = 1 } },
                "`E::A`: only `rename` is allowed on enum variants",
            ),
            (
                quote! { #[repr(i32)] enum E {} },
                "`E` needs at least one variant",
            ),
        ];

        for (input, expected) in cases {
            let out = derive(input);
            assert!(out.contains("compile_error"), "{out}");
            assert!(out.contains(expected), "expected {expected:?} in {out}");
        }
    }
}

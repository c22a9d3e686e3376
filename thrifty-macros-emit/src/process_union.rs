use quote::{format_ident, quote};

use super::*;
use crate::derive::{compile_error, doc_slice, type_display};

/// One declared field, after validation
struct UnionFieldDecl {
    variant: Ident,
    name: PName,
    id: i16,
    ty: TokenStream,
    doc: TokenStream,
}

/// Processes an annotated enum into a union
///
/// Example input:
/// ```ignore
/// #[derive(ThriftUnion)]
/// #[thrift(rename_all = "camelCase")]
/// enum ComplexUnion {
///     #[thrift(unset)]
///     Unset,
///     #[thrift(id = 1)]
///     IntValue(i64),
///     #[thrift(id = 5)]
///     StringValue(String),
/// }
/// ```
pub(crate) fn process_union(parsed: Enum) -> TokenStream {
    match process_union_inner(&parsed) {
        Ok(tokens) => tokens,
        Err(msg) => compile_error(&msg),
    }
}

fn process_union_inner(parsed: &Enum) -> Result<TokenStream, String> {
    let union_name = parsed.name.to_string();
    let container_attrs = parse_thrift_attrs(parsed.attrs())?;
    let rule = container_rule(&container_attrs);
    if container_attrs.len() != usize::from(rule.is_some()) {
        return Err(format!(
            "`{union_name}`: only `rename_all` is allowed on the union itself"
        ));
    }

    let mut unset: Option<Ident> = None;
    let mut fields: Vec<UnionFieldDecl> = Vec::new();

    for variant in parsed.variants() {
        let variant_name = variant.name.to_string();
        let attrs = parse_thrift_attrs(variant.attrs())?;
        if variant.struct_body.is_some() || variant.discriminant.is_some() {
            return Err(format!(
                "`{union_name}::{variant_name}`: union variants are either `Name(Type)` or the unit unset variant"
            ));
        }

        if attrs.contains(&PThriftAttr::Unset) {
            if variant.payload.is_some() {
                return Err(format!(
                    "`{union_name}::{variant_name}`: the unset variant cannot carry a payload"
                ));
            }
            if attrs.len() != 1 {
                return Err(format!(
                    "`{union_name}::{variant_name}`: the unset variant takes no other thrift attributes"
                ));
            }
            if let Some(previous) = &unset {
                return Err(format!(
                    "`{union_name}` has two unset variants: `{previous}` and `{variant_name}`"
                ));
            }
            unset = Some(variant.name.clone());
            continue;
        }

        let Some(payload) = variant.payload_tokens() else {
            return Err(format!(
                "`{union_name}::{variant_name}`: unit variants must be marked #[thrift(unset)]"
            ));
        };
        let ty = single_type(payload).ok_or_else(|| {
            format!("`{union_name}::{variant_name}`: a union field holds exactly one value")
        })?;

        let id = attrs
            .iter()
            .find_map(|attr| match attr {
                PThriftAttr::Id(id) => Some(*id),
                _ => None,
            })
            .ok_or_else(|| format!("`{union_name}::{variant_name}` needs #[thrift(id = N)]"))?;
        let id = i16::try_from(id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                format!(
                    "`{union_name}::{variant_name}`: id {id} is out of range, ids go from 1 to {}",
                    i16::MAX
                )
            })?;
        if attrs
            .iter()
            .any(|attr| matches!(attr, PThriftAttr::RenameAll(_)))
        {
            return Err(format!(
                "`{union_name}::{variant_name}`: `rename_all` belongs on the union itself"
            ));
        }

        let name = PName::new(rule, rename_of(&attrs), variant_name);
        if let Some(other) = fields.iter().find(|f| f.id == id) {
            return Err(format!(
                "`{union_name}`: id {id} is used by both `{}` and `{}`",
                other.name.raw, name.raw
            ));
        }
        if let Some(other) = fields.iter().find(|f| f.name.effective == name.effective) {
            return Err(format!(
                "`{union_name}`: `{}` and `{}` are both named \"{}\"",
                other.name.raw, name.raw, name.effective
            ));
        }

        fields.push(UnionFieldDecl {
            variant: variant.name.clone(),
            name,
            id,
            ty,
            doc: doc_slice(variant.attrs()),
        });
    }

    let Some(unset) = unset else {
        return Err(format!(
            "`{union_name}` needs one unit variant marked #[thrift(unset)]"
        ));
    };
    check_accessor_names(&union_name, &fields)?;

    Ok(emit(parsed, &union_name, &unset, &fields))
}

/// Every generated method name must be writable and distinct, both from
/// the `new` constructor and from the `ThriftUnion` methods it would shadow.
fn check_accessor_names(union_name: &str, fields: &[UnionFieldDecl]) -> Result<(), String> {
    const UNRAWABLE: &[&str] = &["crate", "self", "super", "_"];
    const TRAIT_METHODS: &[&str] = &[
        "is_unset",
        "active_id",
        "active_name",
        "active_field",
        "active_value",
        "set_by_id",
    ];

    let mut taken: Vec<(String, String)> = vec![("new".to_string(), "the constructor".to_string())];
    taken.extend(TRAIT_METHODS.iter().map(|m| {
        (m.to_string(), format!("`ThriftUnion::{m}`"))
    }));
    for f in fields {
        let stem = f.name.method_stem();
        let owner = format!("`{union_name}::{}`", f.name.raw);
        if UNRAWABLE.contains(&stem.as_str()) {
            return Err(format!(
                "{owner}: `{stem}` cannot be used as an accessor name, rename the variant"
            ));
        }
        let methods = [
            stem.clone(),
            format!("{stem}_mut"),
            format!("set_{stem}"),
            format!("into_{stem}"),
            format!("is_{stem}"),
        ];
        for method in methods {
            if let Some((_, other)) = taken.iter().find(|(name, _)| *name == method) {
                return Err(format!(
                    "{owner}: the accessor `{method}` clashes with {other}"
                ));
            }
            taken.push((method, owner.clone()));
        }
    }
    Ok(())
}

/// The payload type, if the variant holds exactly one (a trailing comma is fine)
fn single_type(payload: &TokenStream) -> Option<TokenStream> {
    let mut segments: Vec<Vec<TokenTree>> = vec![Vec::new()];
    let mut depth = 0usize;
    let mut prev_dash = false;
    for tt in payload.clone() {
        if let TokenTree::Punct(p) = &tt {
            match p.as_char() {
                '<' => depth += 1,
                // `->` in fn pointer types
                '>' if !prev_dash => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    segments.push(Vec::new());
                    prev_dash = false;
                    continue;
                }
                _ => {}
            }
            prev_dash = p.as_char() == '-';
        } else {
            prev_dash = false;
        }
        if let Some(last) = segments.last_mut() {
            last.push(tt);
        }
    }

    if segments.last().is_some_and(Vec::is_empty) {
        segments.pop();
    }
    match segments.as_slice() {
        [only] if !only.is_empty() => Some(only.iter().cloned().collect()),
        _ => None,
    }
}

/// Variant `r#Type` gets a getter named `r#type`
fn accessor_ident(stem: &str) -> Ident {
    const KEYWORDS: &[&str] = &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield",
    ];
    if KEYWORDS.contains(&stem) {
        format_ident!("r#{}", stem)
    } else {
        format_ident!("{}", stem)
    }
}

fn emit(parsed: &Enum, union_name: &str, unset: &Ident, fields: &[UnionFieldDecl]) -> TokenStream {
    let name = &parsed.name;
    let vis = parsed.vis_tokens();
    let container_doc = doc_slice(parsed.attrs());

    let field_shapes = fields.iter().map(|f| {
        let declared = &f.name.effective;
        let id = Literal::i16_unsuffixed(f.id);
        let ty = &f.ty;
        let variant = f.name.raw.trim_start_matches("r#").to_string();
        let type_name = type_display(ty);
        let doc = &f.doc;
        quote! {
            ::thrifty::UnionField::builder()
                .name(#declared)
                .id(#id)
                .ttype(<#ty as ::thrifty::ThriftType>::TTYPE)
                .variant(#variant)
                .type_name(#type_name)
                .doc(#doc)
                .build()
        }
    });

    let variants: Vec<&Ident> = fields.iter().map(|f| &f.variant).collect();
    let ids: Vec<Literal> = fields.iter().map(|f| Literal::i16_unsuffixed(f.id)).collect();
    let types: Vec<&TokenStream> = fields.iter().map(|f| &f.ty).collect();

    let accessors = fields.iter().map(|f| {
        let variant = &f.variant;
        let ty = &f.ty;
        let declared = &f.name.effective;
        let stem = f.name.method_stem();
        let getter = accessor_ident(&stem);
        let getter_mut = format_ident!("{}_mut", stem);
        let setter = format_ident!("set_{}", stem);
        let into = format_ident!("into_{}", stem);
        let is = format_ident!("is_{}", stem);

        let set_doc = format!("Makes `{declared}` the active field, dropping whatever was set before.");
        let get_doc = format!("Borrows `{declared}`, or fails if another field (or none) is active.");
        let is_doc = format!("Returns true if `{declared}` is the active field.");
        quote! {
            #[doc = #set_doc]
            #vis fn #setter(&mut self, value: #ty) {
                *self = Self::#variant(value);
            }

            #[doc = #get_doc]
            #vis fn #getter(&self) -> ::core::result::Result<&#ty, ::thrifty::InvalidUnionAccess> {
                match self {
                    Self::#variant(value) => ::core::result::Result::Ok(value),
                    other => ::core::result::Result::Err(::thrifty::InvalidUnionAccess::new(
                        <Self as ::thrifty::ThriftUnion>::SHAPE,
                        #declared,
                        ::thrifty::ThriftUnion::active_name(other),
                    )),
                }
            }

            #[doc = #get_doc]
            #vis fn #getter_mut(&mut self) -> ::core::result::Result<&mut #ty, ::thrifty::InvalidUnionAccess> {
                match self {
                    Self::#variant(value) => ::core::result::Result::Ok(value),
                    other => ::core::result::Result::Err(::thrifty::InvalidUnionAccess::new(
                        <Self as ::thrifty::ThriftUnion>::SHAPE,
                        #declared,
                        ::thrifty::ThriftUnion::active_name(&*other),
                    )),
                }
            }

            #[doc = #get_doc]
            #vis fn #into(self) -> ::core::result::Result<#ty, ::thrifty::InvalidUnionAccess> {
                match self {
                    Self::#variant(value) => ::core::result::Result::Ok(value),
                    other => ::core::result::Result::Err(::thrifty::InvalidUnionAccess::new(
                        <Self as ::thrifty::ThriftUnion>::SHAPE,
                        #declared,
                        ::thrifty::ThriftUnion::active_name(&other),
                    )),
                }
            }

            #[doc = #is_doc]
            #vis fn #is(&self) -> bool {
                ::core::matches!(self, Self::#variant(_))
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl ::thrifty::ThriftUnion for #name {
            const SHAPE: &'static ::thrifty::UnionShape = &const {
                ::thrifty::UnionShape::builder()
                    .name(#union_name)
                    .fields(&const {[ #(#field_shapes),* ]})
                    .doc(#container_doc)
                    .build()
            };

            fn unset() -> Self {
                Self::#unset
            }

            fn active_id(&self) -> ::thrifty::FieldId {
                match self {
                    Self::#unset => ::thrifty::UNSET_FIELD_ID,
                    #(Self::#variants(_) => #ids,)*
                }
            }

            fn active_value(&self) -> ::core::option::Option<::thrifty::Value> {
                match self {
                    Self::#unset => ::core::option::Option::None,
                    #(Self::#variants(value) => ::core::option::Option::Some(
                        ::thrifty::ThriftType::to_value(value)
                    ),)*
                }
            }

            fn set_by_id(
                &mut self,
                id: ::thrifty::FieldId,
                value: ::thrifty::Value,
            ) -> ::core::result::Result<(), ::thrifty::ValueError> {
                match id {
                    #(#ids => {
                        *self = Self::#variants(<#types as ::thrifty::ThriftType>::from_value(value)?);
                        ::core::result::Result::Ok(())
                    })*
                    _ => ::core::result::Result::Err(
                        ::thrifty::ValueError::unknown_field(<Self as ::thrifty::ThriftUnion>::SHAPE, id)
                    ),
                }
            }
        }

        #[automatically_derived]
        impl ::thrifty::ThriftType for #name {
            const TTYPE: ::thrifty::TType = ::thrifty::TType::Struct;

            fn to_value(&self) -> ::thrifty::Value {
                ::thrifty::union_to_value(self)
            }

            fn from_value(value: ::thrifty::Value) -> ::core::result::Result<Self, ::thrifty::ValueError> {
                ::thrifty::union_from_value(value)
            }
        }

        #[automatically_derived]
        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self::#unset
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let active = match self {
                    Self::#unset => ::core::option::Option::None,
                    #(Self::#variants(value) => ::core::option::Option::Some(::thrifty::ActiveField {
                        id: #ids,
                        value,
                        type_name: ::core::any::type_name_of_val(value),
                    }),)*
                };
                ::thrifty::debug_union(f, <Self as ::thrifty::ThriftUnion>::SHAPE, active)
            }
        }

        #[automatically_derived]
        #[allow(dead_code)]
        impl #name {
            /// Returns a union with no active field.
            #vis const fn new() -> Self {
                Self::#unset
            }

            #(#accessors)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(input: TokenStream) -> String {
        crate::thrift_union_derive(input).to_string()
    }

    #[test]
    fn single_type_splits_on_top_level_commas() {
        let ty = |ts: TokenStream| single_type(&ts).map(|t| type_display(&t));
        assert_eq!(ty(quote! { i64 }).as_deref(), Some("i64"));
        assert_eq!(
            ty(quote! { BTreeMap<i16, String> }).as_deref(),
            Some("BTreeMap<i16, String>")
        );
        assert_eq!(ty(quote! { Vec<i64>, }).as_deref(), Some("Vec<i64>"));
        assert_eq!(ty(quote! { i64, String }), None);
        assert_eq!(ty(quote! {}), None);
    }

    #[test]
    fn keyword_stems_become_raw_idents() {
        assert_eq!(accessor_ident("type").to_string(), "r#type");
        assert_eq!(accessor_ident("int_value").to_string(), "int_value");
    }

    #[test]
    fn emits_shape_and_accessors() {
        let out = derive(quote! {
            #[thrift(rename_all = "camelCase")]
            pub enum ComplexUnion {
                #[thrift(unset)]
                Unset,
                #[thrift(id = 1)]
                IntValue(i64),
                #[thrift(id = 9)]
                TypedefValue(BTreeMap<i16, String>),
            }
        });
        assert!(!out.contains("compile_error"), "{out}");
        assert!(out.contains(". name (\"intValue\")"), "{out}");
        assert!(out.contains(". type_name (\"BTreeMap<i16, String>\")"), "{out}");
        assert!(out.contains("pub fn set_int_value"), "{out}");
        assert!(out.contains("pub fn typedef_value_mut"), "{out}");
        assert!(out.contains("pub fn into_typedef_value"), "{out}");
        assert!(out.contains("pub fn is_int_value"), "{out}");
    }

    #[test]
    fn private_unions_get_private_accessors() {
        let out = derive(quote! {
            enum U {
                #[thrift(unset)]
                Nothing,
                #[thrift(id = 3)]
                Flag(bool),
            }
        });
        assert!(out.contains("fn is_flag"), "{out}");
        assert!(!out.contains("pub fn"), "{out}");
    }

    #[test]
    fn rejects_bad_declarations() {
        let cases = [
            (
                quote! { enum U { #[thrift(id = 1)] A(i32) } },
                "`U` needs one unit variant marked #[thrift(unset)]",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(unset)] B } },
                "`U` has two unset variants: `A` and `B`",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, B(i32) } },
                "`U::B` needs #[thrift(id = N)]",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 0)] B(i32) } },
                "`U::B`: id 0 is out of range, ids go from 1 to 32767",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 40000)] B(i32) } },
                "`U::B`: id 40000 is out of range, ids go from 1 to 32767",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 2)] B(i32), #[thrift(id = 2)] C(i64) } },
                "`U`: id 2 is used by both `B` and `C`",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1, rename = "x")] B(i32), #[thrift(id = 2, rename = "x")] C(i64) } },
                "`U`: `B` and `C` are both named \\\"x\\\"",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1)] B(i32, i32) } },
                "`U::B`: a union field holds exactly one value",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, C } },
                "`U::C`: unit variants must be marked #[thrift(unset)]",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1)] B { x: i32 } } },
                "`U::B`: union variants are either `Name(Type)` or the unit unset variant",
            ),
            (
                quote! { enum U { #[thrift(unset)] A(i32) } },
                "`U::A`: the unset variant cannot carry a payload",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1)] New(i32) } },
                "`U::New`: the accessor `new` clashes with the constructor",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1)] Crate(i32) } },
                "`U::Crate`: `crate` cannot be used as an accessor name, rename the variant",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1)] Foo(i32), #[thrift(id = 2)] FooMut(i32) } },
                "`U::FooMut`: the accessor `foo_mut` clashes with `U::Foo`",
            ),
            (
                quote! { enum U { #[thrift(unset)] A, #[thrift(id = 1)] Unset(i32) } },
                "`U::Unset`: the accessor `is_unset` clashes with `ThriftUnion::is_unset`",
            ),
        ];

        for (input, expected) in cases {
            let out = derive(input);
            assert!(out.contains("compile_error"), "{out}");
            assert!(out.contains(expected), "expected {expected:?} in {out}");
        }
    }
}

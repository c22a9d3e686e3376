use thrifty_macros_parse::{Attribute, Literal, ThriftInner, parse_int, unquote};

use crate::RenameRule;

/// A `#[thrift(..)]` item after parsing.
///
/// Stands for `parsed thrift attr`
#[derive(Debug, PartialEq, Eq)]
pub enum PThriftAttr {
    /// Valid on union field variants, gives the wire identifier
    /// `#[thrift(id = 5)]`
    Id(i64),

    /// Valid on exactly one unit variant of a union, the state before any
    /// field is set
    /// `#[thrift(unset)]`
    Unset,

    /// Valid on variants
    /// `#[thrift(rename = "stringRef")]`
    Rename(String),

    /// Valid on the container
    /// `#[thrift(rename_all = "camelCase")]`
    RenameAll(RenameRule),
}

/// Parses every `#[thrift(..)]` item in `attrs`. Anything malformed or
/// unknown becomes an error message for `compile_error!`.
pub fn parse_thrift_attrs<'a>(
    attrs: impl Iterator<Item = &'a Attribute>,
) -> Result<Vec<PThriftAttr>, String> {
    let mut result = Vec::new();
    for item in attrs.flat_map(Attribute::thrift_items) {
        let parsed = match item {
            ThriftInner::Id(id) => {
                let raw = id.value.to_string();
                let value =
                    parse_int(&raw).ok_or_else(|| format!("expected an integer id, got {raw}"))?;
                PThriftAttr::Id(value)
            }
            ThriftInner::Unset(_) => PThriftAttr::Unset,
            ThriftInner::Rename(rename) => PThriftAttr::Rename(string_value(&rename.value)?),
            ThriftInner::RenameAll(rename_all) => {
                let rule = string_value(&rename_all.value)?;
                let rule = RenameRule::parse(&rule)
                    .ok_or_else(|| format!("unrecognized rename_all rule {rule:?}"))?;
                PThriftAttr::RenameAll(rule)
            }
            ThriftInner::Other(other) => {
                let tokens = other
                    .tokens
                    .0
                    .iter()
                    .map(|d| d.value.second.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                return Err(format!("unknown thrift attribute `{tokens}`"));
            }
        };
        result.push(parsed);
    }
    Ok(result)
}

fn string_value(lit: &Literal) -> Result<String, String> {
    let raw = lit.to_string();
    match unquote(&raw) {
        Some(s) if !s.is_empty() => Ok(s),
        Some(_) => Err("names cannot be empty".to_string()),
        None => Err(format!("expected a string literal, got {raw}")),
    }
}

/// A name as written in Rust, and as declared for the wire.
///
/// Examples:
///
///   raw = "IntValue", no rename rule, effective = "IntValue"
///   raw = "IntValue", #[thrift(rename_all = "camelCase")], effective = "intValue"
///   raw = "StringRef", #[thrift(rename = "ref")], effective = "ref"
///   raw = "r#Type", no rename rule, effective = "Type"
pub struct PName {
    pub raw: String,
    pub effective: String,
}

impl PName {
    /// An explicit rename wins over the container rule, which wins over the
    /// raw name (minus any `r#` prefix).
    pub fn new(container_rule: Option<RenameRule>, rename: Option<&str>, raw: String) -> Self {
        let norm = raw.strip_prefix("r#").unwrap_or(&raw).to_string();
        let effective = match (rename, container_rule) {
            (Some(rename), _) => rename.to_string(),
            (None, Some(rule)) => rule.apply(&norm),
            (None, None) => norm,
        };
        Self { raw, effective }
    }

    /// Snake-case stem for accessor names: `IntValue` -> `int_value`
    pub fn method_stem(&self) -> String {
        let norm = self.raw.strip_prefix("r#").unwrap_or(&self.raw);
        RenameRule::SnakeCase.apply(norm)
    }
}

/// The container-level rename rule, if any
pub fn container_rule(attrs: &[PThriftAttr]) -> Option<RenameRule> {
    attrs.iter().find_map(|attr| match attr {
        PThriftAttr::RenameAll(rule) => Some(*rule),
        _ => None,
    })
}

/// The variant-level rename, if any
pub fn rename_of(attrs: &[PThriftAttr]) -> Option<&str> {
    attrs.iter().find_map(|attr| match attr {
        PThriftAttr::Rename(name) => Some(name.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use thrifty_macros_parse::*;

    fn enum_attrs(input: TokenStream) -> Result<Vec<PThriftAttr>, String> {
        let mut it = input.to_token_iter();
        let parsed = it.parse::<Enum>().expect("should parse");
        parse_thrift_attrs(parsed.attrs())
    }

    #[test]
    fn parses_rename_all() {
        let attrs = enum_attrs(quote! {
            #[thrift(rename_all = "SCREAMING_SNAKE_CASE")]
            enum E { A = 1 }
        });
        assert_eq!(
            attrs,
            Ok(vec![PThriftAttr::RenameAll(RenameRule::ScreamingSnakeCase)])
        );
    }

    #[test]
    fn rejects_unknown_items() {
        let attrs = enum_attrs(quote! {
            #[thrift(frobnicate)]
            enum E { A = 1 }
        });
        assert_eq!(attrs, Err("unknown thrift attribute `frobnicate`".to_string()));
    }

    #[test]
    fn rejects_bad_rule() {
        let attrs = enum_attrs(quote! {
            #[thrift(rename_all = "lowercase")]
            enum E { A = 1 }
        });
        assert_eq!(attrs, Err("unrecognized rename_all rule \"lowercase\"".to_string()));
    }

    #[test]
    fn pname_precedence() {
        let p = PName::new(Some(RenameRule::CamelCase), None, "IntValue".to_string());
        assert_eq!(p.effective, "intValue");
        assert_eq!(p.method_stem(), "int_value");

        let p = PName::new(Some(RenameRule::CamelCase), Some("ref"), "StringRef".to_string());
        assert_eq!(p.effective, "ref");
        assert_eq!(p.method_stem(), "string_ref");

        let p = PName::new(None, None, "r#Type".to_string());
        assert_eq!(p.raw, "r#Type");
        assert_eq!(p.effective, "Type");
    }
}

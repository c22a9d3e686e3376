#![doc = include_str!("../README.md")]

pub use unsynn::*;

keyword! {
    /// The "pub" keyword.
    pub KPub = "pub";
    /// The "enum" keyword.
    pub KEnum = "enum";
    /// The "thrift" attribute namespace.
    pub KThrift = "thrift";
    /// The "doc" attribute.
    pub KDoc = "doc";
    /// The "repr" attribute.
    pub KRepr = "repr";
    /// `#[thrift(id = N)]`
    pub KId = "id";
    /// `#[thrift(unset)]`
    pub KUnset = "unset";
    /// `#[thrift(rename = "..")]`
    pub KRename = "rename";
    /// `#[thrift(rename_all = "..")]`
    pub KRenameAll = "rename_all";
}

unsynn! {
    /// `pub` or `pub(..)`
    pub enum Vis {
        /// `pub(crate)`, `pub(super)`, `pub(in some::path)`
        PubIn(Cons<KPub, ParenthesisGroup>),
        /// `pub`
        Pub(KPub),
    }

    /// An outer attribute, `#[..]`. Doc comments arrive as `#[doc = ".."]`.
    pub struct Attribute {
        /// The `#`
        pub _pound: PunctAny<'#'>,
        /// Everything inside the brackets
        pub body: BracketGroupContaining<AttributeInner>,
    }

    /// The attributes we care about, and everything else
    pub enum AttributeInner {
        /// `thrift(..)`
        Thrift(ThriftAttr),
        /// `doc = ".."`
        Doc(DocInner),
        /// `repr(..)`
        Repr(ReprInner),
        /// `derive(..)`, `default`, `allow(..)`: passed through untouched
        Any(TokenStream),
    }

    /// `thrift(id = 1, rename = "intValue")`
    pub struct ThriftAttr {
        /// The `thrift` namespace
        pub _thrift: KThrift,
        /// The comma-separated items
        pub inner: ParenthesisGroupContaining<CommaDelimitedVec<ThriftInner>>,
    }

    /// `doc = " some text"`
    pub struct DocInner {
        /// The `doc` keyword
        pub _kw_doc: KDoc,
        /// The `=`
        pub _eq: PunctAny<'='>,
        /// The string literal, quotes and all
        pub value: Literal,
    }

    /// `repr(i32)`
    pub struct ReprInner {
        /// The `repr` keyword
        pub _kw_repr: KRepr,
        /// `C`, `i32`, `u8`, ...
        pub attr: ParenthesisGroupContaining<CommaDelimitedVec<Ident>>,
    }

    /// One item of a `#[thrift(..)]` attribute
    pub enum ThriftInner {
        /// `id = 5`
        Id(IdInner),
        /// `unset`
        Unset(KUnset),
        /// `rename_all = "camelCase"`
        RenameAll(RenameAllInner),
        /// `rename = "stringRef"`
        Rename(RenameInner),
        /// Anything else; rejected by the emitter
        Other(OtherInner),
    }

    /// `id = 5`
    pub struct IdInner {
        /// The `id` keyword
        pub _kw_id: KId,
        /// The `=`
        pub _eq: PunctAny<'='>,
        /// The integer literal
        pub value: Literal,
    }

    /// `rename = "stringRef"`
    pub struct RenameInner {
        /// The `rename` keyword
        pub _kw_rename: KRename,
        /// The `=`
        pub _eq: PunctAny<'='>,
        /// The string literal
        pub value: Literal,
    }

    /// `rename_all = "camelCase"`
    pub struct RenameAllInner {
        /// The `rename_all` keyword
        pub _kw_rename_all: KRenameAll,
        /// The `=`
        pub _eq: PunctAny<'='>,
        /// The string literal
        pub value: Literal,
    }

    /// Tokens up to the next comma
    pub struct OtherInner {
        /// The tokens
        pub tokens: Many<Cons<Except<Comma>, TokenTree>>,
    }

    /// An enum declaration, the only input both derives accept
    pub struct Enum {
        /// Outer attributes, including doc comments
        pub attributes: Any<Attribute>,
        /// Visibility, reused for the generated accessors
        pub vis: Option<Vis>,
        /// The `enum` keyword
        pub _kw_enum: KEnum,
        /// Type name
        pub name: Ident,
        /// The variants
        pub body: BraceGroupContaining<CommaDelimitedVec<EnumVariant>>,
    }

    /// A variant, in any of the shapes Rust allows. The emitters reject the
    /// shapes they don't support.
    pub struct EnumVariant {
        /// Attributes, including doc comments
        pub attributes: Any<Attribute>,
        /// Variant name
        pub name: Ident,
        /// `(T)` for tuple variants: the payload type, unparsed
        pub payload: Option<ParenthesisGroupContaining<TokenStream>>,
        /// `{ .. }` for struct variants
        pub struct_body: Option<BraceGroup>,
        /// `= 3` or `= -1`
        pub discriminant: Option<Discriminant>,
    }

    /// An explicit discriminant
    pub struct Discriminant {
        /// The `=`
        pub _eq: PunctAny<'='>,
        /// A leading `-`
        pub neg: Option<PunctAny<'-'>>,
        /// The integer literal
        pub value: Literal,
    }
}

impl Enum {
    /// Iterates over the attributes of the enum itself
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.0.iter().map(|d| &d.value)
    }

    /// Iterates over the variants, in declaration order
    pub fn variants(&self) -> impl Iterator<Item = &EnumVariant> {
        self.body.content.0.iter().map(|d| &d.value)
    }

    /// The visibility as written, empty for private enums
    pub fn vis_tokens(&self) -> TokenStream {
        match &self.vis {
            Some(vis) => vis.to_token_stream(),
            None => TokenStream::new(),
        }
    }
}

impl EnumVariant {
    /// Iterates over the attributes of this variant
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.0.iter().map(|d| &d.value)
    }

    /// The payload type tokens, if this is a tuple variant
    pub fn payload_tokens(&self) -> Option<&TokenStream> {
        self.payload.as_ref().map(|group| &group.content)
    }
}

impl Attribute {
    /// The items of a `#[thrift(..)]` attribute; empty for any other attribute
    pub fn thrift_items(&self) -> impl Iterator<Item = &ThriftInner> {
        let items: &[Delimited<ThriftInner, Comma>] = match &self.body.content {
            AttributeInner::Thrift(thrift) => &thrift.inner.content.0,
            _ => &[],
        };
        items.iter().map(|d| &d.value)
    }

    /// The idents of a `#[repr(..)]` attribute; empty for any other attribute
    pub fn repr_items(&self) -> impl Iterator<Item = &Ident> {
        let items: &[Delimited<Ident, Comma>] = match &self.body.content {
            AttributeInner::Repr(repr) => &repr.attr.content.0,
            _ => &[],
        };
        items.iter().map(|d| &d.value)
    }
}

/// Collects doc comment lines, unquoted. They tend to start with a space.
pub fn doc_lines<'a>(attrs: impl Iterator<Item = &'a Attribute>) -> Vec<String> {
    attrs
        .filter_map(|attr| match &attr.body.content {
            AttributeInner::Doc(doc) => unquote(&doc.value.to_string()),
            _ => None,
        })
        .collect()
}

/// Strips the quotes off a string literal as it prints from a token stream,
/// handling raw strings (`r#".."#`) and the common escapes.
pub fn unquote(literal: &str) -> Option<String> {
    if let Some(after_r) = literal.strip_prefix('r') {
        let hashes = after_r.chars().take_while(|&c| c == '#').count();
        let inner = after_r.get(hashes..after_r.len().checked_sub(hashes)?)?;
        return inner
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .map(str::to_string);
    }

    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            other => out.push(other),
        }
    }
    Some(out)
}

/// Parses an integer literal as printed from a token stream: `5`, `0x1F`,
/// `1_000`, `7i16`.
pub fn parse_int(literal: &str) -> Option<i64> {
    let digits: String = literal.chars().filter(|&c| c != '_').collect();
    let (digits, radix) = match digits.strip_prefix("0x") {
        Some(hex) => (hex.to_string(), 16),
        None => (digits, 10),
    };
    const SUFFIXES: [&str; 10] = [
        "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
    ];
    let digits = SUFFIXES
        .iter()
        .find_map(|suffix| digits.strip_suffix(suffix))
        .unwrap_or(&digits);
    i64::from_str_radix(digits, radix).ok()
}

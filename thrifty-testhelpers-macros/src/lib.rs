use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    /// `#[attrs] pub async fn name() { body }`, split around the pieces we rewrite.
    struct TestFn {
        head: Any<Cons<Except<KFn>, TokenTree>>,
        _fn: KFn,
        name: Ident,
        params: ParenthesisGroup,
        body: BraceGroup,
    }
}

/// Turns a test body into a function returning `eyre::Result<()>`, so `?`
/// works in tests, and runs `thrifty_testhelpers::setup()` first.
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut it = item.to_token_iter();
    let parsed = match it.parse::<Cons<TestFn, EndOfStream>>() {
        Ok(parsed) => parsed.first,
        Err(err) => {
            let msg = format!("#[thrifty_testhelpers::test] expects a plain fn item: {err}");
            return quote::quote! { compile_error!(#msg); }.into();
        }
    };

    let head = parsed.head.to_token_stream();
    let name = parsed.name;
    let params = parsed.params.to_token_stream();
    let body = parsed.body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #head fn #name #params -> ::thrifty_testhelpers::eyre::Result<()> {
            ::thrifty_testhelpers::setup();

            #body

            Ok(())
        }
    }
    .into()
}

use proc_macro::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::spanned::Spanned;

/// Turns `async fn name(checker: ContractChecker) -> Result<(), Error>` into a `#[test]` that
/// runs inside a `qa_harness::TestSession`.
#[proc_macro_attribute]
pub fn contract_test(attrs: TokenStream, item: TokenStream) -> TokenStream {
    checker_test(attrs, item, quote! { qa_harness::TestSession::run_contract })
}

/// Turns `async fn name(browser: BrowserSession) -> Result<(), Error>` into a `#[test]` that
/// owns one browser session and always quits it.
#[proc_macro_attribute]
pub fn browser_test(attrs: TokenStream, item: TokenStream) -> TokenStream {
    checker_test(attrs, item, quote! { qa_harness::TestSession::run_browser })
}

fn checker_test(
    attrs: TokenStream,
    item: TokenStream,
    runner: proc_macro2::TokenStream,
) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    let args = syn::parse_macro_input!(attrs as syn::AttributeArgs);

    if args.len() != 1 {
        return quote! {
            compile_error!("A configuration function should be passed to the macro");
        }
        .into();
    }

    let configuration_function;
    if let syn::NestedMeta::Meta(syn::Meta::Path(function_path)) = &args[0] {
        configuration_function = function_path;
    } else {
        return quote! {
            compile_error!("The argument should be a configuration function!");
        }
        .into();
    }

    if let Err(stream) = validate_signature(&input.sig) {
        return stream.into();
    }

    let attributes = &input.attrs;
    let visibility = &input.vis;
    let name = &input.sig.ident;
    let block = &input.block;

    let mut body_signature = input.sig.clone();
    body_signature.ident = format_ident!("__checker_body");

    let output = quote! {
        #[test]
        #(#attributes)*
        #visibility fn #name() {
            #body_signature #block

            #runner(#configuration_function, __checker_body);
        }
    };

    TokenStream::from(output)
}

fn validate_signature(signature: &syn::Signature) -> Result<(), proc_macro2::TokenStream> {
    if signature.asyncness.is_none() {
        return Err(quote_spanned! {signature.fn_token.span()=>
            compile_error!("The test function should be async!");
        });
    }

    if signature.inputs.len() != 1 {
        return Err(quote_spanned! {signature.inputs.span()=>
            compile_error!("The test function should take exactly one session argument!");
        });
    }

    if let Some(syn::FnArg::Receiver(receiver)) = signature.inputs.first() {
        return Err(quote_spanned! {receiver.span()=>
            compile_error!("The test function can't take self!");
        });
    }

    Ok(())
}

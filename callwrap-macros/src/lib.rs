// callwrap-macros/src/lib.rs
extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Error, Expr, ExprLit, ItemFn, Lit, Meta, Path, Token, parse::Parse,
    punctuated::Punctuated, spanned::Spanned,
};

// A single decorator with optional leading arguments
struct DecoratorCall {
    path: Path,
    args: Option<Punctuated<Expr, Token![,]>>,
}

impl Parse for DecoratorCall {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let path = input.parse()?;
        let args = if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            Some(Punctuated::parse_terminated(&content)?)
        } else {
            None
        };
        Ok(DecoratorCall { path, args })
    }
}

// Comma-separated decorators
struct DecoratorList {
    decorators: Punctuated<DecoratorCall, Token![,]>,
}

impl Parse for DecoratorList {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        Ok(DecoratorList {
            decorators: Punctuated::parse_terminated(input)?,
        })
    }
}

fn create_error(span: proc_macro2::Span, message: &str, help: Option<&str>) -> Error {
    let mut err = Error::new(span, message);
    if let Some(help_msg) = help {
        err.combine(Error::new(span, help_msg));
    }
    err
}

// Joins `///` lines into one doc string, or None when the fn has no docs.
fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    let joined = lines.join("\n").trim().to_string();
    if joined.is_empty() { None } else { Some(joined) }
}

/// Runs one or more decorator functions around a function body.
///
/// Each decorator is called as `decorator(args.., &identity, || body)` where
/// `identity` is a `callwrap::Identity` carrying the function's name, its
/// `module_path!()` and its doc comment. Decorators listed first run
/// outermost: their pre-logic runs first and their post-logic runs last.
///
/// # Examples
///
/// ```rust,ignore
/// use callwrap::{Identity, decorate, timed};
///
/// fn audit<F, R>(tag: &str, target: &Identity, f: F) -> R
/// where
///     F: FnOnce() -> R,
/// {
///     println!("{tag}: entering {}", target.name());
///     f()
/// }
///
/// /// Adds two numbers.
/// #[decorate(audit("math"), timed)]
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
/// ```
///
/// Methods work too; `self` is captured by the closure:
///
/// ```rust,ignore
/// impl Counter {
///     #[decorate(timed)]
///     pub fn increment(&mut self) -> i32 {
///         self.value += 1;
///         self.value
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn decorate(attr: TokenStream, item: TokenStream) -> TokenStream {
    let decorator_list = match syn::parse::<DecoratorList>(attr) {
        Ok(list) if list.decorators.is_empty() => {
            return TokenStream::from(
                create_error(
                    proc_macro2::Span::call_site(),
                    "No decorator paths provided",
                    Some("Expected at least one decorator function"),
                )
                .to_compile_error(),
            );
        }
        Ok(list) => list,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    let input_fn = match syn::parse::<ItemFn>(item) {
        Ok(f) => f,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    if input_fn.sig.constness.is_some() {
        return TokenStream::from(
            create_error(
                input_fn.sig.constness.span(),
                "Cannot decorate const functions",
                Some("The decorate attribute cannot be used with const functions"),
            )
            .to_compile_error(),
        );
    }

    let attrs = &input_fn.attrs;
    let vis = &input_fn.vis;
    let sig = &input_fn.sig;
    let body = &input_fn.block;

    let name = sig.ident.to_string();
    let doc = match doc_text(attrs) {
        Some(text) => quote!(::core::option::Option::Some(#text)),
        None => quote!(::core::option::Option::None),
    };

    // Innermost decorator wraps the body first
    let mut decorated_body = quote! { #body };
    for decorator in decorator_list.decorators.iter().rev() {
        let path = &decorator.path;
        decorated_body = match &decorator.args {
            Some(args) if !args.is_empty() => quote! {
                #path(#args, &__CALLWRAP_IDENTITY, || #decorated_body)
            },
            _ => quote! {
                #path(&__CALLWRAP_IDENTITY, || #decorated_body)
            },
        };
    }

    let output = quote! {
        #(#attrs)*
        #vis #sig {
            const __CALLWRAP_IDENTITY: ::callwrap::Identity =
                ::callwrap::Identity::from_static(#name, ::core::module_path!(), #doc);
            #decorated_body
        }
    };

    output.into()
}

use crate::macros::error::derived_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, Item, Lit, LitBool, LitStr, Meta, MetaNameValue, Token};

#[derive(Default)]
struct RecordArgs {
    collection: Option<LitStr>,
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<LitBool>,
}

/// Serde container attributes already written on the item.
#[derive(Default)]
struct SerdeContainer {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
    transparent: bool,
}

pub fn expand_record(args: TokenStream, item: Item) -> TokenStream {
    match try_expand(args, &item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(args: TokenStream, item: &Item) -> syn::Result<TokenStream> {
    let (attrs, ident, generics) = match item {
        Item::Struct(s) => (&s.attrs, &s.ident, &s.generics),
        Item::Enum(e) => (&e.attrs, &e.ident, &e.generics),
        other => {
            return Err(syn::Error::new_spanned(other, "record can only be applied to structs or enums"));
        },
    };

    let args = parse_args(args)?;
    let serde = serde_container(attrs)?;
    let is_enum = matches!(item, Item::Enum(_));

    let derives = record_derives(attrs);
    let rename = if serde.transparent || is_enum {
        TokenStream::new()
    } else {
        rename_attr(args.rename_all, &serde)?
    };
    let deny = deny_attr(args.deny_unknown_fields.as_ref(), &serde)?;

    let collection = args.collection.map(|name| {
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                /// Name of the document collection holding this record.
                pub const COLLECTION: &'static str = #name;
            }
        }
    });

    Ok(quote! {
        #derives
        #rename
        #deny
        #item

        #collection
    })
}

fn parse_args(args: TokenStream) -> syn::Result<RecordArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = RecordArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value arguments like `collection = \"Products\"`",
            ));
        };

        if nv.path.is_ident("collection") {
            store_once(&mut parsed.collection, string_lit(&nv)?, &nv)?;
        } else if nv.path.is_ident("rename_all") {
            store_once(&mut parsed.rename_all, string_lit(&nv)?, &nv)?;
        } else if nv.path.is_ident("deny_unknown_fields") {
            store_once(&mut parsed.deny_unknown_fields, bool_lit(&nv)?, &nv)?;
        } else {
            return Err(syn::Error::new_spanned(
                nv.path,
                "unsupported argument; expected collection, rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn store_once<T>(slot: &mut Option<T>, value: T, nv: &MetaNameValue) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(nv, "duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn string_lit(nv: &MetaNameValue) -> syn::Result<LitStr> {
    match &nv.value {
        Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}

fn bool_lit(nv: &MetaNameValue) -> syn::Result<LitBool> {
    match &nv.value {
        Expr::Lit(ExprLit { lit: Lit::Bool(lit), .. }) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a boolean literal")),
    }
}

fn serde_container(attrs: &[Attribute]) -> syn::Result<SerdeContainer> {
    let mut container = SerdeContainer::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                container.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                container.deny_unknown_fields = true;
            } else if meta.path.is_ident("transparent") {
                container.transparent = true;
            } else if meta.input.peek(Token![=]) {
                // Other container keys (tag, default, ...) are left to serde.
                let _: Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(container)
}

fn record_derives(attrs: &[Attribute]) -> TokenStream {
    let present = derived_names(attrs);
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];

    let missing: Vec<_> =
        wanted.into_iter().filter(|(name, _)| !present.contains(*name)).map(|(_, t)| t).collect();

    if missing.is_empty() { TokenStream::new() } else { quote! { #[derive(#(#missing),*)] } }
}

fn rename_attr(requested: Option<LitStr>, serde: &SerdeContainer) -> syn::Result<TokenStream> {
    let wanted = requested.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));

    match &serde.rename_all {
        Some(existing) if existing.value() != wanted.value() => Err(syn::Error::new_spanned(
            existing,
            "conflicting serde rename_all; drop it or pass record(rename_all = \"...\")",
        )),
        Some(_) => Ok(TokenStream::new()),
        None => Ok(quote! { #[serde(rename_all = #wanted)] }),
    }
}

fn deny_attr(requested: Option<&LitBool>, serde: &SerdeContainer) -> syn::Result<TokenStream> {
    let deny = requested.is_some_and(LitBool::value);
    if serde.deny_unknown_fields || !deny {
        return Ok(TokenStream::new());
    }
    Ok(quote! { #[serde(deny_unknown_fields)] })
}

#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//! They remove the boilerplate around error enums and serialized document records.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! allergo-derive = { path = "../infra/derive" }
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! the UI tests under `tests/ui` compile them for real.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, Item, parse_macro_input};

/// Turns an enum into a workspace error type.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, ThisError>` and to results of every wrapped source error.
/// * **Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. A variant with a source must also have `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use allergo_derive::allergo_error;
/// use std::borrow::Cow;
///
/// #[allergo_error]
/// pub enum ImportError {
///     #[error("Malformed document{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal import error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, ImportError> {
///     serde_json::from_str(raw).context("Parsing product list")
/// }
/// ```
#[proc_macro_attribute]
pub fn allergo_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}

/// Declares a serialized record exchanged between client, server and document store.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `Serialize` and `Deserialize` when missing.
/// * **Serde Policy** (structs only): `rename_all = "camelCase"` unless overridden.
///   Unknown fields are tolerated unless `deny_unknown_fields = true`.
/// * **Collection**: `collection = "Products"` adds an inherent `COLLECTION` constant.
///
/// # Example
///
/// ```rust,ignore
/// use allergo_derive::record;
///
/// #[record(collection = "Tokens")]
/// pub struct Token {
///     #[serde(rename = "_id")]
///     pub id: String,
///     pub expiry_date: i64,
/// }
///
/// assert_eq!(Token::COLLECTION, "Tokens");
/// ```
#[proc_macro_attribute]
pub fn record(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as Item);
    macros::record::expand_record(args.into(), input).into()
}

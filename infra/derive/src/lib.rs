//! # Macros
//!
//! Procedural macros shared by the `StateHub` crates.
//!
//! At the moment this is a single attribute, [`macro@shub_error`], which keeps the
//! error enums of every crate shaped the same way: named fields, an optional
//! `context`, and `?`-friendly conversions from upstream errors.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless the enum already derives them.
/// * A `<Name>Ext<T>` trait with `.context(..)`, implemented for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]` / `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// * Variants use named fields. Tuple and unit variants are rejected.
/// * A `context` field, when present, is `Option<Cow<'static, str>>`.
/// * Variants wrapping a source must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use shub_derive::shub_error;
/// use std::borrow::Cow;
///
/// #[shub_error]
/// pub enum LoadError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Load failed{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &str) -> Result<String, LoadError> {
///     let raw = std::fs::read_to_string(path).context("Reading channel seed file")?;
///     if raw.is_empty() {
///         return Err("empty seed file".into());
///     }
///     Ok(raw)
/// }
/// ```
#[proc_macro_attribute]
pub fn shub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

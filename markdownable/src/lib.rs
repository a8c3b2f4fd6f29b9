//! Markdown summaries of structured data.
//!
//! This crate encodes values as Markdown bullet lists, the format used to post
//! human-readable summaries of structured data to chat channels:
//!
//! ```text
//! - **Name**: Alice
//! - **Token**: ******1234
//! - **Owner**: 
//! 	- **Team**: payments
//! ```
//!
//! What this crate does:
//! - walks a value recursively (records, options, pointers, strings, scalars)
//! - honours per-field `#[markdown(omit)]` and `#[markdown(obfuscate)]`
//!   annotations declared with `#[derive(Markdown)]`
//! - lets a type take over its own output through [`MarshalMarkdown`]
//! - provides logging adapters behind feature flags (`tracing`, `slog`)
//!
//! What it does not do:
//! - deliver the text anywhere
//! - parse Markdown back into values
//!
//! The `Markdown` and `CustomMarkdown` derive macros live in
//! `markdownable-derive` and are re-exported from this crate.
//!
//! # Rejected forms
//!
//! A field takes at most one of `omit` and `obfuscate`:
//!
//! ```compile_fail
//! use markdownable::Markdown;
//!
//! #[derive(Markdown)]
//! struct Token {
//!     #[markdown(omit, obfuscate)]
//!     pub value: String,
//! }
//! ```
//!
//! Unknown keys are errors rather than being ignored:
//!
//! ```compile_fail
//! use markdownable::Markdown;
//!
//! #[derive(Markdown)]
//! struct Token {
//!     #[markdown(hide)]
//!     pub value: String,
//! }
//! ```
//!
//! Unions cannot be encoded:
//!
//! ```compile_fail
//! use markdownable::Markdown;
//!
//! #[derive(Markdown)]
//! union Bits {
//!     pub int: u32,
//!     pub float: f32,
//! }
//! ```
//!
//! Every exported field must itself be encodable:
//!
//! ```compile_fail
//! use markdownable::Markdown;
//!
//! struct Opaque;
//!
//! #[derive(Markdown)]
//! struct Holder {
//!     pub inner: Opaque,
//! }
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use markdownable_derive::{CustomMarkdown, Markdown};

#[allow(unused_extern_crates)]
extern crate self as markdownable;

// Module declarations
mod encoder;
mod error;
mod impls;
#[cfg(feature = "json")]
mod json;
pub mod mask;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from encoder module
pub use encoder::{
    Context, FieldAnnotation, MarkdownEncode, MarshalMarkdown, RecordEncoder, ToMarkdown,
    to_string, to_vec,
};
// Re-exports from error module
pub use error::{BoxError, ENCODING_FAILED_PLACEHOLDER, Error, Result};
// Re-exports from mask module
pub use mask::{MASK_CHAR, MaskConfig, VISIBLE_SUFFIX, obfuscate};

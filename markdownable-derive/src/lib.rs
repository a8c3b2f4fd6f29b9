//! Derive macros for `markdownable`.
//!
//! This crate generates the traversal code behind `#[derive(Markdown)]` and
//! `#[derive(CustomMarkdown)]`. It:
//! - reads `#[markdown(...)]` field and variant attributes
//! - emits `MarkdownEncode` implementations that build records line by line
//!
//! It does **not** implement any formatting itself. Masking, indentation and
//! the fallback encodings live in the main `markdownable` crate.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, parse_quote};

mod annotation;
mod derive_enum;
mod derive_struct;
mod fields;
mod generics;
mod transform;
use annotation::reject_container_attrs;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{EncodeBounds, add_encode_bounds};
use transform::context_ident;

/// Derives `markdownable::MarkdownEncode` for structs and enums.
///
/// A struct encodes as a record: one `- **Name**: value` line per exported
/// field, in declaration order. Only plain `pub` fields are exported;
/// `PhantomData` markers never produce a line. Tuple struct fields are named
/// by their index.
///
/// # Field Attributes
///
/// - **No annotation**: the field is encoded and shown.
/// - `#[markdown(omit)]`: the field is still encoded, so its errors surface,
///   but its line is dropped.
/// - `#[markdown(obfuscate)]`: every textual value at or below the field is
///   masked, keeping the last four characters.
/// - `#[markdown(rename = "...")]`: display name for the line. Combines with
///   either annotation.
///
/// # Enums
///
/// Unit variants encode as their name (overridable with
/// `#[markdown(rename = "...")]`). Variants with fields encode as a record of
/// all their fields; variant fields share the enum's visibility.
///
/// Generic parameters used by encoded fields get a `MarkdownEncode` bound.
/// Unions and `#[markdown(...)]` on the type itself are rejected at compile
/// time.
#[proc_macro_derive(Markdown, attributes(markdown))]
pub fn derive_markdown(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Derives `markdownable::MarkdownEncode` by delegating to the type's own
/// `markdownable::MarshalMarkdown` implementation.
///
/// The custom encoder takes precedence over everything else: the type's
/// fields are never visited, `#[markdown(...)]` attributes on them are ignored
/// and its output is used verbatim. Errors it returns propagate to the caller
/// unchanged.
#[proc_macro_derive(CustomMarkdown, attributes(markdown))]
pub fn derive_custom_markdown(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_custom(input).into()
}

/// Returns the token stream to reference the markdownable crate root.
///
/// Handles crate renaming (e.g., `md = { package = "markdownable", ... }`).
/// Inside the markdownable package itself (its tests and doctests) the
/// `extern crate self as markdownable` alias makes `::markdownable` resolve.
fn crate_root() -> TokenStream {
    match crate_name("markdownable") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::markdownable },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    body: TokenStream,
    bounds: EncodeBounds,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let output = match &data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "`Markdown` cannot be derived for unions",
            ));
        }
    };

    let root = crate_root();
    let encode_path = crate_path("MarkdownEncode");
    let bounded = add_encode_bounds(generics, &output.bounds);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let body = output.body;
    let ctx = context_ident();

    Ok(quote! {
        impl #impl_generics #encode_path for #ident #ty_generics #where_clause {
            fn encode_with(
                &self,
                #ctx: #root::Context,
            ) -> #root::Result<::std::string::String> {
                #body
            }
        }
    })
}

fn expand_custom(input: DeriveInput) -> TokenStream {
    let DeriveInput {
        ident, generics, ..
    } = input;

    let root = crate_root();
    let encode_path = crate_path("MarkdownEncode");
    let marshal_path = crate_path("MarshalMarkdown");
    let mut generics = generics;
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: #marshal_path));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #encode_path for #ident #ty_generics #where_clause {
            fn encode_with(
                &self,
                _ctx: #root::Context,
            ) -> #root::Result<::std::string::String> {
                #marshal_path::marshal_markdown(self)
            }
        }
    }
}

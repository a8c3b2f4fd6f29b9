//! Enum-specific `MarkdownEncode` derivation.
//!
//! Unit variants encode as their name through the textual path, so an
//! obfuscated field holding a unit variant is masked like any string.
//! Variants with fields encode as records of those fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, LitStr, Result};

use crate::{
    DeriveOutput,
    annotation::parse_variant_rename,
    crate_path,
    fields::select_fields,
    generics::EncodeBounds,
    transform::{Access, context_ident, generate_record_body},
};

pub(crate) fn derive_enum(data: &DataEnum, generics: &syn::Generics) -> Result<DeriveOutput> {
    if data.variants.is_empty() {
        return Ok(DeriveOutput {
            body: quote! { match *self {} },
            bounds: EncodeBounds::default(),
        });
    }

    let encode_path = crate_path("MarkdownEncode");
    let ctx = context_ident();
    let mut bounds = EncodeBounds::default();
    let mut arms = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let rename = parse_variant_rename(&variant.attrs)?;
        let arm: TokenStream = match &variant.fields {
            Fields::Unit => {
                let name = rename.unwrap_or_else(|| {
                    LitStr::new(&variant_ident.to_string(), variant_ident.span())
                });
                quote! {
                    Self::#variant_ident => <str as #encode_path>::encode_with(#name, #ctx)
                }
            }
            Fields::Named(_) => {
                let selection = select_fields(&variant.fields, false)?;
                let bindings = selection.planned.iter().map(|field| &field.binding);
                let body = generate_record_body(
                    &selection.planned,
                    Access::Binding,
                    generics,
                    &mut bounds,
                );
                quote! {
                    Self::#variant_ident { #(#bindings,)* .. } => { #body }
                }
            }
            Fields::Unnamed(_) => {
                let selection = select_fields(&variant.fields, false)?;
                let mut planned = selection.planned.iter();
                let patterns: Vec<TokenStream> = selection
                    .bound_positions
                    .iter()
                    .map(|&bound| match bound.then(|| planned.next()).flatten() {
                        Some(field) => {
                            let binding = &field.binding;
                            quote! { #binding }
                        }
                        None => quote! { _ },
                    })
                    .collect();
                let body = generate_record_body(
                    &selection.planned,
                    Access::Binding,
                    generics,
                    &mut bounds,
                );
                quote! {
                    Self::#variant_ident ( #(#patterns),* ) => { #body }
                }
            }
        };
        arms.push(arm);
    }

    Ok(DeriveOutput {
        body: quote! {
            match self {
                #(#arms),*
            }
        },
        bounds,
    })
}

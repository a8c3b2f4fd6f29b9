//! Shared record-body generation for struct and enum derivation.
//!
//! A struct and a data-carrying enum variant encode the same way: one
//! `RecordEncoder::field` call per planned field, then `finish()`. The only
//! difference is how the field value is reached, `&self.name` for structs and
//! a pattern binding for variants.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};

use crate::{
    annotation::Annotation,
    crate_path,
    fields::FieldPlan,
    generics::{EncodeBounds, collect_generics_from_type},
};

/// Name of the context parameter in generated `encode_with` bodies.
///
/// Variant fields are bound by their own names, so generated locals use
/// identifiers no field can be given.
pub(crate) fn context_ident() -> Ident {
    format_ident!("__markdownable_ctx")
}

fn record_ident() -> Ident {
    format_ident!("__markdownable_record")
}

/// How a field value is reached from the generated `encode_with` body.
#[derive(Clone, Copy)]
pub(crate) enum Access {
    /// `&self.member`
    SelfMember,
    /// A binding introduced by a `match self` arm.
    Binding,
}

fn annotation_tokens(annotation: Annotation) -> TokenStream {
    let annotation_path = crate_path("FieldAnnotation");
    match annotation {
        Annotation::None => quote! { #annotation_path::None },
        Annotation::Omit => quote! { #annotation_path::Omit },
        Annotation::Obfuscate => quote! { #annotation_path::Obfuscate },
    }
}

/// Generates the body that encodes `fields` as a record using the context
/// parameter.
///
/// What the field types need from the impl's generics is recorded in
/// `bounds`.
pub(crate) fn generate_record_body(
    fields: &[FieldPlan],
    access: Access,
    generics: &syn::Generics,
    bounds: &mut EncodeBounds,
) -> TokenStream {
    let record_path = crate_path("RecordEncoder");
    let ctx = context_ident();
    let record = record_ident();
    let mut calls = Vec::with_capacity(fields.len());
    for field in fields {
        collect_generics_from_type(&field.ty, generics, bounds);
        let name = &field.display_name;
        let annotation = annotation_tokens(field.annotation);
        let value = match access {
            Access::SelfMember => {
                let member = &field.member;
                quote! { &self.#member }
            }
            Access::Binding => {
                let binding = &field.binding;
                quote_spanned! { field.span => #binding }
            }
        };
        calls.push(quote_spanned! { field.span =>
            #record.field(#name, #annotation, #value)?;
        });
    }

    quote! {
        #[allow(unused_mut)]
        let mut #record = #record_path::new(#ctx);
        #(#calls)*
        ::core::result::Result::Ok(#record.finish())
    }
}

//! Parsing of `#[markdown(...)]` field and variant attributes.
//!
//! This module maps attribute syntax to encoding decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// Field annotation based on `#[markdown(...)]` attributes.
///
/// ## Annotation Mapping
///
/// | Attribute                 | Annotation  | Behavior                                  |
/// |---------------------------|-------------|-------------------------------------------|
/// | None                      | `None`      | Encode and show the field                 |
/// | `#[markdown(omit)]`       | `Omit`      | Encode (errors surface), then drop line   |
/// | `#[markdown(obfuscate)]`  | `Obfuscate` | Mask textual values under the field       |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Annotation {
    None,
    Omit,
    Obfuscate,
}

/// Everything `#[markdown(...)]` can say about a single field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) annotation: Annotation,
    /// Display name override from `rename = "..."`.
    pub(crate) rename: Option<LitStr>,
}

fn set_annotation(target: &mut Option<Annotation>, next: Annotation, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "a field can only be annotated once with `omit` or `obfuscate`",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn set_rename(target: &mut Option<LitStr>, next: LitStr, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(span, "duplicate `rename` in #[markdown(...)]"));
    }
    if next.value().is_empty() {
        return Err(syn::Error::new(next.span(), "`rename` cannot be empty"));
    }
    *target = Some(next);
    Ok(())
}

fn require_list(attr: &Attribute) -> Result<()> {
    match &attr.meta {
        Meta::List(_) => Ok(()),
        Meta::Path(_) => Err(syn::Error::new(
            attr.span(),
            "expected #[markdown(omit)], #[markdown(obfuscate)] or #[markdown(rename = \"...\")]",
        )),
        Meta::NameValue(_) => Err(syn::Error::new(
            attr.span(),
            "expected #[markdown(...)] syntax \
             (e.g., #[markdown(omit)], #[markdown(obfuscate)])",
        )),
    }
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut annotation: Option<Annotation> = None;
    let mut rename: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident("markdown") {
            continue;
        }
        require_list(attr)?;
        attr.parse_nested_meta(|meta| {
            let span = meta.path.span();
            if meta.path.is_ident("omit") {
                set_annotation(&mut annotation, Annotation::Omit, span)
            } else if meta.path.is_ident("obfuscate") {
                set_annotation(&mut annotation, Annotation::Obfuscate, span)
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                set_rename(&mut rename, value, span)
            } else {
                Err(meta.error(
                    "unsupported markdown attribute; expected `omit`, `obfuscate` or `rename`",
                ))
            }
        })?;
    }

    Ok(FieldOptions {
        annotation: annotation.unwrap_or(Annotation::None),
        rename,
    })
}

/// Parses `#[markdown(rename = "...")]` on an enum variant.
pub(crate) fn parse_variant_rename(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut rename: Option<LitStr> = None;
    for attr in attrs {
        if !attr.path().is_ident("markdown") {
            continue;
        }
        require_list(attr)?;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let span = meta.path.span();
                let value: LitStr = meta.value()?.parse()?;
                set_rename(&mut rename, value, span)
            } else {
                Err(meta.error("only `rename` is supported on enum variants"))
            }
        })?;
    }
    Ok(rename)
}

/// Rejects `#[markdown(...)]` on the type itself.
pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("markdown")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[markdown(...)] belongs on fields and enum variants, not on the type",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_none() {
        let options = parse_field_options(&parse_attrs(quote! {})).unwrap();
        assert_eq!(options.annotation, Annotation::None);
        assert!(options.rename.is_none());
    }

    #[test]
    fn omit_returns_omit() {
        let options = parse_field_options(&parse_attrs(quote! { #[markdown(omit)] })).unwrap();
        assert_eq!(options.annotation, Annotation::Omit);
    }

    #[test]
    fn obfuscate_returns_obfuscate() {
        let options =
            parse_field_options(&parse_attrs(quote! { #[markdown(obfuscate)] })).unwrap();
        assert_eq!(options.annotation, Annotation::Obfuscate);
    }

    #[test]
    fn rename_combines_with_annotation() {
        let attrs = parse_attrs(quote! { #[markdown(obfuscate, rename = "Token")] });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.annotation, Annotation::Obfuscate);
        assert_eq!(options.rename.unwrap().value(), "Token");
    }

    #[test]
    fn rename_across_separate_attributes() {
        let attrs = parse_attrs(quote! {
            #[markdown(rename = "Token")]
            #[markdown(omit)]
        });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.annotation, Annotation::Omit);
        assert_eq!(options.rename.unwrap().value(), "Token");
    }

    #[test]
    fn omit_and_obfuscate_conflict() {
        let attrs = parse_attrs(quote! { #[markdown(omit, obfuscate)] });
        let err = parse_field_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("only be annotated once"));
    }

    #[test]
    fn duplicate_rename_errors() {
        let attrs = parse_attrs(quote! {
            #[markdown(rename = "A")]
            #[markdown(rename = "B")]
        });
        let err = parse_field_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("duplicate `rename`"));
    }

    #[test]
    fn empty_rename_errors() {
        let attrs = parse_attrs(quote! { #[markdown(rename = "")] });
        let err = parse_field_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn bare_markdown_errors() {
        let err = parse_field_options(&parse_attrs(quote! { #[markdown] })).unwrap_err();
        assert!(err.to_string().contains("expected #[markdown(omit)]"));
    }

    #[test]
    fn name_value_syntax_errors() {
        let attrs = parse_attrs(quote! { #[markdown = "-"] });
        let err = parse_field_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("expected #[markdown(...)] syntax"));
    }

    #[test]
    fn unknown_key_errors() {
        let attrs = parse_attrs(quote! { #[markdown(redact)] });
        let err = parse_field_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("unsupported markdown attribute"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[serde(skip)]
            #[doc = "field docs"]
        });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.annotation, Annotation::None);
    }

    #[test]
    fn variant_rename_parses() {
        let attrs = parse_attrs(quote! { #[markdown(rename = "In progress")] });
        let rename = parse_variant_rename(&attrs).unwrap();
        assert_eq!(rename.unwrap().value(), "In progress");
    }

    #[test]
    fn variant_rejects_annotations() {
        let attrs = parse_attrs(quote! { #[markdown(omit)] });
        let err = parse_variant_rename(&attrs).unwrap_err();
        assert!(err.to_string().contains("only `rename`"));
    }

    #[test]
    fn container_attribute_rejected() {
        let attrs = parse_attrs(quote! { #[markdown(omit)] });
        assert!(reject_container_attrs(&attrs).is_err());
        assert!(reject_container_attrs(&parse_attrs(quote! {})).is_ok());
    }
}

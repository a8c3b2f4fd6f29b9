//! Field selection: which members of a record are encoded and under what name.

use proc_macro2::{Ident, Span};
use quote::format_ident;
use syn::{Fields, LitStr, Result, Type, Visibility, ext::IdentExt, spanned::Spanned};

use crate::annotation::{Annotation, parse_field_options};

/// A field that produces (or, when omitted, is still encoded for) a line.
pub(crate) struct FieldPlan {
    /// Accessor used on `self` for struct fields.
    pub(crate) member: syn::Member,
    /// Local name bound when destructuring an enum variant.
    pub(crate) binding: Ident,
    pub(crate) display_name: LitStr,
    pub(crate) annotation: Annotation,
    pub(crate) ty: Type,
    pub(crate) span: Span,
}

/// Which fields of a struct or variant take part in encoding.
pub(crate) struct FieldSelection {
    pub(crate) planned: Vec<FieldPlan>,
    /// Positional slots for tuple-like patterns: `true` where the field is
    /// bound, `false` where it is matched with `_`.
    pub(crate) bound_positions: Vec<bool>,
}

/// Whether a struct field counts as exported. Only plain `pub` does;
/// `pub(crate)` and narrower stay out of the output.
fn is_exported(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

/// `PhantomData<T>` markers have nothing to show and never get a line.
pub(crate) fn is_phantom_data(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path.path.segments.last().is_some_and(|segment| {
        segment.ident == "PhantomData"
            && matches!(segment.arguments, syn::PathArguments::AngleBracketed(_))
    })
}

/// Plans the fields of a struct or enum variant.
///
/// Struct fields must be `pub` to be encoded; variant fields share the enum's
/// visibility, so `require_pub` is `false` for them. Attributes on skipped
/// fields are still validated so mistakes are not silently ignored.
pub(crate) fn select_fields(fields: &Fields, require_pub: bool) -> Result<FieldSelection> {
    let mut planned = Vec::new();
    let mut bound_positions = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        let visible = (!require_pub || is_exported(&field.vis)) && !is_phantom_data(&field.ty);
        bound_positions.push(visible);
        if !visible {
            continue;
        }

        let span = field.span();
        let (member, binding, default_name) = match &field.ident {
            Some(ident) => (
                syn::Member::Named(ident.clone()),
                ident.clone(),
                ident.unraw().to_string(),
            ),
            None => (
                syn::Member::Unnamed(syn::Index {
                    index: u32::try_from(index)
                        .map_err(|_| syn::Error::new(span, "too many fields"))?,
                    span,
                }),
                format_ident!("field_{index}"),
                index.to_string(),
            ),
        };
        let display_name = options
            .rename
            .unwrap_or_else(|| LitStr::new(&default_name, span));

        planned.push(FieldPlan {
            member,
            binding,
            display_name,
            annotation: options.annotation,
            ty: field.ty.clone(),
            span,
        });
    }

    Ok(FieldSelection {
        planned,
        bound_positions,
    })
}

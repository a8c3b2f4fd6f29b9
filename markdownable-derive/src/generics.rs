//! Generic type parameter handling and trait bound management.
//!
//! Only type parameters that appear in encoded fields get a `MarkdownEncode`
//! bound. Parameters used solely by private fields or inside `PhantomData`
//! stay unbounded:
//!
//! ```ignore
//! #[derive(Markdown)]
//! struct TypedId<T> {
//!     pub id: String,
//!     pub _marker: PhantomData<T>, // T does NOT require MarkdownEncode
//! }
//! ```

use syn::{
    Ident, TypePath, parse_quote,
    visit::{self, Visit},
};

use crate::crate_path;

/// What an impl needs in order to encode its fields.
///
/// Plain type parameters (`T`, `Vec<T>`) are bounded directly. A field whose
/// type projects out of a parameter (`I::Item`, `<T as Trait>::Out`) gets a
/// where-predicate on the whole field type instead, since bounding the
/// parameter itself says nothing about the projection.
#[derive(Default)]
pub(crate) struct EncodeBounds {
    pub(crate) params: Vec<Ident>,
    pub(crate) types: Vec<syn::Type>,
}

struct ParamUsage<'a> {
    generics: &'a syn::Generics,
    params: Vec<Ident>,
    projected: bool,
}

impl ParamUsage<'_> {
    fn is_param(&self, ident: &Ident) -> bool {
        self.generics.type_params().any(|param| param.ident == *ident)
    }
}

impl<'ast> Visit<'ast> for ParamUsage<'_> {
    fn visit_type_path(&mut self, type_path: &'ast TypePath) {
        if type_path.qself.is_some() {
            self.projected = true;
            return;
        }
        visit::visit_type_path(self, type_path);
    }

    fn visit_path(&mut self, path: &'ast syn::Path) {
        if path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData")
        {
            return;
        }
        if let Some(first) = path.segments.first() {
            if self.is_param(&first.ident) {
                if path.segments.len() > 1 {
                    self.projected = true;
                } else if !self.params.contains(&first.ident) {
                    self.params.push(first.ident.clone());
                }
            }
        }
        visit::visit_path(self, path);
    }
}

/// Records what `ty` needs from the impl's generics.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    bounds: &mut EncodeBounds,
) {
    let mut usage = ParamUsage {
        generics,
        params: Vec::new(),
        projected: false,
    };
    usage.visit_type(ty);
    for param in usage.params {
        if !bounds.params.contains(&param) {
            bounds.params.push(param);
        }
    }
    if usage.projected && !bounds.types.contains(ty) {
        bounds.types.push(ty.clone());
    }
}

/// Adds `MarkdownEncode` bounds for everything the encoded fields need.
pub(crate) fn add_encode_bounds(
    mut generics: syn::Generics,
    bounds: &EncodeBounds,
) -> syn::Generics {
    let encode_path = crate_path("MarkdownEncode");
    for param in generics.type_params_mut() {
        if bounds.params.contains(&param.ident) {
            param.bounds.push(parse_quote!(#encode_path));
        }
    }
    if !bounds.types.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &bounds.types {
            where_clause.predicates.push(parse_quote!(#ty: #encode_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_for(ty: syn::Type, generics: &syn::Generics) -> EncodeBounds {
        let mut bounds = EncodeBounds::default();
        collect_generics_from_type(&ty, generics, &mut bounds);
        bounds
    }

    fn params_in(ty: syn::Type, generics: &syn::Generics) -> Vec<String> {
        bounds_for(ty, generics)
            .params
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn finds_params_nested_in_paths() {
        let generics: syn::Generics = parse_quote!(<T, U, V>);
        assert_eq!(params_in(parse_quote!(Option<Vec<U>>), &generics), ["U"]);
        assert_eq!(params_in(parse_quote!((T, Box<V>)), &generics), ["T", "V"]);
    }

    #[test]
    fn projections_bound_the_field_type() {
        let generics: syn::Generics = parse_quote!(<I>);
        let bounds = bounds_for(parse_quote!(I::Item), &generics);
        assert!(bounds.params.is_empty());
        let expected: syn::Type = parse_quote!(I::Item);
        assert_eq!(bounds.types, [expected]);
    }

    #[test]
    fn qualified_projections_bound_the_field_type() {
        let generics: syn::Generics = parse_quote!(<T>);
        let bounds = bounds_for(parse_quote!(Vec<<T as IntoIterator>::Item>), &generics);
        assert!(bounds.params.is_empty());
        assert_eq!(bounds.types.len(), 1);
    }

    #[test]
    fn skips_phantom_data() {
        let generics: syn::Generics = parse_quote!(<T>);
        assert!(params_in(parse_quote!(PhantomData<T>), &generics).is_empty());
        assert!(params_in(parse_quote!(std::marker::PhantomData<T>), &generics).is_empty());
    }

    #[test]
    fn records_each_param_once() {
        let generics: syn::Generics = parse_quote!(<T>);
        assert_eq!(params_in(parse_quote!(HashMap<T, Vec<T>>), &generics), ["T"]);
    }

    #[test]
    fn concrete_types_add_nothing() {
        let generics: syn::Generics = parse_quote!(<T>);
        let bounds = bounds_for(parse_quote!(String), &generics);
        assert!(bounds.params.is_empty());
        assert!(bounds.types.is_empty());
    }

    #[test]
    fn bounds_only_used_params() {
        let generics: syn::Generics = parse_quote!(<T, U>);
        let bounds = EncodeBounds {
            params: vec![parse_quote!(T)],
            types: Vec::new(),
        };
        let bounded = add_encode_bounds(generics, &bounds);
        let params: Vec<_> = bounded.type_params().collect();
        assert_eq!(params[0].bounds.len(), 1);
        assert!(params[1].bounds.is_empty());
        assert!(bounded.where_clause.is_none());
    }

    #[test]
    fn projected_types_become_where_predicates() {
        let generics: syn::Generics = parse_quote!(<I: Iterator>);
        let bounds = EncodeBounds {
            params: Vec::new(),
            types: vec![parse_quote!(I::Item)],
        };
        let bounded = add_encode_bounds(generics, &bounds);
        let where_clause = bounded.where_clause.expect("where clause");
        assert_eq!(where_clause.predicates.len(), 1);
    }
}

//! Struct-specific `MarkdownEncode` derivation.
//!
//! Named, tuple and unit structs all encode as records; unit structs and
//! structs without exported fields produce an empty record.

use syn::{DataStruct, Result};

use crate::{
    DeriveOutput,
    fields::select_fields,
    generics::EncodeBounds,
    transform::{Access, generate_record_body},
};

pub(crate) fn derive_struct(data: &DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let selection = select_fields(&data.fields, true)?;
    let mut bounds = EncodeBounds::default();
    let body = generate_record_body(
        &selection.planned,
        Access::SelfMember,
        generics,
        &mut bounds,
    );
    Ok(DeriveOutput { body, bounds })
}

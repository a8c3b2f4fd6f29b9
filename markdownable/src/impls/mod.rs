//! `MarkdownEncode` implementations for standard library types.
//!
//! Each implementation is one of the traversal paths:
//!
//! - **`text`**: string-like values, masked when the context asks for it
//! - **`pointers`**: `Option` (the nullable path) and pointer-like wrappers
//! - **`scalars`**: numbers, booleans and other `Display` values
//! - **`collections`**: sequences and maps, rendered inline
//! - **`extras`**: date/time and UUID types behind their features
//!
//! Composite records are not implemented here; they come from
//! `#[derive(Markdown)]`.

mod collections;
mod extras;
mod pointers;
mod scalars;
mod text;


#[cfg(feature = "json")]
pub(crate) use pointers::NULL;

// =============================================================================
// Display fallback implementation helper
// =============================================================================

macro_rules! impl_markdown_encode_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::encoder::MarkdownEncode for $ty {
                fn encode_with(
                    &self,
                    _ctx: crate::encoder::Context,
                ) -> crate::error::Result<::std::string::String> {
                    Ok(self.to_string())
                }
            }
        )+
    };
}

pub(crate) use impl_markdown_encode_display;

//! Recursive Markdown encoding.
//!
//! This module provides the traversal engine:
//!
//! - **`context`**: Per-call traversal state (`Context`) and field annotations
//! - **`traits`**: Core traits (`MarkdownEncode`, `MarshalMarkdown`, `ToMarkdown`)
//! - **`record`**: Line builder for composite values (`RecordEncoder`)
//!
//! Implementations for standard library types live in `crate::impls`.

mod context;
mod record;
mod traits;

pub use context::{Context, FieldAnnotation};
pub use record::RecordEncoder;
pub use traits::{MarkdownEncode, MarshalMarkdown, ToMarkdown};

use crate::error::Result;

/// Encodes `value` as Markdown text.
///
/// Fails only if a custom encoder somewhere in the value fails; in that case
/// no output is produced.
///
/// ```
/// use markdownable::Markdown;
///
/// #[derive(Markdown)]
/// struct Deploy {
///     #[markdown(rename = "Service")]
///     pub service: String,
///     #[markdown(rename = "Replicas")]
///     pub replicas: u32,
/// }
///
/// let deploy = Deploy { service: "billing".into(), replicas: 3 };
/// assert_eq!(
///     markdownable::to_string(&deploy).unwrap(),
///     "- **Service**: billing\n- **Replicas**: 3",
/// );
/// ```
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: MarkdownEncode + ?Sized,
{
    value.encode_with(Context::root())
}

/// Encodes `value` as UTF-8 Markdown bytes.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: MarkdownEncode + ?Sized,
{
    to_string(value).map(String::into_bytes)
}

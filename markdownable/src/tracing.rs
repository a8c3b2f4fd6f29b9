//! Adapter for emitting Markdown-encoded values through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use markdownable::tracing::TracingMarkdownExt;
//!
//! tracing::info!(incident = %incident.tracing_markdown(), "posting summary");
//! ```

use tracing::field::{DisplayValue, display};

use crate::{
    encoder::{MarkdownEncode, ToMarkdown},
    error::{ENCODING_FAILED_PLACEHOLDER, Error},
};

pub(crate) fn encode_or_placeholder<T>(value: &T) -> String
where
    T: MarkdownEncode + ?Sized,
{
    value.to_markdown().unwrap_or_else(|err: Error| {
        tracing::warn!(error = %err, "markdown encoding failed");
        ENCODING_FAILED_PLACEHOLDER.to_string()
    })
}

/// Extension trait for logging values as their Markdown text.
///
/// Logging APIs are infallible, so an encoder failure is reported as a
/// `warn` event and the field is logged as [`ENCODING_FAILED_PLACEHOLDER`].
pub trait TracingMarkdownExt {
    /// Wraps the value's Markdown text for use as a `tracing` display field.
    fn tracing_markdown(&self) -> DisplayValue<String>;
}

impl<T> TracingMarkdownExt for T
where
    T: MarkdownEncode + ?Sized,
{
    fn tracing_markdown(&self) -> DisplayValue<String> {
        display(encode_or_placeholder(self))
    }
}

//! Adapter for emitting Markdown-encoded values through `slog`.
//!
//! The logged representation is the value's Markdown text, emitted as a
//! string. Logging is infallible, so a failing custom encoder is logged as
//! [`ENCODING_FAILED_PLACEHOLDER`] rather than propagated.
//!
//! ```ignore
//! use markdownable::slog::SlogMarkdownExt;
//!
//! slog::info!(logger, "posting summary"; "incident" => incident.slog_markdown());
//! ```

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    encoder::{MarkdownEncode, ToMarkdown},
    error::ENCODING_FAILED_PLACEHOLDER,
};

/// `slog::Value` wrapper that emits a value's Markdown text.
pub struct SlogMarkdown<'a, T: ?Sized>(&'a T);

impl<T> SlogValue for SlogMarkdown<'_, T>
where
    T: MarkdownEncode + ?Sized,
{
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self.0.to_markdown() {
            Ok(text) => serializer.emit_str(key, &text),
            Err(_) => serializer.emit_str(key, ENCODING_FAILED_PLACEHOLDER),
        }
    }
}

/// Extension trait to obtain a [`SlogMarkdown`] wrapper.
pub trait SlogMarkdownExt {
    /// Wraps the value so `slog` logs its Markdown text.
    fn slog_markdown(&self) -> SlogMarkdown<'_, Self>;
}

impl<T> SlogMarkdownExt for T
where
    T: MarkdownEncode + ?Sized,
{
    fn slog_markdown(&self) -> SlogMarkdown<'_, Self> {
        SlogMarkdown(self)
    }
}

//! Textual path: string-like values are emitted as-is, or masked when the
//! enclosing field is obfuscated. No quoting or escaping is added.

use std::borrow::Cow;

use crate::{
    encoder::{Context, MarkdownEncode},
    error::Result,
    mask::obfuscate,
};

pub(crate) fn encode_text(value: &str, ctx: Context) -> String {
    if ctx.obfuscate() {
        obfuscate(value)
    } else {
        value.to_string()
    }
}

impl MarkdownEncode for str {
    fn encode_with(&self, ctx: Context) -> Result<String> {
        Ok(encode_text(self, ctx))
    }
}

impl MarkdownEncode for String {
    fn encode_with(&self, ctx: Context) -> Result<String> {
        Ok(encode_text(self, ctx))
    }
}

impl MarkdownEncode for Cow<'_, str> {
    fn encode_with(&self, ctx: Context) -> Result<String> {
        Ok(encode_text(self, ctx))
    }
}

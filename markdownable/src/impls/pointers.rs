//! Nullable path (`Option`) and pointer-like wrappers.
//!
//! Pointer-like wrappers can never be null, so they always dereference once
//! and encode the target with the same context. Only `None` renders `null`.

use std::{rc::Rc, sync::Arc};

use crate::{
    encoder::{Context, MarkdownEncode},
    error::Result,
};

/// Literal emitted for an absent nullable value.
pub(crate) const NULL: &str = "null";

impl<T> MarkdownEncode for Option<T>
where
    T: MarkdownEncode,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        match self {
            Some(value) => value.encode_with(ctx),
            None => Ok(NULL.to_string()),
        }
    }
}

impl<T> MarkdownEncode for &T
where
    T: MarkdownEncode + ?Sized,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        (**self).encode_with(ctx)
    }
}

impl<T> MarkdownEncode for &mut T
where
    T: MarkdownEncode + ?Sized,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        (**self).encode_with(ctx)
    }
}

impl<T> MarkdownEncode for Box<T>
where
    T: MarkdownEncode + ?Sized,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        (**self).encode_with(ctx)
    }
}

impl<T> MarkdownEncode for Rc<T>
where
    T: MarkdownEncode + ?Sized,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        (**self).encode_with(ctx)
    }
}

impl<T> MarkdownEncode for Arc<T>
where
    T: MarkdownEncode + ?Sized,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        (**self).encode_with(ctx)
    }
}

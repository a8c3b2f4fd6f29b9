//! Core traits for Markdown encoding.
//!
//! - [`MarkdownEncode`]: the traversal trait every encodable type implements
//! - [`MarshalMarkdown`]: the self-encoding capability for custom output
//! - [`ToMarkdown`]: user-facing `.to_markdown()` method

use super::Context;
use crate::error::Result;

// =============================================================================
// MarkdownEncode - Types that take part in traversal
// =============================================================================

/// A type that can be encoded as Markdown text.
///
/// Implemented by types deriving `Markdown` (field-by-field records) or
/// `CustomMarkdown` (delegating to [`MarshalMarkdown`]), and by standard
/// library types: strings take the textual path, `Option` the nullable path,
/// smart pointers dereference, and scalars fall back to their `Display` form.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `MarkdownEncode`",
    label = "this type cannot be encoded as Markdown",
    note = "use `#[derive(Markdown)]` on the type definition",
    note = "or implement `MarshalMarkdown` and `#[derive(CustomMarkdown)]` for custom output"
)]
pub trait MarkdownEncode {
    /// Encodes `self` using the given traversal context.
    fn encode_with(&self, ctx: Context) -> Result<String>;
}

// =============================================================================
// MarshalMarkdown - Self-encoding capability
// =============================================================================

/// A type that produces its own Markdown text.
///
/// Pair it with `#[derive(CustomMarkdown)]` to route traversal through
/// [`marshal_markdown`](MarshalMarkdown::marshal_markdown). The returned text is
/// used verbatim: no indentation, field annotation or obfuscation is applied
/// on top of it.
///
/// ```
/// use markdownable::{CustomMarkdown, MarshalMarkdown, ToMarkdown};
///
/// #[derive(CustomMarkdown)]
/// struct Status(u16);
///
/// impl MarshalMarkdown for Status {
///     fn marshal_markdown(&self) -> markdownable::Result<String> {
///         Ok(format!("`HTTP {}`", self.0))
///     }
/// }
///
/// assert_eq!(Status(503).to_markdown().unwrap(), "`HTTP 503`");
/// ```
pub trait MarshalMarkdown {
    /// Produces the Markdown text for `self`, or fails.
    fn marshal_markdown(&self) -> Result<String>;
}

// =============================================================================
// ToMarkdown - User-facing entrypoint
// =============================================================================

/// Public entrypoint for encoding a value from a fresh root context.
///
/// Blanket-implemented for every [`MarkdownEncode`] type.
pub trait ToMarkdown: MarkdownEncode {
    /// Encodes `self` as Markdown text.
    fn to_markdown(&self) -> Result<String> {
        self.encode_with(Context::root())
    }
}

impl<T> ToMarkdown for T where T: MarkdownEncode + ?Sized {}

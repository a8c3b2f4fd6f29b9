//! Line builder for composite (record) values.

use super::{Context, FieldAnnotation, MarkdownEncode};
use crate::error::Result;

/// Accumulates the lines of a composite value.
///
/// Generated `#[derive(Markdown)]` impls drive this type; hand-written
/// [`MarkdownEncode`] impls for record-like types can use it to get the same
/// layout:
///
/// ```text
/// - **Name**: value
/// - **Nested**:
/// 	- **Inner**: value
/// ```
///
/// Each field value is encoded one level deeper than the record. Lines are
/// prefixed with `indent_level` tabs, and a record that is itself nested starts
/// with a newline so its block sits under the parent's bullet.
#[derive(Debug)]
pub struct RecordEncoder {
    ctx: Context,
    lines: Vec<String>,
}

impl RecordEncoder {
    /// Starts a record encoded with `ctx`.
    #[must_use]
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            lines: Vec::new(),
        }
    }

    /// Encodes one field and appends its line.
    ///
    /// The value is always encoded, even for [`FieldAnnotation::Omit`], so a
    /// failing custom encoder aborts the record whether or not its line would
    /// have been shown.
    pub fn field<T>(&mut self, name: &str, annotation: FieldAnnotation, value: &T) -> Result<()>
    where
        T: MarkdownEncode + ?Sized,
    {
        let encoded = value.encode_with(self.ctx.nested(annotation))?;
        if annotation == FieldAnnotation::Omit {
            return Ok(());
        }
        self.lines.push(format!("- **{name}**: {encoded}"));
        Ok(())
    }

    /// Number of lines collected so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no visible field has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Indents and joins the collected lines.
    #[must_use]
    pub fn finish(self) -> String {
        let level = self.ctx.indent_level();
        let indent = "\t".repeat(level);
        let mut out = String::new();
        if level > 0 && !self.lines.is_empty() {
            out.push('\n');
        }
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&indent);
            out.push_str(line);
        }
        out
    }
}

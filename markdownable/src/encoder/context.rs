//! Traversal context threaded through recursive encode calls.

/// How a composite value's field takes part in encoding.
///
/// Annotations are attached to fields at compile time by
/// `#[derive(Markdown)]`: `#[markdown(omit)]` maps to [`FieldAnnotation::Omit`]
/// and `#[markdown(obfuscate)]` to [`FieldAnnotation::Obfuscate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldAnnotation {
    /// Default traversal, full visibility.
    #[default]
    None,
    /// The field is encoded (errors still surface) but its line is dropped.
    Omit,
    /// Textual values under the field are masked before emission.
    Obfuscate,
}

/// Per-call traversal state: indentation depth and the redaction flag.
///
/// A root context is created for each top-level encode and copied into every
/// recursive call. Nothing is shared between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Context {
    indent_level: usize,
    obfuscate: bool,
}

impl Context {
    /// Context for a top-level call: no indentation, no redaction.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Number of tab characters prefixed to each line of a record encoded
    /// with this context.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Whether textual values encoded with this context are masked.
    pub fn obfuscate(&self) -> bool {
        self.obfuscate
    }

    /// Context for the value of a field of a record encoded with `self`.
    ///
    /// Indentation grows by one. The redaction flag is raised for an
    /// obfuscated field and stays raised for everything beneath it; it is
    /// never lowered on the way down.
    #[must_use]
    pub fn nested(self, annotation: FieldAnnotation) -> Self {
        Self {
            indent_level: self.indent_level + 1,
            obfuscate: self.obfuscate || annotation == FieldAnnotation::Obfuscate,
        }
    }

    /// Returns a copy with the redaction flag forced on.
    #[must_use]
    pub fn obfuscated(mut self) -> Self {
        self.obfuscate = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Context, FieldAnnotation};

    #[test]
    fn root_starts_flat_and_clear() {
        let ctx = Context::root();
        assert_eq!(ctx.indent_level(), 0);
        assert!(!ctx.obfuscate());
    }

    #[test]
    fn nested_increments_indent_by_one() {
        let ctx = Context::root()
            .nested(FieldAnnotation::None)
            .nested(FieldAnnotation::Omit);
        assert_eq!(ctx.indent_level(), 2);
        assert!(!ctx.obfuscate());
    }

    #[test]
    fn obfuscate_is_inherited_downwards() {
        let field = Context::root().nested(FieldAnnotation::Obfuscate);
        let grandchild = field.nested(FieldAnnotation::None);
        assert!(field.obfuscate());
        assert!(grandchild.obfuscate());
    }

    #[test]
    fn sibling_contexts_are_independent() {
        let parent = Context::root();
        let secret = parent.nested(FieldAnnotation::Obfuscate);
        let plain = parent.nested(FieldAnnotation::None);
        assert!(secret.obfuscate());
        assert!(!plain.obfuscate());
    }

    #[test]
    fn obfuscated_keeps_indentation() {
        let ctx = Context::root().nested(FieldAnnotation::None).obfuscated();
        assert_eq!(ctx.indent_level(), 1);
        assert!(ctx.obfuscate());
    }
}

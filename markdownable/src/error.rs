//! The single error kind produced while encoding.
//!
//! Default traversal never fails. The only way an encode can fail is a custom
//! encoder ([`MarshalMarkdown`](crate::MarshalMarkdown)) reporting that it
//! cannot produce its text. That failure travels back to the top-level caller
//! unchanged: enclosing records do not wrap it, and no partial output survives.

use std::fmt::Display;

/// Boxed error type carried by [`Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Text logged in place of a value whose custom encoder failed, by the
/// logging adapters that cannot propagate errors.
pub const ENCODING_FAILED_PLACEHOLDER: &str = "[markdown encoding failed]";

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A custom encoder failed to produce its Markdown text.
///
/// `Display` and `source` are forwarded to the underlying failure, so
/// propagation through nested records is transparent.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(BoxError);

impl Error {
    /// Wraps an existing error (or anything convertible into a boxed error,
    /// such as a `String`).
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self(error.into())
    }

    /// Builds an error from a message.
    pub fn custom<T: Display>(msg: T) -> Self {
        Self(msg.to_string().into())
    }

    /// Returns a reference to the wrapped failure.
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Attempts to downcast the wrapped failure to a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Consumes the error, returning the wrapped failure.
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[derive(Debug, thiserror::Error)]
    #[error("webhook payload rejected")]
    struct Rejected;

    #[test]
    fn custom_displays_message_verbatim() {
        let err = Error::custom("cannot render ledger");
        assert_eq!(err.to_string(), "cannot render ledger");
    }

    #[test]
    fn new_is_transparent_over_source() {
        let err = Error::new(Rejected);
        assert_eq!(err.to_string(), "webhook payload rejected");
        assert!(err.downcast_ref::<Rejected>().is_some());
    }

    #[test]
    fn into_inner_returns_wrapped_failure() {
        let inner = Error::new(Rejected).into_inner();
        assert!(inner.downcast_ref::<Rejected>().is_some());
    }
}

//! Common error types used throughout postforge.
//!
//! Every add-link operation fails with exactly one of [`Error::EmptyInput`],
//! [`Error::Parse`] or [`Error::Resolution`]. All of them are recoverable:
//! the caller reports the failure and the session carries on.

use crate::types::ResourceReference;

/// Common error type for postforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A blank link was submitted.
    #[error("No link provided")]
    EmptyInput,

    /// The submitted text matches no known hosting link shape.
    #[error("Unable to parse link: {input}")]
    Parse {
        /// The text that failed to parse.
        input: String,
    },

    /// The metadata lookup for a parsed reference failed.
    #[error("Lookup failed for {}: {reason}", reference.id)]
    Resolution {
        /// The reference whose lookup failed.
        reference: ResourceReference,
        /// Transport or API failure description.
        reason: String,
    },

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new Parse error.
    pub fn parse<S: Into<String>>(input: S) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }

    /// Create a new Resolution error for `reference`.
    pub fn resolution<S: Into<String>>(reference: ResourceReference, reason: S) -> Self {
        Self::Resolution {
            reference,
            reason: reason.into(),
        }
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The reference that failed to resolve, if this is a resolution error.
    pub fn failed_reference(&self) -> Option<&ResourceReference> {
        match self {
            Self::Resolution { reference, .. } => Some(reference),
            _ => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyInput.to_string(), "No link provided");

        let err = Error::parse("https://example.com/nothing");
        assert_eq!(
            err.to_string(),
            "Unable to parse link: https://example.com/nothing"
        );

        let err = Error::resolution(ResourceReference::folder("F00"), "HTTP 404");
        assert_eq!(err.to_string(), "Lookup failed for F00: HTTP 404");

        let err = Error::invalid_input("bad format");
        assert_eq!(err.to_string(), "Invalid input: bad format");
    }

    #[test]
    fn test_failed_reference() {
        let reference = ResourceReference::file("ABC");
        let err = Error::resolution(reference.clone(), "timeout");
        assert_eq!(err.failed_reference(), Some(&reference));
        assert_eq!(Error::EmptyInput.failed_reference(), None);
    }
}

//! Unified error types for the form-field library.
use thiserror::Error;

/// Main error type for form-field operations.
///
/// The first three variants are the conditions raised by collection access.
/// None of them is fatal; each is scoped to the call that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Positional access past the last qualifying mark
    #[error("Index out of bounds: {index} (count is {count})")]
    IndexOutOfBounds { index: usize, count: usize },

    /// Name lookup found no qualifying mark
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// Enumeration advanced past its last element
    #[error("No more elements")]
    NoMoreElements,

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Structurally invalid mark markup
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Whether this is one of the collection access conditions rather than
    /// an import failure.
    pub fn is_access_error(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfBounds { .. } | Error::NoSuchElement(_) | Error::NoMoreElements
        )
    }
}

/// Result type for form-field operations.
pub type Result<T> = std::result::Result<T, Error>;

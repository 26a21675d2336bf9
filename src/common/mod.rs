//! Common types shared by the document model, the importers and the
//! automation layer.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};

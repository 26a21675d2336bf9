//! Unified error types for the form-field library.
//!
//! This module provides one error type covering both the collection access
//! conditions (out of range, missing name, exhausted enumeration) and the
//! failures that can occur while importing marks from document markup.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};

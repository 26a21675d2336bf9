//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from parser
//! error types to the unified Error type.

#[cfg(any(feature = "ooxml", feature = "odf"))]
use super::types::Error;

#[cfg(any(feature = "ooxml", feature = "odf"))]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(any(feature = "ooxml", feature = "odf"))]
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlError(err.to_string())
    }
}

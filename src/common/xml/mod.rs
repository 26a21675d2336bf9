//! XML helpers shared by the DOCX and ODT importers.

pub mod escape;

pub use escape::{resolve_entity, unescape_xml};

#[cfg(any(feature = "ooxml", feature = "odf"))]
use quick_xml::events::attributes::Attribute;

/// Decode and unescape an attribute value.
#[cfg(any(feature = "ooxml", feature = "odf"))]
#[inline]
pub(crate) fn attr_value(attr: &Attribute<'_>) -> String {
    unescape_xml(&String::from_utf8_lossy(&attr.value))
}

/// Parse an attribute value as an unsigned integer, ignoring garbage.
#[cfg(any(feature = "ooxml", feature = "odf"))]
#[inline]
pub(crate) fn attr_u32(attr: &Attribute<'_>) -> Option<u32> {
    atoi_simd::parse::<u32>(attr.value.trim_ascii()).ok()
}

/// Interpret an OOXML/ODF boolean attribute value.
///
/// Both the `true`/`false` and the `1`/`0` spellings are accepted, as are
/// `on`/`off`. Anything else counts as false.
#[cfg(any(feature = "ooxml", feature = "odf"))]
#[inline]
pub(crate) fn parse_xml_bool(value: &[u8]) -> bool {
    matches!(value.trim_ascii(), b"true" | b"1" | b"on")
}

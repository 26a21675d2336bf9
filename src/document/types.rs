//! Shared enums for form-field types and source markup detection.

use memchr::memmem;

use crate::common::{Error, Result};

/// The type of a form field, carrying the numeric code the legacy
/// automation object model uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFieldType {
    /// Text input (code 70)
    TextInput,
    /// Checkbox (code 71)
    CheckBox,
    /// Dropdown (code 83)
    DropDown,
}

impl FormFieldType {
    /// The object-model field type code.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            FormFieldType::TextInput => 70,
            FormFieldType::CheckBox => 71,
            FormFieldType::DropDown => 83,
        }
    }

    /// Map an object-model field type code back to a form-field type.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            70 => Some(FormFieldType::TextInput),
            71 => Some(FormFieldType::CheckBox),
            83 => Some(FormFieldType::DropDown),
            _ => None,
        }
    }
}

/// Markup dialect of a document part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(unused)] // Variants are only produced when the matching feature is enabled
pub(super) enum MarkupFormat {
    /// WordprocessingML main document part (`word/document.xml`)
    WordprocessingMl,
    /// OpenDocument content part (`content.xml`)
    OpenDocument,
}

/// Detect the markup dialect from the root element name.
///
/// Only the first element start is inspected. The XML declaration,
/// processing instructions, comments and a doctype before it are skipped
/// whole, so markup characters inside them do not count.
pub(super) fn detect_markup_format(bytes: &[u8]) -> Result<MarkupFormat> {
    let no_root = || Error::InvalidFormat("No root element found".to_string());

    let mut rest = bytes;
    loop {
        let lt = memchr::memchr(b'<', rest).ok_or_else(no_root)?;
        rest = &rest[lt..];
        let skip = if rest.starts_with(b"<?") {
            memmem::find(rest, b"?>").map(|end| end + 2)
        } else if rest.starts_with(b"<!--") {
            memmem::find(&rest[4..], b"-->").map(|end| end + 7)
        } else if rest.starts_with(b"<!") {
            doctype_len(rest)
        } else {
            rest = &rest[1..];
            break;
        };
        rest = &rest[skip.ok_or_else(no_root)?..];
    }

    let end = rest
        .iter()
        .position(|b| b.is_ascii_whitespace() || matches!(b, b'>' | b'/'))
        .unwrap_or(rest.len());
    let root = &rest[..end];
    let local = match memchr::memchr(b':', root) {
        Some(colon) => &root[colon + 1..],
        None => root,
    };

    if root.starts_with(b"office:") && matches!(local, b"document-content" | b"document") {
        Ok(MarkupFormat::OpenDocument)
    } else if local == b"document" {
        Ok(MarkupFormat::WordprocessingMl)
    } else {
        Err(Error::InvalidFormat(format!(
            "Unrecognized root element: {}",
            String::from_utf8_lossy(root)
        )))
    }
}

/// Length of a `<!DOCTYPE ...>` declaration, including an internal subset.
fn doctype_len(decl: &[u8]) -> Option<usize> {
    let gt = memchr::memchr(b'>', decl)?;
    match memchr::memchr(b'[', &decl[..gt]) {
        Some(open) => {
            let close = memmem::find(&decl[open..], b"]")? + open;
            memchr::memchr(b'>', &decl[close..]).map(|end| close + end + 1)
        },
        None => Some(gt + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_codes() {
        for ty in [
            FormFieldType::TextInput,
            FormFieldType::CheckBox,
            FormFieldType::DropDown,
        ] {
            assert_eq!(FormFieldType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(FormFieldType::CheckBox.code(), 71);
        assert_eq!(FormFieldType::from_code(1), None);
    }

    #[test]
    fn test_detect_markup_format() {
        let docx = br#"<?xml version="1.0"?><w:document xmlns:w="x"><w:body/></w:document>"#;
        assert_eq!(
            detect_markup_format(docx).unwrap(),
            MarkupFormat::WordprocessingMl
        );

        let odt = b"<?xml version=\"1.0\"?>\n<!-- c -->\n<office:document-content xmlns:office=\"x\"/>";
        assert_eq!(
            detect_markup_format(odt).unwrap(),
            MarkupFormat::OpenDocument
        );

        let commented = br#"<?xml version="1.0"?><!-- a<b --><w:document xmlns:w="x"/>"#;
        assert_eq!(
            detect_markup_format(commented).unwrap(),
            MarkupFormat::WordprocessingMl
        );

        let doctype = br#"<?xml version="1.0"?><?mso-application progid="Word.Document"?><!DOCTYPE office:document-content [<!ENTITY e "<x>">]><office:document-content/>"#;
        assert_eq!(
            detect_markup_format(doctype).unwrap(),
            MarkupFormat::OpenDocument
        );

        assert!(detect_markup_format(b"<!-- <w:document> never closed").is_err());
        assert!(detect_markup_format(b"<html/>").is_err());
        assert!(detect_markup_format(b"plain text").is_err());
    }
}

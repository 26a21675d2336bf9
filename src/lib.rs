//! Formfields - form-field access over Word and OpenDocument fieldmarks
//!
//! This library exposes the checkbox, dropdown and text-input form fields
//! embedded in a word-processing document through a collection-style API
//! modelled on the legacy macro automation object model.
//!
//! # Features
//!
//! - **Mark model**: documents own an ordered store of named marks; only
//!   form-control marks are visible to the form-field collection
//! - **Collection access**: count, 0-based index, 1-based `Item`,
//!   case-insensitive name lookup and forward enumeration
//! - **DOCX import**: legacy form fields and bookmarks from `word/document.xml`
//! - **ODT import**: fieldmarks and bookmarks from `content.xml`
//!
//! # Example - Enumerating form fields
//!
//! ```rust
//! use std::rc::Rc;
//! use formfields::automation::{AutomationContext, FormFields};
//! use formfields::document::{Document, ImportOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p>
//!   <w:r><w:fldChar w:fldCharType="begin"><w:ffData><w:name w:val="Name"/><w:textInput/></w:ffData></w:fldChar></w:r>
//!   <w:r><w:instrText> FORMTEXT </w:instrText></w:r>
//!   <w:r><w:fldChar w:fldCharType="separate"/></w:r>
//!   <w:r><w:t>Ada</w:t></w:r>
//!   <w:r><w:fldChar w:fldCharType="end"/></w:r>
//! </w:p></w:body></w:document>"#;
//!
//! let doc = Document::from_xml(xml, &ImportOptions::default())?;
//! let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &doc);
//!
//! assert_eq!(fields.count(), 1);
//! for field in &fields {
//!     println!("{} = {}", field.name(), field.result());
//! }
//!
//! if fields.has_by_name("NAME") {
//!     assert_eq!(fields.get_by_name("NAME")?.result(), "Ada");
//! }
//! # Ok(())
//! # }
//! ```

/// Common types shared across the crate
pub mod common;

/// Document and mark model
pub mod document;

/// Automation object model: the form-field collection and its elements
pub mod automation;

/// Office Open XML (.docx) mark import
#[cfg(feature = "ooxml")]
pub mod ooxml;

/// OpenDocument (.odt) mark import
#[cfg(feature = "odf")]
pub mod odf;

// Re-export commonly used types for convenience
pub use automation::{FormField, FormFields};
pub use common::{Error, Result};
pub use document::{Document, Mark, MarkKind, MarkStore};

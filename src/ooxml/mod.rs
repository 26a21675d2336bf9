//! Office Open XML (OOXML) format support.
//!
//! Only the WordprocessingML main document part is read, and only for the
//! marks it carries: legacy form fields and bookmarks.
//!
//! # Example
//!
//! ```rust
//! use formfields::document::ImportOptions;
//! use formfields::ooxml::docx;
//!
//! let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;
//! let store = docx::read_marks(xml, &ImportOptions::default())?;
//! assert!(store.is_empty());
//! # Ok::<(), formfields::common::Error>(())
//! ```
pub mod docx;

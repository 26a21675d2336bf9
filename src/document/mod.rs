//! Document and mark model.
//!
//! This module provides the document side of the form-field collection: the
//! marks a document owns, the ordered store holding them, and the
//! [`MarkHost`] seam through which the automation layer reaches that store.
//!
//! # Architecture
//!
//! - `Mark`: a named mark with a closed [`MarkKind`]
//! - `Fieldmark`: a borrowed view that only exists for form-control marks
//! - `MarkStore`: the marks of one document in storage order
//! - `Document`: a concrete host that may or may not have a store attached
//!
//! # Example
//!
//! ```rust
//! use formfields::document::{CheckBox, Document, Mark, MarkStore, TextInput};
//!
//! let store: MarkStore = [
//!     Mark::check_box("Agree", CheckBox::new(false)),
//!     Mark::bookmark("Intro"),
//!     Mark::text_input("Name", TextInput::new("Ada")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let doc = Document::new(store);
//! assert_eq!(doc.store().map(|s| s.len()), Some(3));
//! ```
mod mark;
mod options;
mod store;
mod types;

pub use mark::{CheckBox, DropDown, Fieldmark, FormData, Mark, MarkKind, TextInput};
pub use options::ImportOptions;
pub use store::MarkStore;
pub use types::FormFieldType;

#[cfg(any(feature = "ooxml", feature = "odf"))]
use crate::common::{Error, Result};
#[cfg(any(feature = "ooxml", feature = "odf"))]
use types::{MarkupFormat, detect_markup_format};

/// Anything that can hand out the mark store of a document.
///
/// Returning `None` means the document, or its mark store, is not reachable
/// (for example because it has not been attached yet). Consumers treat that
/// as an empty collection rather than an error.
pub trait MarkHost {
    /// The mark store, if reachable.
    fn mark_store(&self) -> Option<&MarkStore>;
}

impl MarkHost for MarkStore {
    #[inline]
    fn mark_store(&self) -> Option<&MarkStore> {
        Some(self)
    }
}

impl<T: MarkHost + ?Sized> MarkHost for &T {
    #[inline]
    fn mark_store(&self) -> Option<&MarkStore> {
        (**self).mark_store()
    }
}

/// A document owning an optional mark store.
#[derive(Debug, Clone, Default)]
pub struct Document {
    store: Option<MarkStore>,
}

impl Document {
    /// Create a document with an attached mark store.
    pub fn new(store: MarkStore) -> Self {
        Self { store: Some(store) }
    }

    /// Create a document with no mark store attached.
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Attach a mark store, returning the previous one.
    pub fn attach(&mut self, store: MarkStore) -> Option<MarkStore> {
        self.store.replace(store)
    }

    /// Detach the mark store.
    pub fn detach(&mut self) -> Option<MarkStore> {
        self.store.take()
    }

    /// The attached mark store.
    #[inline]
    pub fn store(&self) -> Option<&MarkStore> {
        self.store.as_ref()
    }

    /// Mutable access to the attached mark store.
    #[inline]
    pub fn store_mut(&mut self) -> Option<&mut MarkStore> {
        self.store.as_mut()
    }

    /// Build a document from a WordprocessingML main document part.
    ///
    /// # Arguments
    ///
    /// * `xml` - The bytes of `word/document.xml`
    /// * `options` - Which non-form marks to keep
    #[cfg(feature = "ooxml")]
    pub fn from_docx_xml(xml: &[u8], options: &ImportOptions) -> Result<Self> {
        crate::ooxml::docx::read_marks(xml, options).map(Self::new)
    }

    /// Build a document from an OpenDocument `content.xml` part.
    ///
    /// # Arguments
    ///
    /// * `xml` - The bytes of `content.xml` (or a flat `office:document`)
    /// * `options` - Which non-form marks to keep
    #[cfg(feature = "odf")]
    pub fn from_odt_content_xml(xml: &[u8], options: &ImportOptions) -> Result<Self> {
        crate::odf::read_marks(xml, options).map(Self::new)
    }

    /// Build a document from either markup dialect, detected from the root
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formfields::document::{Document, ImportOptions};
    ///
    /// let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    ///   <w:body><w:p><w:bookmarkStart w:id="0" w:name="Intro"/></w:p></w:body>
    /// </w:document>"#;
    /// let doc = Document::from_xml(xml, &ImportOptions::default())?;
    /// assert_eq!(doc.store().map(|s| s.len()), Some(1));
    /// # Ok::<(), formfields::common::Error>(())
    /// ```
    #[cfg(any(feature = "ooxml", feature = "odf"))]
    pub fn from_xml(xml: &[u8], options: &ImportOptions) -> Result<Self> {
        match detect_markup_format(xml)? {
            #[cfg(feature = "ooxml")]
            MarkupFormat::WordprocessingMl => Self::from_docx_xml(xml, options),
            #[cfg(feature = "odf")]
            MarkupFormat::OpenDocument => Self::from_odt_content_xml(xml, options),
            #[allow(unreachable_patterns)]
            other => Err(Error::InvalidFormat(format!(
                "Support for {:?} markup is disabled",
                other
            ))),
        }
    }
}

impl MarkHost for Document {
    #[inline]
    fn mark_store(&self) -> Option<&MarkStore> {
        self.store.as_ref()
    }
}

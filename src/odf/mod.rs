//! OpenDocument (ODF) format support.
//!
//! Only the marks of a text document's `content.xml` are read: fieldmarks
//! (`field:fieldmark`, `field:fieldmark-start`/`-end`) and bookmarks. Element
//! names are matched with their conventional prefixes (`text:`, `field:`),
//! the way ODF producers write them.

/// Fieldmark and bookmark extraction
mod fieldmark;

pub use fieldmark::{
    FIELD_TYPE_CHECKBOX, FIELD_TYPE_DROPDOWN, FIELD_TYPE_TEXT, read_marks,
};

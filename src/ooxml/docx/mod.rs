/// Word (.docx) document support.
///
/// This module reads the marks of a `word/document.xml` part:
/// - legacy form fields (`FORMCHECKBOX`, `FORMDROPDOWN`, `FORMTEXT`), whose
///   state lives in the `w:ffData` of the field's `begin` character
/// - bookmarks (`w:bookmarkStart`)
mod fieldmark;

pub use fieldmark::read_marks;

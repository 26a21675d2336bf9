//! Marks embedded in document content.
//!
//! A mark is a named position or range in a document. Bookmarks are marks,
//! and so are fieldmarks: the anchors of interactive form controls. Only the
//! three form-control kinds are visible to the form-field collection; every
//! other kind is carried in the store so that the document order stays
//! intact, but it never occupies an index slot.
use smallvec::SmallVec;

use super::types::FormFieldType;

/// A named mark in a document.
///
/// # Examples
///
/// ```rust
/// use formfields::document::{CheckBox, Mark};
///
/// let mark = Mark::check_box("Agree", CheckBox::new(true));
/// assert_eq!(mark.name(), "Agree");
/// assert!(mark.is_form_field());
///
/// let bookmark = Mark::bookmark("Intro");
/// assert!(!bookmark.is_form_field());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    /// Mark name, compared case-insensitively by lookups
    name: String,
    /// What kind of mark this is
    kind: MarkKind,
}

impl Mark {
    /// Create a new mark.
    ///
    /// # Arguments
    ///
    /// * `name` - The mark name
    /// * `kind` - The mark kind, including any form-control state
    pub fn new(name: impl Into<String>, kind: MarkKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a checkbox fieldmark.
    pub fn check_box(name: impl Into<String>, data: CheckBox) -> Self {
        Self::new(name, MarkKind::CheckBox(data))
    }

    /// Create a dropdown fieldmark.
    pub fn drop_down(name: impl Into<String>, data: DropDown) -> Self {
        Self::new(name, MarkKind::DropDown(data))
    }

    /// Create a text-input fieldmark.
    pub fn text_input(name: impl Into<String>, data: TextInput) -> Self {
        Self::new(name, MarkKind::TextInput(data))
    }

    /// Create a plain bookmark.
    pub fn bookmark(name: impl Into<String>) -> Self {
        Self::new(name, MarkKind::Bookmark)
    }

    /// Get the mark name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the mark kind.
    #[inline]
    pub fn kind(&self) -> &MarkKind {
        &self.kind
    }

    /// Get mutable access to the mark kind, e.g. to toggle a checkbox.
    #[inline]
    pub fn kind_mut(&mut self) -> &mut MarkKind {
        &mut self.kind
    }

    /// Whether this mark is one of the three form-control kinds.
    #[inline]
    pub fn is_form_field(&self) -> bool {
        self.kind.form_field_type().is_some()
    }

    /// View this mark as a fieldmark, if it is a form control.
    #[inline]
    pub fn as_fieldmark(&self) -> Option<Fieldmark<'_>> {
        Fieldmark::from_mark(self)
    }
}

/// The closed set of mark kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkKind {
    /// Checkbox form field
    CheckBox(CheckBox),
    /// Dropdown form field
    DropDown(DropDown),
    /// Text-input form field
    TextInput(TextInput),
    /// Plain bookmark
    Bookmark,
    /// Any other fieldmark, identified by its type string
    /// (e.g. `vnd.oasis.opendocument.field.FORMDATE`)
    Other(String),
}

impl MarkKind {
    /// The form-field type for qualifying kinds, `None` for the rest.
    #[inline]
    pub fn form_field_type(&self) -> Option<FormFieldType> {
        match self {
            MarkKind::CheckBox(_) => Some(FormFieldType::CheckBox),
            MarkKind::DropDown(_) => Some(FormFieldType::DropDown),
            MarkKind::TextInput(_) => Some(FormFieldType::TextInput),
            MarkKind::Bookmark | MarkKind::Other(_) => None,
        }
    }
}

/// State of a checkbox form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckBox {
    /// Current state
    pub checked: bool,
    /// State the field resets to
    pub default_checked: bool,
}

impl CheckBox {
    /// Create a checkbox whose current and default state are both `checked`.
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            default_checked: checked,
        }
    }
}

/// State of a dropdown form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropDown {
    /// List entries in display order
    pub entries: SmallVec<[String; 4]>,
    /// Index of the selected entry
    pub selected: Option<usize>,
}

impl DropDown {
    /// Create a dropdown from its entries with nothing selected.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    /// Select the entry at `index`.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// The selected entry, if the selection points at an existing entry.
    pub fn selected_entry(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }
}

/// State of a text-input form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Text the field starts with
    pub default_text: String,
    /// Text currently shown in the field
    pub result: String,
    /// Maximum number of characters, `None` for unlimited
    pub max_length: Option<u32>,
}

impl TextInput {
    /// Create a text input showing `result`.
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            ..Self::default()
        }
    }
}

/// Typed form-control state borrowed from a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormData<'a> {
    CheckBox(&'a CheckBox),
    DropDown(&'a DropDown),
    TextInput(&'a TextInput),
}

/// A borrowed view of a qualifying mark.
///
/// A `Fieldmark` can only be obtained for checkbox, dropdown and text-input
/// marks, so holding one is proof that the mark is a form control.
#[derive(Debug, Clone, Copy)]
pub struct Fieldmark<'a> {
    mark: &'a Mark,
    data: FormData<'a>,
}

impl<'a> Fieldmark<'a> {
    /// View `mark` as a fieldmark. Returns `None` for bookmarks and other
    /// non-form marks.
    pub fn from_mark(mark: &'a Mark) -> Option<Self> {
        let data = match &mark.kind {
            MarkKind::CheckBox(c) => FormData::CheckBox(c),
            MarkKind::DropDown(d) => FormData::DropDown(d),
            MarkKind::TextInput(t) => FormData::TextInput(t),
            MarkKind::Bookmark | MarkKind::Other(_) => return None,
        };
        Some(Self { mark, data })
    }

    /// The underlying mark.
    #[inline]
    pub fn mark(&self) -> &'a Mark {
        self.mark
    }

    /// The mark name.
    #[inline]
    pub fn name(&self) -> &'a str {
        &self.mark.name
    }

    /// The form-control state.
    #[inline]
    pub fn data(&self) -> FormData<'a> {
        self.data
    }

    /// The form-field type.
    pub fn field_type(&self) -> FormFieldType {
        match self.data {
            FormData::CheckBox(_) => FormFieldType::CheckBox,
            FormData::DropDown(_) => FormFieldType::DropDown,
            FormData::TextInput(_) => FormFieldType::TextInput,
        }
    }

    /// Whether both views refer to the same mark in the same store.
    #[inline]
    pub fn same_mark(&self, other: &Fieldmark<'_>) -> bool {
        std::ptr::eq(self.mark, other.mark)
    }
}

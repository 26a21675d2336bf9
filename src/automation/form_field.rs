//! The form-field object handed out by the collection.

use std::fmt;
use std::rc::Rc;

use super::object::{AutomationContext, AutomationObject};
use crate::document::{
    CheckBox, DropDown, Fieldmark, FormData, FormFieldType, Mark, MarkHost, TextInput,
};

/// A single form field, wrapping one qualifying mark of a document.
///
/// The handle borrows the mark; it lives no longer than the document.
#[derive(Clone)]
pub struct FormField<'d> {
    parent: Option<Rc<dyn AutomationObject>>,
    context: Rc<AutomationContext>,
    document: &'d dyn MarkHost,
    fieldmark: Fieldmark<'d>,
}

impl<'d> FormField<'d> {
    /// Create a handle for a found fieldmark.
    ///
    /// # Arguments
    ///
    /// * `parent` - The object the collection belongs to
    /// * `context` - The execution context
    /// * `document` - The document owning the mark
    /// * `fieldmark` - The mark to wrap
    pub fn new(
        parent: Option<Rc<dyn AutomationObject>>,
        context: Rc<AutomationContext>,
        document: &'d dyn MarkHost,
        fieldmark: Fieldmark<'d>,
    ) -> Self {
        Self {
            parent,
            context,
            document,
            fieldmark,
        }
    }

    /// The field name.
    #[inline]
    pub fn name(&self) -> &'d str {
        self.fieldmark.name()
    }

    /// The field type.
    #[inline]
    pub fn field_type(&self) -> FormFieldType {
        self.fieldmark.field_type()
    }

    /// The displayed value.
    ///
    /// A checkbox reports `"1"` when checked and `"0"` otherwise, a dropdown
    /// its selected entry (empty without a selection) and a text input its
    /// current text.
    pub fn result(&self) -> String {
        match self.fieldmark.data() {
            FormData::CheckBox(cb) => String::from(if cb.checked { "1" } else { "0" }),
            FormData::DropDown(dd) => dd.selected_entry().unwrap_or_default().to_string(),
            FormData::TextInput(text) => text.result.clone(),
        }
    }

    /// Checkbox state, for checkbox fields.
    pub fn check_box(&self) -> Option<&'d CheckBox> {
        match self.fieldmark.data() {
            FormData::CheckBox(cb) => Some(cb),
            _ => None,
        }
    }

    /// Dropdown state, for dropdown fields.
    pub fn drop_down(&self) -> Option<&'d DropDown> {
        match self.fieldmark.data() {
            FormData::DropDown(dd) => Some(dd),
            _ => None,
        }
    }

    /// Text-input state, for text-input fields.
    pub fn text_input(&self) -> Option<&'d TextInput> {
        match self.fieldmark.data() {
            FormData::TextInput(text) => Some(text),
            _ => None,
        }
    }

    /// The wrapped fieldmark.
    #[inline]
    pub fn fieldmark(&self) -> Fieldmark<'d> {
        self.fieldmark
    }

    /// The wrapped mark.
    #[inline]
    pub fn mark(&self) -> &'d Mark {
        self.fieldmark.mark()
    }

    /// The parent object.
    #[inline]
    pub fn parent(&self) -> Option<&Rc<dyn AutomationObject>> {
        self.parent.as_ref()
    }

    /// The execution context.
    #[inline]
    pub fn context(&self) -> &AutomationContext {
        &self.context
    }

    /// The document owning the mark.
    #[inline]
    pub fn document(&self) -> &'d dyn MarkHost {
        self.document
    }
}

impl AutomationObject for FormField<'_> {
    fn service_impl_name(&self) -> &'static str {
        "SwVbaFormField"
    }

    fn service_names(&self) -> &'static [&'static str] {
        &["ooo.vba.word.FormField"]
    }
}

impl fmt::Debug for FormField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name())
            .field("type", &self.field_type())
            .field("application", &self.context.application_name())
            .finish_non_exhaustive()
    }
}

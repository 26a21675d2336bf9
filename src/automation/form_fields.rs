//! The `FormFields` collection object of the automation object model.

use std::rc::Rc;

use tracing::info;

use super::collection::FormFieldCollection;
use super::enumeration::FormFieldsEnumeration;
use super::form_field::FormField;
use super::object::{AutomationContext, AutomationObject};
use crate::common::{Error, Result};
use crate::document::MarkHost;

/// Service name under which the collection is registered.
pub const SERVICE_NAME: &str = "ooo.vba.word.FormFields";

/// Implementation name of the collection.
pub const IMPLEMENTATION_NAME: &str = "SwVbaFormFields";

/// Key accepted by [`FormFields::item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKey<'a> {
    /// 1-based position, as macro code counts
    Index(usize),
    /// Field name, compared ignoring ASCII case
    Name(&'a str),
}

impl From<usize> for ItemKey<'_> {
    fn from(index: usize) -> Self {
        ItemKey::Index(index)
    }
}

impl<'a> From<&'a str> for ItemKey<'a> {
    fn from(name: &'a str) -> Self {
        ItemKey::Name(name)
    }
}

/// The form fields of a document.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use formfields::automation::{AutomationContext, FormFields, ItemKey};
/// use formfields::document::{CheckBox, Document, Mark, MarkStore, TextInput};
///
/// let doc = Document::new(
///     [
///         Mark::check_box("Agree", CheckBox::new(true)),
///         Mark::bookmark("Intro"),
///         Mark::text_input("Name", TextInput::new("Ada")),
///     ]
///     .into_iter()
///     .collect::<MarkStore>(),
/// );
///
/// let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &doc);
/// assert_eq!(fields.count(), 2);
/// assert_eq!(fields.item(ItemKey::Name("name"))?.result(), "Ada");
/// assert_eq!(fields.item(ItemKey::Index(1))?.name(), "Agree");
///
/// for field in &fields {
///     println!("{}: {}", field.name(), field.result());
/// }
/// # Ok::<(), formfields::common::Error>(())
/// ```
pub struct FormFields<'d> {
    collection: FormFieldCollection<'d>,
}

impl<'d> FormFields<'d> {
    /// Create the collection object for `document`.
    ///
    /// # Arguments
    ///
    /// * `parent` - The owning object, handed on to every field
    /// * `context` - The execution context
    /// * `document` - The document whose form fields are exposed
    pub fn new(
        parent: Option<Rc<dyn AutomationObject>>,
        context: Rc<AutomationContext>,
        document: &'d dyn MarkHost,
    ) -> Self {
        Self {
            collection: FormFieldCollection::new(parent, context, document),
        }
    }

    /// The underlying collection access.
    #[inline]
    pub fn collection(&self) -> &FormFieldCollection<'d> {
        &self.collection
    }

    /// Number of form fields.
    #[inline]
    pub fn count(&self) -> usize {
        self.collection.count()
    }

    /// Whether the document has any form field.
    #[inline]
    pub fn has_elements(&self) -> bool {
        self.collection.has_elements()
    }

    /// The form field at the 0-based position `index`.
    #[inline]
    pub fn get_by_index(&self, index: usize) -> Result<FormField<'d>> {
        self.collection.get_by_index(index)
    }

    /// Whether a form field with this name exists.
    #[inline]
    pub fn has_by_name(&self, name: &str) -> bool {
        self.collection.has_by_name(name)
    }

    /// The form field with this name.
    #[inline]
    pub fn get_by_name(&self, name: &str) -> Result<FormField<'d>> {
        self.collection.get_by_name(name)
    }

    /// The form field with this name, if any.
    #[inline]
    pub fn find(&self, name: &str) -> Option<FormField<'d>> {
        self.collection.find(name)
    }

    /// Names of all form fields, in index order.
    #[inline]
    pub fn element_names(&self) -> Vec<String> {
        self.collection.element_names()
    }

    /// Interface name of the elements.
    #[inline]
    pub fn element_type(&self) -> &'static str {
        self.collection.element_type()
    }

    /// The object-model `Item` accessor: a 1-based position or a name.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] for position 0 or past the end, and
    /// [`Error::NoSuchElement`] for an unknown name.
    pub fn item(&self, key: ItemKey<'_>) -> Result<FormField<'d>> {
        match key {
            ItemKey::Index(position) => match position.checked_sub(1) {
                Some(index) => self.collection.get_by_index(index).map_err(|err| match err {
                    Error::IndexOutOfBounds { count, .. } => Error::IndexOutOfBounds {
                        index: position,
                        count,
                    },
                    other => other,
                }),
                None => Err(Error::IndexOutOfBounds {
                    index: position,
                    count: self.collection.count(),
                }),
            },
            ItemKey::Name(name) => self.collection.get_by_name(name),
        }
    }

    /// A fresh forward enumeration.
    #[inline]
    pub fn create_enumeration(&self) -> FormFieldsEnumeration<'_, 'd> {
        self.collection.create_enumeration()
    }

    /// Iterate over all form fields.
    #[inline]
    pub fn iter(&self) -> FormFieldsEnumeration<'_, 'd> {
        self.collection.create_enumeration()
    }

    /// Field shading. Not implemented; always `false`.
    pub fn shaded(&self) -> bool {
        info!("FormFields::shaded stub");
        false
    }

    /// Set field shading. Not implemented; the value is ignored.
    pub fn set_shaded(&self, _shaded: bool) {
        info!("FormFields::set_shaded stub");
    }
}

impl AutomationObject for FormFields<'_> {
    fn service_impl_name(&self) -> &'static str {
        IMPLEMENTATION_NAME
    }

    fn service_names(&self) -> &'static [&'static str] {
        &[SERVICE_NAME]
    }
}

impl<'c, 'd> IntoIterator for &'c FormFields<'d> {
    type Item = FormField<'d>;
    type IntoIter = FormFieldsEnumeration<'c, 'd>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

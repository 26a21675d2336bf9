//! Name-, index- and enumeration-based access to a document's form fields.
//!
//! [`FormFieldCollection`] is the data source behind the public
//! [`FormFields`](super::FormFields) object. Every view it offers is backed
//! by the [`FieldmarkLocator`], so count, positions, names and enumeration
//! always agree with the current state of the mark store.
//!
//! # Single-threaded use
//!
//! The collection remembers the last mark it found so that a
//! [`has_by_name`](FormFieldCollection::has_by_name) /
//! [`get_by_name`](FormFieldCollection::get_by_name) pair does not walk the
//! store twice. The slot is plain per-instance state; the collection is
//! neither `Sync` nor meant to serve interleaved lookups.

use std::cell::Cell;
use std::rc::Rc;

use super::enumeration::FormFieldsEnumeration;
use super::form_field::FormField;
use super::locator::{FieldmarkLocator, Lookup};
use super::object::{AutomationContext, AutomationObject};
use crate::common::{Error, Result};
use crate::document::{Fieldmark, MarkHost};

/// Interface name every element of the collection implements.
pub const FORM_FIELD_INTERFACE: &str = "ooo.vba.word.XFormField";

/// Collection access over the form fields of one document.
pub struct FormFieldCollection<'d> {
    parent: Option<Rc<dyn AutomationObject>>,
    context: Rc<AutomationContext>,
    document: &'d dyn MarkHost,
    /// Last mark found by `get_by_index` or `has_by_name`
    cache: Cell<Option<Fieldmark<'d>>>,
}

impl<'d> FormFieldCollection<'d> {
    /// Create a collection over `document`.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent handed to every field created by the collection
    /// * `context` - The execution context
    /// * `document` - The document whose marks are exposed; borrowed for the
    ///   lifetime of the collection
    pub fn new(
        parent: Option<Rc<dyn AutomationObject>>,
        context: Rc<AutomationContext>,
        document: &'d dyn MarkHost,
    ) -> Self {
        Self {
            parent,
            context,
            document,
            cache: Cell::new(None),
        }
    }

    #[inline]
    fn locator(&self) -> FieldmarkLocator<'d> {
        FieldmarkLocator::new(self.document)
    }

    fn make_field(&self, fieldmark: Fieldmark<'d>) -> FormField<'d> {
        FormField::new(
            self.parent.clone(),
            Rc::clone(&self.context),
            self.document,
            fieldmark,
        )
    }

    /// Number of form fields. An unreachable mark store counts as empty.
    pub fn count(&self) -> usize {
        self.locator().totals(false).map_or(0, |totals| totals.count)
    }

    /// Whether the document has any form field.
    pub fn has_elements(&self) -> bool {
        self.count() != 0
    }

    /// The form field at the 0-based position `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` is not below [`count`](Self::count).
    pub fn get_by_index(&self, index: usize) -> Result<FormField<'d>> {
        let lookup = self.locator().by_index(index);
        let hit = lookup.and_then(Lookup::hit);
        self.cache.set(hit.map(|hit| hit.field));

        match (hit, lookup) {
            (Some(hit), _) => Ok(self.make_field(hit.field)),
            (None, Some(Lookup::Miss { count })) => Err(Error::IndexOutOfBounds { index, count }),
            (None, _) => Err(Error::IndexOutOfBounds { index, count: 0 }),
        }
    }

    /// Whether a form field with this name exists, ignoring ASCII case.
    ///
    /// The found mark (or its absence) is remembered for a following
    /// [`get_by_name`](Self::get_by_name).
    pub fn has_by_name(&self, name: &str) -> bool {
        let found = self
            .locator()
            .by_name(name)
            .and_then(Lookup::hit)
            .map(|hit| hit.field);
        self.cache.set(found);
        found.is_some()
    }

    /// The form field with this name, ignoring ASCII case.
    ///
    /// Performs the existence check itself and builds the field from the
    /// mark that check found.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] when no form field has this name.
    pub fn get_by_name(&self, name: &str) -> Result<FormField<'d>> {
        if !self.has_by_name(name) {
            return Err(Error::NoSuchElement(name.to_string()));
        }
        self.cache
            .get()
            .map(|fieldmark| self.make_field(fieldmark))
            .ok_or_else(|| Error::NoSuchElement(name.to_string()))
    }

    /// The form field with this name, without touching the remembered mark.
    pub fn find(&self, name: &str) -> Option<FormField<'d>> {
        self.locator()
            .by_name(name)
            .and_then(Lookup::hit)
            .map(|hit| self.make_field(hit.field))
    }

    /// The last mark found by [`get_by_index`](Self::get_by_index) or
    /// [`has_by_name`](Self::has_by_name).
    #[inline]
    pub fn last_found(&self) -> Option<Fieldmark<'d>> {
        self.cache.get()
    }

    /// Names of all form fields, in index order.
    pub fn element_names(&self) -> Vec<String> {
        self.locator()
            .totals(true)
            .and_then(|totals| totals.names)
            .unwrap_or_default()
    }

    /// Interface name of the elements.
    #[inline]
    pub fn element_type(&self) -> &'static str {
        FORM_FIELD_INTERFACE
    }

    /// A fresh forward enumeration starting at the first field.
    pub fn create_enumeration(&self) -> FormFieldsEnumeration<'_, 'd> {
        FormFieldsEnumeration::new(self)
    }
}

impl<'c, 'd> IntoIterator for &'c FormFieldCollection<'d> {
    type Item = FormField<'d>;
    type IntoIter = FormFieldsEnumeration<'c, 'd>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_enumeration()
    }
}

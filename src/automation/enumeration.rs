//! Forward enumeration over a form-field collection.

use super::collection::FormFieldCollection;
use super::form_field::FormField;
use crate::common::{Error, Result};

/// A forward cursor over the positions `0..count` of a collection.
///
/// Each step fetches the next field by index, so the enumeration holds no
/// buffer beyond its position. Asking the collection for a new enumeration
/// starts over from the first field.
///
/// Besides the [`has_more_elements`](Self::has_more_elements) /
/// [`next_element`](Self::next_element) protocol of the object model, the
/// enumeration is a regular [`Iterator`].
pub struct FormFieldsEnumeration<'c, 'd> {
    collection: &'c FormFieldCollection<'d>,
    index: usize,
}

impl<'c, 'd> FormFieldsEnumeration<'c, 'd> {
    pub(crate) fn new(collection: &'c FormFieldCollection<'d>) -> Self {
        Self {
            collection,
            index: 0,
        }
    }

    /// Whether another field follows.
    pub fn has_more_elements(&self) -> bool {
        self.index < self.collection.count()
    }

    /// The next field.
    ///
    /// # Errors
    ///
    /// [`Error::NoMoreElements`] once every field has been returned.
    pub fn next_element(&mut self) -> Result<FormField<'d>> {
        if !self.has_more_elements() {
            return Err(Error::NoMoreElements);
        }
        let field = self.collection.get_by_index(self.index)?;
        self.index += 1;
        Ok(field)
    }

    /// Rewind to the first field.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl<'d> Iterator for FormFieldsEnumeration<'_, 'd> {
    type Item = FormField<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.collection.get_by_index(self.index).ok()?;
        self.index += 1;
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::AutomationContext;
    use crate::document::{CheckBox, DropDown, Mark, MarkStore};
    use std::rc::Rc;

    fn store() -> MarkStore {
        [
            Mark::bookmark("Top"),
            Mark::check_box("A", CheckBox::default()),
            Mark::drop_down("B", DropDown::new(["x"])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_next_element_protocol() {
        let store = store();
        let fields = FormFieldCollection::new(None, Rc::new(AutomationContext::default()), &store);
        let mut en = fields.create_enumeration();

        assert!(en.has_more_elements());
        assert_eq!(en.next_element().unwrap().name(), "A");
        assert!(en.has_more_elements());
        assert_eq!(en.next_element().unwrap().name(), "B");
        assert!(!en.has_more_elements());
        assert_eq!(en.next_element().unwrap_err(), Error::NoMoreElements);

        en.reset();
        assert_eq!(en.next_element().unwrap().name(), "A");
    }

    #[test]
    fn test_iterator_is_restartable() {
        let store = store();
        let fields = FormFieldCollection::new(None, Rc::new(AutomationContext::default()), &store);

        let first: Vec<_> = fields.create_enumeration().map(|f| f.name()).collect();
        let second: Vec<_> = (&fields).into_iter().map(|f| f.name()).collect();
        assert_eq!(first, ["A", "B"]);
        assert_eq!(first, second);
    }
}

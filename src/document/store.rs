//! Ordered storage for the marks of one document.

use super::mark::Mark;

/// The marks of a document in storage order.
///
/// Storage order is the order in which the marks start in the document
/// content. Lookups walk the store front to back, so positions reported by
/// the form-field collection follow this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkStore {
    marks: Vec<Mark>,
}

impl MarkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mark at the end of the store.
    #[inline]
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Insert a mark at `index`, shifting later marks back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, mark: Mark) {
        self.marks.insert(index, mark);
    }

    /// Number of marks of any kind.
    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the store holds no marks at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate over all marks in storage order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Mark> {
        self.marks.iter()
    }

    /// Mutable access to a mark by its raw storage position.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Mark> {
        self.marks.get_mut(index)
    }

    /// All marks as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Mark] {
        &self.marks
    }
}

impl FromIterator<Mark> for MarkStore {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MarkStore {
    type Item = &'a Mark;
    type IntoIter = std::slice::Iter<'a, Mark>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.iter()
    }
}

impl Extend<Mark> for MarkStore {
    fn extend<I: IntoIterator<Item = Mark>>(&mut self, iter: I) {
        self.marks.extend(iter);
    }
}

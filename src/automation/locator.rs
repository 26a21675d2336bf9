//! Fieldmark lookup over a document's mark store.
//!
//! The locator walks the marks of a document in storage order and only looks
//! at qualifying marks (checkbox, dropdown and text-input fieldmarks). These
//! form the address space for every positional and counting query: other
//! marks never occupy an index slot.
//!
//! Three query shapes are supported:
//!
//! - by name: the first qualifying mark whose name matches, compared ASCII
//!   case-insensitively, together with its position
//! - by index: the qualifying mark at a 0-based position
//! - totals: the number of qualifying marks, optionally with their names
//!
//! A lookup that finds nothing reports the total count instead. When the
//! document's mark store is unreachable every query returns `None`.
//!
//! # Examples
//!
//! ```rust
//! use formfields::automation::{FieldmarkLocator, Lookup};
//! use formfields::document::{CheckBox, Mark, MarkStore, TextInput};
//!
//! let store: MarkStore = [
//!     Mark::check_box("A", CheckBox::new(false)),
//!     Mark::bookmark("B"),
//!     Mark::text_input("C", TextInput::default()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let locator = FieldmarkLocator::new(&store);
//! assert_eq!(locator.totals(false).map(|t| t.count), Some(2));
//!
//! match locator.by_name("c") {
//!     Some(Lookup::Hit(hit)) => assert_eq!(hit.index, 1),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(matches!(locator.by_name("B"), Some(Lookup::Miss { count: 2 })));
//! ```

use crate::document::{Fieldmark, MarkHost};
use tracing::debug;

/// A lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'q> {
    /// Find the first qualifying mark with this name
    ByName(&'q str),
    /// Find the qualifying mark at this 0-based position
    ByIndex(usize),
    /// Count the qualifying marks, optionally listing their names
    Totals { with_names: bool },
}

/// A qualifying mark found by a lookup.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'d> {
    /// Position among the qualifying marks
    pub index: usize,
    /// The mark itself
    pub field: Fieldmark<'d>,
}

/// Outcome of a name or index lookup.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'d> {
    /// A qualifying mark matched
    Hit(Hit<'d>),
    /// Nothing matched; `count` is the number of qualifying marks
    Miss { count: usize },
}

impl<'d> Lookup<'d> {
    /// The matched mark, if any.
    #[inline]
    pub fn hit(self) -> Option<Hit<'d>> {
        match self {
            Lookup::Hit(hit) => Some(hit),
            Lookup::Miss { .. } => None,
        }
    }
}

/// Outcome of a totals query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    /// Number of qualifying marks
    pub count: usize,
    /// Names of the qualifying marks in storage order, when requested
    pub names: Option<Vec<String>>,
}

/// Outcome of [`FieldmarkLocator::locate`].
#[derive(Debug, Clone)]
pub enum Located<'d> {
    /// Result of a name or index query
    Lookup(Lookup<'d>),
    /// Result of a totals query
    Totals(Totals),
}

/// What a single pass over the store is looking for.
#[derive(Debug, Clone, Copy)]
enum Target<'q> {
    Name(&'q str),
    Index(usize),
    Nothing,
}

/// Stateless lookup over the marks of one document.
#[derive(Clone, Copy)]
pub struct FieldmarkLocator<'d> {
    host: &'d dyn MarkHost,
}

impl<'d> FieldmarkLocator<'d> {
    /// Create a locator over the given document.
    pub fn new(host: &'d dyn MarkHost) -> Self {
        Self { host }
    }

    /// Run a query of any shape.
    ///
    /// Returns `None` when the mark store is unreachable.
    pub fn locate(&self, query: Query<'_>) -> Option<Located<'d>> {
        match query {
            Query::ByName(name) => self.by_name(name).map(Located::Lookup),
            Query::ByIndex(index) => self.by_index(index).map(Located::Lookup),
            Query::Totals { with_names } => self.totals(with_names).map(Located::Totals),
        }
    }

    /// Find the first qualifying mark whose name equals `name`, ignoring
    /// ASCII case. An empty name matches nothing.
    ///
    /// The walk stops at the first match.
    pub fn by_name(&self, name: &str) -> Option<Lookup<'d>> {
        self.scan(Target::Name(name), None)
    }

    /// Find the qualifying mark at the 0-based position `index`.
    pub fn by_index(&self, index: usize) -> Option<Lookup<'d>> {
        self.scan(Target::Index(index), None)
    }

    /// Count the qualifying marks and, if `with_names` is set, collect their
    /// names in storage order.
    pub fn totals(&self, with_names: bool) -> Option<Totals> {
        let mut names = with_names.then(Vec::new);
        let count = match self.scan(Target::Nothing, names.as_mut())? {
            Lookup::Miss { count } => count,
            // A pass without a target never matches
            Lookup::Hit(hit) => hit.index,
        };
        Some(Totals { count, names })
    }

    fn scan(&self, target: Target<'_>, mut names: Option<&mut Vec<String>>) -> Option<Lookup<'d>> {
        let Some(store) = self.host.mark_store() else {
            debug!(?target, "mark store unreachable");
            return None;
        };

        let mut counter = 0usize;
        for field in store.iter().filter_map(Fieldmark::from_mark) {
            let matched = match target {
                Target::Name(name) => !name.is_empty() && field.name().eq_ignore_ascii_case(name),
                Target::Index(index) => counter == index,
                Target::Nothing => false,
            };
            if matched {
                debug!(?target, index = counter, "fieldmark found");
                return Some(Lookup::Hit(Hit {
                    index: counter,
                    field,
                }));
            }

            counter += 1;
            if let Some(names) = names.as_deref_mut() {
                names.push(field.name().to_string());
            }
        }

        debug!(?target, count = counter, "no fieldmark matched");
        Some(Lookup::Miss { count: counter })
    }
}

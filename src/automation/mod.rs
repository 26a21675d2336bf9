//! Automation object model for form fields.
//!
//! This module exposes the form fields of a document the way legacy macro
//! code expects them: a `FormFields` collection that can be counted,
//! indexed by position, looked up by name and enumerated, and that hands out
//! one `FormField` object per field.
//!
//! # Architecture
//!
//! - `FieldmarkLocator`: stateless lookup over the qualifying marks of a
//!   document (by name, by position, or totals)
//! - `FormFieldCollection`: count/index/name/enumeration access built on the
//!   locator, remembering the last mark it found
//! - `FormFields`: the registered collection object, adding 1-based `Item`
//!   access, service names and the shading stub
//! - `FormField`: the handle for one field
//!
//! Everything here is single-threaded: objects share their parent and
//! context through `Rc` and the collection keeps its remembered mark in a
//! `Cell`.

mod collection;
mod enumeration;
mod form_field;
mod form_fields;
mod locator;
mod object;

pub use collection::{FORM_FIELD_INTERFACE, FormFieldCollection};
pub use enumeration::FormFieldsEnumeration;
pub use form_field::FormField;
pub use form_fields::{FormFields, IMPLEMENTATION_NAME, ItemKey, SERVICE_NAME};
pub use locator::{FieldmarkLocator, Hit, Located, Lookup, Query, Totals};
pub use object::{AutomationContext, AutomationObject};

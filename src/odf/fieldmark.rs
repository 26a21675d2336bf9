//! Fieldmark elements for ODF documents.
//!
//! Form controls are fieldmarks with a well-known `field:type`. Checkboxes
//! and dropdowns are point marks; their state lives in `field:param`
//! children:
//!
//! ```xml
//! <field:fieldmark text:name="Check1" field:type="vnd.oasis.opendocument.field.FORMCHECKBOX">
//!   <field:param field:name="Checkbox_Checked" field:value="true"/>
//! </field:fieldmark>
//! ```
//!
//! Text inputs span a range, and the text between `field:fieldmark-start`
//! and `field:fieldmark-end` is what the field shows. Ranges may nest; text
//! inside an inner range also belongs to every range enclosing it.

use crate::common::xml::{attr_value, parse_xml_bool, resolve_entity};
use crate::common::{Error, Result};
use crate::document::{
    CheckBox, DropDown, FormFieldType, ImportOptions, Mark, MarkKind, MarkStore, TextInput,
};
use phf::phf_map;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Field type of a checkbox fieldmark
pub const FIELD_TYPE_CHECKBOX: &str = "vnd.oasis.opendocument.field.FORMCHECKBOX";
/// Field type of a dropdown fieldmark
pub const FIELD_TYPE_DROPDOWN: &str = "vnd.oasis.opendocument.field.FORMDROPDOWN";
/// Field type of a text-input fieldmark
pub const FIELD_TYPE_TEXT: &str = "vnd.oasis.opendocument.field.FORMTEXT";

static FORM_FIELD_TYPES: phf::Map<&'static str, FormFieldType> = phf_map! {
    "vnd.oasis.opendocument.field.FORMCHECKBOX" => FormFieldType::CheckBox,
    "vnd.oasis.opendocument.field.FORMDROPDOWN" => FormFieldType::DropDown,
    "vnd.oasis.opendocument.field.FORMTEXT" => FormFieldType::TextInput,
};

/// Parameter names carrying form-control state
const PARAM_CHECKED: &str = "Checkbox_Checked";
const PARAM_LIST_ENTRY: &str = "Dropdown_ListEntry";
const PARAM_SELECTED: &str = "Dropdown_Selected";

/// Upper bound for the spaces one `text:s` element expands to
const MAX_SPACE_RUN: usize = 1024;

/// A fieldmark whose element (and, for ranges, whose end) has not been seen
/// yet.
#[derive(Debug)]
struct OpenFieldmark {
    slot: usize,
    name: String,
    field_type: String,
    checked: bool,
    entries: SmallVec<[String; 4]>,
    selected: Option<usize>,
    text: String,
}

impl OpenFieldmark {
    fn into_mark(self) -> Mark {
        let kind = match FORM_FIELD_TYPES.get(self.field_type.as_str()) {
            Some(FormFieldType::CheckBox) => MarkKind::CheckBox(CheckBox::new(self.checked)),
            Some(FormFieldType::DropDown) => MarkKind::DropDown(DropDown {
                entries: self.entries,
                selected: self.selected,
            }),
            Some(FormFieldType::TextInput) => MarkKind::TextInput(TextInput::new(self.text)),
            None => {
                debug!(field_type = %self.field_type, "non-form fieldmark");
                MarkKind::Other(self.field_type)
            },
        };
        Mark::new(self.name, kind)
    }
}

/// Extract all marks from an ODF `content.xml`.
///
/// Marks are stored in the order in which they start in the document.
///
/// # Errors
///
/// Returns [`Error::XmlError`] for malformed XML and
/// [`Error::InvalidFormat`] for a fieldmark without a `text:name`.
///
/// # Examples
///
/// ```rust
/// use formfields::document::{ImportOptions, MarkKind};
/// use formfields::odf::read_marks;
///
/// let xml = br#"<office:document-content><office:body><office:text><text:p>
///   <field:fieldmark text:name="Agree" field:type="vnd.oasis.opendocument.field.FORMCHECKBOX">
///     <field:param field:name="Checkbox_Checked" field:value="true"/>
///   </field:fieldmark>
/// </text:p></office:text></office:body></office:document-content>"#;
///
/// let store = read_marks(xml, &ImportOptions::default())?;
/// let mark = store.iter().next().unwrap();
/// assert_eq!(mark.name(), "Agree");
/// assert!(matches!(mark.kind(), MarkKind::CheckBox(cb) if cb.checked));
/// # Ok::<(), formfields::common::Error>(())
/// ```
pub fn read_marks(xml_content: &[u8], options: &ImportOptions) -> Result<MarkStore> {
    let mut reader = Reader::from_reader(xml_content);
    reader.config_mut().trim_text(false);

    let mut scanner = Scanner::new(options);
    let mut buf = Vec::with_capacity(512);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => scanner.start(&e, false)?,
            Ok(Event::Empty(e)) => scanner.start(&e, true)?,
            Ok(Event::Text(e)) => scanner.text(&String::from_utf8_lossy(e.as_ref())),
            Ok(Event::GeneralRef(e)) => {
                if let Some(ch) = resolve_entity(&e) {
                    scanner.text(ch.encode_utf8(&mut [0; 4]));
                }
            },
            Ok(Event::End(e)) => scanner.end(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {},
        }
        buf.clear();
    }

    Ok(scanner.finish())
}

/// Event-driven state of one pass over `content.xml`.
struct Scanner<'o> {
    options: &'o ImportOptions,
    store: MarkStore,
    /// Point fieldmark whose element is still open
    point: Option<OpenFieldmark>,
    /// Range fieldmarks waiting for their end, innermost last
    ranges: Vec<OpenFieldmark>,
    /// Whether the innermost range's start element is still open
    in_range_start: bool,
}

impl<'o> Scanner<'o> {
    fn new(options: &'o ImportOptions) -> Self {
        Self {
            options,
            store: MarkStore::new(),
            point: None,
            ranges: Vec::new(),
            in_range_start: false,
        }
    }

    fn start(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<()> {
        match e.name().as_ref() {
            b"text:bookmark" | b"text:bookmark-start" => {
                let name = attribute(e, b"text:name").unwrap_or_default();
                if self.options.keeps_bookmark(&name) {
                    self.store.push(Mark::bookmark(name));
                } else {
                    debug!(bookmark = %name, "skipping bookmark");
                }
            },
            b"field:fieldmark" => {
                let mark = self.open(e)?;
                if empty {
                    self.store.push(mark.into_mark());
                } else {
                    self.point = Some(mark);
                }
            },
            b"field:fieldmark-start" => {
                let mark = self.open(e)?;
                self.ranges.push(mark);
                self.in_range_start = !empty;
            },
            b"field:fieldmark-end" => match self.ranges.pop() {
                Some(mark) => self.close(mark),
                None => warn!("fieldmark end without a matching start"),
            },
            b"field:param" => self.param(e),
            b"text:s" => {
                let count = attribute(e, b"text:c")
                    .and_then(|c| c.trim().parse::<usize>().ok())
                    .unwrap_or(1);
                self.spaces(count);
            },
            b"text:tab" => self.text("\t"),
            b"text:line-break" => self.text("\n"),
            _ => {},
        }
        Ok(())
    }

    fn open(&self, e: &BytesStart<'_>) -> Result<OpenFieldmark> {
        let name = attribute(e, b"text:name")
            .ok_or_else(|| Error::InvalidFormat("Fieldmark without text:name".to_string()))?;
        Ok(OpenFieldmark {
            slot: self.store.len(),
            name,
            field_type: attribute(e, b"field:type").unwrap_or_default(),
            checked: false,
            entries: SmallVec::new(),
            selected: None,
            text: String::new(),
        })
    }

    fn param(&mut self, e: &BytesStart<'_>) {
        let target = match (&mut self.point, self.in_range_start) {
            (Some(point), _) => point,
            (None, true) => match self.ranges.last_mut() {
                Some(range) => range,
                None => return,
            },
            (None, false) => return,
        };

        let Some(name) = attribute(e, b"field:name") else {
            return;
        };
        let value = attribute(e, b"field:value").unwrap_or_default();
        match name.as_str() {
            PARAM_CHECKED => target.checked = parse_xml_bool(value.as_bytes()),
            PARAM_LIST_ENTRY => target.entries.push(value),
            PARAM_SELECTED => target.selected = value.trim().parse().ok(),
            _ => {},
        }
    }

    /// Whether text currently lands in an open range.
    #[inline]
    fn collects_text(&self) -> bool {
        !self.in_range_start && !self.ranges.is_empty()
    }

    fn text(&mut self, text: &str) {
        if !self.collects_text() {
            return;
        }
        for range in &mut self.ranges {
            range.text.push_str(text);
        }
    }

    fn spaces(&mut self, count: usize) {
        if !self.collects_text() {
            return;
        }
        if count > MAX_SPACE_RUN {
            warn!(count, "clamping text:s space run");
        }
        let count = count.min(MAX_SPACE_RUN);
        for range in &mut self.ranges {
            range.text.extend(std::iter::repeat_n(' ', count));
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"field:fieldmark" => {
                if let Some(mark) = self.point.take() {
                    self.store.push(mark.into_mark());
                }
            },
            b"field:fieldmark-start" => self.in_range_start = false,
            _ => {},
        }
    }

    /// Insert a finished fieldmark at the position where it started.
    fn close(&mut self, mark: OpenFieldmark) {
        let slot = mark.slot.min(self.store.len());
        self.store.insert(slot, mark.into_mark());
    }

    fn finish(mut self) -> MarkStore {
        if let Some(mark) = self.point.take() {
            self.store.push(mark.into_mark());
        }
        while let Some(mark) = self.ranges.pop() {
            warn!(name = %mark.name, "fieldmark without end");
            self.close(mark);
        }
        self.store
    }
}

/// Value of the attribute with the given qualified name.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| attr_value(&attr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(body: &str) -> Vec<u8> {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:field="urn:openoffice:names:experimental:ooo-ms-interop:xmlns:field:1.0"><office:body><office:text><text:p>{body}</text:p></office:text></office:body></office:document-content>"#
        )
        .into_bytes()
    }

    #[test]
    fn test_checkbox_and_dropdown_params() {
        let xml = wrap(
            r#"<field:fieldmark text:name="Check1" field:type="vnd.oasis.opendocument.field.FORMCHECKBOX"><field:param field:name="Checkbox_Checked" field:value="true"/></field:fieldmark><field:fieldmark text:name="Colour" field:type="vnd.oasis.opendocument.field.FORMDROPDOWN"><field:param field:name="Dropdown_ListEntry" field:value="Red"/><field:param field:name="Dropdown_ListEntry" field:value="Green"/><field:param field:name="Dropdown_Selected" field:value="1"/></field:fieldmark>"#,
        );
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        let marks: Vec<_> = store.iter().collect();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].kind(), &MarkKind::CheckBox(CheckBox::new(true)));
        let MarkKind::DropDown(dd) = marks[1].kind() else {
            panic!("expected dropdown");
        };
        assert_eq!(dd.selected_entry(), Some("Green"));
    }

    #[test]
    fn test_text_range_collects_text() {
        let xml = wrap(
            r#"<field:fieldmark-start text:name="Text1" field:type="vnd.oasis.opendocument.field.FORMTEXT"/>Jane<text:s text:c="2"/>Doe &amp; Co<field:fieldmark-end/>"#,
        );
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        let mark = store.iter().next().unwrap();
        assert_eq!(mark.name(), "Text1");
        assert_eq!(mark.kind(), &MarkKind::TextInput(TextInput::new("Jane  Doe & Co")));
    }

    #[test]
    fn test_range_keeps_start_position() {
        let xml = wrap(
            r#"<text:bookmark text:name="A"/><field:fieldmark-start text:name="T" field:type="vnd.oasis.opendocument.field.FORMTEXT"/>x<text:bookmark text:name="B"/>y<field:fieldmark-end/><text:bookmark-start text:name="C"/>z<text:bookmark-end text:name="C"/>"#,
        );
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        let names: Vec<_> = store.iter().map(Mark::name).collect();
        assert_eq!(names, ["A", "T", "B", "C"]);
    }

    #[test]
    fn test_other_fieldmark_types() {
        let xml = wrap(
            r#"<field:fieldmark-start text:name="Date1" field:type="vnd.oasis.opendocument.field.FORMDATE"/>today<field:fieldmark-end/>"#,
        );
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        let mark = store.iter().next().unwrap();
        assert_eq!(
            mark.kind(),
            &MarkKind::Other("vnd.oasis.opendocument.field.FORMDATE".to_string())
        );
        assert!(!mark.is_form_field());
    }

    #[test]
    fn test_fieldmark_without_name_is_invalid() {
        let xml = wrap(r#"<field:fieldmark field:type="vnd.oasis.opendocument.field.FORMCHECKBOX"/>"#);
        assert!(matches!(
            read_marks(&xml, &ImportOptions::default()),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_huge_space_run_outside_range() {
        let xml = wrap(r#"a<text:s text:c="18446744073709551615"/>b<text:s text:c="99999999999999999999999"/>"#);
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_huge_space_run_inside_range_is_clamped() {
        let xml = wrap(
            r#"<field:fieldmark-start text:name="Text1" field:type="vnd.oasis.opendocument.field.FORMTEXT"/>a<text:s text:c="18446744073709551615"/>b<field:fieldmark-end/>"#,
        );
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        let MarkKind::TextInput(text) = store.iter().next().unwrap().kind() else {
            panic!("expected text input");
        };
        assert_eq!(text.result.len(), MAX_SPACE_RUN + 2);
        assert!(text.result.starts_with("a "));
        assert!(text.result.ends_with(" b"));
    }

    #[test]
    fn test_nested_range_text_reaches_enclosing_range() {
        let xml = wrap(
            r#"<field:fieldmark-start text:name="Outer" field:type="vnd.oasis.opendocument.field.FORMTEXT"/>a<field:fieldmark-start text:name="Inner" field:type="vnd.oasis.opendocument.field.FORMTEXT"/>b<text:tab/><field:fieldmark-end/>c<field:fieldmark-end/>"#,
        );
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        let results: Vec<_> = store
            .iter()
            .map(|mark| match mark.kind() {
                MarkKind::TextInput(text) => (mark.name(), text.result.as_str()),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(results, [("Outer", "ab\tc"), ("Inner", "b\t")]);
    }

    #[test]
    fn test_unbalanced_end_is_ignored() {
        let xml = wrap(r#"<field:fieldmark-end/><text:bookmark text:name="_Hidden"/>"#);
        let store = read_marks(&xml, &ImportOptions::default()).unwrap();
        assert!(store.is_empty());
    }
}

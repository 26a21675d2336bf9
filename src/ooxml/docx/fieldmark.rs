//! Form-field and bookmark extraction from WordprocessingML.
//!
//! A legacy form field is a complex field. Its `begin` field character holds
//! a `w:ffData` block with the field name and the control state:
//!
//! ```xml
//! <w:r><w:fldChar w:fldCharType="begin">
//!   <w:ffData>
//!     <w:name w:val="Check1"/>
//!     <w:checkBox><w:default w:val="0"/><w:checked/></w:checkBox>
//!   </w:ffData>
//! </w:fldChar></w:r>
//! <w:r><w:instrText> FORMCHECKBOX </w:instrText></w:r>
//! <w:r><w:fldChar w:fldCharType="end"/></w:r>
//! ```
//!
//! Text-input fields carry their displayed text in the runs between the
//! `separate` and `end` field characters.
use crate::common::Result;
use crate::common::xml::{attr_u32, attr_value, parse_xml_bool, resolve_entity};
use crate::document::{
    CheckBox, DropDown, FormFieldType, ImportOptions, Mark, MarkStore, TextInput,
};
use phf::phf_map;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Field instruction keywords of the three legacy form-field kinds.
static FORM_FIELD_INSTRUCTIONS: phf::Map<&'static str, FormFieldType> = phf_map! {
    "FORMCHECKBOX" => FormFieldType::CheckBox,
    "FORMDROPDOWN" => FormFieldType::DropDown,
    "FORMTEXT" => FormFieldType::TextInput,
};

/// Which `w:ffData` child is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FfSection {
    None,
    CheckBox,
    DropDown,
    TextInput,
}

/// A top-level complex field being collected.
#[derive(Debug)]
struct PendingField {
    /// Store position of the field's `begin`
    slot: usize,
    name: Option<String>,
    /// Kind declared by the `w:ffData` child element
    declared: Option<FormFieldType>,
    instruction: String,
    checked: Option<bool>,
    default_checked: bool,
    entries: SmallVec<[String; 4]>,
    /// Current selection from `w:result`; absent when it equals the default
    selected: Option<usize>,
    default_selected: usize,
    default_text: String,
    max_length: Option<u32>,
    result: String,
}

impl PendingField {
    fn new(slot: usize) -> Self {
        Self {
            slot,
            name: None,
            declared: None,
            instruction: String::new(),
            checked: None,
            default_checked: false,
            entries: SmallVec::new(),
            selected: None,
            default_selected: 0,
            default_text: String::new(),
            max_length: None,
            result: String::new(),
        }
    }

    /// The form-field type, from `w:ffData` or else from the instruction.
    fn field_type(&self) -> Option<FormFieldType> {
        self.declared.or_else(|| {
            self.instruction
                .split_whitespace()
                .next()
                .and_then(|keyword| FORM_FIELD_INSTRUCTIONS.get(keyword).copied())
        })
    }

    fn into_mark(self) -> Option<(usize, Mark)> {
        let field_type = self.field_type()?;
        let name = self.name.unwrap_or_default();
        let mark = match field_type {
            FormFieldType::CheckBox => Mark::check_box(
                name,
                CheckBox {
                    checked: self.checked.unwrap_or(self.default_checked),
                    default_checked: self.default_checked,
                },
            ),
            FormFieldType::DropDown => {
                let selected = (!self.entries.is_empty())
                    .then(|| self.selected.unwrap_or(self.default_selected));
                Mark::drop_down(
                    name,
                    DropDown {
                        entries: self.entries,
                        selected,
                    },
                )
            },
            FormFieldType::TextInput => Mark::text_input(
                name,
                TextInput {
                    default_text: self.default_text,
                    result: self.result,
                    max_length: self.max_length,
                },
            ),
        };
        Some((self.slot, mark))
    }
}

/// Value of the `w:val` attribute of an element.
fn val_attr(e: &BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"val")
        .map(|attr| attr_value(&attr))
}

/// Numeric value of the `w:val` attribute of an element.
fn val_u32(e: &BytesStart<'_>) -> Option<u32> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"val")
        .and_then(|attr| attr_u32(&attr))
}

/// Boolean `w:val`, where a missing attribute means true (`<w:checked/>`).
fn val_bool(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"val")
        .is_none_or(|attr| parse_xml_bool(&attr.value))
}

/// Extract all marks from document XML bytes.
///
/// Marks are stored in the order in which they start in the document; a
/// form field takes the position of its `begin` field character.
///
/// # Arguments
///
/// * `doc_xml` - The document XML bytes
/// * `options` - Which bookmarks to keep
///
/// # Examples
///
/// ```rust
/// use formfields::document::{ImportOptions, MarkKind};
/// use formfields::ooxml::docx::read_marks;
///
/// let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p>
///   <w:r><w:fldChar w:fldCharType="begin"><w:ffData><w:name w:val="Agree"/><w:checkBox><w:default w:val="1"/></w:checkBox></w:ffData></w:fldChar></w:r>
///   <w:r><w:instrText xml:space="preserve"> FORMCHECKBOX </w:instrText></w:r>
///   <w:r><w:fldChar w:fldCharType="end"/></w:r>
/// </w:p></w:body></w:document>"#;
///
/// let store = read_marks(xml, &ImportOptions::default())?;
/// let mark = store.iter().next().unwrap();
/// assert_eq!(mark.name(), "Agree");
/// assert!(matches!(mark.kind(), MarkKind::CheckBox(cb) if cb.checked));
/// # Ok::<(), formfields::common::Error>(())
/// ```
pub fn read_marks(doc_xml: &[u8], options: &ImportOptions) -> Result<MarkStore> {
    let mut reader = Reader::from_reader(doc_xml);
    reader.config_mut().trim_text(false);

    let mut scanner = Scanner::new(options);
    let mut buf = Vec::with_capacity(512);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => scanner.start(&e, false),
            Ok(Event::Empty(e)) => scanner.start(&e, true),
            Ok(Event::Text(e)) => scanner.text(&String::from_utf8_lossy(e.as_ref())),
            Ok(Event::GeneralRef(e)) => {
                if let Some(ch) = resolve_entity(&e) {
                    scanner.text(ch.encode_utf8(&mut [0; 4]));
                }
            },
            Ok(Event::End(e)) => scanner.end(e.local_name().as_ref()),
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {},
        }
        buf.clear();
    }

    Ok(scanner.finish())
}

/// Event-driven state of one pass over `document.xml`.
struct Scanner<'o> {
    options: &'o ImportOptions,
    store: MarkStore,
    pending: Option<PendingField>,
    field_depth: u32,
    in_ff_data: bool,
    section: FfSection,
    in_instr_text: bool,
    in_field_result: bool,
    in_text: bool,
}

impl<'o> Scanner<'o> {
    fn new(options: &'o ImportOptions) -> Self {
        Self {
            options,
            store: MarkStore::new(),
            pending: None,
            field_depth: 0,
            in_ff_data: false,
            section: FfSection::None,
            in_instr_text: false,
            in_field_result: false,
            in_text: false,
        }
    }

    fn start(&mut self, e: &BytesStart<'_>, empty: bool) {
        match e.local_name().as_ref() {
            b"fldChar" => self.field_char(e),
            b"ffData" if self.field_depth == 1 => self.in_ff_data = !empty,
            b"name" if self.in_ff_data => {
                if let Some(field) = self.pending.as_mut() {
                    field.name = val_attr(e);
                }
            },
            b"checkBox" if self.in_ff_data => self.open_section(FfSection::CheckBox, empty),
            b"ddList" if self.in_ff_data => self.open_section(FfSection::DropDown, empty),
            b"textInput" if self.in_ff_data => self.open_section(FfSection::TextInput, empty),
            b"default" if self.in_ff_data => {
                if let Some(field) = self.pending.as_mut() {
                    match self.section {
                        FfSection::CheckBox => field.default_checked = val_bool(e),
                        FfSection::TextInput => field.default_text = val_attr(e).unwrap_or_default(),
                        FfSection::DropDown => {
                            field.default_selected = val_u32(e).unwrap_or(0) as usize
                        },
                        FfSection::None => {},
                    }
                }
            },
            b"checked" if self.section == FfSection::CheckBox => {
                if let Some(field) = self.pending.as_mut() {
                    field.checked = Some(val_bool(e));
                }
            },
            b"result" if self.section == FfSection::DropDown => {
                if let Some(field) = self.pending.as_mut() {
                    field.selected = val_u32(e).map(|n| n as usize);
                }
            },
            b"listEntry" if self.section == FfSection::DropDown => {
                if let Some(field) = self.pending.as_mut()
                    && let Some(entry) = val_attr(e)
                {
                    field.entries.push(entry);
                }
            },
            b"maxLength" if self.section == FfSection::TextInput => {
                if let Some(field) = self.pending.as_mut() {
                    // Zero means unlimited
                    field.max_length = val_u32(e).filter(|&n| n > 0);
                }
            },
            b"instrText" if self.field_depth == 1 => self.in_instr_text = !empty,
            b"t" if self.in_field_result && self.field_depth == 1 => self.in_text = !empty,
            b"bookmarkStart" => {
                let name = e
                    .attributes()
                    .flatten()
                    .find(|attr| attr.key.local_name().as_ref() == b"name")
                    .map(|attr| attr_value(&attr))
                    .unwrap_or_default();
                if self.options.keeps_bookmark(&name) {
                    self.store.push(Mark::bookmark(name));
                } else {
                    debug!(bookmark = %name, "skipping bookmark");
                }
            },
            _ => {},
        }
    }

    fn field_char(&mut self, e: &BytesStart<'_>) {
        let char_type = e
            .attributes()
            .flatten()
            .find(|attr| attr.key.local_name().as_ref() == b"fldCharType")
            .map(|attr| attr.value.into_owned());

        match char_type.as_deref() {
            Some(b"begin") => {
                self.field_depth += 1;
                if self.field_depth == 1 {
                    self.pending = Some(PendingField::new(self.store.len()));
                    self.in_field_result = false;
                }
            },
            Some(b"separate") => {
                if self.field_depth == 1 {
                    self.in_field_result = true;
                }
            },
            Some(b"end") => {
                if self.field_depth == 1 {
                    self.in_field_result = false;
                    if let Some(field) = self.pending.take() {
                        finish_field(&mut self.store, field);
                    }
                }
                self.field_depth = self.field_depth.saturating_sub(1);
            },
            _ => {},
        }
    }

    fn open_section(&mut self, section: FfSection, empty: bool) {
        if let Some(field) = self.pending.as_mut() {
            field.declared = Some(match section {
                FfSection::CheckBox => FormFieldType::CheckBox,
                FfSection::DropDown => FormFieldType::DropDown,
                FfSection::TextInput | FfSection::None => FormFieldType::TextInput,
            });
        }
        if !empty {
            self.section = section;
        }
    }

    fn text(&mut self, text: &str) {
        let Some(field) = self.pending.as_mut() else {
            return;
        };
        if self.in_instr_text {
            field.instruction.push_str(text);
        } else if self.in_text {
            field.result.push_str(text);
        }
    }

    fn end(&mut self, local_name: &[u8]) {
        match local_name {
            b"ffData" => {
                self.in_ff_data = false;
                self.section = FfSection::None;
            },
            b"checkBox" | b"ddList" | b"textInput" => self.section = FfSection::None,
            b"instrText" => self.in_instr_text = false,
            b"t" => self.in_text = false,
            _ => {},
        }
    }

    fn finish(mut self) -> MarkStore {
        if let Some(field) = self.pending.take() {
            warn!(slot = field.slot, "form field without end character");
            finish_field(&mut self.store, field);
        }
        self.store
    }
}

/// Place a completed field into the store at the position of its `begin`.
fn finish_field(store: &mut MarkStore, field: PendingField) {
    match field.into_mark() {
        Some((slot, mark)) => {
            if mark.name().is_empty() {
                debug!(slot, "form field without a name");
            }
            store.insert(slot.min(store.len()), mark);
        },
        None => debug!("skipping non-form field"),
    }
}

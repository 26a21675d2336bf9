use std::rc::Rc;

use formfields::automation::{AutomationContext, FormFields, ItemKey};
use formfields::document::{CheckBox, Document, FormFieldType, ImportOptions, Mark, MarkStore, TextInput};
use formfields::Error;

fn form_fields(doc: &Document) -> FormFields<'_> {
    FormFields::new(None, Rc::new(AutomationContext::default()), doc)
}

#[test]
fn empty_document() {
    let doc = Document::new(MarkStore::new());
    let fields = form_fields(&doc);

    assert_eq!(fields.count(), 0);
    assert!(fields.element_names().is_empty());
    assert!(!fields.has_by_name("x"));
    assert!(matches!(fields.get_by_index(0), Err(Error::IndexOutOfBounds { .. })));
    let mut en = fields.create_enumeration();
    assert!(!en.has_more_elements());
    assert_eq!(en.next_element().unwrap_err(), Error::NoMoreElements);
}

#[test]
fn bookmarks_are_invisible() {
    let doc = Document::new(
        [
            Mark::check_box("A", CheckBox::new(false)),
            Mark::bookmark("B"),
            Mark::text_input("C", TextInput::default()),
        ]
        .into_iter()
        .collect(),
    );
    let fields = form_fields(&doc);

    assert_eq!(fields.count(), 2);
    assert_eq!(fields.get_by_index(0).unwrap().name(), "A");
    assert_eq!(fields.get_by_index(1).unwrap().name(), "C");
    assert!(!fields.has_by_name("b"));
    assert!(!fields.has_by_name("B"));
    assert_eq!(fields.element_names(), ["A", "C"]);
}

#[test]
fn has_then_get_uses_the_same_mark() {
    let doc = Document::new(
        [
            Mark::bookmark("A"),
            Mark::check_box("A", CheckBox::new(true)),
        ]
        .into_iter()
        .collect(),
    );
    let fields = form_fields(&doc);

    assert!(fields.has_by_name("A"));
    let found = fields.collection().last_found().unwrap();
    let field = fields.get_by_name("A").unwrap();
    assert!(field.fieldmark().same_mark(&found));
    assert_eq!(field.field_type(), FormFieldType::CheckBox);

    // Standalone lookup on a fresh object behaves the same
    let fresh = form_fields(&doc);
    assert!(fresh.get_by_name("a").unwrap().fieldmark().same_mark(&found));
}

#[test]
fn detached_document_is_an_empty_collection() {
    let doc = Document::detached();
    let fields = form_fields(&doc);

    assert_eq!(fields.count(), 0);
    assert!(!fields.has_elements());
    assert!(fields.iter().next().is_none());
    assert_eq!(
        fields.get_by_name("A").unwrap_err(),
        Error::NoSuchElement("A".to_string())
    );
}

#[cfg(feature = "ooxml")]
#[test]
fn docx_form_fields() {
    let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:bookmarkStart w:id="0" w:name="Text1"/>
      <w:r><w:fldChar w:fldCharType="begin"><w:ffData><w:name w:val="Text1"/><w:enabled/><w:calcOnExit w:val="0"/><w:textInput/></w:ffData></w:fldChar></w:r>
      <w:r><w:instrText xml:space="preserve"> FORMTEXT </w:instrText></w:r>
      <w:r><w:fldChar w:fldCharType="separate"/></w:r>
      <w:r><w:t>Hello</w:t></w:r>
      <w:r><w:fldChar w:fldCharType="end"/></w:r>
      <w:bookmarkEnd w:id="0"/>
    </w:p>
    <w:p>
      <w:r><w:fldChar w:fldCharType="begin"><w:ffData><w:name w:val="Check1"/><w:checkBox><w:sizeAuto/><w:default w:val="1"/></w:checkBox></w:ffData></w:fldChar></w:r>
      <w:r><w:instrText xml:space="preserve"> FORMCHECKBOX </w:instrText></w:r>
      <w:r><w:fldChar w:fldCharType="end"/></w:r>
      <w:r><w:fldChar w:fldCharType="begin"><w:ffData><w:name w:val="Dropdown1"/><w:ddList><w:result w:val="1"/><w:listEntry w:val="One"/><w:listEntry w:val="Two"/></w:ddList></w:ffData></w:fldChar></w:r>
      <w:r><w:instrText xml:space="preserve"> FORMDROPDOWN </w:instrText></w:r>
      <w:r><w:fldChar w:fldCharType="end"/></w:r>
    </w:p>
  </w:body>
</w:document>"#;

    let doc = Document::from_docx_xml(xml, &ImportOptions::default()).unwrap();
    assert_eq!(doc.store().map(MarkStore::len), Some(4));

    let fields = form_fields(&doc);
    assert_eq!(fields.element_names(), ["Text1", "Check1", "Dropdown1"]);
    assert_eq!(fields.item(ItemKey::Name("text1")).unwrap().result(), "Hello");
    assert_eq!(fields.item(ItemKey::Index(2)).unwrap().result(), "1");
    assert_eq!(fields.item(ItemKey::Index(3)).unwrap().result(), "Two");
}

#[cfg(feature = "odf")]
#[test]
fn odt_form_fields() {
    let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:field="urn:openoffice:names:experimental:ooo-ms-interop:xmlns:field:1.0">
  <office:body>
    <office:text>
      <text:p><text:bookmark text:name="Top"/>Name: <field:fieldmark-start text:name="Text1" field:type="vnd.oasis.opendocument.field.FORMTEXT"/>Ada<field:fieldmark-end/></text:p>
      <text:p><field:fieldmark text:name="Check1" field:type="vnd.oasis.opendocument.field.FORMCHECKBOX"><field:param field:name="Checkbox_Checked" field:value="false"/></field:fieldmark></text:p>
      <text:p><field:fieldmark-start text:name="Date1" field:type="vnd.oasis.opendocument.field.FORMDATE"/>2024-01-01<field:fieldmark-end/></text:p>
    </office:text>
  </office:body>
</office:document-content>"#;

    let doc = Document::from_xml(xml, &ImportOptions::default()).unwrap();
    assert_eq!(doc.store().map(MarkStore::len), Some(4));

    let fields = form_fields(&doc);
    assert_eq!(fields.count(), 2);
    assert_eq!(fields.get_by_name("TEXT1").unwrap().result(), "Ada");
    assert_eq!(fields.get_by_index(1).unwrap().result(), "0");
    assert!(!fields.has_by_name("Date1"));
}

use std::rc::Rc;

use formfields::automation::{AutomationContext, FormFields};
use formfields::document::{CheckBox, DropDown, Mark, MarkKind, MarkStore, TextInput};
use proptest::prelude::*;

fn mark_strategy() -> impl Strategy<Value = Mark> {
    ("[A-Za-zéÉß][A-Za-z0-9éÉ]{0,5}", 0u8..5).prop_map(|(name, kind)| match kind {
        0 => Mark::check_box(name, CheckBox::new(false)),
        1 => Mark::drop_down(name, DropDown::new(["x", "y"])),
        2 => Mark::text_input(name, TextInput::new("t")),
        3 => Mark::bookmark(name),
        _ => Mark::new(name, MarkKind::Other("vnd.oasis.opendocument.field.FORMDATE".into())),
    })
}

fn store_strategy() -> impl Strategy<Value = MarkStore> {
    proptest::collection::vec(mark_strategy(), 0..24).prop_map(MarkStore::from_iter)
}

fn qualifying(store: &MarkStore) -> Vec<&Mark> {
    store.iter().filter(|m| m.is_form_field()).collect()
}

fn flip_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn count_matches_qualifying_marks(store in store_strategy()) {
        let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &store);
        prop_assert_eq!(fields.count(), qualifying(&store).len());
        prop_assert_eq!(fields.has_elements(), !qualifying(&store).is_empty());
    }

    #[test]
    fn index_follows_storage_order(store in store_strategy()) {
        let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &store);
        let expected = qualifying(&store);

        for (i, mark) in expected.iter().enumerate() {
            let field = fields.get_by_index(i).expect("index below count");
            prop_assert!(std::ptr::eq(field.mark(), *mark), "index {} names the wrong mark", i);
        }
        prop_assert!(fields.get_by_index(expected.len()).is_err());
    }

    #[test]
    fn names_agree_with_index_access(store in store_strategy()) {
        let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &store);
        let names = fields.element_names();

        prop_assert_eq!(names.len(), fields.count());
        for (i, name) in names.iter().enumerate() {
            let field = fields.get_by_index(i).expect("index below count");
            prop_assert_eq!(field.name(), name.as_str());
        }
    }

    #[test]
    fn iteration_yields_every_field_once(store in store_strategy()) {
        let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &store);
        let expected = qualifying(&store);

        let mut en = fields.create_enumeration();
        let mut seen = 0;
        while en.has_more_elements() {
            let field = en.next_element().expect("has_more_elements was true");
            prop_assert!(std::ptr::eq(field.mark(), expected[seen]));
            seen += 1;
        }
        prop_assert_eq!(seen, expected.len());
        prop_assert!(en.next_element().is_err());
        prop_assert_eq!(fields.iter().count(), expected.len());
    }

    #[test]
    fn name_lookup_ignores_ascii_case_only(store in store_strategy(), probe in "[A-Za-z]{1,6}") {
        let fields = FormFields::new(None, Rc::new(AutomationContext::default()), &store);
        let expected = qualifying(&store);

        for mark in &expected {
            let flipped = flip_case(mark.name());
            prop_assert!(fields.has_by_name(&flipped));
            let field = fields.get_by_name(&flipped).expect("has_by_name was true");
            // The first qualifying mark with that name wins
            let first = expected
                .iter()
                .find(|m| m.name().eq_ignore_ascii_case(mark.name()))
                .expect("mark is in the list");
            prop_assert!(std::ptr::eq(field.mark(), *first));
        }

        let exists = expected.iter().any(|m| m.name().eq_ignore_ascii_case(&probe));
        prop_assert_eq!(fields.has_by_name(&probe), exists);
        prop_assert_eq!(fields.find(&probe).is_some(), exists);
        let padded = format!("{probe} ");
        prop_assert!(!fields.has_by_name(&padded));

        // Case folding stops at ASCII
        for mark in expected.iter().filter(|m| m.name().contains('É')) {
            let lowered = mark.name().replace('É', "é");
            let exists = expected.iter().any(|m| m.name().eq_ignore_ascii_case(&lowered));
            prop_assert_eq!(fields.has_by_name(&lowered), exists);
        }
    }
}

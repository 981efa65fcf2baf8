//! Transition properties: snapshots are immutable, mandatory items are
//! untouchable, and stale or unavailable references never fail.

use disclose::document::{MDL_NAMESPACE, PID_NAMESPACE};
use disclose::{ConsentBuilder, ConsentModel, ItemUid, RequestedElement};
use rstest::rstest;
use test_utils::{init_tracing, store, MDL_ID, PID_ID};

fn sample_model() -> ConsentModel {
    init_tracing();

    let request = vec![
        RequestedElement::new(PID_ID, PID_NAMESPACE, "issuance_date"),
        RequestedElement::new(PID_ID, PID_NAMESPACE, "portrait"),
        RequestedElement::new(PID_ID, PID_NAMESPACE, "given_name"),
        RequestedElement::new(MDL_ID, MDL_NAMESPACE, "family_name"),
        RequestedElement::new(MDL_ID, MDL_NAMESPACE, "portrait"),
    ];
    ConsentBuilder::new().build(&request, &store()).expect("should build")
}

#[test]
fn transitions_return_new_snapshots() {
    let model = sample_model();
    let before = model.clone();

    let toggled = model.toggle_optional_item(&ItemUid::new(PID_ID, "given_name"));
    let expanded = model.toggle_required_block(PID_ID);

    // the source snapshot is never mutated
    assert_eq!(model, before);
    assert_ne!(toggled, model);
    assert_ne!(expanded, model);
}

#[test]
fn toggle_required_block_is_presentation_only() {
    let model = sample_model();
    let expanded = model.toggle_required_block(PID_ID);

    let block = expanded.groups[0].required.as_ref().expect("should have required block");
    assert!(block.expanded);

    // checked states are untouched, and toggling back restores the original
    assert_eq!(expanded.checked_count(), model.checked_count());
    assert_eq!(expanded.toggle_required_block(PID_ID), model);
}

#[test]
fn toggle_required_block_without_block_is_a_noop() {
    let model = sample_model();
    assert!(model.groups[1].required.is_none());

    assert_eq!(model.toggle_required_block(MDL_ID), model);
    assert_eq!(model.toggle_required_block("ghost"), model);
}

#[test]
fn no_transition_sequence_touches_mandatory_items() {
    let model = sample_model();

    let mandatory_uids: Vec<ItemUid> = model
        .items()
        .filter(|item| item.is_mandatory)
        .map(|item| item.uid.clone())
        .collect();
    assert!(!mandatory_uids.is_empty());

    let mut current = model.clone();
    for uid in &mandatory_uids {
        current = current.toggle_optional_item(uid);
    }
    current = current.toggle_required_block(PID_ID);
    current = current.toggle_optional_item(&ItemUid::new(PID_ID, "given_name"));
    current = current.toggle_required_block(PID_ID);

    for uid in &mandatory_uids {
        let before = model
            .items()
            .find(|item| item.uid == *uid)
            .expect("should find item")
            .is_checked;
        let after = current
            .items()
            .find(|item| item.uid == *uid)
            .expect("should find item")
            .is_checked;
        assert_eq!(before, after);
    }
}

#[rstest]
#[case::unavailable(ItemUid::new(MDL_ID, "portrait"))]
#[case::stale_document(ItemUid::new("ghost", "given_name"))]
#[case::stale_element(ItemUid::new(PID_ID, "resident_address"))]
#[case::mandatory(ItemUid::new(PID_ID, "issuance_date"))]
fn untoggleable_uids_leave_the_model_unchanged(#[case] uid: ItemUid) {
    let model = sample_model();
    assert_eq!(model.toggle_optional_item(&uid), model);
}

#[test]
fn toggling_twice_restores_the_snapshot() {
    let model = sample_model();
    let uid = ItemUid::new(PID_ID, "given_name");

    let off = model.toggle_optional_item(&uid);
    assert!(!off.find_optional(&uid).expect("should find item").is_checked);

    let on = off.toggle_optional_item(&uid);
    assert_eq!(on, model);
}

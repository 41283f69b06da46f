use super::*;

fn lead(id: i64) -> Lead {
    Lead {
        id,
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        company: "C".to_owned(),
        email: "a@b.com".to_owned(),
        note: "n".to_owned(),
        date_last_updated: "2024-01-02T00:00:00Z".to_owned(),
    }
}

/// Run the fetch effect to completion with `result`.
fn settle(state: &mut LeadsTableState, result: Result<Vec<Lead>, &str>) {
    assert!(state.begin_fetch(), "expected a pending fetch");
    match result {
        Ok(leads) => state.fetch_succeeded(leads),
        Err(msg) => state.fetch_failed(msg),
    }
}

// =============================================================
// Mount + fetch
// =============================================================

#[test]
fn new_table_requests_one_fetch() {
    let mut state = LeadsTableState::default();
    assert!(!state.loaded());
    assert!(state.needs_fetch());
    assert!(state.begin_fetch());
    assert!(!state.begin_fetch());
    assert!(state.in_flight());
}

#[test]
fn successful_fetch_marks_loaded_and_renders_rows() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1)]));

    assert!(state.loaded());
    assert!(state.is_current());
    let rows = state.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].last_updated, "Jan 2nd 24");
}

#[test]
fn failed_fetch_leaves_unloaded_with_error() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Err(LIST_FAILED_MESSAGE));

    assert!(!state.loaded());
    assert_eq!(state.error(), "Something went wrong");
    assert!(state.rows().is_empty());
    assert!(!state.needs_fetch());
}

#[test]
fn failed_refetch_drops_previous_snapshot() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1), lead(2)]));
    state.delete_succeeded();
    settle(&mut state, Err(LIST_FAILED_MESSAGE));

    assert!(!state.loaded());
    assert_eq!(state.leads(), None);
    assert!(state.rows().is_empty());
}

#[test]
fn rows_are_empty_before_first_fetch() {
    let state = LeadsTableState::default();
    assert!(state.rows().is_empty());
}

// =============================================================
// Modal
// =============================================================

#[test]
fn open_create_has_no_id() {
    let mut state = LeadsTableState::default();
    state.open_create();
    assert_eq!(state.modal(), ModalState { active: true, id: None });
}

#[test]
fn open_update_carries_row_id() {
    let mut state = LeadsTableState::default();
    state.open_update(9);
    assert_eq!(state.modal(), ModalState { active: true, id: Some(9) });
}

#[test]
fn close_modal_hides_clears_id_and_invalidates() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1)]));
    state.open_update(1);
    state.close_modal();

    assert_eq!(state.modal(), ModalState::default());
    assert!(!state.is_current());
    assert!(state.begin_fetch());
    assert!(!state.begin_fetch());
}

#[test]
fn cancel_without_changes_still_refetches() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1)]));
    state.open_create();
    state.close_modal();
    assert!(state.needs_fetch());
}

#[test]
fn opening_modal_clears_previous_error() {
    let mut state = LeadsTableState::default();
    state.delete_failed();
    state.open_create();
    assert_eq!(state.error(), "");
}

#[test]
fn modal_error_survives_refetch_after_close() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1)]));
    state.open_create();
    state.set_error("Something went wrong when creating lead");
    state.close_modal();
    settle(&mut state, Ok(vec![lead(1)]));
    assert_eq!(state.error(), "Something went wrong when creating lead");
}

// =============================================================
// Delete
// =============================================================

#[test]
fn successful_delete_triggers_exactly_one_fetch() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1), lead(2)]));

    state.delete_succeeded();
    assert!(!state.is_current());
    assert!(state.begin_fetch());
    assert!(!state.begin_fetch());
    state.fetch_succeeded(vec![lead(2)]);

    assert!(state.is_current());
    assert_eq!(state.rows().len(), 1);
    assert!(!state.needs_fetch());
}

#[test]
fn failed_delete_keeps_list_and_sets_error() {
    let mut state = LeadsTableState::default();
    settle(&mut state, Ok(vec![lead(1), lead(2)]));
    let before = state.leads().map(<[Lead]>::to_vec);

    state.delete_failed();

    assert_eq!(state.leads().map(<[Lead]>::to_vec), before);
    assert_eq!(state.error(), DELETE_FAILED_MESSAGE);
    assert!(state.is_current());
}

// =============================================================
// Invalidation while a fetch is in flight
// =============================================================

#[test]
fn mutation_during_fetch_schedules_one_follow_up() {
    let mut state = LeadsTableState::default();
    assert!(state.begin_fetch());

    state.delete_succeeded();
    state.delete_succeeded();
    assert!(!state.begin_fetch(), "no overlapping fetch");

    state.fetch_succeeded(vec![lead(1)]);
    assert!(!state.is_current());
    assert!(state.begin_fetch());
    state.fetch_succeeded(vec![]);

    assert!(state.is_current());
    assert!(!state.begin_fetch());
}

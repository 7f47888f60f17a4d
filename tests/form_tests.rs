mod common;
use common::project;
use projmgr::core::form::parse_progress;
use projmgr::core::{FormMode, FormState, PhaseField, ProjectField};
use projmgr::errors::{AppError, MissingDate};
use projmgr::models::{ActualDate, Level, PHASE_COUNT, PhaseStatus};
use std::str::FromStr;

fn open_draft() -> FormState {
    let mut form = FormState::Closed;
    form.open_create();
    form
}

#[test]
fn test_open_create_starts_from_defaults() {
    let form = open_draft();
    let draft = form.draft().expect("form is open");

    assert_eq!(form.mode(), Some(FormMode::Create));
    assert_eq!(draft.id, None);
    assert!(draft.name.is_empty());
    assert_eq!(draft.phases.len(), PHASE_COUNT);
    for ph in &draft.phases {
        assert_eq!(ph.status, PhaseStatus::OnTrack);
        assert_eq!(ph.due_date, "");
        assert_eq!(ph.actual_date, ActualDate::Pending);
        assert_eq!(ph.progress, Some(0.0));
    }
}

#[test]
fn test_open_edit_copies_project() {
    let p = project(7, "Alpha", "Tam", Level::C, PhaseStatus::OnTrack);
    let mut form = FormState::Closed;
    form.open_edit(&p).unwrap();

    assert_eq!(form.mode(), Some(FormMode::Edit { original_id: 7 }));
    assert_eq!(form.draft(), Some(&p));

    form.set_field(ProjectField::Name, "Alpha v2").unwrap();
    assert_eq!(p.name, "Alpha");
}

#[test]
fn test_closed_form_rejects_edits() {
    let mut form = FormState::Closed;
    let err = form.set_field(ProjectField::Name, "x").unwrap_err();
    assert!(matches!(err, AppError::FormClosed));

    let err = form
        .set_phase_field(0, PhaseField::Status, "O")
        .unwrap_err();
    assert!(matches!(err, AppError::FormClosed));
}

#[test]
fn test_gate_rejects_completion_without_plan_date() {
    let mut form = open_draft();
    let before = form.clone();

    let err = form
        .set_phase_field(0, PhaseField::Status, "F")
        .unwrap_err();

    match err {
        AppError::PhaseGate { phase, missing } => {
            assert_eq!(phase, "Flowchart");
            assert_eq!(missing, MissingDate::Plan);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(form, before);
}

#[test]
fn test_gate_rejects_completion_with_dash_actual_date() {
    let mut form = open_draft();
    form.set_phase_field(2, PhaseField::DueDate, "12/05").unwrap();
    form.set_phase_field(2, PhaseField::ActualDate, "-").unwrap();
    let before = form.clone();

    let err = form
        .set_phase_field(2, PhaseField::Status, "FD")
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::PhaseGate {
            missing: MissingDate::Actual,
            ..
        }
    ));
    assert_eq!(form, before);
}

#[test]
fn test_gate_accepts_completion_and_sets_full_progress() {
    let mut form = open_draft();
    form.set_phase_field(2, PhaseField::DueDate, "12/05").unwrap();
    form.set_phase_field(2, PhaseField::ActualDate, "14/05").unwrap();
    form.set_phase_field(2, PhaseField::Progress, "40").unwrap();

    form.set_phase_field(2, PhaseField::Status, "fd").unwrap();

    let ph = &form.draft().unwrap().phases[2];
    assert_eq!(ph.status, PhaseStatus::FinishedLate);
    assert_eq!(ph.progress, Some(100.0));
}

#[test]
fn test_in_progress_statuses_are_not_gated_and_keep_progress() {
    let mut form = open_draft();
    form.set_phase_field(5, PhaseField::Progress, "35").unwrap();

    form.set_phase_field(5, PhaseField::Status, "S").unwrap();
    let ph = &form.draft().unwrap().phases[5];
    assert_eq!(ph.status, PhaseStatus::Delayed);
    assert_eq!(ph.progress, Some(35.0));

    form.set_phase_field(5, PhaseField::Status, "O").unwrap();
    assert_eq!(form.draft().unwrap().phases[5].progress, Some(35.0));
}

#[test]
fn test_clearing_dates_after_completion_keeps_status() {
    let mut form = open_draft();
    form.set_phase_field_by_name("Layout", PhaseField::DueDate, "01/06")
        .unwrap();
    form.set_phase_field_by_name("Layout", PhaseField::ActualDate, "02/06")
        .unwrap();
    form.set_phase_field_by_name("Layout", PhaseField::Status, "F")
        .unwrap();

    form.set_phase_field_by_name("Layout", PhaseField::DueDate, "")
        .unwrap();

    let ph = form.draft().unwrap().phase("Layout").unwrap().clone();
    assert_eq!(ph.status, PhaseStatus::Finished);
    assert_eq!(ph.due_date, "");
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let mut form = open_draft();

    assert!(matches!(
        form.set_phase_field(PHASE_COUNT, PhaseField::Status, "O"),
        Err(AppError::InvalidPhase(_))
    ));
    assert!(matches!(
        form.set_phase_field(0, PhaseField::Status, "X"),
        Err(AppError::InvalidStatus(_))
    ));
    assert!(matches!(
        form.set_phase_field_by_name("Unknown", PhaseField::Status, "O"),
        Err(AppError::InvalidPhase(_))
    ));
    assert!(matches!(
        form.set_field(ProjectField::Level, "Z"),
        Err(AppError::InvalidLevel(_))
    ));
}

#[test]
fn test_set_field_updates_draft() {
    let mut form = open_draft();
    form.set_field(ProjectField::Name, "Inverter 5kW").unwrap();
    form.set_field(ProjectField::CodeSale, "SO-1").unwrap();
    form.set_field(ProjectField::Owner, "Lan").unwrap();
    form.set_field(ProjectField::Level, "b").unwrap();
    form.set_field(ProjectField::CurrentStatus, "Waiting parts").unwrap();

    let d = form.draft().unwrap();
    assert_eq!(d.name, "Inverter 5kW");
    assert_eq!(d.code_sale.as_deref(), Some("SO-1"));
    assert_eq!(d.owner.as_deref(), Some("Lan"));
    assert_eq!(d.level, Some(Level::B));
    assert_eq!(d.current_status, "Waiting parts");

    form.set_field(ProjectField::Level, "").unwrap();
    form.set_field(ProjectField::Owner, "").unwrap();
    let d = form.draft().unwrap();
    assert_eq!(d.level, None);
    assert_eq!(d.owner, None);
}

#[test]
fn test_close_discards_draft() {
    let mut form = open_draft();
    form.set_field(ProjectField::Name, "Temp").unwrap();
    form.close();
    assert!(!form.is_open());
    assert!(form.draft().is_none());
}

#[test]
fn test_progress_coercion() {
    assert_eq!(parse_progress("55"), 55);
    assert_eq!(parse_progress(" 7 "), 7);
    assert_eq!(parse_progress("150"), 100);
    assert_eq!(parse_progress("-3"), 0);
    assert_eq!(parse_progress("42.9"), 42);
    assert_eq!(parse_progress("abc"), 0);
    assert_eq!(parse_progress(""), 0);

    let mut form = open_draft();
    form.set_phase_field(1, PhaseField::Progress, "abc").unwrap();
    assert_eq!(form.draft().unwrap().phases[1].progress, Some(0.0));
}

#[test]
fn test_field_names_parse_with_aliases() {
    assert_eq!(PhaseField::from_str("plan").unwrap(), PhaseField::DueDate);
    assert_eq!(PhaseField::from_str("actualDate").unwrap(), PhaseField::ActualDate);
    assert_eq!(ProjectField::from_str("code-sale").unwrap(), ProjectField::CodeSale);
    assert!(ProjectField::from_str("budget").is_err());
}

mod common;
use common::{Call, MemoryBackend, project, sample_projects};
use projmgr::core::{FilterCriteria, FormState, PhaseField, ProjectField, ProjectViewModel};
use projmgr::errors::AppError;
use projmgr::models::{ActualDate, Level, PhaseStatus};

fn loaded() -> ProjectViewModel<MemoryBackend> {
    let mut vm = ProjectViewModel::new(MemoryBackend::with(sample_projects()));
    vm.load().unwrap();
    vm
}

#[test]
fn test_load_populates_list_owners_and_stats() {
    let vm = loaded();

    assert_eq!(vm.projects().len(), 4);
    assert_eq!(vm.owners(), ["Tam".to_string(), "Lan".to_string()]);
    assert_eq!(vm.stats().total, 4);
    assert_eq!(vm.stats().completed, 1);
    assert_eq!(vm.stats().delayed, 2);
}

#[test]
fn test_failed_load_keeps_current_list() {
    let mut vm = loaded();
    vm.backend_mut().fail_list = true;

    let err = vm.load().unwrap_err();
    assert!(matches!(err, AppError::Backend(_)));
    assert_eq!(vm.projects().len(), 4);
    assert_eq!(vm.stats().total, 4);
}

#[test]
fn test_stale_response_is_discarded() {
    let mut vm = ProjectViewModel::new(MemoryBackend::default());

    let first = vm.begin_load();
    let second = vm.begin_load();

    let newer = vec![project(2, "Newer", "Lan", Level::B, PhaseStatus::OnTrack)];
    let older = vec![project(1, "Older", "Tam", Level::A, PhaseStatus::OnTrack)];

    assert!(vm.apply_load(second, Ok(newer)).unwrap());
    assert!(!vm.apply_load(first, Ok(older)).unwrap());

    assert_eq!(vm.projects().len(), 1);
    assert_eq!(vm.projects()[0].name, "Newer");
}

#[test]
fn test_filters_apply_to_view_but_not_stats() {
    let mut vm = loaded();
    vm.set_filters(FilterCriteria {
        owner: Some("Tam".into()),
        ..Default::default()
    });

    let names: Vec<&str> = vm.filtered().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Gamma"]);
    assert_eq!(vm.stats().total, 4);
}

#[test]
fn test_unchanged_edit_sends_identical_project() {
    let mut vm = loaded();
    let original = vm.find(2).unwrap().clone();

    vm.open_edit(2).unwrap();
    let id = vm.submit().unwrap();

    assert_eq!(id, 2);
    assert!(
        vm.backend_mut()
            .calls
            .contains(&Call::Update(2, original.clone()))
    );
    assert_eq!(vm.form(), &FormState::Closed);
}

#[test]
fn test_create_then_reload_shows_new_project() {
    let mut vm = loaded();

    vm.open_create();
    vm.set_field(ProjectField::Name, "Epsilon").unwrap();
    vm.set_field(ProjectField::Owner, "Hoa").unwrap();
    vm.set_phase_field_by_name("Flowchart", PhaseField::DueDate, "05/01")
        .unwrap();
    let id = vm.submit().unwrap();

    assert_eq!(id, 5);
    let created = vm.find(5).unwrap();
    assert_eq!(created.name, "Epsilon");
    assert_eq!(created.phases[0].due_date, "05/01");
    assert_eq!(vm.owners().last().map(String::as_str), Some("Hoa"));

    let calls = &vm.backend_mut().calls;
    assert!(matches!(calls[calls.len() - 2], Call::Create(_)));
    assert_eq!(calls.last(), Some(&Call::List));
}

#[test]
fn test_submit_without_name_is_rejected_and_form_stays_open() {
    let mut vm = loaded();
    vm.open_create();
    vm.set_field(ProjectField::Name, "   ").unwrap();

    assert!(matches!(vm.submit(), Err(AppError::MissingName)));
    assert!(vm.form().is_open());
    assert!(
        !vm.backend_mut()
            .calls
            .iter()
            .any(|c| matches!(c, Call::Create(_)))
    );
}

#[test]
fn test_failed_save_keeps_draft_open() {
    let mut vm = loaded();
    vm.backend_mut().fail_save = true;

    vm.open_edit(1).unwrap();
    vm.set_field(ProjectField::CurrentStatus, "Blocked").unwrap();

    assert!(vm.submit().is_err());
    let draft = vm.form().draft().expect("form still open");
    assert_eq!(draft.current_status, "Blocked");
    assert_eq!(vm.find(1).unwrap().current_status, "");
}

#[test]
fn test_open_edit_unknown_id() {
    let mut vm = loaded();
    assert!(matches!(vm.open_edit(99), Err(AppError::ProjectNotFound(99))));
    assert!(!vm.form().is_open());
}

#[test]
fn test_close_discards_unsaved_changes() {
    let mut vm = loaded();
    vm.open_edit(1).unwrap();
    vm.set_field(ProjectField::Name, "Renamed").unwrap();
    vm.close();

    assert!(!vm.form().is_open());
    assert_eq!(vm.find(1).unwrap().name, "Alpha");
    assert!(
        !vm.backend_mut()
            .calls
            .iter()
            .any(|c| matches!(c, Call::Update(..)))
    );
}

#[test]
fn test_declined_delete_sends_nothing() {
    let mut vm = loaded();

    let deleted = vm.delete(3, |p| {
        assert_eq!(p.name, "Gamma");
        false
    });

    assert!(!deleted.unwrap());
    assert_eq!(vm.projects().len(), 4);
    assert!(!vm.backend_mut().calls.contains(&Call::Delete(3)));
}

#[test]
fn test_confirmed_delete_removes_and_reloads() {
    let mut vm = loaded();

    assert!(vm.delete(3, |_| true).unwrap());
    assert!(vm.find(3).is_none());
    assert_eq!(vm.stats().total, 3);
    assert_eq!(vm.stats().completed, 0);
}

#[test]
fn test_failed_delete_keeps_list() {
    let mut vm = loaded();
    vm.backend_mut().fail_delete = true;

    assert!(vm.delete(1, |_| true).is_err());
    assert_eq!(vm.projects().len(), 4);
}

#[test]
fn test_create_is_reported_saved_when_reload_fails() {
    let mut vm = loaded();
    vm.backend_mut().fail_list = true;

    vm.open_create();
    vm.set_field(ProjectField::Name, "Epsilon").unwrap();
    let id = vm.submit().unwrap();

    assert_eq!(id, 5);
    assert!(!vm.form().is_open());
    assert!(
        vm.backend_mut()
            .projects
            .iter()
            .any(|p| p.id == Some(5) && p.name == "Epsilon")
    );
    assert_eq!(vm.projects().len(), 4);
    assert_eq!(vm.backend_mut().calls.last(), Some(&Call::List));
}

#[test]
fn test_edit_is_reported_saved_when_reload_fails() {
    let mut vm = loaded();
    vm.backend_mut().fail_list = true;

    vm.open_edit(2).unwrap();
    vm.set_field(ProjectField::CurrentStatus, "Shipped").unwrap();

    assert_eq!(vm.submit().unwrap(), 2);
    assert!(!vm.form().is_open());
    let stored = vm.backend_mut().projects.iter().find(|p| p.id == Some(2)).cloned();
    assert_eq!(stored.unwrap().current_status, "Shipped");
}

#[test]
fn test_delete_is_reported_done_when_reload_fails() {
    let mut vm = loaded();
    vm.backend_mut().fail_list = true;

    assert!(vm.delete(3, |_| true).unwrap());
    assert!(!vm.backend_mut().projects.iter().any(|p| p.id == Some(3)));
    assert_eq!(vm.projects().len(), 4);
}

#[test]
fn test_edit_sends_blank_and_null_actual_dates_back_unchanged() {
    let mut projects = sample_projects();
    projects[0].phases[0].actual_date = ActualDate::Blank;
    projects[0].phases[1].actual_date = ActualDate::Absent;
    let mut vm = ProjectViewModel::new(MemoryBackend::with(projects));
    vm.load().unwrap();

    vm.open_edit(1).unwrap();
    vm.submit().unwrap();

    let sent = vm.backend_mut().calls.iter().find_map(|c| match c {
        Call::Update(1, p) => Some(p.clone()),
        _ => None,
    });
    let sent = sent.unwrap();
    assert_eq!(sent.phases[0].actual_date, ActualDate::Blank);
    assert_eq!(sent.phases[1].actual_date, ActualDate::Absent);
    assert_eq!(sent.phases[2].actual_date, ActualDate::Pending);

    let wire = serde_json::to_value(&sent).unwrap();
    assert_eq!(wire["phases"][0]["actualDate"], "");
    assert_eq!(wire["phases"][1]["actualDate"], serde_json::Value::Null);
}

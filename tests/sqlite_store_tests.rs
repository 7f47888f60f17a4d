mod common;
use common::sample_projects;
use projmgr::backend::{ProjectBackend, SqliteBackend};
use projmgr::core::{PhaseField, ProjectField, ProjectViewModel};
use projmgr::db::log::load_log;
use projmgr::errors::AppError;
use projmgr::models::{ActualDate, Level, PHASE_NAMES, PhaseStatus};

fn store_with_samples() -> SqliteBackend {
    let mut store = SqliteBackend::in_memory().unwrap();
    for mut p in sample_projects() {
        p.id = None;
        store.create(&p).unwrap();
    }
    store
}

#[test]
fn test_create_and_list_round_trip() {
    let mut store = store_with_samples();
    let listed = store.list().unwrap();

    assert_eq!(listed.len(), 4);
    let originals = sample_projects();
    for (got, want) in listed.iter().zip(originals.iter()) {
        assert_eq!(got.id, want.id);
        assert_eq!(got.name, want.name);
        assert_eq!(got.code_sale, want.code_sale);
        assert_eq!(got.owner, want.owner);
        assert_eq!(got.level, want.level);
        assert_eq!(got.phases, want.phases);
        assert!(got.updated_at.is_some());
    }
}

#[test]
fn test_listed_phases_follow_fixed_order() {
    let mut store = SqliteBackend::in_memory().unwrap();
    let mut p = sample_projects().remove(0);
    p.id = None;
    p.phases.reverse();
    p.phases.truncate(5);
    store.create(&p).unwrap();

    let listed = store.list().unwrap();
    let names: Vec<&str> = listed[0].phases.iter().map(|ph| ph.name.as_str()).collect();
    assert_eq!(names, PHASE_NAMES.to_vec());
}

#[test]
fn test_update_replaces_fields_and_phases() {
    let mut store = store_with_samples();
    let mut p = store.list().unwrap().remove(1);

    p.level = Some(Level::E);
    p.current_status = "Shipped".into();
    p.phases[2].status = PhaseStatus::FinishedLate;
    p.phases[2].due_date = "01/02".into();
    p.phases[2].actual_date = ActualDate::On("03/02".into());
    p.phases[2].progress = Some(100.0);
    store.update(2, &p).unwrap();

    let got = store.list().unwrap().remove(1);
    assert_eq!(got.level, Some(Level::E));
    assert_eq!(got.current_status, "Shipped");
    assert_eq!(got.phases[2], p.phases[2]);
    assert_eq!(got.phases.len(), PHASE_NAMES.len());
}

#[test]
fn test_update_and_delete_unknown_id() {
    let mut store = store_with_samples();
    let p = store.list().unwrap().remove(0);

    assert!(matches!(store.update(42, &p), Err(AppError::ProjectNotFound(42))));
    assert!(matches!(store.delete(42), Err(AppError::ProjectNotFound(42))));
}

#[test]
fn test_delete_removes_project_and_phases() {
    let mut store = store_with_samples();
    store.delete(3).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|p| p.id != Some(3)));

    let orphans: i64 = store
        .pool()
        .conn
        .query_row(
            "SELECT COUNT(*) FROM project_phases WHERE project_id = 3",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn test_mutations_are_audited() {
    let mut store = store_with_samples();
    store.delete(1).unwrap();

    let entries = load_log(&store.pool().conn).unwrap();
    let ops: Vec<&str> = entries
        .iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, vec!["add", "add", "add", "add", "del"]);
    assert!(entries.iter().any(|e| e.operation == "migration_applied"));
}

#[test]
fn test_view_model_over_sqlite() {
    let mut vm = ProjectViewModel::new(SqliteBackend::in_memory().unwrap());
    vm.load().unwrap();
    assert!(vm.projects().is_empty());

    vm.open_create();
    vm.set_field(ProjectField::Name, "Charger 3kW").unwrap();
    vm.set_phase_field(0, PhaseField::DueDate, "10/10").unwrap();
    vm.set_phase_field(0, PhaseField::ActualDate, "11/10").unwrap();
    vm.set_phase_field(0, PhaseField::Status, "FD").unwrap();
    let id = vm.submit().unwrap();

    let saved = vm.find(id).unwrap();
    assert_eq!(saved.phases[0].status, PhaseStatus::FinishedLate);
    assert_eq!(saved.phases[0].progress, Some(100.0));
    assert_eq!(saved.phases[1].actual_date, ActualDate::Pending);
    assert_eq!(vm.stats().delayed, 1);
}

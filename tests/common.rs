#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use projmgr::backend::ProjectBackend;
use projmgr::errors::{AppError, AppResult};
use projmgr::models::{Level, PhaseStatus, Project};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pm() -> Command {
    cargo_bin_cmd!("projmgr")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_projmgr.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Persisted-looking project with every phase at `status`.
pub fn project(id: i64, name: &str, owner: &str, level: Level, status: PhaseStatus) -> Project {
    let mut p = Project::draft();
    p.id = Some(id);
    p.name = name.to_string();
    p.owner = Some(owner.to_string());
    p.level = Some(level);
    for ph in &mut p.phases {
        ph.status = status;
    }
    p
}

/// Alpha (all O), Beta (one S), Gamma (all F), Delta (one FD, no owner).
pub fn sample_projects() -> Vec<Project> {
    let alpha = project(1, "Alpha", "Tam", Level::A, PhaseStatus::OnTrack);

    let mut beta = project(2, "Beta", "Lan", Level::B, PhaseStatus::OnTrack);
    beta.code_sale = Some("SO-2291".into());
    beta.phases[2].status = PhaseStatus::Delayed;

    let mut gamma = project(3, "Gamma", "Tam", Level::S, PhaseStatus::Finished);
    gamma.code_sale = Some("so-7710".into());

    let mut delta = project(4, "Delta inverter", "", Level::A, PhaseStatus::Finished);
    delta.owner = None;
    delta.phases[10].status = PhaseStatus::FinishedLate;

    vec![alpha, beta, gamma, delta]
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(Project),
    Update(i64, Project),
    Delete(i64),
}

/// In-memory backend recording every call, with per-operation failure switches.
#[derive(Default)]
pub struct MemoryBackend {
    pub projects: Vec<Project>,
    pub calls: Vec<Call>,
    pub fail_list: bool,
    pub fail_save: bool,
    pub fail_delete: bool,
}

impl MemoryBackend {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    fn next_id(&self) -> i64 {
        self.projects.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1
    }
}

impl ProjectBackend for MemoryBackend {
    fn list(&mut self) -> AppResult<Vec<Project>> {
        self.calls.push(Call::List);
        if self.fail_list {
            return Err(AppError::Backend("503 Service Unavailable".into()));
        }
        Ok(self.projects.clone())
    }

    fn create(&mut self, project: &Project) -> AppResult<i64> {
        self.calls.push(Call::Create(project.clone()));
        if self.fail_save {
            return Err(AppError::Backend("500 create failed".into()));
        }
        let id = self.next_id();
        let mut stored = project.clone();
        stored.id = Some(id);
        self.projects.push(stored);
        Ok(id)
    }

    fn update(&mut self, id: i64, project: &Project) -> AppResult<()> {
        self.calls.push(Call::Update(id, project.clone()));
        if self.fail_save {
            return Err(AppError::Backend("500 update failed".into()));
        }
        let slot = self
            .projects
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(AppError::ProjectNotFound(id))?;
        *slot = project.clone();
        slot.id = Some(id);
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        self.calls.push(Call::Delete(id));
        if self.fail_delete {
            return Err(AppError::Backend("500 delete failed".into()));
        }
        let before = self.projects.len();
        self.projects.retain(|p| p.id != Some(id));
        if self.projects.len() == before {
            return Err(AppError::ProjectNotFound(id));
        }
        Ok(())
    }
}

//! Project view model: the cached project list, its derived views, and the
//! create/edit form. All mutations go through the methods below.

use crate::backend::ProjectBackend;
use crate::core::filter::{FilterCriteria, distinct_owners, filter_projects};
use crate::core::form::{FormMode, FormState, PhaseField, ProjectField};
use crate::core::stats::{Stats, compute_stats};
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::ui::messages::error;

/// Identifies one list request. Responses carrying a ticket older than the
/// last applied one are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

pub struct ProjectViewModel<B: ProjectBackend> {
    backend: B,
    projects: Vec<Project>,
    owners: Vec<String>,
    stats: Stats,
    filters: FilterCriteria,
    form: FormState,
    issued: u64,
    applied: u64,
}

impl<B: ProjectBackend> ProjectViewModel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            projects: Vec::new(),
            owners: Vec::new(),
            stats: Stats::default(),
            filters: FilterCriteria::default(),
            form: FormState::Closed,
            issued: 0,
            applied: 0,
        }
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Distinct non-blank owners of the loaded list.
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// Counters over the unfiltered list, refreshed on every applied load.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn filtered(&self) -> Vec<&Project> {
        filter_projects(&self.projects, &self.filters)
    }

    pub fn find(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == Some(id))
    }

    // ---------------------------
    // Loading
    // ---------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply a list response. Returns `Ok(false)` when the response is stale.
    /// On error the current list is kept as is.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: AppResult<Vec<Project>>,
    ) -> AppResult<bool> {
        let projects = result?;
        if ticket.0 < self.applied {
            return Ok(false);
        }
        self.applied = ticket.0;
        self.owners = distinct_owners(&projects);
        self.stats = compute_stats(&projects);
        self.projects = projects;
        Ok(true)
    }

    /// Fetch the full list and replace the cache.
    pub fn load(&mut self) -> AppResult<()> {
        let ticket = self.begin_load();
        let result = self.backend.list();
        self.apply_load(ticket, result)?;
        Ok(())
    }

    // ---------------------------
    // Form
    // ---------------------------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the form on a copy of the loaded project `id`.
    pub fn open_edit(&mut self, id: i64) -> AppResult<()> {
        let project = self.find(id).ok_or(AppError::ProjectNotFound(id))?.clone();
        self.form.open_edit(&project)
    }

    pub fn set_field(&mut self, field: ProjectField, value: &str) -> AppResult<()> {
        self.form.set_field(field, value)
    }

    pub fn set_phase_field(&mut self, index: usize, field: PhaseField, value: &str) -> AppResult<()> {
        self.form.set_phase_field(index, field, value)
    }

    pub fn set_phase_field_by_name(
        &mut self,
        name: &str,
        field: PhaseField,
        value: &str,
    ) -> AppResult<()> {
        self.form.set_phase_field_by_name(name, field, value)
    }

    pub fn close(&mut self) {
        self.form.close();
    }

    /// Persist the draft (create without id, update otherwise), then close the
    /// form and reload. A failed save leaves the form open with the draft intact;
    /// a failed reload does not fail the submit.
    pub fn submit(&mut self) -> AppResult<i64> {
        let (mode, draft) = match &self.form {
            FormState::Open { mode, draft } => (*mode, draft),
            FormState::Closed => return Err(AppError::FormClosed),
        };

        if draft.name.trim().is_empty() {
            return Err(AppError::MissingName);
        }

        let id = match (draft.id, mode) {
            (Some(id), _) | (None, FormMode::Edit { original_id: id }) => {
                self.backend.update(id, draft)?;
                id
            }
            (None, FormMode::Create) => self.backend.create(draft)?,
        };

        self.form.close();
        self.reload_after_change();
        Ok(id)
    }

    /// Delete after `confirm` approves. Returns `Ok(false)` when declined.
    pub fn delete<F>(&mut self, id: i64, confirm: F) -> AppResult<bool>
    where
        F: FnOnce(&Project) -> bool,
    {
        let project = self.find(id).ok_or(AppError::ProjectNotFound(id))?;
        if !confirm(project) {
            return Ok(false);
        }
        self.backend.delete(id)?;
        self.reload_after_change();
        Ok(true)
    }

    /// The change is already stored: a failed reload is reported and the
    /// previous list stays until the next successful load.
    fn reload_after_change(&mut self) {
        if let Err(e) = self.load() {
            error(format!("Saved, but reloading the project list failed: {}", e));
        }
    }
}

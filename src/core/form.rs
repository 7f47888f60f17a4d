//! Create/edit session over a draft project.
//!
//! The draft is a deep copy: nothing here touches the loaded list until the
//! view model submits it. Phase status changes to F/FD are gated on both
//! dates being present at the moment of the edit.

use crate::errors::{AppError, AppResult, MissingDate};
use crate::models::phase::phase_index;
use crate::models::{ActualDate, Level, PHASE_COUNT, PhaseStatus, Project};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { original_id: i64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Open { mode: FormMode, draft: Project },
}

/// Top-level draft attributes editable through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    CodeSale,
    Owner,
    Level,
    CurrentStatus,
}

impl FromStr for ProjectField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProjectField::Name),
            "codeSale" | "code_sale" | "code-sale" => Ok(ProjectField::CodeSale),
            "owner" => Ok(ProjectField::Owner),
            "level" => Ok(ProjectField::Level),
            "currentStatus" | "current_status" | "current-status" => {
                Ok(ProjectField::CurrentStatus)
            }
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}

/// Per-phase attributes editable through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseField {
    Status,
    DueDate,
    ActualDate,
    Progress,
}

impl FromStr for PhaseField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(PhaseField::Status),
            "dueDate" | "due_date" | "due" | "plan" => Ok(PhaseField::DueDate),
            "actualDate" | "actual_date" | "actual" => Ok(PhaseField::ActualDate),
            "progress" => Ok(PhaseField::Progress),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}

impl FormState {
    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open { .. })
    }

    pub fn draft(&self) -> Option<&Project> {
        match self {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    fn draft_mut(&mut self) -> AppResult<&mut Project> {
        match self {
            FormState::Open { draft, .. } => Ok(draft),
            FormState::Closed => Err(AppError::FormClosed),
        }
    }

    /// Open on a fresh draft.
    pub fn open_create(&mut self) {
        *self = FormState::Open {
            mode: FormMode::Create,
            draft: Project::draft(),
        };
    }

    /// Open on a deep copy of a persisted project.
    pub fn open_edit(&mut self, project: &Project) -> AppResult<()> {
        let original_id = project
            .id
            .ok_or_else(|| AppError::Other("cannot edit a project without id".into()))?;
        *self = FormState::Open {
            mode: FormMode::Edit { original_id },
            draft: project.clone(),
        };
        Ok(())
    }

    /// Discard the draft, unsaved changes included.
    pub fn close(&mut self) {
        *self = FormState::Closed;
    }

    pub fn set_field(&mut self, field: ProjectField, value: &str) -> AppResult<()> {
        let draft = self.draft_mut()?;
        match field {
            ProjectField::Name => draft.name = value.to_string(),
            ProjectField::CodeSale => draft.code_sale = optional_text(value),
            ProjectField::Owner => draft.owner = optional_text(value),
            ProjectField::Level => {
                draft.level = if value.trim().is_empty() {
                    None
                } else {
                    Some(
                        Level::from_code(value)
                            .ok_or_else(|| AppError::InvalidLevel(value.to_string()))?,
                    )
                };
            }
            ProjectField::CurrentStatus => draft.current_status = value.to_string(),
        }
        Ok(())
    }

    /// Edit one phase of the draft. On error the draft is left untouched.
    pub fn set_phase_field(&mut self, index: usize, field: PhaseField, value: &str) -> AppResult<()> {
        let draft = self.draft_mut()?;
        if index >= PHASE_COUNT || index >= draft.phases.len() {
            return Err(AppError::InvalidPhase(format!("index {}", index)));
        }
        let phase = &mut draft.phases[index];

        match field {
            PhaseField::Status => {
                let status = PhaseStatus::from_code(value)
                    .ok_or_else(|| AppError::InvalidStatus(value.to_string()))?;

                if status.is_completion() {
                    if !phase.has_due_date() {
                        return Err(AppError::PhaseGate {
                            phase: phase.name.clone(),
                            missing: MissingDate::Plan,
                        });
                    }
                    if !phase.has_actual_date() {
                        return Err(AppError::PhaseGate {
                            phase: phase.name.clone(),
                            missing: MissingDate::Actual,
                        });
                    }
                    phase.progress = Some(100.0);
                }
                phase.status = status;
            }
            PhaseField::DueDate => phase.due_date = value.to_string(),
            PhaseField::ActualDate => phase.actual_date = ActualDate::from_text(value),
            PhaseField::Progress => phase.progress = Some(f64::from(parse_progress(value))),
        }
        Ok(())
    }

    /// Same as [`set_phase_field`](Self::set_phase_field), addressing the phase by name.
    pub fn set_phase_field_by_name(
        &mut self,
        name: &str,
        field: PhaseField,
        value: &str,
    ) -> AppResult<()> {
        let index = phase_index(name).ok_or_else(|| AppError::InvalidPhase(name.to_string()))?;
        self.set_phase_field(index, field, value)
    }
}

/// Integer coercion for progress input; anything non-numeric becomes 0.
pub fn parse_progress(value: &str) -> u8 {
    let v = value.trim();
    if let Ok(n) = v.parse::<i64>() {
        return clamp_progress(n);
    }
    match v.parse::<f64>() {
        Ok(f) if f.is_finite() => clamp_progress(f.trunc() as i64),
        _ => 0,
    }
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

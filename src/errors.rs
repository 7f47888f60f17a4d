//! Unified application error type.
//! All modules (models, core, backend, db, export, cli) return AppError to
//! keep the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Which date is missing when a phase cannot be marked completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDate {
    Plan,
    Actual,
}

impl std::fmt::Display for MissingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingDate::Plan => f.write_str("PLAN"),
            MissingDate::Actual => f.write_str("ACTUAL"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage / transport
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Phase '{phase}': you must enter {missing} before changing the status to F/FD")]
    PhaseGate { phase: String, missing: MissingDate },

    #[error("Project name is required")]
    MissingName,

    #[error("Invalid level: {0} (expected one of A, B, C, D, E, S)")]
    InvalidLevel(String),

    #[error("Invalid phase status: {0} (expected one of O, S, F, FD)")]
    InvalidStatus(String),

    #[error("Invalid phase: {0}")]
    InvalidPhase(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("No project form is open")]
    FormClosed,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Validation failures never reach the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::PhaseGate { .. }
                | AppError::MissingName
                | AppError::InvalidLevel(_)
                | AppError::InvalidStatus(_)
                | AppError::InvalidPhase(_)
                | AppError::InvalidField(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

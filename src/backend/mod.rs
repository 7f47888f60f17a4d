//! Persistence collaborator seen by the view model.
//!
//! Two implementations: [`HttpBackend`] talks to the project REST API,
//! [`SqliteBackend`] keeps the same records in a local SQLite file.

pub mod http;
pub mod sqlite;

pub use http::HttpBackend;
pub use sqlite::SqliteBackend;

use crate::config::{BackendKind, Config};
use crate::errors::AppResult;
use crate::models::Project;

pub trait ProjectBackend {
    /// Full project list.
    fn list(&mut self) -> AppResult<Vec<Project>>;

    /// Persist a draft, returning the assigned id.
    fn create(&mut self, project: &Project) -> AppResult<i64>;

    /// Replace the stored record (and all its phases) with `project`.
    fn update(&mut self, id: i64, project: &Project) -> AppResult<()>;

    fn delete(&mut self, id: i64) -> AppResult<()>;
}

impl<B: ProjectBackend + ?Sized> ProjectBackend for Box<B> {
    fn list(&mut self) -> AppResult<Vec<Project>> {
        (**self).list()
    }

    fn create(&mut self, project: &Project) -> AppResult<i64> {
        (**self).create(project)
    }

    fn update(&mut self, id: i64, project: &Project) -> AppResult<()> {
        (**self).update(id, project)
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        (**self).delete(id)
    }
}

/// Backend selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn ProjectBackend>> {
    match cfg.backend {
        BackendKind::Http => Ok(Box::new(HttpBackend::new(&cfg.api_url)?)),
        BackendKind::Sqlite => Ok(Box::new(SqliteBackend::open(&cfg.database)?)),
    }
}

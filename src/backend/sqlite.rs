use super::ProjectBackend;
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::ui::messages::warning;

/// Local store with the same contract as the REST API.
pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::migrated(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::migrated(DbPool::in_memory()?)
    }

    fn migrated(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn).map_err(|e| AppError::Migration(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Audit entries are best effort: a failed write never fails the mutation.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

impl ProjectBackend for SqliteBackend {
    fn list(&mut self) -> AppResult<Vec<Project>> {
        queries::fetch_all_projects(&self.pool.conn)
    }

    fn create(&mut self, project: &Project) -> AppResult<i64> {
        let id = queries::insert_project(&mut self.pool.conn, project)?;
        self.audit(
            "add",
            &format!("#{}", id),
            &format!("Created project '{}'", project.name),
        );
        Ok(id)
    }

    fn update(&mut self, id: i64, project: &Project) -> AppResult<()> {
        queries::update_project(&mut self.pool.conn, id, project)?;
        self.audit(
            "edit",
            &format!("#{}", id),
            &format!("Updated project '{}'", project.name),
        );
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        queries::delete_project(&mut self.pool.conn, id)?;
        self.audit("del", &format!("#{}", id), "Deleted project");
        Ok(())
    }
}

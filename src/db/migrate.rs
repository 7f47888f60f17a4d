use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A named schema step. Applied steps are recorded in the `log` table
/// (`operation = 'migration_applied'`, `target = version`).
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251101_0001_create_projects",
        description: "Created projects and project_phases tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS projects (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            name           TEXT NOT NULL,
            code_sale      TEXT,
            owner          TEXT,
            level          TEXT,
            current_status TEXT,
            created_at     TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at     TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS project_phases (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id  INTEGER NOT NULL,
            phase_name  TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'O',
            due_date    TEXT,
            actual_date TEXT,
            progress    REAL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at  TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
        );
        "#,
    },
    Migration {
        version: "20251101_0002_phase_triggers",
        description: "Phase writes now bump projects.updated_at",
        sql: r#"
        DROP TRIGGER IF EXISTS trg_phases_after_insert;
        DROP TRIGGER IF EXISTS trg_phases_after_update;
        DROP TRIGGER IF EXISTS trg_phases_after_delete;

        CREATE TRIGGER trg_phases_after_insert
        AFTER INSERT ON project_phases
        FOR EACH ROW
        BEGIN
            UPDATE projects SET updated_at = datetime('now') WHERE id = NEW.project_id;
        END;

        CREATE TRIGGER trg_phases_after_update
        AFTER UPDATE ON project_phases
        FOR EACH ROW
        BEGIN
            UPDATE projects SET updated_at = datetime('now') WHERE id = NEW.project_id;
        END;

        CREATE TRIGGER trg_phases_after_delete
        AFTER DELETE ON project_phases
        FOR EACH ROW
        BEGIN
            UPDATE projects SET updated_at = datetime('now') WHERE id = OLD.project_id;
        END;
        "#,
    },
    Migration {
        version: "20251101_0003_phase_project_index",
        description: "Added index on project_phases(project_id)",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_phases_project ON project_phases(project_id, id);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked whenever the local store is opened. Returns the number of steps applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}

use crate::errors::{AppError, AppResult};
use crate::models::{ActualDate, Level, Phase, PhaseStatus, Project};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};
use std::collections::HashMap;

/// Load every project with its phases, ordered by project id then phase row id.
pub fn fetch_all_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, code_sale, owner, level, current_status, updated_at
         FROM projects
         ORDER BY id",
    )?;
    let rows = stmt.query_map([], map_project_row)?;

    let mut projects = Vec::new();
    for r in rows {
        projects.push(r?);
    }

    let mut phases_by_project: HashMap<i64, Vec<Phase>> = HashMap::new();
    let mut stmt = conn.prepare(
        "SELECT project_id, phase_name, status, due_date, actual_date, progress
         FROM project_phases
         ORDER BY project_id, id",
    )?;
    let rows = stmt.query_map([], |row| {
        let project_id: i64 = row.get("project_id")?;
        Ok((project_id, map_phase_row(row)?))
    })?;
    for r in rows {
        let (project_id, phase) = r?;
        phases_by_project.entry(project_id).or_default().push(phase);
    }

    for p in &mut projects {
        if let Some(id) = p.id {
            p.phases = phases_by_project.remove(&id).unwrap_or_default();
        }
        p.normalize_phases();
    }

    Ok(projects)
}

fn map_project_row(row: &Row) -> rusqlite::Result<Project> {
    let level: Option<String> = row.get("level")?;
    let updated_raw: Option<String> = row.get("updated_at")?;

    Ok(Project {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        code_sale: row.get("code_sale")?,
        owner: row.get("owner")?,
        level: level.as_deref().and_then(Level::from_db_str),
        current_status: row
            .get::<_, Option<String>>("current_status")?
            .unwrap_or_default(),
        updated_at: updated_raw.map(|raw| sqlite_ts_to_rfc3339(&raw)),
        phases: Vec::new(),
    })
}

fn map_phase_row(row: &Row) -> rusqlite::Result<Phase> {
    let status: String = row.get("status")?;
    let due: Option<String> = row.get("due_date")?;
    let actual: Option<String> = row.get("actual_date")?;
    let progress: Option<f64> = row.get("progress")?;

    Ok(Phase {
        name: row.get("phase_name")?,
        status: PhaseStatus::from_db_str(&status).unwrap_or_default(),
        due_date: due.unwrap_or_default(),
        actual_date: ActualDate::from(actual.as_deref()),
        progress,
    })
}

/// SQLite `datetime('now')` is UTC "YYYY-MM-DD HH:MM:SS"; expose it as RFC 3339.
fn sqlite_ts_to_rfc3339(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.and_utc().to_rfc3339(),
        Err(_) => raw.to_string(),
    }
}

fn insert_phases(conn: &Connection, project_id: i64, project: &Project) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO project_phases
         (project_id, phase_name, status, due_date, actual_date, progress)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    for ph in &project.phases {
        stmt.execute(params![
            project_id,
            ph.name,
            ph.status.code(),
            ph.due_date,
            ph.actual_date.as_text(),
            ph.progress,
        ])?;
    }
    Ok(())
}

/// Insert a project and its phases; returns the new id.
pub fn insert_project(conn: &mut Connection, project: &Project) -> AppResult<i64> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO projects (name, code_sale, owner, level, current_status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            project.name,
            project.code_sale,
            project.owner,
            project.level.map(|l| l.code()),
            project.current_status,
        ],
    )?;
    let id = tx.last_insert_rowid();

    insert_phases(&tx, id, project)?;
    tx.commit()?;
    Ok(id)
}

/// Overwrite a project's fields and replace all of its phase rows.
pub fn update_project(conn: &mut Connection, id: i64, project: &Project) -> AppResult<()> {
    let tx = conn.transaction()?;

    let changed = tx.execute(
        "UPDATE projects
         SET name = ?1, code_sale = ?2, owner = ?3, level = ?4, current_status = ?5,
             updated_at = datetime('now')
         WHERE id = ?6",
        params![
            project.name,
            project.code_sale,
            project.owner,
            project.level.map(|l| l.code()),
            project.current_status,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::ProjectNotFound(id));
    }

    tx.execute("DELETE FROM project_phases WHERE project_id = ?1", [id])?;
    insert_phases(&tx, id, project)?;

    tx.commit()?;
    Ok(())
}

pub fn delete_project(conn: &mut Connection, id: i64) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM project_phases WHERE project_id = ?1", [id])?;
    let affected = tx.execute("DELETE FROM projects WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(AppError::ProjectNotFound(id));
    }
    tx.commit()?;
    Ok(())
}

// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::matrix::ExportMatrix;
use crate::export::notify_export_success;
use crate::models::Project;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct ProjectsDocument<'a> {
    projects: &'a [&'a Project],
}

/// Export JSON pretty-printed: `{"projects": [...]}`.
pub(crate) fn export_json(projects: &[&Project], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&ProjectsDocument { projects })?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: the same rows as the spreadsheet, both header rows included.
pub(crate) fn export_csv(matrix: &ExportMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for row in &matrix.rows {
        wtr.write_record(row.iter().map(|c| c.as_text()))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

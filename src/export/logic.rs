// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::matrix::{build_export_matrix, export_filename};
use crate::export::xlsx::export_xlsx;
use crate::models::Project;
use chrono::{FixedOffset, NaiveDate};
use std::path::{Path, PathBuf};

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Default output file name for `format` on `date`.
    ///
    /// - xlsx: `KHDACD1_yyMMdd.xlsx`
    /// - csv:  `KHDACD1_yyMMdd.csv`
    /// - json: `projects_export.json`
    pub fn default_file_name(format: ExportFormat, date: NaiveDate) -> String {
        match format {
            ExportFormat::Xlsx => export_filename(date),
            ExportFormat::Csv => export_filename(date).replace(".xlsx", ".csv"),
            ExportFormat::Json => "projects_export.json".to_string(),
        }
    }

    /// Resolve the output path: an explicit `file` wins, otherwise the default
    /// name inside `export_dir`.
    pub fn resolve_path(
        format: ExportFormat,
        file: Option<&str>,
        export_dir: &str,
        date: NaiveDate,
    ) -> PathBuf {
        match file {
            Some(f) => PathBuf::from(f),
            None => Path::new(export_dir).join(Self::default_file_name(format, date)),
        }
    }

    /// Export the (already filtered) projects, in order.
    pub fn export(
        projects: &[&Project],
        format: ExportFormat,
        path: &Path,
        offset: FixedOffset,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&build_export_matrix(projects, offset), path),
            ExportFormat::Csv => export_csv(&build_export_matrix(projects, offset), path),
            ExportFormat::Json => export_json(projects, path),
        }
    }
}

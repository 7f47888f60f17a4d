// src/export/matrix.rs

use crate::models::{PHASE_COUNT, PHASE_NAMES, Project};
use crate::utils::date::format_updated_at;
use chrono::{FixedOffset, NaiveDate};

/// Leading columns: index, name, sale code, owner, level.
pub const LEADING_HEADERS: [&str; 5] = [
    "STT",
    "Tên dự án",
    "Code Sale",
    "Người phụ trách",
    "Cấp độ",
];

/// Label spanning the eleven phase columns in the first header row.
pub const PHASE_GROUP_HEADER: &str = "Các công đoạn thiết kế";

/// Trailing columns: current status, update time.
pub const TRAILING_HEADERS: [&str; 2] = ["Hiện trạng", "Thời gian cập nhật"];

pub const HEADER_ROWS: u32 = 2;
pub const COLUMN_COUNT: u16 = (LEADING_HEADERS.len() + PHASE_COUNT + TRAILING_HEADERS.len()) as u16;

pub const SHEET_NAME: &str = "Projects";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Inclusive, zero-based cell range to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRegion {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl MergeRegion {
    fn vertical(col: u16) -> Self {
        Self {
            first_row: 0,
            first_col: col,
            last_row: HEADER_ROWS - 1,
            last_col: col,
        }
    }
}

/// Rectangular sheet content handed to a writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMatrix {
    pub rows: Vec<Vec<Cell>>,
    pub merges: Vec<MergeRegion>,
}

impl ExportMatrix {
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        &self.rows[HEADER_ROWS as usize..]
    }
}

fn header_rows() -> [Vec<Cell>; 2] {
    let mut first: Vec<Cell> = LEADING_HEADERS.iter().map(|h| Cell::text(*h)).collect();
    first.push(Cell::text(PHASE_GROUP_HEADER));
    first.extend((1..PHASE_COUNT).map(|_| Cell::text("")));
    first.extend(TRAILING_HEADERS.iter().map(|h| Cell::text(*h)));

    let mut second: Vec<Cell> = LEADING_HEADERS.iter().map(|_| Cell::text("")).collect();
    second.extend(PHASE_NAMES.iter().map(|n| Cell::text(*n)));
    second.extend(TRAILING_HEADERS.iter().map(|_| Cell::text("")));

    [first, second]
}

fn merge_regions() -> Vec<MergeRegion> {
    let lead = LEADING_HEADERS.len() as u16;
    let phases = PHASE_COUNT as u16;

    let mut merges: Vec<MergeRegion> = (0..lead).map(MergeRegion::vertical).collect();
    merges.push(MergeRegion {
        first_row: 0,
        first_col: lead,
        last_row: 0,
        last_col: lead + phases - 1,
    });
    merges.extend((lead + phases..COLUMN_COUNT).map(MergeRegion::vertical));
    merges
}

/// Multi-line cell describing one phase. Sub-fields print as stored, blank
/// when missing (or when the whole phase is absent).
pub fn phase_cell(project: &Project, phase_name: &str) -> String {
    let (status, plan, actual, progress) = match project.phase(phase_name) {
        Some(ph) => (
            ph.status.code().to_string(),
            ph.due_date.clone(),
            ph.actual_date.as_text().unwrap_or_default().to_string(),
            ph.progress.map(|p| format!("{}%", p)).unwrap_or_default(),
        ),
        None => Default::default(),
    };

    format!(
        "Status: {}\nPlan: {}\nActual: {}\nProgress: {}",
        status, plan, actual, progress
    )
}

fn project_row(index: usize, project: &Project, offset: FixedOffset) -> Vec<Cell> {
    let mut row = vec![
        Cell::Number((index + 1) as f64),
        Cell::text(project.name.as_str()),
        Cell::text(project.code_sale_str()),
        Cell::text(project.owner_str()),
        Cell::text(project.level_str()),
    ];
    row.extend(
        PHASE_NAMES
            .iter()
            .map(|name| Cell::Text(phase_cell(project, name))),
    );
    row.push(Cell::text(project.current_status.as_str()));
    row.push(Cell::Text(format_updated_at(
        project.updated_at.as_deref(),
        offset,
    )));
    row
}

/// Two header rows plus one row per project, in the given order, and the
/// eight header merges.
pub fn build_export_matrix(projects: &[&Project], offset: FixedOffset) -> ExportMatrix {
    let mut rows: Vec<Vec<Cell>> = header_rows().into_iter().collect();
    rows.extend(
        projects
            .iter()
            .enumerate()
            .map(|(i, p)| project_row(i, p, offset)),
    );

    ExportMatrix {
        rows,
        merges: merge_regions(),
    }
}

/// `KHDACD1_yyMMdd.xlsx`
pub fn export_filename(date: NaiveDate) -> String {
    format!("KHDACD1_{}.xlsx", date.format("%y%m%d"))
}

// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::matrix::{Cell, ExportMatrix, HEADER_ROWS, MergeRegion, SHEET_NAME};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_COLUMN_WIDTH: usize = 40;

/// Write the matrix to a single-sheet workbook, applying the header merges.
pub(crate) fn export_xlsx(matrix: &ExportMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();

    let body_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Top)
        .set_text_wrap();

    write_header(worksheet, matrix, &header_format)?;

    // ---------------------------
    // Data rows
    // ---------------------------
    for (offset, cells) in matrix.data_rows().iter().enumerate() {
        let row = HEADER_ROWS + offset as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Number(n) => {
                    worksheet
                        .write_number_with_format(row, col, *n, &body_format)
                        .map_err(to_export_error)?;
                }
                Cell::Text(s) => {
                    worksheet
                        .write_string_with_format(row, col, s, &body_format)
                        .map_err(to_export_error)?;
                }
            }
        }
    }

    worksheet
        .set_freeze_panes(HEADER_ROWS, 0)
        .map_err(to_export_error)?;

    for (col, width) in column_widths(matrix).into_iter().enumerate() {
        worksheet
            .set_column_width(col as u16, width as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn covered_by(merges: &[MergeRegion], row: u32, col: u16) -> bool {
    merges.iter().any(|m| {
        (m.first_row..=m.last_row).contains(&row) && (m.first_col..=m.last_col).contains(&col)
    })
}

fn write_header(worksheet: &mut Worksheet, matrix: &ExportMatrix, fmt: &Format) -> AppResult<()> {
    for m in &matrix.merges {
        let label = matrix.rows[m.first_row as usize][m.first_col as usize].as_text();
        worksheet
            .merge_range(m.first_row, m.first_col, m.last_row, m.last_col, &label, fmt)
            .map_err(to_export_error)?;
    }

    for (row, cells) in matrix.rows.iter().take(HEADER_ROWS as usize).enumerate() {
        let row = row as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            if covered_by(&matrix.merges, row, col) {
                continue;
            }
            worksheet
                .write_string_with_format(row, col, cell.as_text(), fmt)
                .map_err(to_export_error)?;
        }
    }
    Ok(())
}

fn spans_columns(merges: &[MergeRegion], row: u32, col: u16) -> bool {
    merges
        .iter()
        .any(|m| m.first_row == row && m.first_col == col && m.last_col > m.first_col)
}

/// Widest line per column, capped.
fn column_widths(matrix: &ExportMatrix) -> Vec<usize> {
    let cols = matrix.rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];

    for (row_idx, cells) in matrix.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            // a label spanning several columns does not size its first one
            if spans_columns(&matrix.merges, row_idx as u32, col as u16) {
                continue;
            }
            let text = cell.as_text();
            let w = text
                .lines()
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            widths[col] = widths[col].max(w.min(MAX_COLUMN_WIDTH));
        }
    }
    widths
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

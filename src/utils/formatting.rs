//! Formatting utilities used for CLI outputs.

use crate::models::{Phase, PhaseStatus};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Human label of a status code, for legends and `show`.
pub fn describe_status(status: PhaseStatus) -> String {
    format!("{} = {}", status.code(), status.describe())
}

/// "Status | Plan | Actual | Progress" on one line.
pub fn phase_summary(phase: &Phase) -> String {
    let progress = phase
        .progress
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<2} | {:<8} | {:<8} | {:>4}",
        phase.status.code(),
        phase.due_date,
        phase.actual_date_display(),
        progress
    )
}

/// Fixed-width textual progress bar, e.g. `[#####-----]`.
pub fn progress_bar(progress: Option<f64>, width: usize) -> String {
    let p = progress.unwrap_or(0.0).clamp(0.0, 100.0);
    let filled = ((p * width as f64) / 100.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

//! ANSI color helper utilities for terminal output.

use crate::models::PhaseStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Legend colours: F green, FD magenta, S red, O blue.
pub fn color_for_status(status: PhaseStatus) -> &'static str {
    match status {
        PhaseStatus::Finished => GREEN,
        PhaseStatus::FinishedLate => MAGENTA,
        PhaseStatus::Delayed => RED,
        PhaseStatus::OnTrack => BLUE,
    }
}

pub fn colorize_status(status: PhaseStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.code(), RESET)
}

/// Grey for empty placeholders ("" or "-"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Yellow when at least one delayed project exists.
pub fn color_for_delayed(count: usize) -> &'static str {
    if count > 0 { YELLOW } else { RESET }
}

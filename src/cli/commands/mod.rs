//! One handler per subcommand, plus the helpers they share.

pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod stats;
pub mod watch;

use crate::backend::{self, ProjectBackend};
use crate::cli::parser::{FilterArgs, ProjectArgs};
use crate::config::Config;
use crate::core::{FilterCriteria, PhaseField, ProjectField, ProjectViewModel, Stats};
use crate::errors::{AppError, AppResult};
use crate::models::phase::phase_index;
use crate::models::{Level, PHASE_COUNT, PhaseStatus, Project};
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_delayed, colorize_optional, colorize_status};
use crate::utils::date::{display_offset, format_updated_at};
use crate::utils::table::{Column, Table};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

pub(crate) type CliViewModel = ProjectViewModel<Box<dyn ProjectBackend>>;

/// View model on the configured backend, with the list loaded.
pub(crate) fn open_loaded(cfg: &Config) -> AppResult<CliViewModel> {
    let mut vm = ProjectViewModel::new(backend::open(cfg)?);
    vm.load()?;
    Ok(vm)
}

pub(crate) fn filters_from_args(args: &FilterArgs) -> AppResult<FilterCriteria> {
    let level = match args.level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(l) => Some(Level::from_code(l).ok_or_else(|| AppError::InvalidLevel(l.into()))?),
    };
    let status = match args.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(PhaseStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.into()))?),
    };

    Ok(FilterCriteria {
        search: args.search.clone().unwrap_or_default(),
        owner: args.owner.clone().filter(|o| !o.is_empty()),
        level,
        status,
    })
}

/// A parsed `--phase "<phase>:<field>=<value>"` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhaseEdit {
    pub index: usize,
    pub field: PhaseField,
    pub value: String,
}

fn phase_edit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?P<phase>[^:]+?)\s*:\s*(?P<field>[A-Za-z_]+)\s*=(?P<value>.*)$")
            .expect("valid phase edit pattern")
    })
}

fn plan_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}/\d{1,2}$").expect("valid plan date pattern"))
}

pub(crate) fn parse_phase_edit(raw: &str) -> AppResult<PhaseEdit> {
    let caps = phase_edit_re()
        .captures(raw)
        .ok_or_else(|| AppError::InvalidPhase(format!("expected PHASE:FIELD=VALUE, got '{}'", raw)))?;

    let phase = &caps["phase"];
    let index = match phase.parse::<usize>() {
        Ok(n) if (1..=PHASE_COUNT).contains(&n) => n - 1,
        Ok(_) => return Err(AppError::InvalidPhase(phase.to_string())),
        Err(_) => phase_index(phase).ok_or_else(|| AppError::InvalidPhase(phase.to_string()))?,
    };

    Ok(PhaseEdit {
        index,
        field: PhaseField::from_str(&caps["field"])?,
        value: caps["value"].trim().to_string(),
    })
}

/// Apply the given field and phase options to the open draft, in order.
/// Stops at the first rejected change.
pub(crate) fn apply_project_args(vm: &mut CliViewModel, args: &ProjectArgs) -> AppResult<()> {
    let fields = [
        (ProjectField::Name, &args.name),
        (ProjectField::CodeSale, &args.code_sale),
        (ProjectField::Owner, &args.owner),
        (ProjectField::Level, &args.level),
        (ProjectField::CurrentStatus, &args.current_status),
    ];
    for (field, value) in fields {
        if let Some(v) = value {
            vm.set_field(field, v)?;
        }
    }

    for raw in &args.phases {
        let edit = parse_phase_edit(raw)?;
        if edit.field == PhaseField::DueDate
            && !edit.value.is_empty()
            && !plan_date_re().is_match(&edit.value)
        {
            warning(format!(
                "Plan date '{}' is not in dd/mm format; stored as typed.",
                edit.value
            ));
        }
        vm.set_phase_field(edit.index, edit.field, &edit.value)?;
    }
    Ok(())
}

pub(crate) fn projects_table(projects: &[&Project], cfg: &Config) -> Table {
    let offset = display_offset(cfg.display_utc_offset_hours);

    let mut columns = vec![
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Code Sale"),
        Column::new("Owner"),
        Column::new("Lvl"),
    ];
    columns.extend((1..=PHASE_COUNT).map(|n| Column::new(&format!("P{}", n))));
    columns.push(Column::new("Current status"));
    columns.push(Column::new("Updated"));

    let mut table = Table::new(columns);
    for p in projects {
        let mut row = vec![
            p.id.map(|id| id.to_string()).unwrap_or_default(),
            p.name.clone(),
            colorize_optional(p.code_sale.as_deref().unwrap_or("-")),
            colorize_optional(p.owner.as_deref().unwrap_or("-")),
            colorize_optional(p.level.map(|l| l.code()).unwrap_or("-")),
        ];
        row.extend(p.phases.iter().map(|ph| colorize_status(ph.status)));
        row.push(colorize_optional(if p.current_status.is_empty() {
            "-"
        } else {
            p.current_status.as_str()
        }));
        row.push(colorize_optional(&format_updated_at(
            p.updated_at.as_deref(),
            offset,
        )));
        table.add_row(row);
    }
    table
}

pub(crate) fn stats_line(stats: Stats) -> String {
    format!(
        "Total: {} | Completed: {} | {}Delayed: {}{}",
        stats.total,
        stats.completed,
        color_for_delayed(stats.delayed),
        stats.delayed,
        RESET
    )
}

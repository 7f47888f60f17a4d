use super::{filters_from_args, projects_table, stats_line};
use crate::backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ProjectViewModel;
use crate::errors::AppResult;
use crate::ui::messages::{error, header};
use chrono::Local;
use std::thread;
use std::time::Duration;

/// Handle the `watch` command.
///
/// Reloads on a fixed period, whatever happened on the previous tick. A failed
/// load is reported and the last good list stays on screen; there is no retry
/// beyond the next tick.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        filters,
        count,
        interval_ms,
    } = cmd
    {
        let period = Duration::from_millis(interval_ms.unwrap_or(cfg.refresh_interval_ms).max(1));

        let mut vm = ProjectViewModel::new(backend::open(cfg)?);
        vm.set_filters(filters_from_args(filters)?);

        let mut tick: u64 = 0;
        loop {
            if let Err(e) = vm.load() {
                error(format!("Failed to load projects: {}", e));
            }
            tick += 1;

            header(format!("Projects @ {}", Local::now().format("%H:%M:%S")));
            print!("{}", projects_table(&vm.filtered(), cfg).render());
            println!("{}", stats_line(vm.stats()));

            if count.is_some_and(|n| tick >= n) {
                break;
            }
            thread::sleep(period);
        }
    }
    Ok(())
}

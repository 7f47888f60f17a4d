use super::{open_loaded, stats_line};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::PhaseStatus;
use crate::utils::describe_status;

/// Handle the `stats` command: counters over the whole list, plus the legend.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let vm = open_loaded(cfg)?;

    println!("{}", stats_line(vm.stats()));
    println!();
    for status in PhaseStatus::ALL {
        println!("  {}", describe_status(status));
    }
    Ok(())
}

use super::{filters_from_args, open_loaded, projects_table, stats_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filters, owners } = cmd {
        let mut vm = open_loaded(cfg)?;
        vm.set_filters(filters_from_args(filters)?);

        let filtered = vm.filtered();
        if filtered.is_empty() {
            if vm.filters().is_empty() {
                info("No projects yet. Use `projmgr add` to create one.");
            } else {
                info("No projects match the current filters.");
            }
        } else {
            print!("{}", projects_table(&filtered, cfg).render());
        }

        println!();
        println!("{}", stats_line(vm.stats()));

        if *owners {
            println!("Owners: {}", vm.owners().join(", "));
        }
    }
    Ok(())
}

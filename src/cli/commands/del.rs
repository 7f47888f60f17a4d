use super::open_loaded;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut vm = open_loaded(cfg)?;

        let deleted = vm.delete(*id, |p| {
            *yes || confirm(format!(
                "Delete project \"{}\" (#{})? This action is irreversible.",
                p.name, id
            ))
        })?;

        if deleted {
            success(format!("Project #{} has been deleted.", id));
        } else {
            info("Operation cancelled.");
        }
    }
    Ok(())
}

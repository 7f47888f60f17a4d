use super::{CliViewModel, apply_project_args};
use crate::backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ProjectViewModel;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `add` command: fresh draft, requested edits, submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let mut vm: CliViewModel = ProjectViewModel::new(backend::open(cfg)?);
        vm.open_create();

        // a rejected edit discards the draft: nothing is sent
        if let Err(e) = apply_project_args(&mut vm, fields) {
            vm.close();
            return Err(e);
        }

        let name = vm.form().draft().map(|d| d.name.clone()).unwrap_or_default();
        let id = vm.submit().inspect_err(|e| {
            if e.is_validation() {
                warning("Nothing was saved.");
            }
        })?;
        success(format!("Project #{} '{}' created.", id, name));
    }
    Ok(())
}

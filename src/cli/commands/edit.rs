use super::{apply_project_args, open_loaded};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `edit` command: copy of the stored record, requested edits, full update.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        let mut vm = open_loaded(cfg)?;
        vm.open_edit(*id)?;

        if let Err(e) = apply_project_args(&mut vm, fields) {
            vm.close();
            if e.is_validation() {
                warning(format!("Project #{} left unchanged.", id));
            }
            return Err(e);
        }

        if vm.form().draft() == vm.find(*id) {
            info("No changes requested; saving the record as is.");
        }

        vm.submit()?;
        success(format!("Project #{} updated.", id));
    }
    Ok(())
}

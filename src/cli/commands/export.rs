use super::{filters_from_args, open_loaded};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::date::{display_offset, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filters,
    } = cmd
    {
        let mut vm = open_loaded(cfg)?;
        vm.set_filters(filters_from_args(filters)?);

        let projects = vm.filtered();
        if projects.is_empty() {
            warning("No projects match the current filters; exporting headers only.");
        }

        let path = ExportLogic::resolve_path(*format, file.as_deref(), &cfg.export_dir, today());
        ExportLogic::export(
            &projects,
            *format,
            &path,
            display_offset(cfg.display_utc_offset_hours),
            *force,
        )?;
    }
    Ok(())
}

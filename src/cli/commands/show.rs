use super::open_loaded;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::{display_offset, format_updated_at};
use crate::utils::formatting::{bold, progress_bar};
use crate::utils::phase_summary;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let vm = open_loaded(cfg)?;
        let p = vm.find(*id).ok_or(AppError::ProjectNotFound(*id))?;

        header(format!("#{} {}", id, p.name));
        println!("Code Sale      : {}", p.code_sale_str());
        println!("Owner          : {}", p.owner_str());
        println!("Level          : {}", p.level_str());
        println!("Current status : {}", p.current_status);
        println!(
            "Updated        : {}",
            format_updated_at(
                p.updated_at.as_deref(),
                display_offset(cfg.display_utc_offset_hours)
            )
        );
        println!();
        println!("{}", bold("    Phase          St | Plan     | Actual   | Prog"));

        for (i, ph) in p.phases.iter().enumerate() {
            println!(
                "{:>2}. {:<14} {} {}",
                i + 1,
                ph.name,
                phase_summary(ph),
                progress_bar(ph.progress, 10)
            );
        }
    }
    Ok(())
}

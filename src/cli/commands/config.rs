use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                cfg.save()?;
            }

            // requested editor first, then the platform default
            let fallback = platform_editor();
            let mut candidates = vec![editor.clone().unwrap_or_else(|| fallback.clone())];
            if candidates[0] != fallback {
                candidates.push(fallback);
            }

            for (attempt, candidate) in candidates.iter().enumerate() {
                if attempt > 0 {
                    warning(format!("Falling back to '{}'", candidate));
                }
                if run_editor(candidate, &path) {
                    success(format!("Configuration edited with '{}'", candidate));
                    return Ok(());
                }
            }
            return Err(AppError::Config(format!(
                "could not open {} with {}",
                path.display(),
                candidates.join(" or ")
            )));
        }
    }

    Ok(())
}

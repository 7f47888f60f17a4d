use crate::backend::SqliteBackend;
use crate::cli::parser::Commands;
use crate::config::{BackendKind, Config};
use crate::core::log::LogLogic;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if cfg.backend != BackendKind::Sqlite {
            return Err(AppError::Config(
                "the internal log is only kept by the local SQLite store".into(),
            ));
        }
        let mut store = SqliteBackend::open(&cfg.database)?;
        LogLogic::print_log(store.pool())?;
    }

    Ok(())
}

use crate::backend::SqliteBackend;
use crate::cli::parser::Cli;
use crate::config::{BackendKind, Config};
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations (local store only)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing projmgr…");

    if !cli.test {
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }

    if cfg.backend != BackendKind::Sqlite {
        println!("🌐 Backend    : {}", cfg.api_url);
        success("projmgr initialization completed!");
        return Ok(());
    }

    if let Some(dir) = std::path::Path::new(&cfg.database).parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }

    let mut store = SqliteBackend::open(&cfg.database)?;
    println!("🗄️  Database   : {}", &cfg.database);

    if let Err(e) = log::ttlog(
        &store.pool().conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("projmgr initialization completed!");
    Ok(())
}

use projmgr::apply_overrides;
use projmgr::cli::parser::Cli;
use projmgr::config::{BackendKind, Config};
use clap::Parser;

#[test]
fn test_partial_yaml_takes_defaults() {
    let cfg: Config = serde_yaml::from_str("backend: http\nrefresh_interval_ms: 250\n").unwrap();

    assert_eq!(cfg.backend, BackendKind::Http);
    assert_eq!(cfg.refresh_interval_ms, 250);
    assert_eq!(cfg.api_url, "http://127.0.0.1:5005/api");
    assert_eq!(cfg.display_utc_offset_hours, 7);
    assert_eq!(cfg.export_dir, ".");
}

#[test]
fn test_default_config_round_trips() {
    let cfg = Config::default();
    let yaml = serde_yaml::to_string(&cfg).unwrap();
    let back: Config = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(back.backend, BackendKind::Sqlite);
    assert_eq!(back.database, cfg.database);
    assert!(yaml.contains("backend: sqlite"));
}

#[test]
fn test_command_line_selects_backend() {
    let mut cfg = Config::default();
    let cli = Cli::parse_from(["projmgr", "--api", "http://host:5005/api", "stats"]);
    apply_overrides(&cli, &mut cfg);
    assert_eq!(cfg.backend, BackendKind::Http);
    assert_eq!(cfg.api_url, "http://host:5005/api");

    let mut cfg = Config {
        backend: BackendKind::Http,
        ..Config::default()
    };
    let cli = Cli::parse_from(["projmgr", "stats", "--db", "/tmp/p.sqlite"]);
    apply_overrides(&cli, &mut cfg);
    assert_eq!(cfg.backend, BackendKind::Sqlite);
    assert_eq!(cfg.database, "/tmp/p.sqlite");
}

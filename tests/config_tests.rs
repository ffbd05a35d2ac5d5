mod common;

use common::{temp_path, write_file};
use rattendance::config::Config;
use rattendance::config::migrate::{check_config_file, run_config_migration};
use rattendance::core::catalog::EventCatalog;
use rattendance::errors::AppError;
use std::path::Path;

#[test]
fn test_missing_config_uses_defaults() {
    let path = temp_path("cfg_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(cfg.daily_required_hours, 8);
    assert!(cfg.date_check);
    assert!(cfg.catalog.is_none());
}

#[test]
fn test_init_writes_full_catalog() {
    let path = temp_path("cfg_init", "conf");
    Config::init_at(Path::new(&path), false).unwrap();

    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(
        EventCatalog::from_config(&cfg),
        EventCatalog::default()
    );

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Příchod"));
    assert!(content.contains("first: true"));

    // a second init without overwrite is refused
    assert!(matches!(
        Config::init_at(Path::new(&path), false),
        Err(AppError::Config(_))
    ));
    assert!(Config::init_at(Path::new(&path), true).is_ok());
}

#[test]
fn test_partial_config_gets_defaults() {
    let path = write_file(
        "cfg_partial",
        "conf",
        "daily_required_hours: 6\ncatalog:\n  In: { first: true, last: false, opening: true }\n",
    );
    let cfg = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(cfg.daily_required_hours, 6);
    assert!(cfg.date_check);
    assert_eq!(EventCatalog::from_config(&cfg).len(), 1);
}

#[test]
fn test_non_positive_hours_are_rejected() {
    let path = write_file("cfg_zero_hours", "conf", "daily_required_hours: 0\n");
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_hours_above_a_day_are_rejected() {
    let path = write_file("cfg_huge_hours", "conf", "daily_required_hours: 100\n");
    match Config::load_from(Path::new(&path)) {
        Err(AppError::Config(msg)) => assert!(msg.contains("got 100"), "{msg}"),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn test_check_and_migrate_config() {
    let path = write_file("cfg_migrate", "conf", "date_check: false\nlegacy_key: 1\n");

    let report = check_config_file(Path::new(&path)).unwrap();
    assert_eq!(
        report.missing,
        vec!["daily_required_hours".to_string(), "separator_char".to_string()]
    );
    assert_eq!(report.unknown, vec!["legacy_key".to_string()]);

    assert!(run_config_migration(Path::new(&path)).unwrap());
    assert!(!run_config_migration(Path::new(&path)).unwrap());

    let report = check_config_file(Path::new(&path)).unwrap();
    assert!(report.missing.is_empty());

    // user values survive the migration
    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert!(!cfg.date_check);
    assert_eq!(cfg.daily_required_hours, 8);
}

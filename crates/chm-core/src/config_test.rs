use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_minimal_config() {
    let config = Config::parse("migrations_path: db/ch\n").unwrap();
    assert_eq!(config.migrations_path, "db/ch");
    assert_eq!(config.extension, "sql");
    assert!(config.stubs_path.is_none());
    assert!(config.post_create.is_empty());
}

#[test]
fn test_parse_empty_is_default() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
    assert_eq!(
        Config::default().migrations_path,
        "database/clickhouse-migrations"
    );
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
migrations_path: database/clickhouse
stubs_path: stubs/clickhouse
extension: php
post_create:
  - composer dump-autoload
"#;
    let config = Config::parse(yaml).unwrap();
    assert_eq!(config.extension, "php");
    assert_eq!(config.stubs_path.as_deref(), Some("stubs/clickhouse"));
    assert_eq!(config.post_create, vec!["composer dump-autoload"]);

    let root = Path::new("/project");
    assert_eq!(
        config.stubs_dir(root),
        Some(PathBuf::from("/project/stubs/clickhouse"))
    );
}

#[test]
fn test_unknown_field_rejected() {
    let err = Config::parse("migration_path: db\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigParse { .. }));
}

#[test]
fn test_invalid_extension_rejected() {
    for ext in ["\"\"", ".sql", "a/b", "s ql"] {
        let err = Config::parse(&format!("extension: {ext}\n")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigInvalid { .. }), "{ext}");
    }
}

#[test]
fn test_empty_migrations_path_rejected() {
    let err = Config::parse("migrations_path: \"\"\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_empty_post_create_command_rejected() {
    let err = Config::parse("post_create:\n  - \"  \"\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_migrations_dir_resolution() {
    let config = Config::default();
    let root = Path::new("/project");

    assert_eq!(
        config.migrations_dir(root, None, false),
        PathBuf::from("/project/database/clickhouse-migrations")
    );
    assert_eq!(
        config.migrations_dir(root, Some("custom/dir"), false),
        PathBuf::from("/project/custom/dir")
    );
    assert_eq!(
        config.migrations_dir(root, Some("/abs/dir"), true),
        PathBuf::from("/abs/dir")
    );
    // realpath without --path changes nothing
    assert_eq!(
        config.migrations_dir(root, None, true),
        PathBuf::from("/project/database/clickhouse-migrations")
    );
}

#[test]
fn test_load_from_dir_defaults_without_file() {
    let dir = tempdir().unwrap();
    assert_eq!(Config::load_from_dir(dir.path()).unwrap(), Config::default());
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("chmigrate.yml"), "extension: yml_wins\n").unwrap();
    fs::write(dir.path().join("chmigrate.yaml"), "extension: yaml\n").unwrap();

    assert_eq!(
        Config::load_from_dir(dir.path()).unwrap().extension,
        "yml_wins"
    );
}

#[test]
fn test_load_missing_explicit_file() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("nope.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

//! Tests for the config module

use super::loader::{apply_env_overrides, bundled_data_dir, resolve_from};
use super::types::*;
use crate::error::AstroDbError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.data.dir, bundled_data_dir());
    assert!(!config.checks.extended);
    assert!(!config.output.summary);
}

#[test]
fn test_config_parse_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("astrodb.toml");
    fs::write(
        &path,
        r#"
[data]
dir = "vendor/astrology-db/data"

[checks]
extended = true
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.data.dir, PathBuf::from("vendor/astrology-db/data"));
    assert!(config.checks.extended);
    assert!(!config.output.summary);
}

#[test]
fn test_config_empty_file_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("astrodb.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("astrodb.toml");
    fs::write(&path, "[checks]\nextnded = true\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert!(!config.checks.extended);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "extnded");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("extended"));
    assert!(warnings[0]
        .to_string()
        .ends_with(":2 (did you mean 'extended'?)"));
}

#[test]
fn test_config_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("astrodb.toml");
    fs::write(&path, "[checks]\nextended = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, AstroDbError::InvalidConfig { .. }));
}

#[test]
fn test_env_override_data_dir_and_extended() {
    let config = apply_env_overrides(
        Config::default(),
        env(&[("ASTRODB_DATA_DIR", "/srv/astro"), ("ASTRODB_EXTENDED", "1")]),
    );
    assert_eq!(config.data.dir, PathBuf::from("/srv/astro"));
    assert!(config.checks.extended);
}

#[test]
fn test_env_override_extended_false_values() {
    let mut base = Config::default();
    base.checks.extended = true;

    let config = apply_env_overrides(base, env(&[("ASTRODB_EXTENDED", "no")]));
    assert!(!config.checks.extended);
}

#[test]
fn test_env_override_blank_data_dir_ignored() {
    let config = apply_env_overrides(Config::default(), env(&[("ASTRODB_DATA_DIR", "  ")]));
    assert_eq!(config.data.dir, bundled_data_dir());
}

#[test]
fn test_resolve_prefers_project_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::write(
        project.path().join("astrodb.toml"),
        "[data]\ndir = \"project-data\"\n",
    )
    .unwrap();
    fs::create_dir_all(user.path().join("astrodb")).unwrap();
    fs::write(
        user.path().join("astrodb/config.toml"),
        "[data]\ndir = \"user-data\"\n",
    )
    .unwrap();

    let loaded = resolve_from(project.path(), Some(user.path().to_path_buf()), env(&[])).unwrap();
    assert_eq!(loaded.config.data.dir, PathBuf::from("project-data"));
    assert!(matches!(loaded.source, ConfigSource::Project(_)));
}

#[test]
fn test_resolve_falls_back_to_user_config() {
    let project = tempdir().unwrap();
    let user = tempdir().unwrap();
    fs::create_dir_all(user.path().join("astrodb")).unwrap();
    fs::write(
        user.path().join("astrodb/config.toml"),
        "[output]\nsummary = true\n",
    )
    .unwrap();

    let loaded = resolve_from(project.path(), Some(user.path().to_path_buf()), env(&[])).unwrap();
    assert!(loaded.config.output.summary);
    assert!(matches!(loaded.source, ConfigSource::User(_)));
}

#[test]
fn test_resolve_defaults_with_env() {
    let project = tempdir().unwrap();

    let loaded = resolve_from(project.path(), None, env(&[("ASTRODB_EXTENDED", "true")])).unwrap();
    assert_eq!(loaded.source, ConfigSource::Defaults);
    assert_eq!(loaded.config.data.dir, bundled_data_dir());
    assert!(loaded.config.checks.extended);
    assert!(loaded.warnings.is_empty());
}

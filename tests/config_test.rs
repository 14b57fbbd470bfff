//! Configuration loading from disk

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use waypoint_docker_lsp::{ConfigError, DuplicatePolicy, ServerConfig};

#[test]
fn test_load_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[completion]
duplicate_policy = "offer_all"
snippets = false

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ServerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.completion.duplicate_policy, DuplicatePolicy::OfferAll);
    assert!(!config.completion.snippets);
    assert_eq!(config.logging.level, "debug");

    let resolver = config.resolver();
    let items = resolver.resolve("", "context = \".\"");
    assert_eq!(items.len(), 9);
    assert!(!items[0].insert_text.contains('$'));
}

#[test]
fn test_load_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, "completion:\n  duplicate_policy: suppress\n").unwrap();

    let config = ServerConfig::load_from_file(&path).unwrap();
    assert_eq!(config.completion.duplicate_policy, DuplicatePolicy::Suppress);
    assert!(config.completion.snippets);
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let mut config = ServerConfig::default();
    config.completion.snippets = false;
    config.save_to_file(&path).unwrap();

    assert_eq!(ServerConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_explicit_path_wins() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("explicit.toml");
    fs::write(&path, "[completion]\nduplicate_policy = \"offer_all\"\n").unwrap();

    let config = ServerConfig::discover(Some(path.as_path())).unwrap();
    assert_eq!(config.completion.duplicate_policy, DuplicatePolicy::OfferAll);
}

#[test]
fn test_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.toml");
    assert!(matches!(ServerConfig::load_from_file(&missing), Err(ConfigError::Io { .. })));

    let bad_policy = temp_dir.path().join("bad.toml");
    fs::write(&bad_policy, "[completion]\nduplicate_policy = \"never\"\n").unwrap();
    assert!(matches!(ServerConfig::load_from_file(&bad_policy), Err(ConfigError::Toml(_))));

    let bad_level = temp_dir.path().join("level.toml");
    fs::write(&bad_level, "[logging]\nlevel = \"chatty\"\n").unwrap();
    assert!(matches!(
        ServerConfig::load_from_file(&bad_level),
        Err(ConfigError::InvalidLogLevel(_))
    ));
}

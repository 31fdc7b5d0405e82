//! Integration tests for the configuration system

use bookshelf_config::{
    AppConfig, Config, ConfigError, ConfigManager, ConfigSection, LogLevel, SiteConfig,
    CONFIG_FILE_NAME, CONFIG_VERSION,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())?;
    Ok((temp_dir, manager))
}

#[test]
fn test_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let created = manager.initialize()?;
    assert!(created);

    let config = manager.load()?;
    assert_eq!(config.version, CONFIG_VERSION);

    let mut modified = config.clone();
    modified.site.data_path = PathBuf::from("shelf/books.json");
    modified.app.log_level = LogLevel::Warn;
    manager.save(&modified)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded.site.data_path, PathBuf::from("shelf/books.json"));
    assert_eq!(reloaded.app.log_level, LogLevel::Warn);

    Ok(())
}

#[test]
fn test_config_validation_integration() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    manager.save(&Config::default())?;
    assert!(manager.load()?.validate().is_ok());

    let mut invalid = Config::default();
    invalid.site.output_path = PathBuf::from("static");
    assert!(matches!(
        manager.save(&invalid),
        Err(ConfigError::Invalid(ref problems)) if problems[0].field == "site.output_path"
    ));

    // Hand-edited values still load so the user can see what to fix
    std::fs::write(manager.config_path(), "[site]\nupcoming_limit = 500\n")?;
    let loaded = manager.load()?;
    assert_eq!(loaded.site.upcoming_limit, 500);
    assert!(loaded.validate().is_err());

    Ok(())
}

#[test]
fn test_atomic_save_keeps_backup() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let config = Config::default();
    manager.save(&config)?;
    assert!(manager.config_path().exists());

    manager.save(&config)?;

    let backup_path = manager.config_path().with_extension("toml.backup");
    assert!(backup_path.exists());

    Ok(())
}

#[test]
fn test_all_sections_default_are_valid() {
    assert!(AppConfig::default().validate().is_ok());
    assert!(SiteConfig::default().validate().is_ok());
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_written_file_is_readable_toml() -> Result<(), Box<dyn std::error::Error>> {
    let (temp_dir, manager) = setup_test_manager()?;
    manager.initialize()?;

    let contents = std::fs::read_to_string(temp_dir.path().join(CONFIG_FILE_NAME))?;
    assert!(contents.contains("[site]"));
    assert!(contents.contains("upcoming_limit = 3"));
    assert!(contents.contains("log_level = \"info\""));

    Ok(())
}

#[test]
fn test_hand_written_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let (temp_dir, manager) = setup_test_manager()?;
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"
[app]
log_level = "debug"

[site]
title = "Alex's Books"
data_path = "catalog.json"
output_path = "public"
upcoming_limit = 5
"#,
    )?;

    let config = manager.load()?;
    assert_eq!(config.app.log_level, LogLevel::Debug);
    assert_eq!(config.site.title, "Alex's Books");
    assert_eq!(config.site.data_path, PathBuf::from("catalog.json"));
    assert_eq!(config.site.output_path, PathBuf::from("public"));
    assert_eq!(config.site.static_path, SiteConfig::default().static_path);
    assert_eq!(config.site.upcoming_limit, 5);

    Ok(())
}

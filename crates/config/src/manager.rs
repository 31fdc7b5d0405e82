//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::validation::describe;
use crate::{Config, ConfigError, ConfigResult, LogLevel};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "bookshelf.toml";

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "BOOKSHELF";

/// Main configuration manager
///
/// Owns the location of `bookshelf.toml`.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager using the platform config directory
    ///
    /// - Linux: `~/.config/bookshelf/`
    /// - macOS: `~/Library/Application Support/bookshelf/`
    /// - Windows: `%APPDATA%\bookshelf\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let persistence = ConfigPersistence::new(config_path);

        Ok(Self {
            persistence,
            config_dir,
        })
    }

    /// Picks the config directory for a command line invocation
    ///
    /// An explicit directory always wins. Otherwise the working directory is
    /// used when it already holds a `bookshelf.toml`, and the platform config
    /// directory when it does not.
    pub fn discover(explicit: Option<PathBuf>) -> ConfigResult<Self> {
        if let Some(dir) = explicit {
            return Self::with_directory(dir);
        }

        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        if cwd.join(CONFIG_FILE_NAME).is_file() {
            log::debug!("Using {} from working directory", CONFIG_FILE_NAME);
            return Self::with_directory(cwd);
        }

        Self::new()
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "bookshelf")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.persistence.path().to_path_buf()
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Saves the configuration to file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Writes a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.persistence.generate_default()?;
        Ok(true)
    }

    /// Loads the config and applies `BOOKSHELF_SECTION_FIELD` overrides
    ///
    /// Example: `BOOKSHELF_SITE_OUTPUT_PATH=public`
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_overrides(&mut config, |key| std::env::var(key).ok());

        if let Err(problems) = config.validate() {
            log::warn!(
                "Invalid values after environment overrides: {}",
                describe(&problems)
            );
        }

        Ok(config)
    }
}

/// Applies overrides from `lookup`, which maps variable names to values
///
/// Values that fail to parse are logged and ignored.
pub(crate) fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let var = |section: &str, field: &str| lookup(&format!("{ENV_PREFIX}_{section}_{field}"));

    if let Some(title) = var("SITE", "TITLE") {
        config.site.title = title;
    }

    if let Some(path) = var("SITE", "DATA_PATH") {
        config.site.data_path = PathBuf::from(path);
    }

    if let Some(path) = var("SITE", "OUTPUT_PATH") {
        config.site.output_path = PathBuf::from(path);
    }

    if let Some(path) = var("SITE", "STATIC_PATH") {
        config.site.static_path = PathBuf::from(path);
    }

    if let Some(limit) = var("SITE", "UPCOMING_LIMIT") {
        match limit.trim().parse::<usize>() {
            Ok(value) => config.site.upcoming_limit = value,
            Err(_) => log::warn!("Ignoring non-numeric upcoming limit override: {}", limit),
        }
    }

    if let Some(level) = var("APP", "LOG_LEVEL") {
        match level.parse::<LogLevel>() {
            Ok(value) => config.app.log_level = value,
            Err(e) => log::warn!("Ignoring log level override: {}", e),
        }
    }
}

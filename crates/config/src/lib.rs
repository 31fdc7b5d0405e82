//! Bookshelf Configuration System
//!
//! Site generation is driven by a small `bookshelf.toml`. Each table is a
//! type implementing `ConfigSection` that lists the checks on its own
//! fields.
//!
//! Invalid values are logged as warnings on load and refused on save.
//! Saves go through a temp file, so the file is never left half-written.
//!
//! # Example
//!
//! ```rust
//! use bookshelf_config::{Config, ConfigManager};
//!
//! let dir = std::env::temp_dir().join("bookshelf-config-doc");
//! let manager = ConfigManager::with_directory(dir).expect("Failed to initialize config");
//! let config = manager.load().unwrap_or_else(|e| {
//!     eprintln!("Config error: {}, using defaults", e);
//!     Config::default()
//! });
//!
//! println!("Catalog: {}", config.site.data_path.display());
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod site_config;

pub use error::{ConfigError, ConfigResult};
pub use manager::{ConfigManager, CONFIG_FILE_NAME};
pub use validation::{Checks, ConfigSection, ValidationError};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use site_config::SiteConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Process-level settings (logging, console output)
    pub app: AppConfig,

    /// Where the catalog lives and where the site is written
    pub site: SiteConfig,
}

impl Config {
    /// Every problem across all sections, in file order
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = Checks::default();
        checks.section(&self.app).section(&self.site);
        checks.finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

//! Failures while locating, reading or writing `bookshelf.toml`

use crate::validation::{describe, ValidationError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The file exists but holds nothing but whitespace
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("Cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Values that parse but are refused on save
    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(Vec<ValidationError>),

    /// Any step of a save: directory, backup, temp file or final rename
    #[error("Cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Cannot encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("No config directory is known for this platform")]
    NoConfigDir,

    #[error("Cannot read the working directory: {0}")]
    WorkingDir(#[source] io::Error),
}

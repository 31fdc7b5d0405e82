//! Error types shared across the Bookshelf crates
//!
//! Each crate reports failures through its own error enum. At the process
//! boundary those are folded into [`AppError`], which classifies them into
//! two severity tiers:
//! - **Recoverable**: the input is wrong and a re-run after fixing it will work
//!   (missing catalog, malformed JSON, bad setting)
//! - **Fatal**: the environment failed underneath us (I/O or rendering)

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Fixing the input and re-running is enough
    Recoverable,
    /// Requires looking at the environment (disk, permissions, bugs)
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type for Bookshelf
#[derive(Error, Debug)]
pub enum AppError {
    // ===== File System Errors =====
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// General I/O error
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    // ===== Catalog Errors =====
    /// Catalog file could not be decoded
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: PathBuf, reason: String },

    /// Catalog decoded but violates an invariant (duplicate ids, ...)
    #[error("Invalid catalog: {details}")]
    InvalidCatalog { details: String },

    // ===== Configuration Errors =====
    /// Invalid configuration
    #[error("Invalid configuration: {setting} ({reason})")]
    InvalidConfiguration { setting: String, reason: String },

    // ===== Output Errors =====
    /// A page could not be rendered or written
    #[error("Failed to render page '{page}': {reason}")]
    RenderError { page: String, reason: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. }
            | Self::ParseError { .. }
            | Self::InvalidCatalog { .. }
            | Self::InvalidConfiguration { .. } => ErrorSeverity::Recoverable,

            Self::IoError { .. }
            | Self::RenderError { .. }
            | Self::InternalError { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Returns a short message suitable for printing on the console
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("Could not find {}. Check the configured path.", path.display())
            }
            Self::IoError { .. } => "A file operation failed. Please try again.".to_string(),
            Self::ParseError { file, .. } => {
                format!("{} is not a valid catalog file.", file.display())
            }
            Self::InvalidCatalog { details } => format!("The catalog is invalid: {}", details),
            Self::InvalidConfiguration { setting, .. } => {
                format!("Invalid setting: {}. Please check your configuration.", setting)
            }
            Self::RenderError { page, .. } => format!("Could not write the '{}' page.", page),
            Self::InternalError { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }

    /// Helper to create an I/O error carrying a description of the operation
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }
}

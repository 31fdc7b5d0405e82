use bookshelf_core::AppError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Failed to read catalog at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {}", .0.join("; "))]
    InvalidCatalog(Vec<String>),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::CatalogNotFound(path) => AppError::FileNotFound { path },
            LibraryError::Io { path, source } => {
                AppError::io(format!("reading {}", path.display()), source)
            }
            LibraryError::Parse { origin, source } => AppError::ParseError {
                file: PathBuf::from(origin),
                reason: source.to_string(),
            },
            LibraryError::InvalidCatalog(problems) => AppError::InvalidCatalog {
                details: problems.join("; "),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::ErrorSeverity;

    #[test]
    fn test_invalid_catalog_display_lists_problems() {
        let err = LibraryError::InvalidCatalog(vec![
            "Duplicate book id: a".to_string(),
            "Duplicate book id: b".to_string(),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Duplicate book id: a; Duplicate book id: b"));
    }

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = LibraryError::CatalogNotFound(PathBuf::from("data/data.json"));
        let app: AppError = err.into();
        assert!(matches!(app, AppError::FileNotFound { .. }));
        assert_eq!(app.severity(), ErrorSeverity::Recoverable);
    }

    #[test]
    fn test_parse_maps_to_parse_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LibraryError::Parse {
            origin: "data.json".to_string(),
            source,
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::ParseError { .. }));
    }
}

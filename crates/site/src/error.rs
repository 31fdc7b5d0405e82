use bookshelf_core::AppError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write page '{page}' to {path}: {source}")]
    WritePage {
        page: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy static file {path}: {source}")]
    StaticCopy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk static directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("'{0}' cannot be used as a page file name")]
    InvalidPageName(String),
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;

impl From<SiteError> for AppError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::OutputDirectory { path, source } => {
                AppError::io(format!("creating {}", path.display()), source)
            }
            SiteError::WritePage { page, source, .. } => AppError::RenderError {
                page,
                reason: source.to_string(),
            },
            SiteError::StaticCopy { path, source } => {
                AppError::io(format!("copying {}", path.display()), source)
            }
            SiteError::Walk(e) => {
                let message = e.to_string();
                AppError::io(message, e.into())
            }
            SiteError::InvalidPageName(page) => AppError::RenderError {
                reason: "book id is not a valid file name".to_string(),
                page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::ErrorSeverity;

    #[test]
    fn test_write_failure_maps_to_render_error() {
        let err = SiteError::WritePage {
            page: "quotes".to_string(),
            path: PathBuf::from("dist/quotes.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let app: AppError = err.into();
        assert!(matches!(app, AppError::RenderError { ref page, .. } if page == "quotes"));
        assert_eq!(app.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn test_invalid_page_name_message() {
        let err = SiteError::InvalidPageName("../escape".to_string());
        assert!(err.to_string().contains("../escape"));
    }
}

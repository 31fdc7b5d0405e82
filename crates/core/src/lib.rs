pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorSeverity};
pub use types::{
    year_from_date, Book, BookId, Collection, Progress, Quote, QuoteEntry, ResolvedCollection,
    StatCount, Stats, Status, Validator,
};

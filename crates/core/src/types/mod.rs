//! Domain types for Bookshelf
//!
//! This module contains all domain models organized by responsibility:
//! - `book`: Book records, reading status and progress
//! - `quote`: Quotes as stored on a book and as flattened for display
//! - `collection`: Curated collections, raw and resolved
//! - `stats`: Aggregate library statistics
//! - `common`: Shared traits and date helpers

mod book;
mod collection;
mod common;
mod quote;
mod stats;

// Re-export all public types
pub use book::{Book, BookId, Progress, Status};
pub use collection::{Collection, ResolvedCollection};
pub use common::{year_from_date, Validator};
pub use quote::{Quote, QuoteEntry};
pub use stats::{StatCount, Stats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let _id: BookId = BookId::from("book-1");
        let _status: Status = Status::Reading;
        let _stats: Stats = Stats::empty();
        let _collection: Collection = Collection::default();
    }

    #[test]
    fn test_status_ordering_is_stable() {
        assert!(Status::Finished < Status::Reading);
        assert!(Status::Reading < Status::ToRead);
        assert!(Status::ToRead < Status::Wishlisted);
        assert!(Status::Wishlisted < Status::Other("abandoned".to_string()));
    }
}

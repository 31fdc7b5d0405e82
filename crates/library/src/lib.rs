//! Bookshelf Library
//!
//! Turns a flat catalog of books and collections into the derived views the
//! site is built from. Every view is a pure function of an immutable
//! [`Catalog`]; nothing here mutates the loaded records.
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Loading and validating the catalog JSON |
//! | [`grouping`] | Status grouping, upcoming/shelved/wishlist views, collections, quotes |
//! | [`sorting`] | The total orders the views rely on |
//! | [`stats`] | Single-pass statistics aggregation |
//!
//! # Example
//!
//! ```rust
//! use bookshelf_library::Catalog;
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "books": [
//!         {"id": "dune", "title": "Dune", "status": "reading", "pages": 412}
//!     ]
//! }"#).expect("valid catalog");
//!
//! let upcoming = catalog.upcoming_books(3);
//! assert!(upcoming.has_any);
//! assert_eq!(catalog.stats(2025).total_books, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod grouping;
pub mod sorting;
pub mod stats;

pub use catalog::Catalog;
pub use error::{LibraryError, LibraryResult};
pub use grouping::{StatusGroups, UpcomingBooks};
pub use stats::{compute_stats, StatsAggregator, TOP_GENRES};

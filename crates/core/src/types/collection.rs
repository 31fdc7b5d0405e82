//! Collection models

use crate::types::{Book, BookId};
use serde::{Deserialize, Serialize};

/// A user-curated, ordered list of book ids
///
/// Ids may point at books missing from the catalog, and the same id may
/// appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub name: String,
    pub description: String,
    pub books: Vec<BookId>,
}

/// A collection whose ids have been replaced by the books they point to
///
/// Each book's `rank` is its 1-based position in the collection's id list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCollection {
    pub name: String,
    pub description: String,
    pub books: Vec<Book>,
}

impl ResolvedCollection {
    /// Returns true if none of the collection's ids resolved
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

//! Quote models

use crate::types::BookId;
use serde::{Deserialize, Serialize};

/// A quote as stored on a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// A quote lifted out of its book, carrying enough of the source to link back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteEntry {
    pub quote: String,
    pub authors: Vec<String>,
    pub book_title: String,
    pub book_id: BookId,
}

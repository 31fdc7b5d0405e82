//! Library statistics

use serde::Serialize;

/// A label with the number of books carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCount {
    pub value: String,
    pub count: usize,
}

impl StatCount {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Library-wide statistics
///
/// Wishlisted books only contribute to `books_by_status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_books: usize,
    pub books_finished: usize,
    pub books_finished_this_year: usize,
    pub pages_read: u64,
    pub pages_read_this_year: u64,
    pub average_rating: f64,
    pub average_pages: f64,
    pub top_genres: Vec<StatCount>,
    pub books_by_status: Vec<StatCount>,
    pub books_by_language: Vec<StatCount>,
}

impl Stats {
    /// Creates empty statistics
    pub fn empty() -> Self {
        Self {
            total_books: 0,
            books_finished: 0,
            books_finished_this_year: 0,
            pages_read: 0,
            pages_read_this_year: 0,
            average_rating: 0.0,
            average_pages: 0.0,
            top_genres: Vec::new(),
            books_by_status: Vec::new(),
            books_by_language: Vec::new(),
        }
    }

    /// Returns the percentage of shelved books that are finished
    pub fn finished_percentage(&self) -> f64 {
        if self.total_books == 0 {
            return 0.0;
        }
        (self.books_finished as f64 / self.total_books as f64) * 100.0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::empty()
    }
}

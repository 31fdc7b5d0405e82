//! Book, status and reading-progress domain models

use crate::types::{Quote, Validator};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a book, as written in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reading status of a book
///
/// Values outside the four known ones are kept verbatim in `Other`. The
/// derived ordering puts the known statuses first, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Finished,
    Reading,
    ToRead,
    Wishlisted,
    Other(String),
}

impl Status {
    /// Returns the catalog spelling of this status
    pub fn as_str(&self) -> &str {
        match self {
            Status::Finished => "finished",
            Status::Reading => "reading",
            Status::ToRead => "to read",
            Status::Wishlisted => "wishlisted",
            Status::Other(raw) => raw,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "finished" => Status::Finished,
            "reading" => Status::Reading,
            "to read" => Status::ToRead,
            "wishlisted" => Status::Wishlisted,
            _ => Status::Other(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::from(raw.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading progress embedded in a book
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub date_started: String,
    pub date_finished: String,
    pub pages_read: u32,
}

/// A single library record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: BookId,
    pub isbn: String,
    pub title: String,
    pub subtitle: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub language: String,
    pub pages: i32,
    pub genre: String,
    pub tags: Vec<String>,
    pub cover: String,
    pub link: String,
    pub date_added: String,
    pub status: Status,
    /// User priority; 0 means unranked
    pub rank: i32,
    pub progress: Progress,
    /// 0 means unrated
    pub rating: f64,
    pub review: Vec<String>,
    pub quotes: Vec<Quote>,
}

impl Book {
    /// Creates a book with the given id, title and status; everything else empty
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            ..Self::default()
        }
    }

    /// Returns true if the book carries a nonzero rank
    pub fn is_ranked(&self) -> bool {
        self.rank != 0
    }

    /// Returns true if the book has been rated
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }

    /// Pages counted as read: the full page count once finished, otherwise
    /// whatever progress records. A negative page count reads as zero.
    pub fn pages_read(&self) -> u32 {
        if self.status == Status::Finished {
            u32::try_from(self.pages).unwrap_or(0)
        } else {
            self.progress.pages_read
        }
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.is_blank() {
            errors.push(format!("Book '{}' has an empty id", self.title));
        }

        if !self.rating.is_finite() {
            errors.push(format!(
                "Book '{}' has an invalid rating: {}",
                self.id, self.rating
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

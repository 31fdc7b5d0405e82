//! The in-memory catalog and its loader

use crate::error::{LibraryError, Result};
use bookshelf_core::{Book, Collection, Validator};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// The whole library: books and curated collections
///
/// Read-only once loaded; every view in this crate borrows it immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub collections: Vec<Collection>,
}

impl Catalog {
    /// Creates a catalog from already-built records and validates it
    pub fn new(books: Vec<Book>, collections: Vec<Collection>) -> Result<Self> {
        let catalog = Self { books, collections };
        catalog.check()?;
        Ok(catalog)
    }

    /// Loads and validates a catalog JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LibraryError::CatalogNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&contents, &path.display().to_string())?;
        info!(
            "Loaded {} books and {} collections from {}",
            catalog.books.len(),
            catalog.collections.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "<inline>")
    }

    fn parse(json: &str, origin: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|source| LibraryError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<()> {
        self.validate().map_err(LibraryError::InvalidCatalog)
    }

    /// Looks up a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id.as_str() == id)
    }

    /// Index of every book by id
    pub(crate) fn book_index(&self) -> HashMap<&str, &Book> {
        self.books
            .iter()
            .map(|book| (book.id.as_str(), book))
            .collect()
    }

    /// Returns true if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Validator for Catalog {
    fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::with_capacity(self.books.len());

        for book in &self.books {
            if let Err(mut book_errors) = book.validate() {
                errors.append(&mut book_errors);
            }
            if !seen.insert(book.id.as_str()) {
                errors.push(format!("Duplicate book id: {}", book.id));
            }
        }

        for collection in &self.collections {
            let dangling = collection
                .books
                .iter()
                .filter(|id| !seen.contains(id.as_str()))
                .count();
            if dangling > 0 {
                debug!(
                    "Collection '{}' references {} unknown book id(s)",
                    collection.name, dangling
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

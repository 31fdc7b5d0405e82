//! Single-pass statistics aggregation

use crate::catalog::Catalog;
use crate::sorting::sort_by_count;
use bookshelf_core::{year_from_date, Book, StatCount, Stats, Status};
use std::collections::HashMap;

/// Number of genres reported in [`Stats::top_genres`]
pub const TOP_GENRES: usize = 3;

/// Frequency table that remembers first-appearance order
#[derive(Debug, Default)]
struct CountTable {
    index: HashMap<String, usize>,
    entries: Vec<StatCount>,
}

impl CountTable {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(StatCount::new(label, 1));
            }
        }
    }

    fn into_sorted(self) -> Vec<StatCount> {
        let mut entries = self.entries;
        sort_by_count(&mut entries);
        entries
    }
}

/// Accumulates [`Stats`] one book at a time
///
/// `current_year` is the reference for every "this year" figure; nothing in
/// here reads the clock.
#[derive(Debug)]
pub struct StatsAggregator {
    current_year: i32,
    stats: Stats,
    total_pages: u64,
    total_rating: f64,
    rated_books: usize,
    genres: CountTable,
    languages: CountTable,
    statuses: CountTable,
}

impl StatsAggregator {
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            stats: Stats::empty(),
            total_pages: 0,
            total_rating: 0.0,
            rated_books: 0,
            genres: CountTable::default(),
            languages: CountTable::default(),
            statuses: CountTable::default(),
        }
    }

    /// Folds one book into the running totals
    pub fn add(&mut self, book: &Book) {
        self.statuses.add(book.status.as_str());

        // Wishlisted books only show up in the status distribution
        if book.status == Status::Wishlisted {
            return;
        }

        self.stats.total_books += 1;
        self.add_finished(book);
        self.add_pages_read(book);

        if book.pages > 0 {
            self.total_pages += book.pages as u64;
        }
        if book.is_rated() {
            self.total_rating += book.rating;
            self.rated_books += 1;
        }
        if !book.genre.is_empty() {
            self.genres.add(&book.genre);
        }
        if !book.language.is_empty() {
            self.languages.add(&book.language);
        }
    }

    fn add_finished(&mut self, book: &Book) {
        if book.status != Status::Finished {
            return;
        }
        self.stats.books_finished += 1;
        if year_from_date(&book.progress.date_finished) == self.current_year {
            self.stats.books_finished_this_year += 1;
        }
    }

    fn add_pages_read(&mut self, book: &Book) {
        let pages = u64::from(book.pages_read());
        self.stats.pages_read += pages;

        if book.status != Status::ToRead
            && year_from_date(&book.progress.date_started) == self.current_year
        {
            self.stats.pages_read_this_year += pages;
        }
    }

    /// Computes averages and rankings and returns the snapshot
    pub fn finish(self) -> Stats {
        let mut stats = self.stats;

        stats.average_pages = average(self.total_pages as f64, stats.total_books);
        stats.average_rating = average(self.total_rating, self.rated_books);

        let mut genres = self.genres.into_sorted();
        genres.truncate(TOP_GENRES);
        stats.top_genres = genres;
        stats.books_by_language = self.languages.into_sorted();
        stats.books_by_status = self.statuses.into_sorted();

        stats
    }
}

/// Mean rounded to two decimals, half away from zero; 0 for an empty set
fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (total / count as f64 * 100.0).round() / 100.0
}

/// Aggregates statistics over `books` relative to `current_year`
pub fn compute_stats(books: &[Book], current_year: i32) -> Stats {
    let mut aggregator = StatsAggregator::new(current_year);
    for book in books {
        aggregator.add(book);
    }
    aggregator.finish()
}

impl Catalog {
    /// Library statistics relative to `current_year`
    pub fn stats(&self, current_year: i32) -> Stats {
        compute_stats(&self.books, current_year)
    }
}

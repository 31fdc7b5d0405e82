//! Deterministic orderings used by the views
//!
//! Every sort here is stable: equal elements keep the order they arrived in.

use bookshelf_core::{Book, QuoteEntry, StatCount};
use std::cmp::Ordering;

/// Sorts books by title, byte-wise and case-sensitive
pub fn sort_alphabetically(books: &mut [Book]) {
    books.sort_by(|a, b| a.title.cmp(&b.title));
}

/// Sorts books by ascending rank with unranked (0) books last
pub fn sort_by_rank(books: &mut [Book]) {
    books.sort_by(|a, b| rank_order(a.rank, b.rank));
}

fn rank_order(a: i32, b: i32) -> Ordering {
    match (a == 0, b == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(&b),
    }
}

/// Sorts a distribution by descending count
pub fn sort_by_count(counts: &mut [StatCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Shuffles quotes into a fixed order keyed on the MD5 hex digest of their text
pub fn sort_by_digest(quotes: &mut [QuoteEntry]) {
    quotes.sort_by_cached_key(|entry| quote_digest(&entry.quote));
}

/// Lowercase hex MD5 digest of a quote's text
pub fn quote_digest(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::Status;

    fn ranked(id: &str, rank: i32) -> Book {
        let mut book = Book::new(id, id, Status::Wishlisted);
        book.rank = rank;
        book
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_rank_zero_sorts_last_and_stays_stable() {
        let mut books = vec![ranked("a", 0), ranked("b", 3), ranked("c", 0), ranked("d", 1)];
        sort_by_rank(&mut books);
        assert_eq!(ids(&books), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_equal_ranks_keep_catalog_order() {
        let mut books = vec![ranked("a", 2), ranked("b", 1), ranked("c", 2)];
        sort_by_rank(&mut books);
        assert_eq!(ids(&books), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_alphabetical_is_case_sensitive() {
        let mut books = vec![
            Book::new("1", "apple", Status::Finished),
            Book::new("2", "Zebra", Status::Finished),
            Book::new("3", "Apple", Status::Finished),
        ];
        sort_alphabetically(&mut books);
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Zebra", "apple"]);
    }

    #[test]
    fn test_alphabetical_is_stable_for_equal_titles() {
        let mut books = vec![
            Book::new("second-edition", "Dune", Status::Finished),
            Book::new("first-edition", "Dune", Status::Finished),
            Book::new("other", "Abc", Status::Finished),
        ];
        sort_alphabetically(&mut books);
        assert_eq!(ids(&books), vec!["other", "second-edition", "first-edition"]);
    }

    #[test]
    fn test_sort_by_count_descending_and_stable() {
        let mut counts = vec![
            StatCount::new("a", 1),
            StatCount::new("b", 3),
            StatCount::new("c", 1),
            StatCount::new("d", 3),
        ];
        sort_by_count(&mut counts);
        let labels: Vec<&str> = counts.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(labels, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_quote_digest_is_md5_hex() {
        assert_eq!(quote_digest(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(quote_digest("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_sort_by_digest_orders_by_hex_string() {
        let entry = |text: &str, id: &str| QuoteEntry {
            quote: text.to_string(),
            authors: Vec::new(),
            book_title: String::new(),
            book_id: id.into(),
        };
        // "abc" -> 9001..., "" -> d41d...
        let mut quotes = vec![entry("", "x"), entry("abc", "y"), entry("", "z")];
        sort_by_digest(&mut quotes);

        let order: Vec<&str> = quotes.iter().map(|q| q.book_id.as_str()).collect();
        assert_eq!(order, vec!["y", "x", "z"]);
    }
}

//! Status grouping, collection resolution and quote extraction

use crate::catalog::Catalog;
use crate::sorting::{sort_alphabetically, sort_by_digest, sort_by_rank};
use bookshelf_core::{Book, QuoteEntry, ResolvedCollection, Status};
use std::collections::BTreeMap;

/// Books keyed by status, each group in a view-specific order
pub type StatusGroups = BTreeMap<Status, Vec<Book>>;

/// Order in which a limited upcoming view spends its budget
const UPCOMING_PRIORITY: [Status; 3] = [Status::Reading, Status::ToRead, Status::Wishlisted];

/// Books that are not finished yet, for the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpcomingBooks {
    pub groups: StatusGroups,
    /// Whether any unfinished book exists at all, regardless of the limit
    pub has_any: bool,
}

impl UpcomingBooks {
    /// Books in one group, or an empty slice when the group is absent
    pub fn get(&self, status: &Status) -> &[Book] {
        self.groups.get(status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of books across all groups
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl Catalog {
    /// Partitions the books by status, keeping catalog order inside each group
    pub fn books_by_status(&self) -> StatusGroups {
        let mut groups = StatusGroups::new();
        for book in &self.books {
            groups
                .entry(book.status.clone())
                .or_default()
                .push(book.clone());
        }
        groups
    }

    /// Unfinished books, wishlist ordered by rank
    ///
    /// A `limit` of 0 returns every unfinished group in full. Otherwise at
    /// most `limit` books are returned, taken from reading, then to read,
    /// then wishlisted; groups the budget never reaches are left out.
    pub fn upcoming_books(&self, limit: usize) -> UpcomingBooks {
        let mut groups = self.books_by_status();
        groups.remove(&Status::Finished);
        let has_any = groups.values().any(|books| !books.is_empty());

        if let Some(wishlist) = groups.get_mut(&Status::Wishlisted) {
            sort_by_rank(wishlist);
        }

        if limit == 0 {
            return UpcomingBooks { groups, has_any };
        }

        UpcomingBooks {
            groups: take_within_limit(groups, limit),
            has_any,
        }
    }

    /// Books on the shelf (everything but the wishlist), each group by title
    pub fn shelved_books(&self) -> StatusGroups {
        let mut groups = self.books_by_status();
        groups.remove(&Status::Wishlisted);

        for books in groups.values_mut() {
            sort_alphabetically(books);
        }
        groups
    }

    /// The wishlist, by rank with unranked books last
    pub fn wishlisted_books(&self) -> Vec<Book> {
        let mut wishlist: Vec<Book> = self
            .books
            .iter()
            .filter(|book| book.status == Status::Wishlisted)
            .cloned()
            .collect();
        sort_by_rank(&mut wishlist);
        wishlist
    }

    /// Collections with their ids replaced by books
    ///
    /// Each resolved book is a copy whose rank is its 1-based position in
    /// the collection's id list. Unknown ids are skipped without shifting
    /// the ranks of later entries.
    pub fn book_collections(&self) -> Vec<ResolvedCollection> {
        let index = self.book_index();

        self.collections
            .iter()
            .map(|collection| {
                let books = collection
                    .books
                    .iter()
                    .enumerate()
                    .filter_map(|(position, id)| {
                        index.get(id.as_str()).map(|book| {
                            let mut book = (*book).clone();
                            book.rank = position as i32 + 1;
                            book
                        })
                    })
                    .collect();

                ResolvedCollection {
                    name: collection.name.clone(),
                    description: collection.description.clone(),
                    books,
                }
            })
            .collect()
    }

    /// Every quote of every book, in a fixed pseudo-random order
    pub fn book_quotes(&self) -> Vec<QuoteEntry> {
        let mut quotes: Vec<QuoteEntry> = self
            .books
            .iter()
            .flat_map(|book| {
                book.quotes.iter().map(move |quote| QuoteEntry {
                    quote: quote.quote.clone(),
                    authors: book.authors.clone(),
                    book_title: book.title.clone(),
                    book_id: book.id.clone(),
                })
            })
            .collect();

        sort_by_digest(&mut quotes);
        quotes
    }
}

fn take_within_limit(mut groups: StatusGroups, limit: usize) -> StatusGroups {
    let mut limited = StatusGroups::new();
    let mut remaining = limit;

    for status in UPCOMING_PRIORITY {
        if remaining == 0 {
            break;
        }
        let Some(mut books) = groups.remove(&status) else {
            continue;
        };
        books.truncate(remaining);
        remaining -= books.len();
        limited.insert(status, books);
    }

    limited
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{Collection, Quote};

    fn book(id: &str, status: Status) -> Book {
        Book::new(id, id, status)
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    fn catalog(books: Vec<Book>) -> Catalog {
        Catalog::new(books, Vec::new()).unwrap()
    }

    #[test]
    fn test_books_by_status_keeps_catalog_order() {
        let catalog = catalog(vec![
            book("r1", Status::Reading),
            book("f1", Status::Finished),
            book("r2", Status::Reading),
        ]);
        let groups = catalog.books_by_status();

        assert_eq!(ids(&groups[&Status::Reading]), vec!["r1", "r2"]);
        assert_eq!(ids(&groups[&Status::Finished]), vec!["f1"]);
    }

    #[test]
    fn test_upcoming_excludes_finished() {
        let catalog = catalog(vec![book("f1", Status::Finished), book("t1", Status::ToRead)]);
        let upcoming = catalog.upcoming_books(0);

        assert!(!upcoming.groups.contains_key(&Status::Finished));
        assert_eq!(upcoming.total(), 1);
        assert!(upcoming.has_any);
    }

    #[test]
    fn test_upcoming_has_any_false_when_all_finished() {
        let catalog = catalog(vec![book("f1", Status::Finished)]);
        let upcoming = catalog.upcoming_books(3);

        assert!(!upcoming.has_any);
        assert!(upcoming.groups.is_empty());
    }

    #[test]
    fn test_upcoming_limit_takes_prefix_in_priority_order() {
        let catalog = catalog(vec![
            book("w1", Status::Wishlisted),
            book("t1", Status::ToRead),
            book("r1", Status::Reading),
            book("t2", Status::ToRead),
            book("t3", Status::ToRead),
        ]);
        let upcoming = catalog.upcoming_books(3);

        assert_eq!(upcoming.total(), 3);
        assert_eq!(ids(upcoming.get(&Status::Reading)), vec!["r1"]);
        assert_eq!(ids(upcoming.get(&Status::ToRead)), vec!["t1", "t2"]);
        assert!(!upcoming.groups.contains_key(&Status::Wishlisted));
    }

    #[test]
    fn test_upcoming_limit_skips_missing_groups() {
        let catalog = catalog(vec![book("w1", Status::Wishlisted), book("t1", Status::ToRead)]);
        let upcoming = catalog.upcoming_books(5);

        assert!(!upcoming.groups.contains_key(&Status::Reading));
        assert_eq!(upcoming.total(), 2);
    }

    #[test]
    fn test_upcoming_limit_drops_unknown_statuses() {
        let catalog = catalog(vec![
            book("x1", Status::from("abandoned")),
            book("r1", Status::Reading),
        ]);

        let limited = catalog.upcoming_books(10);
        assert_eq!(limited.total(), 1);

        let unlimited = catalog.upcoming_books(0);
        assert_eq!(unlimited.total(), 2);
    }

    #[test]
    fn test_shelved_books_sorted_by_title() {
        let catalog = catalog(vec![
            Book::new("1", "Zorba", Status::Finished),
            Book::new("2", "Anna Karenina", Status::Finished),
            Book::new("3", "Wish", Status::Wishlisted),
        ]);
        let shelved = catalog.shelved_books();

        assert!(!shelved.contains_key(&Status::Wishlisted));
        assert_eq!(ids(&shelved[&Status::Finished]), vec!["2", "1"]);
    }

    #[test]
    fn test_wishlisted_books_ranked() {
        let mut books = Vec::new();
        for (id, rank) in [("a", 0), ("b", 3), ("c", 0), ("d", 1)] {
            let mut b = book(id, Status::Wishlisted);
            b.rank = rank;
            books.push(b);
        }
        books.push(book("e", Status::Reading));

        let wishlist = catalog(books).wishlisted_books();
        assert_eq!(ids(&wishlist), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_collection_ranks_use_list_positions() {
        let collection = Collection {
            name: "Picks".to_string(),
            description: "Best of".to_string(),
            books: vec!["id-missing".into(), "id-2".into(), "id-2".into()],
        };
        let catalog =
            Catalog::new(vec![book("id-2", Status::Finished)], vec![collection]).unwrap();

        let resolved = catalog.book_collections();
        assert_eq!(resolved.len(), 1);

        let ranks: Vec<i32> = resolved[0].books.iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![2, 3]);
        assert_eq!(catalog.books[0].rank, 0);
    }

    #[test]
    fn test_unresolvable_collection_is_kept() {
        let collection = Collection {
            name: "Ghosts".to_string(),
            description: String::new(),
            books: vec!["nope".into()],
        };
        let catalog = Catalog::new(Vec::new(), vec![collection]).unwrap();

        let resolved = catalog.book_collections();
        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].is_empty());
    }

    #[test]
    fn test_quotes_carry_source_metadata() {
        let mut source = Book::new("dune", "Dune", Status::Finished);
        source.authors = vec!["Frank Herbert".to_string()];
        source.quotes = vec![Quote {
            quote: "Fear is the mind-killer.".to_string(),
            author: "Bene Gesserit".to_string(),
        }];

        let quotes = catalog(vec![source]).book_quotes();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].book_title, "Dune");
        assert_eq!(quotes[0].book_id.as_str(), "dune");
        assert_eq!(quotes[0].authors, vec!["Frank Herbert".to_string()]);
    }
}

// Shared fixtures for the library integration tests

#![allow(dead_code)]

use bookshelf_core::{Book, Collection, Progress, Quote, Status};
use bookshelf_library::Catalog;

pub const REFERENCE_YEAR: i32 = 2025;

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    language: &str,
    genre: &str,
    pages: i32,
    status: Status,
    rank: i32,
    rating: f64,
    progress: Progress,
) -> Book {
    Book {
        language: language.to_string(),
        genre: genre.to_string(),
        pages,
        rank,
        rating,
        progress,
        date_added: "2025-11-01".to_string(),
        ..Book::new(id, title, status)
    }
}

fn progress(started: &str, finished: &str, pages_read: u32) -> Progress {
    Progress {
        date_started: started.to_string(),
        date_finished: finished.to_string(),
        pages_read,
    }
}

/// Six books: three finished (two in 2025), one reading, one queued, one wished for
pub fn six_books() -> Vec<Book> {
    vec![
        book(
            "book-1",
            "Book One",
            "en",
            "fiction",
            300,
            Status::Finished,
            2,
            4.5,
            progress("2025-11-08", "2025-11-14", 0),
        ),
        book(
            "book-2",
            "Book Two",
            "de",
            "non-fiction",
            150,
            Status::Finished,
            5,
            3.8,
            progress("2025-11-01", "2025-11-07", 0),
        ),
        book(
            "book-3",
            "Book Three",
            "en",
            "fiction",
            200,
            Status::Reading,
            3,
            0.0,
            progress("2025-11-15", "", 50),
        ),
        book(
            "book-4",
            "Book Four",
            "en",
            "science-fiction",
            350,
            Status::ToRead,
            1,
            0.0,
            progress("", "", 0),
        ),
        book(
            "book-5",
            "Book Five",
            "en",
            "science-fiction",
            400,
            Status::Wishlisted,
            6,
            0.0,
            progress("", "", 0),
        ),
        book(
            "book-6",
            "Book Six",
            "de",
            "literature",
            100,
            Status::Finished,
            4,
            4.0,
            progress("2024", "2024", 0),
        ),
    ]
}

pub fn six_book_catalog() -> Catalog {
    Catalog::new(six_books(), Vec::new()).expect("fixture catalog is valid")
}

/// Catalog with quotes spread over several books and a couple of collections
pub fn quoted_catalog(books_reversed: bool) -> Catalog {
    let mut books = six_books();
    let quotes = [
        ("book-1", "It was the best of times."),
        ("book-1", "Call me Ishmael."),
        ("book-2", "All happy families are alike."),
        ("book-3", "Call me Ishmael."),
        ("book-5", "So it goes."),
    ];
    for (id, text) in quotes {
        if let Some(book) = books.iter_mut().find(|b| b.id.as_str() == id) {
            book.authors = vec![format!("Author of {}", id)];
            book.quotes.push(Quote {
                quote: text.to_string(),
                author: String::new(),
            });
        }
    }
    if books_reversed {
        books.reverse();
    }

    let collections = vec![
        Collection {
            name: "Favourites".to_string(),
            description: "The ones I reread".to_string(),
            books: vec!["book-6".into(), "book-1".into()],
        },
        Collection {
            name: "Lost".to_string(),
            description: String::new(),
            books: vec!["gone".into()],
        },
    ];

    Catalog::new(books, collections).expect("fixture catalog is valid")
}

use crate::helpers::{decimal, join, title};
use bookshelf_core::{Book, Status};
use maud::{html, Markup};

/// Heading for a status group
pub(crate) fn status_heading(status: &Status) -> String {
    match status {
        Status::Other(s) if s.is_empty() => "Uncategorised".to_string(),
        other => title(other.as_str()),
    }
}

/// Link to a book's own page
pub(crate) fn book_href(book: &Book) -> String {
    format!("{}.html", book.id)
}

/// Compact book summary used in lists
pub(crate) fn book_card(book: &Book) -> Markup {
    html! {
        article.book-card {
            @if !book.cover.is_empty() {
                img.cover src=(book.cover) alt={ "Cover of " (book.title) } loading="lazy";
            }
            div.book-info {
                h3 { a href=(book_href(book)) { (book.title) } }
                @if !book.subtitle.is_empty() {
                    p.subtitle { (book.subtitle) }
                }
                @if !book.authors.is_empty() {
                    p.authors { (join(&book.authors)) }
                }
                @if book.is_ranked() {
                    span.rank { "#" (book.rank) }
                }
                @if book.is_rated() {
                    span.rating { (decimal(book.rating)) " / 5" }
                }
            }
        }
    }
}

/// Grid of book cards
pub(crate) fn book_list(books: &[Book]) -> Markup {
    html! {
        div.book-list {
            @for book in books {
                (book_card(book))
            }
        }
    }
}

use super::components::status_heading;
use super::Page;
use crate::helpers::{decimal, join, title};
use bookshelf_core::Book;
use maud::{html, Markup};

/// Detail page for a single book, written to `<book-id>.html`
#[derive(Debug, Clone)]
pub struct BookPage {
    pub book: Book,
}

impl BookPage {
    pub fn new(book: Book) -> Self {
        Self { book }
    }

    fn detail(label: &str, value: impl maud::Render) -> Markup {
        html! {
            dt { (label) }
            dd { (value) }
        }
    }
}

impl Page for BookPage {
    fn name(&self) -> &str {
        self.book.id.as_str()
    }

    fn title(&self) -> String {
        self.book.title.clone()
    }

    fn nav(&self) -> Option<&str> {
        None
    }

    fn content(&self) -> Markup {
        let book = &self.book;
        let progress = &book.progress;

        html! {
            article.book {
                @if !book.cover.is_empty() {
                    img.cover src=(book.cover) alt={ "Cover of " (book.title) };
                }
                h1 { (book.title) }
                @if !book.subtitle.is_empty() {
                    p.subtitle { (book.subtitle) }
                }
                @if !book.authors.is_empty() {
                    p.authors { "by " (join(&book.authors)) }
                }
                dl.details {
                    (Self::detail("Status", status_heading(&book.status)))
                    @if book.year != 0 { (Self::detail("Published", book.year)) }
                    @if book.pages > 0 { (Self::detail("Pages", book.pages)) }
                    @if !book.language.is_empty() { (Self::detail("Language", title(&book.language))) }
                    @if !book.genre.is_empty() { (Self::detail("Genre", title(&book.genre))) }
                    @if !book.tags.is_empty() { (Self::detail("Tags", join(&book.tags))) }
                    @if !book.isbn.is_empty() { (Self::detail("ISBN", &book.isbn)) }
                    @if !book.date_added.is_empty() { (Self::detail("Added", &book.date_added)) }
                    @if !progress.date_started.is_empty() { (Self::detail("Started", &progress.date_started)) }
                    @if !progress.date_finished.is_empty() { (Self::detail("Finished", &progress.date_finished)) }
                    @if progress.pages_read != 0 { (Self::detail("Pages read", progress.pages_read)) }
                    @if book.is_rated() { (Self::detail("Rating", decimal(book.rating))) }
                }
                @if !book.link.is_empty() {
                    p.link { a href=(book.link) rel="noopener" { "More about this book" } }
                }
                @if !book.review.is_empty() {
                    section.review {
                        h2 { "Review" }
                        @for paragraph in &book.review {
                            p { (paragraph) }
                        }
                    }
                }
                @if !book.quotes.is_empty() {
                    section.quotes {
                        h2 { "Quotes" }
                        @for quote in &book.quotes {
                            blockquote {
                                p { (quote.quote) }
                                @if !quote.author.is_empty() {
                                    footer { (quote.author) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{Quote, Status};

    #[test]
    fn test_book_page_details() {
        let mut book = Book::new("dune", "Dune", Status::Finished);
        book.authors = vec!["Frank Herbert".to_string()];
        book.genre = "science fiction".to_string();
        book.rating = 4.5;
        book.review = vec!["First.".to_string(), "Second.".to_string()];
        book.quotes = vec![Quote {
            quote: "Fear is the mind-killer.".to_string(),
            author: String::new(),
        }];

        let page = BookPage::new(book);
        assert_eq!(page.name(), "dune");
        assert_eq!(page.nav(), None);

        let html = page.content().into_string();
        assert!(html.contains("by Frank Herbert"));
        assert!(html.contains("Science fiction"));
        assert!(html.contains("4.5"));
        assert!(html.contains("<p>Second.</p>"));
        assert!(html.contains("Fear is the mind-killer."));
        assert!(!html.contains("Published"));
    }
}

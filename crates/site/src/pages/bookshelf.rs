use super::components::{book_list, status_heading};
use super::Page;
use bookshelf_library::{Catalog, StatusGroups};
use maud::{html, Markup};

/// Every shelved book grouped by status, alphabetical within a group
#[derive(Debug, Clone)]
pub struct BookshelfPage {
    pub books: StatusGroups,
}

impl BookshelfPage {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            books: catalog.shelved_books(),
        }
    }
}

impl Page for BookshelfPage {
    fn name(&self) -> &str {
        "bookshelf"
    }

    fn title(&self) -> String {
        "Bookshelf".to_string()
    }

    fn content(&self) -> Markup {
        html! {
            h1 { (self.title()) }
            @if self.books.is_empty() {
                p.empty { "The shelf is empty." }
            }
            @for (status, books) in &self.books {
                section.shelf {
                    h2 { (status_heading(status)) " " span.count { "(" (books.len()) ")" } }
                    (book_list(books))
                }
            }
        }
    }
}

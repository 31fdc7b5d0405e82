use super::components::book_list;
use super::Page;
use bookshelf_core::Book;
use bookshelf_library::Catalog;
use maud::{html, Markup};

#[derive(Debug, Clone)]
pub struct WishlistPage {
    pub books: Vec<Book>,
}

impl WishlistPage {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            books: catalog.wishlisted_books(),
        }
    }
}

impl Page for WishlistPage {
    fn name(&self) -> &str {
        "wishlist"
    }

    fn title(&self) -> String {
        "Wishlist".to_string()
    }

    fn content(&self) -> Markup {
        html! {
            h1 { (self.title()) }
            @if self.books.is_empty() {
                p.empty { "Nothing on the wishlist." }
            } @else {
                (book_list(&self.books))
            }
        }
    }
}

//! One view model per generated page
//!
//! Each model is built from a [`Catalog`](bookshelf_library::Catalog) and
//! knows its output name, its title and how to render its content. The
//! shared chrome lives in [`Layout`](crate::layout::Layout).

mod book;
mod bookshelf;
mod collections;
pub(crate) mod components;
mod index;
mod quotes;
mod wishlist;

pub use book::BookPage;
pub use bookshelf::BookshelfPage;
pub use collections::CollectionsPage;
pub use index::IndexPage;
pub use quotes::QuotesPage;
pub use wishlist::WishlistPage;

use maud::Markup;

/// A renderable page
pub trait Page {
    /// File stem of the page inside the output directory
    fn name(&self) -> &str;

    /// Title used in `<title>` and the page heading
    fn title(&self) -> String;

    /// Navigation entry to highlight, if the page has one
    fn nav(&self) -> Option<&str> {
        Some(self.name())
    }

    /// Page body, without the surrounding layout
    fn content(&self) -> Markup;
}

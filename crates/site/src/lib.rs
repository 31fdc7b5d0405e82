//! Bookshelf Site
//!
//! Static HTML output for a [`Catalog`](bookshelf_library::Catalog). Every
//! page has a typed view model in [`pages`], rendered with maud inside a
//! shared [`Layout`]. [`SiteBuilder`] ties it together: it creates the output
//! directory, copies static assets and writes each page.
//!
//! Output layout:
//!
//! ```text
//! dist/
//!   index.html        dashboard: upcoming books and statistics
//!   bookshelf.html    shelved books by status
//!   collections.html
//!   quotes.html
//!   wishlist.html
//!   <book-id>.html    one per book
//! ```

mod builder;
mod error;
pub mod helpers;
mod layout;
pub mod pages;
mod static_files;

pub use builder::{render_page, write_page, BuildSummary, SiteBuilder, DEFAULT_UPCOMING_LIMIT};
pub use error::{SiteError, SiteResult};
pub use layout::{Layout, NAV_ITEMS};
pub use pages::Page;
pub use static_files::copy_static_files;

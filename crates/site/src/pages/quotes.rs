use super::Page;
use crate::helpers::join;
use bookshelf_core::QuoteEntry;
use bookshelf_library::Catalog;
use maud::{html, Markup};

#[derive(Debug, Clone)]
pub struct QuotesPage {
    pub quotes: Vec<QuoteEntry>,
}

impl QuotesPage {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            quotes: catalog.book_quotes(),
        }
    }
}

impl Page for QuotesPage {
    fn name(&self) -> &str {
        "quotes"
    }

    fn title(&self) -> String {
        "Quotes".to_string()
    }

    fn content(&self) -> Markup {
        html! {
            h1 { (self.title()) }
            @for entry in &self.quotes {
                figure.quote {
                    blockquote { p { (entry.quote) } }
                    figcaption {
                        a href={ (entry.book_id.as_str()) ".html" } { cite { (entry.book_title) } }
                        @if !entry.authors.is_empty() {
                            " by " (join(&entry.authors))
                        }
                    }
                }
            }
        }
    }
}

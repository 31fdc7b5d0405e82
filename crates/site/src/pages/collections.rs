use super::components::book_list;
use super::Page;
use bookshelf_core::ResolvedCollection;
use bookshelf_library::Catalog;
use maud::{html, Markup};

#[derive(Debug, Clone)]
pub struct CollectionsPage {
    pub collections: Vec<ResolvedCollection>,
}

impl CollectionsPage {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            collections: catalog.book_collections(),
        }
    }
}

impl Page for CollectionsPage {
    fn name(&self) -> &str {
        "collections"
    }

    fn title(&self) -> String {
        "Collections".to_string()
    }

    fn content(&self) -> Markup {
        html! {
            h1 { (self.title()) }
            @for collection in &self.collections {
                section.collection {
                    h2 { (collection.name) }
                    @if !collection.description.is_empty() {
                        p.description { (collection.description) }
                    }
                    @if collection.is_empty() {
                        p.empty { "No books in this collection yet." }
                    } @else {
                        (book_list(&collection.books))
                    }
                }
            }
        }
    }
}

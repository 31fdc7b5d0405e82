use super::components::{book_list, status_heading};
use super::Page;
use crate::helpers::{decimal, title};
use bookshelf_core::{StatCount, Stats};
use bookshelf_library::{Catalog, UpcomingBooks};
use maud::{html, Markup};

/// Dashboard: what is being read next plus library statistics
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub upcoming: UpcomingBooks,
    pub stats: Stats,
    pub current_year: i32,
}

impl IndexPage {
    pub fn from_catalog(catalog: &Catalog, upcoming_limit: usize, current_year: i32) -> Self {
        Self {
            upcoming: catalog.upcoming_books(upcoming_limit),
            stats: catalog.stats(current_year),
            current_year,
        }
    }

    /// True when the limited view actually has something to show
    pub fn has_upcoming_books(&self) -> bool {
        self.upcoming.total() > 0
    }

    fn stat_counts(heading: &str, counts: &[StatCount]) -> Markup {
        html! {
            section.distribution {
                h3 { (heading) }
                @if counts.is_empty() {
                    p.empty { "None yet." }
                } @else {
                    ol {
                        @for entry in counts {
                            li { (title(&entry.value)) " " span.count { "(" (entry.count) ")" } }
                        }
                    }
                }
            }
        }
    }
}

impl Page for IndexPage {
    fn name(&self) -> &str {
        "index"
    }

    fn title(&self) -> String {
        String::new()
    }

    fn content(&self) -> Markup {
        let stats = &self.stats;

        html! {
            section.upcoming {
                h2 { "Up next" }
                @if self.has_upcoming_books() {
                    @for (status, books) in &self.upcoming.groups {
                        @if !books.is_empty() {
                            h3 { (status_heading(status)) }
                            (book_list(books))
                        }
                    }
                } @else {
                    p.empty { "Nothing on the reading list right now." }
                }
            }
            section.stats {
                h2 { "Statistics" }
                dl {
                    dt { "Books" } dd { (stats.total_books) }
                    dt { "Finished" } dd { (stats.books_finished) }
                    dt { "Finished in " (self.current_year) } dd { (stats.books_finished_this_year) }
                    dt { "Pages read" } dd { (stats.pages_read) }
                    dt { "Pages read in " (self.current_year) } dd { (stats.pages_read_this_year) }
                    dt { "Average rating" } dd { (decimal(stats.average_rating)) }
                    dt { "Average pages" } dd { (decimal(stats.average_pages)) }
                }
                (Self::stat_counts("Top genres", &stats.top_genres))
                (Self::stat_counts("By status", &stats.books_by_status))
                (Self::stat_counts("By language", &stats.books_by_language))
            }
        }
    }
}

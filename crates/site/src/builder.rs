//! Writes the whole site for a catalog

use crate::error::{SiteError, SiteResult};
use crate::helpers::page_file_name;
use crate::layout::{Layout, NAV_ITEMS};
use crate::pages::{
    BookPage, BookshelfPage, CollectionsPage, IndexPage, Page, QuotesPage, WishlistPage,
};
use crate::static_files::copy_static_files;
use bookshelf_library::Catalog;
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of upcoming books on the dashboard
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// What a build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output_path: PathBuf,
    pub pages_written: usize,
    pub static_files_copied: usize,
}

/// Renders every page of the site into an output directory
///
/// ```rust,no_run
/// use bookshelf_library::Catalog;
/// use bookshelf_site::SiteBuilder;
///
/// let catalog = Catalog::load("data/data.json").unwrap();
/// let summary = SiteBuilder::new("dist", "Bookshelf")
///     .static_path("static")
///     .current_year(2025)
///     .build(&catalog)
///     .unwrap();
/// println!("{} pages", summary.pages_written);
/// ```
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    output_path: PathBuf,
    static_path: Option<PathBuf>,
    site_title: String,
    upcoming_limit: usize,
    current_year: Option<i32>,
    last_updated: Option<NaiveDate>,
}

impl SiteBuilder {
    pub fn new(output_path: impl Into<PathBuf>, site_title: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            static_path: None,
            site_title: site_title.into(),
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            current_year: None,
            last_updated: None,
        }
    }

    /// Directory whose contents are copied into the output first
    pub fn static_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_path = Some(path.into());
        self
    }

    /// Upcoming books shown on the dashboard; 0 shows all of them
    pub fn upcoming_limit(mut self, limit: usize) -> Self {
        self.upcoming_limit = limit;
        self
    }

    /// Reference year for the year-scoped statistics
    pub fn current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Date printed in the footer; defaults to today
    pub fn last_updated(mut self, date: NaiveDate) -> Self {
        self.last_updated = Some(date);
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Copies static assets, then renders the index, bookshelf, collections,
    /// quotes and wishlist pages followed by one page per book
    ///
    /// Stops at the first failure.
    pub fn build(&self, catalog: &Catalog) -> SiteResult<BuildSummary> {
        let today = Local::now().date_naive();
        let last_updated = self.last_updated.unwrap_or(today);
        let current_year = self.current_year.unwrap_or_else(|| today.year());
        let layout = Layout::new(
            self.site_title.clone(),
            last_updated.format("%Y-%m-%d").to_string(),
        );

        self.ensure_output_dir()?;

        let static_files_copied = match &self.static_path {
            Some(path) => copy_static_files(path, &self.output_path)?,
            None => 0,
        };

        let mut pages_written = 0;
        let mut write = |page: &dyn Page| -> SiteResult<()> {
            write_page(&layout, page, &self.output_path)?;
            pages_written += 1;
            Ok(())
        };

        write(&IndexPage::from_catalog(
            catalog,
            self.upcoming_limit,
            current_year,
        ))?;
        write(&BookshelfPage::from_catalog(catalog))?;
        write(&CollectionsPage::from_catalog(catalog))?;
        write(&QuotesPage::from_catalog(catalog))?;
        write(&WishlistPage::from_catalog(catalog))?;

        for book in &catalog.books {
            // A book page must not overwrite one of the fixed pages
            if NAV_ITEMS.iter().any(|(name, _)| *name == book.id.as_str()) {
                return Err(SiteError::InvalidPageName(book.id.to_string()));
            }
            write(&BookPage::new(book.clone()))?;
        }

        info!(
            "Rendered {} pages and copied {} static files into {}",
            pages_written,
            static_files_copied,
            self.output_path.display()
        );

        Ok(BuildSummary {
            output_path: self.output_path.clone(),
            pages_written,
            static_files_copied,
        })
    }

    fn ensure_output_dir(&self) -> SiteResult<()> {
        if !self.output_path.is_dir() {
            fs::create_dir_all(&self.output_path).map_err(|e| SiteError::OutputDirectory {
                path: self.output_path.clone(),
                source: e,
            })?;
            debug!("Created output directory {}", self.output_path.display());
        }
        Ok(())
    }
}

/// Renders a page inside the layout as a string
pub fn render_page(layout: &Layout, page: &dyn Page) -> String {
    layout
        .render(&page.title(), page.nav(), page.content())
        .into_string()
}

/// Renders a page and writes it to `<output>/<name>.html`
pub fn write_page(layout: &Layout, page: &dyn Page, output: &Path) -> SiteResult<PathBuf> {
    let file_name = page_file_name(page.name())
        .ok_or_else(|| SiteError::InvalidPageName(page.name().to_string()))?;
    let path = output.join(file_name);

    fs::write(&path, render_page(layout, page)).map_err(|e| SiteError::WritePage {
        page: page.name().to_string(),
        path: path.clone(),
        source: e,
    })?;

    debug!("Wrote {}", path.display());
    Ok(path)
}

//! Site generation configuration section

use crate::validation::{Checks, ConfigSection};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest dashboard limit accepted; 0 still means "no limit"
const MAX_UPCOMING_LIMIT: usize = 100;

/// Input and output locations plus page settings
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown in the page header and `<title>`
    pub title: String,

    /// Catalog JSON file
    pub data_path: PathBuf,

    /// Directory the generated pages are written to
    pub output_path: PathBuf,

    /// Directory copied verbatim into the output (CSS, JS, images)
    pub static_path: PathBuf,

    /// Books shown under "upcoming" on the dashboard (0 = all)
    pub upcoming_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Bookshelf".to_string(),
            data_path: PathBuf::from("data/data.json"),
            output_path: PathBuf::from("dist"),
            static_path: PathBuf::from("static"),
            upcoming_limit: 3,
        }
    }
}

impl ConfigSection for SiteConfig {
    const NAME: &'static str = "site";

    fn check(&self, checks: &mut Checks) {
        checks.require_text("title", &self.title);
        checks.require_path("data_path", &self.data_path);
        checks.require_path("output_path", &self.output_path);
        checks.at_most("upcoming_limit", self.upcoming_limit, MAX_UPCOMING_LIMIT);

        // Copying the static directory into itself would recurse forever
        if !self.output_path.as_os_str().is_empty() && self.output_path == self.static_path {
            let problem = format!(
                "must differ from site.static_path (both are {})",
                self.output_path.display()
            );
            checks.reject("output_path", problem);
        }
    }
}

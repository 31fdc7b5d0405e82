//! Copying the static asset directory into the output directory

use crate::error::{SiteError, SiteResult};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copies `source` into `destination`, returning the number of files copied
///
/// Directories are created as needed and existing files are overwritten.
/// A missing source directory is not an error: it is logged and nothing is
/// copied.
pub fn copy_static_files(source: &Path, destination: &Path) -> SiteResult<usize> {
    if !source.is_dir() {
        warn!(
            "Static directory {} not found, skipping asset copy",
            source.display()
        );
        return Ok(0);
    }

    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = match entry.path().strip_prefix(source) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| SiteError::StaticCopy {
                path: target.clone(),
                source: e,
            })?;
            continue;
        }

        fs::copy(entry.path(), &target).map_err(|e| SiteError::StaticCopy {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
        debug!("Copied {}", relative.display());
        copied += 1;
    }

    Ok(copied)
}

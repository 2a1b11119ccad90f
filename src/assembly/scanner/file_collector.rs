use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::assembly::types::DEFAULT_NAME_FILTER;

/// File collector for finding candidate module files
#[derive(Debug)]
pub struct FileCollector {
    /// Substring a file name must contain (ordinal, case-sensitive)
    name_filter: String,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a new file collector with the default name filter
    pub fn new() -> Self {
        Self::with_name_filter(DEFAULT_NAME_FILTER)
    }

    /// Create a new file collector with a custom name filter
    pub fn with_name_filter(name_filter: impl Into<String>) -> Self {
        Self {
            name_filter: name_filter.into(),
        }
    }

    /// Whether a path's file name passes the filter
    pub fn is_candidate(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().contains(self.name_filter.as_str()))
            .unwrap_or(false)
    }

    /// Collect the candidate files directly inside the input directory.
    ///
    /// Files come back sorted by file name and symlinks are followed. A
    /// candidate whose link cannot be followed is still returned so that
    /// loading it fails on its own. A missing or unreadable directory is an
    /// error.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(input_dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    if let Some(path) = e.path().filter(|p| self.is_candidate(p)) {
                        trace!("Unresolvable candidate {}: {}", path.display(), e);
                        files.push(path.to_path_buf());
                    }
                    continue;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to enumerate directory {}", input_dir.display()));
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if self.is_candidate(entry.path()) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        debug!("Collected {} files matching '{}'", files.len(), self.name_filter);
        Ok(files)
    }
}

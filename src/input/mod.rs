pub mod filename;
#[cfg(test)]
pub mod memory;

pub use filename::parse_filename_timestamp;

use crate::error::{PlayerError, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Read access to log files
///
/// Abstracts content and creation-time lookups so the resolver can be
/// exercised without touching real file metadata.
pub trait FileSource {
    /// Read the full text content of a file
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Get the creation time of a file
    fn created(&self, path: &Path) -> Result<DateTime<Utc>>;
}

/// File source backed by the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| PlayerError::filesystem(path, e))
    }

    fn created(&self, path: &Path) -> Result<DateTime<Utc>> {
        let metadata = std::fs::metadata(path).map_err(|e| PlayerError::filesystem(path, e))?;

        // Not every filesystem records a birth time
        let time = match metadata.created() {
            Ok(time) => time,
            Err(e) => {
                debug!("No creation time for {} ({}), using modification time", path.display(), e);
                metadata.modified().map_err(|e| PlayerError::filesystem(path, e))?
            }
        };

        Ok(DateTime::<Utc>::from(time))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Find all files with the given extension below `root`, sorted by path
///
/// Hidden files and directories are skipped.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).map_err(|e| PlayerError::filesystem(root, e))?;
    if !metadata.is_dir() {
        return Err(PlayerError::filesystem(
            root,
            std::io::Error::other("not a directory"),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            PlayerError::filesystem(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == extension)
            .unwrap_or(false);

        if matches {
            files.push(entry.into_path());
        }
    }

    // Plain string order, so "a-b/x" sorts before "a/x" the same way on every platform
    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    debug!("Discovered {} .{} files under {}", files.len(), extension, root.display());

    Ok(files)
}

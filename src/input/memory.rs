use crate::error::{PlayerError, Result};
use crate::input::FileSource;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory file source for tests
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, (String, Option<DateTime<Utc>>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file created `created_ms` milliseconds after the epoch
    pub fn with_file(mut self, path: &str, content: &str, created_ms: i64) -> Self {
        let created = Utc
            .timestamp_millis_opt(created_ms)
            .single()
            .unwrap_or_else(Utc::now);
        self.files
            .insert(PathBuf::from(path), (content.to_string(), Some(created)));
        self
    }

    /// Add a file whose creation time cannot be read
    pub fn with_untimed_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), (content.to_string(), None));
        self
    }

    fn get(&self, path: &Path) -> Result<&(String, Option<DateTime<Utc>>)> {
        self.files.get(path).ok_or_else(|| {
            PlayerError::filesystem(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }
}

impl FileSource for MemorySource {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.get(path).map(|(content, _)| content.clone())
    }

    fn created(&self, path: &Path) -> Result<DateTime<Utc>> {
        self.get(path)?.1.ok_or_else(|| {
            PlayerError::filesystem(path, std::io::Error::from(std::io::ErrorKind::Unsupported))
        })
    }
}

//! In-memory source for tests

use super::ContentReader;
use async_trait::async_trait;
use std::collections::HashMap;

/// A [`ContentReader`] backed by an in-memory path→content map.
///
/// Paths listed without content (via [`MockReader::file_list`] input) can be
/// simulated by simply not adding them to the map; reads then return `None`,
/// the same as an unreadable blob.
#[derive(Debug, Default)]
pub struct MockReader {
    files: HashMap<String, String>,
}

impl MockReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<P, C>(entries: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        let mut reader = Self::new();
        for (path, content) in entries {
            reader.add_file(path, content);
        }
        reader
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Sorted list of every path in the map.
    pub fn file_list(&self) -> Vec<String> {
        let mut files: Vec<String> = self.files.keys().cloned().collect();
        files.sort();
        files
    }
}

#[async_trait]
impl ContentReader for MockReader {
    async fn read(&self, path: &str) -> Option<String> {
        self.files.get(path).cloned()
    }
}

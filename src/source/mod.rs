//! Project sources: file listings and the content-reading capability
//!
//! Detection logic never performs I/O itself. Each source produces a flat
//! list of `/`-separated relative paths and implements [`ContentReader`],
//! so the same detectors work against the GitHub API, a local directory,
//! or an in-memory map in tests.

pub mod github;
pub mod local;
pub mod mock;

use async_trait::async_trait;

/// Flat, ordered list of relative file paths for one project snapshot.
///
/// Paths use `/` separators. Local-folder sources include the root directory
/// name as the first path segment; hosted-repo listings do not.
pub type FileList = Vec<String>;

/// Capability for fetching a file's text content by path.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Returns the UTF-8 content of `path`, or `None` when the file is
    /// missing, binary, or otherwise unreadable. Never fails: an unreadable
    /// file is "no data", not an error.
    async fn read(&self, path: &str) -> Option<String>;
}

/// Everything a generation request knows about its target project.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    /// Project name (repository name or local directory name).
    pub name: String,
    /// Original description, possibly empty. Passed to the enhancer as-is.
    pub description: String,
    /// Canonical repository URL, if the project came from a hosted source.
    pub repo_url: Option<String>,
    /// Flat file listing for the project snapshot.
    pub files: FileList,
}

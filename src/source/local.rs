//! Local directory source
//!
//! Walks a directory recursively (respecting `.gitignore`) and produces a
//! file list whose paths carry the root directory name as their first
//! segment, matching the shape of a local folder selection.

use super::{ContentReader, ProjectInput};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct LocalSource {
    root: PathBuf,
    root_name: String,
}

impl LocalSource {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            bail!("{} is not a directory", root.display());
        }
        let canonical = root
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", root.display()))?;
        let root_name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());

        Ok(Self { root, root_name })
    }

    /// Walks the directory and builds the project input. The listing is
    /// sorted for determinism; hidden files are included (the tree renderer
    /// filters dotfiles at display time).
    pub fn scan(&self) -> ProjectInput {
        let mut files = Vec::new();
        for entry in WalkBuilder::new(&self.root).hidden(false).build().flatten() {
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(&self.root) {
                let rel = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                files.push(format!("{}/{}", self.root_name, rel));
            }
        }
        files.sort();
        debug!(root = %self.root.display(), files = files.len(), "local scan complete");

        ProjectInput {
            name: self.root_name.clone(),
            description: String::new(),
            repo_url: None,
            files,
        }
    }
}

#[async_trait]
impl ContentReader for LocalSource {
    async fn read(&self, path: &str) -> Option<String> {
        // Listed paths carry the root directory name as their first segment.
        let prefix = format!("{}/", self.root_name);
        let rel = path.strip_prefix(&prefix).unwrap_or(path);
        tokio::fs::read_to_string(self.root.join(rel)).await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, LocalSource) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\n",
        )
        .unwrap();
        let source = LocalSource::new(dir.path()).unwrap();
        (dir, source)
    }

    #[test]
    fn test_scan_prefixes_root_name() {
        let (_dir, source) = fixture();
        let project = source.scan();
        let prefix = format!("{}/", project.name);
        assert!(!project.files.is_empty());
        assert!(project.files.iter().all(|f| f.starts_with(&prefix)));
    }

    #[test]
    fn test_scan_finds_nested_files() {
        let (_dir, source) = fixture();
        let project = source.scan();
        assert!(project
            .files
            .iter()
            .any(|f| f.ends_with("src/main.rs")));
    }

    #[tokio::test]
    async fn test_read_resolves_prefixed_path() {
        let (_dir, source) = fixture();
        let project = source.scan();
        let manifest = project
            .files
            .iter()
            .find(|f| f.ends_with("Cargo.toml"))
            .unwrap();
        let content = source.read(manifest).await.unwrap();
        assert!(content.contains("name = \"demo\""));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let (_dir, source) = fixture();
        assert!(source.read("does/not/exist.txt").await.is_none());
    }

    #[test]
    fn test_new_rejects_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert!(LocalSource::new(&file).is_err());
    }
}

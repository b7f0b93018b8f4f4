//! Repository detectors
//!
//! Four independent, read-only scans over the same file list: technology
//! stack and dependencies, run commands, license, and feature keywords.
//! All of them are best-effort heuristics - a malformed manifest degrades
//! to partial data and is never a fatal error.

pub mod commands;
pub mod ecosystem;
pub mod features;
pub mod license;

pub use commands::{detect_run_commands, RunCommand};
pub use ecosystem::detect_stack;
pub use features::detect_features;
pub use license::detect_license;

use serde::{Deserialize, Serialize};

/// Sentinel version for a dependency with no version specifier.
pub const LATEST: &str = "latest";

/// Dependency name → version specifier, in discovery order.
///
/// Names are unique; inserting an existing name overwrites its version
/// (last write wins). Order matters downstream: the assembler renders only
/// the first 15 entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyMap {
    entries: Vec<(String, String)>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        let name = name.into();
        let version = version.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = version;
        } else {
            self.entries.push((name, version));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Result of the stack scan: tech labels plus declared dependencies.
#[derive(Debug, Clone, Default)]
pub struct StackReport {
    /// Deduplicated tech labels, sorted lexicographically at return.
    pub tech: Vec<String>,
    /// Declared dependencies of the winning ecosystem.
    pub deps: DependencyMap,
}

impl StackReport {
    pub fn add_tech(&mut self, label: &str) {
        if !self.tech.iter().any(|t| t == label) {
            self.tech.push(label.to_string());
        }
    }

    /// Sorts tech labels for deterministic output.
    pub(crate) fn finish(mut self) -> Self {
        self.tech.sort();
        self
    }
}

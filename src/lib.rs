//! readmebuddy - automatic README generation for code repositories
//!
//! This library inspects a repository's file listing (from the GitHub API or a
//! local directory walk) to infer its technology stack, declared dependencies,
//! runnable commands, license, and high-level features, then assembles the
//! detected facts into a structured Markdown README. The prose description is
//! rewritten by an LLM before assembly.
//!
//! # Core Concepts
//!
//! - **Sources**: where a project's file list and file contents come from -
//!   a hosted GitHub repository or a local folder. Both expose the same
//!   [`ContentReader`] capability, so detection logic never touches the
//!   network or disk directly.
//! - **Detectors**: independent, best-effort heuristic scans over the file
//!   list (stack/dependencies, run commands, license, features). Malformed
//!   manifests never abort a scan.
//! - **Enhancer**: the injected LLM call that rewrites the project
//!   description. Its failure aborts the whole generation - no partial
//!   document is ever produced.
//!
//! # Example Usage
//!
//! ```ignore
//! use readmebuddy::enhance::genai::{GenAiEnhancer, DEFAULT_MODEL};
//! use readmebuddy::generator::ReadmeGenerator;
//! use readmebuddy::source::github::GithubSource;
//! use std::time::Duration;
//!
//! async fn generate(url: &str) -> anyhow::Result<String> {
//!     let source = GithubSource::from_url(url)?;
//!     let project = source.fetch_project().await?;
//!
//!     let enhancer = GenAiEnhancer::new(DEFAULT_MODEL, Duration::from_secs(60));
//!     let generator = ReadmeGenerator::new(&enhancer);
//!
//!     Ok(generator.generate(&project, &source).await?)
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`source`]: file-list providers and the [`ContentReader`] capability
//! - [`detect`]: stack, run-command, license, and feature detectors
//! - [`render`]: directory-tree rendering and Markdown assembly
//! - [`enhance`]: description-enhancement trait and backends
//! - [`generator`]: the end-to-end pipeline

// Public modules
pub mod cli;
pub mod detect;
pub mod enhance;
pub mod error;
pub mod generator;
pub mod render;
pub mod source;
pub mod util;

// Re-export key types for convenient access
pub use detect::{DependencyMap, RunCommand, StackReport};
pub use enhance::{EnhanceError, EnhanceInput, EnhancedDescription, Enhancer};
pub use error::GenerateError;
pub use generator::ReadmeGenerator;
pub use source::{ContentReader, FileList, ProjectInput};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "readmebuddy");
    }
}

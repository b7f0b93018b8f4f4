//! End-to-end README generation pipeline
//!
//! Runs the four detectors over a project's file list, sends the detected
//! facts through the description enhancer, and assembles the final Markdown
//! document. Detection is best-effort; enhancement is all-or-nothing.

use crate::detect::{detect_features, detect_license, detect_run_commands, detect_stack};
use crate::enhance::{EnhanceInput, Enhancer};
use crate::error::GenerateError;
use crate::render::{assemble, AssembleContext};
use crate::source::{ContentReader, ProjectInput};
use tracing::{debug, info};

/// Drives one generation run against an injected [`Enhancer`].
pub struct ReadmeGenerator<'a> {
    enhancer: &'a dyn Enhancer,
}

impl<'a> ReadmeGenerator<'a> {
    pub fn new(enhancer: &'a dyn Enhancer) -> Self {
        Self { enhancer }
    }

    /// Produces the complete README for `project`.
    ///
    /// Returns an error if the file list is empty or the enhancer fails;
    /// no partial document is ever returned.
    pub async fn generate(
        &self,
        project: &ProjectInput,
        reader: &dyn ContentReader,
    ) -> Result<String, GenerateError> {
        if project.files.is_empty() {
            return Err(GenerateError::EmptyFileList);
        }

        info!(
            "generating README for {} ({} files)",
            project.name,
            project.files.len()
        );

        let (stack, commands, license, features) = tokio::join!(
            detect_stack(&project.files, reader),
            detect_run_commands(&project.files, reader),
            detect_license(&project.files, reader),
            detect_features(&project.files, reader),
        );

        debug!(
            "detected: tech={:?}, deps={}, commands={}, license={:?}, features={:?}",
            stack.tech,
            stack.deps.len(),
            commands.len(),
            license,
            features
        );

        let enhanced = self
            .enhancer
            .enhance(EnhanceInput {
                project_name: project.name.clone(),
                original_description: project.description.clone(),
                tech_stack: stack.tech.join(", "),
                features: features.join(", "),
            })
            .await?;

        Ok(assemble(&AssembleContext {
            name: &project.name,
            description: &enhanced.enhanced_description,
            tech: &stack.tech,
            deps: &stack.deps,
            commands: &commands,
            license: license.as_deref(),
            features: &features,
            files: &project.files,
            repo_url: project.repo_url.as_deref(),
        }))
    }
}

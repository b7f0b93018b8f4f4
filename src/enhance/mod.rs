//! Description enhancement
//!
//! The final README prose is produced by an external generative model. The
//! call is modeled as an injected capability ([`Enhancer`]) so the pipeline
//! can run against a real backend or an in-memory mock. One attempt, no
//! retry: a failed call fails the whole generation.

pub mod genai;
pub mod mock;
pub mod prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured input for one enhancement call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceInput {
    pub project_name: String,
    /// Original description, possibly empty.
    pub original_description: String,
    /// Comma-joined detected tech labels.
    pub tech_stack: String,
    /// Comma-joined detected feature keywords.
    pub features: String,
}

/// Output of an enhancement call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedDescription {
    pub enhanced_description: String,
}

/// Errors from an enhancement backend.
#[derive(Debug, Clone, Error)]
pub enum EnhanceError {
    #[error("API error: {message}")]
    Api { message: String },

    #[error("request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("invalid response from model: {message}")]
    InvalidResponse { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

/// The text-enhancement capability.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, input: EnhanceInput) -> Result<EnhancedDescription, EnhanceError>;

    fn name(&self) -> &str;
}

//! Error taxonomy for README generation
//!
//! Only two classes of failure are fatal: bad input (the generation never
//! starts) and a failed enhancement call (the document cannot be produced
//! without it). Everything else - malformed manifests, unreadable files -
//! degrades to partial detection data and is logged, not raised.

use crate::enhance::EnhanceError;
use thiserror::Error;

/// Fatal errors surfaced to the caller of a generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The repository reference was invalid or unreachable.
    #[error("{0}")]
    InvalidInput(String),

    /// The file-list source failed before detection began.
    #[error("repository source error: {0}")]
    Source(String),

    /// The file list was empty; there is nothing to detect.
    #[error("repository contains no files")]
    EmptyFileList,

    /// The description-enhancement call failed. Assembly is all-or-nothing,
    /// so the whole generation fails with it.
    #[error("description enhancement failed: {0}")]
    Enhance(#[from] EnhanceError),
}

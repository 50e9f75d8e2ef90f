use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the video analysis pipeline.
///
/// Only the whole-input condition is fatal. Per-frame problems (no
/// detection, a decode hiccup, a failed inference) are absorbed as absent
/// signals and never reach this type.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The video input could not be opened or decoded at all. No partial
    /// metrics exist for this condition.
    #[error("could not process video input {path:?}: {reason}")]
    VideoOpen { path: PathBuf, reason: String },

    /// Unexpected internal failure (model loading, subprocess plumbing).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

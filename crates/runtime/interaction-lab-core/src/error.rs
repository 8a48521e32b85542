//! Error types shared across the runtime crates.

use thiserror::Error;

/// Failures surfaced by parsing and configuration application.
///
/// Normalization itself is infallible by contract; these cover the paths
/// around it (wire parsing, unknown preset ids, malformed payloads).
#[derive(Debug, Error)]
pub enum LabError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported preset: {0}")]
    UnsupportedPreset(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

//! Board errors.

use crate::text::TextId;
use thiserror::Error;

/// Board axis, used to report which dimension was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors returned by whiteboard operations.
#[derive(Debug, Error)]
pub enum WhiteboardError {
    #[error("Invalid board {axis}: {value} (must be at least 1)")]
    InvalidDimension { axis: Axis, value: u32 },
    #[error("Text not found on board: {0}")]
    NotFound(TextId),
    #[error("Text index {index} out of range (board holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for whiteboard operations.
pub type WhiteboardResult<T> = Result<T, WhiteboardError>;

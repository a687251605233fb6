//! Error types for paragraph reconstruction.
//!
//! Every in-domain malformation is fatal: the engine cannot verify its own
//! output, so a miscalibrated threshold surfaces here instead of producing
//! silently wrong structure.

use thiserror::Error;

/// Primary error type for reconstruction runs.
#[derive(Error, Debug)]
pub enum ReflowError {
    #[error("page {page}: line {index} has no glyphs")]
    EmptyLine { page: u32, index: usize },

    #[error("page {page}: footnote marker {digits:?} is not a number in line {line:?}")]
    FootnoteMarker {
        page: u32,
        line: String,
        digits: String,
    },

    #[error("page {page}: chapter number {number:?} not followed by a chapter title (next line {line:?})")]
    DanglingChapterNumber {
        page: u32,
        number: String,
        line: String,
    },

    #[error("invalid calibration: {0}")]
    InvalidCalibration(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for ReflowError.
pub type Result<T> = std::result::Result<T, ReflowError>;

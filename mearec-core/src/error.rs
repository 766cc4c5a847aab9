//! Error types for mearec-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for selection and shape validation.
///
/// These are logic errors: a selection that fails validation must never
/// reach the container, so they are kept distinct from storage failures,
/// which live in the I/O layer's error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sample window with `end <= start`.
    #[error("invalid sample range: {start}..{end}")]
    InvalidSampleRange { start: usize, end: usize },

    /// Channel window with `end < start`.
    #[error("invalid channel range: {start}..{end}")]
    InvalidChannelRange { start: usize, end: usize },

    /// Channel index outside the recording's channel extent.
    #[error("channel {channel} out of bounds for {nchannels}-channel recording")]
    ChannelOutOfBounds { channel: usize, nchannels: usize },

    /// Buffer shape does not match the requested selection.
    #[error("block shape ({}, {}) does not match expected ({}, {})",
        actual.0, actual.1, expected.0, expected.1)]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

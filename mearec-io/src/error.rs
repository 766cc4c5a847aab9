//! Container-layer error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Container-layer error types.
///
/// Selection/shape logic errors arrive wrapped from `mearec-core`; the
/// variants here cover true storage failures, so callers can tell a
/// malformed request apart from a broken file.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying HDF5 library error.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Core validation error.
    #[error("core error: {0}")]
    Core(#[from] mearec_core::Error),

    /// The path exists but is not a valid recording container, or the
    /// container cannot be opened.
    #[error("could not open recording {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    /// Attribute missing or unreadable; every declared attribute is
    /// mandatory when loading a recording.
    #[error("attribute `{name}`: {source}")]
    AttributeAccess {
        name: String,
        #[source]
        source: hdf5::Error,
    },

    /// String attribute value longer than the fixed declared capacity.
    #[error("string attribute `{name}` exceeds {capacity}-byte capacity")]
    StringTooLong { name: String, capacity: usize },

    /// String attribute value contains an interior NUL byte, which the
    /// fixed-length string type cannot represent.
    #[error("string attribute `{name}` contains an interior NUL byte")]
    StringContainsNul { name: String },

    /// A write would grow the dataset past its maximum sample extent.
    #[error("requested extent of {requested} samples exceeds maximum of {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// Electrode configuration row count does not match the channel extent.
    #[error("configuration has {actual} electrodes, recording has {expected} channels")]
    ConfigurationMismatch { expected: usize, actual: usize },

    /// Sample-data write attempted through a read-only handle.
    #[error("recording is open read-only")]
    ReadOnly,
}

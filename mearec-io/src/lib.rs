//! mearec-io: HDF5 container layer for MEA voltage recordings.
//!
//! A recording is a single HDF5 file holding one rank-2 sample dataset
//! (`channels x samples`, signed 16-bit little-endian, chunked along the
//! sample axis) plus typed scalar and string attributes. Live recordings
//! grow the dataset on demand as sample blocks arrive; offline consumers
//! read arbitrary channel/sample sub-ranges without loading the file.
//!

pub mod array;
pub mod attrs;
mod error;
pub mod geometry;
pub mod hyperslab;
mod recording;

pub use array::{ArrayRecording, Electrode};
pub use error::{Error, Result};
pub use geometry::DatasetGeometry;
pub use recording::{Mode, Recording};

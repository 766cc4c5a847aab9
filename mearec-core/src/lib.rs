//! mearec-core: Pure domain layer for MEA recording storage.
//!
//! This crate holds everything about the recording format that does not
//! touch the HDF5 container: the format configuration, selection-range
//! validation, the raw-to-physical unit scaling, and the core error
//! taxonomy. The container layer lives in `mearec-io`.
//!

pub mod error;
pub mod format;
pub mod range;
pub mod scaling;

pub use error::{Error, Result};
pub use format::FormatConfig;
pub use scaling::to_physical;

//! On-disk format configuration.
//!
//! Every layout decision the container layer needs (dataset name, channel
//! extent, chunking, growth block, capacity ceiling, attribute defaults)
//! is carried by an explicit [`FormatConfig`] value handed to the geometry
//! manager at creation time, rather than by constants baked into call
//! sites.

/// Name of the rank-2 sample dataset inside the container.
pub const DATASET_NAME: &str = "data";

/// Name of the electrode configuration dataset in array recordings.
pub const CONFIGURATION_DATASET_NAME: &str = "configuration";

/// Fixed byte capacity of every string attribute.
///
/// String attributes are created with this fixed-length UTF-8 type; writes
/// longer than the capacity are rejected, never truncated.
pub const STRING_ATTR_CAPACITY: usize = 64;

/// Geometry and default metadata for a new recording.
///
/// The sample dataset is chunked `(nchannels, block_size)` and grows along
/// the sample axis in whole `block_size` increments, up to `max_samples`.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatConfig {
    /// Fixed channel extent of the sample dataset.
    pub nchannels: usize,
    /// Samples per chunk and per growth increment.
    pub block_size: u32,
    /// Maximum sample extent the dataset may grow to.
    pub max_samples: usize,
    /// Acquisition sample rate in Hz.
    pub sample_rate: f32,
    /// `bin-file-type` attribute value.
    pub file_type: i16,
    /// `bin-file-version` attribute value.
    pub file_version: i16,
    /// Raw-to-physical scale factor.
    pub gain: f32,
    /// Raw-to-physical offset.
    pub offset: f32,
    /// Recording room label.
    pub room: String,
}

impl Default for FormatConfig {
    /// Legacy MEA format defaults: 64 channels at 10 kHz, 20000-sample
    /// blocks, signed 16-bit samples.
    fn default() -> Self {
        Self {
            nchannels: 64,
            block_size: 20_000,
            max_samples: 100_000_000,
            sample_rate: 10_000.0,
            file_type: 2,
            file_version: 1,
            gain: 1.0,
            offset: 0.0,
            room: "unknown".to_string(),
        }
    }
}

impl FormatConfig {
    /// Preset for high-density multielectrode-array recordings: 126
    /// channels at 20 kHz.
    #[must_use]
    pub fn multielectrode_array() -> Self {
        Self {
            nchannels: 126,
            sample_rate: 20_000.0,
            ..Self::default()
        }
    }

    /// Chunk shape of the sample dataset.
    #[must_use]
    pub fn chunk(&self) -> (usize, usize) {
        (self.nchannels, self.block_size as usize)
    }
}

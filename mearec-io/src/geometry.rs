//! Dataset geometry management.
//!
//! Owns the channel-by-sample extent policy of the sample dataset: the
//! fixed channel extent, the chunked layout along the sample axis, and the
//! extend-on-demand growth used by live recording. The dataset handle
//! itself is owned by the recording handle and passed in per call.

use hdf5::{Dataset, File};

use crate::{Error, Result};
use mearec_core::format::{FormatConfig, DATASET_NAME};

/// Extent and growth policy for the rank-2 sample dataset.
#[derive(Clone, Debug)]
pub struct DatasetGeometry {
    nchannels: usize,
    block_samples: usize,
    max_samples: usize,
}

impl DatasetGeometry {
    /// Creates the extendable sample dataset in a new container.
    ///
    /// The dataset starts with a sample extent of zero and may grow along
    /// the sample axis up to `config.max_samples`; the channel extent is
    /// fixed for the life of the file.
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be created.
    pub fn create(file: &File, config: &FormatConfig) -> Result<(Dataset, Self)> {
        let dataset = file
            .new_dataset::<i16>()
            .shape((config.nchannels, 0..=config.max_samples))
            .chunk(config.chunk())
            .create(DATASET_NAME)?;
        let geometry = Self {
            nchannels: config.nchannels,
            block_samples: config.block_size as usize,
            max_samples: config.max_samples,
        };
        Ok((dataset, geometry))
    }

    /// Derives geometry from an existing dataset and its stored block size.
    #[must_use]
    pub fn open(dataset: &Dataset, block_size: u32, max_samples: usize) -> Self {
        let shape = dataset.shape();
        Self {
            nchannels: shape[0],
            block_samples: block_size as usize,
            max_samples,
        }
    }

    /// Fixed channel extent.
    #[must_use]
    pub fn nchannels(&self) -> usize {
        self.nchannels
    }

    /// Current `(nchannels, nsamples)` extent as reported by the dataset.
    ///
    /// The dataset's own extent is authoritative; nothing here caches it.
    #[must_use]
    pub fn extent(&self, dataset: &Dataset) -> (usize, usize) {
        let shape = dataset.shape();
        (shape[0], shape[1])
    }

    /// Grows the sample extent so that `required` samples fit.
    ///
    /// Growth happens in whole block increments so repeated small appends
    /// amortize the cost of resizing; the extent never shrinks.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if `required` is past the
    /// maximum sample extent, or an HDF5 error if the resize fails.
    pub fn ensure_capacity(&self, dataset: &Dataset, required: usize) -> Result<()> {
        let (_, current) = self.extent(dataset);
        if required <= current {
            return Ok(());
        }
        if required > self.max_samples {
            return Err(Error::CapacityExceeded {
                requested: required,
                max: self.max_samples,
            });
        }
        let grown = (required.div_ceil(self.block_samples) * self.block_samples)
            .min(self.max_samples);
        dataset.resize((self.nchannels, grown))?;
        Ok(())
    }

    /// Sets the sample extent to an exact length.
    ///
    /// Used when finalizing or declaring the length of a non-live
    /// recording, rather than growing incrementally.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if `nsamples` is past the
    /// maximum sample extent, or an HDF5 error if the resize fails.
    pub fn set_length(&self, dataset: &Dataset, nsamples: usize) -> Result<()> {
        if nsamples > self.max_samples {
            return Err(Error::CapacityExceeded {
                requested: nsamples,
                max: self.max_samples,
            });
        }
        dataset.resize((self.nchannels, nsamples))?;
        Ok(())
    }
}

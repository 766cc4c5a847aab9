//! Electrode-array recordings.
//!
//! High-density array recordings carry, alongside the sample matrix, a
//! fixed-shape electrode configuration record: one structured row per
//! channel describing the electrode's physical position, grid index,
//! label, and connected channel. The record lives in its own dataset and
//! is independent of the sample extent.
//!
//! [`ArrayRecording`] composes a plain [`Recording`] with that record;
//! there is no storage subclassing involved.

use std::path::Path;

use hdf5::{Dataset, H5Type};
use ndarray::ArrayView1;

use crate::{Error, Recording, Result};
use mearec_core::format::{FormatConfig, CONFIGURATION_DATASET_NAME};

/// One electrode configuration row.
#[derive(H5Type, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Electrode {
    /// Physical x position on the array, in micrometers.
    pub xpos: u32,
    /// Physical y position on the array, in micrometers.
    pub ypos: u32,
    /// Grid x index.
    pub x: u16,
    /// Grid y index.
    pub y: u16,
    /// Electrode label.
    pub label: u8,
    /// Index of the acquisition channel this electrode is connected to.
    pub channel: u32,
}

/// A recording from a multielectrode array, with its electrode
/// configuration record.
pub struct ArrayRecording {
    recording: Recording,
    config_dataset: Dataset,
    electrodes: Vec<Electrode>,
}

impl ArrayRecording {
    /// Creates a new array recording.
    ///
    /// The configuration dataset is created with one default row per
    /// channel; the producer fills it in via
    /// [`ArrayRecording::set_configuration`].
    ///
    /// # Errors
    /// Same failure modes as [`Recording::create`], plus an HDF5 error if
    /// the configuration dataset cannot be created.
    pub fn create<P: AsRef<Path>>(path: P, config: &FormatConfig) -> Result<Self> {
        let recording = Recording::create(path, config)?;
        let config_dataset = recording
            .container()
            .new_dataset::<Electrode>()
            .shape((config.nchannels,))
            .create(CONFIGURATION_DATASET_NAME)?;
        let electrodes = vec![Electrode::default(); config.nchannels];
        config_dataset.write(ArrayView1::from(electrodes.as_slice()))?;
        Ok(Self {
            recording,
            config_dataset,
            electrodes,
        })
    }

    /// Opens an existing array recording read-only and loads its
    /// configuration record.
    ///
    /// # Errors
    /// Same failure modes as [`Recording::open`], plus [`Error::Open`] if
    /// the configuration dataset is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let recording = Recording::open(path)?;
        let config_dataset = recording
            .container()
            .dataset(CONFIGURATION_DATASET_NAME)
            .map_err(|err| Error::Open {
                path: recording.filename().to_path_buf(),
                reason: format!("missing `{CONFIGURATION_DATASET_NAME}` dataset: {err}"),
            })?;
        let electrodes = config_dataset.read_raw::<Electrode>()?;
        Ok(Self {
            recording,
            config_dataset,
            electrodes,
        })
    }

    /// The underlying recording.
    #[must_use]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// The underlying recording, mutably.
    pub fn recording_mut(&mut self) -> &mut Recording {
        &mut self.recording
    }

    /// The electrode configuration rows, in channel order.
    #[must_use]
    pub fn electrodes(&self) -> &[Electrode] {
        &self.electrodes
    }

    /// Physical x positions of all electrodes.
    #[must_use]
    pub fn xpos(&self) -> Vec<u32> {
        self.electrodes.iter().map(|e| e.xpos).collect()
    }

    /// Physical y positions of all electrodes.
    #[must_use]
    pub fn ypos(&self) -> Vec<u32> {
        self.electrodes.iter().map(|e| e.ypos).collect()
    }

    /// Grid x indices of all electrodes.
    #[must_use]
    pub fn x(&self) -> Vec<u16> {
        self.electrodes.iter().map(|e| e.x).collect()
    }

    /// Grid y indices of all electrodes.
    #[must_use]
    pub fn y(&self) -> Vec<u16> {
        self.electrodes.iter().map(|e| e.y).collect()
    }

    /// Labels of all electrodes.
    #[must_use]
    pub fn labels(&self) -> Vec<u8> {
        self.electrodes.iter().map(|e| e.label).collect()
    }

    /// Connected-channel indices of all electrodes.
    #[must_use]
    pub fn channels(&self) -> Vec<u32> {
        self.electrodes.iter().map(|e| e.channel).collect()
    }

    /// Replaces the electrode configuration record.
    ///
    /// The record is fixed-shape: `electrodes` must have exactly one row
    /// per channel.
    ///
    /// # Errors
    /// Returns [`Error::ReadOnly`] on a read-only handle,
    /// [`Error::ConfigurationMismatch`] on a wrong row count, or an HDF5
    /// error if the write fails.
    pub fn set_configuration(&mut self, electrodes: &[Electrode]) -> Result<()> {
        if self.recording.mode() == crate::Mode::ReadOnly {
            return Err(Error::ReadOnly);
        }
        let expected = self.recording.nchannels();
        if electrodes.len() != expected {
            return Err(Error::ConfigurationMismatch {
                expected,
                actual: electrodes.len(),
            });
        }
        self.config_dataset
            .write(ArrayView1::from(electrodes))?;
        self.electrodes = electrodes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_config() -> FormatConfig {
        FormatConfig {
            nchannels: 3,
            block_size: 100,
            max_samples: 1_000,
            ..FormatConfig::multielectrode_array()
        }
    }

    fn electrodes() -> Vec<Electrode> {
        (0..3u32)
            .map(|i| Electrode {
                xpos: i * 18,
                ypos: i * 20,
                x: u16::try_from(i).unwrap(),
                y: u16::try_from(i * 2).unwrap(),
                label: b'a' + u8::try_from(i).unwrap(),
                channel: i,
            })
            .collect()
    }

    #[test]
    fn test_configuration_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("array.h5");
        {
            let mut recording = ArrayRecording::create(&path, &small_config()).unwrap();
            recording.set_configuration(&electrodes()).unwrap();
        }

        let recording = ArrayRecording::open(&path).unwrap();
        assert_eq!(recording.electrodes(), electrodes().as_slice());
        assert_eq!(recording.xpos(), vec![0, 18, 36]);
        assert_eq!(recording.labels(), vec![b'a', b'b', b'c']);
        assert_eq!(recording.recording().nchannels(), 3);
    }

    #[test]
    fn test_configuration_row_count_enforced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("array.h5");
        let mut recording = ArrayRecording::create(&path, &small_config()).unwrap();

        let short = electrodes()[..2].to_vec();
        let err = recording.set_configuration(&short).unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigurationMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_configuration_write_on_read_only_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("array.h5");
        drop(ArrayRecording::create(&path, &small_config()).unwrap());

        let mut recording = ArrayRecording::open(&path).unwrap();
        let err = recording.set_configuration(&electrodes()).unwrap_err();
        assert!(matches!(err, Error::ReadOnly));
    }
}

//! Recording handle: container lifecycle and the read/write/query façade.

use std::path::{Path, PathBuf};

use hdf5::{Dataset, File};
use ndarray::{Array2, ArrayView2};
use std::ops::Range;

use crate::geometry::DatasetGeometry;
use crate::{attrs, hyperslab, Error, Result};
use mearec_core::format::{FormatConfig, DATASET_NAME};
use mearec_core::{range, to_physical};

/// Attribute names fixed by the on-disk format.
pub(crate) mod attr {
    pub const IS_LIVE: &str = "is-live";
    pub const LAST_VALID_SAMPLE: &str = "last-valid-sample";
    pub const FILE_TYPE: &str = "bin-file-type";
    pub const FILE_VERSION: &str = "bin-file-version";
    pub const SAMPLE_RATE: &str = "sample-rate";
    pub const BLOCK_SIZE: &str = "block-size";
    pub const GAIN: &str = "gain";
    pub const OFFSET: &str = "offset";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const ROOM: &str = "room";
}

/// Access mode of an open recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Playback/analysis consumer; never mutates the container.
    ReadOnly,
    /// Recording producer; owns the container's write side.
    Writable,
}

/// In-memory mirror of every declared attribute.
///
/// The mirror is fully populated at open time; a missing attribute is a
/// fatal open failure, so accessors can be trusted unconditionally.
#[derive(Clone, Debug)]
struct Metadata {
    live: bool,
    last_valid_sample: u64,
    file_type: i16,
    file_version: i16,
    sample_rate: f32,
    block_size: u32,
    gain: f32,
    offset: f32,
    date: String,
    time: String,
    room: String,
}

impl Metadata {
    fn from_config(config: &FormatConfig) -> Self {
        let now = chrono::Local::now();
        Self {
            live: false,
            last_valid_sample: 0,
            file_type: config.file_type,
            file_version: config.file_version,
            sample_rate: config.sample_rate,
            block_size: config.block_size,
            gain: config.gain,
            offset: config.offset,
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            room: config.room.clone(),
        }
    }

    fn load(file: &File, dataset: &Dataset) -> Result<Self> {
        Ok(Self {
            live: attrs::read_scalar::<u8>(file, attr::IS_LIVE)? != 0,
            last_valid_sample: attrs::read_scalar(file, attr::LAST_VALID_SAMPLE)?,
            file_type: attrs::read_scalar(dataset, attr::FILE_TYPE)?,
            file_version: attrs::read_scalar(dataset, attr::FILE_VERSION)?,
            sample_rate: attrs::read_scalar(dataset, attr::SAMPLE_RATE)?,
            block_size: attrs::read_scalar(dataset, attr::BLOCK_SIZE)?,
            gain: attrs::read_scalar(dataset, attr::GAIN)?,
            offset: attrs::read_scalar(dataset, attr::OFFSET)?,
            date: attrs::read_string(dataset, attr::DATE)?,
            time: attrs::read_string(dataset, attr::TIME)?,
            room: attrs::read_string(dataset, attr::ROOM)?,
        })
    }
}

/// A single MEA recording and the HDF5 container it is stored in.
///
/// The handle exclusively owns the container, the dataset geometry, and
/// the attribute mirror. Metadata setters persist immediately; there is
/// no deferred or batched write. On teardown a writable handle persists
/// the full mirror once more and flushes, logging rather than propagating
/// close-time errors; a read-only handle never writes.
#[derive(Debug)]
pub struct Recording {
    path: PathBuf,
    file: File,
    dataset: Dataset,
    geometry: DatasetGeometry,
    mode: Mode,
    meta: Metadata,
}

impl Recording {
    /// Creates a new recording, truncating any prior file at `path`.
    ///
    /// The handle is writable; this path is reserved for the producer
    /// role that originates a recording. The dataset starts empty and
    /// every attribute is written with its configured default before the
    /// handle is returned.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the container cannot be created, or an
    /// attribute error if the defaults cannot be persisted.
    pub fn create<P: AsRef<Path>>(path: P, config: &FormatConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|err| Error::Open {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        let (dataset, geometry) = DatasetGeometry::create(&file, config)?;
        let recording = Self {
            path,
            file,
            dataset,
            geometry,
            mode: Mode::Writable,
            meta: Metadata::from_config(config),
        };
        recording.write_all_attributes()?;
        Ok(recording)
    }

    /// Opens an existing recording read-only.
    ///
    /// Every declared attribute is loaded into the in-memory mirror; a
    /// missing or unreadable attribute fails the open, since silently
    /// defaulted metadata (a zeroed gain, say) would misinterpret the
    /// physical units of every sample downstream.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the path is not a valid container, or
    /// [`Error::AttributeAccess`] if any declared attribute is absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|err| Error::Open {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        let dataset = file.dataset(DATASET_NAME).map_err(|err| Error::Open {
            path: path.clone(),
            reason: format!("missing `{DATASET_NAME}` dataset: {err}"),
        })?;
        let meta = Metadata::load(&file, &dataset)?;
        let extent = dataset.shape()[1];
        let geometry = DatasetGeometry::open(
            &dataset,
            meta.block_size,
            FormatConfig::default().max_samples.max(extent),
        );
        Ok(Self {
            path,
            file,
            dataset,
            geometry,
            mode: Mode::ReadOnly,
            meta,
        })
    }

    /// Path of the container file.
    #[must_use]
    pub fn filename(&self) -> &Path {
        &self.path
    }

    /// Access mode of this handle.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Recording length in seconds, derived from the dataset's own sample
    /// extent divided by the sample rate; never stored independently.
    #[must_use]
    pub fn length(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let nsamples = self.nsamples() as f64;
        nsamples / f64::from(self.meta.sample_rate)
    }

    /// Current sample extent, as reported by the dataset itself.
    #[must_use]
    pub fn nsamples(&self) -> usize {
        self.dataset.shape()[1]
    }

    /// Fixed channel extent.
    #[must_use]
    pub fn nchannels(&self) -> usize {
        self.geometry.nchannels()
    }

    /// `bin-file-type` attribute.
    #[must_use]
    pub fn file_type(&self) -> i16 {
        self.meta.file_type
    }

    /// `bin-file-version` attribute.
    #[must_use]
    pub fn file_version(&self) -> i16 {
        self.meta.file_version
    }

    /// Whether the recording is currently being produced live.
    #[must_use]
    pub fn live(&self) -> bool {
        self.meta.live
    }

    /// Index one past the last sample committed by the producer.
    #[must_use]
    pub fn last_valid_sample(&self) -> u64 {
        self.meta.last_valid_sample
    }

    /// Samples per acquisition block and growth increment.
    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.meta.block_size
    }

    /// Acquisition sample rate in Hz.
    #[must_use]
    pub fn sample_rate(&self) -> f32 {
        self.meta.sample_rate
    }

    /// Raw-to-physical scale factor.
    #[must_use]
    pub fn gain(&self) -> f32 {
        self.meta.gain
    }

    /// Raw-to-physical offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.meta.offset
    }

    /// Recording date string.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.meta.date
    }

    /// Recording time-of-day string.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.meta.time
    }

    /// Recording room label.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.meta.room
    }

    /// Reads a rectangular channel/sample region of raw samples.
    ///
    /// # Errors
    /// Fails with a range error before any I/O on an invalid window, or
    /// an HDF5 error if the transfer fails.
    pub fn read(&self, channels: Range<usize>, samples: Range<usize>) -> Result<Array2<i16>> {
        hyperslab::read_range(&self.dataset, channels, samples)
    }

    /// Reads a rectangular region and scales it to physical units via the
    /// file's gain and offset.
    ///
    /// # Errors
    /// Same failure modes as [`Recording::read`].
    pub fn read_physical(
        &self,
        channels: Range<usize>,
        samples: Range<usize>,
    ) -> Result<Array2<f64>> {
        let raw = self.read(channels, samples)?;
        Ok(to_physical(raw.view(), self.meta.gain, self.meta.offset))
    }

    /// Reads an explicit ordered channel set of raw samples; output rows
    /// follow the caller-given channel order.
    ///
    /// # Errors
    /// Fails with a range error before any I/O on an invalid window or
    /// out-of-bounds channel index, or an HDF5 error if the transfer
    /// fails.
    pub fn read_channel_set(
        &self,
        channels: &[usize],
        samples: Range<usize>,
    ) -> Result<Array2<i16>> {
        hyperslab::read_channel_set(&self.dataset, channels, samples)
    }

    /// Reads an explicit ordered channel set scaled to physical units.
    ///
    /// # Errors
    /// Same failure modes as [`Recording::read_channel_set`].
    pub fn read_channel_set_physical(
        &self,
        channels: &[usize],
        samples: Range<usize>,
    ) -> Result<Array2<f64>> {
        let raw = self.read_channel_set(channels, samples)?;
        Ok(to_physical(raw.view(), self.meta.gain, self.meta.offset))
    }

    /// Appends or overwrites a full-width sample block over
    /// `start..end`, growing the dataset first if needed.
    ///
    /// The write is flushed before returning, so concurrently opened
    /// read-only handles re-querying the extent observe it.
    ///
    /// # Errors
    /// Returns [`Error::ReadOnly`] on a read-only handle, a range/shape
    /// error on an invalid window, [`Error::CapacityExceeded`] past the
    /// maximum extent, or an HDF5 error if the transfer fails.
    pub fn write(&mut self, start: usize, end: usize, block: ArrayView2<'_, i16>) -> Result<()> {
        if self.mode == Mode::ReadOnly {
            return Err(Error::ReadOnly);
        }
        range::sample_count(start, end)?;
        self.geometry.ensure_capacity(&self.dataset, end)?;
        hyperslab::write_range(&self.dataset, start..end, block)?;
        self.file.flush()?;
        Ok(())
    }

    /// Declares the recording length in seconds, setting the sample
    /// extent to exactly `seconds * sample_rate`.
    ///
    /// Used when finalizing a non-live recording instead of growing
    /// incrementally. On a read-only handle this never mutates the
    /// on-disk extent.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] past the maximum extent, or an
    /// HDF5 error if the resize fails.
    pub fn set_length(&mut self, seconds: f64) -> Result<()> {
        if self.read_only("set_length") {
            return Ok(());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nsamples = (seconds * f64::from(self.meta.sample_rate)).round() as usize;
        self.geometry.set_length(&self.dataset, nsamples)
    }

    /// Forces buffered writes out to the container.
    ///
    /// Carries no atomicity guarantee across attribute writes; a crash
    /// between two attribute writes can leave them mutually inconsistent.
    ///
    /// # Errors
    /// Returns an HDF5 error if the flush fails.
    pub fn flush(&self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    /// Marks the recording as live or finished.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_live(&mut self, live: bool) -> Result<()> {
        if self.read_only(attr::IS_LIVE) {
            return Ok(());
        }
        attrs::write_scalar(&self.file, attr::IS_LIVE, &u8::from(live))?;
        self.meta.live = live;
        Ok(())
    }

    /// Records the index one past the last committed sample.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_last_valid_sample(&mut self, sample: u64) -> Result<()> {
        if self.read_only(attr::LAST_VALID_SAMPLE) {
            return Ok(());
        }
        attrs::write_scalar(&self.file, attr::LAST_VALID_SAMPLE, &sample)?;
        self.meta.last_valid_sample = sample;
        Ok(())
    }

    /// Sets the `bin-file-type` attribute.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_file_type(&mut self, file_type: i16) -> Result<()> {
        if self.read_only(attr::FILE_TYPE) {
            return Ok(());
        }
        attrs::write_scalar(&self.dataset, attr::FILE_TYPE, &file_type)?;
        self.meta.file_type = file_type;
        Ok(())
    }

    /// Sets the `bin-file-version` attribute.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_file_version(&mut self, version: i16) -> Result<()> {
        if self.read_only(attr::FILE_VERSION) {
            return Ok(());
        }
        attrs::write_scalar(&self.dataset, attr::FILE_VERSION, &version)?;
        self.meta.file_version = version;
        Ok(())
    }

    /// Sets the sample rate in Hz.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_sample_rate(&mut self, sample_rate: f32) -> Result<()> {
        if self.read_only(attr::SAMPLE_RATE) {
            return Ok(());
        }
        attrs::write_scalar(&self.dataset, attr::SAMPLE_RATE, &sample_rate)?;
        self.meta.sample_rate = sample_rate;
        Ok(())
    }

    /// Sets the acquisition block size in samples.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_block_size(&mut self, block_size: u32) -> Result<()> {
        if self.read_only(attr::BLOCK_SIZE) {
            return Ok(());
        }
        attrs::write_scalar(&self.dataset, attr::BLOCK_SIZE, &block_size)?;
        self.meta.block_size = block_size;
        Ok(())
    }

    /// Sets the raw-to-physical scale factor.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_gain(&mut self, gain: f32) -> Result<()> {
        if self.read_only(attr::GAIN) {
            return Ok(());
        }
        attrs::write_scalar(&self.dataset, attr::GAIN, &gain)?;
        self.meta.gain = gain;
        Ok(())
    }

    /// Sets the raw-to-physical offset.
    ///
    /// # Errors
    /// Returns an attribute error if the value cannot be persisted.
    pub fn set_offset(&mut self, offset: f32) -> Result<()> {
        if self.read_only(attr::OFFSET) {
            return Ok(());
        }
        attrs::write_scalar(&self.dataset, attr::OFFSET, &offset)?;
        self.meta.offset = offset;
        Ok(())
    }

    /// Sets the recording date string.
    ///
    /// # Errors
    /// Returns [`Error::StringTooLong`] past the declared capacity, or an
    /// attribute error if the value cannot be persisted.
    pub fn set_date(&mut self, date: &str) -> Result<()> {
        if self.read_only(attr::DATE) {
            return Ok(());
        }
        attrs::write_string(&self.dataset, attr::DATE, date)?;
        self.meta.date = date.to_string();
        Ok(())
    }

    /// Sets the recording time-of-day string.
    ///
    /// # Errors
    /// Returns [`Error::StringTooLong`] past the declared capacity, or an
    /// attribute error if the value cannot be persisted.
    pub fn set_time(&mut self, time: &str) -> Result<()> {
        if self.read_only(attr::TIME) {
            return Ok(());
        }
        attrs::write_string(&self.dataset, attr::TIME, time)?;
        self.meta.time = time.to_string();
        Ok(())
    }

    /// Sets the recording room label.
    ///
    /// # Errors
    /// Returns [`Error::StringTooLong`] past the declared capacity, or an
    /// attribute error if the value cannot be persisted.
    pub fn set_room(&mut self, room: &str) -> Result<()> {
        if self.read_only(attr::ROOM) {
            return Ok(());
        }
        attrs::write_string(&self.dataset, attr::ROOM, room)?;
        self.meta.room = room.to_string();
        Ok(())
    }

    /// Container handle, for components composed around this recording.
    pub(crate) fn container(&self) -> &File {
        &self.file
    }

    /// Metadata setters are no-ops on a read-only handle.
    fn read_only(&self, what: &str) -> bool {
        if self.mode == Mode::ReadOnly {
            log::warn!(
                "ignoring {what} update on read-only recording {}",
                self.path.display()
            );
            return true;
        }
        false
    }

    /// Persists the full attribute mirror.
    ///
    /// Covers attributes that may have been mutated without an immediate
    /// on-disk write; called at creation and again on teardown.
    fn write_all_attributes(&self) -> Result<()> {
        attrs::write_scalar(&self.file, attr::IS_LIVE, &u8::from(self.meta.live))?;
        attrs::write_scalar(
            &self.file,
            attr::LAST_VALID_SAMPLE,
            &self.meta.last_valid_sample,
        )?;
        attrs::write_scalar(&self.dataset, attr::FILE_TYPE, &self.meta.file_type)?;
        attrs::write_scalar(&self.dataset, attr::FILE_VERSION, &self.meta.file_version)?;
        attrs::write_scalar(&self.dataset, attr::SAMPLE_RATE, &self.meta.sample_rate)?;
        attrs::write_scalar(&self.dataset, attr::BLOCK_SIZE, &self.meta.block_size)?;
        attrs::write_scalar(&self.dataset, attr::GAIN, &self.meta.gain)?;
        attrs::write_scalar(&self.dataset, attr::OFFSET, &self.meta.offset)?;
        attrs::write_string(&self.dataset, attr::DATE, &self.meta.date)?;
        attrs::write_string(&self.dataset, attr::TIME, &self.meta.time)?;
        attrs::write_string(&self.dataset, attr::ROOM, &self.meta.room)?;
        Ok(())
    }
}

impl Drop for Recording {
    fn drop(&mut self) {
        if self.mode != Mode::Writable {
            return;
        }
        if let Err(err) = self.write_all_attributes() {
            log::error!(
                "failed to persist attributes for {}: {err}",
                self.path.display()
            );
        }
        if let Err(err) = self.file.flush() {
            log::error!("failed to flush {}: {err}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array;
    use tempfile::tempdir;

    fn small_config() -> FormatConfig {
        FormatConfig {
            nchannels: 4,
            block_size: 100,
            max_samples: 10_000,
            sample_rate: 20_000.0,
            gain: 0.01,
            offset: 0.0,
            ..FormatConfig::default()
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn ramp(nchannels: usize, nsamples: usize, base: i16) -> Array2<i16> {
        Array::from_shape_fn((nchannels, nsamples), |(c, s)| {
            base + (c * 100 + s) as i16
        })
    }

    #[test]
    fn test_create_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rec.h5");
        let recording = Recording::create(&path, &small_config()).unwrap();

        assert_eq!(recording.mode(), Mode::Writable);
        assert_eq!(recording.nchannels(), 4);
        assert_eq!(recording.nsamples(), 0);
        assert!(!recording.live());
        assert_eq!(recording.file_type(), 2);
        assert_eq!(recording.room(), "unknown");
        assert!((recording.gain() - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn test_setters_visible_immediately_and_after_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rec.h5");
        {
            let mut recording = Recording::create(&path, &small_config()).unwrap();
            recording.set_gain(0.5).unwrap();
            recording.set_offset(-1.25).unwrap();
            recording.set_room("rig B").unwrap();
            recording.set_live(true).unwrap();
            recording.set_last_valid_sample(42).unwrap();
            recording.set_file_type(3).unwrap();
            recording.set_file_version(2).unwrap();
            recording.set_sample_rate(25_000.0).unwrap();
            recording.set_block_size(200).unwrap();

            assert!((recording.gain() - 0.5).abs() < f32::EPSILON);
            assert_eq!(recording.room(), "rig B");
            assert!(recording.live());
            assert_eq!(recording.file_type(), 3);
            assert_eq!(recording.file_version(), 2);
            assert!((recording.sample_rate() - 25_000.0).abs() < f32::EPSILON);
            assert_eq!(recording.block_size(), 200);
        }
        let recording = Recording::open(&path).unwrap();
        assert!((recording.gain() - 0.5).abs() < f32::EPSILON);
        assert!((recording.offset() + 1.25).abs() < f32::EPSILON);
        assert_eq!(recording.room(), "rig B");
        assert!(recording.live());
        assert_eq!(recording.last_valid_sample(), 42);
        assert_eq!(recording.file_type(), 3);
        assert_eq!(recording.file_version(), 2);
        assert!((recording.sample_rate() - 25_000.0).abs() < f32::EPSILON);
        assert_eq!(recording.block_size(), 200);
    }

    #[test]
    fn test_read_only_setters_leave_disk_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rec.h5");
        drop(Recording::create(&path, &small_config()).unwrap());
        let before = std::fs::read(&path).unwrap();

        {
            let mut recording = Recording::open(&path).unwrap();
            recording.set_gain(5.0).unwrap();
            recording.set_room("elsewhere").unwrap();
            recording.set_length(1.0).unwrap();
            // The mirror is untouched too.
            assert!((recording.gain() - 0.01).abs() < f32::EPSILON);
        }

        let after = std::fs::read(&path).unwrap();
        assert_eq!(before, after);
        let recording = Recording::open(&path).unwrap();
        assert!((recording.gain() - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn test_data_write_on_read_only_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rec.h5");
        drop(Recording::create(&path, &small_config()).unwrap());

        let mut recording = Recording::open(&path).unwrap();
        let block = ramp(4, 100, 0);
        let err = recording.write(0, 100, block.view()).unwrap_err();
        assert!(matches!(err, Error::ReadOnly));
    }

    #[test]
    fn test_three_block_append_and_scaled_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rec.h5");
        let blocks = [ramp(4, 100, 0), ramp(4, 100, 1000), ramp(4, 100, 2000)];
        {
            let mut recording = Recording::create(&path, &small_config()).unwrap();
            for (i, block) in blocks.iter().enumerate() {
                recording.write(i * 100, (i + 1) * 100, block.view()).unwrap();
            }
            assert_eq!(recording.nsamples(), 300);
        }

        let recording = Recording::open(&path).unwrap();
        assert_eq!(recording.nsamples(), 300);
        assert!((recording.length() - 300.0 / 20_000.0).abs() < 1e-9);

        let all = recording.read(0..4, 0..300).unwrap();
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(all.slice(ndarray::s![.., i * 100..(i + 1) * 100]), *block);
        }

        let physical = recording.read_physical(0..4, 0..300).unwrap();
        let gain = f64::from(recording.gain());
        for (raw, phys) in all.iter().zip(physical.iter()) {
            assert!((phys - f64::from(*raw) * gain).abs() < 1e-12);
        }
    }

    #[test]
    fn test_open_missing_attribute_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bare.h5");
        {
            // A container with a data dataset but no attributes.
            let file = hdf5::File::create(&path).unwrap();
            DatasetGeometry::create(&file, &small_config()).unwrap();
        }
        let err = Recording::open(&path).unwrap_err();
        assert!(matches!(err, Error::AttributeAccess { .. }));
    }

    #[test]
    fn test_open_invalid_container_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-hdf5.h5");
        std::fs::write(&path, b"definitely not an HDF5 file").unwrap();
        let err = Recording::open(&path).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn test_set_length_declares_extent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rec.h5");
        let mut recording = Recording::create(&path, &small_config()).unwrap();
        recording.set_length(0.25).unwrap();
        assert_eq!(recording.nsamples(), 5_000);
        assert!((recording.length() - 0.25).abs() < 1e-9);
    }
}

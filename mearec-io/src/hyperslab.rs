//! Hyperslab I/O engine.
//!
//! Translates a logical selection (a contiguous channel range plus a
//! contiguous sample range, or an explicit list of channel indices plus a
//! contiguous sample range) into a paired selection over the on-disk
//! dataset and an in-memory buffer, then performs the transfer. Buffers
//! are channel-major (`[channels][samples]`), matching the dataset layout,
//! and always carry the container's native signed 16-bit sample type in
//! both directions.
//!
//! The engine never grows the dataset: capacity is the recording handle's
//! responsibility, via the geometry manager, before a write is issued.

use std::ops::Range;

use hdf5::{Dataset, Selection};
use ndarray::{s, Array1, Array2, ArrayView2};

use crate::Result;
use mearec_core::range;

/// Reads a rectangular channel/sample region into a fresh buffer.
///
/// The returned buffer has shape `[channels.len()][samples.len()]`.
///
/// # Errors
/// Fails with a range error before any I/O if the sample window is empty
/// or inverted, the channel window is inverted, or the channel window
/// reaches past the dataset's channel extent.
pub fn read_range(
    dataset: &Dataset,
    channels: Range<usize>,
    samples: Range<usize>,
) -> Result<Array2<i16>> {
    let nchannels = dataset.shape()[0];
    let nreq_channels = range::channel_count(channels.start, channels.end, nchannels)?;
    let nreq_samples = range::sample_count(samples.start, samples.end)?;
    if nreq_channels == 0 {
        return Ok(Array2::zeros((0, nreq_samples)));
    }
    let block: Array2<i16> = dataset.read_slice(s![channels, samples])?;
    Ok(block)
}

/// Reads an explicit, ordered set of channels over a contiguous sample
/// range.
///
/// The channel indices need not be contiguous or sorted; the output
/// buffer's row order follows the caller-given ordering, not the on-disk
/// channel order. The on-disk selection is the coordinate list of every
/// `(channel, sample)` pair, channel-major, matching the buffer layout.
///
/// # Errors
/// Fails with a range error before any I/O if the sample window is
/// invalid or any channel index is out of bounds.
pub fn read_channel_set(
    dataset: &Dataset,
    channels: &[usize],
    samples: Range<usize>,
) -> Result<Array2<i16>> {
    let nchannels = dataset.shape()[0];
    let nreq_samples = range::sample_count(samples.start, samples.end)?;
    range::check_channel_set(channels, nchannels)?;
    if channels.is_empty() {
        return Ok(Array2::zeros((0, nreq_samples)));
    }

    let mut coords = Array2::<usize>::zeros((channels.len() * nreq_samples, 2));
    for (row, &channel) in channels.iter().enumerate() {
        for (column, sample) in samples.clone().enumerate() {
            let point = row * nreq_samples + column;
            coords[[point, 0]] = channel;
            coords[[point, 1]] = sample;
        }
    }

    let flat: Array1<i16> = dataset.read_slice(Selection::Points(coords))?;
    let block = Array2::from_shape_vec((channels.len(), nreq_samples), flat.to_vec())
        .map_err(|_| mearec_core::Error::ShapeMismatch {
            expected: (channels.len(), nreq_samples),
            actual: (1, flat.len()),
        })?;
    Ok(block)
}

/// Writes a full-width sample block over a contiguous sample range.
///
/// Acquisition delivers full-width blocks, so writes always cover every
/// channel; `block` must be shaped `[nchannels][samples.len()]`.
///
/// # Errors
/// Fails with a range or shape error before any I/O if the sample window
/// is invalid or the block shape does not match the selection.
pub fn write_range(
    dataset: &Dataset,
    samples: Range<usize>,
    block: ArrayView2<'_, i16>,
) -> Result<()> {
    let nchannels = dataset.shape()[0];
    let nreq_samples = range::sample_count(samples.start, samples.end)?;
    range::check_block_shape((nchannels, nreq_samples), block.dim())?;
    dataset.write_slice(block, s![.., samples])?;
    Ok(())
}

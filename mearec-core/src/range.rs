//! Selection-range validation.
//!
//! Every read and write selection is validated here before any container
//! I/O is attempted. A sample window must be non-empty; a channel window
//! may be empty but must not be inverted.

use crate::{Error, Result};

/// Validates a sample window and returns its length.
///
/// # Errors
/// Returns [`Error::InvalidSampleRange`] if `end <= start`.
pub fn sample_count(start: usize, end: usize) -> Result<usize> {
    if end <= start {
        return Err(Error::InvalidSampleRange { start, end });
    }
    Ok(end - start)
}

/// Validates a channel window against the channel extent and returns its
/// length.
///
/// # Errors
/// Returns [`Error::InvalidChannelRange`] if `end < start`, or
/// [`Error::ChannelOutOfBounds`] if the window reaches past `nchannels`.
pub fn channel_count(start: usize, end: usize, nchannels: usize) -> Result<usize> {
    if end < start {
        return Err(Error::InvalidChannelRange { start, end });
    }
    if end > nchannels {
        return Err(Error::ChannelOutOfBounds {
            channel: end - 1,
            nchannels,
        });
    }
    Ok(end - start)
}

/// Validates an explicit channel-index set against the channel extent.
///
/// The set's ordering is the caller's row ordering and is preserved by the
/// I/O engine; it need not be sorted or contiguous.
///
/// # Errors
/// Returns [`Error::ChannelOutOfBounds`] for the first out-of-range index.
pub fn check_channel_set(channels: &[usize], nchannels: usize) -> Result<()> {
    for &channel in channels {
        if channel >= nchannels {
            return Err(Error::ChannelOutOfBounds { channel, nchannels });
        }
    }
    Ok(())
}

/// Validates that a buffer's shape matches the requested selection.
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] if the shapes differ.
pub fn check_block_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected != actual {
        return Err(Error::ShapeMismatch { expected, actual });
    }
    Ok(())
}

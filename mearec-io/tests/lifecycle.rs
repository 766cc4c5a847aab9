//! End-to-end recording lifecycle tests: produce a live recording block
//! by block, finalize it, and replay it through a read-only handle.

use mearec_core::FormatConfig;
use mearec_io::{Mode, Recording};
use ndarray::{s, Array, Array2};
use tempfile::tempdir;

fn config() -> FormatConfig {
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
fn block(base: i16) -> Array2<i16> {
    Array::from_shape_fn((4, 100), |(c, s)| base + (c * 100 + s) as i16)
}

#[test]
fn test_live_recording_lifecycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.h5");
    let blocks = [block(0), block(5_000), block(-5_000)];

    {
        let mut recording = Recording::create(&path, &config()).unwrap();
        recording.set_live(true).unwrap();
        recording.set_date("2026-08-24").unwrap();
        recording.set_time("14:03:55").unwrap();
        recording.set_room("rig A").unwrap();

        for (i, block) in blocks.iter().enumerate() {
            let start = i * 100;
            recording.write(start, start + 100, block.view()).unwrap();
            recording
                .set_last_valid_sample((start + 100) as u64)
                .unwrap();
        }
        recording.set_live(false).unwrap();
        assert_eq!(recording.nsamples(), 300);
    }

    let recording = Recording::open(&path).unwrap();
    assert_eq!(recording.mode(), Mode::ReadOnly);
    assert_eq!(recording.nchannels(), 4);
    assert_eq!(recording.nsamples(), 300);
    assert_eq!(recording.last_valid_sample(), 300);
    assert!(!recording.live());
    assert_eq!(recording.date(), "2026-08-24");
    assert_eq!(recording.time(), "14:03:55");
    assert_eq!(recording.room(), "rig A");
    assert!((recording.length() - 0.015).abs() < 1e-9);

    // The concatenation of the three appended blocks, exactly.
    let all = recording.read(0..4, 0..300).unwrap();
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(all.slice(s![.., i * 100..(i + 1) * 100]), *block);
    }

    // Repeating the read yields identical bytes.
    let again = recording.read(0..4, 0..300).unwrap();
    assert_eq!(all, again);

    // Scaled read reproduces raw * gain, at the stored f32 gain's precision.
    let physical = recording.read_physical(0..4, 0..300).unwrap();
    let gain = f64::from(recording.gain());
    for (raw, phys) in all.iter().zip(physical.iter()) {
        assert!((phys - f64::from(*raw) * gain).abs() < 1e-12);
    }
}

#[test]
fn test_channel_subset_replay() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("subset.h5");
    let data = block(0);
    {
        let mut recording = Recording::create(&path, &config()).unwrap();
        recording.write(0, 100, data.view()).unwrap();
    }

    let recording = Recording::open(&path).unwrap();

    // Arbitrary electrode subset, caller ordering preserved.
    let subset = recording.read_channel_set(&[2, 0], 40..60).unwrap();
    assert_eq!(subset.dim(), (2, 20));
    assert_eq!(subset.row(0), data.slice(s![2, 40..60]));
    assert_eq!(subset.row(1), data.slice(s![0, 40..60]));

    let physical = recording
        .read_channel_set_physical(&[2, 0], 40..60)
        .unwrap();
    let gain = f64::from(recording.gain());
    for (raw, phys) in subset.iter().zip(physical.iter()) {
        assert!((phys - f64::from(*raw) * gain).abs() < 1e-12);
    }
}

#[test]
fn test_overwrite_region_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overwrite.h5");
    let first = block(0);
    let second = block(1);

    let mut recording = Recording::create(&path, &config()).unwrap();
    recording.write(0, 100, first.view()).unwrap();
    recording.write(0, 100, second.view()).unwrap();
    recording.flush().unwrap();

    let read = recording.read(0..4, 0..100).unwrap();
    assert_eq!(read, second);
    assert_eq!(recording.read(0..4, 0..100).unwrap(), second);
}

#[test]
fn test_capacity_error_is_fatal_for_that_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("capacity.h5");
    let config = FormatConfig {
        max_samples: 200,
        ..config()
    };

    let mut recording = Recording::create(&path, &config).unwrap();
    recording.write(0, 100, block(0).view()).unwrap();

    let err = recording.write(150, 250, block(1).view()).unwrap_err();
    assert!(matches!(
        err,
        mearec_io::Error::CapacityExceeded {
            requested: 250,
            max: 200
        }
    ));
    // The failed write left the committed data intact.
    assert_eq!(recording.read(0..4, 0..100).unwrap(), block(0));
}

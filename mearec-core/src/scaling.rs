//! Raw-to-physical unit scaling.

use ndarray::{Array2, ArrayView2};

/// Converts a raw sample buffer to physical units.
///
/// Applies the per-file affine transform `raw * gain + offset` elementwise.
/// Writes never apply the inverse: the producer is responsible for
/// delivering raw ADC counts.
#[must_use]
pub fn to_physical(raw: ArrayView2<'_, i16>, gain: f32, offset: f32) -> Array2<f64> {
    let gain = f64::from(gain);
    let offset = f64::from(offset);
    raw.mapv(|sample| f64::from(sample) * gain + offset)
}

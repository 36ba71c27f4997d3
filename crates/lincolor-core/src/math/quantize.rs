//! Float ↔ 8-bit channel quantization
//!
//! Encoding splits [0, 1) into 256 equal buckets and folds everything at or
//! above 1.0 into the top one. Decoding divides by 255, so every byte survives
//! a decode → encode round trip unchanged.

/// Number of buckets the unit interval is divided into
const BUCKETS: f64 = 256.0;

/// Largest channel value
const CHANNEL_MAX: u8 = u8::MAX;

/// Quantize a nominal [0, 1] value to a byte
///
/// Computes `floor(x * 256)`, saturating to 255. Negative and NaN inputs map to 0.
#[inline]
pub fn unit_to_u8(x: f64) -> u8 {
    let scaled = x * BUCKETS;
    if scaled >= BUCKETS {
        CHANNEL_MAX
    } else if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        // In [0, 256): truncation cannot overflow
        scaled as u8
    }
}

/// Expand a byte to the [0, 1] range (`b / 255`)
#[inline]
pub fn u8_to_unit(b: u8) -> f64 {
    f64::from(b) / f64::from(CHANNEL_MAX)
}

//! sRGB transfer function
//!
//! The IEC 61966-2-1 piecewise curve: a linear toe near black and a 2.4 power
//! segment above it. Both directions extrapolate outside [0, 1]; callers that
//! need display-safe values clamp afterwards.

/// Encoded value at which decode switches from the linear toe to the power segment
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value at which encode switches from the linear toe to the power segment
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear toe
pub const LINEAR_SLOPE: f64 = 12.92;

/// Scale of the power segment
pub const POWER_SCALE: f64 = 1.055;

/// Offset of the power segment
pub const POWER_OFFSET: f64 = 0.055;

/// Exponent of the power segment
pub const GAMMA: f64 = 2.4;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value to linear light. No clamping is applied.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= DECODE_THRESHOLD {
        encoded / LINEAR_SLOPE
    } else {
        ((encoded + POWER_OFFSET) / POWER_SCALE).powf(GAMMA)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light to an sRGB-encoded value. No clamping is applied.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= ENCODE_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        POWER_SCALE * linear.powf(1.0 / GAMMA) - POWER_OFFSET
    }
}

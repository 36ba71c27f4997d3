//! SIMD-dispatched buffer conversions
//!
//! These functions process whole pixel buffers. Length checks happen up front
//! in the public wrappers; the inner loops are multiversioned.

use multiversion::multiversion;

use crate::color::{LinearRgba, SrgbaU8};
use crate::composite::over;
use crate::error::{Error, Result};

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::BufferSize { expected, actual })
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn decode_rgba8(src: &[SrgbaU8], dst: &mut [LinearRgba]) {
    for (inp, out) in src.iter().zip(dst.iter_mut()) {
        *out = inp.to_linear();
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn encode_rgba8(src: &[LinearRgba], dst: &mut [SrgbaU8]) {
    for (inp, out) in src.iter().zip(dst.iter_mut()) {
        *out = inp.to_srgb().to_u8();
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn composite_over(above: &[LinearRgba], below: &mut [LinearRgba]) {
    for (top, bottom) in above.iter().zip(below.iter_mut()) {
        *bottom = over(top, bottom);
    }
}

/// Decode sRGBA8 pixels to linear RGBA
///
/// `dst` must have the same length as `src`.
pub fn srgba8_to_linear_batch(src: &[SrgbaU8], dst: &mut [LinearRgba]) -> Result<()> {
    check_len(src.len(), dst.len())?;
    decode_rgba8(src, dst);
    Ok(())
}

/// Encode linear RGBA pixels to sRGBA8 for display
///
/// Each channel is gamma-encoded, clamped and quantized.
pub fn linear_to_srgba8_batch(src: &[LinearRgba], dst: &mut [SrgbaU8]) -> Result<()> {
    check_len(src.len(), dst.len())?;
    encode_rgba8(src, dst);
    Ok(())
}

/// Composite each `above[i]` over `below[i]`, writing the result into `below`
pub fn over_batch(above: &[LinearRgba], below: &mut [LinearRgba]) -> Result<()> {
    check_len(above.len(), below.len())?;
    composite_over(above, below);
    Ok(())
}

/// Decode a raw interleaved RGBA8 byte buffer to linear RGBA
///
/// `src.len()` must be a multiple of 4 and `dst` must hold `src.len() / 4` pixels.
pub fn srgba8_bytes_to_linear(src: &[u8], dst: &mut [LinearRgba]) -> Result<()> {
    let pixels: &[SrgbaU8] = bytemuck::try_cast_slice(src).map_err(|e| {
        Error::PixelLayout(format!("{} bytes is not whole RGBA8 pixels ({e:?})", src.len()))
    })?;
    srgba8_to_linear_batch(pixels, dst)
}

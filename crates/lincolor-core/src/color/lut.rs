//! Decode table for 8-bit sRGB channels
//!
//! A byte has only 256 possible values, so decoding through a table avoids a
//! `powf` per channel. Entries are produced by the same scalar functions as
//! the float path and are therefore bit-identical to it.

use std::sync::LazyLock;

use crate::math::{srgb_gamma_decode, u8_to_unit};

static SRGB_U8_TO_LINEAR: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut table = [0.0; 256];
    for (b, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
        *entry = srgb_gamma_decode(u8_to_unit(b));
    }
    table
});

/// Decode an 8-bit sRGB channel to linear light
#[inline]
pub fn srgb_u8_to_linear(b: u8) -> f64 {
    SRGB_U8_TO_LINEAR[usize::from(b)]
}

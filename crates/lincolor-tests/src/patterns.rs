//! Test pattern generation
//!
//! RGBA8 pixel patterns and seeded random float colors.

use lincolor_core::{LinearRgb, LinearRgba, SrgbaU8};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Opaque gray ramp 0-255, repeated
    Grayscale,
    /// RGB color cube corners (8 colors), opaque
    ColorCube,
    /// White with alpha ramping 0-255
    AlphaRamp,
    /// Random pixels with seed
    Random(u64),
    /// All transparent black
    Transparent,
    /// All opaque white
    White,
}

/// Generate a test pattern of `count` RGBA8 pixels
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<SrgbaU8> {
    match pattern {
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = (i % 256) as u8;
                SrgbaU8::new(v, v, v, 255)
            })
            .collect(),
        TestPattern::ColorCube => (0..count)
            .map(|i| {
                let bit = |n: usize| if i & (1 << n) != 0 { 255 } else { 0 };
                SrgbaU8::new(bit(0), bit(1), bit(2), 255)
            })
            .collect(),
        TestPattern::AlphaRamp => (0..count)
            .map(|i| SrgbaU8::new(255, 255, 255, (i % 256) as u8))
            .collect(),
        TestPattern::Random(seed) => {
            let mut data = vec![0u8; count * 4];
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.fill_bytes(&mut data);
            data.chunks_exact(4)
                .map(|px| SrgbaU8::new(px[0], px[1], px[2], px[3]))
                .collect()
        }
        TestPattern::Transparent => vec![SrgbaU8::TRANSPARENT; count],
        TestPattern::White => vec![SrgbaU8::WHITE; count],
    }
}

/// Seeded uniform samples from `[low, high)`
pub fn random_values(seed: u64, count: usize, low: f64, high: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(low..high)).collect()
}

/// Seeded linear RGB colors with components in `[low, high)`
pub fn random_linear_rgb(seed: u64, count: usize, low: f64, high: f64) -> Vec<LinearRgb> {
    random_values(seed, count * 3, low, high)
        .chunks_exact(3)
        .map(|c| LinearRgb::new(c[0], c[1], c[2]))
        .collect()
}

/// Seeded linear RGBA colors with every component in `[0, 1)`
pub fn random_linear_rgba(seed: u64, count: usize) -> Vec<LinearRgba> {
    random_values(seed, count * 4, 0.0, 1.0)
        .chunks_exact(4)
        .map(|c| LinearRgba::new(c[0], c[1], c[2], c[3]))
        .collect()
}

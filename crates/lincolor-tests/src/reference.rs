//! Reference implementation wrappers
//!
//! The `palette` crate as an independent implementation of the same
//! conversions, exposed through plain arrays.
//!
//! Matrix conversions go through `IntoColorUnclamped`: palette's plain
//! `IntoColor` clamps into the bounded `LinSrgb` range, which would hide
//! out-of-gamut results.

use palette::blend::Compose;
use palette::white_point::D65;
use palette::convert::IntoColorUnclamped;
use palette::{LinSrgb, LinSrgba, Srgb, Xyz};

/// sRGB → linear via palette
pub fn srgb_to_linear(rgb: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_linear();
    [linear.red, linear.green, linear.blue]
}

/// Linear → sRGB via palette
pub fn linear_to_srgb(rgb: [f64; 3]) -> [f64; 3] {
    let encoded = Srgb::<f64>::from_linear(LinSrgb::new(rgb[0], rgb[1], rgb[2]));
    [encoded.red, encoded.green, encoded.blue]
}

/// Linear sRGB → XYZ (D65) via palette
pub fn linear_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let xyz: Xyz<D65, f64> = LinSrgb::new(rgb[0], rgb[1], rgb[2]).into_color_unclamped();
    [xyz.x, xyz.y, xyz.z]
}

/// XYZ (D65) → linear sRGB via palette
pub fn xyz_to_linear_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> =
        Xyz::<D65, f64>::new(xyz[0], xyz[1], xyz[2]).into_color_unclamped();
    [linear.red, linear.green, linear.blue]
}

/// Straight-alpha source-over via palette
pub fn over(above: [f64; 4], below: [f64; 4]) -> [f64; 4] {
    let above = LinSrgba::new(above[0], above[1], above[2], above[3]);
    let below = LinSrgba::new(below[0], below[1], below[2], below[3]);
    let result = above.over(below);
    [
        result.color.red,
        result.color.green,
        result.color.blue,
        result.alpha,
    ]
}

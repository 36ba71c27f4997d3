//! Free-function conversion surface
//!
//! One named, one-directional function per conversion. Each forwards to the
//! corresponding method on the color types.

use crate::color::{
    LinearRgb, LinearRgbU8, LinearRgba, LinearRgbaU8, Srgb, SrgbU8, Srgba, SrgbaU8, Xyz,
};

pub use crate::composite::over;
pub use crate::math::{srgb_gamma_decode, srgb_gamma_encode, u8_to_unit, unit_to_u8};

/// CIE XYZ → linear sRGB, unclamped
#[inline]
pub fn xyz_to_linear_rgb(xyz: &Xyz) -> LinearRgb {
    xyz.to_linear_rgb()
}

/// Linear sRGB → CIE XYZ, unclamped
#[inline]
pub fn linear_rgb_to_xyz(rgb: &LinearRgb) -> Xyz {
    rgb.to_xyz()
}

/// CIE XYZ → sRGB, clamped to [0, 1]
#[inline]
pub fn xyz_to_srgb(xyz: &Xyz) -> Srgb {
    xyz.to_srgb()
}

/// sRGB → CIE XYZ
#[inline]
pub fn srgb_to_xyz(srgb: &Srgb) -> Xyz {
    srgb.to_xyz()
}

/// sRGB → linear, unclamped
#[inline]
pub fn srgb_to_linear(srgb: &Srgb) -> LinearRgb {
    srgb.to_linear()
}

/// sRGBA → linear RGBA, alpha decoded like a color channel, unclamped
#[inline]
pub fn srgba_to_linear(srgba: &Srgba) -> LinearRgba {
    srgba.to_linear()
}

/// Linear → sRGB, clamped to [0, 1]
#[inline]
pub fn linear_to_srgb(rgb: &LinearRgb) -> Srgb {
    rgb.to_srgb()
}

/// Linear RGBA → sRGBA, alpha encoded like a color channel, clamped to [0, 1]
#[inline]
pub fn linear_to_srgba(rgba: &LinearRgba) -> Srgba {
    rgba.to_srgb()
}

#[inline]
pub fn srgb_to_u8(c: &Srgb) -> SrgbU8 {
    c.to_u8()
}

#[inline]
pub fn srgba_to_u8(c: &Srgba) -> SrgbaU8 {
    c.to_u8()
}

#[inline]
pub fn linear_rgb_to_u8(c: &LinearRgb) -> LinearRgbU8 {
    c.to_u8()
}

#[inline]
pub fn linear_rgba_to_u8(c: &LinearRgba) -> LinearRgbaU8 {
    c.to_u8()
}

#[inline]
pub fn srgb_from_u8(c: &SrgbU8) -> Srgb {
    c.to_float()
}

#[inline]
pub fn srgba_from_u8(c: &SrgbaU8) -> Srgba {
    c.to_float()
}

#[inline]
pub fn linear_rgb_from_u8(c: &LinearRgbU8) -> LinearRgb {
    c.to_float()
}

#[inline]
pub fn linear_rgba_from_u8(c: &LinearRgbaU8) -> LinearRgba {
    c.to_float()
}

/// Unpack `0x__RRGGBB` (bits 24-31 ignored)
#[inline]
pub const fn srgb_u8_from_hex(hex: u32) -> SrgbU8 {
    SrgbU8::from_hex(hex)
}

/// Unpack `0xRRGGBBAA`
#[inline]
pub const fn srgba_u8_from_hex(hex: u32) -> SrgbaU8 {
    SrgbaU8::from_hex(hex)
}

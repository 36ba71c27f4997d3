//! 8-bit-per-channel colors
//!
//! Lossy byte encodings of the float color types, laid out `#[repr(C)]` so
//! pixel buffers can be reinterpreted with `bytemuck`.

use bytemuck::{Pod, Zeroable};

use super::linear::{LinearRgb, LinearRgba};
use super::lut::srgb_u8_to_linear;
use super::srgb::{Srgb, Srgba};
use crate::math::u8_to_unit;

/// sRGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct SrgbU8 {
    /// Red byte
    pub r: u8,
    /// Green byte
    pub g: u8,
    /// Blue byte
    pub b: u8,
}

impl SrgbU8 {
    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new 8-bit sRGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0x__RRGGBB`; bits 24-31 are ignored
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Pack into `0x00RRGGBB`
    #[inline]
    pub const fn to_hex(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Convert to an `[r, g, b]` array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Expand to float sRGB (`b / 255` per channel)
    #[inline]
    pub fn to_float(&self) -> Srgb {
        Srgb::new(u8_to_unit(self.r), u8_to_unit(self.g), u8_to_unit(self.b))
    }

    /// Expand and decode to linear light through the 256-entry table
    #[inline]
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::new(
            srgb_u8_to_linear(self.r),
            srgb_u8_to_linear(self.g),
            srgb_u8_to_linear(self.b),
        )
    }
}

impl From<[u8; 3]> for SrgbU8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// sRGB color with alpha, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct SrgbaU8 {
    /// Red byte
    pub r: u8,
    /// Green byte
    pub g: u8,
    /// Blue byte
    pub b: u8,
    /// Alpha byte
    pub a: u8,
}

impl SrgbaU8 {
    /// Opaque black
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a new 8-bit sRGBA color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack `0xRRGGBBAA`
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            (hex >> 24) as u8,
            (hex >> 16) as u8,
            (hex >> 8) as u8,
            hex as u8,
        )
    }

    /// Pack into `0xRRGGBBAA`
    #[inline]
    pub const fn to_hex(&self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Convert to an `[r, g, b, a]` array
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Expand to float sRGBA (`b / 255` per channel)
    #[inline]
    pub fn to_float(&self) -> Srgba {
        Srgba::new(
            u8_to_unit(self.r),
            u8_to_unit(self.g),
            u8_to_unit(self.b),
            u8_to_unit(self.a),
        )
    }

    /// Expand and decode all four channels to linear through the 256-entry table
    #[inline]
    pub fn to_linear(&self) -> LinearRgba {
        LinearRgba::new(
            srgb_u8_to_linear(self.r),
            srgb_u8_to_linear(self.g),
            srgb_u8_to_linear(self.b),
            srgb_u8_to_linear(self.a),
        )
    }
}

impl From<[u8; 4]> for SrgbaU8 {
    fn from(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// Linear RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct LinearRgbU8 {
    /// Red byte
    pub r: u8,
    /// Green byte
    pub g: u8,
    /// Blue byte
    pub b: u8,
}

impl LinearRgbU8 {
    /// Create a new 8-bit linear RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an `[r, g, b]` array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Expand to float linear RGB (`b / 255` per channel)
    #[inline]
    pub fn to_float(&self) -> LinearRgb {
        LinearRgb::new(u8_to_unit(self.r), u8_to_unit(self.g), u8_to_unit(self.b))
    }
}

impl From<[u8; 3]> for LinearRgbU8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Linear RGB color with alpha, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct LinearRgbaU8 {
    /// Red byte
    pub r: u8,
    /// Green byte
    pub g: u8,
    /// Blue byte
    pub b: u8,
    /// Alpha byte
    pub a: u8,
}

impl LinearRgbaU8 {
    /// Create a new 8-bit linear RGBA color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an `[r, g, b, a]` array
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Expand to float linear RGBA (`b / 255` per channel)
    #[inline]
    pub fn to_float(&self) -> LinearRgba {
        LinearRgba::new(
            u8_to_unit(self.r),
            u8_to_unit(self.g),
            u8_to_unit(self.b),
            u8_to_unit(self.a),
        )
    }
}

impl From<[u8; 4]> for LinearRgbaU8 {
    fn from(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

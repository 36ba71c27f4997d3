//! Gamma-encoded sRGB colors
//!
//! These are the values images store and displays expect. Blending or
//! lighting math must convert to [`LinearRgb`]/[`LinearRgba`] first.

use super::linear::{LinearRgb, LinearRgba};
use super::quantized::{SrgbU8, SrgbaU8};
use super::xyz::Xyz;
use crate::math::{srgb_gamma_decode, unit_to_u8};

/// sRGB color, gamma-encoded, nominally in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Srgb {
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new sRGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from an `[r, g, b]` array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an `[r, g, b]` array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Decode to linear light
    ///
    /// No clamping: out-of-range input follows the extrapolated curve.
    #[inline]
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::new(
            srgb_gamma_decode(self.r),
            srgb_gamma_decode(self.g),
            srgb_gamma_decode(self.b),
        )
    }

    /// Convert to CIE XYZ via linear RGB
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        self.to_linear().to_xyz()
    }

    /// Quantize to 8 bits per channel
    #[inline]
    pub fn to_u8(&self) -> SrgbU8 {
        SrgbU8::new(unit_to_u8(self.r), unit_to_u8(self.g), unit_to_u8(self.b))
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_unit_range(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Check if approximately equal to another color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for Srgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Srgb> for [f64; 3] {
    fn from(c: Srgb) -> Self {
        c.to_array()
    }
}

/// sRGB color with alpha, gamma-encoded, nominally in [0, 1]
///
/// Alpha is carried as another encoded channel: conversions to and from
/// linear apply the transfer curve to it like any color channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgba {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
    /// Alpha component
    pub a: f64,
}

impl Srgba {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new sRGBA color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from an `[r, g, b, a]` array
    #[inline]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to an `[r, g, b, a]` array
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Decode all four channels to linear
    #[inline]
    pub fn to_linear(&self) -> LinearRgba {
        LinearRgba::new(
            srgb_gamma_decode(self.r),
            srgb_gamma_decode(self.g),
            srgb_gamma_decode(self.b),
            srgb_gamma_decode(self.a),
        )
    }

    /// Quantize to 8 bits per channel
    #[inline]
    pub fn to_u8(&self) -> SrgbaU8 {
        SrgbaU8::new(
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        )
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_unit_range(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Check if approximately equal to another color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

impl From<[f64; 4]> for Srgba {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Srgba> for [f64; 4] {
    fn from(c: Srgba) -> Self {
        c.to_array()
    }
}

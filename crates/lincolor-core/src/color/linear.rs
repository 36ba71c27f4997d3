//! Linear-light RGB colors
//!
//! Values proportional to emitted light. This is the space for blending,
//! lighting and the XYZ matrix transform. Components may leave [0, 1]
//! transiently; encoding back to sRGB clamps.

use super::quantized::{LinearRgbU8, LinearRgbaU8};
use super::srgb::{Srgb, Srgba};
use super::xyz::Xyz;
use crate::composite;
use crate::math::{LINEAR_SRGB_TO_XYZ, srgb_gamma_encode, unit_to_u8};

/// Gamma-encode one channel and clamp the result to [0, 1]
#[inline]
fn encode_clamped(linear: f64) -> f64 {
    srgb_gamma_encode(linear).clamp(0.0, 1.0)
}

/// Linear RGB color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl LinearRgb {
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new linear RGB color
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

    /// Gamma-encode to sRGB, clamping every channel to [0, 1]
    #[inline]
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            encode_clamped(self.r),
            encode_clamped(self.g),
            encode_clamped(self.b),
        )
    }

    /// Convert to CIE XYZ (unclamped)
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from_array(LINEAR_SRGB_TO_XYZ.multiply_vec(self.to_array()))
    }

    /// Quantize to 8 bits per channel
    #[inline]
    pub fn to_u8(&self) -> LinearRgbU8 {
        LinearRgbU8::new(unit_to_u8(self.r), unit_to_u8(self.g), unit_to_u8(self.b))
    }

    /// Relative luminance (the Y of the color in XYZ)
    #[inline]
    pub fn luminance(&self) -> f64 {
        let y = LINEAR_SRGB_TO_XYZ[1];
        y[0] * self.r + y[1] * self.g + y[2] * self.b
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

impl From<[f64; 3]> for LinearRgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LinearRgb> for [f64; 3] {
    fn from(c: LinearRgb) -> Self {
        c.to_array()
    }
}

/// Linear RGB color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRgba {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
    /// Alpha component
    pub a: f64,
}

impl LinearRgba {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new linear RGBA color
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

    /// Gamma-encode all four channels to sRGBA, clamping each to [0, 1]
    #[inline]
    pub fn to_srgb(&self) -> Srgba {
        Srgba::new(
            encode_clamped(self.r),
            encode_clamped(self.g),
            encode_clamped(self.b),
            encode_clamped(self.a),
        )
    }

    /// Quantize to 8 bits per channel
    #[inline]
    pub fn to_u8(&self) -> LinearRgbaU8 {
        LinearRgbaU8::new(
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        )
    }

    /// Composite `self` over `below` (Porter-Duff source-over)
    ///
    /// See [`composite::over`].
    #[inline]
    pub fn over(&self, below: &Self) -> Self {
        composite::over(self, below)
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

impl From<[f64; 4]> for LinearRgba {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LinearRgba> for [f64; 4] {
    fn from(c: LinearRgba) -> Self {
        c.to_array()
    }
}

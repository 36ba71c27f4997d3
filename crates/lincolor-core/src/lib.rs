//! # lincolor - sRGB / linear / XYZ color conversions
//!
//! Pure, stateless conversions between the color representations a renderer
//! deals with:
//!
//! - **sRGB** (gamma-encoded) ↔ **linear RGB**, with and without alpha
//! - **linear RGB** ↔ **CIE XYZ** (D65)
//! - float (0.0-1.0) ↔ **8-bit** channels
//! - **Porter-Duff over** compositing in linear light
//!
//! Each color kind is a distinct type, so gamma-encoded and linear values
//! cannot be mixed by accident. All conversions are total; only the string
//! parsing and buffer entry points return [`Result`].
//!
//! ## Quick Start
//!
//! ```
//! use lincolor_core::{LinearRgba, SrgbaU8};
//!
//! // Decode texels, blend in linear light, encode for display
//! let above = SrgbaU8::from_hex(0xFF000080).to_float().to_linear();
//! let below = SrgbaU8::WHITE.to_float().to_linear();
//! let out: SrgbaU8 = above.over(&below).to_srgb().to_u8();
//! assert_eq!(out.a, 255);
//!
//! // Both layers transparent composites to transparent black
//! assert_eq!(
//!     LinearRgba::TRANSPARENT.over(&LinearRgba::TRANSPARENT),
//!     LinearRgba::TRANSPARENT
//! );
//! ```

pub mod color;
pub mod composite;
pub mod convert;
pub mod error;
pub mod math;
pub mod simd;

pub use color::{
    LinearRgb, LinearRgbU8, LinearRgba, LinearRgbaU8, Srgb, SrgbU8, Srgba, SrgbaU8, Xyz,
};
pub use composite::over;
pub use error::{Error, Result};
pub use math::{LINEAR_SRGB_TO_XYZ, Matrix3x3, XYZ_TO_LINEAR_SRGB};
pub use simd::{
    linear_to_srgba8_batch, over_batch, srgba8_bytes_to_linear, srgba8_to_linear_batch,
};

/// Version of lincolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

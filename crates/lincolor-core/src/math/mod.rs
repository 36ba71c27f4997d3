//! Mathematical operations behind the color conversions
//!
//! - sRGB transfer function (gamma encode/decode)
//! - 3x3 matrix operations for linear RGB ↔ XYZ
//! - 8-bit channel quantization

pub mod gamma;
pub mod matrix;
pub mod quantize;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{LINEAR_SRGB_TO_XYZ, Matrix3x3, XYZ_TO_LINEAR_SRGB};
pub use quantize::{u8_to_unit, unit_to_u8};

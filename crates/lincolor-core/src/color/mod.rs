//! Color types and their conversions
//!
//! Every color kind is its own type. Gamma-encoded and linear values never
//! convert implicitly; each hop is a named method:
//! - sRGB (gamma-encoded), with and without alpha
//! - Linear RGB, with and without alpha
//! - 8-bit encodings of both
//! - CIE XYZ

mod hex;
pub mod linear;
pub mod lut;
pub mod quantized;
pub mod srgb;
pub mod xyz;

pub use linear::{LinearRgb, LinearRgba};
pub use quantized::{LinearRgbU8, LinearRgbaU8, SrgbU8, SrgbaU8};
pub use srgb::{Srgb, Srgba};
pub use xyz::Xyz;

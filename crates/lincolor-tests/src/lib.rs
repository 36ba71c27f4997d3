//! # lincolor-tests
//!
//! Parity and property testing for lincolor.
//!
//! This crate provides:
//! - Parity tests comparing lincolor against the `palette` crate
//! - Exhaustive 8-bit sweeps (every byte, every RGB8 triple)
//! - Seeded random property tests for round trips and compositing
//! - Error statistics with JSON reports
//!
//! ## Test Categories
//!
//! 1. **Transfer function**: sRGB encode/decode against the reference
//! 2. **XYZ**: matrix transform and its inverse
//! 3. **Quantization**: float ↔ 8-bit round trips and saturation
//! 4. **Compositing**: Porter-Duff over, including the zero-alpha case
//! 5. **Parsing**: hex literals and strings

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_values};
pub use patterns::{TestPattern, generate_pattern};

//! CIE XYZ Color Space
//!
//! Device-independent tristimulus values, reached from linear sRGB through a
//! fixed D65 matrix. Values are unconstrained.

use super::linear::LinearRgb;
use super::srgb::Srgb;
use crate::math::XYZ_TO_LINEAR_SRGB;

/// CIE 1931 XYZ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// D65 reference white (Y = 1)
    pub const D65_WHITE: Self = Self::new(0.95047, 1.0, 1.08883);

    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Convert to linear sRGB (unclamped; out-of-gamut values pass through)
    #[inline]
    pub fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::from_array(XYZ_TO_LINEAR_SRGB.multiply_vec(self.to_array()))
    }

    /// Convert to gamma-encoded sRGB, clamped to [0, 1]
    #[inline]
    pub fn to_srgb(&self) -> Srgb {
        self.to_linear_rgb().to_srgb()
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let xyz = Xyz::from_array(arr);
        assert_eq!(xyz.to_array(), arr);

        let xyz2: Xyz = arr.into();
        assert_eq!(xyz, xyz2);
        assert_eq!(xyz.luminance(), 0.2);
    }

    #[test]
    fn test_matrix_applied() {
        let rgb = Xyz::new(1.0, 0.0, 0.0).to_linear_rgb();
        assert_eq!(rgb, LinearRgb::new(3.2406255, -0.9689307, 0.0557101));
    }

    #[test]
    fn test_linear_roundtrip() {
        let samples = [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.2, 0.5, 0.9],
            [-0.3, 1.7, 0.4],
            [12.0, -4.0, 0.001],
        ];
        for s in samples {
            let c = LinearRgb::from_array(s);
            let roundtrip = c.to_xyz().to_linear_rgb();
            assert!(roundtrip.approx_eq(&c, 1e-9), "roundtrip failed for {:?}", s);

            let xyz = Xyz::from_array(s);
            let roundtrip = xyz.to_linear_rgb().to_xyz();
            assert!(roundtrip.approx_eq(&xyz, 1e-9), "roundtrip failed for {:?}", s);
        }
    }

    #[test]
    fn test_out_of_gamut_passes_through() {
        // Spectral-locus-ish XYZ lands outside sRGB
        let rgb = Xyz::new(0.1, 0.5, 0.05).to_linear_rgb();
        assert!(!rgb.is_in_unit_range());
    }

    #[test]
    fn test_d65_white() {
        let white = LinearRgb::WHITE.to_xyz();
        assert!(white.approx_eq(&Xyz::D65_WHITE, 1e-3));

        let srgb = Xyz::D65_WHITE.to_srgb();
        assert!(srgb.approx_eq(&Srgb::WHITE, 1e-3));
    }

    #[test]
    fn test_srgb_composition() {
        let c = Srgb::new(0.8, 0.4, 0.1);
        let via_linear = c.to_linear().to_xyz();
        assert_eq!(c.to_xyz(), via_linear);
        assert!(c.to_xyz().to_srgb().approx_eq(&c, 1e-9));
    }
}

//! Seeded random property tests for the float conversions

use lincolor_core::convert::{
    linear_rgb_to_xyz, linear_to_srgb, linear_to_srgba, srgb_to_linear, srgb_to_xyz,
    xyz_to_linear_rgb, xyz_to_srgb,
};
use lincolor_core::math::{srgb_gamma_decode, srgb_gamma_encode};
use lincolor_core::{LinearRgb, LinearRgba, Srgb, Xyz};
use lincolor_tests::patterns::{random_linear_rgb, random_values};

/// Round-trip bound that covers the curve breakpoint, where the two IEC
/// 61966-2-1 segments disagree by up to ~2e-7
const BREAKPOINT_TOLERANCE: f64 = 1e-6;

#[test]
fn test_gamma_roundtrip_random() {
    for v in random_values(1, 100_000, 0.0, 1.0) {
        let a = srgb_gamma_encode(srgb_gamma_decode(v));
        let b = srgb_gamma_decode(srgb_gamma_encode(v));
        assert!((a - v).abs() < BREAKPOINT_TOLERANCE, "encode(decode({v})) = {a}");
        assert!((b - v).abs() < BREAKPOINT_TOLERANCE, "decode(encode({v})) = {b}");
    }
}

#[test]
fn test_gamma_roundtrip_away_from_breakpoint() {
    for v in random_values(2, 100_000, 0.05, 1.0) {
        let a = srgb_gamma_encode(srgb_gamma_decode(v));
        let b = srgb_gamma_decode(srgb_gamma_encode(v));
        assert!((a - v).abs() < 1e-9, "encode(decode({v})) = {a}");
        assert!((b - v).abs() < 1e-9, "decode(encode({v})) = {b}");
    }
}

#[test]
fn test_xyz_roundtrip_random_wide_range() {
    for c in random_linear_rgb(3, 50_000, -2.0, 4.0) {
        let roundtrip = xyz_to_linear_rgb(&linear_rgb_to_xyz(&c));
        assert!(roundtrip.approx_eq(&c, 1e-9), "{c:?} -> {roundtrip:?}");
    }
}

#[test]
fn test_srgb_xyz_roundtrip_in_gamut() {
    for c in random_linear_rgb(4, 50_000, 0.0, 1.0) {
        let srgb = linear_to_srgb(&c);
        let roundtrip = xyz_to_srgb(&srgb_to_xyz(&srgb));
        assert!(roundtrip.approx_eq(&srgb, 1e-9), "{srgb:?} -> {roundtrip:?}");
    }
}

#[test]
fn test_encode_always_clamps() {
    for c in random_linear_rgb(5, 50_000, -10.0, 10.0) {
        let srgb = linear_to_srgb(&c);
        assert!(srgb.is_in_unit_range(), "{c:?} -> {srgb:?}");

        let rgba = linear_to_srgba(&LinearRgba::new(c.r, c.g, c.b, c.r - c.g));
        assert!(rgba.is_in_unit_range(), "{c:?} -> {rgba:?}");
    }
}

#[test]
fn test_clamped_channels_hit_the_bounds() {
    let srgb = linear_to_srgb(&LinearRgb::new(-0.01, 1.01, 50.0));
    assert_eq!(srgb, Srgb::new(0.0, 1.0, 1.0));
}

#[test]
fn test_decode_does_not_clamp() {
    for v in random_values(6, 10_000, 1.0001, 3.0) {
        let linear = srgb_to_linear(&Srgb::new(v, -v, 0.5));
        assert!(linear.r > 1.0);
        assert!(linear.g < 0.0);
    }
}

#[test]
fn test_xyz_out_of_gamut_is_unclamped() {
    // Pure X stimulus lies outside the sRGB gamut
    let rgb = xyz_to_linear_rgb(&Xyz::new(1.0, 0.0, 0.0));
    assert!(rgb.r > 1.0);
    assert!(rgb.g < 0.0);
}

#[test]
fn test_conversions_are_thread_safe() {
    let colors = random_linear_rgb(7, 1_000, 0.0, 1.0);
    let expected: Vec<Xyz> = colors.iter().map(linear_rgb_to_xyz).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let got: Vec<Xyz> = colors.iter().map(linear_rgb_to_xyz).collect();
                assert_eq!(got, expected);
            });
        }
    });
}

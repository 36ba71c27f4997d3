//! Alpha compositing
//!
//! Porter-Duff source-over on straight (non-premultiplied) linear RGBA.
//! Colors are premultiplied for the blend and divided back out afterwards.

use crate::color::LinearRgba;

/// Composite `above` over `below`
///
/// ```text
/// alpha_out = above.a + below.a * (1 - above.a)
/// color_out = (above.rgb * above.a + below.rgb * below.a * (1 - above.a)) / alpha_out
/// ```
///
/// When `alpha_out` is zero (both layers fully transparent) the result is
/// [`LinearRgba::TRANSPARENT`] rather than `0 / 0`.
#[inline]
pub fn over(above: &LinearRgba, below: &LinearRgba) -> LinearRgba {
    let below_weight = below.a * (1.0 - above.a);
    let alpha = above.a + below_weight;

    if alpha == 0.0 {
        return LinearRgba::TRANSPARENT;
    }

    let blend = |top: f64, bottom: f64| (top * above.a + bottom * below_weight) / alpha;

    LinearRgba::new(
        blend(above.r, below.r),
        blend(above.g, below.g),
        blend(above.b, below.b),
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_opaque_above_wins() {
        let red = LinearRgba::new(1.0, 0.0, 0.0, 1.0);
        for below in [
            LinearRgba::WHITE,
            LinearRgba::TRANSPARENT,
            LinearRgba::new(0.2, 0.7, 0.4, 0.5),
        ] {
            assert_eq!(over(&red, &below), red);
        }
    }

    #[test]
    fn test_transparent_above_keeps_below() {
        let below = LinearRgba::new(0.2, 0.7, 0.4, 0.5);
        let result = over(&LinearRgba::new(0.9, 0.9, 0.9, 0.0), &below);
        assert!(result.approx_eq(&below, EPSILON));
    }

    #[test]
    fn test_both_transparent() {
        let above = LinearRgba::new(0.3, 0.6, 0.9, 0.0);
        let below = LinearRgba::new(1.0, 0.5, 0.25, 0.0);
        let result = over(&above, &below);
        assert_eq!(result, LinearRgba::TRANSPARENT);
        assert!(!result.r.is_nan());
    }

    #[test]
    fn test_half_over_opaque() {
        let above = LinearRgba::new(1.0, 0.0, 0.0, 0.5);
        let below = LinearRgba::new(0.0, 0.0, 1.0, 1.0);
        let result = over(&above, &below);
        assert!(result.approx_eq(&LinearRgba::new(0.5, 0.0, 0.5, 1.0), EPSILON));
    }

    #[test]
    fn test_half_over_half() {
        let above = LinearRgba::new(1.0, 0.0, 0.0, 0.5);
        let below = LinearRgba::new(0.0, 1.0, 0.0, 0.5);
        let result = over(&above, &below);

        // alpha = 0.5 + 0.5 * 0.5
        assert!((result.a - 0.75).abs() < EPSILON);
        // red = 0.5 / 0.75, green = 0.25 / 0.75
        assert!((result.r - 2.0 / 3.0).abs() < EPSILON);
        assert!((result.g - 1.0 / 3.0).abs() < EPSILON);
        assert_eq!(result.b, 0.0);
    }

    #[test]
    fn test_same_color_is_preserved() {
        let c = LinearRgba::new(0.3, 0.4, 0.5, 0.4);
        let result = over(&c, &c);
        assert!((result.r - 0.3).abs() < EPSILON);
        assert!((result.g - 0.4).abs() < EPSILON);
        assert!((result.b - 0.5).abs() < EPSILON);
        assert!((result.a - 0.64).abs() < EPSILON);
    }

    #[test]
    fn test_method_form() {
        let above = LinearRgba::new(0.1, 0.2, 0.3, 0.6);
        let below = LinearRgba::new(0.9, 0.8, 0.7, 0.9);
        assert_eq!(above.over(&below), over(&above, &below));
    }
}

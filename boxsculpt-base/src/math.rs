//! Mathematical utilities and decisions.

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

mod aab;
pub use aab::*;
mod axis;
pub use axis::*;
mod coord;
pub use coord::*;
mod face;
pub use face::*;
mod grid;
pub use grid::*;
#[cfg(feature = "serde")]
mod serde_impls;

/// Snaps `value` to the nearest multiple of `step`.
///
/// Values exactly halfway between two multiples round away from zero.
///
/// ```
/// # extern crate boxsculpt_base as boxsculpt;
/// use boxsculpt::math::quantize;
///
/// assert_eq!(quantize(1.49, 1.0), 1.0);
/// assert_eq!(quantize(1.5, 1.0), 2.0);
/// assert_eq!(quantize(-0.5, 1.0), -1.0);
/// assert_eq!(quantize(0.8, 0.5), 1.0);
/// ```
#[inline]
pub fn quantize(value: FreeCoordinate, step: FreeCoordinate) -> FreeCoordinate {
    (value / step).round() * step
}

/// Applies [`quantize()`] to each component of a point.
#[inline]
pub fn quantize_point(point: FreePoint, step: FreeCoordinate) -> FreePoint {
    point.map(|c| quantize(c, step))
}

/// Applies [`quantize()`] to each component of a vector.
#[inline]
pub fn quantize_vector(vector: FreeVector, step: FreeCoordinate) -> FreeVector {
    vector.map(|c| quantize(c, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point3, vec3};
    use rstest::rstest;

    #[rstest]
    #[case(1.49, 1.0)]
    #[case(1.5, 2.0)]
    #[case(-0.5, -1.0)]
    #[case(-1.49, -1.0)]
    #[case(2.5, 3.0)]
    #[case(0.0, 0.0)]
    fn quantize_unit_step(#[case] input: FreeCoordinate, #[case] expected: FreeCoordinate) {
        assert_eq!(quantize(input, 1.0), expected);
    }

    #[test]
    fn quantize_other_steps() {
        assert_eq!(quantize(7.4, 5.0), 5.0);
        assert_eq!(quantize(7.5, 5.0), 10.0);
        assert_eq!(quantize(0.3, 0.25), 0.25);
    }

    #[test]
    fn quantize_componentwise() {
        assert_eq!(
            quantize_point(point3(4.2, 0.0, 6.1), 1.0),
            point3(4.0, 0.0, 6.0)
        );
        assert_eq!(
            quantize_vector(vec3(1.6, -0.2, -0.9), 1.0),
            vec3(2.0, 0.0, -1.0)
        );
    }
}

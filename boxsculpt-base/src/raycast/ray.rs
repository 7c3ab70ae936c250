/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::math::{FreeCoordinate, FreePoint, FreeVector};

/// A ray; a half-infinite line segment.
#[allow(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The sole endpoint of the ray.
    pub origin: FreePoint,

    /// The direction in which the ray extends infinitely.
    ///
    /// The length of this vector is the unit of the `t` distances reported by
    /// intersection tests. Rays produced from the screen have unit length.
    pub direction: FreeVector,
}

impl Ray {
    /// Constructs a [`Ray`] from convertible types (e.g. tuples or 3-element arrays).
    /// Other than the use of [`Into`], this is equivalent to a struct literal.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::euclid::{point3, vec3};
    /// use boxsculpt::raycast::Ray;
    ///
    /// assert_eq!(
    ///     Ray::new([1., 2., 3.], [4., 5., 6.]),
    ///     Ray {
    ///         origin: point3(1., 2., 3.),
    ///         direction: vec3(4., 5., 6.),
    ///     }
    /// );
    /// ```
    #[allow(clippy::missing_inline_in_public_items)] // is generic already
    pub fn new(origin: impl Into<FreePoint>, direction: impl Into<FreeVector>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// Returns the point at parameter `t` along the ray, `origin + direction * t`.
    #[must_use]
    #[inline]
    pub fn at(self, t: FreeCoordinate) -> FreePoint {
        self.origin + self.direction * t
    }

    /// Returns whether the ray can be used for intersection tests: its origin and
    /// direction are finite and its direction is not zero.
    #[inline]
    pub fn is_usable(&self) -> bool {
        let finite = |v: FreeVector| v.x.is_finite() && v.y.is_finite() && v.z.is_finite();
        finite(self.origin.to_vector())
            && finite(self.direction)
            && self.direction != FreeVector::zero()
    }

    /// Returns this ray with its direction scaled to unit length, or [`None`] if the
    /// ray is not [usable](Self::is_usable).
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Option<Self> {
        if !self.is_usable() {
            return None;
        }
        let length = self.direction.length();
        if length > 0.0 && length.is_finite() {
            Some(Self {
                origin: self.origin,
                direction: self.direction / length,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point3, vec3};

    #[test]
    fn at() {
        let ray = Ray::new([1., 2., 3.], [0., -2., 0.]);
        assert_eq!(ray.at(0.0), point3(1., 2., 3.));
        assert_eq!(ray.at(1.0), point3(1., 0., 3.));
    }

    #[test]
    fn usable() {
        assert!(Ray::new([0., 0., 0.], [0., 0., 1.]).is_usable());
        assert!(!Ray::new([0., 0., 0.], [0., 0., 0.]).is_usable());
        assert!(!Ray::new([0., f64::NAN, 0.], [0., 0., 1.]).is_usable());
        assert!(!Ray::new([0., 0., 0.], [f64::INFINITY, 0., 1.]).is_usable());
    }

    #[test]
    fn normalized() {
        assert_eq!(
            Ray::new([1., 1., 1.], [0., 3., 4.]).normalized(),
            Some(Ray::new([1., 1., 1.], [0., 0.6, 0.8]))
        );
        assert_eq!(Ray::new([1., 1., 1.], vec3(0., 0., 0.)).normalized(), None);
    }
}

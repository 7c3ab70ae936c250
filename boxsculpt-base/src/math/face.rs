//! Axis-aligned unit vectors: the [`Face6`] type.
//! This module is private but reexported by its parent.

use euclid::Vector3D;

use crate::math::{Axis, FreeCoordinate, FreeVector};

/// Identifies a face of a box, a wall of the grid, or an orthogonal unit vector.
///
/// A face is the combination of an [`Axis`] and a side of that axis; the side is
/// available as a number through [`Face6::signum()`].
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Face6 {
    /// Negative X; the face whose normal vector is `(-1, 0, 0)`.
    NX = 1,
    /// Negative Y; the face whose normal vector is `(0, -1, 0)`; downward.
    NY = 2,
    /// Negative Z; the face whose normal vector is `(0, 0, -1)`.
    NZ = 3,
    /// Positive X; the face whose normal vector is `(1, 0, 0)`.
    PX = 4,
    /// Positive Y; the face whose normal vector is `(0, 1, 0)`; upward.
    PY = 5,
    /// Positive Z; the face whose normal vector is `(0, 0, 1)`.
    PZ = 6,
}

impl Face6 {
    /// All the values of [`Face6`].
    pub const ALL: [Face6; 6] = [
        Face6::NX,
        Face6::NY,
        Face6::NZ,
        Face6::PX,
        Face6::PY,
        Face6::PZ,
    ];

    /// Returns the face on `axis` whose normal points in the positive direction if
    /// `positive` is true, and the negative direction otherwise.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::math::{Axis, Face6};
    ///
    /// assert_eq!(Face6::from_axis(Axis::Y, false), Face6::NY);
    /// assert_eq!(Face6::from_axis(Axis::Z, true), Face6::PZ);
    /// ```
    #[inline]
    pub const fn from_axis(axis: Axis, positive: bool) -> Self {
        match (axis, positive) {
            (Axis::X, false) => Self::NX,
            (Axis::Y, false) => Self::NY,
            (Axis::Z, false) => Self::NZ,
            (Axis::X, true) => Self::PX,
            (Axis::Y, true) => Self::PY,
            (Axis::Z, true) => Self::PZ,
        }
    }

    /// Returns which axis this face's normal vector is parallel to.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::NX | Self::PX => Axis::X,
            Self::NY | Self::PY => Axis::Y,
            Self::NZ | Self::PZ => Axis::Z,
        }
    }

    /// Returns whether this face is a “positive” face: one whose unit vector's nonzero
    /// coordinate is positive.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::math::Face6;
    ///
    /// assert_eq!(Face6::PX.is_positive(), true);
    /// assert_eq!(Face6::NX.is_positive(), false);
    /// ```
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PX | Self::PY | Self::PZ)
    }

    /// Returns whether this face is a negative face: one whose unit vector's nonzero
    /// coordinate is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::NX | Self::NY | Self::NZ)
    }

    /// Returns the side of the axis this face is on, as `-1.0` or `1.0`.
    #[inline]
    pub const fn signum(self) -> FreeCoordinate {
        if self.is_positive() { 1.0 } else { -1.0 }
    }

    /// Returns the opposite face (maps [`PX`](Self::PX) to [`NX`](Self::NX) and so on).
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Face6 {
        match self {
            Face6::NX => Face6::PX,
            Face6::NY => Face6::PY,
            Face6::NZ => Face6::PZ,
            Face6::PX => Face6::NX,
            Face6::PY => Face6::NY,
            Face6::PZ => Face6::NZ,
        }
    }

    /// Returns the unit vector normal to this face.
    #[inline]
    pub fn normal_vector(self) -> FreeVector {
        let mut v = Vector3D::zero();
        v[self.axis()] = self.signum();
        v
    }

    /// Returns whether a ray travelling along `direction` would strike this face from
    /// the front, that is, whether `direction` points the same way as the face's normal
    /// along its axis.
    ///
    /// This is the orientation test used for grid walls, which are seen from inside
    /// the grid: the far wall a ray is heading toward is the one it can hit.
    /// Zero components are never front-facing.
    #[inline]
    pub fn faces_toward(self, direction: FreeVector) -> bool {
        let component = direction[self.axis()];
        if self.is_positive() {
            component > 0.0
        } else {
            component < 0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::vec3;
    use exhaust::Exhaust as _;

    #[test]
    fn from_axis_round_trip() {
        for face in Face6::exhaust() {
            assert_eq!(Face6::from_axis(face.axis(), face.is_positive()), face);
        }
    }

    #[test]
    fn opposite_is_involution_on_same_axis() {
        for face in Face6::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.opposite().axis(), face.axis());
            assert_eq!(face.opposite().signum(), -face.signum());
        }
    }

    #[test]
    fn normal_vector() {
        assert_eq!(Face6::NX.normal_vector(), vec3(-1., 0., 0.));
        assert_eq!(Face6::PY.normal_vector(), vec3(0., 1., 0.));
        assert_eq!(Face6::PZ.normal_vector(), vec3(0., 0., 1.));
    }

    #[test]
    fn faces_toward() {
        let down = vec3(0.3, -1.0, 0.0);
        assert!(Face6::NY.faces_toward(down));
        assert!(!Face6::PY.faces_toward(down));
        assert!(Face6::PX.faces_toward(down));
        assert!(!Face6::NZ.faces_toward(down));
        assert!(!Face6::PZ.faces_toward(down));
    }
}

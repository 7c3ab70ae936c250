use core::fmt;

use euclid::Point3D;

use crate::math::{Axis, Face6, FreeCoordinate, FreePoint, FreeSize, FreeVector};

/// Axis-Aligned Box data type.
///
/// Each box has a most-negative corner and a most-positive corner, and every component
/// of the former is less than or equal to the corresponding component of the latter.
/// Zero-size boxes (on one axis or all of them) are permitted; they are what the editor
/// creates while a footprint is still being drawn.
#[derive(Copy, Clone, PartialEq)]
pub struct Aab {
    // TODO: Consider what to do about equality-but-not-equivalence of negative zero.
    lower_bounds: FreePoint,
    upper_bounds: FreePoint,
}

/// Error returned by [`Aab::try_from_lower_upper()`] when the corner points are
/// misordered or contain NaN.
#[derive(Clone, Copy, Debug, PartialEq, displaydoc::Display)]
#[displaydoc("invalid AAB points that are misordered or NaN: lower {lower:?} upper {upper:?}")]
pub struct InvalidAabError {
    lower: FreePoint,
    upper: FreePoint,
}

impl core::error::Error for InvalidAabError {}

impl Aab {
    /// The [`Aab`] of zero size at the origin.
    pub const ZERO: Aab = Aab {
        lower_bounds: Point3D::new(0., 0., 0.),
        upper_bounds: Point3D::new(0., 0., 0.),
    };

    /// Constructs an [`Aab`] from individual coordinates.
    #[inline]
    #[track_caller]
    pub fn new(
        lx: FreeCoordinate,
        hx: FreeCoordinate,
        ly: FreeCoordinate,
        hy: FreeCoordinate,
        lz: FreeCoordinate,
        hz: FreeCoordinate,
    ) -> Self {
        Self::from_lower_upper(Point3D::new(lx, ly, lz), Point3D::new(hx, hy, hz))
    }

    /// Constructs an [`Aab`] from most-negative and most-positive corner points.
    ///
    /// Panics if the points are not in the proper order or if they are NaN.
    #[inline]
    #[track_caller]
    pub fn from_lower_upper(
        lower_bounds: impl Into<FreePoint>,
        upper_bounds: impl Into<FreePoint>,
    ) -> Self {
        match Self::try_from_lower_upper(lower_bounds.into(), upper_bounds.into()) {
            Ok(aab) => aab,
            Err(e) => panic!("{e}"),
        }
    }

    /// Constructs an [`Aab`] from most-negative and most-positive corner points.
    ///
    /// Returns an error if the points are not in the proper order or if they are NaN.
    #[inline]
    pub fn try_from_lower_upper(
        lower_bounds: FreePoint,
        upper_bounds: FreePoint,
    ) -> Result<Self, InvalidAabError> {
        if lower_bounds.x <= upper_bounds.x
            && lower_bounds.y <= upper_bounds.y
            && lower_bounds.z <= upper_bounds.z
        {
            Ok(Self {
                lower_bounds,
                upper_bounds,
            })
        } else {
            Err(InvalidAabError {
                lower: lower_bounds,
                upper: upper_bounds,
            })
        }
    }

    /// Constructs the smallest [`Aab`] that has both of the given points as corners,
    /// in whichever order they are given.
    ///
    /// Panics if either point contains NaN.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::math::Aab;
    ///
    /// assert_eq!(
    ///     Aab::spanning([7.0, 0.0, 2.0].into(), [4.0, 0.0, 9.0].into()),
    ///     Aab::new(4.0, 7.0, 0.0, 0.0, 2.0, 9.0),
    /// );
    /// ```
    #[inline]
    #[track_caller]
    pub fn spanning(a: FreePoint, b: FreePoint) -> Self {
        Self::from_lower_upper(a.min(b), a.max(b))
    }

    /// The most negative corner of the box, as a [`Point3D`].
    #[inline]
    pub const fn lower_bounds_p(&self) -> FreePoint {
        self.lower_bounds
    }

    /// The most positive corner of the box, as a [`Point3D`].
    #[inline]
    pub const fn upper_bounds_p(&self) -> FreePoint {
        self.upper_bounds
    }

    /// Returns the position of the identified face of the box on the axis it is
    /// perpendicular to.
    ///
    /// Unlike a signed distance, this is the plain coordinate: the lower bound for
    /// negative faces and the upper bound for positive faces.
    #[inline]
    pub fn face_position(&self, face: Face6) -> FreeCoordinate {
        if face.is_positive() {
            self.upper_bounds[face.axis()]
        } else {
            self.lower_bounds[face.axis()]
        }
    }

    /// Returns a copy of this box with the identified face moved to `position`, or
    /// [`None`] if that would put the face on the wrong side of its opposite face.
    #[inline]
    #[must_use]
    pub fn with_face_at(self, face: Face6, position: FreeCoordinate) -> Option<Self> {
        let mut lower = self.lower_bounds;
        let mut upper = self.upper_bounds;
        if face.is_positive() {
            upper[face.axis()] = position;
        } else {
            lower[face.axis()] = position;
        }
        Self::try_from_lower_upper(lower, upper).ok()
    }

    /// Size of the box in each axis; equivalent to
    /// `self.upper_bounds() - self.lower_bounds()`.
    #[inline]
    pub fn size(&self) -> FreeSize {
        FreeSize::from(self.upper_bounds - self.lower_bounds)
    }

    /// The center of the enclosed volume.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::math::{Aab, FreePoint};
    ///
    /// let aab = Aab::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    /// assert_eq!(aab.center(), FreePoint::new(1.5, 3.5, 5.5));
    /// ```
    #[inline]
    pub fn center(&self) -> FreePoint {
        (self.lower_bounds + self.upper_bounds.to_vector()) * 0.5
    }

    /// The product of the box's extents.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::math::Aab;
    ///
    /// assert_eq!(Aab::new(0.0, 2.0, 0.0, 3.0, 0.0, 4.0).volume(), 24.0);
    /// ```
    #[inline]
    pub fn volume(&self) -> FreeCoordinate {
        let size = self.size();
        size.width * size.height * size.depth
    }

    /// The total area of the box's six faces.
    #[inline]
    pub fn surface_area(&self) -> FreeCoordinate {
        let size = self.size();
        2.0 * (size.width * size.height + size.width * size.depth + size.height * size.depth)
    }

    /// Returns whether this AAB, including the boundary, contains the point.
    #[inline]
    pub fn contains(&self, point: FreePoint) -> bool {
        for axis in Axis::ALL {
            if !(self.lower_bounds[axis] <= point[axis] && point[axis] <= self.upper_bounds[axis]) {
                return false;
            }
        }
        true
    }

    /// Returns whether `other` lies entirely within this AAB (boundaries may touch).
    #[inline]
    pub fn contains_box(&self, other: Aab) -> bool {
        self.contains(other.lower_bounds) && self.contains(other.upper_bounds)
    }

    /// Returns the point within this box (including its boundary) nearest to `point`.
    #[inline]
    pub fn clamp_point(&self, point: FreePoint) -> FreePoint {
        point.clamp(self.lower_bounds, self.upper_bounds)
    }

    /// Returns a random point within this box, using half-open ranges
    /// (`lower_bounds[axis] ≤ random_point()[axis] < upper_bounds[axis]`).
    ///
    /// On an axis where the box has zero size, the result is the lower bound.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn random_point(self, rng: &mut impl rand::Rng) -> FreePoint {
        let mut point = self.lower_bounds;
        for axis in Axis::ALL {
            let low = self.lower_bounds[axis];
            let high = self.upper_bounds[axis];
            if low < high {
                point[axis] = rng.random_range(low..high);
            }
        }
        point
    }

    /// Translate this box by the specified offset.
    ///
    /// Note that due to rounding error, the result may not have the same size.
    #[inline]
    #[must_use]
    #[track_caller] // in case of NaN
    pub fn translate(self, offset: FreeVector) -> Self {
        Self::from_lower_upper(self.lower_bounds + offset, self.upper_bounds + offset)
    }
}

impl fmt::Debug for Aab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Aab {
            lower_bounds: l,
            upper_bounds: u,
        } = *self;
        f.debug_tuple("Aab")
            .field(&(l.x..=u.x))
            .field(&(l.y..=u.y))
            .field(&(l.z..=u.z))
            .finish()
    }
}

/// [`Aab`] rejects NaN values, so it can implement [`Eq`]
/// even though it contains floats.
impl Eq for Aab {}

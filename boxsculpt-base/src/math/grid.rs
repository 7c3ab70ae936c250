use core::fmt;

use crate::math::{Aab, Axis, Face6, FreeCoordinate, FreePoint, FreeSize};

/// The editable region: the box spanning from the origin to `(width, height, depth)`.
///
/// Its six faces are the *walls* that new boxes are drawn on.
/// A [`Grid`] cannot be changed once created.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    bounds: Aab,
}

/// Error returned by [`Grid::new()`] when a dimension is not a positive finite number.
#[derive(Clone, Copy, Debug, PartialEq, displaydoc::Display)]
#[displaydoc("grid dimensions must be positive and finite, not {width} × {height} × {depth}")]
#[allow(clippy::exhaustive_structs)]
pub struct GridSizeError {
    #[allow(missing_docs)]
    pub width: FreeCoordinate,
    #[allow(missing_docs)]
    pub height: FreeCoordinate,
    #[allow(missing_docs)]
    pub depth: FreeCoordinate,
}

impl core::error::Error for GridSizeError {}

impl Grid {
    /// Constructs a [`Grid`] with the given dimensions.
    ///
    /// Returns an error unless every dimension is positive and finite.
    #[inline]
    pub fn new(
        width: FreeCoordinate,
        height: FreeCoordinate,
        depth: FreeCoordinate,
    ) -> Result<Self, GridSizeError> {
        let ok = |d: FreeCoordinate| d.is_finite() && d > 0.0;
        if ok(width) && ok(height) && ok(depth) {
            Ok(Self {
                bounds: Aab::new(0.0, width, 0.0, height, 0.0, depth),
            })
        } else {
            Err(GridSizeError {
                width,
                height,
                depth,
            })
        }
    }

    /// Returns the grid dimensions.
    #[inline]
    pub fn size(&self) -> FreeSize {
        self.bounds.size()
    }

    /// Returns the grid as a box.
    #[inline]
    pub fn bounds(&self) -> Aab {
        self.bounds
    }

    /// Size of the grid along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> FreeCoordinate {
        self.bounds.upper_bounds_p()[axis]
    }

    /// Coordinate of the wall identified by `face` along the wall's axis:
    /// zero for negative faces and [`extent()`](Self::extent) for positive faces.
    #[inline]
    pub fn wall_position(&self, face: Face6) -> FreeCoordinate {
        self.bounds.face_position(face)
    }

    /// Returns whether the point lies within the grid or on its boundary.
    #[inline]
    pub fn contains(&self, point: FreePoint) -> bool {
        self.bounds.contains(point)
    }

    /// Moves `point` to the nearest point within the grid.
    #[inline]
    pub fn clamp_point(&self, point: FreePoint) -> FreePoint {
        self.bounds.clamp_point(point)
    }

    /// Returns the walls whose inner side can be seen from `eye`.
    ///
    /// The low wall on an axis is visible when the eye is at or above zero on that axis,
    /// and the high wall when the eye is at or below the grid's extent; so from inside
    /// the grid every wall is visible, and from outside, the walls nearest the eye are
    /// not drawn so they don't hide the boxes.
    #[inline]
    pub fn visible_walls(&self, eye: FreePoint) -> impl Iterator<Item = Face6> + '_ {
        Face6::ALL.into_iter().filter(move |&face| {
            let position = self.wall_position(face);
            if face.is_positive() {
                eye[face.axis()] <= position
            } else {
                eye[face.axis()] >= position
            }
        })
    }
}

impl fmt::Debug for Grid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(f, "Grid({} × {} × {})", size.width, size.height, size.depth)
    }
}

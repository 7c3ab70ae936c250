//! Numeric types used for coordinates and related quantities.

use euclid::{Point3D, Size3D, Vector3D};

/// Unit-of-measure type for positions in the editing space (the space the grid and the
/// boxes live in).
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum World {}

/// Coordinates in world space.
///
/// Boxes are not locked to integer positions; the editor snaps them to multiples of a
/// configurable step instead.
pub type FreeCoordinate = f64;

/// Positions in world space.
pub type FreePoint = Point3D<FreeCoordinate, World>;

/// Vectors in world space.
pub type FreeVector = Vector3D<FreeCoordinate, World>;

/// Sizes of boxes and of the grid.
pub type FreeSize = Size3D<FreeCoordinate, World>;

//! Projection of pointer positions into the world: viewports, projection matrices, and
//! the camera's view transform.
//!
//! The editor does not own a camera. Instead, each screen-level event is given a
//! [`PickingView`], which borrows whatever implements [`CameraView`] in the host.
//! [`OrbitCamera`] is provided as a ready-made implementation.

use euclid::{Angle, Point2D, Size2D, Transform3D, point2, vec3};

use crate::math::{FreeCoordinate, FreePoint, World};
use crate::raycast::Ray;

mod orbit;
pub use orbit::*;


/// Unit-of-measure type for window coordinates, in the host's logical (not necessarily
/// physical) pixels, with the origin at the top left and Y pointing down.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum NominalPixel {}

/// Unit-of-measure type for normalized device coordinates: `-1..=1` on each axis, with Y
/// pointing up.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Ndc {}

/// Unit-of-measure type for eye (camera-relative) coordinates: the camera is at the
/// origin looking toward −Z with +Y up.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Eye {}

/// A point in normalized device coordinates.
pub type NdcPoint2 = Point2D<FreeCoordinate, Ndc>;

/// The transform from world coordinates to eye coordinates.
pub type ViewTransform = Transform3D<FreeCoordinate, World, Eye>;

/// The size of the area the scene is displayed in, used to interpret pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Viewport {
    /// Viewport dimensions to use for determining aspect ratio and interpreting
    /// pointer events.
    pub nominal_size: Size2D<FreeCoordinate, NominalPixel>,
}

impl Viewport {
    /// Constructs a viewport of the given size.
    #[inline]
    pub fn with_size(width: FreeCoordinate, height: FreeCoordinate) -> Self {
        Self {
            nominal_size: Size2D::new(width, height),
        }
    }

    /// Calculates the aspect ratio (width divided by height) of the `nominal_size` of this
    /// viewport.
    #[inline]
    pub fn nominal_aspect_ratio(&self) -> FreeCoordinate {
        self.nominal_size.width / self.nominal_size.height
    }

    /// Convert a point in the `self.nominal_size` coordinate system to OpenGL normalized
    /// device coordinates, range -1 to 1 (at pixel centers) with Y flipped.
    ///
    /// The point names a pixel; the center of that pixel is what is converted.
    #[inline]
    pub fn normalize_nominal_point(
        &self,
        nominal_point: Point2D<FreeCoordinate, NominalPixel>,
    ) -> NdcPoint2 {
        point2(
            (nominal_point.x + 0.5) / self.nominal_size.width * 2.0 - 1.0,
            -((nominal_point.y + 0.5) / self.nominal_size.height * 2.0 - 1.0),
        )
    }

    /// Returns whether this viewport has a nonzero finite area, so that pointer positions
    /// within it can be interpreted.
    #[inline]
    pub fn is_usable(&self) -> bool {
        let Size2D { width, height, .. } = self.nominal_size;
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }
}

/// A perspective projection from [`Eye`] coordinates to [`Ndc`], in the OpenGL
/// convention (the view volume is `-1..=1` in all three axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    matrix: Transform3D<FreeCoordinate, Eye, Ndc>,
}

impl Projection {
    /// Constructs a perspective projection with the given vertical field of view,
    /// aspect ratio (width divided by height), and near and far clipping distances.
    pub fn perspective(
        fov_y: Angle<FreeCoordinate>,
        aspect_ratio: FreeCoordinate,
        near: FreeCoordinate,
        far: FreeCoordinate,
    ) -> Self {
        let f = 1.0 / (fov_y.radians / 2.0).tan();
        #[rustfmt::skip]
        let matrix = Transform3D::new(
            f / aspect_ratio, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, (far + near) / (near - far), -1.0,
            0.0, 0.0, 2.0 * far * near / (near - far), 0.0,
        );
        Self { matrix }
    }

    /// Wraps an existing projection matrix, such as one shared with a renderer.
    #[inline]
    pub fn from_matrix(matrix: Transform3D<FreeCoordinate, Eye, Ndc>) -> Self {
        Self { matrix }
    }

    /// Returns the projection matrix.
    #[inline]
    pub fn matrix(&self) -> Transform3D<FreeCoordinate, Eye, Ndc> {
        self.matrix
    }

    /// Returns the vertical field of view, recovered from the matrix.
    #[inline]
    pub fn fov_y(&self) -> Angle<FreeCoordinate> {
        Angle::radians(2.0 * (1.0 / self.matrix.m22).atan())
    }
}

/// Read access to a camera's position and orientation, for building picking rays.
pub trait CameraView {
    /// The transform from world coordinates to eye coordinates.
    fn view_matrix(&self) -> ViewTransform;

    /// The position of the camera in world coordinates.
    fn eye_position(&self) -> FreePoint;

    /// Whether the camera is currently being moved by the pointer.
    ///
    /// While this is true, the editor does not report hovered boxes.
    fn is_dragging(&self) -> bool {
        false
    }
}

/// Everything needed to turn a pointer position into a world-space [`Ray`].
#[derive(Clone, Copy)]
#[allow(clippy::exhaustive_structs)]
pub struct PickingView<'a> {
    /// The area the scene is displayed in.
    pub viewport: Viewport,
    /// The projection used for display. Only its field of view is used.
    pub projection: Projection,
    /// The camera the scene is viewed from.
    pub camera: &'a dyn CameraView,
}

impl PickingView<'_> {
    /// Returns the ray from the camera through the given point in normalized device
    /// coordinates, with a direction of unit length.
    ///
    /// Returns [`None`] if the camera's view matrix is not invertible or the inputs are
    /// otherwise degenerate.
    pub fn ray_through_ndc(&self, ndc: NdcPoint2) -> Option<Ray> {
        let tan_half_fov = (self.projection.fov_y().radians / 2.0).tan();
        let eye_direction = vec3::<_, Eye>(
            ndc.x * tan_half_fov * self.viewport.nominal_aspect_ratio(),
            ndc.y * tan_half_fov,
            -1.0,
        );
        let inverse_view = self.camera.view_matrix().inverse()?;
        Ray {
            origin: self.camera.eye_position(),
            direction: inverse_view.transform_vector3d(eye_direction),
        }
        .normalized()
    }

    /// Returns the ray from the camera through the given pointer position.
    pub fn ray_through_pixel(&self, pixel: Point2D<FreeCoordinate, NominalPixel>) -> Option<Ray> {
        if !self.viewport.is_usable() {
            return None;
        }
        self.ray_through_ndc(self.viewport.normalize_nominal_point(pixel))
    }
}

impl core::fmt::Debug for PickingView<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickingView")
            .field("viewport", &self.viewport)
            .field("projection", &self.projection)
            .field("eye_position", &self.camera.eye_position())
            .finish_non_exhaustive()
    }
}

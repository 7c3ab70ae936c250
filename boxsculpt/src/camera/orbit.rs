use core::f64::consts::FRAC_PI_4;

use euclid::{Point2D, Transform3D, vec3};

use crate::camera::{CameraView, NominalPixel, ViewTransform};
use crate::math::{FreeCoordinate, FreePoint, FreeVector, Grid};

/// A camera which orbits a fixed point, controlled by dragging and scrolling.
///
/// Dragging horizontally changes the azimuth (rotation about the vertical axis through
/// the orbit point) and dragging vertically changes the elevation, within
/// `-π/4..=π/4`. Scrolling moves the camera toward or away from the orbit point, within
/// [`OrbitCamera::MIN_DISTANCE`] and [`OrbitCamera::MAX_DISTANCE`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    orbit_point: FreePoint,
    distance: FreeCoordinate,
    azimuth: FreeCoordinate,
    elevation: FreeCoordinate,
    /// Last pointer position while a drag is in progress.
    drag_position: Option<Point2D<FreeCoordinate, NominalPixel>>,
}

impl OrbitCamera {
    /// Radians of rotation per pixel of pointer movement.
    pub const SENSITIVITY: FreeCoordinate = 0.005;
    /// Closest the camera may be to the orbit point.
    pub const MIN_DISTANCE: FreeCoordinate = 25.0;
    /// Farthest the camera may be from the orbit point.
    pub const MAX_DISTANCE: FreeCoordinate = 60.0;
    /// Change in distance per scroll step.
    pub const ZOOM_STEP: FreeCoordinate = 2.0;
    const MAX_ELEVATION: FreeCoordinate = FRAC_PI_4;

    /// Constructs a camera looking at `orbit_point` from slightly above, at a distance
    /// of 40.
    pub fn new(orbit_point: FreePoint) -> Self {
        Self {
            orbit_point,
            distance: 40.0,
            azimuth: 0.0,
            elevation: 0.25,
            drag_position: None,
        }
    }

    /// Constructs a camera orbiting the center of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds().center())
    }

    /// The point the camera looks at and orbits around.
    pub fn orbit_point(&self) -> FreePoint {
        self.orbit_point
    }

    /// Distance from the orbit point to the eye.
    pub fn distance(&self) -> FreeCoordinate {
        self.distance
    }

    /// Rotation about the vertical axis, in radians.
    pub fn azimuth(&self) -> FreeCoordinate {
        self.azimuth
    }

    /// Angle of the eye above the horizontal plane through the orbit point, in radians.
    pub fn elevation(&self) -> FreeCoordinate {
        self.elevation
    }

    /// Starts rotating the camera with the pointer at `position`.
    pub fn begin_drag(&mut self, position: Point2D<FreeCoordinate, NominalPixel>) {
        self.drag_position = Some(position);
    }

    /// Continues a drag started by [`Self::begin_drag()`]. Does nothing if no drag is in
    /// progress.
    pub fn drag_to(&mut self, position: Point2D<FreeCoordinate, NominalPixel>) {
        let Some(previous) = self.drag_position else {
            return;
        };
        let delta = position - previous;
        self.azimuth += delta.x * Self::SENSITIVITY;
        self.elevation = (self.elevation + delta.y * Self::SENSITIVITY)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self.drag_position = Some(position);
    }

    /// Stops rotating the camera.
    pub fn end_drag(&mut self) {
        self.drag_position = None;
    }

    /// Moves the camera one step farther away if `scroll_delta` is positive, or one step
    /// closer if it is negative.
    pub fn zoom(&mut self, scroll_delta: FreeCoordinate) {
        let step = if scroll_delta > 0.0 {
            Self::ZOOM_STEP
        } else if scroll_delta < 0.0 {
            -Self::ZOOM_STEP
        } else {
            return;
        };
        self.distance = (self.distance + step).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    fn eye_offset(&self) -> FreeVector {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        vec3(
            cos_e * (-self.azimuth).sin(),
            sin_e,
            cos_e * (-self.azimuth).cos(),
        ) * self.distance
    }
}

impl CameraView for OrbitCamera {
    fn view_matrix(&self) -> ViewTransform {
        look_at(self.eye_position(), self.orbit_point, vec3(0.0, 1.0, 0.0))
    }

    fn eye_position(&self) -> FreePoint {
        self.orbit_point + self.eye_offset()
    }

    fn is_dragging(&self) -> bool {
        self.drag_position.is_some()
    }
}

/// Computes a view transform for a camera at `eye` looking toward `target`, with `up`
/// pointing up on screen. `up` must not be parallel to the viewing direction.
#[rustfmt::skip]
pub fn look_at(eye: FreePoint, target: FreePoint, up: FreeVector) -> ViewTransform {
    let f = (target - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);
    let e = eye.to_vector();
    Transform3D::new(
        s.x, u.x, -f.x, 0.0,
        s.y, u.y, -f.y, 0.0,
        s.z, u.z, -f.z, 0.0,
        -s.dot(e), -u.dot(e), f.dot(e), 1.0,
    )
}

//! Intersection tests between rays and the editor's geometry: boxes, grid walls,
//! and the auxiliary planes and lines used while dragging.
//!
//! All functions here are pure. “No intersection” is reported as [`None`].

use crate::math::{Aab, Axis, Face6, FreeCoordinate, FreePoint, Grid};

mod ray;
pub use ray::Ray;

#[cfg(test)]
mod tests;

/// Result of [`ray_aab_intersection()`]: where a ray enters a box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct AabHit {
    /// Ray parameter of the entry point, in units of the ray's direction vector.
    ///
    /// This may be negative if the box is partly or entirely behind the ray's origin.
    pub t: FreeCoordinate,
    /// The face of the box through which the ray enters.
    pub face: Face6,
    /// The entry point, `ray.origin + ray.direction * t`.
    pub point: FreePoint,
}

/// Result of [`grid_boundary_intersection()`]: where a ray meets a wall of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct BoundaryHit {
    /// The wall that was hit.
    pub face: Face6,
    /// Ray parameter of the hit; always positive.
    pub t: FreeCoordinate,
    /// The point on the wall.
    pub point: FreePoint,
}

/// Finds where `ray` enters `aab`, using the slab method.
///
/// The ray is clipped against the pair of planes bounding the box on each axis in turn.
/// The axis whose planes clipped the entry parameter last determines the hit face; the
/// face is on the side the ray comes from.
///
/// Direction components of zero are handled by IEEE arithmetic: they produce infinite
/// slab parameters, which compare correctly (a ray parallel to a slab either lies
/// within it for all `t` or never).
///
/// The returned `t` may be negative; callers that want only hits in front of the
/// origin must filter them. Returns [`None`] if the ray's line misses the box or if the
/// ray is not [usable](Ray::is_usable).
///
/// ```
/// # extern crate boxsculpt_base as boxsculpt;
/// use boxsculpt::euclid::point3;
/// use boxsculpt::math::{Aab, Face6};
/// use boxsculpt::raycast::{Ray, ray_aab_intersection};
///
/// let unit = Aab::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);
/// let hit = ray_aab_intersection(Ray::new([-5.0, 0.5, 0.5], [1.0, 0.0, 0.0]), &unit).unwrap();
/// assert_eq!(hit.t, 5.0);
/// assert_eq!(hit.face, Face6::NX);
/// assert_eq!(hit.point, point3(0.0, 0.5, 0.5));
/// ```
#[allow(clippy::missing_inline_in_public_items)]
pub fn ray_aab_intersection(ray: Ray, aab: &Aab) -> Option<AabHit> {
    if !ray.is_usable() {
        return None;
    }

    let lower = aab.lower_bounds_p();
    let upper = aab.upper_bounds_p();

    let mut low_t = FreeCoordinate::NEG_INFINITY;
    let mut high_t = FreeCoordinate::INFINITY;
    let mut entry_axis: Option<Axis> = None;

    for axis in Axis::ALL {
        let origin = ray.origin[axis];
        let direction = ray.direction[axis];
        let mut t1 = (lower[axis] - origin) / direction;
        let mut t2 = (upper[axis] - origin) / direction;
        if t1 > t2 {
            core::mem::swap(&mut t1, &mut t2);
        }

        // This slab's interval is disjoint from what is left of the line.
        if t2 < low_t || t1 > high_t {
            return None;
        }

        if t1 > low_t {
            low_t = t1;
            entry_axis = Some(axis);
        }
        if t2 < high_t {
            high_t = t2;
        }
    }

    if low_t > high_t {
        return None;
    }

    // If no slab ever raised low_t, every nonzero direction component would have
    // produced a finite t1; so this only happens for degenerate input.
    let axis = entry_axis?;
    let [low, high] = axis.faces();
    let face = if ray.direction[axis] > 0.0 { low } else { high };

    Some(AabHit {
        t: low_t,
        face,
        point: ray.at(low_t),
    })
}

/// Finds the box that `ray` enters first.
///
/// Only hits with `t ≥ 0` are considered, so boxes behind the ray's origin, and boxes
/// that contain the origin, are ignored. When two boxes are entered at exactly the same
/// `t`, the one that comes first in `boxes` wins.
///
/// Returns the index of the box within `boxes` along with the hit.
#[allow(clippy::missing_inline_in_public_items)]
pub fn nearest_aab_intersection<'a>(
    ray: Ray,
    boxes: impl IntoIterator<Item = &'a Aab>,
) -> Option<(usize, AabHit)> {
    let mut best: Option<(usize, AabHit)> = None;
    for (index, aab) in boxes.into_iter().enumerate() {
        let Some(hit) = ray_aab_intersection(ray, aab) else {
            continue;
        };
        if hit.t < 0.0 {
            continue;
        }
        match best {
            Some((_, best_hit)) if best_hit.t <= hit.t => {}
            _ => best = Some((index, hit)),
        }
    }
    best
}

/// Finds the wall of `grid` that `ray` hits, as seen from inside the grid.
///
/// A wall is only considered if it faces the ray: the low wall on an axis is hit by
/// rays travelling in the negative direction, and the high wall by rays travelling in
/// the positive direction. The hit must be in front of the origin (`t > 0`) and within
/// the grid (boundary included).
///
/// Walls are tried in the order of [`Face6::ALL`] grouped by axis (X low, X high,
/// Y low, …) and the first acceptable one is returned.
#[allow(clippy::missing_inline_in_public_items)]
pub fn grid_boundary_intersection(ray: Ray, grid: &Grid) -> Option<BoundaryHit> {
    if !ray.is_usable() {
        return None;
    }
    for axis in Axis::ALL {
        for face in axis.faces() {
            if !face.faces_toward(ray.direction) {
                continue;
            }
            let t = (grid.wall_position(face) - ray.origin[axis]) / ray.direction[axis];
            if !(t > 0.0) {
                continue;
            }
            let mut point = ray.at(t);
            // Put the point exactly on the wall despite rounding.
            point[axis] = grid.wall_position(face);
            if grid.contains(point) {
                return Some(BoundaryHit { face, t, point });
            }
        }
    }
    None
}

/// Finds where `ray` crosses the plane perpendicular to `axis` at `position`.
///
/// Returns [`None`] if the ray is parallel to the plane or crosses it at or behind its
/// origin.
#[allow(clippy::missing_inline_in_public_items)]
pub fn ray_plane_intersection(
    ray: Ray,
    axis: Axis,
    position: FreeCoordinate,
) -> Option<FreePoint> {
    if !ray.is_usable() || ray.direction[axis] == 0.0 {
        return None;
    }
    let t = (position - ray.origin[axis]) / ray.direction[axis];
    if t > 0.0 && t.is_finite() {
        let mut point = ray.at(t);
        point[axis] = position;
        Some(point)
    } else {
        None
    }
}

/// Projects `ray` onto the line through `through` parallel to `axis`, returning the
/// `axis` coordinate of the point on that line closest to the ray's line.
///
/// This is how a face is dragged along its normal: the cursor ray is generally skew to
/// the line the face moves on, so the face follows the point of closest approach.
/// Returns [`None`] if the ray is (nearly) parallel to the line, in which case there is
/// no well-defined closest point.
#[allow(clippy::missing_inline_in_public_items)]
pub fn closest_coordinate_on_axis_line(
    ray: Ray,
    through: FreePoint,
    axis: Axis,
) -> Option<FreeCoordinate> {
    if !ray.is_usable() {
        return None;
    }
    let d = ray.direction;
    // Unit vector along the line.
    let u = axis.unit_vector();
    let w0 = through - ray.origin;
    let b = u.dot(d);
    let c = d.dot(d);
    let denominator = c - b * b;
    if denominator <= c * 1e-9 {
        return None;
    }
    let s = (b * d.dot(w0) - c * u.dot(w0)) / denominator;
    Some(through[axis] + s)
}

use super::*;
use euclid::point3;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn unit_box() -> Aab {
    Aab::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0)
}

fn grid() -> Grid {
    Grid::new(40.0, 20.0, 20.0).unwrap()
}

#[rstest]
#[case::from_nx([-5.0, 0.5, 0.5], [1.0, 0.0, 0.0], 5.0, Face6::NX)]
#[case::from_px([3.0, 0.5, 0.5], [-1.0, 0.0, 0.0], 2.0, Face6::PX)]
#[case::from_py([0.25, 4.0, 0.75], [0.0, -2.0, 0.0], 1.5, Face6::PY)]
#[case::from_nz([0.5, 0.5, -1.0], [0.0, 0.0, 0.5], 2.0, Face6::NZ)]
fn aab_entry_face(
    #[case] origin: [FreeCoordinate; 3],
    #[case] direction: [FreeCoordinate; 3],
    #[case] expected_t: FreeCoordinate,
    #[case] expected_face: Face6,
) {
    let hit = ray_aab_intersection(Ray::new(origin, direction), &unit_box()).unwrap();
    assert_eq!((hit.t, hit.face), (expected_t, expected_face));
    assert_eq!(
        hit.point[expected_face.axis()],
        unit_box().face_position(expected_face)
    );
}

#[test]
fn aab_entry_point() {
    assert_eq!(
        ray_aab_intersection(Ray::new([-5.0, 0.5, 0.5], [1.0, 0.0, 0.0]), &unit_box()),
        Some(AabHit {
            t: 5.0,
            face: Face6::NX,
            point: point3(0.0, 0.5, 0.5),
        })
    );
}

#[test]
fn aab_diagonal_entry_uses_last_clipping_axis() {
    // Crosses the x = 0 plane at t = 1 and the y = 0 plane at t = 2;
    // so it is outside the box until it passes through the bottom face.
    let hit = ray_aab_intersection(
        Ray::new([-1.0, -2.0, 0.5], [1.0, 1.0, 0.0]),
        &Aab::new(0.0, 4.0, 0.0, 4.0, 0.0, 1.0),
    )
    .unwrap();
    assert_eq!(hit.face, Face6::NY);
    assert_eq!(hit.t, 2.0);
    assert_eq!(hit.point, point3(1.0, 0.0, 0.5));
}

#[test]
fn aab_miss() {
    assert_eq!(
        ray_aab_intersection(Ray::new([-5.0, 2.0, 0.5], [1.0, 0.0, 0.0]), &unit_box()),
        None
    );
    // Passes by a corner.
    assert_eq!(
        ray_aab_intersection(Ray::new([-1.0, 0.0, 0.5], [1.0, 3.0, 0.0]), &unit_box()),
        None
    );
}

#[test]
fn aab_behind_origin_reports_negative_t() {
    let hit = ray_aab_intersection(Ray::new([5.0, 0.5, 0.5], [1.0, 0.0, 0.0]), &unit_box())
        .unwrap();
    assert_eq!(hit.t, -5.0);
    assert_eq!(
        nearest_aab_intersection(Ray::new([5.0, 0.5, 0.5], [1.0, 0.0, 0.0]), &[unit_box()]),
        None
    );
}

#[test]
fn aab_unusable_ray() {
    assert_eq!(
        ray_aab_intersection(Ray::new([-5.0, 0.5, 0.5], [0.0, 0.0, 0.0]), &unit_box()),
        None
    );
    assert_eq!(
        ray_aab_intersection(Ray::new([f64::NAN, 0.5, 0.5], [1.0, 0.0, 0.0]), &unit_box()),
        None
    );
}

#[test]
fn nearest_prefers_smaller_t() {
    let near = Aab::new(2.0, 3.0, 0.0, 1.0, 0.0, 1.0);
    let far = Aab::new(5.0, 6.0, 0.0, 1.0, 0.0, 1.0);
    let ray = Ray::new([0.0, 0.5, 0.5], [1.0, 0.0, 0.0]);
    assert_eq!(
        nearest_aab_intersection(ray, &[far, near]).map(|(i, hit)| (i, hit.t)),
        Some((1, 2.0))
    );
    assert_eq!(
        nearest_aab_intersection(ray, &[near, far]).map(|(i, hit)| (i, hit.t)),
        Some((0, 2.0))
    );
}

#[test]
fn nearest_tie_keeps_first() {
    let a = Aab::new(2.0, 3.0, 0.0, 1.0, 0.0, 1.0);
    let b = Aab::new(2.0, 4.0, 0.0, 2.0, 0.0, 1.0);
    let ray = Ray::new([0.0, 0.5, 0.5], [1.0, 0.0, 0.0]);
    assert_eq!(nearest_aab_intersection(ray, &[a, b]).map(|(i, _)| i), Some(0));
    assert_eq!(nearest_aab_intersection(ray, &[b, a]).map(|(i, _)| i), Some(0));
}

#[test]
fn nearest_of_nothing() {
    let ray = Ray::new([0.0, 0.5, 0.5], [1.0, 0.0, 0.0]);
    let boxes: [Aab; 0] = [];
    assert_eq!(nearest_aab_intersection(ray, &boxes), None);
}

#[test]
fn boundary_floor_from_inside() {
    assert_eq!(
        grid_boundary_intersection(Ray::new([4.2, 20.0, 6.1], [0.0, -1.0, 0.0]), &grid()),
        Some(BoundaryHit {
            face: Face6::NY,
            t: 20.0,
            point: point3(4.2, 0.0, 6.1),
        })
    );
}

#[test]
fn boundary_culls_walls_facing_away() {
    // From above the grid looking down, the ceiling faces away from the ray and is
    // skipped; the floor is found instead.
    let hit =
        grid_boundary_intersection(Ray::new([20.0, 40.0, 10.0], [0.0, -1.0, 0.0]), &grid())
            .unwrap();
    assert_eq!(hit.face, Face6::NY);
    assert_eq!(hit.point, point3(20.0, 0.0, 10.0));
}

#[test]
fn boundary_hits_far_side_wall() {
    let hit =
        grid_boundary_intersection(Ray::new([-10.0, 5.0, 5.0], [1.0, 0.0, 0.0]), &grid())
            .unwrap();
    assert_eq!(hit.face, Face6::PX);
    assert_eq!(hit.t, 50.0);
}

#[test]
fn boundary_miss() {
    // Pointing up and away, starting above the grid.
    assert_eq!(
        grid_boundary_intersection(Ray::new([20.0, 40.0, 10.0], [0.0, 1.0, 0.0]), &grid()),
        None
    );
    // Crosses the floor plane outside the grid.
    assert_eq!(
        grid_boundary_intersection(Ray::new([100.0, 40.0, 10.0], [0.0, -1.0, 0.0]), &grid()),
        None
    );
}

#[test]
fn plane_intersection() {
    let ray = Ray::new([0.0, 10.0, 0.0], [1.0, -1.0, 0.0]);
    assert_eq!(
        ray_plane_intersection(ray, Axis::Y, 4.0),
        Some(point3(6.0, 4.0, 0.0))
    );
    assert_eq!(ray_plane_intersection(ray, Axis::Y, 12.0), None);
    assert_eq!(ray_plane_intersection(ray, Axis::Z, 1.0), None);
}

#[test]
fn axis_line_closest_point() {
    // A ray travelling horizontally at height 3.2 passes closest to the vertical line
    // at that height.
    assert_eq!(
        closest_coordinate_on_axis_line(
            Ray::new([20.0, 3.2, 9.0], [-1.0, 0.0, 0.0]),
            point3(7.0, 0.0, 9.0),
            Axis::Y,
        ),
        Some(3.2)
    );
}

#[test]
fn axis_line_parallel() {
    assert_eq!(
        closest_coordinate_on_axis_line(
            Ray::new([20.0, 3.2, 9.0], [0.0, 2.0, 0.0]),
            point3(7.0, 0.0, 9.0),
            Axis::Y,
        ),
        None
    );
}

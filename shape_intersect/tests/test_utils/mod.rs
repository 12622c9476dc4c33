#![allow(dead_code)]

use shape_intersect::{
    core::math::Vector3,
    intersect::Intersection,
    shape::*,
    vec3,
};

/// Fuzzy epsilon used when comparing computed points against expected points in tests.
pub const TEST_EPSILON: f64 = 1e-6;

/// Routes the crate's log output through the test harness (`RUST_LOG=trace` to see it).
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn segment(start: (f64, f64, f64), end: (f64, f64, f64)) -> Shape {
    Segment::new(vec3!(start), vec3!(end)).unwrap().into()
}

pub fn line(point: (f64, f64, f64), direction: (f64, f64, f64)) -> Shape {
    Line::new(vec3!(point), vec3!(direction)).unwrap().into()
}

pub fn ray(origin: (f64, f64, f64), direction: (f64, f64, f64)) -> Shape {
    Ray::new(vec3!(origin), vec3!(direction)).unwrap().into()
}

pub fn triangle(v0: (f64, f64, f64), v1: (f64, f64, f64), v2: (f64, f64, f64)) -> Shape {
    Triangle::new(vec3!(v0), vec3!(v1), vec3!(v2)).unwrap().into()
}

/// Rectangle lying in the plane `z = center.z` with sides along the x and y axes.
pub fn rect_xy(center: (f64, f64, f64), width: f64, height: f64) -> Shape {
    Rectangle::new(
        vec3!(center),
        vec3!(0.0, 0.0, 1.0),
        vec3!(1.0, 0.0, 0.0),
        width,
        height,
    )
    .unwrap()
    .into()
}

pub fn circle(center: (f64, f64, f64), normal: (f64, f64, f64), radius: f64) -> Shape {
    Circle::new(vec3!(center), vec3!(normal), radius)
        .unwrap()
        .into()
}

pub fn sector(
    center: (f64, f64, f64),
    normal: (f64, f64, f64),
    start: (f64, f64, f64),
    radius: f64,
    range: f64,
) -> Shape {
    Sector::new(vec3!(center), vec3!(normal), vec3!(start), radius, range)
        .unwrap()
        .into()
}

pub fn sphere(center: (f64, f64, f64), radius: f64) -> Shape {
    Sphere::new(vec3!(center), radius).unwrap().into()
}

/// A representative shape of each kind, all placed around the origin so that every pair overlaps.
pub fn sample_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Line => line((0.0, 0.0, 0.0), (1.0, 0.3, 0.2)),
        ShapeKind::Ray => ray((-0.5, 0.0, 0.0), (1.0, 0.1, 0.05)),
        ShapeKind::Segment => segment((-1.0, -1.0, -1.0), (1.0, 1.0, 1.0)),
        ShapeKind::Triangle => triangle((-1.0, -1.0, 0.0), (2.0, -1.0, 0.0), (-1.0, 2.0, 0.0)),
        ShapeKind::Rectangle => Rectangle::new(
            vec3!(0.0, 0.0, 0.0),
            vec3!(0.0, 1.0, 0.0),
            vec3!(1.0, 0.0, 0.0),
            2.0,
            2.0,
        )
        .unwrap()
        .into(),
        ShapeKind::Circle => circle((0.0, 0.0, 0.0), (1.0, 1.0, 0.0), 1.0),
        ShapeKind::Sector => sector(
            (0.0, 0.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 0.0, 0.0),
            1.0,
            0.25,
        ),
        ShapeKind::Sphere => sphere((0.0, 0.0, 0.0), 1.0),
    }
}

/// Returns `true` if every point in `left` is within `eps` of some point in `right` and vice versa.
pub fn point_sets_fuzzy_eq(left: &[Vector3], right: &[Vector3], eps: f64) -> bool {
    let covered = |a: &[Vector3], b: &[Vector3]| {
        a.iter()
            .all(|p| b.iter().any(|q| p.fuzzy_eq_eps(*q, eps)))
    };
    covered(left, right) && covered(right, left)
}

/// Asserts the intersect result has the expected hit flag and (in any order) the expected points.
pub fn assert_intersection(result: &Intersection, hit: bool, expected_points: &[Vector3]) {
    assert_eq!(result.hit, hit, "hit mismatch, result: {:?}", result);
    assert_eq!(
        result.points.len(),
        expected_points.len(),
        "point count mismatch, result: {:?}, expected: {:?}",
        result.points,
        expected_points
    );
    assert!(
        point_sets_fuzzy_eq(&result.points, expected_points, TEST_EPSILON),
        "points mismatch, result: {:?}, expected: {:?}",
        result.points,
        expected_points
    );
}

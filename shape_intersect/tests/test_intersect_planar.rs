mod test_utils;

use shape_intersect::{
    core::math::Vector3,
    intersect::{has_intersection, intersect, intersect_opt, IntersectOptions},
    shape::*,
    vec3,
};
use test_utils::*;

#[test]
fn coplanar_overlapping_squares() {
    init_logger();
    let a = rect_xy((0.0, 0.0, 0.0), 2.0, 2.0);
    let b = rect_xy((1.0, 1.0, 0.0), 2.0, 2.0);
    let result = intersect(&a, &b);
    assert_intersection(&result, true, &[vec3!(1.0, 0.0, 0.0), vec3!(0.0, 1.0, 0.0)]);

    // points lie on the shared boundary between the overlapping corners
    for p in result.points.iter() {
        assert!(a.contains_point(*p));
        assert!(b.contains_point(*p));
    }
}

#[test]
fn coplanar_squares_apart() {
    let a = rect_xy((0.0, 0.0, 0.0), 2.0, 2.0);
    let b = rect_xy((2.5, 0.0, 0.0), 2.0, 2.0);
    assert!(!has_intersection(&a, &b));
}

#[test]
fn coplanar_square_inside_square() {
    init_logger();
    let outer = rect_xy((0.0, 0.0, 0.0), 4.0, 4.0);
    let inner = rect_xy((0.5, 0.0, 0.0), 1.0, 1.0);
    assert_intersection(&intersect(&outer, &inner), true, &[]);
    assert_intersection(&intersect(&inner, &outer), true, &[]);
}

#[test]
fn coplanar_triangles_sharing_an_edge() {
    let a = triangle((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
    let b = triangle((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, -1.0, 0.0));
    assert_intersection(
        &intersect(&a, &b),
        true,
        &[vec3!(0.0, 0.0, 0.0), vec3!(1.0, 0.0, 0.0)],
    );
}

#[test]
fn parallel_rectangles_do_not_intersect() {
    init_logger();
    let a = rect_xy((0.0, 0.0, 0.0), 1.0, 1.0);
    let b = rect_xy((0.0, 0.0, 1.0), 1.0, 1.0);
    assert!(!has_intersection(&a, &b));
    assert_intersection(&intersect(&a, &b), false, &[]);
}

#[test]
fn crossing_triangles() {
    init_logger();
    let a = triangle((-1.0, -1.0, 0.0), (2.0, -1.0, 0.0), (-1.0, 2.0, 0.0));
    let b = triangle((0.0, 0.0, -1.0), (0.0, 0.0, 1.0), (1.0, 0.0, 0.0));
    let expected = [vec3!(0.0, 0.0, 0.0), vec3!(1.0, 0.0, 0.0)];
    assert_intersection(&intersect(&a, &b), true, &expected);
    assert_intersection(&intersect(&b, &a), true, &expected);
}

#[test]
fn crossing_planes_but_apart() {
    let a = rect_xy((0.0, 0.0, 0.0), 2.0, 2.0);
    // vertical rectangle in the plane x = 1.5, close enough that the bounding spheres overlap
    let b: Shape = Rectangle::new(
        vec3!(1.5, 0.0, 0.0),
        vec3!(1.0, 0.0, 0.0),
        vec3!(0.0, 1.0, 0.0),
        2.0,
        2.0,
    )
    .unwrap()
    .into();
    assert!(!has_intersection(&a, &b));
}

#[test]
fn circle_crossing_rectangle() {
    let c = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    let r: Shape = Rectangle::new(
        vec3!(0.0, 0.0, 0.0),
        vec3!(0.0, 1.0, 0.0),
        vec3!(1.0, 0.0, 0.0),
        4.0,
        4.0,
    )
    .unwrap()
    .into();
    let expected = [vec3!(-1.0, 0.0, 0.0), vec3!(1.0, 0.0, 0.0)];
    assert_intersection(&intersect(&c, &r), true, &expected);
    assert_intersection(&intersect(&r, &c), true, &expected);
}

#[test]
fn perpendicular_circles() {
    let a = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    let b = circle((0.5, 0.0, 0.0), (0.0, 1.0, 0.0), 1.0);
    assert_intersection(
        &intersect(&a, &b),
        true,
        &[vec3!(1.0, 0.0, 0.0), vec3!(-0.5, 0.0, 0.0)],
    );
}

#[test]
fn tangent_coplanar_circles() {
    let c1 = vec3!(0.0, 0.0, 0.0);
    let c2 = vec3!(3.0, 0.0, 0.0);
    let a = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    let b = circle((3.0, 0.0, 0.0), (0.0, 0.0, 1.0), 2.0);
    let expected = c1 + (c2 - c1).scale(1.0 / c1.distance(c2)).scale(1.0);
    assert_intersection(&intersect(&a, &b), true, &[expected]);
    assert_intersection(&intersect(&b, &a), true, &[expected]);
}

#[test]
fn crossing_coplanar_circles() {
    let a = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    let b = circle((1.0, 0.0, 0.0), (0.0, 0.0, -1.0), 1.0);
    let h = 3.0f64.sqrt() / 2.0;
    assert_intersection(
        &intersect(&a, &b),
        true,
        &[vec3!(0.5, h, 0.0), vec3!(0.5, -h, 0.0)],
    );
}

#[test]
fn circle_inside_circle() {
    let a = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 3.0);
    let b = circle((0.5, 0.5, 0.0), (0.0, 0.0, 1.0), 1.0);
    assert_intersection(&intersect(&a, &b), true, &[]);
}

#[test]
fn identical_circles_overlap() {
    let a = circle((1.0, 2.0, 3.0), (1.0, 1.0, 1.0), 2.0);
    assert_intersection(&intersect(&a, &a), true, &[]);
}

#[test]
fn circle_rim_containment() {
    let eps = 1e-10;
    let normal = vec3!(0.0, 0.0, 1.0);
    let c = Circle::new(vec3!(0.0, 0.0, 0.0), normal, 2.0).unwrap();
    let rim_point = vec3!(2.0, 0.0, 0.0);
    assert!(c.contains_point_eps(rim_point, eps));
    assert!(!c.contains_point_eps(rim_point + normal.scale(10.0 * eps), eps));

    let shape: Shape = c.into();
    assert!(shape.contains_point(rim_point));
    assert!(!shape.contains_point(rim_point + normal.scale(10.0 * eps)));
}

#[test]
fn sector_outside_angular_range_of_overlapping_disk() {
    let s = sector(
        (0.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 0.0),
        1.0,
        0.25,
    );
    // the disks overlap but only outside the sector's quarter
    let c = circle((-1.0, -1.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    assert!(!has_intersection(&s, &c));
}

#[test]
fn sector_crossing_circle_within_range() {
    let s = sector(
        (0.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 0.0),
        1.0,
        0.25,
    );
    let c = circle((1.0, 1.0, 0.0), (0.0, 0.0, 1.0), 0.5);
    let result = intersect(&s, &c);
    assert!(result.hit);
    assert_eq!(result.points.len(), 2);
    for p in result.points.iter() {
        assert!(s.contains_point_eps(*p, TEST_EPSILON));
        assert!(c.contains_point_eps(*p, TEST_EPSILON));
        assert!((p.length() - 1.0).abs() < TEST_EPSILON);
    }
}

#[test]
fn clockwise_sector_crossing_plane() {
    // quarter sector sweeping clockwise from +x, i.e. covering the fourth quadrant
    let s = sector(
        (0.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 0.0),
        1.0,
        -0.25,
    );
    let r: Shape = Rectangle::new(
        vec3!(0.5, 0.0, 0.0),
        vec3!(1.0, 0.0, 0.0),
        vec3!(0.0, 1.0, 0.0),
        4.0,
        4.0,
    )
    .unwrap()
    .into();
    let h = 0.75f64.sqrt();
    // the plane x = 0.5 crosses the sector's arc at y = -h and its first radial edge at y = 0
    assert_intersection(
        &intersect(&s, &r),
        true,
        &[vec3!(0.5, -h, 0.0), vec3!(0.5, 0.0, 0.0)],
    );
}

#[test]
fn larger_epsilon_snaps_near_tangent_circles() {
    let a = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    let b = circle((2.0 + 1e-7, 0.0, 0.0), (0.0, 0.0, 1.0), 1.0);
    assert!(!has_intersection(&a, &b));

    let options = IntersectOptions::with_epsilon(1e-6);
    let result = intersect_opt(&a, &b, &options);
    assert!(result.hit);
    assert_eq!(result.points.len(), 1);
    assert!(result.points[0].fuzzy_eq_eps(Vector3::new(1.0, 0.0, 0.0), 1e-6));
}

mod test_utils;

use shape_intersect::{
    intersect::{has_intersection, intersect},
    vec3,
};
use test_utils::*;

#[test]
fn spheres_touching_externally() {
    let a = sphere((0.0, 0.0, 0.0), 1.0);
    let b = sphere((3.0, 0.0, 0.0), 2.0);
    assert_intersection(&intersect(&a, &b), true, &[vec3!(1.0, 0.0, 0.0)]);
    assert_intersection(&intersect(&b, &a), true, &[vec3!(1.0, 0.0, 0.0)]);
}

#[test]
fn spheres_overlapping() {
    let a = sphere((0.0, 0.0, 0.0), 1.0);
    let b = sphere((1.0, 1.0, 0.0), 1.0);
    assert_intersection(&intersect(&a, &b), true, &[]);

    // one inside the other
    let c = sphere((0.1, 0.0, 0.0), 0.2);
    assert!(has_intersection(&a, &c));
}

#[test]
fn spheres_apart() {
    let a = sphere((0.0, 0.0, 0.0), 1.0);
    let b = sphere((0.0, 0.0, 2.5), 1.0);
    assert!(!has_intersection(&a, &b));
}

#[test]
fn sphere_tangent_to_rectangle() {
    let s = sphere((0.0, 0.0, 1.0), 1.0);
    let r = rect_xy((0.0, 0.0, 0.0), 2.0, 2.0);
    assert_intersection(&intersect(&s, &r), true, &[vec3!(0.0, 0.0, 0.0)]);

    // tangent point outside the rectangle
    let r = rect_xy((3.0, 0.0, 0.0), 2.0, 2.0);
    assert!(!has_intersection(&s, &r));
}

#[test]
fn sphere_section_crossing_rectangle_edge() {
    // section at z = 0 has radius 0.8 about the origin
    let s = sphere((0.0, 0.0, 0.6), 1.0);
    let r = rect_xy((1.0, 0.0, 0.0), 1.0, 4.0);
    let y = (0.64f64 - 0.25).sqrt();
    assert_intersection(
        &intersect(&r, &s),
        true,
        &[vec3!(0.5, y, 0.0), vec3!(0.5, -y, 0.0)],
    );
}

#[test]
fn sphere_section_inside_triangle() {
    let s = sphere((0.0, 0.0, 1.0), 2.0f64.sqrt());
    let t = triangle((-5.0, -5.0, 0.0), (10.0, -5.0, 0.0), (-5.0, 10.0, 0.0));
    assert_intersection(&intersect(&s, &t), true, &[]);
}

#[test]
fn triangle_inside_sphere_section() {
    let s = sphere((0.0, 0.0, 0.0), 5.0);
    let t = triangle((0.0, 0.0, 1.0), (1.0, 0.0, 1.0), (0.0, 1.0, 1.0));
    assert_intersection(&intersect(&t, &s), true, &[]);
}

#[test]
fn sphere_beside_circle_plane() {
    let s = sphere((0.0, 0.0, 3.0), 1.0);
    let c = circle((0.0, 0.0, 0.0), (0.0, 0.0, 1.0), 5.0);
    assert!(!has_intersection(&s, &c));
}

#[test]
fn sphere_crossing_sector() {
    let s = sphere((2.0, 0.0, 0.0), 1.5);
    let sec = sector(
        (0.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 0.0),
        1.0,
        0.5,
    );
    // the section disk contains the tip of the sector's first radial edge and crosses its arc
    let result = intersect(&sec, &s);
    assert!(result.hit);
    for p in result.points.iter() {
        assert!(sec.contains_point_eps(*p, TEST_EPSILON));
        assert!(s.contains_point_eps(*p, TEST_EPSILON));
    }
}

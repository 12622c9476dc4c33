use shape_intersect::core::{
    math::{line_circle_intr, LineCircleIntr::*, Vector2},
    traits::FuzzyEq,
};

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (NoIntersect, NoIntersect) => {}
            (TangentIntersect { t0: a1 }, TangentIntersect { t0: a2 }) if a1.fuzzy_eq(a2) => {}
            (TwoIntersects { t0: a1, t1: b1 }, TwoIntersects { t0: a2, t1: b2 })
                if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

#[test]
fn no_intersect() {
    let p0 = Vector2::new(-2.0, 2.0);
    let p1 = Vector2::new(2.0, 2.0);
    let result = line_circle_intr(p0, p1, 1.0, Vector2::new(0.0, 0.0), 1e-10);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn tangent_intersect() {
    let p0 = Vector2::new(1.0, -4.0);
    let p1 = Vector2::new(1.0, 4.0);
    let result = line_circle_intr(p0, p1, 1.0, Vector2::new(0.0, 0.0), 1e-10);
    assert_case_eq!(result, TangentIntersect { t0: 0.5 });
}

#[test]
fn two_intersects_through_center() {
    let p0 = Vector2::new(-4.0, 0.0);
    let p1 = Vector2::new(4.0, 0.0);
    let result = line_circle_intr(p0, p1, 2.0, Vector2::new(0.0, 0.0), 1e-10);
    assert_case_eq!(result, TwoIntersects { t0: 0.25, t1: 0.75 });
}

#[test]
fn parametric_values_are_not_clamped() {
    // segment stops short of the circle, the supporting line still crosses it
    let p0 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(1.0, 0.0);
    let result = line_circle_intr(p0, p1, 1.0, Vector2::new(5.0, 0.0), 1e-10);
    assert_case_eq!(result, TwoIntersects { t0: 4.0, t1: 6.0 });
}

#[test]
fn vertical_and_horizontal_lines() {
    let center = Vector2::new(3.0, -2.0);
    let radius = 5.0;

    let result = line_circle_intr(
        Vector2::new(3.0, -10.0),
        Vector2::new(3.0, 10.0),
        radius,
        center,
        1e-10,
    );
    // crossing at y = -7 and y = 3
    assert_case_eq!(result, TwoIntersects { t0: 0.15, t1: 0.65 });

    let result = line_circle_intr(
        Vector2::new(10.0, -2.0),
        Vector2::new(-10.0, -2.0),
        radius,
        center,
        1e-10,
    );
    // crossing at x = 8 and x = -2
    assert_case_eq!(result, TwoIntersects { t0: 0.1, t1: 0.6 });
}

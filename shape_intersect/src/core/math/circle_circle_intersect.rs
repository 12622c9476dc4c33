use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two circles in the plane.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    /// No intersects found (circles are apart or one is inside the other).
    NoIntersect,
    /// Circles touch at one tangent point (internally or externally).
    TangentIntersect {
        /// Holds the tangent intersect point.
        point: Vector2<T>,
    },
    /// Circles cross at two points.
    TwoIntersects {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
    /// Circles are the same circle.
    Overlapping,
}

/// Finds the intersects between two circles.
///
/// Uses the radical line: with `d` the distance between centers, the chord midpoint lies at
/// `a = (r1² - r2² + d²) / (2d)` from `center1` and the half chord height is `h = sqrt(r1² - a²)`.
/// Distances within `epsilon` of `r1 + r2` or `|r1 - r2|` produce a single tangent point.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// let c1 = Vector2::new(0.0, 0.0);
/// let c2 = Vector2::new(3.0, 0.0);
/// if let CircleCircleIntr::TangentIntersect { point } = circle_circle_intr(1.0, c1, 2.0, c2, 1e-10) {
///     assert!(point.fuzzy_eq(Vector2::new(1.0, 0.0)));
/// } else {
///     unreachable!("expected tangent intersect");
/// }
/// ```
pub fn circle_circle_intr<T>(
    radius1: T,
    center1: Vector2<T>,
    radius2: T,
    center2: Vector2<T>,
    epsilon: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    // http://paulbourke.net/geometry/circlesphere/
    use CircleCircleIntr::*;

    let cv = center2 - center1;
    let d2 = cv.length_squared();
    let d = d2.sqrt();

    if d.fuzzy_eq_zero_eps(epsilon) {
        if radius1.fuzzy_eq_eps(radius2, epsilon) {
            return Overlapping;
        }
        return NoIntersect;
    }

    let radius_sum = radius1 + radius2;
    let radius_diff = (radius1 - radius2).abs();
    if d > radius_sum + epsilon || d < radius_diff - epsilon {
        return NoIntersect;
    }

    let rad1_sq = radius1 * radius1;
    let a = (rad1_sq - radius2 * radius2 + d2) / (T::two() * d);
    let midpoint = center1 + cv.scale(a / d);

    if d.fuzzy_eq_eps(radius_sum, epsilon) || d.fuzzy_eq_eps(radius_diff, epsilon) {
        return TangentIntersect { point: midpoint };
    }

    let h_sq = rad1_sq - a * a;
    if h_sq <= T::zero() {
        return TangentIntersect { point: midpoint };
    }

    let h_over_d = h_sq.sqrt() / d;
    let offset = Vector2::new(-cv.y, cv.x).scale(h_over_d);
    let point1 = midpoint + offset;
    let point2 = midpoint - offset;

    if point1.fuzzy_eq_eps(point2, epsilon) {
        return TangentIntersect { point: point1 };
    }

    TwoIntersects { point1, point2 }
}

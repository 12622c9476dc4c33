use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between a line and a circle.
#[derive(Debug, Copy, Clone)]
pub enum LineCircleIntr<T>
where
    T: Real,
{
    /// No intersects found.
    NoIntersect,
    /// Line is tangent to the circle.
    TangentIntersect {
        /// Line parametric value at the tangent point.
        t0: T,
    },
    /// Line crosses the circle.
    TwoIntersects {
        /// Smaller line parametric value.
        t0: T,
        /// Larger line parametric value.
        t1: T,
    },
}

/// Finds the intersects between the line `P(t) = p0 + t * (p1 - p0)` and a circle.
///
/// Parametric values returned are not restricted to `[0, 1]`. Intersects "snap" to a single
/// tangent intersect when the distance from the circle center to the line is within `epsilon` of
/// the radius. `p0` and `p1` must not be the same point.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::traits::*;
/// # use shape_intersect::core::math::*;
/// let p0 = Vector2::new(-2.0, 1.0);
/// let p1 = Vector2::new(2.0, 1.0);
/// if let LineCircleIntr::TangentIntersect { t0 } =
///     line_circle_intr(p0, p1, 1.0, Vector2::new(0.0, 0.0), 1e-10)
/// {
///     assert!(t0.fuzzy_eq(0.5));
/// } else {
///     unreachable!("expected tangent intersect");
/// }
/// ```
pub fn line_circle_intr<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    circle_center: Vector2<T>,
    epsilon: T,
) -> LineCircleIntr<T>
where
    T: Real,
{
    use LineCircleIntr::*;

    let d = p1 - p0;
    let len_sq = d.length_squared();
    debug_assert!(len_sq > T::zero(), "zero length line");

    // foot of the perpendicular from the circle center
    let t_mid = (circle_center - p0).dot(d) / len_sq;
    let foot = p0 + d.scale(t_mid);
    let dist = (circle_center - foot).length();

    if dist > radius + epsilon {
        return NoIntersect;
    }

    if dist.fuzzy_eq_eps(radius, epsilon) {
        return TangentIntersect { t0: t_mid };
    }

    // half chord length converted into parametric units
    let half_t = (radius * radius - dist * dist).abs().sqrt() / len_sq.sqrt();
    TwoIntersects {
        t0: t_mid - half_t,
        t1: t_mid + half_t,
    }
}

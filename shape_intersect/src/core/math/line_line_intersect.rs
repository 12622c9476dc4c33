use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two lines in the plane.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Lines are parallel and distinct, no intersect.
    Parallel,
    /// Lines are parallel and lie on top of each other.
    Collinear,
    /// Lines cross at a single point.
    Intersect {
        /// Parametric value for the intersect on the first line.
        seg1_t: T,
        /// Parametric value for the intersect on the second line.
        seg2_t: T,
    },
}

/// Finds the intersect between two lines, each given by two points.
///
/// The first line is `P(s) = v1 + s * (v2 - v1)` and the second `Q(t) = u1 + t * (u2 - u1)`. The
/// parametric values returned are not limited to `[0, 1]`, callers restrict them to the domain of
/// the shape (segment, ray, or infinite line) being tested.
///
/// Lines are considered parallel when the sine of the angle between them is below `epsilon`
/// (the perpendicular dot product of the normalized directions), and collinear when additionally
/// `u1` is within `epsilon` distance of the first line. Both lines must have non-zero length.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::traits::*;
/// # use shape_intersect::core::math::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(2.0, 2.0);
/// let u1 = Vector2::new(0.0, 2.0);
/// let u2 = Vector2::new(2.0, 0.0);
/// if let LineLineIntr::Intersect { seg1_t, seg2_t } = line_line_intr(v1, v2, u1, u2, 1e-10) {
///     assert!(seg1_t.fuzzy_eq(0.5));
///     assert!(seg2_t.fuzzy_eq(0.5));
/// } else {
///     unreachable!("expected lines to intersect");
/// }
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // parametric form solved with perpendicular dot products
    // http://geomalgorithms.com/a05-_intersect-1.html
    use LineLineIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let w = v1 - u1;
    let v_len = v.length();
    let u_len = u.length();
    debug_assert!(v_len > T::zero() && u_len > T::zero(), "zero length line");

    let v_pdot_u = v.perp_dot(u);
    if !(v_pdot_u / (v_len * u_len)).fuzzy_eq_zero_eps(epsilon) {
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        return Intersect { seg1_t, seg2_t };
    }

    // distance of u1 from the first line
    if (v.perp_dot(w) / v_len).fuzzy_eq_zero_eps(epsilon) {
        Collinear
    } else {
        Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn parameters_outside_unit_range_are_returned() {
        let v1 = Vector2::new(0.0, 0.0);
        let v2 = Vector2::new(1.0, 0.0);
        let u1 = Vector2::new(3.0, -1.0);
        let u2 = Vector2::new(3.0, 1.0);
        match line_line_intr(v1, v2, u1, u2, 1e-10) {
            LineLineIntr::Intersect { seg1_t, seg2_t } => {
                assert!(seg1_t.fuzzy_eq(3.0));
                assert!(seg2_t.fuzzy_eq(0.5));
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn parallel_and_collinear() {
        let v1 = Vector2::new(0.0, 0.0);
        let v2 = Vector2::new(1.0, 1.0);
        assert!(matches!(
            line_line_intr(v1, v2, Vector2::new(0.0, 1.0), Vector2::new(1.0, 2.0), 1e-10),
            LineLineIntr::Parallel
        ));
        assert!(matches!(
            line_line_intr(v1, v2, Vector2::new(3.0, 3.0), Vector2::new(2.0, 2.0), 1e-10),
            LineLineIntr::Collinear
        ));
    }
}

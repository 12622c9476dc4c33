use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Returns `true` if `value` is neither NaN nor infinite.
#[inline]
pub fn is_finite<T>(value: T) -> bool
where
    T: Real,
{
    // NaN fails every comparison
    value.abs() <= num_traits::real::Real::max_value()
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// # use shape_intersect::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(2.0 * PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Tests if `test_angle` is within the `sweep_angle` starting at `start_angle`.
///
/// If `sweep_angle` is positive the sweep is counter clockwise, otherwise it is clockwise. A sweep
/// of a full turn (or more) contains every angle. Inclusion is fuzzy by `epsilon` (in radians) on
/// both ends of the sweep, including across the `0`/`2PI` wrap.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// use std::f64::consts::PI;
/// assert!(angle_is_within_sweep_eps(PI / 4.0, 0.0, PI / 2.0, 1e-10));
/// assert!(angle_is_within_sweep_eps(-PI / 4.0, 0.0, -PI / 2.0, 1e-10));
/// assert!(!angle_is_within_sweep_eps(-PI / 4.0, 0.0, PI / 2.0, 1e-10));
/// // fuzzy at the start of the sweep even though the angle wraps to just under 2PI
/// assert!(angle_is_within_sweep_eps(-1e-12, 0.0, PI / 2.0, 1e-10));
/// ```
#[inline]
pub fn angle_is_within_sweep_eps<T>(
    test_angle: T,
    start_angle: T,
    sweep_angle: T,
    epsilon: T,
) -> bool
where
    T: Real,
{
    if sweep_angle.abs() + epsilon >= T::tau() {
        return true;
    }

    let (from, to) = if sweep_angle < T::zero() {
        (start_angle + sweep_angle, start_angle)
    } else {
        (start_angle, start_angle + sweep_angle)
    };

    let end_sweep = normalize_radians(to - from);
    let mid_sweep = normalize_radians(test_angle - from);

    mid_sweep < end_sweep + epsilon || mid_sweep > T::tau() - epsilon
}

/// Same as [angle_is_within_sweep_eps] using default epsilon.
#[inline]
pub fn angle_is_within_sweep<T>(test_angle: T, start_angle: T, sweep_angle: T) -> bool
where
    T: Real,
{
    angle_is_within_sweep_eps(test_angle, start_angle, sweep_angle, T::fuzzy_epsilon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn sweep_full_turn_contains_all() {
        for i in 0..16 {
            let a = i as f64 * PI / 8.0 - PI;
            assert!(angle_is_within_sweep(a, 1.0, 2.0 * PI));
            assert!(angle_is_within_sweep(a, 1.0, -2.0 * PI));
        }
    }

    #[test]
    fn sweep_end_is_inclusive() {
        assert!(angle_is_within_sweep(PI / 2.0, 0.0, PI / 2.0));
        assert!(angle_is_within_sweep(-PI / 2.0, 0.0, -PI / 2.0));
        assert!(!angle_is_within_sweep(PI / 2.0 + 1e-6, 0.0, PI / 2.0));
    }

    #[test]
    fn finite_checks() {
        assert!(is_finite(1.0f64));
        assert!(!is_finite(f64::NAN));
        assert!(!is_finite(f64::INFINITY));
        assert!(!is_finite(f64::NEG_INFINITY));
    }
}

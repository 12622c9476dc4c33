use crate::core::{math::Vector3, traits::Real};

/// Removes points within `pos_equal_eps` distance of an earlier point, in place.
///
/// The first point of each cluster is kept as its representative and relative order is preserved.
/// Candidate counts are small (bounded by edge pair counts) so the quadratic scan is used.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// # use shape_intersect::intersect::*;
/// let mut points = vec![
///     Vector3::new(1.0, 1.0, 0.0),
///     Vector3::new(0.0, 0.0, 0.0),
///     Vector3::new(1.0, 1.0 + 1e-12, 0.0),
/// ];
/// dedup_points(&mut points, 1e-10);
/// assert_eq!(points.len(), 2);
/// ```
pub fn dedup_points<T>(points: &mut Vec<Vector3<T>>, pos_equal_eps: T)
where
    T: Real,
{
    let mut kept = 0;
    for i in 0..points.len() {
        let p = points[i];
        if points[..kept]
            .iter()
            .all(|q| q.distance(p) >= pos_equal_eps)
        {
            points[kept] = p;
            kept += 1;
        }
    }

    points.truncate(kept);
}

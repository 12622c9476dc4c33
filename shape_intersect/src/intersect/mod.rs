//! Pairwise intersect of [Shape] values.
//!
//! The entry points are [intersect] (hit flag plus deduplicated intersect points) and
//! [has_intersection] (hit flag only, stops at the first contact found). Both are thin wrappers
//! around [visit_intersects] which streams [Contact] values to a visitor. Algorithms are looked up
//! by the canonically ordered pair of shape kinds ([pair_algorithm]), a pair is served by the same
//! algorithm in either argument order.
mod classify;
mod coplanar;
mod crossing;
mod curved;
mod dedup;
mod dispatch;
mod linear;
mod sphere;
mod types;

pub use classify::classify_planar_pair;
pub use dedup::dedup_points;
pub use dispatch::{pair_algorithm, PairAlgorithm};
pub use types::*;

use crate::{
    core::{
        traits::{ControlFlow, Real},
        Control,
    },
    shape::Shape,
};
use dispatch::{canonical_pair, visit_pair};

/// Returns `true` if the bounding spheres of both shapes are known and apart by more than
/// `epsilon`, in which case the shapes cannot intersect.
fn bounding_spheres_apart<T>(a: &Shape<T>, b: &Shape<T>, epsilon: T) -> bool
where
    T: Real,
{
    match (a.bounding_sphere(), b.bounding_sphere()) {
        (Some((c1, r1)), Some((c2, r2))) => c1.distance(c2) > r1 + r2 + epsilon,
        _ => false,
    }
}

/// Visit all the intersect contacts between two shapes, returning an error if no algorithm is
/// registered for the pair of shape kinds.
///
/// Contacts may repeat (e.g. a polygon vertex found from both of its edges), see [intersect] for
/// the deduplicated points. The visitor may return a break to stop visiting early.
pub fn try_visit_intersects_opt<T, C, V>(
    a: &Shape<T>,
    b: &Shape<T>,
    visitor: &mut V,
    options: &IntersectOptions<T>,
) -> Result<C, IntersectError>
where
    T: Real,
    C: ControlFlow,
    V: ContactVisitor<T, C>,
{
    let (first, second) = canonical_pair(a, b);
    if bounding_spheres_apart(first, second, options.epsilon) {
        // still report an unregistered pair
        if pair_algorithm(first.kind(), second.kind()).is_none() {
            return Err(IntersectError::UnsupportedPair {
                first: first.kind(),
                second: second.kind(),
            });
        }
        return Ok(C::continuing());
    }

    visit_pair(first, second, options.epsilon, visitor)
}

/// Same as [visit_intersects_opt] using default options.
#[inline]
pub fn visit_intersects<T, C, V>(a: &Shape<T>, b: &Shape<T>, visitor: &mut V) -> C
where
    T: Real,
    C: ControlFlow,
    V: ContactVisitor<T, C>,
{
    visit_intersects_opt(a, b, visitor, &Default::default())
}

/// Visit all the intersect contacts between two shapes.
///
/// An unregistered shape pair is logged as a warning and visits nothing, use
/// [try_visit_intersects_opt] to get the error instead.
pub fn visit_intersects_opt<T, C, V>(
    a: &Shape<T>,
    b: &Shape<T>,
    visitor: &mut V,
    options: &IntersectOptions<T>,
) -> C
where
    T: Real,
    C: ControlFlow,
    V: ContactVisitor<T, C>,
{
    match try_visit_intersects_opt(a, b, visitor, options) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, treating as no intersect", e);
            C::continuing()
        }
    }
}

/// Same as [intersect_opt] using default options.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// # use shape_intersect::shape::*;
/// # use shape_intersect::intersect::*;
/// let a: Shape = Segment::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 0.0))
///     .unwrap()
///     .into();
/// let b: Shape = Segment::new(Vector3::new(0.0, 2.0, 0.0), Vector3::new(2.0, 0.0, 0.0))
///     .unwrap()
///     .into();
/// let result = intersect(&a, &b);
/// assert!(result.hit);
/// assert_eq!(result.points.len(), 1);
/// assert!(result.points[0].fuzzy_eq(Vector3::new(1.0, 1.0, 0.0)));
/// ```
#[inline]
pub fn intersect<T>(a: &Shape<T>, b: &Shape<T>) -> Intersection<T>
where
    T: Real,
{
    intersect_opt(a, b, &Default::default())
}

/// Find the intersect of two shapes: whether they intersect and the (deduplicated) intersect
/// points.
///
/// An unregistered shape pair is logged as a warning and gives no intersect, use
/// [try_intersect_opt] to get the error instead.
pub fn intersect_opt<T>(
    a: &Shape<T>,
    b: &Shape<T>,
    options: &IntersectOptions<T>,
) -> Intersection<T>
where
    T: Real,
{
    match try_intersect_opt(a, b, options) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("{}, treating as no intersect", e);
            Intersection::none()
        }
    }
}

/// Find the intersect of two shapes, returning an error if no algorithm is registered for the
/// pair of shape kinds.
pub fn try_intersect_opt<T>(
    a: &Shape<T>,
    b: &Shape<T>,
    options: &IntersectOptions<T>,
) -> Result<Intersection<T>, IntersectError>
where
    T: Real,
{
    let mut result = Intersection::none();
    let mut visitor = |contact: Contact<T>| {
        result.hit = true;
        if let Contact::Point(p) = contact {
            result.points.push(p);
        }
        Control::<()>::Continue
    };

    try_visit_intersects_opt(a, b, &mut visitor, options)?;
    dedup_points(&mut result.points, options.pos_equal_eps);
    Ok(result)
}

/// Same as [has_intersection_opt] using default options.
#[inline]
pub fn has_intersection<T>(a: &Shape<T>, b: &Shape<T>) -> bool
where
    T: Real,
{
    has_intersection_opt(a, b, &Default::default())
}

/// Returns `true` if the two shapes intersect, stopping at the first contact found.
///
/// Always agrees with the `hit` of [intersect_opt] given the same options. An unregistered shape
/// pair is logged as a warning and returns `false`.
pub fn has_intersection_opt<T>(
    a: &Shape<T>,
    b: &Shape<T>,
    options: &IntersectOptions<T>,
) -> bool
where
    T: Real,
{
    match try_has_intersection_opt(a, b, options) {
        Ok(hit) => hit,
        Err(e) => {
            log::warn!("{}, treating as no intersect", e);
            false
        }
    }
}

/// Returns `true` if the two shapes intersect, or an error if no algorithm is registered for the
/// pair of shape kinds.
pub fn try_has_intersection_opt<T>(
    a: &Shape<T>,
    b: &Shape<T>,
    options: &IntersectOptions<T>,
) -> Result<bool, IntersectError>
where
    T: Real,
{
    let mut visitor = |_: Contact<T>| Control::Break(());
    let result = try_visit_intersects_opt(a, b, &mut visitor, options)?;
    Ok(result.should_break())
}

use super::{
    classify::classify_planar_pair,
    coplanar::visit_coplanar_planar,
    crossing::visit_crossing_planar,
    linear::{visit_linear_linear, visit_linear_planar, visit_linear_sphere},
    sphere::{visit_planar_sphere, visit_sphere_sphere},
    ContactVisitor, IntersectError,
};
use crate::{
    core::{
        math::PlanePlaneIntr,
        traits::{ControlFlow, Real},
    },
    shape::{Shape, ShapeKind},
};

/// Intersect algorithm family for a pair of shape kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PairAlgorithm {
    LinearLinear,
    LinearPlanar,
    LinearSphere,
    PlanarPlanar,
    PlanarSphere,
    SphereSphere,
}

/// Dispatch table lookup: the algorithm registered for the canonically ordered pair of kinds.
///
/// Pairs must be ordered so that `first <= second` (see [ShapeKind::ALL] for the order), the
/// reversed pairs are served by swapping the operands. Returns `None` for a pair with no
/// registered algorithm (which includes every non canonical pair).
///
/// # Examples
///
/// ```
/// # use shape_intersect::shape::*;
/// # use shape_intersect::intersect::*;
/// assert_eq!(
///     pair_algorithm(ShapeKind::Ray, ShapeKind::Circle),
///     Some(PairAlgorithm::LinearPlanar)
/// );
/// assert_eq!(pair_algorithm(ShapeKind::Circle, ShapeKind::Ray), None);
/// ```
pub fn pair_algorithm(first: ShapeKind, second: ShapeKind) -> Option<PairAlgorithm> {
    use ShapeKind::*;
    let algorithm = match (first, second) {
        _ if second < first => return None,
        (Line | Ray | Segment, Line | Ray | Segment) => PairAlgorithm::LinearLinear,
        (Line | Ray | Segment, Triangle | Rectangle | Circle | Sector) => {
            PairAlgorithm::LinearPlanar
        }
        (Line | Ray | Segment, Sphere) => PairAlgorithm::LinearSphere,
        (Triangle | Rectangle | Circle | Sector, Triangle | Rectangle | Circle | Sector) => {
            PairAlgorithm::PlanarPlanar
        }
        (Triangle | Rectangle | Circle | Sector, Sphere) => PairAlgorithm::PlanarSphere,
        (Sphere, Sphere) => PairAlgorithm::SphereSphere,
        _ => return None,
    };

    Some(algorithm)
}

/// Orders the pair so the first shape's kind is not after the second's.
#[inline]
pub(crate) fn canonical_pair<'a, T>(
    a: &'a Shape<T>,
    b: &'a Shape<T>,
) -> (&'a Shape<T>, &'a Shape<T>)
where
    T: Real,
{
    if b.kind() < a.kind() {
        (b, a)
    } else {
        (a, b)
    }
}

/// Runs the algorithm registered for the (canonically ordered) pair, visiting the contacts.
pub(crate) fn visit_pair<T, C, V>(
    first: &Shape<T>,
    second: &Shape<T>,
    epsilon: T,
    visitor: &mut V,
) -> Result<C, IntersectError>
where
    T: Real,
    C: ControlFlow,
    V: ContactVisitor<T, C>,
{
    let unsupported = || IntersectError::UnsupportedPair {
        first: first.kind(),
        second: second.kind(),
    };

    let algorithm = pair_algorithm(first.kind(), second.kind()).ok_or_else(unsupported)?;
    log::trace!(
        "dispatching ({}, {}) to {:?}",
        first.kind(),
        second.kind(),
        algorithm
    );

    let result = match algorithm {
        PairAlgorithm::LinearLinear => {
            let a = first.as_linear().ok_or_else(unsupported)?;
            let b = second.as_linear().ok_or_else(unsupported)?;
            visit_linear_linear(a, b, epsilon, visitor)
        }
        PairAlgorithm::LinearPlanar => {
            let a = first.as_linear().ok_or_else(unsupported)?;
            let b = second.as_planar().ok_or_else(unsupported)?;
            visit_linear_planar(a, b, epsilon, visitor)
        }
        PairAlgorithm::LinearSphere => {
            let a = first.as_linear().ok_or_else(unsupported)?;
            let b = second.as_sphere().ok_or_else(unsupported)?;
            visit_linear_sphere(a, b, epsilon, visitor)
        }
        PairAlgorithm::PlanarPlanar => {
            let a = first.as_planar().ok_or_else(unsupported)?;
            let b = second.as_planar().ok_or_else(unsupported)?;
            match classify_planar_pair(a, b, epsilon) {
                PlanePlaneIntr::Parallel { .. } => C::continuing(),
                PlanePlaneIntr::Coplanar => visit_coplanar_planar(a, b, epsilon, visitor),
                PlanePlaneIntr::Crossing { point, direction } => {
                    visit_crossing_planar(a, b, point, direction, epsilon, visitor)
                }
            }
        }
        PairAlgorithm::PlanarSphere => {
            let a = first.as_planar().ok_or_else(unsupported)?;
            let b = second.as_sphere().ok_or_else(unsupported)?;
            visit_planar_sphere(a, b, epsilon, visitor)
        }
        PairAlgorithm::SphereSphere => {
            let a = first.as_sphere().ok_or_else(unsupported)?;
            let b = second.as_sphere().ok_or_else(unsupported)?;
            visit_sphere_sphere(a, b, epsilon, visitor)
        }
    };

    Ok(result)
}

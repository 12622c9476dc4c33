use super::{curved::arc_line_intr, ContactVisitor};
use crate::{
    core::{
        math::Vector3,
        traits::{ControlFlow, Real},
        try_cf,
    },
    shape::{BoundaryPiece, ParamDomain, PlanarShape},
};

/// Visits the intersects of two planar shapes whose planes cross along a line.
///
/// Every boundary piece of each shape is solved against the other shape's plane and the points
/// found are kept when the other shape contains them. `line_point` and unit `line_dir` describe
/// the line where the planes cross (used for arcs).
pub(crate) fn visit_crossing_planar<T, C, A, B, V>(
    a: &A,
    b: &B,
    line_point: Vector3<T>,
    line_dir: Vector3<T>,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    A: PlanarShape<Num = T> + ?Sized,
    B: PlanarShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    try_cf!(visit_boundary_vs_plane(
        a, b, line_point, line_dir, epsilon, visitor
    ));
    visit_boundary_vs_plane(b, a, line_point, line_dir, epsilon, visitor)
}

fn visit_boundary_vs_plane<T, C, S, O, V>(
    source: &S,
    other: &O,
    line_point: Vector3<T>,
    line_dir: Vector3<T>,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    S: PlanarShape<Num = T> + ?Sized,
    O: PlanarShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    let plane = other.plane();
    for piece in source.boundary() {
        match piece {
            BoundaryPiece::Edge { start, end } => {
                let v = end - start;
                // edge parallel to the plane contributes no point, its neighbors cover its ends
                let t = match plane.line_intr_eps(start, v, epsilon) {
                    Some(t) => t,
                    None => continue,
                };

                if !ParamDomain::UnitInterval.contains_eps(t, v.length(), epsilon) {
                    continue;
                }

                let p = start + v.scale(t);
                if other.contains_point_eps(p, epsilon) {
                    try_cf!(visitor.visit_point(p));
                }
            }
            BoundaryPiece::Arc(arc) => {
                try_cf!(arc_line_intr(&arc, line_point, line_dir, epsilon, |p| {
                    if other.contains_point_eps(p, epsilon) {
                        visitor.visit_point(p)
                    } else {
                        C::continuing()
                    }
                }));
            }
        }
    }

    C::continuing()
}

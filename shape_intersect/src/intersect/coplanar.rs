use super::{
    curved::{arc_arc_intr, edge_arc_intr, LocalArc},
    Contact, ContactVisitor,
};
use crate::{
    core::{
        math::{line_line_intr, min_max, LineLineIntr, PlaneBasis, Vector2},
        traits::{ControlFlow, Real},
        try_cf,
    },
    shape::{BoundaryPiece, ParamDomain, PlanarShape},
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};

/// Boundary piece projected into the local 2D coordinates of a plane basis.
#[derive(Debug, Copy, Clone)]
pub(crate) enum LocalPiece<T> {
    Edge { start: Vector2<T>, end: Vector2<T> },
    Arc(LocalArc<T>),
}

impl<T> LocalPiece<T>
where
    T: Real,
{
    /// Project `piece` into `basis`.
    ///
    /// Arcs whose normal opposes the basis normal have their sweep negated so the sweep direction
    /// stays correct in the local coordinates.
    pub fn project(piece: &BoundaryPiece<T>, basis: &PlaneBasis<T>) -> Self {
        match piece {
            BoundaryPiece::Edge { start, end } => LocalPiece::Edge {
                start: basis.to_local(*start),
                end: basis.to_local(*end),
            },
            BoundaryPiece::Arc(arc) => {
                let sweep = if arc.normal.dot(basis.normal) < T::zero() {
                    -arc.sweep
                } else {
                    arc.sweep
                };
                LocalPiece::Arc(LocalArc {
                    center: basis.to_local(arc.center),
                    radius: arc.radius,
                    start_angle: basis.dir_to_local(arc.start_dir).angle(),
                    sweep,
                })
            }
        }
    }

    /// Axis aligned bounding box, arcs use the box of their whole circle.
    pub fn bounding_box(&self) -> AABB<T> {
        match self {
            LocalPiece::Edge { start, end } => {
                let (min_x, max_x) = min_max(start.x, end.x);
                let (min_y, max_y) = min_max(start.y, end.y);
                AABB::new(min_x, min_y, max_x, max_y)
            }
            LocalPiece::Arc(arc) => AABB::new(
                arc.center.x - arc.radius,
                arc.center.y - arc.radius,
                arc.center.x + arc.radius,
                arc.center.y + arc.radius,
            ),
        }
    }
}

/// Project the boundary of `shape` into `basis`.
pub(crate) fn project_boundary<T, S>(shape: &S, basis: &PlaneBasis<T>) -> Vec<LocalPiece<T>>
where
    T: Real,
    S: PlanarShape<Num = T> + ?Sized,
{
    shape
        .boundary()
        .iter()
        .map(|piece| LocalPiece::project(piece, basis))
        .collect()
}

fn build_spatial_index<T>(pieces: &[LocalPiece<T>], epsilon: T) -> Option<StaticAABB2DIndex<T>>
where
    T: Real,
{
    let mut builder = StaticAABB2DIndexBuilder::new(pieces.len());
    for piece in pieces {
        let bb = piece.bounding_box();
        builder.add(
            bb.min_x - epsilon,
            bb.min_y - epsilon,
            bb.max_x + epsilon,
            bb.max_y + epsilon,
        );
    }

    builder.build().ok()
}

/// Visits the crossing point of two straight edges lying in the same plane.
///
/// Parallel and collinear edges contribute nothing, where a collinear overlap meets the rest of
/// the boundary it is found by the neighboring edges.
fn edge_edge_intr<T, C, F>(
    start1: Vector2<T>,
    end1: Vector2<T>,
    start2: Vector2<T>,
    end2: Vector2<T>,
    epsilon: T,
    mut visit: F,
) -> C
where
    T: Real,
    C: ControlFlow,
    F: FnMut(Vector2<T>) -> C,
{
    if let LineLineIntr::Intersect { seg1_t, seg2_t } =
        line_line_intr(start1, end1, start2, end2, epsilon)
    {
        let v1 = end1 - start1;
        let len1 = v1.length();
        let len2 = (end2 - start2).length();
        if ParamDomain::UnitInterval.contains_eps(seg1_t, len1, epsilon)
            && ParamDomain::UnitInterval.contains_eps(seg2_t, len2, epsilon)
        {
            try_cf!(visit(start1 + v1.scale(seg1_t)));
        }
    }

    C::continuing()
}

/// Visits the intersects between two projected boundary pieces.
pub(crate) fn piece_piece_intr<T, C, F>(
    piece1: &LocalPiece<T>,
    piece2: &LocalPiece<T>,
    epsilon: T,
    visit: F,
) -> C
where
    T: Real,
    C: ControlFlow,
    F: FnMut(Vector2<T>) -> C,
{
    match (piece1, piece2) {
        (LocalPiece::Edge { start: s1, end: e1 }, LocalPiece::Edge { start: s2, end: e2 }) => {
            edge_edge_intr(*s1, *e1, *s2, *e2, epsilon, visit)
        }
        (LocalPiece::Edge { start, end }, LocalPiece::Arc(arc))
        | (LocalPiece::Arc(arc), LocalPiece::Edge { start, end }) => {
            edge_arc_intr(*start, *end, arc, epsilon, visit)
        }
        (LocalPiece::Arc(arc1), LocalPiece::Arc(arc2)) => arc_arc_intr(arc1, arc2, epsilon, visit),
    }
}

/// Visits the intersects of two planar shapes lying in the same plane.
///
/// Both boundaries are projected into `a`'s plane basis and every pair of pieces whose bounding
/// boxes overlap is intersected, points are lifted back into 3D. If no boundary pieces meet then
/// the shapes overlap only if one lies inside the other, tested with a single boundary point of
/// each, and that overlap is reported as [Contact::Region].
pub(crate) fn visit_coplanar_planar<T, C, A, B, V>(
    a: &A,
    b: &B,
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
    let basis = a.basis();
    let pieces1 = project_boundary(a, &basis);
    let pieces2 = project_boundary(b, &basis);
    let spatial_index = build_spatial_index(&pieces2, epsilon);

    let mut found_point = false;
    let mut query_results = Vec::new();
    for piece1 in pieces1.iter() {
        query_results.clear();
        match &spatial_index {
            Some(index) => {
                let bb = piece1.bounding_box();
                query_results.extend(index.query(
                    bb.min_x - epsilon,
                    bb.min_y - epsilon,
                    bb.max_x + epsilon,
                    bb.max_y + epsilon,
                ));
            }
            None => query_results.extend(0..pieces2.len()),
        }

        for &j in query_results.iter() {
            try_cf!(piece_piece_intr(piece1, &pieces2[j], epsilon, |p| {
                found_point = true;
                visitor.visit_point(basis.to_world(p))
            }));
        }
    }

    if found_point {
        return C::continuing();
    }

    let a_boundary = a.boundary();
    let b_boundary = b.boundary();
    let b_in_a = b_boundary
        .first()
        .map_or(false, |piece| a.contains_point_eps(piece.start_point(), epsilon));
    let a_in_b = a_boundary
        .first()
        .map_or(false, |piece| b.contains_point_eps(piece.start_point(), epsilon));

    if b_in_a || a_in_b {
        log::debug!("coplanar shapes overlap without boundary crossings (containment)");
        return visitor.visit_contact(Contact::Region);
    }

    C::continuing()
}

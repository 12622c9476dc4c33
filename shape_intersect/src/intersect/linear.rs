use super::{coplanar::LocalPiece, Contact, ContactVisitor};
use crate::{
    core::{
        math::{line_circle_intr, line_line_intr, LineCircleIntr, LineLineIntr},
        traits::{ControlFlow, Real},
        try_cf,
    },
    shape::{BoundaryPiece, LinearShape, ParamDomain, PlanarShape, Sphere},
};

/// Visits the intersects between two line family shapes.
///
/// Non parallel lines meet at their closest approach points when those are within `epsilon` of
/// each other (the midpoint of the two is reported). Parallel lines on the same line report the
/// finite ends of their overlap, an overlap without finite ends (two infinite lines) is a
/// [Contact::Region].
pub(crate) fn visit_linear_linear<T, C, A, B, V>(
    a: &A,
    b: &B,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    A: LinearShape<Num = T> + ?Sized,
    B: LinearShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    let o1 = a.origin();
    let v1 = a.vector();
    let o2 = b.origin();
    let v2 = b.vector();
    let u1 = v1.normalize();
    let u2 = v2.normalize();

    if u1.cross(u2).length() < epsilon {
        return visit_colinear_overlap(a, b, epsilon, visitor);
    }

    let w0 = o1 - o2;
    let aa = v1.dot(v1);
    let bb = v1.dot(v2);
    let cc = v2.dot(v2);
    let dd = v1.dot(w0);
    let ee = v2.dot(w0);
    let denom = aa * cc - bb * bb;
    let t1 = (bb * ee - cc * dd) / denom;
    let t2 = (aa * ee - bb * dd) / denom;

    let p1 = o1 + v1.scale(t1);
    let p2 = o2 + v2.scale(t2);
    if p1.distance(p2) > epsilon {
        return C::continuing();
    }

    if a.domain_contains_eps(t1, epsilon) && b.domain_contains_eps(t2, epsilon) {
        return visitor.visit_point(p1.midpoint(p2));
    }

    C::continuing()
}

fn visit_colinear_overlap<T, C, A, B, V>(a: &A, b: &B, epsilon: T, visitor: &mut V) -> C
where
    T: Real,
    C: ControlFlow,
    A: LinearShape<Num = T> + ?Sized,
    B: LinearShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    let o1 = a.origin();
    let u1 = a.direction();
    let w = b.origin() - o1;
    if w.cross(u1).length() > epsilon {
        // parallel and apart
        return C::continuing();
    }

    // work in distances along `u1` measured from `o1`, `None` is unbounded
    let len1 = a.vector().length();
    let len2 = b.vector().length();
    let domain1 = a.domain();
    let domain2 = b.domain();
    let lower1 = domain1.lower().map(|t: T| t * len1);
    let upper1 = domain1.upper().map(|t: T| t * len1);

    let s0 = w.dot(u1);
    let sign = b.direction().dot(u1);
    let map2 = |t: T| s0 + sign * t * len2;
    let (lower2, upper2) = if sign > T::zero() {
        (domain2.lower().map(map2), domain2.upper().map(map2))
    } else {
        (domain2.upper().map(map2), domain2.lower().map(map2))
    };

    let lower = match (lower1, lower2) {
        (Some(x), Some(y)) => Some(num_traits::real::Real::max(x, y)),
        (x, None) => x,
        (None, y) => y,
    };
    let upper = match (upper1, upper2) {
        (Some(x), Some(y)) => Some(num_traits::real::Real::min(x, y)),
        (x, None) => x,
        (None, y) => y,
    };

    match (lower, upper) {
        (None, None) => visitor.visit_contact(Contact::Region),
        (Some(lo), Some(hi)) => {
            if lo > hi + epsilon {
                return C::continuing();
            }
            try_cf!(visitor.visit_point(o1 + u1.scale(lo)));
            if (hi - lo).abs() > epsilon {
                try_cf!(visitor.visit_point(o1 + u1.scale(hi)));
            }
            C::continuing()
        }
        (Some(s), None) | (None, Some(s)) => visitor.visit_point(o1 + u1.scale(s)),
    }
}

/// Visits the intersects between a line family shape and a planar shape.
///
/// A line crossing the plane meets it at a single parametric value which must be in the line's
/// domain and inside the planar shape. A line lying in the plane reports where it crosses the
/// shape's boundary plus its finite end points that lie inside the shape.
pub(crate) fn visit_linear_planar<T, C, L, P, V>(
    line: &L,
    planar: &P,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    L: LinearShape<Num = T> + ?Sized,
    P: PlanarShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    let origin = line.origin();
    let v = line.vector();
    let plane = planar.plane();

    if let Some(t) = plane.line_intr_eps(origin, v, epsilon) {
        if line.domain_contains_eps(t, epsilon) {
            let p = line.point_at(t);
            if planar.contains_point_eps(p, epsilon) {
                return visitor.visit_point(p);
            }
        }
        return C::continuing();
    }

    if !plane.contains_point_eps(origin, epsilon) {
        // parallel and off the plane
        return C::continuing();
    }

    let basis = planar.basis();
    let p0 = basis.to_local(origin);
    let p1 = p0 + basis.dir_to_local(v);
    let mut visit_t = |t: T, piece: &BoundaryPiece<T>| {
        if !line.domain_contains_eps(t, epsilon) {
            return C::continuing();
        }
        let p = line.point_at(t);
        let on_piece = match piece {
            BoundaryPiece::Edge { start, end } => {
                let ev = *end - *start;
                ParamDomain::UnitInterval.contains_eps(
                    (p - *start).dot(ev) / ev.length_squared(),
                    ev.length(),
                    epsilon,
                )
            }
            BoundaryPiece::Arc(arc) => arc.covers_angle_of_eps(p, epsilon),
        };
        if on_piece {
            visitor.visit_point(p)
        } else {
            C::continuing()
        }
    };

    for piece in planar.boundary() {
        match LocalPiece::project(&piece, &basis) {
            LocalPiece::Edge { start, end } => {
                if let LineLineIntr::Intersect { seg1_t, .. } =
                    line_line_intr(p0, p1, start, end, epsilon)
                {
                    try_cf!(visit_t(seg1_t, &piece));
                }
            }
            LocalPiece::Arc(arc) => match line_circle_intr(p0, p1, arc.radius, arc.center, epsilon)
            {
                LineCircleIntr::NoIntersect => {}
                LineCircleIntr::TangentIntersect { t0 } => {
                    try_cf!(visit_t(t0, &piece));
                }
                LineCircleIntr::TwoIntersects { t0, t1 } => {
                    try_cf!(visit_t(t0, &piece));
                    try_cf!(visit_t(t1, &piece));
                }
            },
        }
    }

    for t in [line.domain().lower(), line.domain().upper()]
        .into_iter()
        .flatten()
    {
        let p = line.point_at(t);
        if planar.contains_point_eps(p, epsilon) {
            try_cf!(visitor.visit_point(p));
        }
    }

    C::continuing()
}

/// Visits the intersects between a line family shape and a solid sphere.
///
/// Reports where the line crosses (or touches) the sphere surface within the line's domain plus
/// the line's finite end points that lie inside the sphere.
pub(crate) fn visit_linear_sphere<T, C, L, V>(
    line: &L,
    sphere: &Sphere<T>,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    L: LinearShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    let len = line.vector().length();
    let u = line.direction();
    let m = line.origin() - sphere.center;
    let b = m.dot(u);
    let dist_sq = num_traits::real::Real::max(m.length_squared() - b * b, T::zero());
    let dist = dist_sq.sqrt();
    let r = sphere.radius;
    if dist > r + epsilon {
        return C::continuing();
    }

    let mut visit_s = |s: T| {
        let t = s / len;
        if line.domain_contains_eps(t, epsilon) {
            visitor.visit_point(line.point_at(t))
        } else {
            C::continuing()
        }
    };

    if (dist - r).abs() <= epsilon {
        try_cf!(visit_s(-b));
    } else {
        let h = (r * r - dist_sq).sqrt();
        try_cf!(visit_s(-b - h));
        try_cf!(visit_s(-b + h));
    }

    for t in [line.domain().lower(), line.domain().upper()]
        .into_iter()
        .flatten()
    {
        let p = line.point_at(t);
        if sphere.contains_point_eps(p, epsilon) {
            try_cf!(visitor.visit_point(p));
        }
    }

    C::continuing()
}

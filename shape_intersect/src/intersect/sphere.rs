use super::{coplanar::visit_coplanar_planar, Contact, ContactVisitor};
use crate::{
    core::traits::{ControlFlow, Real},
    shape::{Circle, PlanarShape, Sphere},
};

/// Visits the intersects between a planar shape and a solid sphere.
///
/// The sphere meets the shape's plane in a disk (the section), which is then intersected with the
/// shape as a coplanar circle. A plane touching the sphere gives the single tangent point when the
/// shape contains it.
pub(crate) fn visit_planar_sphere<T, C, P, V>(
    planar: &P,
    sphere: &Sphere<T>,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    P: PlanarShape<Num = T> + ?Sized,
    V: ContactVisitor<T, C>,
{
    let plane = planar.plane();
    let dist = plane.signed_distance(sphere.center);
    if dist.abs() > sphere.radius + epsilon {
        return C::continuing();
    }

    let section_center = sphere.center - plane.normal.scale(dist);
    let section_radius_sq = sphere.radius * sphere.radius - dist * dist;
    if section_radius_sq <= T::zero() || section_radius_sq.sqrt() <= epsilon {
        if planar.contains_point_eps(section_center, epsilon) {
            return visitor.visit_point(section_center);
        }
        return C::continuing();
    }

    let section = Circle {
        center: section_center,
        normal: plane.normal,
        radius: section_radius_sq.sqrt(),
    };

    visit_coplanar_planar(planar, &section, epsilon, visitor)
}

/// Visits the intersects between two solid spheres.
///
/// Spheres touching (externally) report the tangent point, spheres that overlap by more than
/// `epsilon` (including one inside the other) report a [Contact::Region].
pub(crate) fn visit_sphere_sphere<T, C, V>(
    a: &Sphere<T>,
    b: &Sphere<T>,
    epsilon: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    V: ContactVisitor<T, C>,
{
    let offset = b.center - a.center;
    let dist = offset.length();
    let radius_sum = a.radius + b.radius;
    if dist > radius_sum + epsilon {
        return C::continuing();
    }

    if dist.fuzzy_eq_eps(radius_sum, epsilon) {
        return visitor.visit_point(a.center + offset.scale(a.radius / dist));
    }

    visitor.visit_contact(Contact::Region)
}

use crate::{
    core::{
        math::{plane_plane_intr, PlanePlaneIntr},
        traits::Real,
    },
    shape::PlanarShape,
};

/// Classifies the relationship between the supporting planes of two planar shapes.
///
/// With `n = n1 × n2`, `|n| < epsilon` means the planes are parallel, they are then coplanar if
/// the signed distance from `b`'s reference point to `a`'s plane is below `epsilon`. Otherwise
/// the planes cross along a line.
pub fn classify_planar_pair<T, A, B>(a: &A, b: &B, epsilon: T) -> PlanePlaneIntr<T>
where
    T: Real,
    A: PlanarShape<Num = T> + ?Sized,
    B: PlanarShape<Num = T> + ?Sized,
{
    let relation = plane_plane_intr(&a.plane(), &b.plane(), epsilon);
    log::debug!("planar pair classified as {:?}", relation);
    relation
}

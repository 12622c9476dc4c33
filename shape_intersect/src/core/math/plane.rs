use super::{Vector2, Vector3};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite plane through `origin` with unit length `normal`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane<T = f64> {
    pub origin: Vector3<T>,
    pub normal: Vector3<T>,
}

impl<T> Plane<T>
where
    T: Real,
{
    /// Create a new plane, `normal` must already be unit length.
    #[inline]
    pub fn new(origin: Vector3<T>, normal: Vector3<T>) -> Self {
        debug_assert!(
            normal.length().fuzzy_eq_eps(T::one(), T::from(1e-6).unwrap()),
            "plane normal is not unit length"
        );
        Plane { origin, normal }
    }

    /// Signed distance from the plane to `point`, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, point: Vector3<T>) -> T {
        (point - self.origin).dot(self.normal)
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn project_point(&self, point: Vector3<T>) -> Vector3<T> {
        point - self.normal.scale(self.signed_distance(point))
    }

    /// Returns `true` if `point` is within `epsilon` distance of the plane.
    #[inline]
    pub fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        self.signed_distance(point).abs() <= epsilon
    }

    /// Solves `p0 + t * v` against the plane, returning the parametric value `t`.
    ///
    /// Returns `None` if the line is parallel to the plane (the sine of the angle between `v` and
    /// the plane is below `epsilon`), in which case it contributes no single crossing point.
    #[inline]
    pub fn line_intr_eps(&self, p0: Vector3<T>, v: Vector3<T>, epsilon: T) -> Option<T> {
        let denom = v.dot(self.normal);
        let v_len = v.length();
        if v_len.fuzzy_eq_zero_eps(epsilon) || (denom / v_len).fuzzy_eq_zero_eps(epsilon) {
            return None;
        }

        Some((self.origin - p0).dot(self.normal) / denom)
    }
}

/// Orthonormal 2D coordinate frame lying in a plane.
///
/// Points are projected with [PlaneBasis::to_local] and lifted back with [PlaneBasis::to_world],
/// `axis2 = normal × axis1` so local coordinates are counter clockwise about the normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBasis<T = f64> {
    pub origin: Vector3<T>,
    pub axis1: Vector3<T>,
    pub axis2: Vector3<T>,
    pub normal: Vector3<T>,
}

impl<T> PlaneBasis<T>
where
    T: Real,
{
    /// Create a basis from a unit `normal` and a direction lying in the plane (normalized here).
    #[inline]
    pub fn new(origin: Vector3<T>, normal: Vector3<T>, in_plane_dir: Vector3<T>) -> Self {
        let axis1 = in_plane_dir.normalize();
        let axis2 = normal.cross(axis1);
        PlaneBasis {
            origin,
            axis1,
            axis2,
            normal,
        }
    }

    /// Create a basis with an arbitrary in plane axis.
    #[inline]
    pub fn from_normal(origin: Vector3<T>, normal: Vector3<T>) -> Self {
        Self::new(origin, normal, normal.any_perpendicular())
    }

    /// Project `point` into local 2D coordinates (the out of plane component is dropped).
    #[inline]
    pub fn to_local(&self, point: Vector3<T>) -> Vector2<T> {
        let rel = point - self.origin;
        Vector2::new(rel.dot(self.axis1), rel.dot(self.axis2))
    }

    /// Project a direction into local 2D coordinates.
    #[inline]
    pub fn dir_to_local(&self, dir: Vector3<T>) -> Vector2<T> {
        Vector2::new(dir.dot(self.axis1), dir.dot(self.axis2))
    }

    /// Lift local 2D coordinates back into 3D (`origin + axis1 * x + axis2 * y`).
    #[inline]
    pub fn to_world(&self, point: Vector2<T>) -> Vector3<T> {
        self.origin + self.axis1.scale(point.x) + self.axis2.scale(point.y)
    }
}

/// Holds the result of intersecting two planes.
#[derive(Debug, Copy, Clone)]
pub enum PlanePlaneIntr<T>
where
    T: Real,
{
    /// Planes are parallel and apart.
    Parallel {
        /// Signed distance from the first plane to the second plane's origin.
        distance: T,
    },
    /// Planes are parallel and within epsilon of each other.
    Coplanar,
    /// Planes cross along a line.
    Crossing {
        /// A point on both planes.
        point: Vector3<T>,
        /// Unit direction of the line, `normalize(n1 × n2)`.
        direction: Vector3<T>,
    },
}

/// Finds the line where two planes meet.
///
/// Planes are parallel when `|n1 × n2| < epsilon`, and then coplanar when the second plane's
/// origin is within `epsilon` distance of the first plane.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::math::*;
/// let xy = Plane::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
/// let xz = Plane::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
/// if let PlanePlaneIntr::Crossing { point, direction } = plane_plane_intr(&xy, &xz, 1e-10) {
///     assert!(direction.fuzzy_eq(Vector3::new(-1.0, 0.0, 0.0)));
///     assert!(point.fuzzy_eq(Vector3::new(0.0, 5.0, 0.0)));
/// } else {
///     unreachable!("expected crossing planes");
/// }
/// ```
pub fn plane_plane_intr<T>(plane1: &Plane<T>, plane2: &Plane<T>, epsilon: T) -> PlanePlaneIntr<T>
where
    T: Real,
{
    let n1 = plane1.normal;
    let n2 = plane2.normal;
    let n = n1.cross(n2);
    let n_len_sq = n.length_squared();

    if n_len_sq.sqrt().fuzzy_eq_zero_eps(epsilon) {
        let distance = plane1.signed_distance(plane2.origin);
        if distance.fuzzy_eq_zero_eps(epsilon) {
            return PlanePlaneIntr::Coplanar;
        }
        return PlanePlaneIntr::Parallel { distance };
    }

    // solve for point = o1 + c1 * n1 + c2 * n2 relative to the first plane's origin to keep
    // values small, plane1 offset is 0 and plane2 offset is h2
    let h2 = n2.dot(plane2.origin - plane1.origin);
    let n1_dot_n2 = n1.dot(n2);
    let c1 = -h2 * n1_dot_n2 / n_len_sq;
    let c2 = h2 / n_len_sq;
    let point = plane1.origin + n1.scale(c1) + n2.scale(c2);

    PlanePlaneIntr::Crossing {
        point,
        direction: n.scale(T::one() / n_len_sq.sqrt()),
    }
}

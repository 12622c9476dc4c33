use super::{
    boundary::{polar_angle, ArcPiece},
    validate::{finite_point, in_plane_unit, positive, unit_vector},
    BoundaryPiece, PlanarShape, ShapeError,
};
use crate::core::{
    math::{angle_is_within_sweep_eps, is_finite, Plane, PlaneBasis, Vector3},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Filled circle (disk) in the plane with unit `normal`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    pub center: Vector3<T>,
    pub normal: Vector3<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle, `normal` is normalized.
    pub fn new(center: Vector3<T>, normal: Vector3<T>, radius: T) -> Result<Self, ShapeError> {
        Ok(Circle {
            center: finite_point(center)?,
            normal: unit_vector(normal, ShapeError::ZeroLengthNormal)?,
            radius: positive(radius, ShapeError::NonPositiveRadius)?,
        })
    }

    #[inline]
    fn rim(&self) -> ArcPiece<T> {
        ArcPiece {
            center: self.center,
            normal: self.normal,
            start_dir: self.normal.any_perpendicular(),
            radius: self.radius,
            sweep: T::tau(),
        }
    }
}

impl<T> PlanarShape for Circle<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn plane(&self) -> Plane<T> {
        Plane::new(self.center, self.normal)
    }

    #[inline]
    fn basis(&self) -> PlaneBasis<T> {
        PlaneBasis::from_normal(self.center, self.normal)
    }

    fn boundary(&self) -> Vec<BoundaryPiece<T>> {
        vec![BoundaryPiece::Arc(self.rim())]
    }

    /// Out of plane distance `<= epsilon` and in plane radial distance `<= radius + epsilon`.
    fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        let plane = self.plane();
        let dist = plane.signed_distance(point);
        if dist.abs() > epsilon {
            return false;
        }

        let radial = (point - self.normal.scale(dist) - self.center).length();
        radial <= self.radius + epsilon
    }
}

/// Filled circular sector (pie slice) in the plane with unit `normal`.
///
/// The sector spans from the unit in-plane direction `start` through `range` turns about the
/// normal, `range` is in `[-1, 1]` where positive is counter clockwise and `±1` is a full disk.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sector<T = f64> {
    pub center: Vector3<T>,
    pub normal: Vector3<T>,
    pub start: Vector3<T>,
    pub radius: T,
    pub range: T,
}

impl<T> Sector<T>
where
    T: Real,
{
    /// Create a new sector. `normal` is normalized, `start` has its normal component removed and
    /// is normalized, and `range` is clamped to `[-1, 1]`.
    pub fn new(
        center: Vector3<T>,
        normal: Vector3<T>,
        start: Vector3<T>,
        radius: T,
        range: T,
    ) -> Result<Self, ShapeError> {
        let normal = unit_vector(normal, ShapeError::ZeroLengthNormal)?;
        if !is_finite(range) {
            return Err(ShapeError::NonFiniteValue);
        }

        let range = num_traits::real::Real::min(
            num_traits::real::Real::max(range, -T::one()),
            T::one(),
        );
        if range.fuzzy_eq_zero() {
            return Err(ShapeError::ZeroSectorRange);
        }

        Ok(Sector {
            center: finite_point(center)?,
            normal,
            start: in_plane_unit(start, normal)?,
            radius: positive(radius, ShapeError::NonPositiveRadius)?,
            range,
        })
    }

    /// Signed sweep angle in radians (`range * 2PI`).
    #[inline]
    pub fn sweep(&self) -> T {
        self.range * T::tau()
    }

    /// Returns `true` if the sector covers the whole disk.
    #[inline]
    pub fn is_full_disk(&self) -> bool {
        self.range.abs().fuzzy_eq(T::one())
    }

    /// Unit direction of the sector's second radial edge.
    #[inline]
    pub fn end(&self) -> Vector3<T> {
        let (s, c) = self.sweep().sin_cos();
        self.start.scale(c) + self.normal.cross(self.start).scale(s)
    }

    #[inline]
    fn arc(&self) -> ArcPiece<T> {
        ArcPiece {
            center: self.center,
            normal: self.normal,
            start_dir: self.start,
            radius: self.radius,
            sweep: self.sweep(),
        }
    }
}

impl<T> PlanarShape for Sector<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn plane(&self) -> Plane<T> {
        Plane::new(self.center, self.normal)
    }

    #[inline]
    fn basis(&self) -> PlaneBasis<T> {
        PlaneBasis::new(self.center, self.normal, self.start)
    }

    fn boundary(&self) -> Vec<BoundaryPiece<T>> {
        let arc = BoundaryPiece::Arc(self.arc());
        if self.is_full_disk() {
            return vec![arc];
        }

        vec![
            BoundaryPiece::Edge {
                start: self.center,
                end: self.center + self.start.scale(self.radius),
            },
            arc,
            BoundaryPiece::Edge {
                start: self.center + self.end().scale(self.radius),
                end: self.center,
            },
        ]
    }

    /// Circle containment plus the polar angle of the point (measured from `start`) lying within
    /// the signed sweep, angle wrap around is normalized before comparing.
    fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        let plane = self.plane();
        let dist = plane.signed_distance(point);
        if dist.abs() > epsilon {
            return false;
        }

        let in_plane = point - self.normal.scale(dist);
        let radial = (in_plane - self.center).length();
        if radial > self.radius + epsilon {
            return false;
        }

        if radial <= epsilon || self.is_full_disk() {
            return true;
        }

        let angle = polar_angle(self.center, self.normal, self.start, in_plane);
        angle_is_within_sweep_eps(angle, T::zero(), self.sweep(), epsilon / radial)
    }
}

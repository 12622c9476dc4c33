use crate::core::{
    math::{angle_is_within_sweep_eps, Vector3},
    traits::Real,
};

/// Circular arc lying in a plane, used as part of a curved shape's boundary.
///
/// The arc starts at `center + start_dir * radius` and sweeps `sweep` radians about `normal`
/// (counter clockwise when positive). A sweep of a full turn is a whole circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcPiece<T = f64> {
    pub center: Vector3<T>,
    pub normal: Vector3<T>,
    pub start_dir: Vector3<T>,
    pub radius: T,
    pub sweep: T,
}

impl<T> ArcPiece<T>
where
    T: Real,
{
    /// Returns `true` if the arc covers the whole circle.
    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep.abs().fuzzy_eq(T::tau()) || self.sweep.abs() > T::tau()
    }

    /// Polar angle of `point` (measured about the arc's normal from `start_dir`).
    #[inline]
    pub fn angle_of(&self, point: Vector3<T>) -> T {
        polar_angle(self.center, self.normal, self.start_dir, point)
    }

    /// Returns `true` if the polar angle of `point` lies within the arc's sweep.
    ///
    /// Only the angle is tested, `point` is assumed to already lie on the arc's circle. `epsilon`
    /// is a distance and is converted to an angle at the arc's radius.
    #[inline]
    pub fn covers_angle_of_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        if self.is_full_circle() {
            return true;
        }

        angle_is_within_sweep_eps(
            self.angle_of(point),
            T::zero(),
            self.sweep,
            epsilon / self.radius,
        )
    }

    /// The arc's start and end points (equal for a full circle).
    pub fn end_points(&self) -> [Vector3<T>; 2] {
        let axis2 = self.normal.cross(self.start_dir);
        let (s, c) = self.sweep.sin_cos();
        let start = self.center + self.start_dir.scale(self.radius);
        let end = self.center + self.start_dir.scale(self.radius * c) + axis2.scale(self.radius * s);
        [start, end]
    }
}

/// A single piece of a planar shape's boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundaryPiece<T = f64> {
    /// Straight edge from `start` to `end` (parametric `t` in `[0, 1]`).
    Edge { start: Vector3<T>, end: Vector3<T> },
    /// Circular arc.
    Arc(ArcPiece<T>),
}

impl<T> BoundaryPiece<T>
where
    T: Real,
{
    /// A point known to be on the piece.
    #[inline]
    pub fn start_point(&self) -> Vector3<T> {
        match self {
            BoundaryPiece::Edge { start, .. } => *start,
            BoundaryPiece::Arc(arc) => arc.center + arc.start_dir.scale(arc.radius),
        }
    }
}

/// Polar angle of `point` about `normal` measured from `zero_dir`, in `(-PI, PI]`.
#[inline]
pub(crate) fn polar_angle<T>(
    center: Vector3<T>,
    normal: Vector3<T>,
    zero_dir: Vector3<T>,
    point: Vector3<T>,
) -> T
where
    T: Real,
{
    let rel = point - center;
    let x = rel.dot(zero_dir);
    let y = rel.dot(normal.cross(zero_dir));
    y.atan2(x)
}

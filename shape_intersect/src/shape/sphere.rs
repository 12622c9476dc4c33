use super::{
    validate::{finite_point, positive},
    ShapeError,
};
use crate::core::{math::Vector3, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solid ball.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere<T = f64> {
    pub center: Vector3<T>,
    pub radius: T,
}

impl<T> Sphere<T>
where
    T: Real,
{
    pub fn new(center: Vector3<T>, radius: T) -> Result<Self, ShapeError> {
        Ok(Sphere {
            center: finite_point(center)?,
            radius: positive(radius, ShapeError::NonPositiveRadius)?,
        })
    }

    /// Returns `true` if `point` is inside the ball or within `epsilon` of its surface.
    #[inline]
    pub fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        point.distance(self.center) <= self.radius + epsilon
    }
}

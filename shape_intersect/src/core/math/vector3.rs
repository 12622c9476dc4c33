use super::base_math::is_finite;
use super::vector_ops::{impl_vector_binary_op, impl_vector_neg};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three dimensional vector, used for both points and directions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T>
where
    T: Real,
{
    /// Create a new vector with x, y, and z components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a zero vector (x = 0, y = 0, z = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector3::new(
            scale_factor * self.x,
            scale_factor * self.y,
            scale_factor * self.z,
        )
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (`self × other`), follows the right hand rule.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalize the vector (length = 1).
    ///
    /// The result is not finite for a zero vector, callers guard against zero length first.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// Midpoint between two points.
    #[inline]
    pub fn midpoint(&self, other: Self) -> Self {
        (*self + other).scale(T::half())
    }

    /// Returns `true` if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        is_finite(self.x) && is_finite(self.y) && is_finite(self.z)
    }

    /// Returns a unit vector perpendicular to this (non-zero) vector.
    ///
    /// The axis least aligned with `self` is crossed with it so the result never degenerates.
    pub fn any_perpendicular(&self) -> Self {
        let ax = self.x.abs();
        let ay = self.y.abs();
        let az = self.z.abs();
        let axis = if ax <= ay && ax <= az {
            Vector3::new(T::one(), T::zero(), T::zero())
        } else if ay <= az {
            Vector3::new(T::zero(), T::one(), T::zero())
        } else {
            Vector3::new(T::zero(), T::zero(), T::one())
        };

        self.cross(axis).normalize()
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given (compared per
    /// component).
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl_vector_binary_op!(Vector3 { x, y, z }, Add, add, +);
impl_vector_binary_op!(Vector3 { x, y, z }, Sub, sub, -);
impl_vector_neg!(Vector3 { x, y, z });

use crate::{
    core::{
        math::Vector3,
        traits::{ControlFlow, Real},
    },
    shape::ShapeKind,
};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single contact reported while visiting the intersects of two shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Contact<T = f64> {
    /// Discrete intersect point (a crossing, a tangent point, or an end of an overlap).
    Point(Vector3<T>),
    /// The shapes overlap but there is no discrete point to represent it, e.g. one region lying
    /// inside another without their boundaries crossing, or two coincident infinite lines.
    Region,
}

/// Trait for visiting intersect contacts.
pub trait ContactVisitor<T, C>
where
    T: Real,
    C: ControlFlow,
{
    fn visit_contact(&mut self, contact: Contact<T>) -> C;

    #[inline]
    fn visit_point(&mut self, point: Vector3<T>) -> C {
        self.visit_contact(Contact::Point(point))
    }
}

impl<T, C, F> ContactVisitor<T, C> for F
where
    T: Real,
    C: ControlFlow,
    F: FnMut(Contact<T>) -> C,
{
    #[inline]
    fn visit_contact(&mut self, contact: Contact<T>) -> C {
        self(contact)
    }
}

/// Outcome of [intersect](super::intersect).
///
/// `points` is empty when `hit` is false. It may also be empty when `hit` is true if the overlap
/// has no discrete representative point (see [Contact::Region]). Point order is not canonical.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<T = f64> {
    pub hit: bool,
    pub points: Vec<Vector3<T>>,
}

impl<T> Intersection<T>
where
    T: Real,
{
    /// No intersect.
    #[inline]
    pub fn none() -> Self {
        Intersection {
            hit: false,
            points: Vec::new(),
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Number of intersect points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no intersect points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T> Default for Intersection<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

/// Options for the intersect functions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectOptions<T = f64> {
    /// Tolerance used for zero length/zero cross product detection, planarity, and boundary
    /// inclusion.
    pub epsilon: T,
    /// Fuzzy comparison epsilon used for determining if two intersect points are the same point.
    pub pos_equal_eps: T,
}

impl<T> IntersectOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            epsilon: T::fuzzy_epsilon(),
            pos_equal_eps: T::fuzzy_epsilon(),
        }
    }

    /// Options using `epsilon` for both tolerances.
    #[inline]
    pub fn with_epsilon(epsilon: T) -> Self {
        Self {
            epsilon,
            pos_equal_eps: epsilon,
        }
    }
}

impl<T> Default for IntersectOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned by the `try_` intersect functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IntersectError {
    #[error("no intersect algorithm registered for shape pair ({first}, {second})")]
    UnsupportedPair { first: ShapeKind, second: ShapeKind },
}

//! Shape value types and the capability traits the intersect algorithms are written against.
//!
//! Shapes are immutable values, constructors validate and normalize their inputs so the intersect
//! algorithms can assume unit directions/normals, positive radii, and non-degenerate polygons.
mod boundary;
mod curved;
mod error;
mod linear;
mod planar;
mod polygon;
mod sphere;
mod validate;

pub use boundary::{ArcPiece, BoundaryPiece};
pub use curved::{Circle, Sector};
pub use error::ShapeError;
pub use linear::{Line, LinearShape, ParamDomain, Ray, Segment};
pub use planar::PlanarShape;
pub use polygon::{Rectangle, Triangle};
pub use sphere::Sphere;

use crate::core::{math::Vector3, traits::Real};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind tag of a [Shape].
///
/// Declaration order is the canonical order used when dispatching a pair of shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Line,
    Ray,
    Segment,
    Triangle,
    Rectangle,
    Circle,
    Sector,
    Sphere,
}

impl ShapeKind {
    /// Every kind in canonical order.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Line,
        ShapeKind::Ray,
        ShapeKind::Segment,
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Sector,
        ShapeKind::Sphere,
    ];

    /// Line, ray, or segment.
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, ShapeKind::Line | ShapeKind::Ray | ShapeKind::Segment)
    }

    /// Triangle, rectangle, circle, or sector.
    #[inline]
    pub fn is_planar(&self) -> bool {
        self.is_polygonal() || self.is_curved()
    }

    #[inline]
    pub fn is_polygonal(&self) -> bool {
        matches!(self, ShapeKind::Triangle | ShapeKind::Rectangle)
    }

    #[inline]
    pub fn is_curved(&self) -> bool {
        matches!(self, ShapeKind::Circle | ShapeKind::Sector)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Any supported shape.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<T = f64> {
    Line(Line<T>),
    Ray(Ray<T>),
    Segment(Segment<T>),
    Triangle(Triangle<T>),
    Rectangle(Rectangle<T>),
    Circle(Circle<T>),
    Sector(Sector<T>),
    Sphere(Sphere<T>),
}

impl<T> Shape<T>
where
    T: Real,
{
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Sector(_) => ShapeKind::Sector,
            Shape::Sphere(_) => ShapeKind::Sphere,
        }
    }

    /// The shape as a line family shape, `None` if it is not a [Line], [Ray], or [Segment].
    pub fn as_linear(&self) -> Option<&dyn LinearShape<Num = T>> {
        match self {
            Shape::Line(s) => Some(s),
            Shape::Ray(s) => Some(s),
            Shape::Segment(s) => Some(s),
            _ => None,
        }
    }

    /// The shape as a planar shape, `None` if it is not a polygon, [Circle], or [Sector].
    pub fn as_planar(&self) -> Option<&dyn PlanarShape<Num = T>> {
        match self {
            Shape::Triangle(s) => Some(s),
            Shape::Rectangle(s) => Some(s),
            Shape::Circle(s) => Some(s),
            Shape::Sector(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sphere(&self) -> Option<&Sphere<T>> {
        match self {
            Shape::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Same as [Shape::contains_point_eps] using the default epsilon.
    #[inline]
    pub fn contains_point(&self, point: Vector3<T>) -> bool {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }

    /// Tests if `point` lies on/in the shape with fuzzy boundary inclusion.
    pub fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        match self {
            Shape::Line(s) => LinearShape::contains_point_eps(s, point, epsilon),
            Shape::Ray(s) => LinearShape::contains_point_eps(s, point, epsilon),
            Shape::Segment(s) => LinearShape::contains_point_eps(s, point, epsilon),
            Shape::Triangle(s) => PlanarShape::contains_point_eps(s, point, epsilon),
            Shape::Rectangle(s) => PlanarShape::contains_point_eps(s, point, epsilon),
            Shape::Circle(s) => PlanarShape::contains_point_eps(s, point, epsilon),
            Shape::Sector(s) => PlanarShape::contains_point_eps(s, point, epsilon),
            Shape::Sphere(s) => s.contains_point_eps(point, epsilon),
        }
    }

    /// Sphere `(center, radius)` enclosing the shape, `None` for unbounded lines and rays.
    pub fn bounding_sphere(&self) -> Option<(Vector3<T>, T)> {
        let max_dist = |center: Vector3<T>, points: &[Vector3<T>]| {
            points
                .iter()
                .map(|p| p.distance(center))
                .fold(T::zero(), num_traits::real::Real::max)
        };

        match self {
            Shape::Line(_) | Shape::Ray(_) => None,
            Shape::Segment(s) => Some((s.midpoint(), s.length() * T::half())),
            Shape::Triangle(s) => {
                let c = s.centroid();
                Some((c, max_dist(c, &s.vertices()[..])))
            }
            Shape::Rectangle(s) => Some((s.center, max_dist(s.center, &s.vertices()[..]))),
            Shape::Circle(s) => Some((s.center, s.radius)),
            Shape::Sector(s) => Some((s.center, s.radius)),
            Shape::Sphere(s) => Some((s.center, s.radius)),
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),+) => {
        $(
            impl<T> From<$variant<T>> for Shape<T> {
                #[inline]
                fn from(value: $variant<T>) -> Self {
                    Shape::$variant(value)
                }
            }
        )+
    };
}

impl_from_shape!(Line, Ray, Segment, Triangle, Rectangle, Circle, Sector, Sphere);

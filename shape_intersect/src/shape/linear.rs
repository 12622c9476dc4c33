use super::{
    validate::{finite_point, unit_vector},
    ShapeError,
};
use crate::core::{math::Vector3, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parametric domain of a line family shape `P(t) = origin + t * vector`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParamDomain {
    /// `t` unconstrained (infinite line).
    Unbounded,
    /// `t >= 0` (ray).
    NonNegative,
    /// `0 <= t <= 1` (segment).
    UnitInterval,
}

impl ParamDomain {
    /// Lower bound of the domain, `None` if unbounded below.
    #[inline]
    pub fn lower<T: Real>(&self) -> Option<T> {
        match self {
            ParamDomain::Unbounded => None,
            ParamDomain::NonNegative | ParamDomain::UnitInterval => Some(T::zero()),
        }
    }

    /// Upper bound of the domain, `None` if unbounded above.
    #[inline]
    pub fn upper<T: Real>(&self) -> Option<T> {
        match self {
            ParamDomain::Unbounded | ParamDomain::NonNegative => None,
            ParamDomain::UnitInterval => Some(T::one()),
        }
    }

    /// Tests if `t` is in the domain.
    ///
    /// `length` is the length of the shape's `vector` so that `epsilon` is applied in distance
    /// units rather than parametric units (a parametric difference of 0.1 on a segment of length
    /// 1000 is a much larger distance than on a segment of length 0.01).
    #[inline]
    pub fn contains_eps<T: Real>(&self, t: T, length: T, epsilon: T) -> bool {
        let d = t * length;
        let above_lower = self.lower().map_or(true, |lo: T| d.fuzzy_gt_eps(lo * length, epsilon));
        let below_upper = self.upper().map_or(true, |hi: T| d.fuzzy_lt_eps(hi * length, epsilon));
        above_lower && below_upper
    }
}

/// Common interface of the line family: [Line], [Ray], and [Segment].
///
/// Points are `origin() + t * vector()` for `t` in `domain()`.
pub trait LinearShape {
    type Num: Real;

    /// Reference point (`t = 0`).
    fn origin(&self) -> Vector3<Self::Num>;

    /// Direction vector, unit length for lines and rays, `end - start` for segments.
    fn vector(&self) -> Vector3<Self::Num>;

    fn domain(&self) -> ParamDomain;

    /// Unit direction.
    #[inline]
    fn direction(&self) -> Vector3<Self::Num> {
        self.vector().normalize()
    }

    #[inline]
    fn point_at(&self, t: Self::Num) -> Vector3<Self::Num> {
        self.origin() + self.vector().scale(t)
    }

    /// Parametric value of the projection of `point` onto the shape's supporting line.
    #[inline]
    fn param_of(&self, point: Vector3<Self::Num>) -> Self::Num {
        let v = self.vector();
        (point - self.origin()).dot(v) / v.length_squared()
    }

    /// Tests `t` against the domain with fuzzy inclusion.
    #[inline]
    fn domain_contains_eps(&self, t: Self::Num, epsilon: Self::Num) -> bool {
        self.domain()
            .contains_eps(t, self.vector().length(), epsilon)
    }

    /// Containment: `|direction × (point - origin)| <= epsilon` plus the parametric domain check.
    fn contains_point_eps(&self, point: Vector3<Self::Num>, epsilon: Self::Num) -> bool {
        let offset = point - self.origin();
        if offset.cross(self.direction()).length() > epsilon {
            return false;
        }

        self.domain_contains_eps(self.param_of(point), epsilon)
    }
}

/// Infinite line through `point` with unit `direction`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line<T = f64> {
    pub point: Vector3<T>,
    pub direction: Vector3<T>,
}

impl<T> Line<T>
where
    T: Real,
{
    /// Create a new line, `direction` is normalized.
    pub fn new(point: Vector3<T>, direction: Vector3<T>) -> Result<Self, ShapeError> {
        Ok(Line {
            point: finite_point(point)?,
            direction: unit_vector(direction, ShapeError::ZeroLengthDirection)?,
        })
    }
}

impl<T> LinearShape for Line<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn origin(&self) -> Vector3<T> {
        self.point
    }

    #[inline]
    fn vector(&self) -> Vector3<T> {
        self.direction
    }

    #[inline]
    fn domain(&self) -> ParamDomain {
        ParamDomain::Unbounded
    }
}

/// Half line starting at `origin` going in unit `direction`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray<T = f64> {
    pub origin: Vector3<T>,
    pub direction: Vector3<T>,
}

impl<T> Ray<T>
where
    T: Real,
{
    /// Create a new ray, `direction` is normalized.
    pub fn new(origin: Vector3<T>, direction: Vector3<T>) -> Result<Self, ShapeError> {
        Ok(Ray {
            origin: finite_point(origin)?,
            direction: unit_vector(direction, ShapeError::ZeroLengthDirection)?,
        })
    }
}

impl<T> LinearShape for Ray<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn origin(&self) -> Vector3<T> {
        self.origin
    }

    #[inline]
    fn vector(&self) -> Vector3<T> {
        self.direction
    }

    #[inline]
    fn domain(&self) -> ParamDomain {
        ParamDomain::NonNegative
    }
}

/// Line segment from `start` to `end`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<T = f64> {
    pub start: Vector3<T>,
    pub end: Vector3<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    /// Create a new segment, `start` and `end` must be distinct.
    pub fn new(start: Vector3<T>, end: Vector3<T>) -> Result<Self, ShapeError> {
        let start = finite_point(start)?;
        let end = finite_point(end)?;
        if start.distance(end).fuzzy_eq_zero() {
            return Err(ShapeError::DegenerateSegment);
        }

        Ok(Segment { start, end })
    }

    #[inline]
    pub fn length(&self) -> T {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector3<T> {
        self.start.midpoint(self.end)
    }
}

impl<T> LinearShape for Segment<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn origin(&self) -> Vector3<T> {
        self.start
    }

    #[inline]
    fn vector(&self) -> Vector3<T> {
        self.end - self.start
    }

    #[inline]
    fn domain(&self) -> ParamDomain {
        ParamDomain::UnitInterval
    }
}

use super::{
    planar::{polygon_contains_point_eps, polygon_edges},
    validate::{finite_point, in_plane_unit, positive, unit_vector},
    BoundaryPiece, PlanarShape, ShapeError,
};
use crate::core::{
    math::{Plane, PlaneBasis, Vector3},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle given by three vertices, the normal follows the right hand rule over vertex order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle<T = f64> {
    pub vertices: [Vector3<T>; 3],
}

impl<T> Triangle<T>
where
    T: Real,
{
    /// Create a new triangle, the vertices must not be collinear.
    pub fn new(v0: Vector3<T>, v1: Vector3<T>, v2: Vector3<T>) -> Result<Self, ShapeError> {
        let vertices = [finite_point(v0)?, finite_point(v1)?, finite_point(v2)?];
        let n = (vertices[1] - vertices[0]).cross(vertices[2] - vertices[0]);
        if n.length().fuzzy_eq_zero() {
            return Err(ShapeError::CollinearVertices);
        }

        Ok(Triangle { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3<T>; 3] {
        &self.vertices
    }

    #[inline]
    pub fn centroid(&self) -> Vector3<T> {
        let [a, b, c] = self.vertices;
        (a + b + c).scale(T::one() / T::from(3.0).unwrap())
    }
}

impl<T> PlanarShape for Triangle<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn plane(&self) -> Plane<T> {
        let [a, b, c] = self.vertices;
        Plane::new(a, (b - a).cross(c - a).normalize())
    }

    #[inline]
    fn basis(&self) -> PlaneBasis<T> {
        let [a, b, _] = self.vertices;
        PlaneBasis::new(a, self.normal(), b - a)
    }

    fn boundary(&self) -> Vec<BoundaryPiece<T>> {
        polygon_edges(&self.vertices)
    }

    #[inline]
    fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        polygon_contains_point_eps(&self.vertices, self.normal(), point, epsilon)
    }
}

/// Rectangle centered at `center` in the plane with unit `normal`.
///
/// `right` is the unit in-plane direction of the `width` sides, the `height` sides run along
/// `normal × right`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle<T = f64> {
    pub center: Vector3<T>,
    pub normal: Vector3<T>,
    pub right: Vector3<T>,
    pub width: T,
    pub height: T,
}

impl<T> Rectangle<T>
where
    T: Real,
{
    /// Create a new rectangle. `normal` is normalized, `right` has its normal component removed
    /// and is then normalized.
    pub fn new(
        center: Vector3<T>,
        normal: Vector3<T>,
        right: Vector3<T>,
        width: T,
        height: T,
    ) -> Result<Self, ShapeError> {
        let normal = unit_vector(normal, ShapeError::ZeroLengthNormal)?;
        Ok(Rectangle {
            center: finite_point(center)?,
            normal,
            right: in_plane_unit(right, normal)?,
            width: positive(width, ShapeError::NonPositiveExtent)?,
            height: positive(height, ShapeError::NonPositiveExtent)?,
        })
    }

    /// Unit direction of the `height` sides.
    #[inline]
    pub fn up(&self) -> Vector3<T> {
        self.normal.cross(self.right)
    }

    /// Corner vertices, counter clockwise about the normal starting at the `-right, -up` corner.
    pub fn vertices(&self) -> [Vector3<T>; 4] {
        let r = self.right.scale(self.width * T::half());
        let u = self.up().scale(self.height * T::half());
        let c = self.center;
        [c - r - u, c + r - u, c + r + u, c - r + u]
    }
}

impl<T> PlanarShape for Rectangle<T>
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
        let vertices = self.vertices();
        PlaneBasis::new(vertices[0], self.normal, self.right)
    }

    fn boundary(&self) -> Vec<BoundaryPiece<T>> {
        polygon_edges(&self.vertices())
    }

    #[inline]
    fn contains_point_eps(&self, point: Vector3<T>, epsilon: T) -> bool {
        polygon_contains_point_eps(&self.vertices(), self.normal, point, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn rectangle_vertices_ccw() {
        let rect = Rectangle::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, 2.0), v(1.0, 0.0, 0.5), 2.0, 4.0)
            .unwrap();
        let [a, b, c, d] = rect.vertices();
        assert!(a.fuzzy_eq(v(-1.0, -2.0, 0.0)));
        assert!(b.fuzzy_eq(v(1.0, -2.0, 0.0)));
        assert!(c.fuzzy_eq(v(1.0, 2.0, 0.0)));
        assert!(d.fuzzy_eq(v(-1.0, 2.0, 0.0)));
    }

    #[test]
    fn triangle_containment_is_boundary_inclusive() {
        let tri = Triangle::new(v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0), v(0.0, 2.0, 0.0)).unwrap();
        assert!(tri.contains_point_eps(v(0.5, 0.5, 0.0), 1e-10));
        assert!(tri.contains_point_eps(v(1.0, 1.0, 0.0), 1e-10));
        assert!(tri.contains_point_eps(v(0.0, 0.0, 0.0), 1e-10));
        assert!(!tri.contains_point_eps(v(1.1, 1.0, 0.0), 1e-10));
        assert!(!tri.contains_point_eps(v(0.5, 0.5, 1e-9), 1e-10));
    }

    #[test]
    fn clockwise_triangle_flips_normal_not_containment() {
        let tri = Triangle::new(v(0.0, 0.0, 0.0), v(0.0, 2.0, 0.0), v(2.0, 0.0, 0.0)).unwrap();
        assert!(tri.normal().fuzzy_eq(v(0.0, 0.0, -1.0)));
        assert!(tri.contains_point_eps(v(0.5, 0.5, 0.0), 1e-10));
    }

    #[test]
    fn invalid_construction() {
        assert_eq!(
            Triangle::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0), v(2.0, 2.0, 2.0)),
            Err(ShapeError::CollinearVertices)
        );
        assert_eq!(
            Rectangle::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 0.0, 3.0), 1.0, 1.0),
            Err(ShapeError::AxisParallelToNormal)
        );
        assert_eq!(
            Rectangle::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(1.0, 0.0, 0.0), 0.0, 1.0),
            Err(ShapeError::NonPositiveExtent)
        );
    }
}

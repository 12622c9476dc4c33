use super::BoundaryPiece;
use crate::core::{
    math::{Plane, PlaneBasis, Vector3},
    traits::Real,
};

/// Common interface of bounded shapes lying in a plane: [Triangle](super::Triangle),
/// [Rectangle](super::Rectangle), [Circle](super::Circle), and [Sector](super::Sector).
pub trait PlanarShape {
    type Num: Real;

    /// Supporting plane, its origin is the shape's reference point.
    fn plane(&self) -> Plane<Self::Num>;

    /// 2D frame used when projecting this shape and another shape into its plane.
    fn basis(&self) -> PlaneBasis<Self::Num>;

    /// Boundary pieces in order, edges for polygons and arcs (plus radial edges) for curved shapes.
    fn boundary(&self) -> Vec<BoundaryPiece<Self::Num>>;

    /// Tests if `point` lies within the shape (boundary inclusive) and within `epsilon` of its plane.
    fn contains_point_eps(&self, point: Vector3<Self::Num>, epsilon: Self::Num) -> bool;

    /// Unit normal of the supporting plane.
    #[inline]
    fn normal(&self) -> Vector3<Self::Num> {
        self.plane().normal
    }
}

/// Polygon containment shared by triangles and rectangles.
///
/// `vertices` must be counter clockwise about `normal`. For each edge the value
/// `(edge_dir × (point - edge_start)) · normal` must be at least `-epsilon` (`edge_dir` normalized
/// so the value is a signed distance), and the point must be within `epsilon` of the plane.
pub(crate) fn polygon_contains_point_eps<T>(
    vertices: &[Vector3<T>],
    normal: Vector3<T>,
    point: Vector3<T>,
    epsilon: T,
) -> bool
where
    T: Real,
{
    debug_assert!(vertices.len() >= 3);
    if (point - vertices[0]).dot(normal).abs() > epsilon {
        return false;
    }

    let mut prev = vertices[vertices.len() - 1];
    for &curr in vertices {
        let edge_dir = (curr - prev).normalize();
        if edge_dir.cross(point - prev).dot(normal) < -epsilon {
            return false;
        }
        prev = curr;
    }

    true
}

/// Boundary edges of a closed polygon.
pub(crate) fn polygon_edges<T>(vertices: &[Vector3<T>]) -> Vec<BoundaryPiece<T>>
where
    T: Real,
{
    let n = vertices.len();
    (0..n)
        .map(|i| BoundaryPiece::Edge {
            start: vertices[i],
            end: vertices[(i + 1) % n],
        })
        .collect()
}

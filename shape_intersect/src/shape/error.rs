use thiserror::Error;

/// Error returned when constructing a shape from invalid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("coordinate or scalar value is not finite")]
    NonFiniteValue,
    #[error("direction vector has zero length")]
    ZeroLengthDirection,
    #[error("normal vector has zero length")]
    ZeroLengthNormal,
    #[error("segment start and end points coincide")]
    DegenerateSegment,
    #[error("triangle vertices are collinear")]
    CollinearVertices,
    #[error("in-plane axis is parallel to the plane normal")]
    AxisParallelToNormal,
    #[error("width and height must be positive")]
    NonPositiveExtent,
    #[error("radius must be positive")]
    NonPositiveRadius,
    #[error("sector angular range is zero")]
    ZeroSectorRange,
}

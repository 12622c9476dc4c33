//! Core/common math: vectors, angles, planes, and the 2D line/circle intersect kernels used after
//! projecting planar shapes into a shared plane.
mod base_math;
mod circle_circle_intersect;
mod line_circle_intersect;
mod line_line_intersect;
mod plane;
mod vector2;
mod vector3;
mod vector_ops;

pub use base_math::*;
pub use circle_circle_intersect::{circle_circle_intr, CircleCircleIntr};
pub use line_circle_intersect::{line_circle_intr, LineCircleIntr};
pub use line_line_intersect::{line_line_intr, LineLineIntr};
pub use plane::{plane_plane_intr, Plane, PlaneBasis, PlanePlaneIntr};
pub use vector2::Vector2;
pub use vector3::Vector3;

//! Pairwise intersect tests between 3D primitive shapes.
//!
//! Shapes ([shape::Shape]) are lines, rays, segments, triangles, rectangles, circles (disks),
//! sectors, and solid spheres. [intersect::intersect] returns whether two shapes intersect and
//! the distinct intersect points, [intersect::has_intersection] returns only whether they
//! intersect. All comparisons are fuzzy using an absolute epsilon (see
//! [core::traits::FuzzyEq::fuzzy_epsilon]), use the `_opt` functions with
//! [intersect::IntersectOptions] to change it.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;
pub mod core;
pub mod intersect;
pub mod shape;

pub use static_aabb2d_index::AABB;

use static_aabb2d_index as aabb_index;

/// Trait for control flow inside visiting methods.
///
/// Intersect visitors return a value implementing this trait, returning a "break" value stops the
/// enumeration of further contacts.
///
/// # Examples
///
/// ```
/// # use shape_intersect::core::*;
/// # use shape_intersect::core::math::*;
/// # use shape_intersect::shape::*;
/// # use shape_intersect::intersect::*;
/// let a: Shape = Segment::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0))
///     .unwrap()
///     .into();
/// let b: Shape = Segment::new(Vector3::new(1.0, -1.0, 0.0), Vector3::new(1.0, 1.0, 0.0))
///     .unwrap()
///     .into();
///
/// let mut visited = 0;
/// visit_intersects(&a, &b, &mut |_contact: Contact| {
///     visited += 1;
///     // Return Control::Break to stop visiting early
///     Control::Break(())
/// });
///
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        <C as aabb_index::ControlFlow>::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        aabb_index::ControlFlow::should_break(self)
    }
}

//! Construction time checks shared by the shape constructors.
use super::ShapeError;
use crate::core::{
    math::{is_finite, Vector3},
    traits::Real,
};

pub(crate) fn finite_point<T>(p: Vector3<T>) -> Result<Vector3<T>, ShapeError>
where
    T: Real,
{
    if p.is_finite() {
        Ok(p)
    } else {
        Err(ShapeError::NonFiniteValue)
    }
}

pub(crate) fn unit_vector<T>(v: Vector3<T>, zero_err: ShapeError) -> Result<Vector3<T>, ShapeError>
where
    T: Real,
{
    let v = finite_point(v)?;
    if v.length().fuzzy_eq_zero() {
        return Err(zero_err);
    }

    Ok(v.normalize())
}

/// Removes the `normal` component of `dir` and normalizes the remainder.
pub(crate) fn in_plane_unit<T>(dir: Vector3<T>, normal: Vector3<T>) -> Result<Vector3<T>, ShapeError>
where
    T: Real,
{
    let dir = unit_vector(dir, ShapeError::ZeroLengthDirection)?;
    let in_plane = dir - normal.scale(dir.dot(normal));
    if in_plane.length().fuzzy_eq_zero() {
        return Err(ShapeError::AxisParallelToNormal);
    }

    Ok(in_plane.normalize())
}

pub(crate) fn positive<T>(value: T, err: ShapeError) -> Result<T, ShapeError>
where
    T: Real,
{
    if !is_finite(value) {
        return Err(ShapeError::NonFiniteValue);
    }

    if value < T::fuzzy_epsilon() {
        return Err(err);
    }

    Ok(value)
}

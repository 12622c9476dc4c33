//! Operator implementations shared by [Vector2](super::Vector2) and [Vector3](super::Vector3).

/// Implements a component-wise binary operator for all owned/borrowed operand combinations.
macro_rules! impl_vector_binary_op {
    ($vec:ident { $($field:ident),+ }, $op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> std::ops::$op_trait<$vec<T>> for $vec<T> {
            type Output = $vec<T>;
            #[inline]
            fn $op_func(self, rhs: $vec<T>) -> Self::Output {
                $vec { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl<T: Real> std::ops::$op_trait<&$vec<T>> for $vec<T> {
            type Output = $vec<T>;
            #[inline]
            fn $op_func(self, rhs: &$vec<T>) -> Self::Output {
                $vec { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl<'a, 'b, T: Real> std::ops::$op_trait<&'b $vec<T>> for &'a $vec<T> {
            type Output = $vec<T>;
            #[inline]
            fn $op_func(self, rhs: &'b $vec<T>) -> Self::Output {
                $vec { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl<T: Real> std::ops::$op_trait<$vec<T>> for &$vec<T> {
            type Output = $vec<T>;
            #[inline]
            fn $op_func(self, rhs: $vec<T>) -> Self::Output {
                $vec { $($field: self.$field $op rhs.$field),+ }
            }
        }
    };
}

/// Implements component-wise negation for owned and borrowed vectors.
macro_rules! impl_vector_neg {
    ($vec:ident { $($field:ident),+ }) => {
        impl<T: Real> std::ops::Neg for $vec<T> {
            type Output = $vec<T>;
            #[inline]
            fn neg(self) -> Self::Output {
                $vec { $($field: -self.$field),+ }
            }
        }

        impl<T: Real> std::ops::Neg for &$vec<T> {
            type Output = $vec<T>;
            #[inline]
            fn neg(self) -> Self::Output {
                $vec { $($field: -self.$field),+ }
            }
        }
    };
}

pub(crate) use impl_vector_binary_op;
pub(crate) use impl_vector_neg;

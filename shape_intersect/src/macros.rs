/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [Vector3](crate::core::math::Vector3) from three values or an `(x, y, z)` tuple.
///
/// # Examples
///
/// ```
/// # use shape_intersect::vec3;
/// # use shape_intersect::core::math::*;
/// assert_eq!(vec3!(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
/// let xyz = (1.0, 2.0, 3.0);
/// assert_eq!(vec3!(xyz), Vector3::new(1.0, 2.0, 3.0));
/// ```
#[macro_export]
macro_rules! vec3 {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::core::math::Vector3::new($x, $y, $z)
    };
    ($xyz:expr) => {{
        let (x, y, z) = $xyz;
        $crate::core::math::Vector3::new(x, y, z)
    }};
}

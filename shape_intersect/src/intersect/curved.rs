use crate::{
    core::{
        math::{
            angle_is_within_sweep_eps, circle_circle_intr, line_circle_intr, CircleCircleIntr,
            LineCircleIntr, Vector2, Vector3,
        },
        traits::{ControlFlow, Real},
        try_cf,
    },
    shape::{ArcPiece, ParamDomain},
};

/// Circular arc expressed in the local 2D coordinates of a plane basis.
#[derive(Debug, Copy, Clone)]
pub(crate) struct LocalArc<T> {
    pub center: Vector2<T>,
    pub radius: T,
    pub start_angle: T,
    /// Signed sweep, positive is counter clockwise in the local coordinates.
    pub sweep: T,
}

impl<T> LocalArc<T>
where
    T: Real,
{
    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep.abs().fuzzy_eq(T::tau()) || self.sweep.abs() > T::tau()
    }

    /// Tests if the angle of `point` about the arc center is within the sweep, `epsilon` is a
    /// distance converted to an angle at the arc radius.
    #[inline]
    pub fn covers_eps(&self, point: Vector2<T>, epsilon: T) -> bool {
        if self.is_full_circle() {
            return true;
        }

        angle_is_within_sweep_eps(
            (point - self.center).angle(),
            self.start_angle,
            self.sweep,
            epsilon / self.radius,
        )
    }

    pub fn end_points(&self) -> [Vector2<T>; 2] {
        let at = |angle: T| {
            let (s, c) = angle.sin_cos();
            self.center + Vector2::new(c, s).scale(self.radius)
        };
        [at(self.start_angle), at(self.start_angle + self.sweep)]
    }
}

/// Visits the intersects between a straight edge and an arc lying in the same plane.
pub(crate) fn edge_arc_intr<T, C, F>(
    start: Vector2<T>,
    end: Vector2<T>,
    arc: &LocalArc<T>,
    epsilon: T,
    mut visit: F,
) -> C
where
    T: Real,
    C: ControlFlow,
    F: FnMut(Vector2<T>) -> C,
{
    let v = end - start;
    let edge_length = v.length();
    let mut visit_t = |t: T| {
        if !ParamDomain::UnitInterval.contains_eps(t, edge_length, epsilon) {
            return C::continuing();
        }
        let p = start + v.scale(t);
        if !arc.covers_eps(p, epsilon) {
            return C::continuing();
        }
        visit(p)
    };

    match line_circle_intr(start, end, arc.radius, arc.center, epsilon) {
        LineCircleIntr::NoIntersect => {}
        LineCircleIntr::TangentIntersect { t0 } => {
            try_cf!(visit_t(t0));
        }
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            try_cf!(visit_t(t0));
            try_cf!(visit_t(t1));
        }
    }

    C::continuing()
}

/// Visits the intersects between two arcs lying in the same plane.
///
/// Arcs on the same circle report the end points of each arc that lie on the other arc. Two full
/// circles on the same circle report nothing here (the overlap is found by containment).
pub(crate) fn arc_arc_intr<T, C, F>(
    arc1: &LocalArc<T>,
    arc2: &LocalArc<T>,
    epsilon: T,
    mut visit: F,
) -> C
where
    T: Real,
    C: ControlFlow,
    F: FnMut(Vector2<T>) -> C,
{
    let mut visit_on_both = |p: Vector2<T>| {
        if arc1.covers_eps(p, epsilon) && arc2.covers_eps(p, epsilon) {
            visit(p)
        } else {
            C::continuing()
        }
    };

    match circle_circle_intr(arc1.radius, arc1.center, arc2.radius, arc2.center, epsilon) {
        CircleCircleIntr::NoIntersect => {}
        CircleCircleIntr::TangentIntersect { point } => {
            try_cf!(visit_on_both(point));
        }
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            try_cf!(visit_on_both(point1));
            try_cf!(visit_on_both(point2));
        }
        CircleCircleIntr::Overlapping => {
            if !arc1.is_full_circle() {
                for p in arc1.end_points() {
                    try_cf!(visit_on_both(p));
                }
            }
            if !arc2.is_full_circle() {
                for p in arc2.end_points() {
                    try_cf!(visit_on_both(p));
                }
            }
        }
    }

    C::continuing()
}

/// Visits the points where an arc meets a line lying in the arc's plane.
///
/// `line_dir` must be unit length. The line is the intersect of the arc's plane with a crossing
/// plane so the chord is found directly in 3D: the foot of the arc center on the line plus and
/// minus the half chord length. A line within `epsilon` of tangent gives the single foot point.
pub(crate) fn arc_line_intr<T, C, F>(
    arc: &ArcPiece<T>,
    line_point: Vector3<T>,
    line_dir: Vector3<T>,
    epsilon: T,
    mut visit: F,
) -> C
where
    T: Real,
    C: ControlFlow,
    F: FnMut(Vector3<T>) -> C,
{
    let foot = line_point + line_dir.scale((arc.center - line_point).dot(line_dir));
    let dist = foot.distance(arc.center);
    if dist > arc.radius + epsilon {
        return C::continuing();
    }

    if (dist - arc.radius).abs() <= epsilon {
        if arc.covers_angle_of_eps(foot, epsilon) {
            try_cf!(visit(foot));
        }
        return C::continuing();
    }

    let half_chord = (arc.radius * arc.radius - dist * dist).sqrt();
    for p in [
        foot - line_dir.scale(half_chord),
        foot + line_dir.scale(half_chord),
    ] {
        if arc.covers_angle_of_eps(p, epsilon) {
            try_cf!(visit(p));
        }
    }

    C::continuing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{traits::FuzzyEq, Control};

    fn collect_2d(f: impl FnOnce(&mut Vec<Vector2>) -> Control) -> Vec<Vector2> {
        let mut points = Vec::new();
        f(&mut points);
        points
    }

    #[test]
    fn half_arc_filters_edge_crossings() {
        // upper half of the unit circle
        let arc = LocalArc {
            center: Vector2::new(0.0, 0.0),
            radius: 1.0,
            start_angle: 0.0,
            sweep: std::f64::consts::PI,
        };
        let points = collect_2d(|pts| {
            edge_arc_intr(
                Vector2::new(0.0, -2.0),
                Vector2::new(0.0, 2.0),
                &arc,
                1e-10,
                |p| {
                    pts.push(p);
                    Control::Continue
                },
            )
        });
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(Vector2::new(0.0, 1.0)));
    }

    #[test]
    fn overlapping_arcs_report_end_points() {
        let quarter = LocalArc {
            center: Vector2::new(0.0, 0.0),
            radius: 2.0,
            start_angle: 0.0,
            sweep: std::f64::consts::FRAC_PI_2,
        };
        let half = LocalArc {
            start_angle: std::f64::consts::FRAC_PI_4,
            sweep: std::f64::consts::PI,
            ..quarter
        };
        let points = collect_2d(|pts| {
            arc_arc_intr(&quarter, &half, 1e-10, |p| {
                pts.push(p);
                Control::Continue
            })
        });
        // end of the quarter arc (0, 2) and start of the half arc at 45 degrees
        assert_eq!(points.len(), 2);
        let s = 2.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!(points.iter().any(|p| p.fuzzy_eq(Vector2::new(0.0, 2.0))));
        assert!(points.iter().any(|p| p.fuzzy_eq(Vector2::new(s, s))));
    }

    #[test]
    fn arc_chord_with_line() {
        let arc = ArcPiece {
            center: Vector3::new(0.0, 0.0, 0.0),
            normal: Vector3::new(0.0, 0.0, 1.0),
            start_dir: Vector3::new(1.0, 0.0, 0.0),
            radius: 1.0,
            sweep: std::f64::consts::TAU,
        };
        let mut points = Vec::new();
        let _: Control = arc_line_intr(
            &arc,
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            1e-10,
            |p| {
                points.push(p);
                Control::Continue
            },
        );
        assert_eq!(points.len(), 2);
        assert!(points[0].fuzzy_eq(Vector3::new(1.0, 0.0, 0.0)));
        assert!(points[1].fuzzy_eq(Vector3::new(-1.0, 0.0, 0.0)));

        // tangent line
        points.clear();
        let _: Control = arc_line_intr(
            &arc,
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            1e-10,
            |p| {
                points.push(p);
                Control::Continue
            },
        );
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(Vector3::new(0.0, 1.0, 0.0)));
    }
}

//! Annular sector geometry.
//!
//! Paths are built in a coordinate frame centered on the hub: angle zero
//! points straight up and grows clockwise, matching the layout convention.
//! Radial inputs arrive squared and only turn into pixel radii here.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, dvec2};

/// Spans within this of a full turn degenerate into two half arcs, since a
/// single SVG arc command cannot span the whole circle.
const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Point on the circle of `radius` at `angle` in chart convention.
pub fn polar_point(angle: f64, radius: f64) -> DVec2 {
    let theta = angle - FRAC_PI_2;
    dvec2(radius * theta.cos(), radius * theta.sin())
}

/// Closed SVG path for one slice: outer arc clockwise, straight edge
/// inward, inner arc back, closed.
pub fn annular_path(x: f64, dx: f64, y: f64, dy: f64) -> String {
    let r_inner = y.max(0.0).sqrt();
    let r_outer = (y + dy).max(0.0).sqrt();
    if dx >= TAU - FULL_CIRCLE_EPSILON {
        return full_annulus_path(x, r_inner, r_outer);
    }

    let outer_start = polar_point(x, r_outer);
    let outer_end = polar_point(x + dx, r_outer);
    let inner_end = polar_point(x + dx, r_inner);
    let inner_start = polar_point(x, r_inner);
    let large_arc = if dx > PI { 1 } else { 0 };
    format!(
        "M{:.2},{:.2}A{:.2},{:.2} 0 {},1 {:.2},{:.2}L{:.2},{:.2}A{:.2},{:.2} 0 {},0 {:.2},{:.2}Z",
        outer_start.x,
        outer_start.y,
        r_outer,
        r_outer,
        large_arc,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        r_inner,
        r_inner,
        large_arc,
        inner_start.x,
        inner_start.y,
    )
}

/// Full ring as two half arcs per edge, with the inner edge wound the other
/// way so the hole survives nonzero filling.
fn full_annulus_path(x: f64, r_inner: f64, r_outer: f64) -> String {
    let start = polar_point(x, r_outer);
    let half = polar_point(x + PI, r_outer);
    let mut d = format!(
        "M{:.2},{:.2}A{:.2},{:.2} 0 1,1 {:.2},{:.2}A{:.2},{:.2} 0 1,1 {:.2},{:.2}",
        start.x, start.y, r_outer, r_outer, half.x, half.y, r_outer, r_outer, start.x, start.y,
    );
    if r_inner > 0.0 {
        let inner_start = polar_point(x, r_inner);
        let inner_half = polar_point(x + PI, r_inner);
        d.push_str(&format!(
            "M{:.2},{:.2}A{:.2},{:.2} 0 1,0 {:.2},{:.2}A{:.2},{:.2} 0 1,0 {:.2},{:.2}",
            inner_start.x,
            inner_start.y,
            r_inner,
            r_inner,
            inner_half.x,
            inner_half.y,
            r_inner,
            r_inner,
            inner_start.x,
            inner_start.y,
        ));
    }
    d.push('Z');
    d
}

/// Open, space-separated path along the outer edge only, used as the rail
/// for curved slice labels.
pub fn outer_edge_path(x: f64, dx: f64, y: f64, dy: f64) -> String {
    let r_outer = (y + dy).max(0.0).sqrt();
    if dx >= TAU - FULL_CIRCLE_EPSILON {
        let start = polar_point(x, r_outer);
        let half = polar_point(x + PI, r_outer);
        return format!(
            "M{:.2} {:.2}A{:.2} {:.2} 0 1 1 {:.2} {:.2}A{:.2} {:.2} 0 1 1 {:.2} {:.2}",
            start.x, start.y, r_outer, r_outer, half.x, half.y, r_outer, r_outer, start.x, start.y,
        );
    }

    let start = polar_point(x, r_outer);
    let end = polar_point(x + dx, r_outer);
    let large_arc = if dx > PI { 1 } else { 0 };
    format!(
        "M{:.2} {:.2}A{:.2} {:.2} 0 {} 1 {:.2} {:.2}",
        start.x, start.y, r_outer, r_outer, large_arc, end.x, end.y,
    )
}

/// Arc length of a slice's outer edge, the room its curved label can use.
pub fn outer_arc_length(dx: f64, y: f64, dy: f64) -> f64 {
    (y + dy).max(0.0).sqrt() * dx.clamp(0.0, TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_point_eq(actual: DVec2, expected: DVec2) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn polar_points_walk_clockwise_from_twelve() {
        assert_point_eq(polar_point(0.0, 100.0), dvec2(0.0, -100.0));
        assert_point_eq(polar_point(FRAC_PI_2, 100.0), dvec2(100.0, 0.0));
        assert_point_eq(polar_point(PI, 100.0), dvec2(0.0, 100.0));
        assert_point_eq(polar_point(3.0 * FRAC_PI_2, 100.0), dvec2(-100.0, 0.0));
    }

    #[test]
    fn quarter_slice_path_structure() {
        let d = annular_path(0.0, FRAC_PI_2, 100.0 * 100.0, 200.0 * 200.0 - 100.0 * 100.0);
        assert!(d.starts_with("M0.00,-200.00"));
        assert!(d.contains("A200.00,200.00 0 0,1 200.00,0.00"));
        assert!(d.contains("L100.00,0.00"));
        assert!(d.contains("A100.00,100.00 0 0,0 0.00,-100.00"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn wide_slices_set_the_large_arc_flag() {
        let d = annular_path(0.0, 3.0 * FRAC_PI_2, 0.0, 200.0 * 200.0);
        assert!(d.contains(" 1,1 "));
        assert!(d.contains(" 1,0 "));
    }

    #[test]
    fn full_circle_uses_two_half_arcs() {
        let d = annular_path(0.0, TAU, 100.0 * 100.0, 3.0 * 100.0 * 100.0);
        assert!(!d.contains('L'));
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('A').count(), 4);
        assert!(d.ends_with('Z'));

        let disc = annular_path(0.0, TAU, 0.0, 200.0 * 200.0);
        assert_eq!(disc.matches('M').count(), 1);
        assert_eq!(disc.matches('A').count(), 2);
    }

    #[test]
    fn outer_edge_is_open_and_space_separated() {
        let d = outer_edge_path(0.0, FRAC_PI_2, 0.0, 200.0 * 200.0);
        assert_eq!(d, "M0.00 -200.00A200.00 200.00 0 0 1 200.00 0.00");
        assert!(!d.contains(','));
        assert!(!d.contains('Z'));

        let full = outer_edge_path(0.0, TAU, 0.0, 200.0 * 200.0);
        assert!(!full.contains(','));
        assert_eq!(full.matches('A').count(), 2);
    }

    #[test]
    fn outer_arc_length_is_radius_times_span() {
        let length = outer_arc_length(FRAC_PI_2, 0.0, 200.0 * 200.0);
        assert!((length - 100.0 * PI).abs() < EPSILON);
        assert_eq!(outer_arc_length(-1.0, 0.0, 100.0), 0.0);
    }
}

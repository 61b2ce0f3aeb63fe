//! Arc operations using bezier curve approximation.
//!
//! tiny-skia does not support arc primitives directly, so arcs are split into
//! segments of at most a quarter turn, each approximated by a cubic.

use std::f64::consts::{PI, TAU};
use tiny_skia::PathBuilder;

/// Append a clockwise (increasing angle) arc to `path`.
///
/// When `connect` is true a straight segment joins the current point to the
/// arc start; otherwise the arc start begins a new subpath. The sweep is
/// measured by [`sweep`].
///
/// Returns the start and end points of the arc, or `None` when the arc is
/// degenerate and nothing was appended.
pub fn arc(
    path: &mut PathBuilder,
    connect: bool,
    cx: f32,
    cy: f32,
    radius: f32,
    start_angle: f64,
    end_angle: f64,
) -> Option<((f32, f32), (f32, f32))> {
    if !radius.is_finite() || radius <= 0.0 || !cx.is_finite() || !cy.is_finite() {
        return None;
    }
    // Every point of the circle must be representable.
    if !(cx.abs() + radius).is_finite() || !(cy.abs() + radius).is_finite() {
        return None;
    }
    let span = sweep(start_angle, end_angle)?;

    // Trig on a reduced start keeps precision for large angles.
    let start = start_angle.rem_euclid(TAU);
    let point_at = |angle: f64| {
        (
            cx + radius * angle.cos() as f32,
            cy + radius * angle.sin() as f32,
        )
    };
    let (sx, sy) = point_at(start);

    if connect {
        path.line_to(sx, sy);
    } else {
        path.move_to(sx, sy);
    }

    if span <= 0.0 {
        return Some(((sx, sy), (sx, sy)));
    }

    // At most eight segments: the sweep never exceeds two turns.
    let num_segments = ((span / (PI / 2.0)).ceil() as usize).max(1);
    let segment_angle = span / num_segments as f64;

    for i in 0..num_segments {
        let angle1 = start + i as f64 * segment_angle;
        let angle2 = start + (i + 1) as f64 * segment_angle;
        arc_segment(path, cx, cy, radius, angle1, angle2);
    }

    Some(((sx, sy), point_at(start + span)))
}

/// Angle swept from `start` to `end` in the direction of increasing angle.
///
/// An `end` below `start` is raised by whole turns until it is not less.
/// Sweeps longer than two turns are reduced by whole turns to between one
/// and two turns, so a full circle is still drawn. `None` when the angles
/// are not finite.
fn sweep(start: f64, end: f64) -> Option<f64> {
    let span = end - start;
    if !span.is_finite() {
        return None;
    }
    let span = if span < 0.0 {
        span.rem_euclid(TAU)
    } else if span > 2.0 * TAU {
        span.rem_euclid(TAU) + TAU
    } else {
        span
    };
    Some(span)
}

/// Add a single arc segment as a cubic bezier curve.
fn arc_segment(path: &mut PathBuilder, cx: f32, cy: f32, r: f32, angle1: f64, angle2: f64) {
    // Bezier control point factor
    let k = 4.0 / 3.0 * ((angle2 - angle1) / 4.0).tan();

    let (x1, y1) = (angle1.cos(), angle1.sin());
    let (x2, y2) = (angle2.cos(), angle2.sin());

    // Control points on the unit circle
    let cp1x = (x1 - k * y1) as f32;
    let cp1y = (y1 + k * x1) as f32;
    let cp2x = (x2 + k * y2) as f32;
    let cp2y = (y2 - k * x2) as f32;
    let (x2, y2) = (x2 as f32, y2 as f32);

    path.cubic_to(
        cx + r * cp1x,
        cy + r * cp1y,
        cx + r * cp2x,
        cy + r * cp2y,
        cx + r * x2,
        cy + r * y2,
    );
}

//! Path construction on a graphics context.
//!
//! Nothing here touches pixels; segments accumulate until the next commit.

use super::Gc;
use crate::arc;
use crate::geometry::{ArcParams, CurveParams, RectParams};

/// Coordinates in rasterizer precision, or `None` if any of them is not
/// finite there.
fn to_f32<const N: usize>(values: [f64; N]) -> Option<[f32; N]> {
    let converted = values.map(|v| v as f32);
    converted.iter().all(|v| v.is_finite()).then_some(converted)
}

impl Gc<'_> {
    /// Ensure the pending path has an open subpath at the pen.
    ///
    /// After a commit, or after text moved the pen, the next segment starts a
    /// new subpath at the pen position. Returns false when there is no pen.
    fn ensure_subpath(&mut self) -> bool {
        let Some((x, y)) = self.current else {
            return false;
        };
        if self.path_builder.is_empty() || self.pen_detached {
            self.path_builder.move_to(x, y);
            self.subpath_start = Some((x, y));
            self.pen_detached = false;
        }
        true
    }

    /// Start a new subpath at (x, y).
    pub fn move_to(&mut self, x: f64, y: f64) {
        let Some([x, y]) = to_f32([x, y]) else {
            return;
        };
        self.path_builder.move_to(x, y);
        self.current = Some((x, y));
        self.subpath_start = Some((x, y));
        self.pen_detached = false;
    }

    /// Straight segment from the pen to (x, y). Without a pen this is a `move_to`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        let Some([x, y]) = to_f32([x, y]) else {
            return;
        };
        if !self.ensure_subpath() {
            self.move_to(x as f64, y as f64);
            return;
        }
        self.path_builder.line_to(x, y);
        self.current = Some((x, y));
    }

    /// Circular arc swept by increasing angle.
    ///
    /// With a pen, a straight segment joins it to the arc start; otherwise the
    /// arc begins a new subpath. The pen ends at the arc end.
    pub fn arc(&mut self, params: &ArcParams) {
        let connect = self.ensure_subpath();
        let appended = arc::arc(
            &mut self.path_builder,
            connect,
            params.x as f32,
            params.y as f32,
            params.radius as f32,
            params.start_angle,
            params.end_angle,
        );
        if let Some((start, end)) = appended {
            if !connect {
                self.subpath_start = Some(start);
            }
            self.current = Some(end);
        }
    }

    /// Cubic Bezier from the pen through two control points.
    ///
    /// Without a pen the curve starts at its first control point.
    pub fn curve_to(&mut self, params: &CurveParams) {
        let CurveParams {
            x0,
            y0,
            xc,
            yc,
            x1,
            y1,
        } = *params;
        let Some([x0, y0, xc, yc, x1, y1]) = to_f32([x0, y0, xc, yc, x1, y1]) else {
            return;
        };
        if !self.ensure_subpath() {
            self.move_to(x0 as f64, y0 as f64);
        }
        self.path_builder.cubic_to(x0, y0, xc, yc, x1, y1);
        self.current = Some((x1, y1));
    }

    /// Closed rectangular subpath. The pen ends at the origin corner.
    pub fn rectangle(&mut self, params: &RectParams) {
        let RectParams {
            x,
            y,
            width,
            height,
        } = *params;
        let Some([x, y, x1, y1]) = to_f32([x, y, x + width, y + height]) else {
            return;
        };
        self.path_builder.move_to(x, y);
        self.path_builder.line_to(x1, y);
        self.path_builder.line_to(x1, y1);
        self.path_builder.line_to(x, y1);
        self.path_builder.close();
        self.current = Some((x, y));
        self.subpath_start = Some((x, y));
        self.pen_detached = false;
    }

    /// Close the current subpath back to its start.
    pub(crate) fn close_path(&mut self) {
        if self.path_builder.is_empty() || self.pen_detached {
            return;
        }
        self.path_builder.close();
        self.current = self.subpath_start;
    }

    /// Discard pending segments and lift the pen.
    pub(crate) fn new_path(&mut self) {
        self.path_builder = tiny_skia::PathBuilder::new();
        self.current = None;
        self.subpath_start = None;
        self.pen_detached = false;
    }

    #[cfg(test)]
    pub(crate) fn pending_path(&self) -> Option<tiny_skia::Path> {
        self.path_builder.clone().finish()
    }
}

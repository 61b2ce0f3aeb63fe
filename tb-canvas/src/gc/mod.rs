//! Scoped drawing session on a canvas.
//!
//! A [`Gc`] buffers path commands and commits them to the surface (fill, then
//! stroke) whenever a style setter runs, when a [`PathScope`] opens, and when
//! the `Gc` is dropped. Dropping it reports the union of everything it
//! touched to the canvas's [`UpdateListener`](crate::UpdateListener).

mod path_ops;
mod path_scope;
mod text_rendering;

pub use path_scope::PathScope;

use crate::canvas::Canvas;
use crate::drawing_state::DrawingState;
use crate::geometry::Rect;
use crate::style::{FontSlant, FontWeight, LineCap, LineJoin, Pixel};
use tiny_skia::{FillRule, PathBuilder, Transform};

/// Graphics context: a drawing session bound to one [`Canvas`].
pub struct Gc<'a> {
    canvas: &'a mut Canvas,
    /// Style applied at the next commit.
    state: DrawingState,
    /// Pending path.
    path_builder: PathBuilder,
    /// Pen position, kept across commits.
    current: Option<(f32, f32)>,
    /// Start of the current subpath (for closing).
    subpath_start: Option<(f32, f32)>,
    /// The pen moved without a path segment; the next segment starts a new subpath there.
    pen_detached: bool,
    /// Color of the most recently installed paint source.
    source: Pixel,
    /// Everything touched so far.
    extents: Rect,
}

impl<'a> Gc<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        log::debug!(target: "canvas", "gc begin {}x{}", canvas.width(), canvas.height());
        Self {
            canvas,
            state: DrawingState::default(),
            path_builder: PathBuilder::new(),
            current: None,
            subpath_start: None,
            pen_detached: false,
            source: Pixel::BLACK,
            extents: Rect::EMPTY,
        }
    }

    /// Current style.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Color of the installed paint source, as left by the last commit or `clear`.
    pub fn source(&self) -> Pixel {
        self.source
    }

    /// Region modified so far. Pending path commands are not included until committed.
    pub fn extents(&self) -> Rect {
        self.extents
    }

    /// Pen position, if any.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.current.map(|(x, y)| (x as f64, y as f64))
    }

    /// Whether path commands are waiting to be committed.
    pub fn has_pending_path(&self) -> bool {
        !self.path_builder.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    // --- Style setters (each commits pending geometry first) ---

    pub fn set_stroke(&mut self, color: Pixel) {
        self.flush();
        self.state.stroke = color;
    }

    pub fn set_fill(&mut self, color: Pixel) {
        self.flush();
        self.state.fill = color;
    }

    /// Set stroke and fill colors together.
    pub fn set_colors(&mut self, stroke: Pixel, fill: Pixel) {
        self.flush();
        self.state.stroke = stroke;
        self.state.fill = fill;
    }

    /// Select the font used by [`Gc::puts`].
    pub fn set_font(&mut self, family: &str, slant: FontSlant, weight: FontWeight) {
        self.flush();
        self.state.font.family = family.to_string();
        self.state.font.slant = slant;
        self.state.font.weight = weight;
    }

    /// Set the font size in pixels. Non-finite or non-positive sizes are ignored.
    pub fn set_font_size(&mut self, size: f32) {
        self.flush();
        if size.is_finite() && size > 0.0 {
            self.state.font.size = size;
        }
    }

    /// Set the stroke width. Zero selects hairlines; negative or
    /// non-finite values are ignored.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.flush();
        if thickness.is_finite() && thickness >= 0.0 {
            self.state.thickness = thickness;
        }
    }

    pub fn set_cap(&mut self, cap: LineCap) {
        self.flush();
        self.state.cap = cap;
    }

    pub fn set_join(&mut self, join: LineJoin) {
        self.flush();
        self.state.join = join;
    }

    // --- Immediate drawing ---

    /// Paint the whole surface with `color`, leaving the pending path and
    /// the installed source untouched.
    pub fn clear(&mut self, color: Pixel) {
        log::debug!(target: "canvas", "clear {:?}", color);
        let saved = self.source;
        self.source = color;

        let (width, height) = (self.width(), self.height());
        if let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32) {
            let paint = paint_for(self.source);
            self.canvas
                .surface
                .pixmap_mut()
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
        self.extents |= Rect::from_xywh(0.0, 0.0, width as f64, height as f64);

        self.source = saved;
    }

    /// Open a nested scope that starts a fresh path and closes it on drop.
    pub fn path(&mut self) -> PathScope<'_, 'a> {
        PathScope::new(self)
    }

    /// Commit the pending path: fill it, then stroke it, under the current style.
    pub(crate) fn flush(&mut self) {
        let path = std::mem::replace(&mut self.path_builder, PathBuilder::new()).finish();
        // The pen survives the commit; the next segment restarts from it.
        self.subpath_start = self.current;
        self.pen_detached = false;

        let Some(path) = path else {
            return;
        };

        let stroke = self.state.to_stroke();
        let mut bounds = Rect::from(path.bounds());
        if stroke.width > 0.0 {
            if let Some(outline) = path.stroke(&stroke, 1.0) {
                bounds |= Rect::from(outline.bounds());
            }
        } else {
            bounds = bounds.outset(1.0);
        }
        self.extents |= bounds;
        log::debug!(target: "canvas", "flush {} points, bounds {:?}", path.points().len(), bounds);

        self.source = self.state.fill;
        let fill_paint = paint_for(self.source);
        self.canvas.surface.pixmap_mut().fill_path(
            &path,
            &fill_paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        self.source = self.state.stroke;
        let stroke_paint = paint_for(self.source);
        self.canvas.surface.pixmap_mut().stroke_path(
            &path,
            &stroke_paint,
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

impl Drop for Gc<'_> {
    fn drop(&mut self) {
        self.flush();
        let extents = self.extents;
        log::debug!(target: "canvas", "gc end, dirty {:?}", extents);
        self.canvas.notify_updated(&extents);
    }
}

pub(crate) fn paint_for(color: Pixel) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color(color.into());
    paint
}

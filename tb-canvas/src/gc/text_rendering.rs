//! Text drawing on a graphics context.

use super::{paint_for, Gc};
use crate::geometry::Rect;
use tiny_skia::{FillRule, Transform};

impl Gc<'_> {
    /// Draw `text` with its baseline origin at the pen, in the installed
    /// source color, and advance the pen by the text width.
    ///
    /// Glyphs are painted immediately and do not join the pending path.
    /// Without a pen the text starts at (0, 0).
    pub fn puts(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let (x, y) = self.current.unwrap_or((0.0, 0.0));
        let paint = paint_for(self.source);
        let transform = Transform::from_translate(x, y);

        let (surface, engine) = self.canvas.text_target();
        let shaped = engine.shape(text, &self.state.font);

        let mut bounds = Rect::EMPTY;
        for glyph in &shaped.glyphs {
            surface
                .pixmap_mut()
                .fill_path(glyph, &paint, FillRule::Winding, transform, None);
            bounds |= Rect::from(glyph.bounds());
        }
        let bounds = bounds.translate(x as f64, y as f64);
        self.extents |= bounds;
        log::debug!(target: "canvas", "puts {:?} at ({}, {}), bounds {:?}", text, x, y, bounds);

        let pen = (x + shaped.advance, y);
        self.current = Some(pen);
        if !self.path_builder.is_empty() {
            self.pen_detached = true;
        }
    }
}

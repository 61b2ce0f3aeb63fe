//! Style state of a graphics context.

use crate::font::Font;
use crate::style::{LineCap, LineJoin, Pixel};

/// Style applied when a graphics context commits its pending path.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    /// Color used to stroke the path.
    pub stroke: Pixel,
    /// Color used to fill the path.
    pub fill: Pixel,
    /// Stroke width. Zero draws hairlines.
    pub thickness: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Font used by `puts`.
    pub font: Font,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            stroke: Pixel::BLACK,
            fill: Pixel::TRANSPARENT,
            thickness: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
            font: Font::default(),
        }
    }
}

impl DrawingState {
    /// The tiny-skia stroke described by this state.
    pub(crate) fn to_stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.thickness as f32,
            line_cap: self.cap.into(),
            line_join: self.join.into(),
            ..Default::default()
        }
    }
}

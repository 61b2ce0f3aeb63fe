//! Colors and stroke/font style enums.

use crate::error::{CanvasError, CanvasResult};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// An 8-bit color in `[alpha, red, green, blue]` component order.
///
/// Component `[0]` is alpha. The rasterizer receives the channels as
/// `rgba(c[1], c[2], c[3], c[0])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel(pub [u8; 4]);

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel([0, 0, 0, 0]);
    pub const BLACK: Pixel = Pixel([255, 0, 0, 0]);
    pub const WHITE: Pixel = Pixel([255, 255, 255, 255]);

    /// Create a pixel from alpha, red, green and blue components.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self([a, r, g, b])
    }

    /// Create an opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([255, r, g, b])
    }

    pub const fn alpha(self) -> u8 {
        self.0[0]
    }

    pub const fn red(self) -> u8 {
        self.0[1]
    }

    pub const fn green(self) -> u8 {
        self.0[2]
    }

    pub const fn blue(self) -> u8 {
        self.0[3]
    }

    /// Build a pixel from premultiplied RGBA storage, undoing the premultiplication.
    pub(crate) fn from_premultiplied(c: tiny_skia::PremultipliedColorU8) -> Self {
        let c = c.demultiply();
        Self([c.alpha(), c.red(), c.green(), c.blue()])
    }

    /// Premultiplied RGBA storage for this pixel.
    pub(crate) fn to_premultiplied(self) -> tiny_skia::PremultipliedColorU8 {
        tiny_skia::ColorU8::from_rgba(self.red(), self.green(), self.blue(), self.alpha())
            .premultiply()
    }
}

impl Index<usize> for Pixel {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Pixel {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}

impl From<Pixel> for tiny_skia::Color {
    fn from(c: Pixel) -> Self {
        tiny_skia::Color::from_rgba8(c[1], c[2], c[3], c[0])
    }
}

impl FromStr for Pixel {
    type Err = CanvasError;

    /// Parse a CSS color string such as `"#ff0000"` or `"rgba(0, 0, 255, 0.5)"`.
    fn from_str(s: &str) -> CanvasResult<Self> {
        let parsed = csscolorparser::parse(s)
            .map_err(|e| CanvasError::ColorParseError(format!("{}: {}", s, e)))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Pixel::argb(a, r, g, b))
    }
}

/// Line cap style for stroke operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat edge at the endpoint.
    #[default]
    Butt,
    /// Rounded edge extending past the endpoint.
    Round,
    /// Square edge extending past the endpoint.
    Square,
}

impl From<LineCap> for tiny_skia::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        }
    }
}

/// Line join style for stroke operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Beveled corner.
    Bevel,
}

impl From<LineJoin> for tiny_skia::LineJoin {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        }
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl From<FontSlant> for cosmic_text::Style {
    fn from(slant: FontSlant) -> Self {
        match slant {
            FontSlant::Normal => cosmic_text::Style::Normal,
            FontSlant::Italic => cosmic_text::Style::Italic,
            FontSlant::Oblique => cosmic_text::Style::Oblique,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl From<FontWeight> for cosmic_text::Weight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => cosmic_text::Weight::NORMAL,
            FontWeight::Bold => cosmic_text::Weight::BOLD,
        }
    }
}

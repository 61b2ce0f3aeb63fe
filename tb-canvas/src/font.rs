//! Font selection for text drawn through a graphics context.

use crate::style::{FontSlant, FontWeight};

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// The font a [`Gc`](crate::Gc) draws text with.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name, or one of the generic names `sans-serif`, `serif`, `monospace`.
    pub family: String,
    pub slant: FontSlant,
    pub weight: FontWeight,
    /// Size in pixels.
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            slant: FontSlant::Normal,
            weight: FontWeight::Normal,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Font {
    /// The cosmic-text family this font resolves to.
    pub(crate) fn cosmic_family(&self) -> cosmic_text::Family<'_> {
        match self.family.trim().to_ascii_lowercase().as_str() {
            "" | "sans-serif" | "sans" => cosmic_text::Family::SansSerif,
            "serif" => cosmic_text::Family::Serif,
            "monospace" => cosmic_text::Family::Monospace,
            _ => cosmic_text::Family::Name(self.family.trim()),
        }
    }
}

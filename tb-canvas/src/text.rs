//! Text shaping and glyph outlines using cosmic-text.

use crate::font::Font;
use crate::font_config::FontConfig;
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Command, FontSystem, Metrics, Shaping, SwashCache};

/// Shaped text as vector glyph outlines.
///
/// Coordinates are relative to the text origin, which sits on the
/// alphabetic baseline at the start of the first glyph.
#[derive(Debug, Default)]
pub(crate) struct ShapedText {
    pub glyphs: Vec<tiny_skia::Path>,
    /// Horizontal pen advance.
    pub advance: f32,
}

/// Font system and glyph cache shared by every graphics context on a canvas.
pub(crate) struct TextEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
    hinting_enabled: bool,
}

impl TextEngine {
    pub fn new(config: &FontConfig) -> Self {
        let db = config.build_database();
        Self {
            font_system: FontSystem::new_with_locale_and_db("en".to_string(), db),
            swash_cache: SwashCache::new(),
            hinting_enabled: config.hinting_enabled,
        }
    }

    /// Shape `text` with `font` and return its glyph outlines.
    pub fn shape(&mut self, text: &str, font: &Font) -> ShapedText {
        let metrics = Metrics::new(font.size, font.size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let flags = if self.hinting_enabled {
            CacheKeyFlags::empty()
        } else {
            CacheKeyFlags::DISABLE_HINTING
        };
        let attrs = Attrs::new()
            .family(font.cosmic_family())
            .weight(font.weight.into())
            .style(font.slant.into())
            .cache_key_flags(flags);

        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut shaped = ShapedText::default();
        for run in buffer.layout_runs() {
            shaped.advance = shaped.advance.max(run.line_w);
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((0.0, 0.0), 1.0);

                // Floating-point glyph position for sub-pixel precision
                let glyph_x = glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                // Font outlines have Y pointing up, the surface has Y pointing down.
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(glyph_x + p.x, glyph_y - p.y),
                        Command::LineTo(p) => path_builder.line_to(glyph_x + p.x, glyph_y - p.y),
                        Command::QuadTo(ctrl, end) => path_builder.quad_to(
                            glyph_x + ctrl.x,
                            glyph_y - ctrl.y,
                            glyph_x + end.x,
                            glyph_y - end.y,
                        ),
                        Command::CurveTo(c1, c2, end) => path_builder.cubic_to(
                            glyph_x + c1.x,
                            glyph_y - c1.y,
                            glyph_x + c2.x,
                            glyph_y - c2.y,
                            glyph_x + end.x,
                            glyph_y - end.y,
                        ),
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    shaped.glyphs.push(path);
                }
            }
        }

        log::debug!(
            target: "canvas",
            "shaped {:?}: {} glyphs, advance {}",
            text,
            shaped.glyphs.len(),
            shaped.advance
        );
        shaped
    }
}

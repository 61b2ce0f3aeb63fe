//! Scoped raw access to canvas pixels.

use crate::canvas::Canvas;
use crate::style::Pixel;
use crate::surface::{Surface, SurfaceFormat};
use tiny_skia::PremultipliedColorU8;

/// Read/write view of a canvas's pixel buffer as a 2D array.
///
/// Dropping the view tells the surface its pixels changed outside the
/// rasterizer, which re-applies the surface format (RGB24 alpha) and bumps
/// [`Surface::generation`].
pub struct ImageView<'a> {
    surface: &'a mut Surface,
}

impl<'a> ImageView<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self {
            surface: &mut canvas.surface,
        }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.surface.stride()
    }

    pub fn format(&self) -> SurfaceFormat {
        self.surface.format()
    }

    /// Read one pixel. `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        self.surface.pixel(x, y)
    }

    /// Write one pixel. Returns false when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.surface.pixmap_mut().pixels_mut()[idx] = pixel.to_premultiplied();
        true
    }

    /// Premultiplied cells of one row.
    pub fn row(&self, y: u32) -> Option<&[PremultipliedColorU8]> {
        if y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        Some(&self.surface.pixmap().pixels()[start..start + w])
    }

    /// Mutable premultiplied cells of one row.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [PremultipliedColorU8]> {
        if y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        Some(&mut self.surface.pixmap_mut().pixels_mut()[start..start + w])
    }

    /// All cells, row-major.
    pub fn pixels_mut(&mut self) -> &mut [PremultipliedColorU8] {
        self.surface.pixmap_mut().pixels_mut()
    }

    /// Raw bytes, `stride()` bytes per row.
    pub fn data(&self) -> &[u8] {
        self.surface.data()
    }

    /// Mutable raw bytes, `stride()` bytes per row.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.surface.data_mut()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width() && y < self.height())
            .then(|| y as usize * self.width() as usize + x as usize)
    }
}

impl Drop for ImageView<'_> {
    fn drop(&mut self) {
        self.surface.mark_dirty();
    }
}

//! Pixel buffer owned by a canvas.

use crate::error::{CanvasError, CanvasResult};
use crate::style::Pixel;
use tiny_skia::Pixmap;

/// Maximum surface dimension per axis.
pub const MAX_DIMENSION: u32 = 32767;

/// Bytes per pixel for every supported format.
const BYTES_PER_PIXEL: usize = 4;

/// Pixel format of a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceFormat {
    /// 32-bit color with alpha.
    Argb32,
    /// 24-bit color stored in 32-bit cells; alpha is always opaque.
    Rgb24,
}

impl SurfaceFormat {
    pub fn has_alpha(self) -> bool {
        matches!(self, SurfaceFormat::Argb32)
    }
}

/// A 2D pixel buffer backed by a tiny-skia pixmap.
///
/// Storage is premultiplied RGBA, one `u32` cell per pixel, rows packed
/// back to back. `Rgb24` surfaces keep every alpha byte at 255.
pub struct Surface {
    pixmap: Pixmap,
    format: SurfaceFormat,
    generation: u64,
}

impl Surface {
    /// Allocate a blank surface.
    ///
    /// `Argb32` surfaces start fully transparent, `Rgb24` surfaces opaque black.
    pub fn new(format: SurfaceFormat, width: u32, height: u32) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::Allocation { width, height })?;
        if format == SurfaceFormat::Rgb24 {
            pixmap.fill(tiny_skia::Color::BLACK);
        }

        Ok(Self {
            pixmap,
            format,
            generation: 0,
        })
    }

    /// Wrap an existing pixmap.
    pub fn from_pixmap(pixmap: Pixmap, format: SurfaceFormat) -> Self {
        let mut surface = Self {
            pixmap,
            format,
            generation: 0,
        };
        surface.enforce_format();
        surface
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.pixmap.width() as usize * BYTES_PER_PIXEL
    }

    pub fn format(&self) -> SurfaceFormat {
        self.format
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_mut()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Number of times pixels were reported changed outside the rasterizer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read one pixel, demultiplied. `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.pixmap.pixel(x, y).map(Pixel::from_premultiplied)
    }

    /// Tell the surface its bytes changed behind the rasterizer's back.
    pub fn mark_dirty(&mut self) {
        self.enforce_format();
        self.generation += 1;
        log::debug!(target: "canvas", "surface marked dirty (generation {})", self.generation);
    }

    fn enforce_format(&mut self) {
        if self.format == SurfaceFormat::Rgb24 {
            for px in self.pixmap.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
                // Premultiplied channels never exceed alpha, so raising alpha keeps them valid.
                px[3] = 255;
            }
        }
    }

    /// Straight-alpha RGBA copy of the whole surface.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Export the surface as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width(), self.height());
            match self.format {
                SurfaceFormat::Argb32 => encoder.set_color(png::ColorType::Rgba),
                SurfaceFormat::Rgb24 => encoder.set_color(png::ColorType::Rgb),
            }
            encoder.set_depth(png::BitDepth::Eight);

            // Pixel density metadata in pixels per meter
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            let rgba = self.to_rgba();
            match self.format {
                SurfaceFormat::Argb32 => writer.write_image_data(&rgba)?,
                SurfaceFormat::Rgb24 => {
                    let rgb: Vec<u8> = rgba
                        .chunks_exact(BYTES_PER_PIXEL)
                        .flat_map(|px| [px[0], px[1], px[2]])
                        .collect();
                    writer.write_image_data(&rgb)?
                }
            }
        }
        Ok(buf)
    }
}

//! The drawable raster target.

use crate::error::{CanvasError, CanvasResult};
use crate::font_config::FontConfig;
use crate::gc::Gc;
use crate::geometry::Rect;
use crate::image_view::ImageView;
use crate::loader;
use crate::surface::{Surface, SurfaceFormat};
use crate::text::TextEngine;
use std::path::Path;

/// Receives the region a graphics context modified when it ends.
///
/// The notification is advisory: the rect may over-approximate the pixels
/// actually changed but never misses one. Any `FnMut(&Rect)` closure is a
/// listener.
pub trait UpdateListener {
    fn on_canvas_updated(&mut self, dirty: &Rect) {
        let _ = dirty;
    }
}

impl<F> UpdateListener for F
where
    F: FnMut(&Rect),
{
    fn on_canvas_updated(&mut self, dirty: &Rect) {
        self(dirty)
    }
}

/// A drawable raster target owning one [`Surface`] for its whole lifetime.
///
/// Draw on it through a [`Gc`] obtained from [`Canvas::gc`], or touch raw
/// pixels through an [`ImageView`] from [`Canvas::image`]. The borrow
/// checker keeps the two from overlapping.
pub struct Canvas {
    pub(crate) surface: Surface,
    listener: Option<Box<dyn UpdateListener>>,
    font_config: FontConfig,
    /// Built on first text draw.
    text_engine: Option<TextEngine>,
}

impl Canvas {
    /// Create a blank, fully transparent ARGB32 canvas.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        Self::with_font_config(width, height, FontConfig::default())
    }

    /// Create a blank canvas with a custom font configuration.
    pub fn with_font_config(width: u32, height: u32, config: FontConfig) -> CanvasResult<Self> {
        let surface = Surface::new(SurfaceFormat::Argb32, width, height)?;
        Ok(Self::from_surface_with_font_config(surface, config))
    }

    /// Create a canvas from an image file.
    ///
    /// `.jpg` / `.jpeg` (any case) go to the JPEG loader first; everything
    /// else, and any JPEG failure, is tried as PNG. Fails with
    /// [`CanvasError::Load`] when no loader succeeds.
    pub fn open<P: AsRef<Path>>(path: P) -> CanvasResult<Self> {
        Self::open_with_font_config(path, FontConfig::default())
    }

    /// Create a canvas from an image file with a custom font configuration.
    pub fn open_with_font_config<P: AsRef<Path>>(
        path: P,
        config: FontConfig,
    ) -> CanvasResult<Self> {
        let path = path.as_ref();
        let surface = loader::load(path).map_err(|err| CanvasError::Load {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        log::debug!(
            target: "canvas",
            "loaded {} as {}x{} {:?}",
            path.display(),
            surface.width(),
            surface.height(),
            surface.format()
        );
        Ok(Self::from_surface_with_font_config(surface, config))
    }

    /// Take ownership of an existing surface.
    pub fn from_surface(surface: Surface) -> Self {
        Self::from_surface_with_font_config(surface, FontConfig::default())
    }

    fn from_surface_with_font_config(surface: Surface, font_config: FontConfig) -> Self {
        Self {
            surface,
            listener: None,
            font_config,
            text_engine: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn stride(&self) -> usize {
        self.surface.stride()
    }

    pub fn format(&self) -> SurfaceFormat {
        self.surface.format()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Install the receiver of update notifications, replacing any previous one.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: UpdateListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the update receiver, returning to ignoring notifications.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Begin a drawing session.
    pub fn gc(&mut self) -> Gc<'_> {
        Gc::new(self)
    }

    /// Open a raw read/write view of the pixels.
    pub fn image(&mut self) -> ImageView<'_> {
        ImageView::new(self)
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        self.surface.to_png(ppi)
    }

    pub(crate) fn notify_updated(&mut self, dirty: &Rect) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_canvas_updated(dirty);
        }
    }

    /// The surface together with the text engine, built on first use.
    pub(crate) fn text_target(&mut self) -> (&mut Surface, &mut TextEngine) {
        let Canvas {
            surface,
            font_config,
            text_engine,
            ..
        } = self;
        let engine = text_engine.get_or_insert_with(|| TextEngine::new(font_config));
        (surface, engine)
    }
}

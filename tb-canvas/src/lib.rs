//! Raster canvas with a scoped vector graphics context.
//!
//! A [`Canvas`] owns one pixel surface, either blank or decoded from a JPEG
//! or PNG file. Drawing goes through a short-lived [`Gc`] that buffers path
//! commands and commits them (fill, then stroke) whenever the style changes,
//! a nested [`PathScope`] opens, or the `Gc` ends. When a `Gc` ends, the
//! canvas's [`UpdateListener`] receives the rectangle it modified.
//!
//! It uses:
//! - `tiny-skia` for rasterization and PNG loading
//! - `cosmic-text` for text shaping and glyph outlines
//! - `image` for JPEG decoding over a memory-mapped file
//!
//! # Example
//!
//! ```rust,no_run
//! use tb_canvas::{Canvas, Pixel};
//!
//! let mut canvas = Canvas::new(10, 10)?;
//! {
//!     let mut gc = canvas.gc();
//!     gc.set_stroke(Pixel::rgb(255, 0, 0));
//!     gc.move_to(1.0, 1.0);
//!     gc.line_to(9.0, 9.0);
//! }
//! let png_data = canvas.to_png(None)?;
//! # Ok::<(), tb_canvas::CanvasError>(())
//! ```

mod arc;
mod canvas;
mod drawing_state;
mod error;
mod font;
mod font_config;
mod gc;
mod geometry;
mod image_view;
pub mod loader;
mod style;
mod surface;
mod text;

// Re-export public API
pub use canvas::{Canvas, UpdateListener};
pub use drawing_state::DrawingState;
pub use error::{CanvasError, CanvasResult};
pub use font::{Font, DEFAULT_FONT_SIZE};
pub use font_config::{CustomFont, FontConfig, GenericFamilyMap};
pub use gc::{Gc, PathScope};
pub use geometry::{ArcParams, CurveParams, PixelRect, Rect, RectParams};
pub use image_view::ImageView;
pub use loader::{image_kind_for, ImageKind};
pub use style::{FontSlant, FontWeight, LineCap, LineJoin, Pixel};
pub use surface::{Surface, SurfaceFormat, MAX_DIMENSION};

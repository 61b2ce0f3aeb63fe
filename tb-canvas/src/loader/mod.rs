//! Image file loaders and extension-based dispatch.

mod jpeg;

pub use jpeg::{decode_jpeg, load_jpeg};

use crate::error::CanvasResult;
use crate::surface::{Surface, SurfaceFormat};
use std::path::Path;

/// Image kinds a canvas can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

/// Extensions with a dedicated loader, lower case and without the dot.
const EXTENSIONS: &[(&str, ImageKind)] = &[("jpg", ImageKind::Jpeg), ("jpeg", ImageKind::Jpeg)];

/// The loader tried first for `path`. PNG unless the extension names another kind.
pub fn image_kind_for(path: &Path) -> ImageKind {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            EXTENSIONS
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(ext))
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(ImageKind::Png)
}

/// Decode the file at `path` into a new surface.
///
/// The loader picked by [`image_kind_for`] runs first; if it is not PNG and
/// fails, the PNG loader gets a chance. The error reported is the one from
/// the first loader tried.
pub fn load(path: &Path) -> CanvasResult<Surface> {
    let kind = image_kind_for(path);
    log::debug!(target: "canvas", "loading {} as {:?}", path.display(), kind);

    let first_error = match kind {
        ImageKind::Jpeg => match load_jpeg(path) {
            Ok(surface) => return Ok(surface),
            Err(err) => {
                log::debug!(
                    target: "canvas",
                    "JPEG loader failed for {}: {}; trying PNG",
                    path.display(),
                    err
                );
                Some(err)
            }
        },
        ImageKind::Png => None,
    };

    load_png(path).map_err(|png_err| {
        let err = first_error.unwrap_or(png_err);
        log::warn!(target: "canvas", "failed to load {}: {}", path.display(), err);
        err
    })
}

/// Decode a PNG file with the rasterizer's PNG loader.
pub fn load_png(path: &Path) -> CanvasResult<Surface> {
    let pixmap = tiny_skia::Pixmap::load_png(path)?;
    Ok(Surface::from_pixmap(pixmap, SurfaceFormat::Argb32))
}

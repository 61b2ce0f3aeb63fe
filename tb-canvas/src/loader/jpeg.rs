//! JPEG decoding into RGB24 surfaces.

use crate::error::{CanvasError, CanvasResult};
use crate::surface::{Surface, SurfaceFormat};
use image::codecs::jpeg::JpegDecoder;
use image::{ColorType, ImageDecoder};
use memmap2::MmapOptions;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

/// Map the file at `path` read-only and decode it as JPEG.
///
/// The file handle, the mapping, the decoder and any partially filled
/// surface are released on every return path.
pub fn load_jpeg(path: &Path) -> CanvasResult<Surface> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len == 0 {
        return Err(CanvasError::Decode("empty file".to_string()));
    }

    // SAFETY: the mapping is private and read-only, and is dropped before
    // returning. Truncating the file while it is mapped is outside the
    // contract of this loader.
    let mmap = unsafe { MmapOptions::new().map(&file) }?;
    log::debug!(target: "canvas", "mapped {} ({} bytes)", path.display(), mmap.len());

    decode_jpeg(&mmap)
}

/// Decode JPEG bytes into a new RGB24 surface.
///
/// Grayscale and RGB JPEGs are supported. Any decoder error yields an error
/// and no surface.
pub fn decode_jpeg(bytes: &[u8]) -> CanvasResult<Surface> {
    let decoder = JpegDecoder::new(Cursor::new(bytes))?;
    let (width, height) = decoder.dimensions();
    let color_type = decoder.color_type();
    let channels = match color_type {
        ColorType::L8 => 1,
        ColorType::Rgb8 => 3,
        other => return Err(CanvasError::UnsupportedColorType(format!("{:?}", other))),
    };

    let mut surface = Surface::new(SurfaceFormat::Rgb24, width, height)?;

    let total = usize::try_from(decoder.total_bytes())
        .map_err(|_| CanvasError::Allocation { width, height })?;
    let mut samples = vec![0u8; total];
    decoder.read_image(&mut samples)?;

    // Expand decoded samples into RGBX rows at the surface stride.
    let src_stride = width as usize * channels;
    let dst_stride = surface.stride();
    for (dst_row, src_row) in surface
        .data_mut()
        .chunks_exact_mut(dst_stride)
        .zip(samples.chunks_exact(src_stride))
    {
        for (dst, src) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(channels)) {
            let (r, g, b) = if channels == 1 {
                (src[0], src[0], src[0])
            } else {
                (src[0], src[1], src[2])
            };
            dst.copy_from_slice(&[r, g, b, 255]);
        }
    }

    log::debug!(
        target: "canvas",
        "decoded {}x{} JPEG ({:?})",
        width,
        height,
        color_type
    );
    Ok(surface)
}

//! Integration tests for tb-canvas.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use std::f64::consts::PI;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tb_canvas::{
    ArcParams, Canvas, CanvasError, CurveParams, FontConfig, LineCap, Pixel, Rect, RectParams,
    SurfaceFormat,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Install a listener that records every reported rect.
fn record_updates(canvas: &mut Canvas) -> Arc<Mutex<Vec<Rect>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    canvas.set_listener(move |r: &Rect| sink.lock().unwrap().push(*r));
    seen
}

fn jpeg_bytes(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, 100)
        .encode(rgb, width, height, ExtendedColorType::Rgb8)
        .unwrap();
    out
}

fn write_temp(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn is_red(p: Pixel) -> bool {
    p.alpha() > 0 && p.red() > 200 && p.green() < 40 && p.blue() < 40
}

/// A single red stroke on a blank canvas.
#[test]
fn test_blank_canvas_stroke() {
    init_logger();
    let mut canvas = Canvas::new(10, 10).unwrap();
    let updates = record_updates(&mut canvas);
    {
        let mut gc = canvas.gc();
        gc.set_stroke(Pixel::argb(255, 255, 0, 0));
        gc.set_thickness(1.0);
        gc.move_to(2.0, 2.0);
        gc.line_to(8.0, 2.0);
    }

    for x in 2..8 {
        let p = canvas.surface().pixel(x, 2).unwrap();
        assert!(is_red(p), "pixel ({x}, 2) = {p:?}");
    }
    assert_eq!(canvas.surface().pixel(5, 6).unwrap(), Pixel::TRANSPARENT);

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let dirty = updates[0];
    assert!(dirty.contains_rect(&Rect::from_corners(2.0, 1.5, 8.0, 2.5)));
    assert!(dirty.left >= 1.0 && dirty.right <= 9.0);
    assert!(dirty.top >= 1.0 && dirty.bottom <= 3.0);
}

/// Changing the stroke color between segments only affects later segments.
#[test]
fn test_state_change_mid_stroke() {
    init_logger();
    let mut canvas = Canvas::new(10, 10).unwrap();
    {
        let mut gc = canvas.gc();
        gc.move_to(0.0, 0.0);
        gc.line_to(5.0, 5.0);
        gc.set_stroke(Pixel::rgb(255, 0, 0));
        gc.line_to(9.0, 9.0);
    }

    for k in 0..4 {
        let p = canvas.surface().pixel(k, k).unwrap();
        assert!(p.alpha() > 0, "pixel ({k}, {k}) not drawn");
        assert_eq!(p.red(), 0, "pixel ({k}, {k}) = {p:?}");
    }
    for k in 6..9 {
        let p = canvas.surface().pixel(k, k).unwrap();
        assert!(is_red(p), "pixel ({k}, {k}) = {p:?}");
    }
}

/// A path scope closes its outline so the fill covers the whole triangle.
#[test]
fn test_closed_polygon() {
    init_logger();
    let mut canvas = Canvas::new(10, 10).unwrap();
    {
        let mut gc = canvas.gc();
        gc.set_fill(Pixel::rgb(0, 0, 255));
        {
            let mut path = gc.path();
            path.move_to(1.0, 1.0);
            path.line_to(8.0, 1.0);
            path.line_to(8.0, 8.0);
        }
    }

    assert_eq!(canvas.surface().pixel(6, 3).unwrap(), Pixel::rgb(0, 0, 255));
    assert_eq!(canvas.surface().pixel(2, 6).unwrap(), Pixel::TRANSPARENT);
    // The closing edge along the diagonal is stroked too.
    let diagonal = canvas.surface().pixel(4, 4).unwrap();
    assert!(diagonal.alpha() > 0);
}

#[test]
fn test_clear_is_idempotent() {
    init_logger();
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.gc().clear(Pixel::BLACK);
    let first = canvas.surface().data().to_vec();
    canvas.gc().clear(Pixel::BLACK);
    let second = canvas.surface().data().to_vec();

    assert_eq!(first, second);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(canvas.surface().pixel(x, y), Some(Pixel::BLACK));
        }
    }
}

#[test]
fn test_clear_reports_whole_surface() {
    let mut canvas = Canvas::new(7, 5).unwrap();
    let updates = record_updates(&mut canvas);
    canvas.gc().clear(Pixel::WHITE);
    assert_eq!(updates.lock().unwrap()[0], Rect::from_xywh(0.0, 0.0, 7.0, 5.0));
}

#[test]
fn test_clear_keeps_source_and_pending_path() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    {
        let mut gc = canvas.gc();
        gc.set_stroke(Pixel::rgb(255, 0, 0));
        gc.set_thickness(2.0);
        gc.move_to(1.0, 5.0);
        gc.line_to(9.0, 5.0);
        let source = gc.source();
        gc.clear(Pixel::WHITE);
        assert_eq!(gc.source(), source);
    }
    // The line queued before the clear is painted over it.
    assert!(is_red(canvas.surface().pixel(5, 5).unwrap()));
    assert_eq!(canvas.surface().pixel(5, 1).unwrap(), Pixel::WHITE);
}

/// A known 2x1 JPEG: red then green.
#[test]
fn test_jpeg_load() {
    init_logger();
    let file = write_temp(".jpg", &jpeg_bytes(2, 1, &[255, 0, 0, 0, 255, 0]));
    let canvas = Canvas::open(file.path()).unwrap();

    assert_eq!(canvas.format(), SurfaceFormat::Rgb24);
    assert_eq!((canvas.width(), canvas.height()), (2, 1));

    let left = canvas.surface().pixel(0, 0).unwrap();
    let right = canvas.surface().pixel(1, 0).unwrap();
    assert_eq!(left.alpha(), 255);
    assert_eq!(right.alpha(), 255);
    assert!(left.red() > 200 && left.green() < 60 && left.blue() < 60, "{left:?}");
    assert!(right.green() > 200 && right.red() < 60 && right.blue() < 60, "{right:?}");
}

#[test]
fn test_jpeg_extension_is_case_insensitive() {
    let rgb = vec![90u8; 8 * 8 * 3];
    let file = write_temp(".JPEG", &jpeg_bytes(8, 8, &rgb));
    let canvas = Canvas::open(file.path()).unwrap();
    assert_eq!(canvas.format(), SurfaceFormat::Rgb24);
}

#[test]
fn test_jpeg_decode_is_deterministic() {
    let mut rgb = Vec::new();
    for y in 0..12u8 {
        for x in 0..20u8 {
            rgb.extend_from_slice(&[x * 12, y * 20, 128]);
        }
    }
    let file = write_temp(".jpg", &jpeg_bytes(20, 12, &rgb));
    let a = Canvas::open(file.path()).unwrap();
    let b = Canvas::open(file.path()).unwrap();
    assert_eq!(a.surface().data(), b.surface().data());
}

#[test]
fn test_missing_file() {
    init_logger();
    let result = Canvas::open("does-not-exist.png");
    assert!(matches!(result, Err(CanvasError::Load { .. })));

    let result = Canvas::open("does-not-exist.jpg");
    assert!(matches!(result, Err(CanvasError::Load { .. })));
}

#[test]
fn test_png_named_jpg_falls_back_to_png() {
    let mut source = Canvas::new(3, 2).unwrap();
    source.gc().clear(Pixel::rgb(0, 128, 255));
    let file = write_temp(".jpg", &source.to_png(None).unwrap());

    let canvas = Canvas::open(file.path()).unwrap();
    assert_eq!(canvas.format(), SurfaceFormat::Argb32);
    assert_eq!(canvas.surface().pixel(2, 1), Some(Pixel::rgb(0, 128, 255)));
}

#[test]
fn test_jpeg_named_png_fails() {
    let rgb = vec![50u8; 8 * 8 * 3];
    let file = write_temp(".png", &jpeg_bytes(8, 8, &rgb));
    let err = Canvas::open(file.path()).err().unwrap();
    match err {
        CanvasError::Load { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_garbage_jpg_fails() {
    let file = write_temp(".jpg", b"this is not an image at all");
    assert!(matches!(
        Canvas::open(file.path()),
        Err(CanvasError::Load { .. })
    ));
}

/// A style change commits earlier segments with the old style.
#[test]
fn test_flush_before_state_change() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    {
        let mut gc = canvas.gc();
        gc.set_thickness(1.0);
        gc.move_to(2.0, 10.0);
        gc.line_to(18.0, 10.0);
        gc.set_thickness(8.0);
        gc.set_fill(Pixel::rgb(0, 255, 0));
        gc.set_stroke(Pixel::rgb(255, 0, 0));
        gc.set_cap(LineCap::Round);
    }
    // Drawn one pixel thick in black.
    let on_line = canvas.surface().pixel(10, 10).unwrap();
    assert!(on_line.alpha() > 0);
    assert_eq!(on_line.red(), 0);
    assert_eq!(canvas.surface().pixel(10, 13).unwrap(), Pixel::TRANSPARENT);
    assert_eq!(canvas.surface().pixel(10, 7).unwrap(), Pixel::TRANSPARENT);
}

/// Every pixel a session changes lies inside the reported rect.
#[test]
fn test_dirty_rect_covers_every_change() {
    init_logger();
    let mut canvas = Canvas::new(64, 64).unwrap();
    let updates = record_updates(&mut canvas);
    let before = canvas.surface().data().to_vec();
    {
        let mut gc = canvas.gc();
        gc.set_thickness(5.0);
        gc.set_cap(LineCap::Square);
        gc.move_to(10.0, 10.0);
        gc.line_to(20.0, 30.0);
        gc.set_fill(Pixel::rgb(0, 0, 255));
        gc.arc(&ArcParams {
            x: 40.0,
            y: 40.0,
            radius: 8.0,
            start_angle: 0.0,
            end_angle: 2.0 * PI,
        });
        gc.set_thickness(0.0);
        gc.curve_to(&CurveParams {
            x0: 45.0,
            y0: 5.0,
            xc: 55.0,
            yc: 25.0,
            x1: 60.0,
            y1: 10.0,
        });
        gc.set_thickness(2.0);
        gc.rectangle(&RectParams {
            x: 5.0,
            y: 50.0,
            width: 10.0,
            height: 6.0,
        });
    }
    let after = canvas.surface().data();

    let dirty = updates.lock().unwrap()[0];
    let region = dirty.round_out(64, 64).unwrap();
    let mut changed = 0;
    for y in 0..64u32 {
        for x in 0..64u32 {
            let i = (y as usize * 64 + x as usize) * 4;
            if before[i..i + 4] != after[i..i + 4] {
                changed += 1;
                assert!(
                    x >= region.x
                        && x < region.x + region.width
                        && y >= region.y
                        && y < region.y + region.height,
                    "pixel ({x}, {y}) changed outside {dirty:?}"
                );
            }
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_dirty_rect_covers_text() {
    init_logger();
    let mut canvas = Canvas::with_font_config(64, 40, FontConfig::default()).unwrap();
    let updates = record_updates(&mut canvas);
    let before = canvas.surface().data().to_vec();
    {
        let mut gc = canvas.gc();
        gc.set_font_size(20.0);
        gc.move_to(4.0, 30.0);
        gc.puts("Hg");
    }
    let after = canvas.surface().data();
    if before == after {
        eprintln!("no font face available, skipping");
        return;
    }

    let dirty = updates.lock().unwrap()[0];
    let region = dirty.round_out(64, 40).unwrap();
    for y in 0..40u32 {
        for x in 0..64u32 {
            let i = (y as usize * 64 + x as usize) * 4;
            if before[i..i + 4] != after[i..i + 4] {
                assert!(
                    x >= region.x
                        && x < region.x + region.width
                        && y >= region.y
                        && y < region.y + region.height,
                    "glyph pixel ({x}, {y}) outside {dirty:?}"
                );
            }
        }
    }
}

#[test]
fn test_session_without_drawing_reports_empty_rect() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let updates = record_updates(&mut canvas);
    {
        let mut gc = canvas.gc();
        gc.set_colors(Pixel::WHITE, Pixel::BLACK);
        gc.set_thickness(3.0);
    }
    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert!(updates[0].is_empty());
}

#[test]
fn test_each_session_notifies_once() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let updates = record_updates(&mut canvas);
    for _ in 0..3 {
        let mut gc = canvas.gc();
        gc.move_to(1.0, 1.0);
        gc.line_to(2.0, 2.0);
    }
    assert_eq!(updates.lock().unwrap().len(), 3);
}

#[test]
fn test_image_view_edits_then_draw() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    {
        let mut image = canvas.image();
        for y in 0..4 {
            for x in 0..4 {
                image.set(x, y, Pixel::WHITE);
            }
        }
    }
    assert_eq!(canvas.surface().generation(), 1);
    {
        let mut gc = canvas.gc();
        gc.set_fill(Pixel::rgb(255, 0, 0));
        gc.set_stroke(Pixel::rgb(255, 0, 0));
        gc.rectangle(&RectParams {
            x: 0.0,
            y: 0.0,
            width: 2.0,
            height: 2.0,
        });
    }
    assert_eq!(canvas.surface().pixel(0, 0), Some(Pixel::rgb(255, 0, 0)));
    assert_eq!(canvas.surface().pixel(3, 3), Some(Pixel::WHITE));
}

#[test]
fn test_png_export() {
    let mut canvas = Canvas::new(6, 4).unwrap();
    canvas.gc().clear(Pixel::rgb(10, 20, 30));
    let png_data = canvas.to_png(Some(144.0)).unwrap();

    let decoded = image::load_from_memory_with_format(&png_data, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (6, 4));
    assert_eq!(decoded.get_pixel(5, 3).0, [10, 20, 30, 255]);
}

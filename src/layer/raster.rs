//! Raster helpers shared by the layers.
//!
//! Drawing happens on a premultiplied tiny-skia [`Pixmap`]; blurring and
//! encoding happen on straight-alpha [`RgbaImage`]s. This module converts
//! between the two, pastes straight-alpha buffers onto the canvas and builds
//! the paths the layers stroke and fill.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{ColorU8, Path, PathBuilder, Pixmap};

use crate::geometry::Point;

// ============================================================================
// Paths
// ============================================================================

/// Builds a closed polygon through `points`.
///
/// Returns `None` for degenerate input (fewer than two points).
pub fn polygon(points: &[Point]) -> Option<Path> {
    let mut pb = open_path(points)?;
    pb.close();
    pb.finish()
}

/// Builds an open polyline through `points`.
pub fn polyline(points: &[Point]) -> Option<Path> {
    open_path(points)?.finish()
}

fn open_path(points: &[Point]) -> Option<PathBuilder> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    Some(pb)
}

/// Builds a full circle outline.
pub fn circle(center: Point, radius: f32) -> Option<Path> {
    PathBuilder::from_circle(center.x, center.y, radius)
}

// ============================================================================
// Conversion
// ============================================================================

/// Converts a premultiplied pixmap into a straight-alpha image.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let c = pixel.demultiply();
        let x = i as u32 % width;
        let y = i as u32 / width;
        img.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
    }

    img
}

// ============================================================================
// Compositing
// ============================================================================

/// Pastes `src` onto `dest` with its top-left corner at `(x, y)`, using the
/// source alpha as the mask.
///
/// Every channel, alpha included, becomes `src * m + dest * (1 - m)` with
/// `m = src_alpha / 255`. Pixels outside `dest` are clipped.
pub fn paste_masked(dest: &mut Pixmap, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;
    let pixels = dest.pixels_mut();

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dx = x + sx as i32;
        let dy = y + sy as i32;
        if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
            continue;
        }

        let idx = (dy * dest_width + dx) as usize;
        let d = pixels[idx].demultiply();
        let dst = [d.red(), d.green(), d.blue(), d.alpha()];
        let mask = src_pixel[3] as u32;

        let mut out = [0u8; 4];
        for (c, o) in out.iter_mut().enumerate() {
            *o = mask_blend(src_pixel[c], dst[c], mask);
        }
        pixels[idx] = ColorU8::from_rgba(out[0], out[1], out[2], out[3]).premultiply();
    }
}

fn mask_blend(src: u8, dst: u8, mask: u32) -> u8 {
    ((src as u32 * mask + dst as u32 * (255 - mask) + 127) / 255) as u8
}

// ============================================================================
// Tests
// ============================================================================

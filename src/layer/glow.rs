//! Soft background glow behind the shield.

use image::{imageops, Rgba, RgbaImage};

use super::raster::paste_masked;
use super::{LayerEffect, RenderContext};
use crate::colors::GLOW_TINT;
use crate::geometry::GlowGeometry;
use crate::icon::Backdrop;

/// Draws a translucent circle into a separate buffer, blurs it and pastes
/// it onto the canvas using the buffer's own alpha as the mask.
///
/// The paste blends every channel, alpha included, so the canvas is
/// slightly translucent under the glow. Transparent icons are masked by the
/// platform, so the glow is only drawn on opaque backdrops.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlowLayer;

impl LayerEffect for GlowLayer {
    fn name(&self) -> &'static str {
        "glow"
    }

    fn applies_to(&self, backdrop: Backdrop) -> bool {
        !backdrop.is_transparent()
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let glow = ctx.geometry.glow;
        let Some(buffer) = render_glow(&glow) else {
            return;
        };

        let offset = glow.offset as i32;
        paste_masked(&mut ctx.canvas, &buffer, offset, offset);
    }
}

/// Renders the blurred glow buffer in straight alpha.
///
/// The circle fills the buffer with the exact glow tint; everything around
/// it is transparent black, so the blurred edge fades in color as well as
/// alpha. Returns `None` when the buffer would be empty (sub-pixel icons).
pub fn render_glow(glow: &GlowGeometry) -> Option<RgbaImage> {
    if glow.side == 0 {
        return None;
    }

    let radius = glow.side as f32 / 2.0;
    let tint = Rgba([GLOW_TINT.red, GLOW_TINT.green, GLOW_TINT.blue, GLOW_TINT.alpha]);
    let disc = RgbaImage::from_fn(glow.side, glow.side, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy <= radius * radius {
            tint
        } else {
            Rgba([0, 0, 0, 0])
        }
    });

    Some(imageops::fast_blur(&disc, glow.blur_radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IconGeometry;

    #[test]
    fn glow_buffer_has_scaled_side() {
        let glow = IconGeometry::at_size(200).glow;
        let buffer = render_glow(&glow).unwrap();
        assert_eq!(buffer.dimensions(), (160, 160));
    }

    #[test]
    fn glow_stays_faint() {
        let glow = IconGeometry::at_size(200).glow;
        let img = render_glow(&glow).unwrap();

        let center = img.get_pixel(80, 80);
        assert!(center[3] > 0, "center should be lit");
        assert!(center[3] <= GLOW_TINT.alpha, "blur never brightens the tint");
    }

    #[test]
    fn glow_fades_towards_corners() {
        let glow = IconGeometry::at_size(200).glow;
        let img = render_glow(&glow).unwrap();
        assert!(img.get_pixel(0, 0)[3] < img.get_pixel(80, 80)[3]);
    }

    #[test]
    fn edge_color_fades_towards_black() {
        let glow = IconGeometry::at_size(200).glow;
        let img = render_glow(&glow).unwrap();

        // The transparent surround is black, so the blurred rim darkens.
        let rim = img.get_pixel(0, 0);
        assert!(rim[1] < GLOW_TINT.green, "rim should darken: {:?}", rim.0);
    }

    #[test]
    fn empty_glow_is_skipped() {
        let glow = IconGeometry::at_size(1).glow;
        assert!(render_glow(&glow).is_none());
    }
}

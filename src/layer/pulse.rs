//! Heartbeat-style pulse line across the shield.

use resvg::tiny_skia::{LineJoin, Stroke, Transform};

use super::raster::polyline;
use super::{LayerEffect, RenderContext};
use crate::colors::{self, CYAN_HIGH};

/// Strokes the pulse polyline in the darker cyan.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulseLayer;

impl LayerEffect for PulseLayer {
    fn name(&self) -> &'static str {
        "pulse"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let g = &ctx.geometry;
        let Some(path) = polyline(&g.pulse) else {
            return;
        };

        let stroke = Stroke {
            width: g.pulse_stroke,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        ctx.canvas
            .stroke_path(&path, &colors::paint(CYAN_HIGH), &stroke, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Backdrop, IconSpec};

    #[test]
    fn flat_segments_cross_the_center_line() {
        let mut ctx = RenderContext::new(IconSpec::new(200, Backdrop::Transparent).unwrap()).unwrap();
        PulseLayer.apply(&mut ctx);
        let img = ctx.into_image();

        // 3px stroke centered on y = 100.
        let p = img.get_pixel(60, 100);
        assert_eq!(p.0, [CYAN_HIGH.red, CYAN_HIGH.green, CYAN_HIGH.blue, 255]);
        assert_eq!(img.get_pixel(60, 110)[3], 0);
        // Before the line starts.
        assert_eq!(img.get_pixel(40, 100)[3], 0);
    }

    #[test]
    fn favicon_keeps_the_line() {
        let mut ctx = RenderContext::new(IconSpec::new(48, Backdrop::Transparent).unwrap()).unwrap();
        PulseLayer.apply(&mut ctx);
        let img = ctx.into_image();
        assert!(img.pixels().any(|p| p[3] > 0));
    }
}

//! Concentric radar rings.

use resvg::tiny_skia::{Stroke, Transform};

use super::raster::circle;
use super::{LayerEffect, RenderContext};
use crate::colors::{self, RING_TINT};

/// Strokes three translucent full circles around the shield center.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadarLayer;

impl LayerEffect for RadarLayer {
    fn name(&self) -> &'static str {
        "radar"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let g = &ctx.geometry;
        if g.radar_stroke <= 0.0 {
            return;
        }

        let paint = colors::paint(RING_TINT);
        let stroke = Stroke {
            width: g.radar_stroke,
            ..Stroke::default()
        };

        for radius in g.radar_radii {
            if let Some(path) = circle(g.radar_center, radius) {
                ctx.canvas
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }
}

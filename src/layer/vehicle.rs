//! Simplified vehicle silhouette.

use resvg::tiny_skia::{FillRule, Transform};

use super::raster::polygon;
use super::{LayerEffect, RenderContext};
use crate::colors::{self, CYAN_LOW};

/// Fills the body and roof trapezoids.
#[derive(Debug, Default, Clone, Copy)]
pub struct VehicleLayer;

impl LayerEffect for VehicleLayer {
    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let g = &ctx.geometry;
        let paint = colors::paint(CYAN_LOW);

        for part in [&g.vehicle_body[..], &g.vehicle_roof[..]] {
            if let Some(path) = polygon(part) {
                ctx.canvas
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }
}

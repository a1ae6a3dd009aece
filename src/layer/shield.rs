//! The shield hexagon.

use resvg::tiny_skia::{FillRule, Stroke, Transform};

use super::raster::polygon;
use super::{LayerEffect, RenderContext};
use crate::colors::{self, CYAN_LOW, SLATE};

/// Fills the shield with slate and outlines it in cyan.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShieldLayer;

impl LayerEffect for ShieldLayer {
    fn name(&self) -> &'static str {
        "shield"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let g = &ctx.geometry;
        let Some(path) = polygon(&g.shield) else {
            return;
        };

        ctx.canvas.fill_path(
            &path,
            &colors::paint(SLATE),
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        if g.shield_stroke <= 0.0 {
            return;
        }

        let stroke = Stroke {
            width: g.shield_stroke,
            ..Stroke::default()
        };
        ctx.canvas
            .stroke_path(&path, &colors::paint(CYAN_LOW), &stroke, Transform::identity(), None);
    }
}

//! Layer pipeline that draws the icon.
//!
//! Each layer implements [`LayerEffect`] and draws one element of the icon
//! onto the shared [`RenderContext`]. [`LayerPipeline`] owns the layers and
//! applies them in a fixed order:
//!
//! ```text
//! Canvas (background or transparent)
//!     │
//!     ▼
//! ┌─────────┐
//! │  Glow   │ ◄── Opaque backdrop only
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │ Shield  │
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │  Radar  │
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │ Vehicle │
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │  Pulse  │
//! └─────────┘
//! ```

pub mod glow;
pub mod pulse;
pub mod radar;
pub mod raster;
pub mod shield;
pub mod vehicle;

pub use glow::GlowLayer;
pub use pulse::PulseLayer;
pub use radar::RadarLayer;
pub use shield::ShieldLayer;
pub use vehicle::VehicleLayer;

use image::RgbaImage;
use resvg::tiny_skia::Pixmap;

use crate::colors::{self, BACKGROUND};
use crate::error::{Error, Result};
use crate::geometry::IconGeometry;
use crate::icon::{Backdrop, IconSpec};

// ============================================================================
// Render Context
// ============================================================================

/// State that flows through the pipeline for one icon.
pub struct RenderContext {
    /// The canvas being drawn on.
    pub canvas: Pixmap,

    /// Shapes scaled for the canvas size.
    pub geometry: IconGeometry,

    pub backdrop: Backdrop,
}

impl RenderContext {
    /// Allocates the canvas for `spec`: filled with the background color
    /// when opaque, fully transparent otherwise.
    pub fn new(spec: IconSpec) -> Result<Self> {
        let mut canvas = Pixmap::new(spec.size, spec.size).ok_or(Error::Canvas(spec.size))?;
        if !spec.backdrop.is_transparent() {
            canvas.fill(colors::skia_color(BACKGROUND));
        }

        Ok(Self {
            canvas,
            geometry: IconGeometry::at_size(spec.size),
            backdrop: spec.backdrop,
        })
    }

    /// Finishes rendering and returns the straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        raster::pixmap_to_rgba_image(&self.canvas)
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A single drawing step of the icon.
pub trait LayerEffect {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns true if the layer draws on the given backdrop.
    ///
    /// Layers draw on every backdrop unless they override this.
    fn applies_to(&self, _backdrop: Backdrop) -> bool {
        true
    }

    /// Draws the layer onto `ctx.canvas`.
    fn transform(&self, ctx: &mut RenderContext);

    /// Draws the layer if it applies to the context's backdrop.
    fn apply(&self, ctx: &mut RenderContext) {
        if self.applies_to(ctx.backdrop) {
            self.transform(ctx);
        } else {
            log::trace!("skipping {} layer", self.name());
        }
    }
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The ordered set of layers making up the icon.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayerPipeline {
    pub glow: GlowLayer,
    pub shield: ShieldLayer,
    pub radar: RadarLayer,
    pub vehicle: VehicleLayer,
    pub pulse: PulseLayer,
}

impl LayerPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one icon variant through every layer.
    pub fn render(&self, spec: IconSpec) -> Result<RgbaImage> {
        let mut ctx = RenderContext::new(spec)?;

        self.glow.apply(&mut ctx);
        self.shield.apply(&mut ctx);
        self.radar.apply(&mut ctx);
        self.vehicle.apply(&mut ctx);
        self.pulse.apply(&mut ctx);

        Ok(ctx.into_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_context_starts_with_background() {
        let spec = IconSpec::new(8, Backdrop::Opaque).unwrap();
        let img = RenderContext::new(spec).unwrap().into_image();
        let bg = [BACKGROUND.red, BACKGROUND.green, BACKGROUND.blue, BACKGROUND.alpha];
        assert!(img.pixels().all(|p| p.0 == bg));
    }

    #[test]
    fn transparent_context_starts_empty() {
        let spec = IconSpec::new(8, Backdrop::Transparent).unwrap();
        let img = RenderContext::new(spec).unwrap().into_image();
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn only_glow_depends_on_backdrop() {
        let pipeline = LayerPipeline::new();
        assert!(pipeline.glow.applies_to(Backdrop::Opaque));
        assert!(!pipeline.glow.applies_to(Backdrop::Transparent));
        for backdrop in [Backdrop::Opaque, Backdrop::Transparent] {
            assert!(pipeline.shield.applies_to(backdrop));
            assert!(pipeline.radar.applies_to(backdrop));
            assert!(pipeline.vehicle.applies_to(backdrop));
            assert!(pipeline.pulse.applies_to(backdrop));
        }
    }

    #[test]
    fn pipeline_output_matches_requested_size() {
        let pipeline = LayerPipeline::new();
        for size in [1, 16, 48, 100] {
            let img = pipeline.render(IconSpec::new(size, Backdrop::Opaque).unwrap()).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }
}

//! shield-icons: procedural brand icon generator
//!
//! Draws a shield with radar rings, a vehicle silhouette and a pulse line at
//! any pixel size, and writes the project's icon assets.
//!
//! # Example
//!
//! ```
//! use shield_icons::{render_icon, Backdrop};
//!
//! let icon = render_icon(64, Backdrop::Opaque).unwrap();
//! assert_eq!(icon.dimensions(), (64, 64));
//!
//! // Adaptive icons start transparent and skip the glow.
//! let adaptive = render_icon(64, Backdrop::Transparent).unwrap();
//! assert_eq!(adaptive.get_pixel(0, 0)[3], 0);
//! ```
//!
//! # Generating Assets
//!
//! [`generate_assets`] walks an [`AssetManifest`] relative to a project root:
//!
//! ```no_run
//! use shield_icons::{generate_assets, AssetManifest};
//! use std::path::Path;
//!
//! let written = generate_assets(Path::new("."), &AssetManifest::default()).unwrap();
//! println!("{} files", written.len());
//! ```

mod colors;
mod error;
mod generate;
mod geometry;
mod icon;
mod layer;
mod manifest;
mod render;

pub use colors::{BACKGROUND, CYAN_HIGH, CYAN_LOW, GLOW_TINT, RING_TINT, SLATE};
pub use error::{Error, Result};
pub use generate::generate_assets;
pub use geometry::{GlowGeometry, IconGeometry, Point, Scale, DESIGN_GRID};
pub use icon::{Backdrop, IconSpec};
pub use layer::{
    GlowLayer, LayerEffect, LayerPipeline, PulseLayer, RadarLayer, RenderContext, ShieldLayer,
    VehicleLayer,
};
pub use manifest::{AssetManifest, AssetSpec, PrimaryTarget, SiblingTargets};
pub use render::{create_icon, ensure_dir, render_icon};

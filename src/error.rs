//! Error type shared by the renderer and the asset generator.

use std::path::PathBuf;

/// Errors produced while rendering or writing icon assets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Icons are square and must be at least one pixel wide.
    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    /// The raster canvas could not be allocated.
    #[error("failed to allocate a {0}x{0} canvas")]
    Canvas(u32),

    /// Encoding or writing the image file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A filesystem operation other than the image write failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset manifest could not be parsed.
    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

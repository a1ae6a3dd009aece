//! Icon variant types.
//!
//! An icon is always square; a variant is described by its side length and
//! whether the canvas starts opaque or transparent.

use crate::error::{Error, Result};

/// How the canvas is prepared before any shape is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    /// Filled with the background color, with the glow layer composited on top.
    #[default]
    Opaque,
    /// Fully transparent, without the glow layer.
    ///
    /// Used for adaptive icons that the platform masks into its own shape.
    Transparent,
}

impl Backdrop {
    /// Maps a `transparent` flag to a backdrop.
    pub fn from_transparent(transparent: bool) -> Self {
        if transparent {
            Self::Transparent
        } else {
            Self::Opaque
        }
    }

    /// Returns true for [`Backdrop::Transparent`].
    pub fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }
}

/// A single icon variant to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Width and height in pixels.
    pub size: u32,
    pub backdrop: Backdrop,
}

impl IconSpec {
    /// Creates an icon variant, rejecting zero-sized icons.
    pub fn new(size: u32, backdrop: Backdrop) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self { size, backdrop })
    }
}

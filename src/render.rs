//! Rendering entry points.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::icon::{Backdrop, IconSpec};
use crate::layer::LayerPipeline;

/// Renders a `size` x `size` icon in memory.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] when `size` is zero.
pub fn render_icon(size: u32, backdrop: Backdrop) -> Result<RgbaImage> {
    let spec = IconSpec::new(size, backdrop)?;
    LayerPipeline::new().render(spec)
}

/// Renders an icon and writes it to `path`.
///
/// The format follows the file extension (`.png`, `.ico`). The parent
/// directory must already exist; see [`ensure_dir`].
pub fn create_icon(size: u32, path: impl AsRef<Path>, backdrop: Backdrop) -> Result<()> {
    let path = path.as_ref();
    let img = render_icon(size, backdrop)?;
    img.save(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Created {}", path.display());
    Ok(())
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, CYAN_LOW};

    fn bg() -> [u8; 4] {
        [BACKGROUND.red, BACKGROUND.green, BACKGROUND.blue, BACKGROUND.alpha]
    }

    fn corners(size: u32) -> [(u32, u32); 4] {
        let last = size - 1;
        [(0, 0), (last, 0), (0, last), (last, last)]
    }

    #[test]
    fn output_has_requested_dimensions() {
        for size in [1, 16, 48, 64, 100] {
            for backdrop in [Backdrop::Opaque, Backdrop::Transparent] {
                let img = render_icon(size, backdrop).unwrap();
                assert_eq!(img.dimensions(), (size, size));
            }
        }
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(matches!(render_icon(0, Backdrop::Opaque), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn transparent_corners_are_clear() {
        let img = render_icon(200, Backdrop::Transparent).unwrap();
        for (x, y) in corners(200) {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn opaque_corners_are_background() {
        let img = render_icon(200, Backdrop::Opaque).unwrap();
        for (x, y) in corners(200) {
            assert_eq!(img.get_pixel(x, y).0, bg(), "corner ({x}, {y})");
        }
        // Left margin, before the glow buffer starts.
        assert_eq!(img.get_pixel(5, 100).0, bg());
    }

    #[test]
    fn glow_only_on_opaque_backdrop() {
        // Inside the glow circle, left of the shield outline.
        let opaque = render_icon(200, Backdrop::Opaque).unwrap();
        let lit = opaque.get_pixel(24, 100);
        assert!(lit[1] > BACKGROUND.green, "glow should tint the background: {:?}", lit.0);
        // The glow is pasted through its own alpha, alpha channel included.
        assert!(lit[3] < 255, "glow should lower canvas alpha: {:?}", lit.0);

        let transparent = render_icon(200, Backdrop::Transparent).unwrap();
        assert_eq!(transparent.get_pixel(24, 100)[3], 0);
    }

    #[test]
    fn vehicle_is_drawn_on_both_backdrops() {
        let cyan = [CYAN_LOW.red, CYAN_LOW.green, CYAN_LOW.blue, 255];
        for backdrop in [Backdrop::Opaque, Backdrop::Transparent] {
            let img = render_icon(200, backdrop).unwrap();
            assert_eq!(img.get_pixel(100, 120).0, cyan);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        create_icon(64, &first, Backdrop::Opaque).unwrap();
        create_icon(64, &second, Backdrop::Opaque).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn saved_png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adaptive.png");
        create_icon(32, &path, Backdrop::Transparent).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (32, 32));
        assert_eq!(loaded.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn ico_extension_writes_icon_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicon.ico");
        create_icon(64, &path, Backdrop::Opaque).unwrap();

        assert_eq!(image::ImageFormat::from_path(&path).unwrap(), image::ImageFormat::Ico);
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (64, 64));
    }

    #[test]
    fn missing_parent_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");
        let err = create_icon(16, &path, Backdrop::Opaque).unwrap_err();
        assert!(matches!(err, Error::Image { .. }));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("assets").join("nested");
        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }
}

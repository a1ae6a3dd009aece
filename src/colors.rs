//! The fixed icon palette.
//!
//! Every icon uses the same colors regardless of size or backdrop. The two
//! translucent tints share the cyan-low hue and differ only in alpha.

use palette::Srgba;
use resvg::tiny_skia::{Color, Paint};

/// Canvas fill for opaque icons (`#020617`).
pub const BACKGROUND: Srgba<u8> = Srgba::new(2, 6, 23, 255);

/// Shield outline and vehicle fill (`#22d3ee`).
pub const CYAN_LOW: Srgba<u8> = Srgba::new(34, 211, 238, 255);

/// Pulse line (`#0891b2`).
pub const CYAN_HIGH: Srgba<u8> = Srgba::new(8, 145, 178, 255);

/// Shield fill (`#1e293b`).
pub const SLATE: Srgba<u8> = Srgba::new(30, 41, 59, 255);

/// Fill of the glow circle before it is blurred.
pub const GLOW_TINT: Srgba<u8> = Srgba::new(34, 211, 238, 30);

/// Stroke of the radar rings.
pub const RING_TINT: Srgba<u8> = Srgba::new(34, 211, 238, 100);

/// Builds an anti-aliased paint for a palette color.
pub(crate) fn paint(color: Srgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
    paint.anti_alias = true;
    paint
}

/// Converts a palette color into a tiny-skia fill color.
pub(crate) fn skia_color(color: Srgba<u8>) -> Color {
    Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;
    use std::str::FromStr;

    #[test]
    fn constants_match_hex_codes() {
        for (color, hex) in [
            (BACKGROUND, "#020617"),
            (CYAN_LOW, "#22d3ee"),
            (CYAN_HIGH, "#0891b2"),
            (SLATE, "#1e293b"),
        ] {
            assert_eq!(color.color, Srgb::<u8>::from_str(hex).unwrap(), "{hex}");
            assert_eq!(color.alpha, 255);
        }
    }

    #[test]
    fn tints_share_cyan_hue() {
        assert_eq!(GLOW_TINT.color, CYAN_LOW.color);
        assert_eq!(RING_TINT.color, CYAN_LOW.color);
        assert_eq!(GLOW_TINT.alpha, 30);
        assert_eq!(RING_TINT.alpha, 100);
    }

    #[test]
    fn paint_is_anti_aliased() {
        assert!(paint(SLATE).anti_alias);
    }
}

//! Icon shapes on the 100-unit design grid and their pixel-space scaling.
//!
//! All coordinates are authored against a square grid of [`DESIGN_GRID`]
//! units. [`IconGeometry::at_size`] multiplies every coordinate by
//! `size / DESIGN_GRID`, so vertex positions scale linearly with the output
//! size. Stroke widths and the glow buffer are truncated to whole pixels.

/// Side length of the design grid.
pub const DESIGN_GRID: f32 = 100.0;

/// Shield hexagon: top, right top, right side, bottom, left side, left top.
const SHIELD: [(f32, f32); 6] = [
    (50.0, 10.0),
    (85.0, 25.0),
    (85.0, 50.0),
    (50.0, 90.0),
    (15.0, 50.0),
    (15.0, 25.0),
];
const SHIELD_STROKE: f32 = 2.0;

const RADAR_CENTER: (f32, f32) = (50.0, 50.0);
const RADAR_RADII: [f32; 3] = [15.0, 25.0, 35.0];
const RADAR_STROKE: f32 = 0.5;

const VEHICLE_BODY: [(f32, f32); 4] = [(35.0, 65.0), (65.0, 65.0), (62.0, 55.0), (38.0, 55.0)];
const VEHICLE_ROOF: [(f32, f32); 4] = [(40.0, 55.0), (60.0, 55.0), (56.0, 45.0), (44.0, 45.0)];

/// Flat, peak up, peak down, flat.
const PULSE_Y: f32 = 50.0;
const PULSE: [(f32, f32); 6] = [
    (25.0, PULSE_Y),
    (40.0, PULSE_Y),
    (45.0, PULSE_Y - 10.0),
    (55.0, PULSE_Y + 10.0),
    (60.0, PULSE_Y),
    (75.0, PULSE_Y),
];
const PULSE_STROKE: f32 = 1.5;

const GLOW_SIDE: f32 = 80.0;
const GLOW_OFFSET: f32 = 10.0;
const GLOW_BLUR: f32 = 10.0;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Converts design-grid units into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    pub fn for_size(size: u32) -> Self {
        Self(size as f32 / DESIGN_GRID)
    }

    /// Scales a single grid length.
    pub fn px(&self, value: f32) -> f32 {
        value * self.0
    }

    /// Scales a grid coordinate pair.
    pub fn point(&self, (x, y): (f32, f32)) -> Point {
        Point::new(self.px(x), self.px(y))
    }

    /// Scales a grid length and truncates it to whole pixels.
    pub fn whole_px(&self, value: f32) -> u32 {
        self.px(value) as u32
    }

    /// Outline width in whole pixels. Zero means the outline is not drawn.
    pub fn stroke(&self, value: f32) -> f32 {
        self.whole_px(value) as f32
    }

    /// Line width in whole pixels. Lines are always at least one pixel wide.
    pub fn line_width(&self, value: f32) -> f32 {
        self.whole_px(value).max(1) as f32
    }

    fn points<const N: usize>(&self, grid: &[(f32, f32); N]) -> [Point; N] {
        grid.map(|p| self.point(p))
    }
}

/// Placement of the blurred glow buffer on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowGeometry {
    /// Side of the square glow buffer in pixels.
    pub side: u32,
    /// Top-left position of the buffer on the canvas (same for x and y).
    pub offset: u32,
    /// Gaussian blur radius in pixels.
    pub blur_radius: f32,
}

/// Every shape of the icon, scaled for one output size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGeometry {
    pub scale: Scale,
    pub glow: GlowGeometry,
    pub shield: [Point; 6],
    pub shield_stroke: f32,
    pub radar_center: Point,
    pub radar_radii: [f32; 3],
    pub radar_stroke: f32,
    pub vehicle_body: [Point; 4],
    pub vehicle_roof: [Point; 4],
    pub pulse: [Point; 6],
    pub pulse_stroke: f32,
}

impl IconGeometry {
    /// Computes the scaled shapes for a `size` x `size` icon.
    pub fn at_size(size: u32) -> Self {
        let s = Scale::for_size(size);
        Self {
            scale: s,
            glow: GlowGeometry {
                side: s.whole_px(GLOW_SIDE),
                offset: s.whole_px(GLOW_OFFSET),
                blur_radius: s.px(GLOW_BLUR),
            },
            shield: s.points(&SHIELD),
            shield_stroke: s.stroke(SHIELD_STROKE),
            radar_center: s.point(RADAR_CENTER),
            radar_radii: RADAR_RADII.map(|r| s.px(r)),
            radar_stroke: s.stroke(RADAR_STROKE),
            vehicle_body: s.points(&VEHICLE_BODY),
            vehicle_roof: s.points(&VEHICLE_ROOF),
            pulse: s.points(&PULSE),
            pulse_stroke: s.line_width(PULSE_STROKE),
        }
    }

    /// All polygon and polyline vertices in drawing order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.shield
            .iter()
            .chain(&self.vehicle_body)
            .chain(&self.vehicle_roof)
            .chain(&self.pulse)
            .copied()
    }
}

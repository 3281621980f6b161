//! The "Lightning Fill" icon: a blue rounded tile carrying form lines with a
//! yellow lightning bolt striking through them.
//!
//! All coordinates are derived from the target size so the same routine
//! produces every icon in the set. Below [`DETAILED_MIN_SIZE`] a simpler
//! variant keeps the artwork legible.

use crate::canvas::{Canvas, Joint, RoundedRect};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use log::debug;

/// Smallest size that gets the three form lines and the glowing bolt
pub const DETAILED_MIN_SIZE: u32 = 48;

const DETAILED_BOLT: [(f32, f32); 6] = [
    (0.55, 0.20),
    (0.45, 0.45),
    (0.52, 0.45),
    (0.42, 0.75),
    (0.50, 0.50),
    (0.45, 0.50),
];

const SIMPLE_BOLT: [(f32, f32); 4] = [(0.55, 0.25), (0.45, 0.50), (0.52, 0.50), (0.42, 0.75)];

/// Colors used by the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Tile fill, electric blue
    pub background: Rgba<u8>,
    /// Gradient color fading down from the top of the tile
    pub highlight: Rgba<u8>,
    /// Semi-transparent form lines
    pub form: Rgba<u8>,
    /// Lightning bolt and its glow
    pub bolt: Rgba<u8>,
    /// Thin highlight running along the bolt
    pub bolt_core: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba([37, 99, 235, 255]),
            highlight: Rgba([59, 130, 246, 255]),
            form: Rgba([255, 255, 255, 180]),
            bolt: Rgba([250, 204, 21, 255]),
            bolt_core: Rgba([255, 255, 200, 255]),
        }
    }
}

/// Draw the icon at `size`x`size`
pub fn draw_icon(size: u32, palette: &Palette) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size, size)?;

    let tile = draw_background(&mut canvas, size, palette);
    debug!("{size}px: tile {tile:?}");

    draw_form_lines(&mut canvas, size, palette);
    draw_bolt(&mut canvas, size, palette);

    Ok(canvas.into_image())
}

/// Background tile plus the highlight gradient. Returns the tile shape.
fn draw_background(canvas: &mut Canvas, size: u32, palette: &Palette) -> RoundedRect {
    let padding = (size / 16) as f32;
    let corner_radius = (size / 8) as f32;
    let far = size as f32 - padding;

    let tile = RoundedRect::from_corners(padding, padding, far, far, corner_radius);
    canvas.fill_rounded_rect(tile, palette.background);
    canvas.fill_vertical_fade(&tile, padding, size as f32 / 2.0, palette.highlight, 100);

    tile
}

fn draw_form_lines(canvas: &mut Canvas, size: u32, palette: &Palette) {
    let left = (size / 4) as f32;
    let right = (size * 3 / 4) as f32;

    if size >= DETAILED_MIN_SIZE {
        let line_width = (size / 32).max(1);
        let spacing = size / 6;
        let start = size / 4;

        for i in 0..3 {
            let y = (start + i * spacing) as f32;
            let bar = RoundedRect::from_corners(
                left,
                y,
                right,
                y + line_width as f32,
                (line_width / 2) as f32,
            );
            canvas.fill_rounded_rect(bar, palette.form);
        }
    } else {
        // Single 3px bar centred on the middle row
        let y = (size / 2) as f32 - 1.0;
        canvas.fill_rect(left, y, right - left, 3.0, palette.form);
    }
}

fn draw_bolt(canvas: &mut Canvas, size: u32, palette: &Palette) {
    let scale = |fractions: &[(f32, f32)]| -> Vec<(f32, f32)> {
        fractions
            .iter()
            .map(|&(fx, fy)| (size as f32 * fx, size as f32 * fy))
            .collect()
    };

    if size < DETAILED_MIN_SIZE {
        canvas.stroke_polyline(&scale(&SIMPLE_BOLT[..]), palette.bolt, 2.0, Joint::Miter);
        return;
    }

    let points = scale(&DETAILED_BOLT[..]);
    let bolt_width = (size / 16).max(2);
    let Rgba([r, g, b, _]) = palette.bolt;

    // Outer glow, widest pass first
    for offset in (1..=3u32).rev() {
        let glow = Rgba([r, g, b, (50 * offset) as u8]);
        let width = (bolt_width + offset * 2) as f32;
        canvas.stroke_polyline(&points, glow, width, Joint::Round);
    }

    canvas.stroke_polyline(&points, palette.bolt, bolt_width as f32, Joint::Round);

    let core_width = (bolt_width / 2).max(1) as f32;
    canvas.stroke_polyline(&points, palette.bolt_core, core_width, Joint::Round);
}

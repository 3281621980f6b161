//! Raster canvas used to draw icons
//!
//! Wraps a `tiny_skia::Pixmap` and exposes the handful of primitives the icon
//! design needs. Every primitive composites source-over with anti-aliasing.
//! Pixels are kept premultiplied while drawing and converted to a straight
//! alpha `RgbaImage` once the canvas is finished.

use anyhow::{anyhow, Result};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

/// Cubic bezier handle length for approximating a quarter circle
const BEZIER_K: f32 = 0.552_284_8;

/// How consecutive segments of a polyline are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    /// Sharp corners
    Miter,
    /// Rounded ("curve") corners
    Round,
}

impl From<Joint> for LineJoin {
    fn from(joint: Joint) -> Self {
        match joint {
            Joint::Miter => LineJoin::Miter,
            Joint::Round => LineJoin::Round,
        }
    }
}

/// Axis-aligned rectangle with circular corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    /// Build from two corners. The radius is clamped to half the shorter side.
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) -> Self {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        let width = right - left;
        let height = bottom - top;
        let radius = radius.max(0.0).min(width.min(height) / 2.0);

        Self {
            x: left,
            y: top,
            width,
            height,
            radius,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal extent of the shape on the scanline at `y`.
    ///
    /// Returns `None` when the scanline does not cross the shape.
    pub fn span_at(&self, y: f32) -> Option<(f32, f32)> {
        if y < self.y || y > self.bottom() {
            return None;
        }

        let r = self.radius;
        let dy = if y < self.y + r {
            self.y + r - y
        } else if y > self.bottom() - r {
            y - (self.bottom() - r)
        } else {
            0.0
        };

        let inset = if dy > 0.0 {
            r - (r * r - dy * dy).max(0.0).sqrt()
        } else {
            0.0
        };

        let (left, right) = (self.x + inset, self.right() - inset);
        if right <= left {
            return None;
        }
        Some((left, right))
    }

    fn to_path(self) -> Option<Path> {
        let Self {
            x,
            y,
            width,
            height,
            radius: r,
        } = self;
        let (right, bottom) = (x + width, y + height);
        let k = r * BEZIER_K;

        let mut pb = PathBuilder::new();
        pb.move_to(x + r, y);
        pb.line_to(right - r, y);
        pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
        pb.line_to(right, bottom - r);
        pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
        pb.line_to(x + r, bottom);
        pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
        pb.line_to(x, y + r);
        pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
        pb.close();
        pb.finish()
    }
}

/// An in-memory RGBA drawing surface
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("Invalid canvas size: {}x{}", width, height))?;
        Ok(Self { pixmap })
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba<u8>) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    pub fn fill_rounded_rect(&mut self, shape: RoundedRect, color: Rgba<u8>) {
        if shape.radius <= 0.0 {
            self.fill_rect(shape.x, shape.y, shape.width, shape.height, color);
            return;
        }
        if let Some(path) = shape.to_path() {
            self.fill(&path, color);
        }
    }

    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
        let kx = rx * BEZIER_K;
        let ky = ry * BEZIER_K;

        let mut pb = PathBuilder::new();
        pb.move_to(cx, cy - ry);
        pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        pb.close();

        if let Some(path) = pb.finish() {
            self.fill(&path, color);
        }
    }

    /// Fill a closed polygon using the non-zero winding rule
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        if let Some(path) = polyline_path(points, true) {
            self.fill(&path, color);
        }
    }

    /// Stroke an open polyline with butt caps
    pub fn stroke_polyline(
        &mut self,
        points: &[(f32, f32)],
        color: Rgba<u8>,
        width: f32,
        joint: Joint,
    ) {
        let Some(path) = polyline_path(points, false) else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: joint.into(),
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Draw a fading gradient of one pixel tall rows inside `shape`.
    ///
    /// Row `i` (counting from `top`) gets `max_alpha * (1 - i / height)`, so
    /// the first row is the most opaque and the fade reaches zero at
    /// `top + height`. Only whole rows are drawn; a fractional `height` still
    /// sets the slope.
    pub fn fill_vertical_fade(
        &mut self,
        shape: &RoundedRect,
        top: f32,
        height: f32,
        color: Rgba<u8>,
        max_alpha: u8,
    ) {
        let rows = height.max(0.0) as u32;
        for i in 0..rows {
            let alpha = (max_alpha as f32 * (1.0 - i as f32 / height)) as u8;
            if alpha == 0 {
                continue;
            }

            let y = top + i as f32;
            if let Some((left, right)) = shape.span_at(y + 0.5) {
                let Rgba([r, g, b, _]) = color;
                self.fill_rect(left, y, right - left, 1.0, Rgba([r, g, b, alpha]));
            }
        }
    }

    /// Finish drawing and convert to a straight alpha image
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();

        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    fn fill(&mut self, path: &Path, color: Rgba<u8>) {
        self.pixmap.fill_path(
            path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn paint(color: Rgba<u8>) -> Paint<'static> {
    let Rgba([r, g, b, a]) = color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn polyline_path(points: &[(f32, f32)], close: bool) -> Option<Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

//! Drawing targets for extracted geometry.
//!
//! Geometry arrives in grid units. A [`Viewport`] maps it to pixels and a
//! [`DrawingSurface`] paints it; [`PixmapSurface`] is the tiny-skia backed
//! implementation used for PNG output.

use isoband::{LineSegment, Point, Polygon, Polyline};
use serde::{Deserialize, Serialize};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::error::{RenderError, RenderResult};
use crate::palette::Color;

/// Anything that can paint polygons and lines.
pub trait DrawingSurface {
    fn fill_polygon(&mut self, polygon: &Polygon, color: Color);

    fn stroke_segment(&mut self, segment: &LineSegment, color: Color, width: f32);

    fn stroke_polyline(&mut self, polyline: &Polyline, color: Color, width: f32);
}

/// Grid-to-pixel mapping: `pixel = offset + scale * point`, with the y axis
/// optionally flipped within `[0, extent_y]` first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub flip_y: bool,
    pub extent_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            flip_y: false,
            extent_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Flip the y axis so `y = 0` lands at the bottom of a plot `extent_y`
    /// grid units tall.
    pub fn flipped(mut self, extent_y: f64) -> Self {
        self.flip_y = true;
        self.extent_y = extent_y;
        self
    }

    pub fn to_pixel(&self, p: &Point) -> (f32, f32) {
        let y = if self.flip_y { self.extent_y - p.y } else { p.y };
        (
            (self.offset_x + p.x * self.scale) as f32,
            (self.offset_y + y * self.scale) as f32,
        )
    }
}

/// A [`DrawingSurface`] backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    viewport: Viewport,
    anti_alias: bool,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32, viewport: Viewport) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
        Ok(Self {
            pixmap,
            viewport,
            anti_alias: true,
        })
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    /// Straight (non-premultiplied) RGBA bytes, row by row.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// RGBA color of one pixel, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn stroke_points(&mut self, points: &[Point], closed: bool, color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        let (x, y) = self.viewport.to_pixel(&points[0]);
        pb.move_to(x, y);
        for p in &points[1..] {
            let (x, y) = self.viewport.to_pixel(p);
            pb.line_to(x, y);
        }
        if closed {
            pb.close();
        }

        let mut stroke = Stroke::default();
        stroke.width = width;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        // Zero-length paths come back as None.
        if let Some(path) = pb.finish() {
            let paint = self.paint(color);
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

impl DrawingSurface for PixmapSurface {
    fn fill_polygon(&mut self, polygon: &Polygon, color: Color) {
        if polygon.len() < 3 {
            return;
        }

        let mut pb = PathBuilder::new();
        let (x, y) = self.viewport.to_pixel(&polygon.vertices[0]);
        pb.move_to(x, y);
        for p in &polygon.vertices[1..] {
            let (x, y) = self.viewport.to_pixel(p);
            pb.line_to(x, y);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            let paint = self.paint(color);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke_segment(&mut self, segment: &LineSegment, color: Color, width: f32) {
        self.stroke_points(&[segment.start, segment.end], false, color, width);
    }

    fn stroke_polyline(&mut self, polyline: &Polyline, color: Color, width: f32) {
        self.stroke_points(&polyline.points, polyline.closed, color, width);
    }
}

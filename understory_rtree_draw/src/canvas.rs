// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas: a raster plus the scale that maps tree coordinates to pixels.

use peniko::Color;
use peniko::color::Rgba8;

use crate::error::CanvasError;
use crate::raster::{PixelBuffer, Raster};
use crate::types::{AxisRect, PixelRect};

/// Outline colors for the two entry kinds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Color of entries that own a child node.
    pub node: Color,
    /// Color of leaf (data) entries.
    pub leaf: Color,
}

impl Palette {
    /// Create a palette from explicit colors.
    pub const fn new(node: Color, leaf: Color) -> Self {
        Self { node, leaf }
    }
}

impl Default for Palette {
    /// Opaque blue for nodes, opaque red for leaves.
    fn default() -> Self {
        Self {
            node: Color::from_rgba8(0x00, 0x00, 0xff, 0xff),
            leaf: Color::from_rgba8(0xff, 0x00, 0x00, 0xff),
        }
    }
}

/// Everything needed to construct a [`Canvas`] over a fresh [`PixelBuffer`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasConfig {
    /// Pixel bounds of the output buffer.
    pub bounds: PixelRect,
    /// Multiplier from tree coordinates to pixels, applied to both axes.
    pub scale: f64,
    /// Outline colors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub palette: Palette,
}

impl CanvasConfig {
    /// Config with the default palette.
    pub fn new(bounds: PixelRect, scale: f64) -> Self {
        Self {
            bounds,
            scale,
            palette: Palette::default(),
        }
    }

    /// Replace the palette.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check that the config describes a usable canvas.
    pub fn validate(&self) -> Result<(), CanvasError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(CanvasError::InvalidScale(self.scale));
        }
        if self.bounds.is_empty() {
            return Err(CanvasError::EmptyBounds(self.bounds));
        }
        Ok(())
    }
}

/// A raster that tree rectangles are drawn onto.
///
/// Tree coordinates are mapped to pixels by [`Canvas::normalize`]. Drawing never
/// clamps: pixels that land outside the raster are handed to [`Raster::set_pixel`]
/// as-is, and [`PixelBuffer`] drops them.
#[derive(Clone, Debug)]
pub struct Canvas<R: Raster = PixelBuffer> {
    raster: R,
    scale: f64,
    palette: Palette,
}

impl Canvas<PixelBuffer> {
    /// Allocate a cleared buffer covering `bounds` with the default palette.
    ///
    /// `scale` must be positive; this is only checked in debug builds.
    /// Use [`Canvas::from_config`] for a checked constructor.
    pub fn new(bounds: PixelRect, scale: f64) -> Self {
        Self::with_palette(bounds, scale, Palette::default())
    }

    /// Allocate a cleared buffer covering `bounds` with the given palette.
    pub fn with_palette(bounds: PixelRect, scale: f64, palette: Palette) -> Self {
        Self::from_raster(PixelBuffer::new(bounds), scale, palette)
    }

    /// Validate `config` and allocate the canvas it describes.
    pub fn from_config(config: &CanvasConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        Ok(Self::with_palette(config.bounds, config.scale, config.palette))
    }
}

impl<R: Raster> Canvas<R> {
    /// Draw into an existing raster.
    pub fn from_raster(raster: R, scale: f64, palette: Palette) -> Self {
        debug_assert!(scale > 0.0, "canvas scale must be positive");
        log::debug!(
            "canvas {}x{} at scale {scale}",
            raster.width(),
            raster.height()
        );
        Self {
            raster,
            scale,
            palette,
        }
    }

    /// The coordinate scale factor.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// The outline colors.
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The underlying raster.
    pub const fn raster(&self) -> &R {
        &self.raster
    }

    /// Mutable access to the underlying raster.
    pub fn raster_mut(&mut self) -> &mut R {
        &mut self.raster
    }

    /// Give up the canvas and return the raster, e.g. for encoding.
    pub fn into_raster(self) -> R {
        self.raster
    }

    /// Map a tree coordinate to a pixel coordinate: `ceil(value * scale)`.
    pub fn normalize(&self, value: f64) -> i64 {
        ceil_to_i64(value * self.scale)
    }

    /// Draw the outline of the pixel rectangle with corners `(x0, y0)` and `(x1, y1)`.
    ///
    /// Both horizontal edges run from `x0` up to `x1` and both vertical edges from `y0`
    /// up to `y1`, inclusive. Degenerate rectangles collapse to a line or a single pixel.
    /// Corners are not reordered: when `x0 > x1` the horizontal edges draw nothing, and
    /// likewise the vertical edges when `y0 > y1`.
    pub fn draw_rect_outline(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let color = color.to_rgba8();
        self.hline(x0, y0, x1, color);
        self.hline(x0, y1, x1, color);
        self.vline(x0, y0, y1, color);
        self.vline(x1, y0, y1, color);
    }

    /// Normalize both corners of `rect` and draw its outline.
    pub fn draw_normalized_rect<const D: usize>(&mut self, rect: &AxisRect<D>, color: Color) {
        let (x0, y0) = (self.normalize(rect.x0()), self.normalize(rect.y0()));
        let (x1, y1) = (self.normalize(rect.x1()), self.normalize(rect.y1()));
        log::trace!("outline ({x0}, {y0})-({x1}, {y1})");
        self.draw_rect_outline(x0, y0, x1, y1, color);
    }

    fn hline(&mut self, x0: i64, y: i64, x1: i64, color: Rgba8) {
        for x in x0..=x1 {
            self.raster.set_pixel(x, y, color);
        }
    }

    fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Rgba8) {
        for y in y0..=y1 {
            self.raster.set_pixel(x, y, color);
        }
    }
}

#[inline]
fn ceil_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Pixel coordinates saturate at the i64 range."
    )]
    let i = v as i64;
    if (i as f64) < v { i.saturating_add(1) } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::CLEAR;

    const INK: Color = Color::from_rgba8(0, 200, 0, 255);

    fn ink() -> Rgba8 {
        INK.to_rgba8()
    }

    fn painted(canvas: &Canvas) -> alloc::vec::Vec<(i64, i64)> {
        canvas
            .raster()
            .iter()
            .filter(|(_, _, c)| *c != CLEAR)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn normalize_is_ceil_of_scaled_value() {
        let c = Canvas::new(PixelRect::from_size(1, 1), 2.5);
        assert_eq!(c.normalize(0.0), 0);
        assert_eq!(c.normalize(1.0), 3);
        assert_eq!(c.normalize(2.0), 5);
        assert_eq!(c.normalize(0.01), 1);
        assert_eq!(c.normalize(-0.5), -1);
        assert_eq!(c.normalize(-1.0), -2);
    }

    #[test]
    fn normalize_is_monotone() {
        let c = Canvas::new(PixelRect::from_size(1, 1), 0.75);
        let mut prev = c.normalize(0.0);
        for i in 1..2000 {
            let n = c.normalize(f64::from(i) * 0.013);
            assert!(n >= prev, "normalize decreased at step {i}");
            prev = n;
        }
    }

    #[test]
    fn outline_sets_only_the_perimeter() {
        let mut c = Canvas::new(PixelRect::from_size(12, 12), 1.0);
        c.draw_rect_outline(2, 3, 6, 8, INK);
        let px = painted(&c);
        // 2 * 5 + 2 * 6 - 4 corners
        assert_eq!(px.len(), 18);
        for (x, y) in px {
            assert!(x == 2 || x == 6 || y == 3 || y == 8, "({x}, {y}) is not on the edge");
        }
        assert_eq!(c.raster().pixel(2, 3), Some(ink()));
        assert_eq!(c.raster().pixel(6, 8), Some(ink()));
        assert_eq!(c.raster().pixel(4, 5), Some(CLEAR));
    }

    #[test]
    fn point_rect_sets_one_pixel() {
        let mut c = Canvas::new(PixelRect::from_size(8, 8), 1.0);
        c.draw_rect_outline(5, 5, 5, 5, INK);
        assert_eq!(painted(&c), [(5, 5)]);
    }

    #[test]
    fn line_rect_collapses_to_a_line() {
        let mut c = Canvas::new(PixelRect::from_size(8, 8), 1.0);
        c.draw_rect_outline(1, 4, 6, 4, INK);
        assert_eq!(painted(&c).len(), 6);
    }

    #[test]
    fn reversed_x_skips_horizontal_edges() {
        // Corners are not reordered; only the vertical edges at x = 6 and x = 2 are drawn.
        let mut c = Canvas::new(PixelRect::from_size(10, 10), 1.0);
        c.draw_rect_outline(6, 1, 2, 4, INK);
        let px = painted(&c);
        assert_eq!(px.len(), 8);
        assert!(px.iter().all(|(x, _)| *x == 6 || *x == 2));
    }

    #[test]
    fn reversed_y_skips_vertical_edges() {
        let mut c = Canvas::new(PixelRect::from_size(10, 10), 1.0);
        c.draw_rect_outline(1, 6, 4, 2, INK);
        let px = painted(&c);
        assert_eq!(px.len(), 8);
        assert!(px.iter().all(|(_, y)| *y == 6 || *y == 2));
    }

    #[test]
    fn reversed_both_axes_draws_nothing() {
        let mut c = Canvas::new(PixelRect::from_size(10, 10), 1.0);
        c.draw_rect_outline(6, 6, 2, 2, INK);
        assert!(painted(&c).is_empty());
    }

    #[test]
    fn out_of_range_edges_are_dropped_by_the_buffer() {
        let mut c = Canvas::new(PixelRect::from_size(4, 4), 1.0);
        c.draw_rect_outline(-2, -2, 1, 1, INK);
        // Only the parts of the right and bottom edges inside the buffer remain.
        let mut px = painted(&c);
        px.sort_unstable();
        assert_eq!(px, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn normalized_rect_scales_every_corner() {
        let mut c = Canvas::new(PixelRect::from_size(30, 30), 2.0);
        c.draw_normalized_rect(&AxisRect::new([2.0, 2.0], [5.0, 5.0]), INK);
        let px = painted(&c);
        assert_eq!(px.len(), 24);
        assert_eq!(c.raster().pixel(4, 4), Some(ink()));
        assert_eq!(c.raster().pixel(10, 10), Some(ink()));
        assert_eq!(c.raster().pixel(2, 2), Some(CLEAR));
    }

    #[test]
    fn config_rejects_bad_scale_and_empty_bounds() {
        let bounds = PixelRect::from_size(8, 8);
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Canvas::from_config(&CanvasConfig::new(bounds, scale)).unwrap_err();
            assert!(matches!(err, CanvasError::InvalidScale(_)));
        }
        let empty = PixelRect::new(0, 0, 0, 8);
        assert_eq!(
            Canvas::from_config(&CanvasConfig::new(empty, 1.0)).unwrap_err(),
            CanvasError::EmptyBounds(empty)
        );
        let c = Canvas::from_config(&CanvasConfig::new(bounds, 0.5)).unwrap();
        assert_eq!(c.scale(), 0.5);
        assert_eq!(*c.palette(), Palette::default());
    }

    #[test]
    fn default_palette_is_opaque_blue_and_red() {
        let p = Palette::default();
        assert_eq!(p.node.to_rgba8(), Rgba8 { r: 0, g: 0, b: 255, a: 255 });
        assert_eq!(p.leaf.to_rgba8(), Rgba8 { r: 255, g: 0, b: 0, a: 255 });
    }
}

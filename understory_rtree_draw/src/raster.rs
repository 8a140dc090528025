// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster trait and the default in-memory pixel buffer.

use alloc::vec;
use alloc::vec::Vec;

use peniko::color::Rgba8;

use crate::types::PixelRect;

/// Fully transparent black, the initial value of every [`PixelBuffer`] pixel.
pub const CLEAR: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// Pixel storage a [`Canvas`](crate::Canvas) draws into.
///
/// Writes overwrite the stored value; there is no blending. What happens to writes
/// outside [`Raster::bounds`] is up to the implementation.
pub trait Raster {
    /// Pixel-space bounds of the raster.
    fn bounds(&self) -> PixelRect;

    /// Read the pixel at `(x, y)`, or `None` outside the bounds.
    fn pixel(&self, x: i64, y: i64) -> Option<Rgba8>;

    /// Write the pixel at `(x, y)`.
    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8);

    /// Width in pixels.
    fn width(&self) -> u32 {
        self.bounds().width()
    }

    /// Height in pixels.
    fn height(&self) -> u32 {
        self.bounds().height()
    }
}

/// Row-major RGBA8 pixel buffer.
///
/// Writes outside the bounds are silently dropped.
#[derive(Clone, PartialEq)]
pub struct PixelBuffer {
    bounds: PixelRect,
    pixels: Vec<Rgba8>,
}

impl PixelBuffer {
    /// Allocate a buffer covering `bounds` with every pixel set to [`CLEAR`].
    pub fn new(bounds: PixelRect) -> Self {
        let len = bounds.width() as usize * bounds.height() as usize;
        Self {
            bounds,
            pixels: vec![CLEAR; len],
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Offsets are bounded by the allocated buffer length."
        )]
        let (col, row) = (
            x.abs_diff(self.bounds.x0) as usize,
            y.abs_diff(self.bounds.y0) as usize,
        );
        Some(row * self.bounds.width() as usize + col)
    }

    /// Iterate over every pixel as `(x, y, color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64, Rgba8)> + '_ {
        let PixelRect { x0, y0, .. } = self.bounds;
        let w = self.bounds.width().max(1) as usize;
        self.pixels.iter().enumerate().map(move |(i, c)| {
            #[allow(
                clippy::cast_possible_wrap,
                reason = "Buffer dimensions fit in u32, so offsets fit in i64."
            )]
            let (col, row) = ((i % w) as i64, (i / w) as i64);
            (x0 + col, y0 + row, *c)
        })
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Rgba8) -> usize {
        self.pixels.iter().filter(|c| **c == color).count()
    }

    /// Raw RGBA bytes in row-major order, for handing to an encoder.
    pub fn as_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let painted = self.pixels.iter().filter(|c| **c != CLEAR).count();
        f.debug_struct("PixelBuffer")
            .field("bounds", &self.bounds)
            .field("painted", &painted)
            .finish_non_exhaustive()
    }
}

impl Raster for PixelBuffer {
    fn bounds(&self) -> PixelRect {
        self.bounds
    }

    fn pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }
}

#[cfg(feature = "image")]
impl Raster for image::RgbaImage {
    fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width(), self.height())
    }

    fn pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        self.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Rgba8 { r, g, b, a }
        })
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(p) = self.get_pixel_mut_checked(x, y) {
            *p = image::Rgba([color.r, color.g, color.b, color.a]);
        }
    }
}

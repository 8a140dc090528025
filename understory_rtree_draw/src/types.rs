// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry types: continuous tree-space rectangles and pixel-space bounds.

use core::cmp::Ordering;

use kurbo::Rect;

/// Axis-aligned rectangle in the tree's continuous coordinate space.
///
/// `D` is the dimensionality of the tree. Rendering uses axis 0 as x and axis 1 as y;
/// any further axes are ignored, which projects the rectangle onto the xy-plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisRect<const D: usize = 2> {
    min: [f64; D],
    max: [f64; D],
}

impl<const D: usize> AxisRect<D> {
    /// Create a rectangle from its minimum and maximum corners.
    ///
    /// No `min[d]` may exceed `max[d]`. Debug builds assert this; NaN coordinates are not
    /// checked and map to pixel 0 when drawn.
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        const { assert!(D >= 2, "AxisRect needs at least an x and a y axis") };
        debug_assert!(
            min.iter()
                .zip(max.iter())
                .all(|(a, b)| a.partial_cmp(b) != Some(Ordering::Greater)),
            "AxisRect min corner must not exceed max corner"
        );
        Self { min, max }
    }

    /// Minimum corner.
    pub const fn min(&self) -> [f64; D] {
        self.min
    }

    /// Maximum corner.
    pub const fn max(&self) -> [f64; D] {
        self.max
    }

    /// Minimum x (left).
    pub const fn x0(&self) -> f64 {
        self.min[0]
    }

    /// Minimum y (top).
    pub const fn y0(&self) -> f64 {
        self.min[1]
    }

    /// Maximum x (right).
    pub const fn x1(&self) -> f64 {
        self.max[0]
    }

    /// Maximum y (bottom).
    pub const fn y1(&self) -> f64 {
        self.max[1]
    }

    /// Smallest rectangle enclosing both `self` and `other`, on every axis.
    pub fn union(&self, other: &Self) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        for (m, o) in min.iter_mut().zip(other.min) {
            *m = m.min(o);
        }
        for (m, o) in max.iter_mut().zip(other.max) {
            *m = m.max(o);
        }
        Self { min, max }
    }

    /// The xy-projection of this rectangle as a Kurbo rect.
    pub const fn to_kurbo(&self) -> Rect {
        Rect::new(self.min[0], self.min[1], self.max[0], self.max[1])
    }
}

impl AxisRect<2> {
    /// Create a 2D rectangle from origin and size.
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new([x, y], [x + w, y + h])
    }
}

impl From<Rect> for AxisRect<2> {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new([r.x0, r.y0], [r.x1, r.y1])
    }
}

/// Pixel-space bounds of a raster.
///
/// `x0`/`y0` are inclusive, `x1`/`y1` exclusive. The origin is the top-left corner and
/// need not be `(0, 0)`; pixels are addressed by their absolute coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    /// Minimum x (inclusive).
    pub x0: i64,
    /// Minimum y (inclusive).
    pub y0: i64,
    /// Maximum x (exclusive).
    pub x1: i64,
    /// Maximum y (exclusive).
    pub y1: i64,
}

impl PixelRect {
    /// Create pixel bounds from min (inclusive) and max (exclusive) corners.
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds of a `width` × `height` raster anchored at the origin.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    /// Width in pixels; zero when inverted.
    pub fn width(&self) -> u32 {
        span(self.x0, self.x1)
    }

    /// Height in pixels; zero when inverted.
    pub fn height(&self) -> u32 {
        span(self.y0, self.y1)
    }

    /// Whether the bounds cover no pixels.
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Whether the pixel at `(x, y)` lies inside the bounds.
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }
}

fn span(lo: i64, hi: i64) -> u32 {
    if hi <= lo {
        return 0;
    }
    u32::try_from(hi.abs_diff(lo)).unwrap_or(u32::MAX)
}

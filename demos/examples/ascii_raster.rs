// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw a tiny tree into a custom raster and print it as text.
//!
//! Shows how to plug a different pixel store into `Canvas` via the `Raster` trait.
//!
//! Run:
//! - `cargo run -p understory_rtree_draw_demos --example ascii_raster`

use peniko::color::Rgba8;
use understory_rtree_draw::{
    AxisRect, CLEAR, Canvas, Entry, Node, Palette, PixelRect, Raster, render_node,
};

struct TextGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl TextGrid {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec!['.'; (width * height) as usize],
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }
}

// Node outlines are blue, leaves red.
fn glyph(c: Rgba8) -> char {
    match (c.r, c.b) {
        (0, 255) => '#',
        (255, 0) => 'o',
        _ => '?',
    }
}

impl Raster for TextGrid {
    fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }

    fn pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        let (r, b) = match self.cells[self.index(x, y)?] {
            '#' => (0, 255),
            'o' => (255, 0),
            _ => return Some(CLEAR),
        };
        Some(Rgba8 { r, g: 0, b, a: 255 })
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = glyph(color);
        }
    }
}

fn main() {
    let leaves: Node = [
        AxisRect::new([1.0, 1.0], [6.0, 4.0]),
        AxisRect::new([8.0, 2.0], [12.0, 7.0]),
        AxisRect::new([3.0, 6.0], [5.0, 8.0]),
    ]
    .into_iter()
    .map(Entry::leaf)
    .collect();
    let root: Node = Entry::fitted(leaves).into_iter().collect();

    let mut canvas = Canvas::from_raster(TextGrid::new(28, 20), 2.0, Palette::default());
    render_node(&mut canvas, &root);

    let grid = canvas.into_raster();
    for row in grid.cells.chunks(grid.width as usize) {
        println!("{}", row.iter().collect::<String>());
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a synthetic two-level R-tree to a PNG.
//!
//! Leaves are scattered in clusters; each cluster becomes an internal entry fitted to its
//! leaves, and clusters are grouped again under a second internal level.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_rtree_draw_demos --example render_png -- out.png`

use std::error::Error;

use image::RgbaImage;
use kurbo::Rect;
use understory_rtree_draw::{Canvas, Entry, Node, Palette, TreeRenderer};

const WORLD: f64 = 100.0;
const SCALE: f64 = 4.0;

struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn cluster(rng: &mut Rng, cx: f64, cy: f64, n: usize) -> Node {
    (0..n)
        .map(|_| {
            let x = cx + rng.next_f64() * 12.0;
            let y = cy + rng.next_f64() * 12.0;
            let w = 1.0 + rng.next_f64() * 3.0;
            let h = 1.0 + rng.next_f64() * 3.0;
            Entry::leaf(Rect::new(x, y, x + w, y + h).into())
        })
        .collect()
}

fn build_tree(rng: &mut Rng) -> Node {
    let mut root = Node::new();
    for gy in 0..2 {
        for gx in 0..2 {
            let ox = f64::from(gx) * WORLD / 2.0 + 4.0;
            let oy = f64::from(gy) * WORLD / 2.0 + 4.0;
            let group: Node = (0..3)
                .filter_map(|i| {
                    let cx = ox + f64::from(i % 2) * 20.0;
                    let cy = oy + f64::from(i / 2) * 20.0;
                    Entry::fitted(cluster(rng, cx, cy, 5))
                })
                .collect();
            if let Some(entry) = Entry::fitted(group) {
                root.push(entry);
            }
        }
    }
    root
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "rtree.png".into());
    let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
    let tree = build_tree(&mut rng);
    log::info!("tree: height {}, {} leaves", tree.height(), tree.leaf_count());

    #[allow(
        clippy::cast_possible_truncation,
        reason = "The world extent is a small constant."
    )]
    let side = (WORLD * SCALE) as u32 + 1;
    let mut canvas = Canvas::from_raster(RgbaImage::new(side, side), SCALE, Palette::default());
    let stats = TreeRenderer::new()
        .with_max_depth(8)
        .render_node(&mut canvas, &tree)?;
    log::info!("{} outlines drawn", stats.outlines());

    canvas.into_raster().save(&out)?;
    log::info!("wrote {out}");
    Ok(())
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_rtree_draw::{AxisRect, Canvas, Entry, Node, PixelRect, TreeRenderer, render_node};

const FANOUT: usize = 8;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Pack entries bottom-up, `FANOUT` per node, until a single root remains.
fn pack(mut level: Vec<Entry>) -> Node {
    while level.len() > FANOUT {
        let mut next = Vec::with_capacity(level.len().div_ceil(FANOUT));
        let mut it = level.into_iter().peekable();
        while it.peek().is_some() {
            let node: Node = it.by_ref().take(FANOUT).collect();
            next.extend(Entry::fitted(node));
        }
        level = next;
    }
    Node::from_entries(level)
}

fn gen_grid_tree(n: usize, cell: f64) -> Node {
    let mut leaves = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            leaves.push(Entry::leaf(AxisRect::from_xywh(x0, y0, cell * 0.8, cell * 0.8)));
        }
    }
    pack(leaves)
}

fn gen_random_tree(count: usize, extent: f64, max_side: f64) -> Node {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut leaves = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.next_f64() * extent;
        let y0 = rng.next_f64() * extent;
        let w = 1.0 + rng.next_f64() * max_side;
        let h = 1.0 + rng.next_f64() * max_side;
        leaves.push(Entry::leaf(AxisRect::from_xywh(x0, y0, w, h)));
    }
    pack(leaves)
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[16usize, 32, 64] {
        let tree = gen_grid_tree(n, 8.0);
        let side = (n * 8) as u32;
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("render_node_n{n}"), |b| {
            b.iter_batched(
                || Canvas::new(PixelRect::from_size(side, side), 1.0),
                |mut canvas| {
                    render_node(&mut canvas, &tree);
                    black_box(canvas);
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("tree_renderer_n{n}"), |b| {
            b.iter_batched(
                || Canvas::new(PixelRect::from_size(side, side), 1.0),
                |mut canvas| {
                    let stats = TreeRenderer::new()
                        .with_max_depth(16)
                        .render_node(&mut canvas, &tree);
                    black_box(stats.ok());
                    black_box(canvas);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    let tree = gen_random_tree(4096, 500.0, 20.0);
    for &scale in &[0.5f64, 1.0, 2.0, 4.0] {
        let side = (520.0 * scale) as u32;
        group.bench_function(format!("random_4096_x{scale}"), |b| {
            b.iter_batched(
                || Canvas::new(PixelRect::from_size(side, side), scale),
                |mut canvas| {
                    render_node(&mut canvas, &tree);
                    black_box(canvas);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_offscreen(c: &mut Criterion) {
    // Every outline lands outside the buffer; measures the dropped-write path.
    let tree = gen_random_tree(4096, 500.0, 20.0);
    c.bench_function("offscreen_random_4096", |b| {
        b.iter_batched(
            || Canvas::new(PixelRect::new(-64, -64, 0, 0), 1.0),
            |mut canvas| {
                render_node(&mut canvas, &tree);
                black_box(canvas);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_grid, bench_scale, bench_offscreen);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rtree_draw --heading-base-level=0

//! Understory R-tree Draw: a debug rasterizer for R-tree bounding rectangles.
//!
//! When tuning split heuristics or chasing a bad query, it helps to see the tree.
//! This crate draws every entry's axis-aligned bounding rectangle onto a pixel buffer:
//!
//! - Entries that own a child node are outlined in the node color (blue by default).
//! - Leaf entries are outlined in the leaf color (red by default).
//! - The walk is depth-first and draws an entry before its subtree, so children are
//!   layered on top of their parent.
//!
//! It is not a spatial index. The index lives elsewhere and hands over its shape as a
//! [`Node`] of [`Entry`] values. Encoding the result (PNG or otherwise) is up to the caller;
//! [`PixelBuffer::as_rgba_bytes`] and, with the `image` feature, drawing straight into an
//! `image::RgbaImage` cover the common cases.
//!
//! # Example
//!
//! ```rust
//! use understory_rtree_draw::{AxisRect, Canvas, Entry, Node, PixelRect, Raster, render_node};
//!
//! // One internal entry holding a single leaf.
//! let leaf = Entry::leaf(AxisRect::new([2.0, 2.0], [5.0, 5.0]));
//! let child = Node::from_entries(vec![leaf]);
//! let root = Node::from_entries(vec![Entry::internal(
//!     AxisRect::new([0.0, 0.0], [10.0, 10.0]),
//!     child,
//! )]);
//!
//! let mut canvas = Canvas::new(PixelRect::from_size(32, 32), 2.0);
//! render_node(&mut canvas, &root);
//!
//! // Corners land on doubled pixel coordinates.
//! let palette = *canvas.palette();
//! let buf = canvas.into_raster();
//! assert_eq!(buf.pixel(20, 20), Some(palette.node.to_rgba8()));
//! assert_eq!(buf.pixel(4, 4), Some(palette.leaf.to_rgba8()));
//! ```
//!
//! # Coordinates
//!
//! A tree coordinate `v` maps to pixel `ceil(v * scale)`, with the same scale on both axes.
//! Only axes 0 and 1 of an [`AxisRect`] are drawn; higher axes are ignored.
//!
//! # Contract
//!
//! Drawing is permissive and never fails:
//!
//! - Nothing is clamped. Pixels outside the raster go to [`Raster::set_pixel`] unchanged, and
//!   [`PixelBuffer`] drops them.
//! - Corners are not reordered. A rectangle with `x0 > x1` draws no horizontal edges (and
//!   likewise for `y`).
//! - [`Canvas::new`] only debug-asserts a positive scale.
//!
//! Checked paths are opt-in: [`Canvas::from_config`] rejects bad scales and empty bounds, and
//! [`TreeRenderer::with_max_depth`] bounds the walk for trees from untrusted sources.
//!
//! # Logging
//!
//! Uses the [`log`] facade: canvas creation and finished renders at `debug`, each outline at
//! `trace`, and depth-limit failures at `warn`.

#![no_std]

extern crate alloc;

pub mod canvas;
pub mod error;
pub mod raster;
pub mod render;
pub mod tree;
pub mod types;

pub use canvas::{Canvas, CanvasConfig, Palette};
pub use error::{CanvasError, RenderError};
pub use raster::{CLEAR, PixelBuffer, Raster};
pub use render::{RenderStats, TreeRenderer, render_entry, render_node};
pub use tree::{Entry, Node};
pub use types::{AxisRect, PixelRect};

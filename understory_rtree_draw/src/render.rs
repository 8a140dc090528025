// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first tree walk that draws every entry's bounding rectangle.
//!
//! Internal entries are drawn in [`Palette::node`](crate::Palette::node) and leaf
//! entries in [`Palette::leaf`](crate::Palette::leaf). An entry is always drawn before
//! its subtree, so child outlines end up on top of their parent's.

use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::raster::Raster;
use crate::tree::{Entry, Node};

/// Draw every entry of `node` and, recursively, of its descendants.
///
/// The walk is unbounded; use [`TreeRenderer::with_max_depth`] for trees from
/// untrusted sources.
pub fn render_node<R: Raster, const D: usize>(canvas: &mut Canvas<R>, node: &Node<D>) {
    for entry in node.entries() {
        render_entry(canvas, entry);
    }
}

/// Draw one entry, then its subtree if it has one.
pub fn render_entry<R: Raster, const D: usize>(canvas: &mut Canvas<R>, entry: &Entry<D>) {
    match entry {
        Entry::Internal { bbox, child } => {
            let color = canvas.palette().node;
            canvas.draw_normalized_rect(bbox, color);
            render_node(canvas, child);
        }
        Entry::Leaf { bbox } => {
            let color = canvas.palette().leaf;
            canvas.draw_normalized_rect(bbox, color);
        }
    }
}

/// What a [`TreeRenderer`] drew.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Outlines drawn in the node color.
    pub internal: usize,
    /// Outlines drawn in the leaf color.
    pub leaves: usize,
    /// Deepest node level visited; the root node is level 0.
    pub depth: usize,
}

impl RenderStats {
    /// Total outlines drawn.
    pub const fn outlines(&self) -> usize {
        self.internal + self.leaves
    }
}

/// Tree walker with an optional depth limit.
///
/// Without a limit this behaves like [`render_node`] and never fails. With a limit,
/// reaching a node deeper than `max_depth` stops the walk with
/// [`RenderError::MaxDepthExceeded`]; everything drawn before that point stays on the
/// canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeRenderer {
    max_depth: Option<usize>,
}

impl TreeRenderer {
    /// Renderer without a depth limit.
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Refuse to descend into nodes deeper than `max_depth` (root node is level 0).
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The configured depth limit, if any.
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Draw `node` as the root of a tree.
    pub fn render_node<R: Raster, const D: usize>(
        &self,
        canvas: &mut Canvas<R>,
        node: &Node<D>,
    ) -> Result<RenderStats, RenderError> {
        let mut stats = RenderStats::default();
        let result = self.walk_node(canvas, node, 0, &mut stats);
        Self::finish(result, stats)
    }

    /// Draw `entry` and its subtree; a child of `entry` is at level 1.
    pub fn render_entry<R: Raster, const D: usize>(
        &self,
        canvas: &mut Canvas<R>,
        entry: &Entry<D>,
    ) -> Result<RenderStats, RenderError> {
        let mut stats = RenderStats::default();
        let result = self.walk_entry(canvas, entry, 0, &mut stats);
        Self::finish(result, stats)
    }

    fn finish(
        result: Result<(), RenderError>,
        stats: RenderStats,
    ) -> Result<RenderStats, RenderError> {
        match result {
            Ok(()) => {
                log::debug!(
                    "rendered {} node and {} leaf outlines, depth {}",
                    stats.internal,
                    stats.leaves,
                    stats.depth
                );
                Ok(stats)
            }
            Err(err) => {
                log::warn!("render stopped after {} outlines: {err}", stats.outlines());
                Err(err)
            }
        }
    }

    fn walk_node<R: Raster, const D: usize>(
        &self,
        canvas: &mut Canvas<R>,
        node: &Node<D>,
        depth: usize,
        stats: &mut RenderStats,
    ) -> Result<(), RenderError> {
        if let Some(limit) = self.max_depth
            && depth > limit
        {
            return Err(RenderError::MaxDepthExceeded { limit });
        }
        stats.depth = stats.depth.max(depth);
        for entry in node.entries() {
            self.walk_entry(canvas, entry, depth, stats)?;
        }
        Ok(())
    }

    fn walk_entry<R: Raster, const D: usize>(
        &self,
        canvas: &mut Canvas<R>,
        entry: &Entry<D>,
        depth: usize,
        stats: &mut RenderStats,
    ) -> Result<(), RenderError> {
        match entry {
            Entry::Internal { bbox, child } => {
                let color = canvas.palette().node;
                canvas.draw_normalized_rect(bbox, color);
                stats.internal += 1;
                self.walk_node(canvas, child, depth + 1, stats)
            }
            Entry::Leaf { bbox } => {
                let color = canvas.palette().leaf;
                canvas.draw_normalized_rect(bbox, color);
                stats.leaves += 1;
                Ok(())
            }
        }
    }
}

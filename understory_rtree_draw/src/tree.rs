// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only R-tree shape consumed by the renderer.
//!
//! The index that produces this shape (insertion, splitting, deletion, queries) lives
//! elsewhere. An adapter copies its nodes into [`Node`]/[`Entry`] values, or builds them
//! directly, and hands the root to [`render_node`](crate::render_node).

use alloc::vec::Vec;

use crate::types::AxisRect;

/// A node: an ordered collection of entries.
///
/// Entry order has no effect on rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node<const D: usize = 2> {
    entries: Vec<Entry<D>>,
}

/// An entry: a bounding rectangle plus either a child node or nothing.
///
/// An entry is exactly one of the two kinds; there is no entry with both a child and
/// leaf data.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<const D: usize = 2> {
    /// Entry pointing at a subtree.
    Internal {
        /// Bounding rectangle of the subtree.
        bbox: AxisRect<D>,
        /// The subtree.
        child: Node<D>,
    },
    /// Entry referencing stored data.
    Leaf {
        /// Bounding rectangle of the data.
        bbox: AxisRect<D>,
    },
}

impl<const D: usize> Node<D> {
    /// Create an empty node.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a node holding `entries`.
    pub fn from_entries(entries: Vec<Entry<D>>) -> Self {
        Self { entries }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: Entry<D>) {
        self.entries.push(entry);
    }

    /// The node's entries.
    pub fn entries(&self) -> &[Entry<D>] {
        &self.entries
    }

    /// Number of entries in this node (not counting descendants).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of node levels in this subtree. An empty or leaf-only node has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .entries
            .iter()
            .filter_map(Entry::child)
            .map(Self::height)
            .max()
            .unwrap_or(0)
    }

    /// Number of leaf entries in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                Entry::Internal { child, .. } => child.leaf_count(),
                Entry::Leaf { .. } => 1,
            })
            .sum()
    }

    /// Union of the entries' bounding rectangles, or `None` for an empty node.
    pub fn bounds(&self) -> Option<AxisRect<D>> {
        self.entries
            .iter()
            .map(Entry::bbox)
            .copied()
            .reduce(|a, b| a.union(&b))
    }
}

impl<const D: usize> FromIterator<Entry<D>> for Node<D> {
    fn from_iter<I: IntoIterator<Item = Entry<D>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const D: usize> Entry<D> {
    /// Leaf entry with the given bounds.
    pub const fn leaf(bbox: AxisRect<D>) -> Self {
        Self::Leaf { bbox }
    }

    /// Internal entry with explicit bounds.
    pub const fn internal(bbox: AxisRect<D>, child: Node<D>) -> Self {
        Self::Internal { bbox, child }
    }

    /// Internal entry whose bounds are the union of `child`'s entries.
    ///
    /// Returns `None` when `child` is empty, since it has no extent.
    pub fn fitted(child: Node<D>) -> Option<Self> {
        let bbox = child.bounds()?;
        Some(Self::Internal { bbox, child })
    }

    /// The entry's bounding rectangle.
    pub const fn bbox(&self) -> &AxisRect<D> {
        match self {
            Self::Internal { bbox, .. } | Self::Leaf { bbox } => bbox,
        }
    }

    /// The child node of an internal entry.
    pub const fn child(&self) -> Option<&Node<D>> {
        match self {
            Self::Internal { child, .. } => Some(child),
            Self::Leaf { .. } => None,
        }
    }

    /// Whether this entry references data rather than a subtree.
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

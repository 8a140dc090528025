// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error kinds for the checked construction and rendering paths.
//!
//! The drawing primitives themselves never fail; see the crate docs for the
//! permissive contract they follow.

use crate::types::PixelRect;

/// Failure to build a [`Canvas`](crate::Canvas) from a [`CanvasConfig`](crate::CanvasConfig).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// The scale factor is zero, negative, or not finite.
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),
    /// The pixel bounds cover no pixels.
    #[error("pixel bounds {0:?} are empty")]
    EmptyBounds(PixelRect),
}

/// Failure while walking a tree with a [`TreeRenderer`](crate::TreeRenderer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The tree nests deeper than the renderer's limit.
    #[error("tree depth exceeds the limit of {limit}")]
    MaxDepthExceeded {
        /// The configured depth limit.
        limit: usize,
    },
}

// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface and node records for `sciglyph_charts`.
//!
//! Glyph composers never mutate a renderer directly. They build a tree of plain [`Node`]
//! records and hand it to a [`Surface`] in one batch, so a failed draw leaves the surface
//! untouched. Renderers (SVG, vello, ...) walk the finished tree.
//!
//! Geometry uses `kurbo` types and paint uses `peniko` brushes. Text is stored unshaped.

#![no_std]

extern crate alloc;

mod node;
mod paint;
mod surface;

pub use node::{CircleNode, Group, LineNode, Node, PathNode, PolygonNode, TextNode};
pub use paint::{Paint, StrokeStyle};
pub use surface::{Size, Surface};

/// Horizontal text anchor, matching SVG's `text-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor position.
    #[default]
    Start,
    /// Text is centered on the anchor position.
    Middle,
    /// Text ends at the anchor position.
    End,
}

// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface glyphs append to.

extern crate alloc;

use alloc::vec::Vec;

use crate::node::Node;

/// A width/height pair in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A sized 2D canvas owning an ordered list of top-level nodes.
///
/// The surface belongs to the caller. Glyphs only read its size and append to it; nothing in
/// this workspace removes nodes from a surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Surface {
    size: Option<Size>,
    children: Vec<Node>,
}

impl Surface {
    /// Creates an empty surface with the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Some(Size { width, height }),
            children: Vec::new(),
        }
    }

    /// Creates an empty surface without a declared size.
    ///
    /// Glyphs refuse to draw onto such a surface.
    pub fn without_size() -> Self {
        Self::default()
    }

    /// Returns the declared size, if any.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Returns the declared width, if any.
    pub fn width(&self) -> Option<f64> {
        self.size.map(|s| s.width)
    }

    /// Returns the declared height, if any.
    pub fn height(&self) -> Option<f64> {
        self.size.map(|s| s.height)
    }

    /// Declares (or replaces) the surface size.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Some(Size { width, height });
    }

    /// Appends one top-level node.
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Appends a batch of top-level nodes in order.
    pub fn append_all(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.children.extend(nodes);
    }

    /// Returns the top-level nodes in paint order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the number of top-level nodes.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the number of nodes in the whole tree.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Node::node_count).sum()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::{CircleNode, Group};

    #[test]
    fn surface_without_size_reports_no_dimensions() {
        let s = Surface::without_size();
        assert_eq!(s.width(), None);
        assert_eq!(s.height(), None);
    }

    #[test]
    fn set_size_replaces_the_declared_size() {
        let mut s = Surface::without_size();
        s.set_size(30.0, 20.0);
        assert_eq!(s.size(), Some(Size { width: 30.0, height: 20.0 }));
        s.set_size(5.0, 6.0);
        assert_eq!(s.width(), Some(5.0));
        assert_eq!(s.height(), Some(6.0));
    }

    #[test]
    fn append_all_keeps_order_and_counts_descendants() {
        let mut s = Surface::new(100.0, 50.0);
        s.append(CircleNode::new((1.0, 1.0), 1.0));
        s.append_all(vec![
            Group::new()
                .with_child(CircleNode::new((2.0, 2.0), 2.0))
                .into(),
        ]);
        assert_eq!(s.child_count(), 2);
        assert_eq!(s.node_count(), 3);
        assert!(
            s.children()[0].as_circle().is_some(),
            "first appended node stays first"
        );
    }
}

// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node records: the unit of output for glyph composers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point};
use peniko::Brush;

use crate::TextAnchor;
use crate::paint::{Paint, StrokeStyle};

/// A node in a drawing tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A transformed container of other nodes.
    Group(Group),
    /// An arbitrary path (sectors, areas, projected polygons).
    Path(PathNode),
    /// A circle.
    Circle(CircleNode),
    /// A closed polygon with its own transform.
    Polygon(PolygonNode),
    /// A stroked line segment.
    Line(LineNode),
    /// A text label.
    Text(TextNode),
}

impl Node {
    /// Returns the number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Group(g) => 1 + g.children.iter().map(Self::node_count).sum::<usize>(),
            _ => 1,
        }
    }

    /// Returns the group payload, if this is a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Returns the path payload, if this is a path.
    pub fn as_path(&self) -> Option<&PathNode> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the circle payload, if this is a circle.
    pub fn as_circle(&self) -> Option<&CircleNode> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the polygon payload, if this is a polygon.
    pub fn as_polygon(&self) -> Option<&PolygonNode> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the line payload, if this is a line.
    pub fn as_line(&self) -> Option<&LineNode> {
        match self {
            Self::Line(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the text payload, if this is text.
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// A container applying `transform` to all of its children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Transform from child coordinates to parent coordinates.
    pub transform: Affine,
    /// Children in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an empty group with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group translated by `(x, y)`.
    pub fn translated(x: f64, y: f64) -> Self {
        Self::new().with_transform(Affine::translate((x, y)))
    }

    /// Sets the group transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Appends a child node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Appends a child node, builder style.
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    /// Path geometry in local coordinates.
    pub path: BezPath,
    /// Fill and stroke.
    pub paint: Paint,
}

impl PathNode {
    /// Creates a path node with default paint.
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            paint: Paint::default(),
        }
    }

    /// Sets the paint.
    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }
}

/// A circle at an absolute position in its parent's coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    /// Center point.
    pub center: Point,
    /// Radius. Negative radii are passed through to the renderer as-is.
    pub radius: f64,
    /// Fill and stroke.
    pub paint: Paint,
}

impl CircleNode {
    /// Creates a circle with default paint.
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
            paint: Paint::default(),
        }
    }

    /// Sets the paint.
    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }
}

/// A closed polygon with its own transform.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonNode {
    /// Vertices in local coordinates.
    pub points: Vec<Point>,
    /// Transform applied to the vertices.
    pub transform: Affine,
    /// Fill and stroke.
    pub paint: Paint,
}

impl PolygonNode {
    /// Creates a polygon with an identity transform and default paint.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            transform: Affine::IDENTITY,
            paint: Paint::default(),
        }
    }

    /// Sets the transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the paint.
    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }
}

/// A stroked line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke style.
    pub stroke: StrokeStyle,
}

impl LineNode {
    /// Creates a line with the default (1px black) stroke.
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            stroke: StrokeStyle::default(),
        }
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

/// An unshaped text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Anchor position in local coordinates (before `transform`).
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// CSS font weight (400 normal, 700 bold).
    pub font_weight: u16,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Transform applied to the text.
    pub transform: Affine,
    /// Fill paint, if set.
    pub fill: Option<Brush>,
}

impl TextNode {
    /// Creates a text node at `pos` with default styling.
    pub fn new(pos: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            text: text.into(),
            font_size: 12.0,
            font_weight: 400,
            anchor: TextAnchor::Start,
            transform: Affine::IDENTITY,
            fill: None,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

macro_rules! impl_into_node {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_into_node!(
    Group => Group,
    PathNode => Path,
    CircleNode => Circle,
    PolygonNode => Polygon,
    LineNode => Line,
    TextNode => Text,
);

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn node_count_includes_nested_groups() {
        let inner = Group::new()
            .with_child(CircleNode::new((0.0, 0.0), 1.0))
            .with_child(TextNode::new((0.0, 0.0), "a"));
        let outer = Group::translated(5.0, 5.0)
            .with_child(inner)
            .with_child(LineNode::new((0.0, 0.0), (1.0, 1.0)));
        let node: Node = outer.into();
        assert_eq!(node.node_count(), 5);
    }

    #[test]
    fn translated_group_maps_origin() {
        let g = Group::translated(10.0, 20.0);
        assert_eq!(g.transform * Point::ORIGIN, Point::new(10.0, 20.0));
        assert!(g.is_empty(), "a new group has no children");
    }
}

// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout results: positioned nodes, bounds, hit testing, and connectors.

use alloc::vec::Vec;
use core::ops::Range;

use arbor_directory::EmployeeId;
use kurbo::{BezPath, Point, Rect, Size};

/// A node with its assigned position.
///
/// `position` is the top-center of the node's card in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
    /// Record shown by this node.
    pub id: EmployeeId,
    /// Index of the parent node, `None` for the root.
    pub parent: Option<usize>,
    /// Indices of the children laid out under this node.
    pub children: Range<usize>,
    /// Depth from the displayed root.
    pub level: u32,
    /// Top-center of the card.
    pub position: Point,
}

/// Output of [`layout`](crate::layout).
///
/// Nodes are breadth-first with the root at index 0, and the leftmost card
/// center sits at `x = 0`. Because card centers are normalized rather than
/// card edges, [`Layout::bounds`] starts half a card width left of the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    nodes: Vec<PositionedNode>,
    card: Size,
    size: Size,
}

impl Layout {
    pub(crate) fn new(nodes: Vec<PositionedNode>, card: Size, size: Size) -> Self {
        debug_assert!(!nodes.is_empty(), "a layout always contains its root");
        Self { nodes, card, size }
    }

    /// All positioned nodes, breadth-first.
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    /// The root node.
    pub fn root(&self) -> &PositionedNode {
        &self.nodes[0]
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a layout contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of the node at `index`. Empty for out-of-range indices.
    pub fn children(&self, index: usize) -> &[PositionedNode] {
        self.nodes
            .get(index)
            .map_or(&[][..], |n| &self.nodes[n.children.clone()])
    }

    /// Bounding box size: extreme card centers plus one card footprint.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Bounding box width.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Bounding box height.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Card footprint used for this layout.
    pub fn card_size(&self) -> Size {
        self.card
    }

    /// World-space rectangle covering every card.
    pub fn bounds(&self) -> Rect {
        let half = self.card.width / 2.0;
        Rect::new(-half, 0.0, self.size.width - half, self.size.height)
    }

    /// World-space card rectangle of `node`.
    pub fn card_rect(&self, node: &PositionedNode) -> Rect {
        let half = self.card.width / 2.0;
        let Point { x, y } = node.position;
        Rect::new(x - half, y, x + half, y + self.card.height)
    }

    /// Index of the node showing `id`.
    pub fn index_of(&self, id: EmployeeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// The node showing `id`.
    pub fn find(&self, id: EmployeeId) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The node whose card contains the world-space `point`.
    pub fn node_at(&self, point: Point) -> Option<&PositionedNode> {
        self.nodes
            .iter()
            .find(|n| self.card_rect(n).contains(point))
    }

    /// One elbow connector per laid-out parent → child edge.
    pub fn connectors(&self) -> impl Iterator<Item = Connector> + '_ {
        self.nodes.iter().flat_map(move |parent| {
            self.children_of(parent).iter().map(move |child| Connector {
                parent: parent.id,
                child: child.id,
                path: elbow(
                    Point::new(parent.position.x, parent.position.y + self.card.height),
                    child.position,
                ),
            })
        })
    }

    fn children_of(&self, node: &PositionedNode) -> &[PositionedNode] {
        &self.nodes[node.children.clone()]
    }
}

/// A parent → child edge drawn as an elbow.
#[derive(Clone, Debug)]
pub struct Connector {
    /// Upper end of the edge.
    pub parent: EmployeeId,
    /// Lower end of the edge.
    pub child: EmployeeId,
    /// Vertical, horizontal, vertical path in world space.
    pub path: BezPath,
}

/// Elbow path from `from` (parent bottom-center) to `to` (child top-center).
///
/// The horizontal run sits halfway between the two points vertically.
pub fn elbow(from: Point, to: Point) -> BezPath {
    let mid_y = (from.y + to.y) / 2.0;
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to((from.x, mid_y));
    path.line_to((to.x, mid_y));
    path.line_to(to);
    path
}

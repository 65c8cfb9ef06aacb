//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing against the laid-out
//! document. Point queries are O(log n) instead of a walk over every node.

use crate::types::{NodeId, Rect};
use rstar::{AABB, RTree, RTreeObject};

/// A spatial entry representing a node's laid-out bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node: NodeId,
    /// Paint order; larger values are drawn on top
    pub paint_order: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(node: NodeId, paint_order: usize, rect: Rect) -> Self {
        Self {
            node,
            paint_order,
            min_x: rect.left(),
            min_y: rect.top(),
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index over node rectangles, rebuilt after every reflow.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    len: usize,
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").field("len", &self.len).finish()
    }
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            len: 0,
        }
    }

    /// Build a spatial index from `(node, paint_order, rect)` triples.
    /// Empty rectangles are skipped: they can never be hit.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: Iterator<Item = (NodeId, usize, Rect)>,
    {
        let mut index = Self::new();
        index.rebuild(rects);
        index
    }

    pub fn rebuild<I>(&mut self, rects: I)
    where
        I: Iterator<Item = (NodeId, usize, Rect)>,
    {
        let entries: Vec<SpatialEntry> = rects
            .filter(|(_, _, rect)| !rect.is_empty())
            .map(|(node, order, rect)| SpatialEntry::new(node, order, rect))
            .collect();

        self.len = entries.len();
        self.tree = RTree::bulk_load(entries);
    }

    /// Query all nodes whose box contains the point, topmost first.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<SpatialEntry> {
        let point_envelope = AABB::from_point([x, y]);

        let mut hits: Vec<SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .copied()
            .collect();
        hits.sort_by(|a, b| b.paint_order.cmp(&a.paint_order));
        hits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.len = 0;
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

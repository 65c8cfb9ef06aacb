//! Hit testing against the laid-out document.
//!
//! The slot resolver only needs one geometry query: the topmost element
//! under a viewport point. `HitTest` is that seam; `Document` answers it from
//! its R-tree, skipping hidden and pointer-transparent subtrees.

use crate::document::Document;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::{NodeId, Point};

/// Geometry query consumed by the slot resolver.
pub trait HitTest {
    /// Topmost hit-testable element at a viewport point.
    fn element_from_point(&self, point: Point) -> Option<NodeId>;
}

impl HitTest for Document {
    fn element_from_point(&self, point: Point) -> Option<NodeId> {
        profile_scope!("element_from_point");

        let doc_point = CoordinateConverter::viewport_to_document(point, self.scroll());
        self.spatial_index()
            .query_point(doc_point.x, doc_point.y)
            .into_iter()
            .map(|entry| entry.node)
            .find(|&node| self.is_attached(node) && !self.is_hit_excluded(node))
    }
}

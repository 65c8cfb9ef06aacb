//! Retained document tree.
//!
//! The document is the authoritative model for the reorder surface: a root
//! surface holding containers (each a sentinel followed by entries) and one
//! floating feedback layer. All relocations detach and reinsert a node inside
//! a single `&mut self` call, so a moved entry is never observably absent.
//!
//! ## Modules
//!
//! - `layout` - Column layout, paint order and spatial index rebuild
//! - `builder` - Construction from a serde board description and snapshots

mod builder;
mod layout;

pub use builder::{BoardSnapshot, BoardSpec, GroupSnapshot, GroupSpec};
pub use layout::LayoutMetrics;

use crate::constants::{DRAG_MARKER, START_MARKER};
use crate::error::{DocumentError, DocumentResult};
use crate::spatial_index::SpatialIndex;
use crate::types::{NodeId, NodeKind, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Class names with structural or styling meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Marks the sentinel entry of a container
    pub start: String,
    /// Temporary styling hook on the entry being dragged
    pub dragging: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: START_MARKER.to_string(),
            dragging: DRAG_MARKER.to_string(),
        }
    }
}

/// A single node of the document tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Hidden nodes (and their subtrees) are skipped by hit testing
    pub hidden: bool,
    /// Equivalent of `pointer-events: none` when false
    pub hit_testable: bool,
    rect: Rect,
}

impl Node {
    fn new(id: NodeId, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            classes: Vec::new(),
            parent: None,
            children: Vec::new(),
            hidden: false,
            hit_testable: true,
            rect: Rect::default(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Laid-out rectangle in document coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The live document: containers, entries and the feedback layer.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    feedback_layer: NodeId,
    next_id: u64,
    markers: Markers,
    metrics: LayoutMetrics,
    /// Document offset of the viewport's top-left corner
    scroll: Point,
    /// Viewport position of the floating layer's top-left corner
    floating_origin: Point,
    index: SpatialIndex,
}

impl Document {
    /// Create an empty surface with its feedback layer.
    pub fn new(markers: Markers, metrics: LayoutMetrics) -> Self {
        let root = NodeId(0);
        let feedback_layer = NodeId(1);

        let mut surface = Node::new(root, NodeKind::Surface, "surface");
        surface.children.push(feedback_layer);
        let mut layer = Node::new(feedback_layer, NodeKind::FeedbackLayer, "hover");
        layer.parent = Some(root);

        let mut doc = Self {
            nodes: HashMap::from([(root, surface), (feedback_layer, layer)]),
            root,
            feedback_layer,
            next_id: 2,
            markers,
            metrics,
            scroll: Point::default(),
            floating_origin: Point::default(),
            index: SpatialIndex::new(),
        };
        doc.reflow();
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn feedback_layer(&self) -> NodeId {
        self.feedback_layer
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Replace marker names; existing sentinels are re-tagged so the
    /// structure stays intact.
    pub fn set_markers(&mut self, markers: Markers) {
        if markers == self.markers {
            return;
        }
        let old = std::mem::replace(&mut self.markers, markers);
        for node in self.nodes.values_mut() {
            for class in node.classes.iter_mut() {
                if *class == old.start {
                    *class = self.markers.start.clone();
                } else if *class == old.dragging {
                    *class = self.markers.dragging.clone();
                }
            }
        }
    }

    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = metrics;
        self.reflow();
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    fn alloc(&mut self, kind: NodeKind, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(id, kind, label));
        id
    }

    /// Append a new container (with its sentinel) after the existing ones.
    pub fn create_container(&mut self, label: impl Into<String>) -> NodeId {
        let container = self.alloc(NodeKind::Container, label);
        let start_label = self.markers.start.clone();
        let sentinel = self.alloc(NodeKind::Entry, start_label.clone());
        if let Some(node) = self.nodes.get_mut(&sentinel) {
            node.classes.push(start_label);
        }
        self.attach_at(container, sentinel, 0);

        // Containers stay in front of the floating layer in child order.
        let layer_index = self
            .children(self.root)
            .iter()
            .position(|&c| c == self.feedback_layer)
            .unwrap_or(self.children(self.root).len());
        self.attach_at(self.root, container, layer_index);
        self.reflow();
        container
    }

    /// Append a new entry with a nested label to `container`.
    pub fn create_entry(
        &mut self,
        container: NodeId,
        label: impl Into<String>,
    ) -> DocumentResult<NodeId> {
        match self.node(container) {
            None => return Err(DocumentError::UnknownNode(container)),
            Some(node) if node.kind != NodeKind::Container => {
                return Err(DocumentError::NotAContainer(container));
            }
            Some(_) => {}
        }

        let label = label.into();
        let entry = self.alloc(NodeKind::Entry, label.clone());
        let content = self.alloc(NodeKind::Content, label);
        self.attach_at(entry, content, 0);
        let end = self.children(container).len();
        self.attach_at(container, entry, end);
        self.reflow();
        Ok(entry)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.kind)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.has_class(class))
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) if !node.has_class(class) => {
                node.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                let before = node.classes.len();
                node.classes.retain(|c| c != class);
                node.classes.len() != before
            }
            None => false,
        }
    }

    /// True for the `start` entry anchoring the top of a container.
    pub fn is_sentinel(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|n| n.kind == NodeKind::Entry && n.has_class(&self.markers.start))
    }

    /// Nearest ancestor-or-self of the given kind.
    pub fn closest(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id)?;
            if node.kind == kind {
                return Some(node_id);
            }
            current = node.parent;
        }
        None
    }

    /// True if `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.parent(node_id);
        }
        false
    }

    /// True if the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(id) && self.is_ancestor_or_self(self.root, id)
    }

    /// Child-index path from the root, or None for detached nodes.
    fn tree_path(&self, id: NodeId) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        let mut current = id;
        while current != self.root {
            let parent = self.parent(current)?;
            let index = self.children(parent).iter().position(|&c| c == current)?;
            path.push(index);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// True if `a` comes strictly before `b` in document (pre-)order.
    ///
    /// Detached nodes precede nothing and follow nothing.
    pub fn precedes(&self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return false;
        }
        match (self.tree_path(a), self.tree_path(b)) {
            (Some(pa), Some(pb)) => pa < pb,
            _ => false,
        }
    }

    /// All containers in surface order.
    pub fn containers(&self) -> Vec<NodeId> {
        self.children(self.root)
            .iter()
            .copied()
            .filter(|&c| self.kind(c) == Some(NodeKind::Container))
            .collect()
    }

    /// The sentinel of a container (first child carrying the start marker).
    pub fn sentinel_of(&self, container: NodeId) -> Option<NodeId> {
        self.children(container)
            .iter()
            .copied()
            .find(|&c| self.is_sentinel(c))
    }

    /// Real (non-sentinel) entries of a container, in order.
    pub fn entries(&self, container: NodeId) -> Vec<NodeId> {
        self.children(container)
            .iter()
            .copied()
            .filter(|&c| self.kind(c) == Some(NodeKind::Entry) && !self.is_sentinel(c))
            .collect()
    }

    /// Labels of every child of a container, sentinel included.
    pub fn child_labels(&self, container: NodeId) -> Vec<String> {
        self.children(container)
            .iter()
            .filter_map(|&c| self.label(c).map(str::to_string))
            .collect()
    }

    /// Total number of real entries across all containers.
    pub fn real_entry_count(&self) -> usize {
        self.containers().iter().map(|&c| self.entries(c).len()).sum()
    }

    /// First container with the given label.
    pub fn find_container(&self, label: &str) -> Option<NodeId> {
        self.containers()
            .into_iter()
            .find(|&c| self.label(c) == Some(label))
    }

    /// First real entry with the given label, searching containers in order.
    pub fn find_entry(&self, label: &str) -> Option<NodeId> {
        self.containers()
            .into_iter()
            .flat_map(|c| self.entries(c))
            .find(|&e| self.label(e) == Some(label))
    }

    /// Every attached node carrying `class`.
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        let mut found: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|n| n.has_class(class))
            .map(|n| n.id)
            .filter(|&id| self.is_attached(id))
            .collect();
        found.sort();
        found
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else { return };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
    }

    fn attach_at(&mut self, parent: NodeId, id: NodeId, index: usize) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            let index = index.min(node.children.len());
            node.children.insert(index, id);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = Some(parent);
        }
    }

    /// Whether `id` may be placed as a child of `parent`.
    fn can_relocate(&self, id: NodeId, parent: NodeId) -> bool {
        id != self.root
            && self.contains(id)
            && self.contains(parent)
            && !self.is_ancestor_or_self(id, parent)
    }

    /// Move `id` to sit immediately before `reference`.
    ///
    /// Returns false (and changes nothing) if `reference` has no parent, or the
    /// move would be a no-op or create a cycle.
    pub fn move_before(&mut self, id: NodeId, reference: NodeId) -> bool {
        self.move_relative(id, reference, 0)
    }

    /// Move `id` to sit immediately after `reference`.
    pub fn move_after(&mut self, id: NodeId, reference: NodeId) -> bool {
        self.move_relative(id, reference, 1)
    }

    fn move_relative(&mut self, id: NodeId, reference: NodeId, offset: usize) -> bool {
        if id == reference {
            return false;
        }
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        if !self.can_relocate(id, parent) {
            return false;
        }

        let siblings = self.children(parent);
        if let (Some(i), Some(r)) = (
            siblings.iter().position(|&c| c == id),
            siblings.iter().position(|&c| c == reference),
        ) {
            // Already in place
            if (offset == 0 && i + 1 == r) || (offset == 1 && r + 1 == i) {
                return false;
            }
        }

        self.detach(id);
        let Some(index) = self.children(parent).iter().position(|&c| c == reference) else {
            return false;
        };
        self.attach_at(parent, id, index + offset);
        self.reflow();
        true
    }

    /// Move `id` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, id: NodeId) -> bool {
        if !self.can_relocate(id, parent) {
            return false;
        }
        if self.children(parent).last() == Some(&id) {
            return false;
        }
        self.detach(id);
        let end = self.children(parent).len();
        self.attach_at(parent, id, end);
        self.reflow();
        true
    }

    /// Detached deep copy of `id` and all its descendants, with fresh ids.
    pub fn deep_clone(&mut self, id: NodeId) -> Option<NodeId> {
        let source = self.node(id)?.clone();
        let copy = self.alloc(source.kind, source.label.clone());
        if let Some(node) = self.nodes.get_mut(&copy) {
            node.classes = source.classes.clone();
            node.hidden = source.hidden;
            node.hit_testable = source.hit_testable;
        }
        for child in source.children {
            if let Some(child_copy) = self.deep_clone(child) {
                let end = self.children(copy).len();
                self.attach_at(copy, child_copy, end);
            }
        }
        Some(copy)
    }

    /// Detach and destroy a node with its subtree. The root and the feedback
    /// layer cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || id == self.feedback_layer || !self.contains(id) {
            return false;
        }
        self.detach(id);
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
            }
        }
        self.reflow();
        true
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.hidden = hidden;
        }
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.hidden)
    }

    pub fn set_hit_testable(&mut self, id: NodeId, hit_testable: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.hit_testable = hit_testable;
        }
    }

    /// True if the node or any ancestor is hidden or not hit-testable.
    pub fn is_hit_excluded(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.node(node_id) {
                Some(node) if node.hidden || !node.hit_testable => return true,
                Some(node) => current = node.parent,
                None => return true,
            }
        }
        false
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
        self.reflow();
    }

    /// Viewport position of the floating layer's top-left corner.
    pub fn floating_origin(&self) -> Point {
        self.floating_origin
    }

    pub fn set_floating_origin(&mut self, origin: Point) {
        self.floating_origin = origin;
        self.reflow();
    }

    /// Current size of the floating layer (size of what it carries).
    pub fn floating_size(&self) -> Size {
        self.node(self.feedback_layer)
            .map(|n| n.rect.size)
            .unwrap_or_default()
    }

    /// Laid-out rectangle in document coordinates.
    pub fn bounding_rect(&self, id: NodeId) -> Option<Rect> {
        self.node(id).map(|n| n.rect)
    }

    /// Laid-out rectangle in viewport coordinates.
    pub fn client_rect(&self, id: NodeId) -> Option<Rect> {
        self.bounding_rect(id)
            .map(|r| r.translate(Point::new(-self.scroll.x, -self.scroll.y)))
    }

    pub(crate) fn spatial_index(&self) -> &SpatialIndex {
        &self.index
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Check the structural invariants: every container starts with exactly
    /// one sentinel and no node is listed under two parents.
    pub fn check_invariants(&self) -> DocumentResult<()> {
        let mut seen = HashSet::new();
        for node in self.nodes.values() {
            for &child in &node.children {
                if !seen.insert(child) || self.parent(child) != Some(node.id) {
                    return Err(DocumentError::DuplicateMembership(child));
                }
            }
        }

        for container in self.containers() {
            let children = self.children(container);
            match children.first() {
                Some(&first) if self.is_sentinel(first) => {}
                _ => return Err(DocumentError::SentinelNotFirst(container)),
            }
            let sentinels = children.iter().filter(|&&c| self.is_sentinel(c)).count();
            if sentinels > 1 {
                return Err(DocumentError::MultipleSentinels(container));
            }
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Markers::default(), LayoutMetrics::default())
    }
}

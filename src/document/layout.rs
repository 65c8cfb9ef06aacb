//! Column layout for the document.
//!
//! Containers are laid out left to right as fixed-width columns; their
//! children stack top to bottom starting below a padding band, so every
//! container has empty space both above its sentinel and below its last
//! entry. The floating layer is fixed-position: its viewport origin plus the
//! current scroll offset gives its document rectangle.

use super::Document;
use crate::constants::{
    CONTAINER_GAP, CONTAINER_MIN_HEIGHT, CONTAINER_PADDING_BOTTOM, CONTAINER_PADDING_TOP,
    CONTAINER_PADDING_X, CONTAINER_WIDTH, CONTENT_INSET, ENTRY_GAP, ENTRY_HEIGHT,
    SENTINEL_HEIGHT, SURFACE_PADDING,
};
use crate::profile_scope;
use crate::types::{NodeId, Rect};
use serde::{Deserialize, Serialize};

/// Layout measurements in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub surface_padding: f32,
    pub container_gap: f32,
    pub container_width: f32,
    pub container_min_height: f32,
    pub container_padding_top: f32,
    pub container_padding_bottom: f32,
    pub container_padding_x: f32,
    pub entry_height: f32,
    pub sentinel_height: f32,
    pub entry_gap: f32,
    pub content_inset: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            surface_padding: SURFACE_PADDING,
            container_gap: CONTAINER_GAP,
            container_width: CONTAINER_WIDTH,
            container_min_height: CONTAINER_MIN_HEIGHT,
            container_padding_top: CONTAINER_PADDING_TOP,
            container_padding_bottom: CONTAINER_PADDING_BOTTOM,
            container_padding_x: CONTAINER_PADDING_X,
            entry_height: ENTRY_HEIGHT,
            sentinel_height: SENTINEL_HEIGHT,
            entry_gap: ENTRY_GAP,
            content_inset: CONTENT_INSET,
        }
    }
}

impl LayoutMetrics {
    /// Width of an entry row inside a container.
    pub fn entry_width(&self) -> f32 {
        (self.container_width - 2.0 * self.container_padding_x).max(0.0)
    }
}

impl Document {
    /// Recompute every rectangle, then rebuild the spatial index.
    pub(crate) fn reflow(&mut self) {
        profile_scope!("reflow");

        let m = self.metrics.clone();
        let top = m.surface_padding;
        let mut x = m.surface_padding;
        let mut bottom = top;

        for container in self.containers() {
            let mut y = top + m.container_padding_top;
            let children = self.children(container).to_vec();
            for child in children {
                let height = if self.is_sentinel(child) {
                    m.sentinel_height
                } else {
                    m.entry_height
                };
                let rect = Rect::new(x + m.container_padding_x, y, m.entry_width(), height);
                self.layout_entry(child, rect, m.content_inset);
                y += height + m.entry_gap;
            }

            let height = (y - top + m.container_padding_bottom).max(m.container_min_height);
            self.set_rect(container, Rect::new(x, top, m.container_width, height));
            bottom = bottom.max(top + height);
            x += m.container_width + m.container_gap;
        }

        let width = if self.containers().is_empty() {
            2.0 * m.surface_padding
        } else {
            x - m.container_gap + m.surface_padding
        };
        self.set_rect(self.root, Rect::new(0.0, 0.0, width, bottom + m.surface_padding));

        // Floating layer: sized by the first thing it carries.
        let layer = self.feedback_layer;
        let origin = self.floating_origin + self.scroll;
        if self.children(layer).is_empty() {
            self.set_rect(layer, Rect::new(origin.x, origin.y, 0.0, 0.0));
        } else {
            let rect = Rect::new(origin.x, origin.y, m.entry_width(), m.entry_height);
            self.set_rect(layer, rect);
            for child in self.children(layer).to_vec() {
                self.layout_entry(child, rect, m.content_inset);
            }
        }

        self.rebuild_index();
    }

    fn layout_entry(&mut self, entry: NodeId, rect: Rect, inset: f32) {
        self.set_rect(entry, rect);
        let inner = Rect::new(
            rect.left() + inset,
            rect.top() + inset,
            (rect.size.width - 2.0 * inset).max(0.0),
            (rect.size.height - 2.0 * inset).max(0.0),
        );
        for child in self.children(entry).to_vec() {
            // Nested content fills the inset box at every depth.
            self.layout_entry(child, inner, 0.0);
        }
    }

    fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rect = rect;
        }
    }

    /// Pre-order walk from the root; later nodes paint on top.
    fn rebuild_index(&mut self) {
        let mut ordered = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else { continue };
            ordered.push((id, ordered.len(), node.rect));
            stack.extend(node.children.iter().rev().copied());
        }
        self.index.rebuild(ordered.into_iter());
    }

    /// Number of nodes currently reachable from the root and hit-testable by
    /// geometry (non-empty rectangle).
    pub fn indexed_len(&self) -> usize {
        self.index.len()
    }
}

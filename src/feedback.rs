//! Visual feedback for an active drag.
//!
//! The emitter owns the floating clone of the dragged entry: it is created
//! once on press as a snapshot, re-centered on every move, and destroyed on
//! release. Clones are never reused across sessions.

use crate::document::Document;
use crate::hit_testing::HitTest;
use crate::input::coords::CoordinateConverter;
use crate::types::{NodeId, Point};
use serde::{Deserialize, Serialize};

/// How the floating layer is kept out of hit testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackExclusion {
    /// Hide the layer for the duration of the query, then show it again
    #[default]
    Hide,
    /// Mark the layer permanently transparent to pointer queries
    PointerEventsNone,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FeedbackEmitter {
    exclusion: FeedbackExclusion,
}

impl FeedbackEmitter {
    pub fn new(exclusion: FeedbackExclusion) -> Self {
        Self { exclusion }
    }

    pub fn exclusion(&self) -> FeedbackExclusion {
        self.exclusion
    }

    /// Configure the layer for the current exclusion strategy.
    pub fn install(&self, doc: &mut Document) {
        let layer = doc.feedback_layer();
        doc.set_hidden(layer, false);
        doc.set_hit_testable(layer, self.exclusion != FeedbackExclusion::PointerEventsNone);
    }

    /// Attach a deep copy of `source` to the floating layer, centered on
    /// `pointer`. Returns the clone's id.
    pub fn spawn(&self, doc: &mut Document, source: NodeId, pointer: Point) -> Option<NodeId> {
        let clone = doc.deep_clone(source)?;
        let layer = doc.feedback_layer();
        if !doc.append_child(layer, clone) {
            doc.remove(clone);
            return None;
        }
        self.center_on(doc, pointer);
        Some(clone)
    }

    /// Move the floating layer so its center sits on `pointer`.
    pub fn center_on(&self, doc: &mut Document, pointer: Point) {
        let origin = CoordinateConverter::centered_origin(pointer, doc.floating_size());
        doc.set_floating_origin(origin);
    }

    /// Topmost element under `pointer`, ignoring the floating layer.
    ///
    /// With `Hide` the layer is hidden for exactly the duration of the query;
    /// no other state changes in between.
    pub fn hit_test_beneath(&self, doc: &mut Document, pointer: Point) -> Option<NodeId> {
        match self.exclusion {
            FeedbackExclusion::Hide => {
                let layer = doc.feedback_layer();
                doc.set_hidden(layer, true);
                let hit = doc.element_from_point(pointer);
                doc.set_hidden(layer, false);
                hit
            }
            FeedbackExclusion::PointerEventsNone => doc.element_from_point(pointer),
        }
    }

    /// Detach and destroy a clone.
    pub fn destroy(&self, doc: &mut Document, clone: NodeId) {
        if doc.remove(clone) {
            tracing::trace!(%clone, "Feedback clone destroyed");
        }
    }
}

//! Drag session state machine.
//!
//! One explicit enum instead of loose `active`/`dragged`/`feedback` fields,
//! so a feedback clone can never exist without a dragged entry.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Inert        (primary press outside any draggable entry)
//! Idle -> Dragging     (primary press on a real entry)
//!
//! Inert | Dragging -> Idle   (release or pointer leave)
//! ```

use crate::types::{NodeId, Point};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    /// No press in progress
    #[default]
    Idle,

    /// Press in progress that has nothing to drag (sentinel or empty space)
    Inert,

    /// An entry is being relocated
    Dragging {
        /// The real entry, still a member of the document
        entry: NodeId,
        /// Floating clone of the entry, if one could be created
        feedback: Option<NodeId>,
        /// Last pointer position seen, viewport coordinates
        pointer: Point,
    },
}

impl DragSession {
    /// Returns true between a qualifying press and its release
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the entry being dragged, if any
    pub fn dragged_entry(&self) -> Option<NodeId> {
        match self {
            Self::Dragging { entry, .. } => Some(*entry),
            _ => None,
        }
    }

    /// Get the floating clone, if any
    pub fn feedback_entry(&self) -> Option<NodeId> {
        match self {
            Self::Dragging { feedback, .. } => *feedback,
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<Point> {
        match self {
            Self::Dragging { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }

    pub fn start_inert(&mut self) {
        *self = Self::Inert;
    }

    pub fn start_dragging(&mut self, entry: NodeId, feedback: Option<NodeId>, pointer: Point) {
        *self = Self::Dragging {
            entry,
            feedback,
            pointer,
        };
    }

    pub fn update_pointer(&mut self, position: Point) {
        if let Self::Dragging { pointer, .. } = self {
            *pointer = position;
        }
    }

    /// End the session, returning what it held.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

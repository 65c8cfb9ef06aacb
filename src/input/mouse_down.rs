//! Pointer down handling - start of a drag session.

use crate::app::ReorderBoard;
use crate::profile_scope;
use crate::types::{NodeId, NodeKind, PointerEvent};
use tracing::{debug, trace};

impl ReorderBoard {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        if event.button != self.settings.primary() {
            trace!(button = ?event.button, "Ignoring non-primary press");
            return;
        }

        // A press without a matching release finishes the previous session
        // first, so its clone and marker never leak.
        if self.session.is_active() {
            self.end_session();
        }

        let target = event
            .target
            .or_else(|| self.feedback.hit_test_beneath(&mut self.document, event.position));

        let Some(entry) = target.and_then(|t| self.draggable_entry(t)) else {
            self.session.start_inert();
            trace!(?target, "Press outside any draggable entry");
            return;
        };

        // Snapshot before marking so the clone does not carry the drag style.
        let feedback = self.feedback.spawn(&mut self.document, entry, event.position);
        let marker = self.document.markers().dragging.clone();
        self.document.add_class(entry, &marker);
        self.session.start_dragging(entry, feedback, event.position);

        debug!(
            %entry,
            label = self.document.label(entry).unwrap_or_default(),
            "Drag started"
        );
    }

    /// Nearest enclosing real entry that lives in a container.
    fn draggable_entry(&self, target: NodeId) -> Option<NodeId> {
        let entry = self.document.closest(target, NodeKind::Entry)?;
        if self.document.is_sentinel(entry) {
            return None;
        }
        self.document.closest(entry, NodeKind::Container)?;
        Some(entry)
    }
}

//! Pointer up / leave handling - end of a drag session.
//!
//! Leaving the surface is an implicit release: whatever position was last
//! resolved is kept. There is no rollback to the pre-drag slot.

use crate::app::ReorderBoard;
use crate::input::DragSession;
use crate::types::PointerEvent;
use tracing::debug;

impl ReorderBoard {
    pub fn handle_pointer_up(&mut self, _event: &PointerEvent) {
        if !self.session.is_active() {
            return;
        }
        self.end_session();
    }

    pub fn handle_pointer_leave(&mut self) {
        if !self.session.is_active() {
            return;
        }
        self.end_session();
    }

    /// Tear down the current session: clear the drag marker, destroy the
    /// clone, and apply settings that arrived mid-drag.
    pub(crate) fn end_session(&mut self) {
        if let DragSession::Dragging {
            entry,
            feedback,
            pointer,
        } = self.session.take()
        {
            let marker = self.document.markers().dragging.clone();
            self.document.remove_class(entry, &marker);
            if let Some(clone) = feedback {
                self.feedback.destroy(&mut self.document, clone);
            }
            debug!(
                %entry,
                container = ?self.document.parent(entry),
                x = pointer.x,
                y = pointer.y,
                "Drag finished"
            );
            self.system.perf_monitor.log_summary();
        }

        if let Some(settings) = self.pending_settings.take() {
            self.apply_settings(settings);
        }
    }
}

//! Pointer move handling - live slot resolution.
//!
//! ## Performance Notes
//!
//! Moves arrive at display rate. Each one re-centers the feedback layer,
//! runs one spatial-index query and at most one relocation (which reflows).
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::ReorderBoard;
use crate::document::Document;
use crate::profile_scope;
use crate::types::{NodeId, NodeKind, Point, PointerEvent};
use tracing::trace;

/// Where the dragged entry should go for the current pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// First real entry of the container owning this sentinel
    AfterSentinel(NodeId),
    /// Last child of this container
    Append(NodeId),
    /// Immediately before this entry
    Before(NodeId),
    /// Immediately after this entry
    After(NodeId),
}

impl Placement {
    /// Relocate `dragged` in one atomic move. Returns true if the order changed.
    pub fn apply(self, doc: &mut Document, dragged: NodeId) -> bool {
        match self {
            Self::AfterSentinel(sentinel) => doc.move_after(dragged, sentinel),
            Self::Append(container) => doc.append_child(container, dragged),
            Self::Before(target) => doc.move_before(dragged, target),
            Self::After(target) => doc.move_after(dragged, target),
        }
    }
}

/// Resolve the slot for `dragged` given the element hit under `pointer`.
///
/// Entry and container are resolved independently: empty space inside a
/// container matches the container but no entry. Over an entry, the dragged
/// entry goes before it only when it currently precedes it (and it is not the
/// sentinel); otherwise after it, which keeps hovering next to the original
/// slot from flipping the order on every move.
pub fn resolve_slot(
    doc: &Document,
    dragged: NodeId,
    hit: Option<NodeId>,
    pointer: Point,
) -> Option<Placement> {
    let hit = hit?;
    let target = doc.closest(hit, NodeKind::Entry);
    let host = doc.closest(hit, NodeKind::Container);

    match target {
        None => {
            let host = host?;
            let sentinel = doc.sentinel_of(host)?;
            let sentinel_top = doc.client_rect(sentinel)?.top();
            if pointer.y < sentinel_top {
                Some(Placement::AfterSentinel(sentinel))
            } else {
                Some(Placement::Append(host))
            }
        }
        Some(target) => {
            if doc.precedes(dragged, target) && !doc.is_sentinel(target) {
                Some(Placement::Before(target))
            } else {
                Some(Placement::After(target))
            }
        }
    }
}

impl ReorderBoard {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_move");

        let Some(dragged) = self.session.dragged_entry() else {
            return;
        };
        self.session.update_pointer(event.position);
        self.feedback.center_on(&mut self.document, event.position);

        if !self.document.is_attached(dragged) {
            return;
        }

        let hit = self.feedback.hit_test_beneath(&mut self.document, event.position);
        let Some(placement) = resolve_slot(&self.document, dragged, hit, event.position) else {
            return;
        };

        if placement.apply(&mut self.document, dragged) {
            trace!(?placement, "Entry relocated");
        }
    }
}

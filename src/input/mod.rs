//! Pointer input handling for the reorder surface.
//!
//! ## Architecture
//!
//! The drag session is an explicit state machine (`DragSession`). Each
//! surface event is handled to completion before the next one is dispatched.
//!
//! ## Modules
//!
//! - `state` - Drag session enum and helper methods
//! - `mouse_down` - Press handling (session start, feedback clone)
//! - `drag` - Move handling (slot resolution and live relocation)
//! - `mouse_up` - Release/leave handling (teardown)
//! - `coords` - Viewport/document coordinate conversion

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use drag::{Placement, resolve_slot};
pub use state::DragSession;

use crate::app::ReorderBoard;
use crate::types::SurfaceEvent;

impl ReorderBoard {
    /// Route one surface event to its handler.
    pub fn dispatch(&mut self, event: SurfaceEvent) {
        self.system.perf_monitor.begin_event();
        match &event {
            SurfaceEvent::Down(e) => self.handle_pointer_down(e),
            SurfaceEvent::Move(e) => self.handle_pointer_move(e),
            SurfaceEvent::Up(e) => self.handle_pointer_up(e),
            SurfaceEvent::Leave => self.handle_pointer_leave(),
        }
        self.system.perf_monitor.end_event(event.name());
    }
}

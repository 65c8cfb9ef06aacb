//! Headless drag-and-reorder for grouped lists.
//!
//! A [`ReorderBoard`] binds a drag controller to a live [`Document`] of
//! containers, each holding a `start` sentinel followed by entries. Pointer
//! events move the pressed entry live to the slot under the pointer, within
//! its container or into another one, while a floating clone tracks the
//! pointer.
//!
//! ```ignore
//! use reorderboard::{ReorderBoard, settings::Settings, document::BoardSpec};
//! use reorderboard::types::{PointerEvent, SurfaceEvent, point};
//!
//! let spec = BoardSpec::from_json(r#"{"groups":[{"label":"todo","entries":["A","B"]}]}"#)?;
//! let mut board = ReorderBoard::from_spec(&spec, Settings::default())?;
//! board.dispatch(SurfaceEvent::Down(PointerEvent::at(point(100.0, 68.0))));
//! board.dispatch(SurfaceEvent::Move(PointerEvent::at(point(100.0, 300.0))));
//! board.dispatch(SurfaceEvent::Up(PointerEvent::at(point(100.0, 300.0))));
//! ```

pub mod app;
pub mod constants;
pub mod document;
pub mod error;
pub mod feedback;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;

pub use app::ReorderBoard;
pub use document::Document;
pub use hit_testing::HitTest;

//! Application module - the reorder surface and its host-facing API.
//!
//! This module is organized into several submodules:
//! - `state` - The ReorderBoard struct definition and sub-structs
//! - `lifecycle` - Construction
//! - `settings_handlers` - Applying and hot-reloading settings

mod lifecycle;
mod settings_handlers;
mod state;

pub use state::{ReorderBoard, SystemState};

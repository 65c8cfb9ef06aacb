//! Application-wide constants.
//!
//! Centralizes marker names and layout values so the document, the layout
//! engine and the settings defaults agree on them.

// ============================================================================
// Markers
// ============================================================================

/// Class carried by the sentinel entry that anchors the top of a container
pub const START_MARKER: &str = "start";

/// Class applied to the real entry while it is being dragged
pub const DRAG_MARKER: &str = "temp";

/// DOM-style index of the primary pointer button
pub const PRIMARY_BUTTON_INDEX: u16 = 0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Padding between the surface edge and the first container
pub const SURFACE_PADDING: f32 = 16.0;

/// Horizontal gap between neighbouring containers
pub const CONTAINER_GAP: f32 = 24.0;

/// Width of every container column
pub const CONTAINER_WIDTH: f32 = 240.0;

/// Minimum container height, so empty groups still accept drops
pub const CONTAINER_MIN_HEIGHT: f32 = 320.0;

/// Space above the sentinel inside a container
pub const CONTAINER_PADDING_TOP: f32 = 24.0;

/// Space below the last entry inside a container
pub const CONTAINER_PADDING_BOTTOM: f32 = 24.0;

/// Horizontal inset of entries inside a container
pub const CONTAINER_PADDING_X: f32 = 8.0;

/// Height of a real entry row
pub const ENTRY_HEIGHT: f32 = 40.0;

/// Height of the sentinel row
pub const SENTINEL_HEIGHT: f32 = 8.0;

/// Vertical gap between entry rows
pub const ENTRY_GAP: f32 = 0.0;

/// Inset of an entry's nested content from the entry edge
pub const CONTENT_INSET: f32 = 6.0;

// ============================================================================
// Performance
// ============================================================================

/// Budget for handling a single pointer event before it is reported as slow
pub const EVENT_BUDGET_MS: f64 = 4.0;

/// Default tracing filter when neither settings nor RUST_LOG provide one
pub const DEFAULT_LOG_FILTER: &str = "reorderboard=info";

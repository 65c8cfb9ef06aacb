//! Core types for the reorder surface.
//!
//! Geometry primitives, node identity, and the pointer events the host feeds
//! into the controller.

use crate::constants::PRIMARY_BUTTON_INDEX;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Shorthand constructor, mirroring `point(x, y)` in UI toolkits.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle (origin at top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Same rectangle moved by `delta`.
    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            origin: self.origin + delta,
            size: self.size,
        }
    }
}

// ============================================================================
// Node Identity
// ============================================================================

/// Identity of a node in the document tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role of a node in the document tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The root interaction surface
    Surface,
    /// A group holding a sentinel followed by entries
    Container,
    /// A list entry (including the sentinel)
    Entry,
    /// Nested content inside an entry (label text)
    Content,
    /// The floating element that carries the drag feedback clone
    FeedbackLayer,
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Pointer button that triggered a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Map a DOM-style `MouseEvent.button` index to a button.
    pub fn from_index(index: u16) -> Self {
        match index {
            PRIMARY_BUTTON_INDEX => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// DOM-style index of this button.
    pub fn index(&self) -> u16 {
        match self {
            Self::Primary => PRIMARY_BUTTON_INDEX,
            Self::Middle => 1,
            Self::Secondary => 2,
            Self::Other(i) => *i,
        }
    }
}

/// A pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the viewport
    pub position: Point,
    /// Button that changed state (ignored for moves)
    pub button: PointerButton,
    /// Element the host delivered the event to; resolved by hit test when absent
    pub target: Option<NodeId>,
}

impl PointerEvent {
    /// Primary-button event at `position` with no host-provided target.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            target: None,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }
}

/// The four interaction events delivered by the root surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    Leave,
}

impl SurfaceEvent {
    /// Short name used for logging and per-event statistics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Down(_) => "pointer_down",
            Self::Move(_) => "pointer_move",
            Self::Up(_) => "pointer_up",
            Self::Leave => "pointer_leave",
        }
    }
}

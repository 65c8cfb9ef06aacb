//! Coordinate conversion utilities for pointer interactions.
//!
//! Pointer events and the floating layer live in viewport space; layout and
//! the spatial index live in document space. The two differ by the scroll
//! offset.

use crate::types::{Point, Size, point};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a viewport position to document coordinates
    #[inline]
    pub fn viewport_to_document(viewport_pos: Point, scroll: Point) -> Point {
        point(viewport_pos.x + scroll.x, viewport_pos.y + scroll.y)
    }

    /// Convert a document position to viewport coordinates
    #[inline]
    pub fn document_to_viewport(document_pos: Point, scroll: Point) -> Point {
        point(document_pos.x - scroll.x, document_pos.y - scroll.y)
    }

    /// Top-left corner that centers a box of `size` on `center`
    #[inline]
    pub fn centered_origin(center: Point, size: Size) -> Point {
        point(center.x - size.width / 2.0, center.y - size.height / 2.0)
    }
}

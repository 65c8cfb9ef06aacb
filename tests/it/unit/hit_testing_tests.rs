//! Unit tests for hit testing through the public `HitTest` seam.

use crate::helpers::{board_with, center_of, press};
use reorderboard::HitTest;
use reorderboard::types::{NodeKind, point};

#[test]
fn test_entry_center_hits_entry_subtree() {
    let board = board_with("todo", &["A", "B"]);
    let doc = &board.document;
    let b = doc.find_entry("B").unwrap();

    let hit = doc.element_from_point(center_of(&board, "B")).unwrap();
    assert_eq!(doc.closest(hit, NodeKind::Entry), Some(b));
}

#[test]
fn test_container_space_hits_container() {
    let board = board_with("todo", &["A"]);
    let doc = &board.document;
    let todo = doc.find_container("todo").unwrap();

    assert_eq!(doc.element_from_point(point(100.0, 300.0)), Some(todo));
    assert_eq!(doc.element_from_point(point(100.0, 30.0)), Some(todo));
}

#[test]
fn test_clone_covers_entries_while_dragging() {
    let mut board = board_with("todo", &["A", "B"]);
    let at = center_of(&board, "A");
    press(&mut board, at);

    let doc = &board.document;
    let clone = board.session().feedback_entry().unwrap();
    let hit = doc.element_from_point(at).unwrap();
    assert_eq!(doc.closest(hit, NodeKind::Entry), Some(clone));
    assert!(doc.is_ancestor_or_self(doc.feedback_layer(), hit));
}

#[test]
fn test_outside_everything() {
    let board = board_with("todo", &["A"]);
    assert_eq!(board.document.element_from_point(point(-50.0, -50.0)), None);
}

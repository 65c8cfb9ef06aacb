//! Integration tests for the reorder surface.
//!
//! These tests drive complete press/move/release sequences through
//! `ReorderBoard::dispatch` and check the resulting document.

mod settings_reload_tests;

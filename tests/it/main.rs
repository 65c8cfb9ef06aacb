//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: Board builder and drag gestures shared by all tests
//! - integration: Multi-event drag workflow tests
//! - unit: Single-component unit tests

mod integration;
mod unit;

//! Unit tests for reorderboard.

mod hit_testing_tests;
mod perf_tests;
mod settings_watcher_tests;

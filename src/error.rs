//! Error types for document construction and settings.
//!
//! The drag controller itself never fails: every unresolved pointer event is a
//! no-op. Errors only arise while building a document or loading settings.

use crate::types::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or validating a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A group in a board description has an empty label
    #[error("Group {index} has an empty label")]
    EmptyGroupLabel { index: usize },

    /// Two entries in a board description share a label
    #[error("Duplicate entry label: {0}")]
    DuplicateEntry(String),

    /// A node id does not exist in the document
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// A node was expected to be a container
    #[error("Node {0} is not a container")]
    NotAContainer(NodeId),

    /// Container is missing its sentinel, or it is not the first child
    #[error("Container {0} does not start with its sentinel")]
    SentinelNotFirst(NodeId),

    /// Container holds more than one sentinel
    #[error("Container {0} has more than one sentinel")]
    MultipleSentinels(NodeId),

    /// An entry is referenced by more than one parent
    #[error("Entry {0} appears more than once")]
    DuplicateMembership(NodeId),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while loading or watching the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error reading the settings file
    #[error("Failed to read settings at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for `Settings`
    #[error("Invalid settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Sentinel and drag markers share a class name
    #[error("Marker '{0}' is used for both the sentinel and the dragged entry")]
    ConflictingMarkers(String),

    /// File watcher could not be created
    #[error("Settings watcher error: {0}")]
    Watch(#[from] notify::Error),
}

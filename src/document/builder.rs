//! Board descriptions and snapshots.
//!
//! A `BoardSpec` is the serde description a host uses to populate the surface
//! (groups with ordered entry labels). A `BoardSnapshot` is the read-only view
//! of the current order, used for inspection and tests. Neither is a
//! persistence format for the reordered result.

use super::{Document, LayoutMetrics, Markers};
use crate::error::{DocumentError, DocumentResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One group of a board description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub label: String,
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Initial contents of the surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub groups: Vec<GroupSpec>,
}

impl BoardSpec {
    /// Parse a board description from JSON.
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn validate(&self) -> DocumentResult<()> {
        let mut labels = HashSet::new();
        for (index, group) in self.groups.iter().enumerate() {
            if group.label.trim().is_empty() {
                return Err(DocumentError::EmptyGroupLabel { index });
            }
            for entry in &group.entries {
                if !labels.insert(entry.as_str()) {
                    return Err(DocumentError::DuplicateEntry(entry.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Current order of one group, sentinel included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub label: String,
    pub entries: Vec<String>,
}

/// Current order of every group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub groups: Vec<GroupSnapshot>,
}

impl BoardSnapshot {
    /// Entry labels of the named group.
    pub fn group(&self, label: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.entries.as_slice())
    }
}

impl Document {
    /// Build a document from a board description.
    pub fn from_spec(
        spec: &BoardSpec,
        markers: Markers,
        metrics: LayoutMetrics,
    ) -> DocumentResult<Self> {
        spec.validate()?;

        let mut doc = Document::new(markers, metrics);
        for group in &spec.groups {
            let container = doc.create_container(group.label.clone());
            for entry in &group.entries {
                doc.create_entry(container, entry.clone())?;
            }
        }
        tracing::debug!(
            groups = spec.groups.len(),
            entries = doc.real_entry_count(),
            "Document built"
        );
        Ok(doc)
    }

    /// Current order of every container.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            groups: self
                .containers()
                .into_iter()
                .map(|c| GroupSnapshot {
                    label: self.label(c).unwrap_or_default().to_string(),
                    entries: self.child_labels(c),
                })
                .collect(),
        }
    }
}

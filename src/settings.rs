//! User settings.
//!
//! Settings are a JSON file with every field optional; anything missing falls
//! back to the defaults in `constants`. A missing or unreadable file is not an
//! error for the application, it only means defaults.

use crate::constants::{DEFAULT_LOG_FILTER, PRIMARY_BUTTON_INDEX};
use crate::document::{LayoutMetrics, Markers};
use crate::error::SettingsError;
use crate::feedback::FeedbackExclusion;
use crate::settings_watcher::default_settings_path;
use crate::types::PointerButton;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sentinel and drag marker class names
    pub markers: Markers,
    /// DOM-style index of the button that starts a drag
    pub primary_button: u16,
    /// How the floating feedback is excluded from hit testing
    pub feedback_exclusion: FeedbackExclusion,
    /// Layout measurements
    pub layout: LayoutMetrics,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            primary_button: PRIMARY_BUTTON_INDEX,
            feedback_exclusion: FeedbackExclusion::default(),
            layout: LayoutMetrics::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Button that starts a drag.
    pub fn primary(&self) -> PointerButton {
        PointerButton::from_index(self.primary_button)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        default_settings_path()
            .map(|path| Self::load_or_default(&path))
            .unwrap_or_default()
    }

    /// Load from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`, reporting IO, parse and validation failures.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// The sentinel marker must differ from the drag marker, otherwise a
    /// pressed entry would read as a sentinel for the whole drag.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.markers.start == self.markers.dragging {
            return Err(SettingsError::ConflictingMarkers(self.markers.start.clone()));
        }
        Ok(())
    }
}

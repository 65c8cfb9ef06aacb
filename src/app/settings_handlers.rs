//! Settings-related methods - applying and hot-reloading settings.

use super::ReorderBoard;
use crate::feedback::FeedbackEmitter;
use crate::settings::Settings;
use crate::settings_watcher::SettingsEvent;

impl ReorderBoard {
    /// Apply new settings. While a drag is in progress they are held back and
    /// applied when the session ends, so markers and layout never change
    /// under an active drag.
    pub fn apply_settings(&mut self, settings: Settings) {
        if let Err(e) = settings.validate() {
            tracing::warn!("Ignoring settings: {}", e);
            return;
        }
        if self.session.is_active() {
            tracing::debug!("Drag in progress, deferring settings");
            self.pending_settings = Some(settings);
            return;
        }

        self.document.set_markers(settings.markers.clone());
        if settings.layout != *self.document.metrics() {
            self.document.set_metrics(settings.layout.clone());
        }
        self.feedback = FeedbackEmitter::new(settings.feedback_exclusion);
        self.feedback.install(&mut self.document);
        self.settings = settings;
    }

    /// Check for settings file changes and reload if needed.
    /// Returns true if new settings were read.
    pub fn check_settings_reload(&mut self) -> bool {
        let Some(ref mut watcher) = self.system.settings_watcher else {
            return false;
        };
        let Some(event) = watcher.poll() else {
            return false;
        };

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                let settings = Settings::load_or_default(watcher.path());
                self.apply_settings(settings);
                true
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted, keeping current settings");
                false
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
                false
            }
        }
    }
}

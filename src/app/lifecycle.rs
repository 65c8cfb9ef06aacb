//! Application lifecycle - construction.

use super::{ReorderBoard, SystemState};
use crate::document::{BoardSpec, Document};
use crate::error::DocumentResult;
use crate::feedback::FeedbackEmitter;
use crate::input::DragSession;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;

impl ReorderBoard {
    /// Bind a controller to an existing document.
    ///
    /// The document adopts the marker names and layout metrics from `settings`.
    pub fn new(mut document: Document, settings: Settings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {}", e);
                Settings::default()
            }
        };
        document.set_markers(settings.markers.clone());
        document.set_metrics(settings.layout.clone());

        let feedback = FeedbackEmitter::new(settings.feedback_exclusion);
        feedback.install(&mut document);

        Self {
            document,
            session: DragSession::default(),
            settings,
            pending_settings: None,
            feedback,
            system: SystemState {
                perf_monitor: PerfMonitor::new(),
                settings_watcher: None,
            },
        }
    }

    /// Build the document from a board description and bind to it.
    pub fn from_spec(spec: &BoardSpec, settings: Settings) -> DocumentResult<Self> {
        let document =
            Document::from_spec(spec, settings.markers.clone(), settings.layout.clone())?;
        Ok(Self::new(document, settings))
    }

    /// Install the global tracing subscriber using the configured filter.
    /// `RUST_LOG` takes precedence; later calls are no-ops.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        crate::logging::init(&self.settings.log_filter)
    }

    /// Attach a settings watcher polled by `check_settings_reload`.
    pub fn with_settings_watcher(mut self, watcher: SettingsWatcher) -> Self {
        self.system.settings_watcher = Some(watcher);
        self
    }
}

//! Application state - the ReorderBoard struct definition and sub-structs.

use crate::document::Document;
use crate::feedback::FeedbackEmitter;
use crate::input::DragSession;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;

/// Background services that are not part of the interaction itself
pub struct SystemState {
    pub perf_monitor: PerfMonitor,
    pub settings_watcher: Option<SettingsWatcher>,
}

/// The drag-and-reorder controller bound to one live document.
///
/// Events are delivered through [`ReorderBoard::dispatch`] (or the individual
/// `handle_*` methods) and handled to completion one at a time.
pub struct ReorderBoard {
    /// The live document; reordered in place
    pub document: Document,
    /// Current drag session
    pub(crate) session: DragSession,
    /// Active settings
    pub(crate) settings: Settings,
    /// Settings received during a drag, applied when it ends
    pub(crate) pending_settings: Option<Settings>,
    /// Owner of the floating clone
    pub(crate) feedback: FeedbackEmitter,
    pub system: SystemState,
}

impl ReorderBoard {
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn feedback(&self) -> &FeedbackEmitter {
        &self.feedback
    }

    /// Returns true while a press is in progress
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }
}

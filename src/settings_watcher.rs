//! Settings file watcher for hot-reload.
//!
//! The notify callback runs on the watcher's own thread and only queues
//! events; the host drains them with `poll()` on the event thread.

use crate::error::SettingsError;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Change observed on the settings file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

/// Default settings location: `<config dir>/reorderboard/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reorderboard").join("settings.json"))
}

pub struct SettingsWatcher {
    path: PathBuf,
    pending: Arc<Mutex<VecDeque<SettingsEvent>>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Watch `path`. The parent directory is watched so that editors which
    /// replace the file on save are still observed.
    pub fn new(path: PathBuf) -> Result<Self, SettingsError> {
        let pending = Arc::new(Mutex::new(VecDeque::new()));
        let queue = Arc::clone(&pending);
        let file_name = path.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            let event = match res {
                Ok(event) => {
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if !ours {
                        return;
                    }
                    match event.kind {
                        EventKind::Create(_) => SettingsEvent::Created,
                        EventKind::Modify(_) => SettingsEvent::Modified,
                        EventKind::Remove(_) => SettingsEvent::Deleted,
                        _ => return,
                    }
                }
                Err(e) => SettingsEvent::Error(e.to_string()),
            };
            queue.lock().push_back(event);
        })?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            pending,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the most recent pending event, discarding older ones.
    ///
    /// A burst of writes collapses into a single reload.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut queue = self.pending.lock();
        let last = queue.pop_back();
        queue.clear();
        last
    }

    /// Queue an event as if it came from the file system.
    pub fn inject(&self, event: SettingsEvent) {
        self.pending.lock().push_back(event);
    }
}

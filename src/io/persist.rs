use std::path::PathBuf;

use crate::io::recovery::{self, RecoveryEntry, RecoveryKind};
use crate::io::storage::StorageSlot;
use crate::model::config::DEFAULT_STORAGE_KEY;
use crate::model::dashboard::Dashboard;

/// Best-effort round-trip of the dashboard through a single storage slot.
///
/// Neither `save` nor `load` ever returns an error: failures are logged, the
/// affected text is copied into the recovery log (when one is configured),
/// and the caller carries on with its in-memory state.
#[derive(Debug)]
pub struct Persistence<S> {
    storage: S,
    key: String,
    recovery_dir: Option<PathBuf>,
}

impl<S: StorageSlot> Persistence<S> {
    /// Persist under the default key with no recovery log
    pub fn new(storage: S) -> Self {
        Persistence {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            recovery_dir: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Record failures in `<dir>/.recovery.log`
    pub fn with_recovery_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.recovery_dir = Some(dir.into());
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize the dashboard and write it to the slot.
    pub fn save(&mut self, dashboard: &Dashboard) {
        let text = match serde_json::to_string(dashboard) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to serialize dashboard");
                self.record(RecoveryEntry::new(RecoveryKind::Save, "serialization failed")
                    .field("Error", e.to_string()));
                return;
            }
        };

        match self.storage.set(&self.key, &text) {
            Ok(()) => {
                tracing::debug!(key = %self.key, bytes = text.len(), "saved dashboard");
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to save dashboard");
                self.record(
                    RecoveryEntry::new(RecoveryKind::Save, "write failed")
                        .field("Error", e.to_string())
                        .body(text),
                );
            }
        }
    }

    /// Read the dashboard back. `None` means "no usable data": the slot is
    /// empty, unreadable, or holds something that is not a dashboard.
    pub fn load(&self) -> Option<Dashboard> {
        let text = match self.storage.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no saved dashboard");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read saved dashboard");
                self.record(
                    RecoveryEntry::new(RecoveryKind::Load, "read failed")
                        .field("Error", e.to_string()),
                );
                return None;
            }
        };

        match serde_json::from_str::<Dashboard>(&text) {
            Ok(dashboard) => Some(dashboard),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "saved dashboard is not valid");
                self.record(
                    RecoveryEntry::new(RecoveryKind::Load, "unreadable data discarded")
                        .field("Error", e.to_string())
                        .body(text),
                );
                None
            }
        }
    }

    /// Append an entry to the recovery log, if one is configured
    pub fn record(&self, entry: RecoveryEntry) {
        if let Some(dir) = &self.recovery_dir {
            recovery::log_recovery(dir, entry.field("Key", self.key.clone()));
        }
    }
}

//! Pending-configuration registry for PDF viewer redirects.
//!
//! When a tab is redirected to the bundled PDF viewer, the viewer page loads
//! asynchronously and asks for its configuration only once ready. The relay
//! parks the configuration under the tab's ID until that request arrives;
//! the embedding layer routes the viewer's "get config for tab" message to
//! [`ConfigRelay::respond_to`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::types::tab::TabId;

/// Guarded map of tab ID to the configuration awaiting delivery.
///
/// At most one entry is pending per tab; answering a request removes the
/// entry, so each registration serves exactly one matching request. An entry
/// the viewer never asks for stays parked until teardown, which is harmless.
pub struct ConfigRelay {
    pending: Mutex<HashMap<TabId, Value>>,
}

impl ConfigRelay {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Park a configuration for a tab about to be redirected to the viewer.
    /// Registering again for the same tab replaces the earlier entry.
    pub fn register(&self, tab_id: TabId, config: Value) {
        self.lock().insert(tab_id, config);
    }

    /// Answer a config request originating from the given tab.
    ///
    /// One-shot: the entry is removed on match. Requests from tabs with
    /// nothing pending get None.
    pub fn respond_to(&self, tab_id: TabId) -> Option<Value> {
        self.lock().remove(&tab_id)
    }

    /// Whether a configuration is still parked for the given tab.
    pub fn has_pending(&self, tab_id: TabId) -> bool {
        self.lock().contains_key(&tab_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TabId, Value>> {
        // A poisoned lock only means a panic elsewhere; the map itself is
        // still usable.
        self.pending.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl Default for ConfigRelay {
    fn default() -> Self {
        Self::new()
    }
}

//! Contracts for the browser facilities the sidebar lifecycle drives.
//!
//! The background process implements [`BrowserApi`] on top of the real
//! extension APIs; tests substitute a fake. The core only ever talks to tabs
//! through this trait, so every platform restriction (scripting into
//! privileged pages, file-scheme access) surfaces here.

use async_trait::async_trait;
use serde_json::Value;

use crate::types::errors::BrowserError;
use crate::types::tab::TabId;

/// Extension-relative path of the client boot script.
pub const BOOT_SCRIPT_PATH: &str = "/client/build/boot.js";

/// Extension-relative path of the script that tears the client down.
pub const UNLOAD_SCRIPT_PATH: &str = "/unload-client.js";

/// A function evaluated inside a tab's document context.
///
/// Each variant corresponds to one small script the extension ships. They
/// return a plain serializable value or throw; the core never assumes
/// partial results.
#[derive(Debug, Clone)]
pub enum PageFunction {
    /// Report whether the current document is HTML or a rendered PDF.
    /// Resolves to `{"type": "HTML" | "PDF"}`, or null if the page context
    /// threw before responding.
    DetectContentType,
    /// Report whether an annotator marker link is present and points into
    /// `extension_url`. The URL comparison distinguishes our client from an
    /// unrelated instance the page bootstrapped itself.
    IsClientActive { extension_url: String },
    /// Insert the JSON `<script>` carrier holding the client configuration,
    /// tagged with `extension_id` and flagged for removal on unload.
    SetClientConfig { config: Value, extension_id: String },
}

/// Browser extension APIs consumed by the lifecycle core.
#[async_trait]
pub trait BrowserApi: Send + Sync {
    /// Evaluate a [`PageFunction`] in the given tab (top frame when
    /// `frame_id` is None). Rejects when the tab disallows scripting.
    async fn execute_function(
        &self,
        tab_id: TabId,
        frame_id: Option<u64>,
        func: PageFunction,
    ) -> Result<Value, BrowserError>;

    /// Execute a bundled script file in the given tab and return whatever
    /// value the script completed with.
    async fn execute_script(
        &self,
        tab_id: TabId,
        frame_id: Option<u64>,
        file: &str,
    ) -> Result<Value, BrowserError>;

    /// Navigate a tab to a new URL.
    async fn update_tab_url(&self, tab_id: TabId, url: &str) -> Result<(), BrowserError>;

    /// Whether the user has granted script access to `file:` URLs.
    ///
    /// Queried fresh on every call that needs it; the grant can change at
    /// any time through the browser's extension settings.
    async fn is_allowed_file_scheme_access(&self) -> bool;

    /// Resolve an extension-relative path to an absolute extension URL.
    fn extension_url(&self, path: &str) -> String;

    /// This extension's own ID, used to tag injected configuration.
    fn extension_id(&self) -> String;
}

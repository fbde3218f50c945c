use serde::{Deserialize, Serialize};

use crate::types::errors::InjectorError;

/// Integer identifier the browser assigns to a tab.
pub type TabId = i64;

/// A browser tab as reported by the tabs API.
///
/// Both fields are optional because the browser omits them for tabs the
/// extension cannot see into (devtools windows, discarded tabs). Every
/// lifecycle operation validates the descriptor with [`Tab::check`] first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: Option<TabId>,
    pub url: Option<String>,
}

impl Tab {
    pub fn new(id: TabId, url: &str) -> Self {
        Self {
            id: Some(id),
            url: Some(url.to_string()),
        }
    }

    /// Validate that the tab carries the metadata needed to inject or
    /// un-inject the sidebar. All "normal" tabs have both fields because of
    /// the extension's permissions; anything else is malformed caller input.
    pub fn check(&self) -> Result<CheckedTab<'_>, InjectorError> {
        match (self.id, self.url.as_deref()) {
            (Some(id), Some(url)) if !url.is_empty() => Ok(CheckedTab { id, url }),
            _ => Err(InjectorError::MalformedTab),
        }
    }
}

/// A tab known to have both an ID and a URL.
///
/// Borrowed view over a [`Tab`]; the core never retains one across calls.
#[derive(Debug, Clone, Copy)]
pub struct CheckedTab<'a> {
    pub id: TabId,
    pub url: &'a str,
}

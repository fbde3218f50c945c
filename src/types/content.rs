use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of document a tab is displaying, as far as the sidebar cares.
///
/// Recomputed on every call that needs it; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "PDF")]
    Pdf,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Html => write!(f, "HTML"),
            ContentType::Pdf => write!(f, "PDF"),
        }
    }
}

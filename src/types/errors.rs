use std::fmt;

// === InjectorError ===

/// Errors raised by sidebar lifecycle operations.
///
/// Classification and permission failures are raised before any side effect;
/// `Browser` wraps collaborator failures that happen after a side-effecting
/// step has begun, and is never retried or rolled back internally.
#[derive(Debug)]
pub enum InjectorError {
    /// The tab descriptor lacks an ID or URL.
    MalformedTab,
    /// The target URL's protocol is outside the injectable allow-list.
    /// Carries the offending protocol.
    RestrictedProtocol(String),
    /// A local non-PDF document was targeted; unsupported by design.
    LocalFile,
    /// A local PDF was targeted but file-scheme script access is not granted.
    NoFileAccess,
    /// The page already has an unrelated sidebar instance bootstrapped.
    AlreadyInjected,
    /// A URL failed to parse where a parse was required.
    InvalidUrl(String),
    /// The PDF viewer URL carried no original-URL parameter.
    OriginalUrlMissing(String),
    /// A tab scripting or navigation call failed.
    Browser(String),
}

impl fmt::Display for InjectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectorError::MalformedTab => write!(f, "Tab is missing ID or URL"),
            InjectorError::RestrictedProtocol(protocol) => {
                write!(f, "Cannot load the sidebar into {} pages", protocol)
            }
            InjectorError::LocalFile => write!(f, "Local non-PDF files are not supported"),
            InjectorError::NoFileAccess => write!(f, "Local file scheme access denied"),
            InjectorError::AlreadyInjected => {
                write!(f, "The sidebar is already injected into this page")
            }
            InjectorError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            InjectorError::OriginalUrlMissing(url) => {
                write!(f, "Failed to extract original URL from {}", url)
            }
            InjectorError::Browser(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for InjectorError {}

// === BrowserError ===

/// Error from a browser collaborator call (scripting, navigation).
///
/// The browser rejects scripting into restricted pages and tabs that are
/// mid-unload; detection paths swallow this, transition paths surface it.
#[derive(Debug)]
pub struct BrowserError(pub String);

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BrowserError {}

impl From<BrowserError> for InjectorError {
    fn from(err: BrowserError) -> Self {
        InjectorError::Browser(err.0)
    }
}

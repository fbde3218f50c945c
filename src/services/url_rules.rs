//! URL classification rules and the PDF-viewer URL codec.
//!
//! Everything in this module is pure and synchronous; the async lifecycle
//! code layers probing and navigation on top of these predicates.

use url::Url;

use crate::types::content::ContentType;
use crate::types::errors::InjectorError;

/// Fragment prefix marking a deep link to a specific annotation.
///
/// Such fragments must not be replayed when navigating back out of the PDF
/// viewer, otherwise the extension re-activates itself as soon as the
/// original URL loads.
pub const DIRECT_LINK_PREFIX: &str = "annotations:";

/// True if the URL uses the local-file scheme.
pub fn is_file_url(url: &str) -> bool {
    url.starts_with("file:")
}

/// True if the extension is permitted to inject content scripts into pages
/// with this URL. The platform limits injection to a small set of protocols;
/// custom extension schemes and privileged pages are out.
pub fn is_supported_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https" | "ftp"),
        Err(_) => false,
    }
}

/// Leading protocol token of a URL, for error reporting.
pub fn url_protocol(url: &str) -> String {
    url.split(':').next().unwrap_or_default().to_string()
}

/// True if a tab with this URL is displaying a PDF through the viewer
/// bundled with the extension.
pub fn is_pdf_viewer_url(url: &str, viewer_base_url: &str) -> bool {
    url.starts_with(viewer_base_url)
}

/// Guess the content type of a page from its URL alone.
///
/// Deliberately crude; used only when no code can be run in the page to ask
/// the document itself.
pub fn guess_content_type_from_url(url: &str) -> ContentType {
    let looks_like_pdf = match Url::parse(url) {
        Ok(parsed) => parsed.path().contains(".pdf"),
        Err(_) => url.contains(".pdf"),
    };
    if looks_like_pdf {
        ContentType::Pdf
    } else {
        ContentType::Html
    }
}

/// Build the viewer URL that displays `original_url` through the bundled
/// PDF viewer.
///
/// The original URL minus its fragment is percent-encoded into the `file`
/// query parameter; the fragment is carried on the viewer URL itself so the
/// client can still see it.
pub fn pdf_viewer_url(viewer_base_url: &str, original_url: &str) -> Result<String, InjectorError> {
    let mut original = Url::parse(original_url)
        .map_err(|_| InjectorError::InvalidUrl(original_url.to_string()))?;
    let fragment = original.fragment().map(str::to_string);
    original.set_fragment(None);

    let mut viewer = Url::parse(viewer_base_url)
        .map_err(|_| InjectorError::InvalidUrl(viewer_base_url.to_string()))?;
    viewer
        .query_pairs_mut()
        .append_pair("file", original.as_str());
    viewer.set_fragment(fragment.as_deref());
    Ok(viewer.to_string())
}

/// Recover the original document URL from a viewer URL built by
/// [`pdf_viewer_url`].
///
/// The viewer URL's fragment is reapplied unless it is a direct-link
/// fragment, which is dropped so reloading the original URL does not
/// immediately re-trigger injection.
pub fn original_url_from_viewer(viewer_url: &str) -> Result<String, InjectorError> {
    let parsed =
        Url::parse(viewer_url).map_err(|_| InjectorError::InvalidUrl(viewer_url.to_string()))?;
    let original = parsed
        .query_pairs()
        .find(|(key, _)| key == "file")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| InjectorError::OriginalUrlMissing(viewer_url.to_string()))?;

    match parsed.fragment() {
        Some(fragment) if !fragment.starts_with(DIRECT_LINK_PREFIX) => {
            Ok(format!("{}#{}", original, fragment))
        }
        _ => Ok(original),
    }
}

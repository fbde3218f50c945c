//! Content-type detection for browser tabs.
//!
//! The accurate path is an in-page probe, because file extensions lie; the
//! URL-based guess exists purely for tabs where no code can run (restricted
//! pages, disallowed local files, pages mid-unload).

use serde_json::Value;
use tracing::warn;

use crate::browser::{BrowserApi, PageFunction};
use crate::services::url_rules;
use crate::types::content::ContentType;
use crate::types::tab::CheckedTab;

/// Whether the extension may currently inject a content script into a tab
/// with this URL.
///
/// Local files need the user's file-scheme access grant, queried fresh each
/// time because it can change at any moment; everything else goes through
/// the protocol allow-list.
pub async fn can_inject_script(browser: &dyn BrowserApi, url: &str) -> bool {
    if url_rules::is_file_url(url) {
        browser.is_allowed_file_scheme_access().await
    } else {
        url_rules::is_supported_url(url)
    }
}

/// Determine whether a tab is displaying an HTML document or a PDF.
///
/// Probe failures never escape: when the probe cannot run, is not permitted,
/// or yields nothing, the answer degrades to the URL-based guess.
pub async fn detect_tab_content_type(
    browser: &dyn BrowserApi,
    viewer_base_url: &str,
    tab: CheckedTab<'_>,
) -> ContentType {
    // Our own viewer page is a PDF by definition; probing it is wasted work.
    if url_rules::is_pdf_viewer_url(tab.url, viewer_base_url) {
        return ContentType::Pdf;
    }

    if !can_inject_script(browser, tab.url).await {
        return url_rules::guess_content_type_from_url(tab.url);
    }

    match browser
        .execute_function(tab.id, None, PageFunction::DetectContentType)
        .await
    {
        Ok(result) => probe_content_type(&result)
            // The page context threw before responding, leaving a null
            // result; guess from the URL instead.
            .unwrap_or_else(|| url_rules::guess_content_type_from_url(tab.url)),
        Err(err) => {
            warn!(tab_id = tab.id, error = %err, "content type probe failed, guessing from URL");
            url_rules::guess_content_type_from_url(tab.url)
        }
    }
}

/// Read the `{"type": ...}` value reported by the in-page probe.
fn probe_content_type(result: &Value) -> Option<ContentType> {
    match result.get("type")?.as_str()? {
        "PDF" => Some(ContentType::Pdf),
        "HTML" => Some(ContentType::Html),
        _ => None,
    }
}

//! Sidebar lifecycle for browser tabs.
//!
//! Deploys the annotation sidebar into tabs and removes it again, loading
//! PDF documents into the bundled PDF.js viewer when applicable. Tab status
//! is re-derived from the tab's current URL on every call; nothing is cached
//! across calls, because tabs navigate and reload outside our control.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::browser::{BrowserApi, PageFunction, BOOT_SCRIPT_PATH, UNLOAD_SCRIPT_PATH};
use crate::services::config_relay::ConfigRelay;
use crate::services::content_detector::detect_tab_content_type;
use crate::services::url_rules::{
    is_file_url, is_pdf_viewer_url, is_supported_url, original_url_from_viewer, pdf_viewer_url,
    url_protocol,
};
use crate::types::content::ContentType;
use crate::types::errors::InjectorError;
use crate::types::tab::{CheckedTab, Tab};

/// Extension-relative path of the bundled PDF.js viewer page.
pub const PDF_VIEWER_PATH: &str = "/pdfjs/web/viewer.html";

/// Trait defining the sidebar lifecycle operations.
#[async_trait]
pub trait SidebarInjectorTrait {
    async fn is_client_active_in_tab(&self, tab: &Tab) -> Result<bool, InjectorError>;
    async fn inject_into_tab(&self, tab: &Tab, config: Value) -> Result<(), InjectorError>;
    async fn remove_from_tab(&self, tab: &Tab) -> Result<(), InjectorError>;
}

/// How a tab's URL positions it in the sidebar state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TabTarget {
    /// Already displaying our bundled PDF viewer.
    PdfViewer,
    /// A local-file URL.
    LocalFile,
    /// A protocol the platform refuses to inject into; carries the protocol.
    Restricted(String),
    /// An ordinary navigable page.
    Web,
}

/// Deploys and removes the annotation sidebar from tabs.
///
/// Holds no per-tab state: each operation classifies the tab's current URL,
/// consults permissions fresh, and delegates script execution and navigation
/// to the [`BrowserApi`] collaborator. The only shared mutable state is the
/// per-tab [`ConfigRelay`] entry written just before a PDF viewer redirect.
pub struct SidebarInjector {
    browser: Arc<dyn BrowserApi>,
    relay: Arc<ConfigRelay>,
    pdf_viewer_base_url: String,
}

impl SidebarInjector {
    pub fn new(browser: Arc<dyn BrowserApi>, relay: Arc<ConfigRelay>) -> Self {
        let pdf_viewer_base_url = browser.extension_url(PDF_VIEWER_PATH);
        Self {
            browser,
            relay,
            pdf_viewer_base_url,
        }
    }

    /// Absolute URL of the bundled PDF viewer page.
    pub fn pdf_viewer_base_url(&self) -> &str {
        &self.pdf_viewer_base_url
    }

    fn classify(&self, url: &str) -> TabTarget {
        if is_pdf_viewer_url(url, &self.pdf_viewer_base_url) {
            TabTarget::PdfViewer
        } else if is_file_url(url) {
            TabTarget::LocalFile
        } else if !is_supported_url(url) {
            TabTarget::Restricted(url_protocol(url))
        } else {
            TabTarget::Web
        }
    }

    async fn detect_content_type(&self, tab: CheckedTab<'_>) -> ContentType {
        detect_tab_content_type(self.browser.as_ref(), &self.pdf_viewer_base_url, tab).await
    }

    /// Park the configuration for the viewer page to pick up, then redirect.
    ///
    /// Registration precedes navigation so the viewer can never ask before
    /// its configuration is available. A configuration the viewer never
    /// requests stays parked until teardown, which is harmless.
    async fn inject_into_pdf(
        &self,
        tab: CheckedTab<'_>,
        config: Value,
    ) -> Result<(), InjectorError> {
        let viewer_url = pdf_viewer_url(&self.pdf_viewer_base_url, tab.url)?;
        self.relay.register(tab.id, config);
        debug!(tab_id = tab.id, "redirecting tab to the bundled PDF viewer");
        self.browser.update_tab_url(tab.id, &viewer_url).await?;
        Ok(())
    }

    async fn inject_into_local_pdf(
        &self,
        tab: CheckedTab<'_>,
        config: Value,
    ) -> Result<(), InjectorError> {
        if self.browser.is_allowed_file_scheme_access().await {
            self.inject_into_pdf(tab, config).await
        } else {
            Err(InjectorError::NoFileAccess)
        }
    }

    async fn inject_into_html(
        &self,
        tab: CheckedTab<'_>,
        config: Value,
    ) -> Result<(), InjectorError> {
        self.browser
            .execute_function(
                tab.id,
                None,
                PageFunction::SetClientConfig {
                    config,
                    extension_id: self.browser.extension_id(),
                },
            )
            .await?;
        let result = self.browser.execute_script(tab.id, None, BOOT_SCRIPT_PATH).await?;

        // Nothing populates `installedURL` in the current boot script. The
        // guard stays so a page that bootstrapped its own client instance and
        // reports one is still detected as a conflict.
        if let Some(installed_url) = result.get("installedURL").and_then(Value::as_str) {
            if !installed_url.contains(&self.browser.extension_url("/")) {
                return Err(InjectorError::AlreadyInjected);
            }
        }
        Ok(())
    }

    async fn remove_from_pdf(&self, tab: CheckedTab<'_>) -> Result<(), InjectorError> {
        let original_url = original_url_from_viewer(tab.url)?;
        debug!(tab_id = tab.id, "navigating tab back to the original document");
        self.browser.update_tab_url(tab.id, &original_url).await?;
        Ok(())
    }

    async fn remove_from_html(&self, tab: CheckedTab<'_>) -> Result<(), InjectorError> {
        self.browser
            .execute_script(tab.id, None, UNLOAD_SCRIPT_PATH)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SidebarInjectorTrait for SidebarInjector {
    /// Check for the presence of the client in a browser tab.
    ///
    /// Our viewer pages always carry the client. Elsewhere an in-page probe
    /// looks for the annotator marker link pointing at our own extension
    /// root; if no code can be run in the tab at all, the client is assumed
    /// to not be active.
    async fn is_client_active_in_tab(&self, tab: &Tab) -> Result<bool, InjectorError> {
        let tab = tab.check()?;

        if is_pdf_viewer_url(tab.url, &self.pdf_viewer_base_url) {
            return Ok(true);
        }

        let extension_url = self.browser.extension_url("/");
        match self
            .browser
            .execute_function(tab.id, None, PageFunction::IsClientActive { extension_url })
            .await
        {
            Ok(value) => Ok(value.as_bool().unwrap_or(false)),
            // Restricted page or tab mid-unload; absence of evidence is
            // absence of activity.
            Err(_) => Ok(false),
        }
    }

    /// Inject the sidebar into a tab, together with the configuration the
    /// client reads when it loads.
    ///
    /// Classification and permission failures are raised before any side
    /// effect; once navigation or script execution has been issued there is
    /// no rollback.
    async fn inject_into_tab(&self, tab: &Tab, config: Value) -> Result<(), InjectorError> {
        let tab = tab.check()?;
        match self.classify(tab.url) {
            TabTarget::PdfViewer => {
                // Already viewing through our PDF viewer.
                debug!(tab_id = tab.id, "tab already on the PDF viewer, nothing to inject");
                Ok(())
            }
            TabTarget::LocalFile => match self.detect_content_type(tab).await {
                ContentType::Pdf => self.inject_into_local_pdf(tab, config).await,
                ContentType::Html => Err(InjectorError::LocalFile),
            },
            TabTarget::Restricted(protocol) => Err(InjectorError::RestrictedProtocol(protocol)),
            TabTarget::Web => match self.detect_content_type(tab).await {
                ContentType::Pdf => self.inject_into_pdf(tab, config).await,
                ContentType::Html => self.inject_into_html(tab, config).await,
            },
        }
    }

    /// Remove the sidebar from a tab: navigate viewer tabs back to the
    /// original document, run the unload script in HTML tabs, and leave
    /// tabs we could never have injected into alone.
    async fn remove_from_tab(&self, tab: &Tab) -> Result<(), InjectorError> {
        let tab = tab.check()?;
        match self.classify(tab.url) {
            TabTarget::PdfViewer => self.remove_from_pdf(tab).await,
            // Nothing could have been injected there.
            TabTarget::LocalFile | TabTarget::Restricted(_) => Ok(()),
            TabTarget::Web => self.remove_from_html(tab).await,
        }
    }
}

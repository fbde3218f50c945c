//! RabbitTrail — annotation sidebar lifecycle core for the browser extension.
//!
//! This library crate exposes the modules used by the extension background
//! process and the integration tests: deciding whether the sidebar is active
//! in a tab, injecting it (directly for HTML pages, via the bundled PDF
//! viewer for PDF documents), and removing it again.

pub mod browser;
pub mod services;
pub mod types;

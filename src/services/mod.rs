// RabbitTrail services
// Services implement the sidebar lifecycle: URL classification, content-type
// detection, PDF-viewer config relay, and the inject/remove transitions.

pub mod config_relay;
pub mod content_detector;
pub mod sidebar_injector;
pub mod url_rules;

//! wsalert library - WebSocket alert display
//!
//! Exposes the alert queue, connection worker and TUI app so the binary and
//! the integration tests share one implementation.

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod theme;
pub mod websocket;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use alert::{Alert, AlertQueue};
pub use app::App;
pub use config::Config;
pub use error::AlertError;

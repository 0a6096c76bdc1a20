//! Notification module for wsalert
//!
//! Transient overlay for local diagnostics such as config warnings. Alerts
//! from the WebSocket stream never go through here.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};

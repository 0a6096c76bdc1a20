//! Alert module for wsalert
//!
//! Holds the alert data model, the FIFO queue that decides which alert is on
//! screen, and the widget that draws it.

mod alert_payload;
mod alert_queue;
pub mod alert_render;

pub use alert_payload::Alert;
pub use alert_queue::{AlertQueue, ShownAlert};
pub use alert_render::render_alert;

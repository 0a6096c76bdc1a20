//! WebSocket connection worker
//!
//! Keeps a WebSocket subscription alive on a background thread and forwards
//! what happens on it to the UI thread as [`ConnectionEvent`]s.

mod events;
mod worker;

pub use events::ConnectionEvent;
pub use worker::{ConnectionHandle, spawn_connection};

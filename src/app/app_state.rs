use std::time::Duration;

use crate::alert::AlertQueue;
use crate::config::Config;
use crate::notification::NotificationState;
use crate::websocket::ConnectionHandle;

pub struct App {
    pub alerts: AlertQueue,
    pub notification: NotificationState,
    pub connection: Option<ConnectionHandle>,
    /// Endpoint shown in the help line
    pub endpoint: String,
    /// Dwell for alerts that don't carry their own
    pub default_dwell: Duration,
    pub tick: Duration,
    pub bell: bool,
    pub bell_pending: bool,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            alerts: AlertQueue::new(),
            notification: NotificationState::new(),
            connection: None,
            endpoint: config.connection.url.clone(),
            default_dwell: config.display.dwell(),
            tick: config.display.tick(),
            bell: config.display.bell,
            bell_pending: false,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn attach_connection(&mut self, connection: ConnectionHandle) {
        self.connection = Some(connection);
    }

    /// Stop the connection worker, waiting for its thread
    pub fn shutdown(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            connection.shutdown();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Redraw when state changed or a notification may need to expire
    pub fn should_render(&self) -> bool {
        self.needs_render || self.notification.current().is_some()
    }

    /// Consume a pending bell request
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

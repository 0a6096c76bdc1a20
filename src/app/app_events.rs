use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Instant;

use super::app_state::App;
use crate::alert::Alert;
use crate::websocket::ConnectionEvent;

impl App {
    /// One tick of the UI loop
    ///
    /// Drains connection events, advances the alert display, then waits up to
    /// one tick for terminal input.
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_connection();
        self.advance_alerts(Instant::now());

        if event::poll(self.tick)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char(' ') => {
                if self.alerts.skip(Instant::now()) {
                    self.on_display_changed();
                } else {
                    self.notification.show("Nothing to skip");
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Apply one event from the connection worker
    ///
    /// Only messages change state; lifecycle events are logged.
    pub fn handle_connection_event(&mut self, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Connecting { attempt } => {
                log::debug!("Connecting to {} (attempt {})", self.endpoint, attempt);
            }
            ConnectionEvent::Opened => {
                log::info!("WebSocket connection established.");
            }
            ConnectionEvent::Message(payload) => {
                self.alerts
                    .enqueue(Alert::from_payload(&payload, self.default_dwell));
                self.mark_dirty();
            }
            ConnectionEvent::Error(message) => {
                log::warn!("WebSocket error: {}", message);
            }
            ConnectionEvent::Closed => {
                log::info!("WebSocket closed");
            }
        }
    }

    /// Advance the display state machine to `now`
    pub fn advance_alerts(&mut self, now: Instant) {
        if self.alerts.advance(now) {
            self.on_display_changed();
        }
    }

    fn poll_connection(&mut self) {
        let events = match &self.connection {
            Some(connection) => connection.poll(),
            None => return,
        };

        for event in events {
            self.handle_connection_event(event);
        }
    }

    fn on_display_changed(&mut self) {
        self.mark_dirty();

        if let Some(shown) = self.alerts.current()
            && (self.bell || shown.alert.has_sound())
        {
            self.bell_pending = true;
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

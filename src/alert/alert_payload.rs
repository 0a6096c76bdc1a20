//! Alert payload decoding
//!
//! Incoming frames are plain text. A frame that is a JSON display message
//! (`{"message": ..., "display_time": ...}`) carries its own dwell time.

use std::time::Duration;

use serde::Deserialize;

/// Structured payload a producer may send instead of plain text
#[derive(Debug, Deserialize)]
struct DisplayMessage {
    message: String,
    #[serde(default)]
    display_time: Option<u64>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    sound_url: Option<String>,
}

/// A single queued alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    /// How long the alert stays on screen once shown
    pub dwell: Duration,
    /// Carried through from display messages; not rendered in the terminal
    pub image_url: Option<String>,
    pub sound_url: Option<String>,
}

impl Alert {
    pub fn new(text: impl Into<String>, dwell: Duration) -> Self {
        Self {
            text: text.into(),
            dwell,
            image_url: None,
            sound_url: None,
        }
    }

    /// Build an alert from a raw frame
    ///
    /// Display messages use their `message` and `display_time` fields. Anything
    /// else, including JSON of another shape, is shown verbatim with
    /// `default_dwell`.
    pub fn from_payload(payload: &str, default_dwell: Duration) -> Self {
        if payload.trim_start().starts_with('{')
            && let Ok(display) = serde_json::from_str::<DisplayMessage>(payload)
        {
            let dwell = match display.display_time {
                Some(ms) if ms > 0 => Duration::from_millis(ms),
                _ => default_dwell,
            };

            return Self {
                text: display.message,
                dwell,
                image_url: display.image_url.filter(|url| !url.is_empty()),
                sound_url: display.sound_url.filter(|url| !url.is_empty()),
            };
        }

        Self::new(payload, default_dwell)
    }

    /// Whether showing this alert should ring the terminal bell
    pub fn has_sound(&self) -> bool {
        self.sound_url.is_some()
    }
}

#[cfg(test)]
#[path = "alert_payload_tests.rs"]
mod alert_payload_tests;

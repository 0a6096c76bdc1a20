// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::AlertError;

pub const DEFAULT_URL: &str = "ws://127.0.0.1:9000";
pub const DEFAULT_DWELL_MS: u64 = 5000;
pub const DEFAULT_TICK_MS: u64 = 500;
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 5000;

/// Tick bounds keep the poll loop responsive without spinning
pub const MIN_TICK_MS: u64 = 100;
pub const MAX_TICK_MS: u64 = 1000;

/// Lower bound on the redial delay so a refused port is not hammered
pub const MIN_RECONNECT_DELAY_MS: u64 = 100;

/// Connection configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Fixed text sent back after every received message
    #[serde(default)]
    pub ack_message: Option<String>,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    DEFAULT_RECONNECT_DELAY_MS
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            url: default_url(),
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
            ack_message: None,
        }
    }
}

impl ConnectionConfig {
    /// Delay before redialing, never below `MIN_RECONNECT_DELAY_MS`
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms.max(MIN_RECONNECT_DELAY_MS))
    }

    /// Parse the endpoint, accepting only `ws://` URLs with a host
    pub fn parsed_url(&self) -> Result<Url, AlertError> {
        let url = Url::parse(&self.url).map_err(|e| AlertError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        // TLS is not compiled in, so only plain ws:// endpoints can be dialed
        if url.scheme() != "ws" {
            return Err(AlertError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{}', expected ws", url.scheme()),
            });
        }

        if url.host_str().is_none() {
            return Err(AlertError::InvalidUrl {
                url: self.url.clone(),
                reason: "missing host".to_string(),
            });
        }

        Ok(url)
    }
}

/// Display configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub bell: bool,
}

fn default_dwell_ms() -> u64 {
    DEFAULT_DWELL_MS
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            dwell_ms: DEFAULT_DWELL_MS,
            tick_ms: DEFAULT_TICK_MS,
            bell: false,
        }
    }
}

impl DisplayConfig {
    /// Dwell used for alerts that don't carry their own; zero falls back to the default
    pub fn dwell(&self) -> Duration {
        if self.dwell_ms == 0 {
            Duration::from_millis(DEFAULT_DWELL_MS)
        } else {
            Duration::from_millis(self.dwell_ms)
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any tick value in the file ends up inside the supported window
        #[test]
        fn prop_tick_is_clamped(tick_ms in 0u64..100_000) {
            let toml_content = format!("[display]\ntick_ms = {}\n", tick_ms);
            let config: Config = toml::from_str(&toml_content).unwrap();

            let tick = config.display.tick();
            prop_assert!(tick >= Duration::from_millis(MIN_TICK_MS));
            prop_assert!(tick <= Duration::from_millis(MAX_TICK_MS));
        }

        // Missing sections or fields always fall back to defaults
        #[test]
        fn prop_missing_fields_use_defaults(
            include_display_section in prop::bool::ANY,
            include_dwell_field in prop::bool::ANY
        ) {
            let toml_content = if !include_display_section {
                String::new()
            } else if !include_dwell_field {
                "[display]\n".to_string()
            } else {
                "[display]\ndwell_ms = 1200\n".to_string()
            };

            let config: Config = toml::from_str(&toml_content).unwrap();

            if !include_display_section || !include_dwell_field {
                prop_assert_eq!(config.display.dwell_ms, DEFAULT_DWELL_MS);
            } else {
                prop_assert_eq!(config.display.dwell_ms, 1200);
            }
            prop_assert_eq!(&config.connection.url, DEFAULT_URL);
        }
    }

    #[test]
    fn test_zero_dwell_falls_back_to_default() {
        let display = DisplayConfig {
            dwell_ms: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(display.dwell(), Duration::from_millis(DEFAULT_DWELL_MS));
    }

    #[test]
    fn test_reconnect_delay_has_floor() {
        let connection = ConnectionConfig {
            reconnect_delay_ms: 0,
            ..ConnectionConfig::default()
        };
        assert_eq!(
            connection.reconnect_delay(),
            Duration::from_millis(MIN_RECONNECT_DELAY_MS)
        );

        let connection = ConnectionConfig {
            reconnect_delay_ms: 250,
            ..ConnectionConfig::default()
        };
        assert_eq!(connection.reconnect_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_parsed_url_accepts_ws() {
        for url in ["ws://127.0.0.1:9000", "ws://alerts.local:9100/feed"] {
            let connection = ConnectionConfig {
                url: url.to_string(),
                ..ConnectionConfig::default()
            };
            assert!(connection.parsed_url().is_ok(), "{} should be accepted", url);
        }
    }

    #[test]
    fn test_parsed_url_rejects_wss() {
        let connection = ConnectionConfig {
            url: "wss://alerts.example.com/feed".to_string(),
            ..ConnectionConfig::default()
        };
        assert!(connection.parsed_url().is_err());
    }

    #[test]
    fn test_parsed_url_rejects_http_scheme() {
        let connection = ConnectionConfig {
            url: "http://127.0.0.1:9000".to_string(),
            ..ConnectionConfig::default()
        };
        let err = connection.parsed_url().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'http'"));
    }

    #[test]
    fn test_parsed_url_rejects_garbage() {
        let connection = ConnectionConfig {
            url: "not a url".to_string(),
            ..ConnectionConfig::default()
        };
        assert!(matches!(
            connection.parsed_url(),
            Err(AlertError::InvalidUrl { .. })
        ));
    }
}

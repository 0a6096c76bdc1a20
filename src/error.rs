use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Invalid WebSocket URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("WebSocket connection failed: {0}")]
    Connection(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

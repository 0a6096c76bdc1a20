//! Connection Worker Thread
//!
//! Runs the WebSocket client on a dedicated thread with a single-threaded
//! tokio runtime so the UI loop never blocks on the network. Frames are sent
//! back over a channel in the order they arrive.
//!
//! Reconnection is unconditional: whenever a session ends, with or without an
//! error, the worker waits `reconnect_delay` and dials again until cancelled.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::events::ConnectionEvent;
use crate::config::ConnectionConfig;
use crate::error::AlertError;

/// Settings the worker thread owns
#[derive(Debug, Clone)]
struct WorkerSettings {
    url: Url,
    reconnect_delay: Duration,
    ack_message: Option<String>,
}

/// How a session ended without a transport error
#[derive(Debug, PartialEq, Eq)]
enum SessionEnd {
    /// Peer closed the socket; reconnect
    Closed,
    /// Cancelled, or the UI dropped its receiver; stop for good
    Stopped,
}

/// UI-side handle to the connection worker
///
/// Dropping the handle cancels the worker.
pub struct ConnectionHandle {
    rx: Receiver<ConnectionEvent>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl ConnectionHandle {
    /// Drain every event received so far without blocking
    pub fn poll(&self) -> Vec<ConnectionEvent> {
        self.rx.try_iter().collect()
    }

    /// Cancel the worker and wait for its thread to exit
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("Connection worker thread panicked");
        }
    }
}

impl Drop for ConnectionHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn the connection worker thread
///
/// Validates the endpoint up front; everything after that is reported as
/// events and retried by the worker.
pub fn spawn_connection(config: &ConnectionConfig) -> Result<ConnectionHandle, AlertError> {
    let settings = WorkerSettings {
        url: config.parsed_url()?,
        reconnect_delay: config.reconnect_delay(),
        ack_message: config.ack_message.clone(),
    };

    let (tx, rx) = channel();
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();

    let thread = std::thread::Builder::new()
        .name("wsalert-connection".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create connection runtime: {}", e);
                    let _ = tx.send(ConnectionEvent::Error(e.to_string()));
                    return;
                }
            };

            rt.block_on(connection_loop(settings, tx, worker_cancel));
        })?;

    Ok(ConnectionHandle {
        rx,
        cancel,
        thread: Some(thread),
    })
}

/// Dial, read until the session ends, wait, repeat
async fn connection_loop(
    settings: WorkerSettings,
    tx: Sender<ConnectionEvent>,
    cancel: CancellationToken,
) {
    let mut attempt: u64 = 0;

    loop {
        attempt += 1;
        log::info!("Connecting to {} (attempt {})", settings.url, attempt);
        if tx.send(ConnectionEvent::Connecting { attempt }).is_err() {
            break;
        }

        match run_session(&settings, &tx, &cancel).await {
            Ok(SessionEnd::Stopped) => break,
            Ok(SessionEnd::Closed) => {
                log::info!("WebSocket closed by {}", settings.url);
                if tx.send(ConnectionEvent::Closed).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::warn!("WebSocket error on {}: {}", settings.url, e);
                if tx.send(ConnectionEvent::Error(e.to_string())).is_err() {
                    break;
                }
            }
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(settings.reconnect_delay) => {}
        }
    }

    log::debug!("Connection worker for {} stopped", settings.url);
}

/// One connection lifetime: handshake, then forward frames until it ends
async fn run_session(
    settings: &WorkerSettings,
    tx: &Sender<ConnectionEvent>,
    cancel: &CancellationToken,
) -> Result<SessionEnd, AlertError> {
    let (ws_stream, response) = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Ok(SessionEnd::Stopped),
        result = tokio_tungstenite::connect_async(settings.url.as_str()) => result?,
    };

    log::info!(
        "WebSocket connection established (status: {})",
        response.status()
    );
    if tx.send(ConnectionEvent::Opened).is_err() {
        return Ok(SessionEnd::Stopped);
    }

    let (mut write, mut read) = ws_stream.split();

    loop {
        let frame = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                let _ = write.send(Message::Close(None)).await;
                return Ok(SessionEnd::Stopped);
            }
            frame = read.next() => frame,
        };

        let text = match frame {
            None => return Ok(SessionEnd::Closed),
            Some(Err(e)) => return Err(e.into()),
            Some(Ok(Message::Text(text))) => text.as_str().to_string(),
            Some(Ok(Message::Binary(bytes))) => match std::str::from_utf8(&bytes) {
                Ok(text) => text.to_string(),
                Err(e) => {
                    log::warn!("Dropping binary frame that is not UTF-8: {}", e);
                    continue;
                }
            },
            Some(Ok(Message::Close(frame))) => {
                log::debug!("Close frame received: {:?}", frame);
                return Ok(SessionEnd::Closed);
            }
            // Ping/pong replies are handled by tungstenite
            Some(Ok(_)) => continue,
        };

        log::debug!("Message from websocket: {}", text);
        if tx.send(ConnectionEvent::Message(text)).is_err() {
            return Ok(SessionEnd::Stopped);
        }

        if let Some(ack) = &settings.ack_message {
            write.send(Message::Text(ack.clone().into())).await?;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

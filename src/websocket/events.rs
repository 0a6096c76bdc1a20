/// Everything the connection worker reports back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// A connection attempt is starting; attempts count from 1
    Connecting { attempt: u64 },
    Opened,
    /// A text frame, or a binary frame holding valid UTF-8
    Message(String),
    Error(String),
    Closed,
}

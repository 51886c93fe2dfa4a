use std::fmt;

/// Errors surfaced by the bridge and its pluggable backends.
///
/// A surface id that does not resolve is deliberately not an error
/// variant: `PoseBridge::start` handles that case locally by logging and
/// aborting the start.
#[derive(Debug)]
pub enum BridgeError {
    /// The detection backend failed to load or run.
    Detector(String),
    /// The frame source failed to produce a frame.
    Capture(String),
    /// A frame channel was closed or misused.
    Channel(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Detector(msg) => write!(f, "detector error: {msg}"),
            BridgeError::Capture(msg) => write!(f, "capture error: {msg}"),
            BridgeError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {}

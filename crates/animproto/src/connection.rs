//! The seam to the remote editor process.
//!
//! This crate does not own a transport. Whoever constructs the gateway
//! injects an `EditorConnection`; tests inject mocks. The trait carries
//! the one operation the protocol needs, and implementations are
//! expected to be safe for concurrent use (each call is independent on
//! this side).

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Command name the editor dispatches animation requests on.
pub const MANAGE_ANIMATION: &str = "manage_animation";

/// Errors an editor connection can report.
///
/// The gateway collapses every variant into a local-origin failure
/// message; the taxonomy exists so connection implementations can log
/// and report precisely.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("connection closed")]
    Closed,

    #[error("timed out after {0}ms waiting for the editor")]
    Timeout(u64),

    #[error("malformed reply from editor: {0}")]
    MalformedReply(String),
}

impl From<std::io::Error> for ConnectionError {
    fn from(e: std::io::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ConnectionError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedReply(e.to_string())
    }
}

/// Async dispatch seam to the editor.
///
/// One request in, one arbitrary JSON reply out. No retry, timeout, or
/// schema enforcement happens at this layer - those belong to the
/// implementation or the caller.
#[async_trait]
pub trait EditorConnection: Send + Sync {
    /// Send a command with its payload and wait for the editor's reply.
    async fn send_command(&self, command: &str, params: Value) -> Result<Value, ConnectionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_keeps_the_underlying_text() {
        let err = ConnectionError::Transport("connection lost".to_string());
        assert_eq!(err.to_string(), "transport failure: connection lost");

        let err = ConnectionError::Timeout(5000);
        assert_eq!(err.to_string(), "timed out after 5000ms waiting for the editor");
    }

    #[test]
    fn io_errors_convert_to_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ConnectionError::from(io);
        assert!(matches!(err, ConnectionError::Transport(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}

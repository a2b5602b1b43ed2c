//! Error types for the socket client

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the receiver
#[derive(Debug, Error)]
pub enum TransportError {
    /// The socket could not be opened or written to
    #[error("Connection error ({code}): {message}")]
    Connection { code: i32, message: String },

    /// No data arrived within the polling window
    #[error("Exceeded timeout of {0:?} while waiting for response")]
    Timeout(Duration),

    /// Data arrived but did not contain an XML document
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<io::Error> for TransportError {
    fn from(error: io::Error) -> Self {
        TransportError::Connection {
            code: error.raw_os_error().unwrap_or(0),
            message: error.to_string(),
        }
    }
}

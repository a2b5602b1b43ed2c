use socket_client::TransportError;
use std::time::Duration;
use thiserror::Error;

/// High-level API errors for receiver operations
///
/// Transport failures are mapped one-to-one; the remaining variants cover
/// zone lookup, request templates and reply parsing. Nothing is retried
/// automatically, so callers decide whether to resend a whole command.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The socket to the receiver could not be opened or written to
    ///
    /// Carries the OS error code (0 when none was reported) and message.
    #[error("Connection error ({code}): {message}")]
    Connection { code: i32, message: String },

    /// No reply arrived within the polling window
    #[error("Exceeded timeout of {0:?} while waiting for response")]
    Timeout(Duration),

    /// A reply arrived without an XML document in it
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The zone name is not in the registry
    #[error("Zone could not be found: {0}")]
    InvalidZone(String),

    /// The request template could not be loaded
    #[error("Template '{template}' not found: {message}")]
    TemplateNotFound { template: String, message: String },

    /// The reply XML could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Connection { code, message } => ApiError::Connection { code, message },
            TransportError::Timeout(timeout) => ApiError::Timeout(timeout),
            TransportError::MalformedResponse(msg) => ApiError::MalformedResponse(msg),
        }
    }
}

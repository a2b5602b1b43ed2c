//! Timing configuration for the receiver connection

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bound on the TCP connect attempt
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default ceiling on how long to wait for a reply
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

/// Receive polls twice per second of response timeout
pub const POLL_CADENCE: Duration = Duration::from_millis(500);

/// Configuration for a [`Connection`](crate::Connection)
///
/// The number of receive attempts is derived from `response_timeout` at a
/// fixed half-second cadence, so a 2 second timeout always yields 4 attempts.
/// `poll_interval` is the actual sleep between empty attempts and defaults to
/// the same half second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Bound on the TCP connect attempt
    /// Default: 2 seconds
    pub connect_timeout: Duration,

    /// Total time to wait for a reply
    /// Default: 2 seconds
    pub response_timeout: Duration,

    /// Sleep after each empty read
    /// Default: 500 milliseconds
    pub poll_interval: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            poll_interval: POLL_CADENCE,
        }
    }
}

impl TransportConfig {
    /// Create a new TransportConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Number of reads `receive` performs before giving up
    ///
    /// Always at least one.
    pub fn poll_attempts(&self) -> u32 {
        let attempts = self
            .response_timeout
            .as_millis()
            .div_ceil(POLL_CADENCE.as_millis());
        u32::try_from(attempts).unwrap_or(u32::MAX).max(1)
    }
}

//! Connection manager for a single receiver socket

use std::io::{self, Read, Write};
use std::thread;

use tracing::{debug, trace, warn};

use crate::config::TransportConfig;
use crate::connector::{Connector, TcpConnector};
use crate::error::TransportError;
use crate::wire::{extract_xml, frame_request};

/// Largest chunk read from the socket at once
pub const READ_CHUNK: usize = 4096;

/// Owns the socket to one receiver and moves requests and replies over it
///
/// The socket is opened lazily and reopened whenever a read has seen the peer
/// close it. Replies are collected by polling a non-blocking stream on a fixed
/// cadence rather than blocking on a read timeout.
///
/// The protocol has no request IDs. A reply that arrives after `receive` gave
/// up stays in the socket until the next `send` drains it.
pub struct Connection<C: Connector = TcpConnector> {
    host: String,
    port: u16,
    connector: C,
    config: TransportConfig,
    stream: Option<C::Stream>,
    at_eof: bool,
}

impl Connection<TcpConnector> {
    /// Create a TCP connection to `host:port` without opening it yet
    pub fn tcp(host: impl Into<String>, port: u16, config: TransportConfig) -> Self {
        Self::new(host, port, TcpConnector, config)
    }
}

impl<C: Connector> Connection<C> {
    pub fn new(host: impl Into<String>, port: u16, connector: C, config: TransportConfig) -> Self {
        Self {
            host: host.into(),
            port,
            connector,
            config,
            stream: None,
            at_eof: false,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// True when a stream is open and no read has seen end-of-stream
    pub fn is_alive(&self) -> bool {
        self.stream.is_some() && !self.at_eof
    }

    /// Open the socket unless a live one already exists
    pub fn ensure_connected(&mut self) -> Result<(), TransportError> {
        if self.is_alive() {
            return Ok(());
        }
        self.reconnect()
    }

    /// Drop the current socket, if any, and open a fresh one
    pub fn reconnect(&mut self) -> Result<(), TransportError> {
        if self.stream.take().is_some() {
            debug!(host = %self.host, port = self.port, "Closing stale receiver connection");
        }
        self.at_eof = false;

        debug!(host = %self.host, port = self.port, "Connecting to receiver");
        let stream = self
            .connector
            .connect(&self.host, self.port, self.config.connect_timeout)
            .map_err(|e| {
                warn!(host = %self.host, port = self.port, error = %e, "Failed to connect to receiver");
                TransportError::from(e)
            })?;

        self.stream = Some(stream);
        Ok(())
    }

    /// Write one request to the receiver
    ///
    /// Bytes already waiting in the socket are read once and thrown away
    /// first, so they cannot be mistaken for the reply to this request. If
    /// that read finds the receiver has hung up on an idle socket, a fresh
    /// one is opened before writing.
    pub fn send(&mut self, payload: &str) -> Result<(), TransportError> {
        self.ensure_connected()?;

        let mut scratch = [0u8; READ_CHUNK];
        match self.read_chunk(&mut scratch) {
            Ok(0) => {}
            Ok(n) => debug!(bytes = n, "Discarded unread bytes before sending"),
            Err(e) => trace!(error = %e, "Drain read failed"),
        }

        if self.at_eof {
            self.reconnect()?;
        }

        let message = frame_request(payload);
        debug!(bytes = payload.len(), "Sending request");

        let stream = self.stream_mut()?;
        stream.write_all(message.as_bytes())?;
        stream.flush()?;
        Ok(())
    }

    /// Poll for a reply and return it from the XML marker onward
    pub fn receive(&mut self) -> Result<String, TransportError> {
        let attempts = self.config.poll_attempts();
        let mut buffer = [0u8; READ_CHUNK];

        for attempt in 1..=attempts {
            let read = self.read_chunk(&mut buffer)?;
            if read > 0 {
                trace!(attempt, bytes = read, "Received reply");
                return extract_xml(&buffer[..read]).map_err(|e| {
                    warn!(error = %e, "Reply did not contain XML");
                    e
                });
            }

            trace!(attempt, attempts, "No reply yet");
            thread::sleep(self.config.poll_interval);
        }

        warn!(
            timeout = ?self.config.response_timeout,
            attempts,
            "Timed out waiting for reply"
        );
        Err(TransportError::Timeout(self.config.response_timeout))
    }

    /// Send a request and wait for its reply
    pub fn request(&mut self, payload: &str) -> Result<String, TransportError> {
        self.send(payload)?;
        self.receive()
    }

    fn stream_mut(&mut self) -> Result<&mut C::Stream, TransportError> {
        self.stream.as_mut().ok_or_else(|| TransportError::Connection {
            code: 0,
            message: "not connected".to_string(),
        })
    }

    /// Read whatever is buffered, treating "nothing yet" as zero bytes
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let stream = self.stream_mut()?;
        match stream.read(buf) {
            Ok(0) => {
                self.at_eof = true;
                debug!("Receiver closed the connection");
                Ok(0)
            }
            Ok(n) => Ok(n),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<C: Connector> std::fmt::Debug for Connection<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("config", &self.config)
            .field("alive", &self.is_alive())
            .finish()
    }
}

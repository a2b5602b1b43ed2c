//! Private socket client for Harman Kardon AVR communication
//!
//! This crate provides a minimal client for the receiver's control port: a
//! single TCP socket, a pseudo-HTTP request framing, and a polled read that
//! pulls the XML reply out of whatever the receiver sends back.
//!
//! ```rust,no_run
//! use socket_client::{Connection, TransportConfig};
//!
//! let mut connection = Connection::tcp("192.168.1.50", 10025, TransportConfig::default());
//! let reply = connection.request("<?xml version=\"1.0\"?><harman/>")?;
//! println!("{}", reply);
//! # Ok::<(), socket_client::TransportError>(())
//! ```

mod config;
mod connection;
mod connector;
mod error;
pub mod wire;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use config::{TransportConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_RESPONSE_TIMEOUT, POLL_CADENCE};
pub use connection::{Connection, READ_CHUNK};
pub use connector::{Connector, TcpConnector};
pub use error::TransportError;

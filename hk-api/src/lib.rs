//! Zone-based API for Harman Kardon receivers
//!
//! This crate drives a receiver over its XML control port. It uses the
//! private `socket-client` crate for the socket and wire format and adds
//! zones, request templates and typed errors on top.
//!
//! ```rust,no_run
//! use hk_api::{AvrClient, ClientConfig};
//!
//! let config = ClientConfig::new().with_zones(["Main Zone", "Zone 2"]);
//! let mut client = AvrClient::with_config("192.168.1.50", config)?;
//!
//! let mut main = client.zone("Main Zone")?;
//! main.command("power-on", None)?;
//! main.command("source-selection", Some("TV"))?;
//! # Ok::<(), hk_api::ApiError>(())
//! ```
//!
//! Looking up a zone that was not configured fails with
//! [`ApiError::InvalidZone`]; zones are never created on demand.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod response;
pub mod zone;

pub use client::AvrClient;
pub use config::{ClientConfig, DEFAULT_PORT};
pub use error::{ApiError, Result};
pub use request::{Request, TemplateStore, DEFAULT_TEMPLATE};
pub use response::Response;
pub use zone::{Zone, ZoneRegistry, DEFAULT_ZONES};

pub use socket_client::TransportConfig;

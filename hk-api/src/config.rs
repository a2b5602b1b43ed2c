//! Configuration for [`AvrClient`](crate::AvrClient)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use socket_client::TransportConfig;

use crate::zone::DEFAULT_ZONES;

/// Default control port of Harman Kardon receivers
pub const DEFAULT_PORT: u16 = 10025;

/// Everything needed to build a client apart from the host
///
/// Deserializes with every field optional, so a config file only needs to
/// name what differs from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Receiver control port
    /// Default: 10025
    pub port: u16,

    /// Zone names accepted by `AvrClient::zone`
    /// Default: ["Main Zone", "Zone 2"]
    pub zones: Vec<String>,

    /// Connect and reply timing
    pub transport: TransportConfig,

    /// Directory of `<id>.xml` request templates
    /// Default: None (templates bundled with the crate)
    pub template_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            zones: DEFAULT_ZONES.iter().map(|zone| zone.to_string()).collect(),
            transport: TransportConfig::default(),
            template_dir: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}

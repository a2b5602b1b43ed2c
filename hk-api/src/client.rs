use socket_client::{Connection, Connector, TcpConnector};
use tracing::info;

use crate::config::ClientConfig;
use crate::request::{Request, TemplateStore};
use crate::response::Response;
use crate::zone::{Zone, ZoneRegistry};
use crate::Result;

/// A client for one Harman Kardon receiver
///
/// Owns the socket, the zone registry and the template store. Commands go
/// through [`Zone`] handles:
///
/// ```rust,no_run
/// use hk_api::AvrClient;
///
/// let mut client = AvrClient::new("192.168.1.50")?;
/// let reply = client.zone("Main Zone")?.command("power-on", None)?;
/// println!("{}", reply);
/// # Ok::<(), hk_api::ApiError>(())
/// ```
///
/// Commands are strictly one at a time. The receiver's replies carry no
/// request id, so a reply that arrives after its command timed out can only
/// be discarded by the next send.
#[derive(Debug)]
pub struct AvrClient<C: Connector = TcpConnector> {
    connection: Connection<C>,
    zones: ZoneRegistry,
    templates: TemplateStore,
}

impl AvrClient<TcpConnector> {
    /// Connect to a receiver on the default port with the default zones
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_config(host, ClientConfig::default())
    }

    /// Connect to a receiver with a custom configuration
    pub fn with_config(host: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_connector(host, config, TcpConnector)
    }
}

impl<C: Connector> AvrClient<C> {
    /// Build a client over a custom connector and open the connection
    ///
    /// The socket is opened eagerly so an unreachable receiver is reported
    /// here rather than on the first command.
    pub fn with_connector(host: impl Into<String>, config: ClientConfig, connector: C) -> Result<Self> {
        let ClientConfig {
            port,
            zones,
            transport,
            template_dir,
        } = config;

        let templates = match template_dir {
            Some(dir) => TemplateStore::directory(dir),
            None => TemplateStore::bundled(),
        };

        let mut connection = Connection::new(host, port, connector, transport);
        connection.ensure_connected()?;

        let zones = ZoneRegistry::new(zones);
        info!(
            host = %connection.host(),
            port = connection.port(),
            zones = zones.len(),
            "Connected to receiver"
        );

        Ok(Self {
            connection,
            zones,
            templates,
        })
    }

    /// Replace the template store
    pub fn with_templates(mut self, templates: TemplateStore) -> Self {
        self.templates = templates;
        self
    }

    /// Get a handle for a configured zone
    pub fn zone(&mut self, name: &str) -> Result<Zone<'_, C>> {
        let name = self.zones.resolve(name)?;
        Ok(Zone::new(name, &self.templates, &mut self.connection))
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.zones.names()
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn connection(&self) -> &Connection<C> {
        &self.connection
    }

    /// Render a request body from its template
    ///
    /// The zone is not checked against the registry.
    pub fn generate_request(&self, request: &Request) -> Result<String> {
        self.templates.generate(request)
    }

    /// Send a raw request body
    ///
    /// Prefer [`Zone::command`]; this exists for requests no template covers.
    /// Pair it with [`read_response`](Self::read_response).
    pub fn send_request(&mut self, payload: &str) -> Result<()> {
        self.connection.send(payload)?;
        Ok(())
    }

    /// Wait for the receiver's next reply
    pub fn read_response(&mut self) -> Result<Response> {
        let body = self.connection.receive()?;
        Ok(Response::new(body))
    }
}

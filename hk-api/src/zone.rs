//! Zone registry and zone handles
//!
//! The registry is the fixed allow-list of zone names a client was built
//! with. A [`Zone`] is a short-lived handle that borrows the client's
//! connection and issues commands with its own name in the zone slot.

use socket_client::{Connection, Connector, TcpConnector};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::request::{Request, TemplateStore};
use crate::response::Response;

/// Zones used when none are given (AVR 370 layout)
pub const DEFAULT_ZONES: [&str; 2] = ["Main Zone", "Zone 2"];

/// Ordered, immutable set of valid zone names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRegistry {
    names: Vec<String>,
}

impl ZoneRegistry {
    /// Build a registry from zone names in order
    ///
    /// An empty list falls back to [`DEFAULT_ZONES`]. A repeated name
    /// replaces the earlier entry in place.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            match registry.iter_mut().find(|existing| **existing == name) {
                Some(existing) => *existing = name,
                None => registry.push(name),
            }
        }

        if registry.is_empty() {
            registry = DEFAULT_ZONES.iter().map(|name| name.to_string()).collect();
        }

        Self { names: registry }
    }

    /// Look up a zone name, failing for anything not in the registry
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.names
            .iter()
            .find(|existing| existing.as_str() == name)
            .map(String::as_str)
            .ok_or_else(|| ApiError::InvalidZone(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; an empty input falls back to the defaults
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ZONES)
    }
}

/// Handle for issuing commands to one zone
///
/// Obtained from [`AvrClient::zone`](crate::AvrClient::zone). The handle holds
/// the client's connection mutably, so only one command can be in flight.
pub struct Zone<'a, C: Connector = TcpConnector> {
    name: &'a str,
    templates: &'a TemplateStore,
    connection: &'a mut Connection<C>,
}

impl<'a, C: Connector> Zone<'a, C> {
    pub(crate) fn new(
        name: &'a str,
        templates: &'a TemplateStore,
        connection: &'a mut Connection<C>,
    ) -> Self {
        Self {
            name,
            templates,
            connection,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Render a request for this zone from the default template without sending it
    pub fn request(&self, action: &str, parameter: Option<&str>) -> Result<String> {
        self.templates.generate(&self.build(action, parameter, None))
    }

    /// Send an action to this zone and wait for the reply
    pub fn command(&mut self, action: &str, parameter: Option<&str>) -> Result<Response> {
        let request = self.build(action, parameter, None);
        self.execute(request)
    }

    /// Like [`command`](Self::command) with an explicit template id
    pub fn command_with_template(
        &mut self,
        action: &str,
        parameter: Option<&str>,
        template: &str,
    ) -> Result<Response> {
        let request = self.build(action, parameter, Some(template));
        self.execute(request)
    }

    fn build(&self, action: &str, parameter: Option<&str>, template: Option<&str>) -> Request {
        let mut request = Request::new(action, self.name);
        request.parameter = parameter.map(str::to_string);
        if let Some(template) = template {
            request.template = template.to_string();
        }
        request
    }

    fn execute(&mut self, request: Request) -> Result<Response> {
        let body = self.templates.generate(&request)?;
        debug!(zone = %self.name, action = %request.action, "Issuing zone command");
        self.connection.send(&body)?;
        let reply = self.connection.receive()?;
        Ok(Response::new(reply))
    }
}

impl<C: Connector> std::fmt::Debug for Zone<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Zone").field("name", &self.name).finish()
    }
}

use std::fmt;

use xmltree::Element;

use crate::error::{ApiError, Result};

/// Reply from the receiver, starting at its `<?xml` marker
///
/// The body is kept verbatim. Anything the receiver sent after the document
/// is part of it, so [`xml`](Self::xml) can fail on a reply that still reads
/// fine as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    body: String,
}

impl Response {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn into_string(self) -> String {
        self.body
    }

    /// Parse the body as an XML element tree
    pub fn xml(&self) -> Result<Element> {
        Element::parse(self.body.as_bytes()).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl AsRef<str> for Response {
    fn as_ref(&self) -> &str {
        &self.body
    }
}

impl From<Response> for String {
    fn from(response: Response) -> Self {
        response.body
    }
}

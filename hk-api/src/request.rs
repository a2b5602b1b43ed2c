//! Request templates and rendering
//!
//! Requests are XML documents with three placeholders: `{{ name }}` for the
//! action, `{{ zone }}` for the zone and `{{ para }}` for the optional
//! parameter. Templates are looked up by id as `<id>.xml`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{ApiError, Result};

/// Template used when a request does not name one
pub const DEFAULT_TEMPLATE: &str = "hk";

/// The `hk` template compiled into the library
pub const BUNDLED_HK_TEMPLATE: &str = include_str!("../templates/hk.xml");

pub const NAME_PLACEHOLDER: &str = "{{ name }}";
pub const ZONE_PLACEHOLDER: &str = "{{ zone }}";
pub const PARA_PLACEHOLDER: &str = "{{ para }}";

/// One command addressed to one zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Action name, e.g. "power-on"
    pub action: String,
    /// Zone name, e.g. "Main Zone"
    pub zone: String,
    /// Optional action parameter
    pub parameter: Option<String>,
    /// Template id, resolved as `<template>.xml`
    pub template: String,
}

impl Request {
    pub fn new(action: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            zone: zone.into(),
            parameter: None,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Substitute this request into template text
    ///
    /// A missing parameter becomes an empty string. The result is trimmed.
    pub fn render(&self, template: &str) -> String {
        template
            .replace(NAME_PLACEHOLDER, &self.action)
            .replace(ZONE_PLACEHOLDER, &self.zone)
            .replace(PARA_PLACEHOLDER, self.parameter.as_deref().unwrap_or(""))
            .trim()
            .to_string()
    }
}

/// Where request templates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStore {
    /// `<dir>/<id>.xml` files read on every request
    Directory(PathBuf),
    /// Templates held in memory, keyed by id
    Inline(HashMap<String, String>),
}

impl TemplateStore {
    pub fn directory(base: impl Into<PathBuf>) -> Self {
        TemplateStore::Directory(base.into())
    }

    /// Templates compiled into the library, independent of the filesystem
    pub fn bundled() -> Self {
        Self::inline([(DEFAULT_TEMPLATE, BUNDLED_HK_TEMPLATE)])
    }

    pub fn inline<I, K, V>(templates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        TemplateStore::Inline(
            templates
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        )
    }

    /// Load the raw text of a template
    pub fn load(&self, id: &str) -> Result<String> {
        match self {
            TemplateStore::Directory(base) => load_file(base, id),
            TemplateStore::Inline(templates) => {
                templates
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ApiError::TemplateNotFound {
                        template: id.to_string(),
                        message: "no inline template with this id".to_string(),
                    })
            }
        }
    }

    /// Load the request's template and render the request into it
    pub fn generate(&self, request: &Request) -> Result<String> {
        let template = self.load(&request.template)?;
        let body = request.render(&template);
        trace!(action = %request.action, zone = %request.zone, template = %request.template, "Generated request");
        Ok(body)
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::bundled()
    }
}

fn load_file(base: &Path, id: &str) -> Result<String> {
    let path = base.join(format!("{}.xml", id));
    fs::read_to_string(&path).map_err(|e| ApiError::TemplateNotFound {
        template: id.to_string(),
        message: format!("{}: {}", path.display(), e),
    })
}

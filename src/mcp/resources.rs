//! MCP resource handlers.
//!
//! Resources are read-only Markdown documents under the `context://` scheme:
//!
//! | URI | Content |
//! |-----|---------|
//! | `context://molecules/cot` | Chain-of-thought templates |
//! | `context://reference/layers` | Layer definitions |
//! | `context://fields/resonance` | Neural field primitives |
//! | `context://catalog` | Index of every registry, generated from the catalog |

use super::resource_content;
use crate::templates::{Catalog, RegistryKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// URI scheme for all resources.
pub const SCHEME: &str = "context://";

const MARKDOWN: &str = "text/markdown";

/// Path of the generated catalog index.
const CATALOG_PATH: &str = "catalog";

/// A fixed document.
struct StaticResource {
    path: &'static str,
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

const STATIC_RESOURCES: &[StaticResource] = &[
    StaticResource {
        path: "molecules/cot",
        name: "Chain of Thought Templates",
        description: "Chain-of-thought prompts and the molecule structure",
        content: resource_content::COT_MOLECULES,
    },
    StaticResource {
        path: "reference/layers",
        name: "Context Engineering Layers",
        description: "Atoms, molecules, cells, organs and systems",
        content: resource_content::LAYERS,
    },
    StaticResource {
        path: "fields/resonance",
        name: "Neural Field Protocols",
        description: "Resonance field primitives for long-horizon context",
        content: resource_content::RESONANCE_FIELD,
    },
];

/// Handler for MCP resources.
pub struct ResourceHandler {
    catalog: Arc<Catalog>,
}

impl ResourceHandler {
    /// Creates a new resource handler.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Lists all available resources.
    #[must_use]
    pub fn list_resources(&self) -> Vec<ResourceDefinition> {
        STATIC_RESOURCES
            .iter()
            .map(|r| ResourceDefinition {
                uri: format!("{SCHEME}{}", r.path),
                name: r.name.to_string(),
                description: Some(r.description.to_string()),
                mime_type: Some(MARKDOWN.to_string()),
            })
            .chain(std::iter::once(ResourceDefinition {
                uri: format!("{SCHEME}{CATALOG_PATH}"),
                name: "Template Catalog".to_string(),
                description: Some("Every built-in template key by registry".to_string()),
                mime_type: Some(MARKDOWN.to_string()),
            }))
            .collect()
    }

    /// Gets a resource by URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the scheme is not `context://` or
    /// the path is unknown.
    pub fn get_resource(&self, uri: &str) -> Result<ResourceContent> {
        let uri = uri.trim();
        let path = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| Error::InvalidInput(format!("Invalid URI scheme: {uri}")))?
            .trim_end_matches('/');

        let text = if path == CATALOG_PATH {
            self.catalog_index()
        } else {
            STATIC_RESOURCES
                .iter()
                .find(|r| r.path == path)
                .map(|r| r.content.to_string())
                .ok_or_else(|| Error::InvalidInput(format!("Unknown resource path: {path}")))?
        };

        Ok(ResourceContent {
            uri: uri.to_string(),
            mime_type: Some(MARKDOWN.to_string()),
            text: Some(text),
        })
    }

    fn catalog_index(&self) -> String {
        format!(
            "# Template Catalog\n\n{}",
            self.catalog.render_listing(RegistryKind::all())
        )
    }
}

/// Definition of an MCP resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Resource URI.
    pub uri: String,
    /// Human-readable name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// MIME type of the resource.
    pub mime_type: Option<String>,
}

/// Content of an MCP resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContent {
    /// Resource URI.
    pub uri: String,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Text content.
    pub text: Option<String>,
}

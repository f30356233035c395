//! # Catalog
//!
//! Tool definitions and prompt templates. Both are read from JSON once at startup
//! and never mutated afterwards; callers share a [`Catalog`] behind an `Arc`.
//!
//! ## Sources
//!
//! - [`Catalog::builtin`]: JSON embedded in the binary (`data/tools.json`, `data/templates.json`).
//! - [`Catalog::load_dir`]: a directory holding the same two files.
//! - [`Catalog::from_json`]: raw JSON strings (tests, custom deployments).

mod error;
mod tool;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

pub use error::CatalogError;
pub use tool::{FileUploadRules, OutputFormats, ToolDefinition};

const BUILTIN_TOOLS: &str = include_str!("../data/tools.json");
const BUILTIN_TEMPLATES: &str = include_str!("../data/templates.json");

/// File name of the tool catalog inside a catalog directory.
pub const TOOLS_FILE: &str = "tools.json";
/// File name of the template catalog inside a catalog directory.
pub const TEMPLATES_FILE: &str = "templates.json";

#[derive(Debug, Deserialize)]
struct ToolsDocument {
    tools: Vec<ToolDefinition>,
}

#[derive(Debug, Deserialize)]
struct TemplatesDocument {
    #[serde(default)]
    templates: HashMap<String, TemplateEntry>,
}

#[derive(Debug, Deserialize)]
struct TemplateEntry {
    optimized: Option<String>,
}

/// Immutable tool + template catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
    templates: HashMap<String, String>,
}

impl Catalog {
    /// Catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_TOOLS, BUILTIN_TEMPLATES)
    }

    /// Loads `tools.json` and `templates.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let tools = fs::read_to_string(dir.join(TOOLS_FILE))?;
        let templates = fs::read_to_string(dir.join(TEMPLATES_FILE))?;
        info!(dir = %dir.display(), "Loading catalog from directory");
        Self::from_json(&tools, &templates)
    }

    /// Parses both catalogs. Tool ids must be unique; templates without a matching tool are kept but logged.
    pub fn from_json(tools_json: &str, templates_json: &str) -> Result<Self, CatalogError> {
        let tools_doc: ToolsDocument = serde_json::from_str(tools_json)?;
        let templates_doc: TemplatesDocument = serde_json::from_str(templates_json)?;

        let mut index = HashMap::with_capacity(tools_doc.tools.len());
        for (i, tool) in tools_doc.tools.iter().enumerate() {
            if index.insert(tool.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateTool(tool.id.clone()));
            }
        }

        let templates: HashMap<String, String> = templates_doc
            .templates
            .into_iter()
            .filter_map(|(id, entry)| entry.optimized.map(|t| (id, t)))
            .collect();

        for id in templates.keys() {
            if !index.contains_key(id) {
                warn!(template_id = %id, "Template has no matching tool");
            }
        }

        info!(
            tools = tools_doc.tools.len(),
            templates = templates.len(),
            "Catalog loaded"
        );

        Ok(Self {
            tools: tools_doc.tools,
            index,
            templates,
        })
    }

    /// All tools in catalog order.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn tool(&self, id: &str) -> Option<&ToolDefinition> {
        self.index.get(id).map(|&i| &self.tools[i])
    }

    /// Template for a tool. `None` is a valid state: the pipeline then uses the raw input.
    pub fn template(&self, tool_id: &str) -> Option<&str> {
        self.templates.get(tool_id).map(String::as_str)
    }

    /// Tools tagged with `category` (case-insensitive), in catalog order.
    pub fn tools_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ToolDefinition> + 'a {
        self.tools.iter().filter(move |t| {
            t.categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(category))
        })
    }
}

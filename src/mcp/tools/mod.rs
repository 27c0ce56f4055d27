//! MCP tool implementations.
//!
//! # Module Structure
//!
//! - [`definitions`]: Tool schema definitions (JSON Schema for input validation)
//! - [`handlers`]: Tool execution logic
//!   - `handlers::templates`: Registry lookups (protocols, cells, organs, programs)
//!   - `handlers::routing`: Technique guide and task complexity
//!   - `handlers::cognitive`: Reasoning shells

mod definitions;
mod handlers;

use crate::templates::Catalog;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of MCP tools.
pub struct ToolRegistry {
    /// Template catalog shared with the resource handler.
    catalog: Arc<Catalog>,
    /// Available tools.
    tools: HashMap<String, ToolDefinition>,
}

impl ToolRegistry {
    /// Creates a new tool registry over a catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let tools = [
            definitions::protocol_shell_tool(),
            definitions::cell_protocol_tool(),
            definitions::organ_tool(),
            definitions::prompt_program_tool(),
            definitions::molecular_template_tool(),
            definitions::technique_guide_tool(),
            definitions::task_complexity_tool(),
            definitions::list_templates_tool(),
            definitions::understand_question_tool(),
            definitions::verify_logic_tool(),
            definitions::backtracking_tool(),
            definitions::symbolic_abstract_tool(),
        ]
        .into_iter()
        .map(|tool| (tool.name.clone(), tool))
        .collect();

        Self { catalog, tools }
    }

    /// Returns all tool definitions, sorted by name.
    #[must_use]
    pub fn list_tools(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<_> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Gets a tool definition by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Executes a tool with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the tool is unknown or the
    /// arguments do not match its schema.
    pub fn execute(&self, name: &str, arguments: Value) -> Result<ToolResult> {
        let catalog = self.catalog.as_ref();
        match name {
            "get_protocol_shell" => handlers::execute_protocol_shell(catalog, arguments),
            "get_cell_protocol" => handlers::execute_cell_protocol(catalog, arguments),
            "get_organ" => handlers::execute_organ(catalog, arguments),
            "get_prompt_program" => handlers::execute_prompt_program(catalog, arguments),
            "get_molecular_template" => handlers::execute_molecular_template(arguments),
            "list_templates" => handlers::execute_list_templates(catalog, arguments),
            "get_technique_guide" => handlers::execute_technique_guide(arguments),
            "analyze_task_complexity" => handlers::execute_task_complexity(arguments),
            "understand_question" => handlers::execute_understand_question(arguments),
            "verify_logic" => handlers::execute_verify_logic(arguments),
            "backtracking" => handlers::execute_backtracking(arguments),
            "symbolic_abstract" => handlers::execute_symbolic_abstract(arguments),
            _ => Err(Error::InvalidInput(format!("Unknown tool: {name}"))),
        }
    }
}

/// Definition of an MCP tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for input validation.
    pub input_schema: Value,
}

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the result represents an error.
    #[serde(default)]
    pub is_error: bool,
}

impl ToolResult {
    /// Creates a successful single-text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }
}

/// Content types that can be returned by tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

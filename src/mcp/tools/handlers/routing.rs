//! Routing tool execution handlers.

use crate::mcp::tool_types::{TaskComplexityArgs, TechniqueGuideArgs};
use crate::routing::{classify, technique_guide};
use crate::{Error, Result};
use serde_json::Value;

use super::super::ToolResult;
use super::parse_args;

/// Executes the `get_technique_guide` tool.
pub fn execute_technique_guide(arguments: Value) -> Result<ToolResult> {
    let args: TechniqueGuideArgs = parse_args(arguments)?;
    let category = args.category.as_deref().unwrap_or("all");
    Ok(ToolResult::text(technique_guide(category)))
}

/// Executes the `analyze_task_complexity` tool.
///
/// The assessment is returned as a JSON object in a text block.
pub fn execute_task_complexity(arguments: Value) -> Result<ToolResult> {
    let args: TaskComplexityArgs = parse_args(arguments)?;
    let assessment = classify(&args.task_description);

    let json = serde_json::to_string_pretty(&assessment).map_err(|e| Error::OperationFailed {
        operation: "serialize_assessment".to_string(),
        cause: e.to_string(),
    })?;

    Ok(ToolResult::text(json))
}

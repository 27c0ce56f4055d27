//! Template tool execution handlers.
//!
//! Lookups never fail on an unknown key; only malformed arguments produce
//! an error.

use crate::mcp::tool_types::{
    ListTemplatesArgs, NamedTemplateArgs, NoArgs, PromptProgramArgs, ProtocolShellArgs,
};
use crate::templates::{Catalog, RegistryKind, ShellParams, molecular_template};
use crate::Result;
use serde_json::Value;

use super::super::ToolResult;
use super::parse_args;

/// Program returned when `program_type` is omitted.
const DEFAULT_PROGRAM: &str = "math";

/// Executes the `get_protocol_shell` tool.
pub fn execute_protocol_shell(catalog: &Catalog, arguments: Value) -> Result<ToolResult> {
    let args: ProtocolShellArgs = parse_args(arguments)?;

    let key = args.name.as_deref().unwrap_or_default();
    let params = ShellParams {
        name: None,
        intent: args.intent,
    };

    Ok(ToolResult::text(catalog.resolve(
        RegistryKind::Protocols,
        key,
        &params,
    )))
}

/// Executes the `get_cell_protocol` tool.
pub fn execute_cell_protocol(catalog: &Catalog, arguments: Value) -> Result<ToolResult> {
    execute_named(catalog, RegistryKind::Cells, arguments)
}

/// Executes the `get_organ` tool.
pub fn execute_organ(catalog: &Catalog, arguments: Value) -> Result<ToolResult> {
    execute_named(catalog, RegistryKind::Organs, arguments)
}

fn execute_named(catalog: &Catalog, kind: RegistryKind, arguments: Value) -> Result<ToolResult> {
    let args: NamedTemplateArgs = parse_args(arguments)?;
    Ok(ToolResult::text(catalog.resolve(
        kind,
        &args.name,
        &ShellParams::default(),
    )))
}

/// Executes the `get_prompt_program` tool.
pub fn execute_prompt_program(catalog: &Catalog, arguments: Value) -> Result<ToolResult> {
    let args: PromptProgramArgs = parse_args(arguments)?;
    let key = args.program_type.as_deref().unwrap_or(DEFAULT_PROGRAM);

    Ok(ToolResult::text(catalog.resolve(
        RegistryKind::Programs,
        key,
        &ShellParams::default(),
    )))
}

/// Executes the `get_molecular_template` tool.
pub fn execute_molecular_template(arguments: Value) -> Result<ToolResult> {
    let NoArgs {} = parse_args(arguments)?;
    Ok(ToolResult::text(molecular_template()))
}

/// Executes the `list_templates` tool.
pub fn execute_list_templates(catalog: &Catalog, arguments: Value) -> Result<ToolResult> {
    let args: ListTemplatesArgs = parse_args(arguments)?;

    let kinds: Vec<RegistryKind> = match args.registry.as_deref() {
        Some(name) => vec![name.parse::<RegistryKind>()?],
        None => RegistryKind::all().to_vec(),
    };

    Ok(ToolResult::text(catalog.render_listing(&kinds)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::ToolContent;
    use serde_json::json;

    fn text(result: &ToolResult) -> &str {
        match &result.content[0] {
            ToolContent::Text { text } => text,
        }
    }

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_protocol_shell_default() {
        let result = execute_protocol_shell(&catalog(), json!({})).unwrap();
        assert!(text(&result).contains("/protocol.MyProtocol{"));
        assert!(text(&result).contains(r#"intent="Define your intent here""#));
    }

    #[test]
    fn test_protocol_shell_custom() {
        let result = execute_protocol_shell(
            &catalog(),
            json!({"name": "TestProtocol", "intent": "Test Intent"}),
        )
        .unwrap();
        assert!(text(&result).contains("/protocol.TestProtocol"));
        assert!(text(&result).contains(r#"intent="Test Intent""#));
        assert!(text(&result).contains("input={"));
        assert!(text(&result).contains("output={"));
    }

    #[test]
    fn test_protocol_shell_builtin() {
        let result =
            execute_protocol_shell(&catalog(), json!({"name": "reasoning.systematic"})).unwrap();
        assert!(text(&result).contains(r#"intent="Break down complex problems"#));
    }

    #[test]
    fn test_prompt_program_defaults_to_math() {
        let result = execute_prompt_program(&catalog(), json!({})).unwrap();
        assert!(text(&result).contains("// Prompt Program: Math Solver"));
    }

    #[test]
    fn test_organ_requires_name() {
        assert!(execute_organ(&catalog(), json!({})).is_err());
    }

    #[test]
    fn test_molecular_template_rejects_args() {
        assert!(execute_molecular_template(json!({"x": 1})).is_err());
        let result = execute_molecular_template(json!({})).unwrap();
        assert!(text(&result).contains("def create_molecular_context"));
    }

    #[test]
    fn test_list_templates_single_registry() {
        let result = execute_list_templates(&catalog(), json!({"registry": "organs"})).unwrap();
        let listing = text(&result);
        assert!(listing.contains("## organs (2)"));
        assert!(listing.contains("`debate_council`"));
        assert!(listing.contains("aliases: debate, multi_perspective"));
        assert!(!listing.contains("## programs"));
    }

    #[test]
    fn test_list_templates_unknown_registry() {
        assert!(execute_list_templates(&catalog(), json!({"registry": "atoms"})).is_err());
    }
}

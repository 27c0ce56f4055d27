//! Template command handlers.

use context_engineering_mcp::mcp::McpServer;
use context_engineering_mcp::templates::{Catalog, RegistryKind, ShellParams};
use context_engineering_mcp::{Result, ServerConfig, classify};
use std::sync::Arc;

/// Serve command.
pub fn cmd_serve(config: &ServerConfig) -> Result<()> {
    let catalog = Arc::new(Catalog::builtin()?);
    let mut server = McpServer::new(catalog, &config.server);
    server.start()
}

/// Get command.
pub fn cmd_get(
    registry: &str,
    key: &str,
    name: Option<String>,
    intent: Option<String>,
) -> Result<()> {
    let kind: RegistryKind = registry.parse()?;
    let catalog = Catalog::builtin()?;
    let params = ShellParams { name, intent };

    println!("{}", catalog.resolve(kind, key, &params));
    Ok(())
}

/// List command.
pub fn cmd_list(registry: Option<&str>) -> Result<()> {
    let kinds = match registry {
        Some(name) => vec![name.parse::<RegistryKind>()?],
        None => RegistryKind::all().to_vec(),
    };
    let catalog = Catalog::builtin()?;

    print!("{}", catalog.render_listing(&kinds));
    Ok(())
}

/// Classify command.
pub fn cmd_classify(task: &str) -> Result<()> {
    let assessment = classify(task);

    println!("Complexity:       {}", assessment.complexity);
    println!("Recommended tool: {}", assessment.recommended_tool);
    println!("Reasoning:        {}", assessment.reasoning);
    Ok(())
}

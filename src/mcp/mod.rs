//! MCP server implementation.
//!
//! Exposes the template catalog to MCP clients over stdio.
//!
//! ## Features
//!
//! - **Tools**: `get_protocol_shell`, `get_cell_protocol`, `get_organ`,
//!   `get_prompt_program`, `analyze_task_complexity`, cognitive tools and more
//! - **Resources**: reference documents via `context://{path}`
//!
//! ## Client Configuration
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "context-engineering": {
//!       "command": "context-engineering-mcp",
//!       "args": ["serve"]
//!     }
//!   }
//! }
//! ```

mod dispatch;
mod resource_content;
mod resources;
mod server;
mod tool_types;
mod tools;

pub use dispatch::McpMethod;
pub use resources::{ResourceContent, ResourceDefinition, ResourceHandler, SCHEME};
pub use server::{McpServer, PROTOCOL_VERSION, RateLimiter, SERVER_NAME, error_codes};
pub use tools::{ToolContent, ToolDefinition, ToolRegistry, ToolResult};

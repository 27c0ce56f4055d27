//! Tool execution handlers.
//!
//! This module contains the execution logic for all MCP tools,
//! organized into submodules by domain.

mod cognitive;
mod routing;
mod templates;

pub use cognitive::{
    execute_backtracking, execute_symbolic_abstract, execute_understand_question,
    execute_verify_logic,
};
pub use routing::{execute_task_complexity, execute_technique_guide};
pub use templates::{
    execute_cell_protocol, execute_list_templates, execute_molecular_template, execute_organ,
    execute_prompt_program, execute_protocol_shell,
};

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes tool arguments. `null` is treated as an empty object.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidInput(e.to_string()))
}

//! Tool definitions for MCP tools.
//!
//! Contains the JSON Schema definitions for all tools.

use super::ToolDefinition;

/// Defines the protocol shell tool.
pub fn protocol_shell_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_protocol_shell".to_string(),
        description: "Returns a protocol shell: a built-in template (e.g. 'reasoning.systematic') or a blank shell with your name and intent".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Built-in protocol (reasoning.systematic, thinking.extended, workflow.test_driven, code.analyze, project.explore) or a custom name. Default: MyProtocol"
                },
                "intent": {
                    "type": "string",
                    "description": "Intent for a custom shell. Ignored for built-in protocols"
                }
            }
        }),
    }
}

/// Defines the cell protocol tool.
pub fn cell_protocol_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_cell_protocol".to_string(),
        description: "Returns a cell protocol describing a memory or state pattern".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Cell protocol, e.g. cell.protocol.key_value, windowed_memory, episodic_summary"
                }
            },
            "required": ["name"]
        }),
    }
}

/// Defines the organ tool.
pub fn organ_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_organ".to_string(),
        description: "Returns a multi-agent organ workflow".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Organ, e.g. debate_council or research_synthesis. Case, separators and an 'organ.' prefix are ignored"
                }
            },
            "required": ["name"]
        }),
    }
}

/// Defines the prompt program tool.
pub fn prompt_program_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_prompt_program".to_string(),
        description: "Returns a pseudo-code prompt program that chains model calls".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "program_type": {
                    "type": "string",
                    "description": "Program type: math (default) or debug"
                }
            }
        }),
    }
}

/// Defines the molecular template tool.
pub fn molecular_template_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_molecular_template".to_string(),
        description: "Returns a Python helper that builds few-shot molecular contexts".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Defines the technique guide tool.
pub fn technique_guide_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_technique_guide".to_string(),
        description: "Returns a guide to available techniques. Use this to discover the best tool for a task".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "Filter by category. Default: all",
                    "enum": ["reasoning", "workflow", "code", "project", "basic", "all"]
                }
            }
        }),
    }
}

/// Defines the task complexity tool.
pub fn task_complexity_tool() -> ToolDefinition {
    ToolDefinition {
        name: "analyze_task_complexity".to_string(),
        description: "Estimates task complexity and recommends a template".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "task_description": {
                    "type": "string",
                    "description": "The prompt or task to route"
                }
            },
            "required": ["task_description"]
        }),
    }
}

/// Defines the template listing tool.
pub fn list_templates_tool() -> ToolDefinition {
    ToolDefinition {
        name: "list_templates".to_string(),
        description: "Lists the keys and descriptions of built-in templates".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "registry": {
                    "type": "string",
                    "description": "Registry to list. Default: all",
                    "enum": ["protocols", "cells", "organs", "programs"]
                }
            }
        }),
    }
}

/// Defines the question understanding tool.
pub fn understand_question_tool() -> ToolDefinition {
    ToolDefinition {
        name: "understand_question".to_string(),
        description: "Returns a shell that restates intent, surfaces constraints and prepares clarifying questions before acting".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The raw user ask to unpack"
                },
                "context": {
                    "type": "string",
                    "description": "Optional background knowledge or situational frame"
                },
                "constraints": {
                    "type": "string",
                    "description": "Optional explicit limits or success criteria"
                }
            },
            "required": ["question"]
        }),
    }
}

/// Defines the logic verification tool.
pub fn verify_logic_tool() -> ToolDefinition {
    ToolDefinition {
        name: "verify_logic".to_string(),
        description: "Returns a shell that audits a reasoning trace for validity and proposes repairs".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "claim": {
                    "type": "string",
                    "description": "The headline answer or assertion to validate"
                },
                "reasoning_trace": {
                    "type": "string",
                    "description": "The supporting steps"
                },
                "constraints": {
                    "type": "string",
                    "description": "Optional guardrails"
                }
            },
            "required": ["claim", "reasoning_trace"]
        }),
    }
}

/// Defines the backtracking tool.
pub fn backtracking_tool() -> ToolDefinition {
    ToolDefinition {
        name: "backtracking".to_string(),
        description: "Returns a shell that rolls back to the last sound step after a failure and plans a new path".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "objective": {
                    "type": "string",
                    "description": "What the reasoning is trying to reach"
                },
                "failed_step": {
                    "type": "string",
                    "description": "The step that went wrong"
                },
                "trace": {
                    "type": "string",
                    "description": "Optional steps taken so far"
                },
                "constraints": {
                    "type": "string",
                    "description": "Optional guardrails"
                }
            },
            "required": ["objective", "failed_step"]
        }),
    }
}

/// Defines the symbolic abstraction tool.
pub fn symbolic_abstract_tool() -> ToolDefinition {
    ToolDefinition {
        name: "symbolic_abstract".to_string(),
        description: "Returns a shell that replaces concrete tokens with symbols, reasons over them and maps the result back".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "Concrete expression or problem statement"
                },
                "mapping_hint": {
                    "type": "string",
                    "description": "Optional suggested symbol mapping"
                },
                "goal": {
                    "type": "string",
                    "description": "Optional target to derive"
                }
            },
            "required": ["expression"]
        }),
    }
}

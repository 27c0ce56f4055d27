//! Argument types for MCP tools.
//!
//! All argument types use `#[serde(deny_unknown_fields)]` so a misspelled
//! parameter is reported instead of silently ignored.

use serde::Deserialize;

/// Arguments for `get_protocol_shell`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolShellArgs {
    /// Built-in protocol key, or the name of a new blank shell.
    pub name: Option<String>,
    /// Intent for a blank shell.
    pub intent: Option<String>,
}

/// Arguments for tools that look up one entry by name.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedTemplateArgs {
    /// Template key in any accepted surface form.
    pub name: String,
}

/// Arguments for `get_prompt_program`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptProgramArgs {
    /// Program key; defaults to `math`.
    pub program_type: Option<String>,
}

/// Arguments for tools without parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoArgs {}

/// Arguments for `get_technique_guide`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechniqueGuideArgs {
    /// Category filter; defaults to `all`.
    pub category: Option<String>,
}

/// Arguments for `analyze_task_complexity`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskComplexityArgs {
    /// Free-text task description.
    pub task_description: String,
}

/// Arguments for `list_templates`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListTemplatesArgs {
    /// Registry to list; all registries when absent.
    pub registry: Option<String>,
}

/// Arguments for `understand_question`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnderstandQuestionArgs {
    /// The raw ask.
    pub question: String,
    /// Background knowledge.
    pub context: Option<String>,
    /// Limits or success criteria.
    pub constraints: Option<String>,
}

/// Arguments for `verify_logic`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyLogicArgs {
    /// Assertion to validate.
    pub claim: String,
    /// Supporting steps.
    pub reasoning_trace: String,
    /// Guardrails.
    pub constraints: Option<String>,
}

/// Arguments for `backtracking`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BacktrackingArgs {
    /// What the reasoning is trying to reach.
    pub objective: String,
    /// The step that went wrong.
    pub failed_step: String,
    /// Steps taken so far.
    pub trace: Option<String>,
    /// Guardrails.
    pub constraints: Option<String>,
}

/// Arguments for `symbolic_abstract`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolicAbstractArgs {
    /// Concrete expression or problem statement.
    pub expression: String,
    /// Suggested symbol mapping.
    pub mapping_hint: Option<String>,
    /// What to derive.
    pub goal: Option<String>,
}

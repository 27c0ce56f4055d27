//! Cognitive tool execution handlers.

use crate::cognitive;
use crate::mcp::tool_types::{
    BacktrackingArgs, SymbolicAbstractArgs, UnderstandQuestionArgs, VerifyLogicArgs,
};
use crate::Result;
use serde_json::Value;

use super::super::ToolResult;
use super::parse_args;

/// Executes the `understand_question` tool.
pub fn execute_understand_question(arguments: Value) -> Result<ToolResult> {
    let args: UnderstandQuestionArgs = parse_args(arguments)?;
    Ok(ToolResult::text(cognitive::understand_question(
        &args.question,
        args.context.as_deref(),
        args.constraints.as_deref(),
    )))
}

/// Executes the `verify_logic` tool.
pub fn execute_verify_logic(arguments: Value) -> Result<ToolResult> {
    let args: VerifyLogicArgs = parse_args(arguments)?;
    Ok(ToolResult::text(cognitive::verify_logic(
        &args.claim,
        &args.reasoning_trace,
        args.constraints.as_deref(),
    )))
}

/// Executes the `backtracking` tool.
pub fn execute_backtracking(arguments: Value) -> Result<ToolResult> {
    let args: BacktrackingArgs = parse_args(arguments)?;
    Ok(ToolResult::text(cognitive::backtracking(
        &args.objective,
        &args.failed_step,
        args.trace.as_deref(),
        args.constraints.as_deref(),
    )))
}

/// Executes the `symbolic_abstract` tool.
pub fn execute_symbolic_abstract(arguments: Value) -> Result<ToolResult> {
    let args: SymbolicAbstractArgs = parse_args(arguments)?;
    Ok(ToolResult::text(cognitive::symbolic_abstract(
        &args.expression,
        args.mapping_hint.as_deref(),
        args.goal.as_deref(),
    )))
}

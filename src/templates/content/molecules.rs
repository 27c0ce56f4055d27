//! Molecular context helper.
//!
//! A molecule is instruction + examples + context + new input. The helper is
//! handed out as source text for callers to paste into their own tooling.

/// Python helper that assembles a few-shot molecular context.
pub const MOLECULAR_CONTEXT_FUNC: &str = r#"
def create_molecular_context(instruction, examples, new_input,
                             format_type="input-output", context=None):
    """
    Construct a molecular context from examples.

    Args:
        instruction (str): The task instruction
        examples (List[Dict]): List of example input/output pairs
        new_input (str): The new input to process
        format_type (str): Template type (input-output, chain-of-thought)
        context (str, optional): Additional background context

    Returns:
        str: The complete molecular context
    """
    parts = [instruction, ""]

    if context:
        parts.extend([f"Context: {context}", ""])

    for example in examples:
        if format_type == "input-output":
            parts.append(f"Input: {example['input']}")
            parts.append(f"Output: {example['output']}")
        elif format_type == "chain-of-thought":
            parts.append(f"Input: {example['input']}")
            parts.append(f"Thinking: {example['thinking']}")
            parts.append(f"Output: {example['output']}")
        parts.append("")

    parts.append(f"Input: {new_input}")
    parts.append("Output:")

    return "\n".join(parts)
"#;

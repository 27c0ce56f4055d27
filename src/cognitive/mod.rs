//! Cognitive tools.
//!
//! Each tool renders a reasoning shell with the caller's text substituted in.
//! The shells ask the model to clarify, audit, recover or abstract before it
//! acts; nothing here evaluates the text itself.

/// Placeholder for optional fields the caller left out.
pub const NONE_SENTINEL: &str = "<none>";

fn or_none(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NONE_SENTINEL)
}

/// Renders a shell that unpacks a question before solving it.
#[must_use]
pub fn understand_question(
    question: &str,
    context: Option<&str>,
    constraints: Option<&str>,
) -> String {
    let context = or_none(context);
    let constraints = or_none(constraints);
    format!(
        r#"
/reasoning.understand_question{{
    intent="Clarify the ask before solving by isolating intent, constraints, and required outputs",
    input={{
        question="{question}",
        context="{context}",
        constraints="{constraints}"
    }},
    process=[
        /intent_map{{action="Restate the core ask and target outcome"}},
        /constraints{{action="List explicit and implicit constraints"}},
        /decomposition{{action="Break request into solvable sub-goals"}},
        /risk_check{{action="Flag ambiguity or missing data"}}
    ],
    output={{
        intent="Single sentence goal statement",
        constraints="Bullet list of must-haves and guardrails",
        clarifications="Questions to close gaps before execution",
        proposed_plan="Initial steps or protocol to proceed"
    }}
}}
"#
    )
}

/// Renders a shell that audits a reasoning trace against a claim.
#[must_use]
pub fn verify_logic(claim: &str, reasoning_trace: &str, constraints: Option<&str>) -> String {
    let constraints = or_none(constraints);
    format!(
        r#"
/reasoning.verify_logic{{
    intent="Audit a reasoning trace for validity, completeness, and constraint alignment",
    input={{
        claim="{claim}",
        reasoning_trace="{reasoning_trace}",
        constraints="{constraints}"
    }},
    process=[
        /premise_check{{action="List premises and mark which are stated vs. assumed"}},
        /consistency{{action="Check each step for logical validity and missing links"}},
        /evidence_map{{action="Match claims to evidence or note gaps"}},
        /contra{{action="Search for contradictions or constraint violations"}},
        /repair_plan{{action="Suggest minimal edits or extra steps to fix defects"}}
    ],
    output={{
        verdict="pass|fail with one sentence rationale",
        defect_log="Numbered list of issues with locations in the trace",
        patched_plan="Revised steps or guardrails to repair the reasoning",
        confidence="0-1 score grounded in evidence coverage and consistency"
    }}
}}
"#
    )
}

/// Renders a shell that rolls back to the last sound step and tries again.
#[must_use]
pub fn backtracking(
    objective: &str,
    failed_step: &str,
    trace: Option<&str>,
    constraints: Option<&str>,
) -> String {
    let trace = or_none(trace);
    let constraints = or_none(constraints);
    format!(
        r#"
/reasoning.backtracking{{
    intent="Recover from a failed reasoning step by returning to the last sound state and choosing a new path",
    input={{
        objective="{objective}",
        failed_step="{failed_step}",
        trace="{trace}",
        constraints="{constraints}"
    }},
    process=[
        /diagnose{{action="State why the failed step does not hold"}},
        /locate{{action="Find the last step whose result is still trusted"}},
        /alternatives{{action="List at least two different next moves from that step"}},
        /select{{action="Pick the move most likely to satisfy the objective within constraints"}},
        /guard{{action="Add a check that would have caught the original failure"}}
    ],
    output={{
        failure_cause="One sentence diagnosis",
        rollback_point="Step to resume from",
        recovery_plan="Ordered steps for the new path",
        new_checks="Checks added to prevent a repeat"
    }}
}}
"#
    )
}

/// Renders a shell that lifts a concrete expression into symbols.
#[must_use]
pub fn symbolic_abstract(expression: &str, mapping_hint: Option<&str>, goal: Option<&str>) -> String {
    let mapping_hint = or_none(mapping_hint);
    let goal = or_none(goal);
    format!(
        r#"
/symbolic.abstract{{
    intent="Replace concrete tokens with abstract symbols so the structure can be reasoned about directly",
    input={{
        expression="{expression}",
        mapping_hint="{mapping_hint}",
        goal="{goal}"
    }},
    process=[
        /identify{{action="Mark the concrete entities, quantities and relations"}},
        /abstract{{action="Assign a symbol to each entity and record the mapping"}},
        /restate{{action="Rewrite the expression using only symbols"}},
        /reason{{action="Solve or transform the symbolic form toward the goal"}},
        /ground{{action="Map the symbolic result back to concrete terms"}}
    ],
    output={{
        symbol_table="Symbol to concrete meaning",
        abstract_form="Expression in symbols",
        symbolic_result="Result of reasoning over the symbols",
        grounded_result="Result restated in the original terms"
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_understand_question_defaults() {
        let text = understand_question("How do I ship this?", None, None);
        assert!(text.contains("/reasoning.understand_question{"));
        assert!(text.contains(r#"question="How do I ship this?""#));
        assert!(text.contains(r#"context="<none>""#));
        assert!(text.contains(r#"constraints="<none>""#));
    }

    #[test]
    fn test_understand_question_with_context() {
        let text = understand_question("q", Some("prod outage"), Some("no downtime"));
        assert!(text.contains(r#"context="prod outage""#));
        assert!(text.contains(r#"constraints="no downtime""#));
    }

    #[test]
    fn test_verify_logic() {
        let text = verify_logic("x = 2", "x + 1 = 3", None);
        assert!(text.contains("/reasoning.verify_logic{"));
        assert!(text.contains(r#"claim="x = 2""#));
        assert!(text.contains(r#"reasoning_trace="x + 1 = 3""#));
        assert!(text.contains("defect_log"));
    }

    #[test]
    fn test_backtracking() {
        let text = backtracking("sort list", "step 3 divides by zero", None, Some("O(n log n)"));
        assert!(text.contains("/reasoning.backtracking{"));
        assert!(text.contains("recovery_plan"));
        assert!(text.contains(r#"trace="<none>""#));
        assert!(text.contains(r#"constraints="O(n log n)""#));
    }

    #[test]
    fn test_symbolic_abstract() {
        let text = symbolic_abstract("3 apples plus 4 apples", Some("apples -> a"), None);
        assert!(text.contains("/symbolic.abstract{"));
        assert!(text.contains("symbol_table"));
        assert!(text.contains(r#"mapping_hint="apples -> a""#));
        assert!(text.contains(r#"goal="<none>""#));
    }

    #[test]
    fn test_braces_in_input_are_verbatim() {
        let text = verify_logic("{claim}", "}{", None);
        assert!(text.contains(r#"claim="{claim}""#));
        assert!(text.contains(r#"reasoning_trace="}{""#));
    }
}

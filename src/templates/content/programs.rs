//! Prompt programs: pseudo-code that chains model calls into a routine.

use crate::templates::TemplateEntry;

/// All built-in prompt programs.
pub const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::new(
        "math",
        "Understand, plan, execute and verify a math problem",
        MATH_SOLVER,
    )
    .with_aliases(&["math_solver"]),
    TemplateEntry::new(
        "debug",
        "Reproduce, isolate, fix and confirm a defect",
        DEBUGGER,
    )
    .with_aliases(&["debugging", "debugger"]),
];

/// Program returned as an example when a requested program is unknown.
pub const EXAMPLE_KEY: &str = "math";

const MATH_SOLVER: &str = r"
// Prompt Program: Math Solver

function understand_math_problem(problem) {
  return `
    Task: Analyze this math problem thoroughly before solving.
    Problem: ${problem}
    Please provide:
    1. What type of math problem is this?
    2. What are the key variables or unknowns?
    3. What are the given values or constraints?
    4. What formulas or methods will be relevant?
  `;
}

function plan_solution_steps(problem_analysis) {
  return `
    Task: Create a step-by-step plan to solve this math problem.
    Problem Analysis: ${problem_analysis}
    Please outline a specific sequence of steps to solve this problem.
  `;
}

function execute_solution(problem, solution_plan) {
  return `
    Task: Solve this math problem following the provided plan.
    Problem: ${problem}
    Solution Plan: ${solution_plan}
    Please show all work for each step.
  `;
}

function verify_solution(problem, solution) {
  return `
    Task: Verify the correctness of this math solution.
    Original Problem: ${problem}
    Proposed Solution: ${solution}
    Please check calculations and logic.
  `;
}

// Main problem-solving function
function solve_math_with_cognitive_tools(problem) {
  problem_analysis = LLM(understand_math_problem(problem));
  solution_plan = LLM(plan_solution_steps(problem_analysis));
  detailed_solution = LLM(execute_solution(problem, solution_plan));
  verification = LLM(verify_solution(problem, detailed_solution));

  return {
    original_problem: problem,
    analysis: problem_analysis,
    plan: solution_plan,
    solution: detailed_solution,
    verification: verification
  };
}
";

const DEBUGGER: &str = r"
// Prompt Program: Debugger

function reproduce_defect(report) {
  return `
    Task: Turn this bug report into a minimal reproduction.
    Report: ${report}
    Please provide:
    1. Exact steps or input that trigger the defect
    2. Expected behavior
    3. Observed behavior
  `;
}

function isolate_cause(reproduction, code_context) {
  return `
    Task: Find the smallest code region that explains the defect.
    Reproduction: ${reproduction}
    Code Context: ${code_context}
    List candidate causes, then rule them out one by one with evidence.
  `;
}

function propose_fix(cause, code_context) {
  return `
    Task: Propose the minimal change that removes the cause.
    Cause: ${cause}
    Code Context: ${code_context}
    Include a regression test that fails before the change.
  `;
}

function confirm_fix(reproduction, fix) {
  return `
    Task: Confirm the fix against the reproduction.
    Reproduction: ${reproduction}
    Fix: ${fix}
    State whether the defect is gone and what else the change could affect.
  `;
}

// Main debugging function
function debug_with_cognitive_tools(report, code_context) {
  reproduction = LLM(reproduce_defect(report));
  cause = LLM(isolate_cause(reproduction, code_context));
  fix = LLM(propose_fix(cause, code_context));
  confirmation = LLM(confirm_fix(reproduction, fix));

  return {
    report: report,
    reproduction: reproduction,
    cause: cause,
    fix: fix,
    confirmation: confirmation
  };
}
";

//! Task routing.
//!
//! Recommends a template for a free-text task description and describes the
//! available techniques. The router is a keyword lookup, not a model: the
//! first rule whose vocabulary appears in the lower-cased task wins.

mod guide;

pub use guide::{GuideCategory, TECHNIQUES, Technique, technique_guide};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated complexity of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    /// A basic prompt or few-shot molecule is enough.
    Low,
    /// Needs a structured protocol.
    Medium,
    /// Needs a structured protocol with verification.
    High,
}

impl Complexity {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Router output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssessment {
    /// Estimated complexity.
    pub complexity: Complexity,
    /// Template key (or technique name) to use.
    pub recommended_tool: String,
    /// One-sentence explanation.
    pub reasoning: String,
}

/// One row of the routing table.
#[derive(Debug, Clone, Copy)]
struct RoutingRule {
    terms: &'static [&'static str],
    complexity: Complexity,
    tool: &'static str,
    reasoning: &'static str,
}

impl RoutingRule {
    fn matches(&self, task_lower: &str) -> bool {
        self.terms.iter().any(|term| task_lower.contains(term))
    }

    fn assessment(&self) -> TaskAssessment {
        TaskAssessment {
            complexity: self.complexity,
            recommended_tool: self.tool.to_string(),
            reasoning: self.reasoning.to_string(),
        }
    }
}

/// Rules in priority order. Project terms are checked before test terms, so
/// "refactor the codebase and add tests" routes to `project.explore`.
const RULES: &[RoutingRule] = &[
    RoutingRule {
        terms: &["project", "repo", "codebase", "architecture"],
        complexity: Complexity::Medium,
        tool: "project.explore",
        reasoning: "Task involves project-level understanding.",
    },
    RoutingRule {
        terms: &["test", "tdd", "verify"],
        complexity: Complexity::High,
        tool: "workflow.test_driven",
        reasoning: "Task involves testing or verification workflows.",
    },
    RoutingRule {
        terms: &["analyze", "reason", "think", "solve", "complex"],
        complexity: Complexity::High,
        tool: "reasoning.systematic",
        reasoning: "Task requires structured reasoning.",
    },
];

const FALLBACK: RoutingRule = RoutingRule {
    terms: &[],
    complexity: Complexity::Low,
    tool: "Standard Molecule",
    reasoning: "Task appears simple. Use a basic prompt or few-shot molecule.",
};

/// Classifies a task description.
///
/// Matching is case-insensitive substring containment, so `"tests"` matches
/// the `test` term and `"repository"` matches `repo`.
///
/// # Examples
///
/// ```rust
/// use context_engineering_mcp::routing::{Complexity, classify};
///
/// let assessment = classify("What is 2+2?");
/// assert_eq!(assessment.complexity, Complexity::Low);
/// assert_eq!(assessment.recommended_tool, "Standard Molecule");
/// ```
#[must_use]
pub fn classify(task_description: &str) -> TaskAssessment {
    let task_lower = task_description.to_lowercase();

    let rule = RULES
        .iter()
        .find(|rule| rule.matches(&task_lower))
        .unwrap_or(&FALLBACK);

    tracing::debug!(
        complexity = rule.complexity.as_str(),
        recommended_tool = rule.tool,
        "Classified task"
    );

    rule.assessment()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_project_terms_take_priority_over_test_terms() {
        let assessment = classify("refactor the entire codebase and add tests");
        assert_eq!(assessment.complexity, Complexity::Medium);
        assert_eq!(assessment.recommended_tool, "project.explore");
        assert_eq!(
            assessment.reasoning,
            "Task involves project-level understanding."
        );
    }

    #[test]
    fn test_simple_task_is_low() {
        let assessment = classify("What is 2+2?");
        assert_eq!(assessment.complexity, Complexity::Low);
        assert_eq!(assessment.recommended_tool, "Standard Molecule");
    }

    #[test_case("Map the ARCHITECTURE of this service", Complexity::Medium, "project.explore")]
    #[test_case("clone the repository", Complexity::Medium, "project.explore")]
    #[test_case("Write unit tests for the parser", Complexity::High, "workflow.test_driven")]
    #[test_case("use TDD to add a feature", Complexity::High, "workflow.test_driven")]
    #[test_case("verify and analyze the result", Complexity::High, "workflow.test_driven")]
    #[test_case("Analyze this proof", Complexity::High, "reasoning.systematic")]
    #[test_case("help me think it through", Complexity::High, "reasoning.systematic")]
    #[test_case("", Complexity::Low, "Standard Molecule")]
    fn test_classify_table(task: &str, complexity: Complexity, tool: &str) {
        let assessment = classify(task);
        assert_eq!(assessment.complexity, complexity);
        assert_eq!(assessment.recommended_tool, tool);
    }

    #[test]
    fn test_assessment_serializes_with_display_names() {
        let json = serde_json::to_value(classify("solve x")).unwrap();
        assert_eq!(json["complexity"], "High");
        assert_eq!(json["recommended_tool"], "reasoning.systematic");
        assert_eq!(json["reasoning"], "Task requires structured reasoning.");
    }
}

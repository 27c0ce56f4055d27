//! Technique guide.

use std::fmt::Write as _;

/// Technique category shown in the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideCategory {
    /// Structured reasoning protocols.
    Reasoning,
    /// Development workflows.
    Workflow,
    /// Code analysis.
    Code,
    /// Whole-project exploration.
    Project,
    /// Plain prompts and molecules.
    Basic,
}

impl GuideCategory {
    /// Parses a category filter. Returns `None` for `all` and for anything
    /// unrecognized, both of which mean "no filter".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reasoning" => Some(Self::Reasoning),
            "workflow" => Some(Self::Workflow),
            "code" => Some(Self::Code),
            "project" => Some(Self::Project),
            "basic" => Some(Self::Basic),
            _ => None,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reasoning => "Reasoning",
            Self::Workflow => "Workflow",
            Self::Code => "Code",
            Self::Project => "Project",
            Self::Basic => "Basic",
        }
    }
}

/// One row of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technique {
    /// Category.
    pub category: GuideCategory,
    /// Tool or template name.
    pub tool: &'static str,
    /// Complexity label.
    pub complexity: &'static str,
    /// When to use it.
    pub best_for: &'static str,
}

/// All techniques, in display order.
pub const TECHNIQUES: &[Technique] = &[
    Technique {
        category: GuideCategory::Reasoning,
        tool: "reasoning.systematic",
        complexity: "High",
        best_for: "Complex problems requiring step-by-step logic.",
    },
    Technique {
        category: GuideCategory::Reasoning,
        tool: "thinking.extended",
        complexity: "Very High",
        best_for: "Deep exploration, trade-off analysis, simulation.",
    },
    Technique {
        category: GuideCategory::Workflow,
        tool: "workflow.test_driven",
        complexity: "High",
        best_for: "Implementing features with TDD.",
    },
    Technique {
        category: GuideCategory::Code,
        tool: "code.analyze",
        complexity: "Medium",
        best_for: "Understanding code structure and quality.",
    },
    Technique {
        category: GuideCategory::Project,
        tool: "project.explore",
        complexity: "Medium",
        best_for: "Mapping a new codebase.",
    },
    Technique {
        category: GuideCategory::Basic,
        tool: "Standard Molecule",
        complexity: "Low",
        best_for: "Simple pattern matching (use `get_molecular_template`).",
    },
];

/// Renders the technique guide as Markdown.
///
/// `category` filters rows; `"all"` or an unknown category yields every row.
#[must_use]
pub fn technique_guide(category: &str) -> String {
    let filter = GuideCategory::parse(category);

    let mut out = String::from("# Context Engineering Technique Guide\n\n");
    out.push_str("| Category | Tool | Complexity | Best For |\n");
    out.push_str("|----------|------|------------|----------|\n");

    for technique in TECHNIQUES
        .iter()
        .filter(|t| filter.is_none_or(|c| t.category == c))
    {
        let _ = writeln!(
            out,
            "| **{}** | `{}` | {} | {} |",
            technique.category.as_str(),
            technique.tool,
            technique.complexity,
            technique.best_for
        );
    }

    out.push_str("\n**Usage:**\n");
    out.push_str("Call `get_protocol_shell(name=\"<Tool Name>\")` to retrieve the specific template.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_guide() {
        let guide = technique_guide("all");
        assert!(guide.contains("Context Engineering Technique Guide"));
        assert!(guide.contains("| Category | Tool |"));
        for technique in TECHNIQUES {
            assert!(guide.contains(technique.tool));
        }
    }

    #[test]
    fn test_filter_by_category() {
        let guide = technique_guide("Reasoning");
        assert!(guide.contains("reasoning.systematic"));
        assert!(guide.contains("thinking.extended"));
        assert!(!guide.contains("project.explore"));
        assert!(!guide.contains("Standard Molecule"));
    }

    #[test]
    fn test_unknown_category_is_unfiltered() {
        assert_eq!(technique_guide("gardening"), technique_guide("all"));
    }
}

//! Organs: multi-agent workflows composed from cells and programs.

use crate::templates::TemplateEntry;

/// All built-in organs.
pub const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::new(
        "debate_council",
        "Balanced analysis through multi-perspective debate",
        DEBATE_COUNCIL,
    )
    .with_aliases(&["debate", "multi_perspective"]),
    TemplateEntry::new(
        "research_synthesis",
        "Parallel source review merged into one evidence-weighted answer",
        RESEARCH_SYNTHESIS,
    )
    .with_aliases(&["research", "literature_review"]),
];

/// Organ returned as an example when a requested organ is unknown.
pub const EXAMPLE_KEY: &str = "debate_council";

const DEBATE_COUNCIL: &str = r#"
/organ.debate_council{
    intent="Generate balanced analysis through multi-perspective debate",

    input={
        question="<question_or_topic>",
        perspectives=["Optimistic", "Skeptical", "Pragmatic", "Ethical"],
        rounds=2
    },

    architecture={
        pattern="moderator → perspectives → debate_rounds → synthesis",
        components=[
            "Moderator Cell: Frames the question and sets debate parameters",
            "Perspective Cells: Each represents a distinct viewpoint",
            "Debate Rounds: Iterative refinement through dialogue",
            "Synthesis Cell: Integrates all perspectives into coherent conclusion"
        ]
    },

    process=[
        /phase.moderator{
            role="Frame the debate",
            actions=[
                "Clarify the core question and any ambiguities",
                "Identify key dimensions of debate",
                "Establish evaluation criteria",
                "Set scope and constraints"
            ],
            output="framing_context"
        },

        /phase.generate_perspectives{
            role="Generate initial positions",
            for_each="perspective in perspectives",
            actions=[
                "State core position on the question",
                "Provide 2-3 key supporting arguments",
                "Identify underlying assumptions",
                "Acknowledge limitations or counterarguments"
            ],
            output="initial_perspectives[]"
        },

        /phase.debate_rounds{
            role="Conduct multi-round debate",
            iterations="rounds",
            for_each_round=[
                "Each perspective responds to strongest counterarguments",
                "Refine or strengthen position based on discussion",
                "Find areas of agreement or common ground",
                "Raise new considerations not yet addressed"
            ],
            output="debate_history[]"
        },

        /phase.synthesis{
            role="Synthesize all perspectives",
            actions=[
                "Summarize each major perspective and key arguments",
                "Identify areas of consensus or common ground",
                "Acknowledge irreconcilable differences and why",
                "Provide nuanced conclusion acknowledging complexity",
                "Generate recommendations or implications"
            ],
            output="final_synthesis"
        }
    ],

    output={
        framing="Debate framing and context",
        perspectives="All perspective positions",
        debate_rounds="Full debate history",
        synthesis="Integrated multi-perspective conclusion",
        num_perspectives="Count of perspectives considered",
        num_rounds="Number of debate rounds conducted"
    },

    meta={
        organ_type="multi_agent_deliberation",
        layer="organs",
        complexity="medium",
        use_cases=[
            "Complex decision analysis",
            "Policy evaluation",
            "Ethical dilemmas",
            "Strategic planning",
            "Research direction setting"
        ]
    }
}
"#;

const RESEARCH_SYNTHESIS: &str = r#"
/organ.research_synthesis{
    intent="Answer a research question by reviewing sources in parallel and merging the evidence",

    input={
        question="<research_question>",
        sources="<documents_or_search_results>",
        reviewers=3
    },

    architecture={
        pattern="planner → reviewers → cross_check → synthesis",
        components=[
            "Planner Cell: Splits the question into sub-questions",
            "Reviewer Cells: Each reads a slice of sources and extracts claims with citations",
            "Cross-Check Cell: Compares claims and flags conflicts",
            "Synthesis Cell: Writes the answer weighted by evidence strength"
        ]
    },

    process=[
        /phase.plan{
            role="Decompose the question",
            actions=[
                "List sub-questions that together answer the question",
                "Assign sources to reviewers without overlap"
            ],
            output="review_plan"
        },

        /phase.review{
            role="Extract evidence",
            for_each="reviewer in reviewers",
            actions=[
                "Summarize each assigned source in two sentences",
                "Extract claims relevant to the sub-questions",
                "Attach a citation and confidence to every claim"
            ],
            output="claims[]"
        },

        /phase.cross_check{
            role="Reconcile claims",
            actions=[
                "Group claims by sub-question",
                "Mark agreements, contradictions and single-source claims",
                "Request a second reading for contradicted claims"
            ],
            output="reconciled_claims"
        },

        /phase.synthesis{
            role="Write the answer",
            actions=[
                "Answer each sub-question from reconciled claims",
                "State remaining uncertainty explicitly",
                "List sources actually used"
            ],
            output="final_answer"
        }
    ],

    output={
        answer="Evidence-weighted answer",
        conflicts="Unresolved contradictions",
        citations="Sources backing each claim"
    },

    meta={
        organ_type="multi_agent_research",
        layer="organs",
        complexity="high"
    }
}
"#;

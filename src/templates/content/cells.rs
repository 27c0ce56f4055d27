//! Cell protocols: stateful prompt units that carry memory between turns.

use crate::templates::TemplateEntry;

/// All built-in cell protocols.
pub const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::new(
        "cell.protocol.key_value",
        "Explicit key/value state carried across turns",
        KEY_VALUE,
    )
    .with_aliases(&["kv", "key_value_memory"]),
    TemplateEntry::new(
        "cell.protocol.windowed_memory",
        "Rolling window of the most recent exchanges",
        WINDOWED_MEMORY,
    )
    .with_aliases(&["windowed", "sliding_window"]),
    TemplateEntry::new(
        "cell.protocol.episodic_summary",
        "Periodic compression of history into episode summaries",
        EPISODIC_SUMMARY,
    )
    .with_aliases(&["episodic", "summary_memory"]),
];

const KEY_VALUE: &str = r#"
/cell.protocol.key_value{
    intent="Maintain an explicit key/value state that survives across turns",
    input={
        current_state="<key_value_map>",
        user_input="<latest_message>",
        schema="<allowed_keys_and_types>"
    },
    process=[
        /read_state{action="Load current_state and restate the keys in play"},
        /extract{action="Pull new facts from user_input that map to schema keys"},
        /reconcile{action="Resolve conflicts: newer facts win unless marked tentative"},
        /write_state{action="Emit new_state with changed keys flagged"},
        /respond{action="Answer the user using only new_state plus user_input"}
    ],
    output={
        new_state="Updated key/value map",
        changed_keys="Keys added, modified or removed this turn",
        response="Reply grounded in new_state"
    },
    meta={
        layer="cells",
        memory="explicit_state"
    }
}
"#;

const WINDOWED_MEMORY: &str = r#"
/cell.protocol.windowed_memory{
    intent="Keep the most recent exchanges verbatim and drop the oldest",
    input={
        window="<recent_exchanges>",
        window_size="<max_exchanges>",
        user_input="<latest_message>"
    },
    process=[
        /append{action="Add user_input to the end of window"},
        /trim{action="Drop the oldest exchanges until window fits window_size"},
        /carry_forward{action="Promote any dropped fact still referenced to a pinned note"},
        /respond{action="Answer using the trimmed window and pinned notes"}
    ],
    output={
        new_window="Trimmed window including this turn",
        pinned_notes="Facts preserved from dropped exchanges",
        response="Reply grounded in the window"
    },
    meta={
        layer="cells",
        memory="sliding_window"
    }
}
"#;

const EPISODIC_SUMMARY: &str = r#"
/cell.protocol.episodic_summary{
    intent="Compress long histories into episode summaries while keeping recent turns verbatim",
    input={
        episodes="<prior_episode_summaries>",
        recent_turns="<unsummarized_turns>",
        threshold="<turns_before_summarizing>"
    },
    process=[
        /check{action="If recent_turns exceeds threshold, start a new episode"},
        /summarize{action="Condense recent_turns into goals, decisions and open questions"},
        /link{action="Reference earlier episodes that the new summary depends on"},
        /respond{action="Answer using episodes for background and recent_turns for detail"}
    ],
    output={
        episodes="Episode summaries including any new one",
        recent_turns="Turns kept verbatim",
        response="Reply grounded in both layers"
    },
    meta={
        layer="cells",
        memory="episodic"
    }
}
"#;

//! Blank protocol shells.
//!
//! When a caller asks for a protocol shell that is not pre-authored, they get
//! a customizable skeleton with their `name` and `intent` filled in. Every
//! other section keeps its generic placeholder text.

use serde::Deserialize;

/// Name used when the caller supplies none.
pub const DEFAULT_SHELL_NAME: &str = "MyProtocol";

/// Intent used when the caller supplies none.
pub const DEFAULT_SHELL_INTENT: &str = "Define your intent here";

/// Fixed shell skeleton. `{name}` and `{intent}` are the only placeholders.
const PROTOCOL_SHELL_SKELETON: &str = r#"
/protocol.{name}{
    intent="{intent}",
    input={
        param1="value1",
        param2="value2"
    },
    process=[
        /step1{action="do something"},
        /step2{action="do something else"}
    ],
    output={
        result1="expected output 1",
        result2="expected output 2"
    }
}
"#;

/// Caller-supplied fields for a blank shell.
///
/// Pre-authored templates ignore these; they only customize the fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShellParams {
    /// Protocol name placed after `/protocol.`.
    pub name: Option<String>,
    /// Intent statement.
    pub intent: Option<String>,
}

impl ShellParams {
    /// Creates empty params.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            intent: None,
        }
    }

    /// Sets the shell name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the shell intent.
    #[must_use]
    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }
}

/// Renders a blank protocol shell.
///
/// A missing name falls back to [`DEFAULT_SHELL_NAME`]. A missing or empty
/// intent falls back to [`DEFAULT_SHELL_INTENT`]; an empty name is kept.
/// Values are inserted verbatim; braces or quotes inside them are not
/// escaped.
///
/// # Examples
///
/// ```rust
/// use context_engineering_mcp::templates::format_protocol_shell;
///
/// let shell = format_protocol_shell(Some("Triage"), Some("Sort incoming bugs"));
/// assert!(shell.contains("/protocol.Triage{"));
/// assert!(shell.contains(r#"intent="Sort incoming bugs""#));
/// ```
#[must_use]
pub fn format_protocol_shell(name: Option<&str>, intent: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_SHELL_NAME);
    let intent = intent
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SHELL_INTENT);

    // Substitute intent first so a name containing "{intent}" stays literal.
    PROTOCOL_SHELL_SKELETON
        .replacen("{intent}", intent, 1)
        .replacen("{name}", name, 1)
}

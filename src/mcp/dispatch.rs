//! JSON-RPC method dispatch.
//!
//! Maps method names onto a closed enum so the server matches on variants
//! rather than strings.
//!
//! ```text
//! McpMethod
//!   ├── Initialize        initialize
//!   ├── Initialized       notifications/initialized
//!   ├── ListTools         tools/list
//!   ├── CallTool          tools/call
//!   ├── ListResources     resources/list
//!   ├── ReadResource      resources/read
//!   ├── Ping              ping
//!   └── Unknown(String)
//! ```

use std::fmt;

/// MCP method identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum McpMethod {
    /// Initialize the MCP session.
    Initialize,
    /// Client acknowledgement after `initialize`; a notification.
    Initialized,
    /// List available tools.
    ListTools,
    /// Call a specific tool.
    CallTool,
    /// List available resources.
    ListResources,
    /// Read a specific resource.
    ReadResource,
    /// Health check.
    Ping,
    /// Anything else, kept for the error message.
    Unknown(String),
}

impl McpMethod {
    /// Returns the MCP protocol method name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Initialize => "initialize",
            Self::Initialized => "notifications/initialized",
            Self::ListTools => "tools/list",
            Self::CallTool => "tools/call",
            Self::ListResources => "resources/list",
            Self::ReadResource => "resources/read",
            Self::Ping => "ping",
            Self::Unknown(s) => s.as_str(),
        }
    }

    /// Returns true if this is a known method.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Returns all known methods.
    #[must_use]
    pub const fn known_methods() -> &'static [Self] {
        &[
            Self::Initialize,
            Self::Initialized,
            Self::ListTools,
            Self::CallTool,
            Self::ListResources,
            Self::ReadResource,
            Self::Ping,
        ]
    }
}

impl From<&str> for McpMethod {
    fn from(s: &str) -> Self {
        match s {
            "initialize" => Self::Initialize,
            "notifications/initialized" => Self::Initialized,
            "tools/list" => Self::ListTools,
            "tools/call" => Self::CallTool,
            "resources/list" => Self::ListResources,
            "resources/read" => Self::ReadResource,
            "ping" => Self::Ping,
            unknown => Self::Unknown(unknown.to_string()),
        }
    }
}

impl fmt::Display for McpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_methods_roundtrip() {
        for method in McpMethod::known_methods() {
            assert!(method.is_known(), "{method} should be known");
            assert_eq!(&McpMethod::from(method.as_str()), method);
        }
        assert_eq!(McpMethod::known_methods().len(), 7);
    }

    #[test]
    fn test_unknown_method() {
        let method = McpMethod::from("prompts/list");
        assert!(!method.is_known());
        assert_eq!(method.to_string(), "prompts/list");
    }
}

//! # Context Engineering MCP
//!
//! A template-serving tool server for context engineering workflows.
//!
//! Given a template identifier (a protocol shell, cell protocol, organ, or
//! prompt program name) and a few optional parameters, the server returns a
//! pre-authored text block describing a reasoning workflow for a language
//! model to follow. Nothing here calls a model: every tool renders text.
//!
//! ## Features
//!
//! - Four immutable template registries sharing one lookup mechanism
//! - Key normalization (case, separators, category prefixes, aliases)
//! - Blank protocol shells for names outside the built-in set
//! - Keyword router recommending a template for a task description
//! - Render-only cognitive tools (question understanding, logic checks)
//! - MCP server over stdio JSON-RPC
//!
//! ## Example
//!
//! ```rust
//! use context_engineering_mcp::templates::{Catalog, RegistryKind, ShellParams};
//!
//! let catalog = Catalog::builtin()?;
//! let body = catalog.resolve(RegistryKind::Protocols, "reasoning.systematic", &ShellParams::default());
//! assert!(body.contains("Break down complex problems into logical steps"));
//! # Ok::<(), context_engineering_mcp::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cognitive;
pub mod config;
pub mod mcp;
pub mod observability;
pub mod routing;
pub mod templates;

pub use config::ServerConfig;
pub use routing::{Complexity, TaskAssessment, classify};
pub use templates::{Catalog, RegistryKind, ShellParams, TemplateRegistry};

/// Error type for server operations.
///
/// Template lookups never fail: an unknown key is an ordinary outcome
/// rendered as text. These variants cover the host side.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed tool arguments, unknown tool, unknown resource URI |
/// | `OperationFailed` | stdio I/O, config file read/parse, logging or metrics init |
/// | `DuplicateKey` | Two entries of one registry normalize to the same key |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - JSON deserialization of tool arguments fails
    /// - A tool or resource name is not known
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Reading stdin or writing stdout fails
    /// - The configuration file cannot be read or parsed
    /// - The tracing subscriber or metrics recorder cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// A registry was built with two entries sharing a normalized key.
    #[error("duplicate key '{key}' in {registry} registry")]
    DuplicateKey {
        /// Registry being built.
        registry: String,
        /// Normalized key that collided.
        key: String,
    },
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, Error>;

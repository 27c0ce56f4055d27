//! Template registries and lookup.
//!
//! Templates are static text blocks grouped into four registries:
//!
//! - **Protocol shells**: structured reasoning scaffolds (`reasoning.systematic`)
//! - **Cell protocols**: memory and state patterns (`cell.protocol.key_value`)
//! - **Organs**: multi-agent workflows (`debate_council`)
//! - **Prompt programs**: chained model-call routines (`math`)
//!
//! Keys are matched loosely through a [`KeyNormalizer`]; unknown keys never
//! fail but fall back to a blank shell or a diagnostic, see [`Catalog::resolve`].

mod catalog;
pub mod content;
mod key;
mod registry;
mod shell;

pub use catalog::{Catalog, FallbackPolicy, LookupOutcome, RegistryKind};
pub use key::{KeyNormalizer, SEPARATORS, is_separator};
pub use registry::{TemplateEntry, TemplateRegistry};
pub use shell::{DEFAULT_SHELL_INTENT, DEFAULT_SHELL_NAME, ShellParams, format_protocol_shell};

/// Returns the molecular context helper.
#[must_use]
pub const fn molecular_template() -> &'static str {
    content::molecules::MOLECULAR_CONTEXT_FUNC
}

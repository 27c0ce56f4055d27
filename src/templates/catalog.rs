//! The template catalog and lookup facade.
//!
//! The [`Catalog`] owns one [`TemplateRegistry`] per [`RegistryKind`] and
//! decides what a caller gets back when a key is missing:
//!
//! | Kind | On unknown key |
//! |------|----------------|
//! | `Protocols` | Blank shell with the caller's name and intent |
//! | `Cells` | "not found" diagnostic with the sorted key list |
//! | `Organs` | Diagnostic plus an example organ |
//! | `Programs` | Diagnostic plus an example program |
//!
//! Protocol shells are meant to be freely authored by the caller; the other
//! registries are closed sets to pick from.

use super::content;
use super::key::KeyNormalizer;
use super::registry::TemplateRegistry;
use super::shell::{ShellParams, format_protocol_shell};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Identifies one of the built-in registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// Protocol shells such as `reasoning.systematic`.
    Protocols,
    /// Cell protocols such as `cell.protocol.key_value`.
    Cells,
    /// Multi-agent organs such as `debate_council`.
    Organs,
    /// Prompt programs such as `math`.
    Programs,
}

/// What a registry returns for an unknown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Render a blank protocol shell.
    Shell,
    /// Render a "not found" diagnostic, optionally followed by an example entry.
    Diagnostic {
        /// Canonical key of the entry appended as an example.
        example: Option<&'static str>,
    },
}

impl RegistryKind {
    /// Returns all kinds in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Protocols, Self::Cells, Self::Organs, Self::Programs]
    }

    /// Returns the identifier used in tool arguments and CLI flags.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protocols => "protocols",
            Self::Cells => "cells",
            Self::Organs => "organs",
            Self::Programs => "programs",
        }
    }

    /// Parses a kind, accepting singular forms and common synonyms.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protocols" | "protocol" | "shells" | "shell" => Some(Self::Protocols),
            "cells" | "cell" | "cell_protocols" | "cell-protocols" => Some(Self::Cells),
            "organs" | "organ" => Some(Self::Organs),
            "programs" | "program" | "prompt_programs" | "prompt-programs" => {
                Some(Self::Programs)
            },
            _ => None,
        }
    }

    /// Singular label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Protocols => "Protocol",
            Self::Cells => "Cell protocol",
            Self::Organs => "Organ",
            Self::Programs => "Program",
        }
    }

    /// Plural label used in diagnostics.
    #[must_use]
    pub const fn plural_label(&self) -> &'static str {
        match self {
            Self::Protocols => "protocols",
            Self::Cells => "cell protocols",
            Self::Organs => "organs",
            Self::Programs => "programs",
        }
    }

    /// Category prefix callers may put in front of a key.
    #[must_use]
    pub const fn normalizer(&self) -> KeyNormalizer {
        match self {
            Self::Protocols => KeyNormalizer::with_prefix(&["protocol"]),
            Self::Cells => KeyNormalizer::with_prefix(&["cell", "protocol"]),
            Self::Organs => KeyNormalizer::with_prefix(&["organ"]),
            Self::Programs => KeyNormalizer::with_prefix(&["program"]),
        }
    }

    /// Fallback behavior for unknown keys.
    #[must_use]
    pub const fn fallback(&self) -> FallbackPolicy {
        match self {
            Self::Protocols => FallbackPolicy::Shell,
            Self::Cells => FallbackPolicy::Diagnostic { example: None },
            Self::Organs => FallbackPolicy::Diagnostic {
                example: Some(content::organs::EXAMPLE_KEY),
            },
            Self::Programs => FallbackPolicy::Diagnostic {
                example: Some(content::programs::EXAMPLE_KEY),
            },
        }
    }

    /// Builds the built-in registry for this kind.
    fn build_registry(self) -> Result<TemplateRegistry> {
        let entries = match self {
            Self::Protocols => content::protocols::ENTRIES,
            Self::Cells => content::cells::ENTRIES,
            Self::Organs => content::organs::ENTRIES,
            Self::Programs => content::programs::ENTRIES,
        };
        TemplateRegistry::build(self.as_str(), self.normalizer(), entries.iter().copied())
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RegistryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!(
                "Unknown registry: {s} (expected protocols, cells, organs or programs)"
            ))
        })
    }
}

/// Outcome of a lookup, used for logging and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The key matched an entry.
    Hit,
    /// The key was unknown and a blank shell was rendered.
    Shell,
    /// The key was unknown and a diagnostic was rendered.
    NotFound,
}

impl LookupOutcome {
    /// Returns the metrics label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Shell => "shell",
            Self::NotFound => "not_found",
        }
    }
}

/// All built-in registries, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    protocols: TemplateRegistry,
    cells: TemplateRegistry,
    organs: TemplateRegistry,
    programs: TemplateRegistry,
}

impl Catalog {
    /// Builds the catalog from the built-in content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if any built-in registry contains two
    /// entries whose keys or aliases normalize identically.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            protocols: RegistryKind::Protocols.build_registry()?,
            cells: RegistryKind::Cells.build_registry()?,
            organs: RegistryKind::Organs.build_registry()?,
            programs: RegistryKind::Programs.build_registry()?,
        })
    }

    /// Returns the registry for a kind.
    #[must_use]
    pub const fn registry(&self, kind: RegistryKind) -> &TemplateRegistry {
        match kind {
            RegistryKind::Protocols => &self.protocols,
            RegistryKind::Cells => &self.cells,
            RegistryKind::Organs => &self.organs,
            RegistryKind::Programs => &self.programs,
        }
    }

    /// Returns the body for a raw key, if registered.
    #[must_use]
    pub fn get(&self, kind: RegistryKind, key: &str) -> Option<&'static str> {
        self.registry(kind).get(key)
    }

    /// Resolves a key to the text a caller should receive.
    ///
    /// Registered keys return their body verbatim and ignore `params`.
    /// Unknown keys follow the kind's [`FallbackPolicy`]. This never fails.
    #[must_use]
    pub fn resolve(&self, kind: RegistryKind, key: &str, params: &ShellParams) -> String {
        let (text, outcome) = self.resolve_with_outcome(kind, key, params);

        tracing::debug!(
            registry = kind.as_str(),
            key = key,
            outcome = outcome.as_str(),
            "Resolved template"
        );
        metrics::counter!(
            "template_lookups_total",
            "registry" => kind.as_str(),
            "outcome" => outcome.as_str()
        )
        .increment(1);

        text
    }

    /// Resolves a key and reports which path produced the text.
    #[must_use]
    pub fn resolve_with_outcome(
        &self,
        kind: RegistryKind,
        key: &str,
        params: &ShellParams,
    ) -> (String, LookupOutcome) {
        if let Some(body) = self.get(kind, key) {
            return (body.to_string(), LookupOutcome::Hit);
        }

        match kind.fallback() {
            FallbackPolicy::Shell => {
                let name = params
                    .name
                    .as_deref()
                    .or_else(|| Some(key.trim()).filter(|k| !k.is_empty()));
                let text = format_protocol_shell(name, params.intent.as_deref());
                (text, LookupOutcome::Shell)
            },
            FallbackPolicy::Diagnostic { example } => {
                (self.not_found(kind, key, example), LookupOutcome::NotFound)
            },
        }
    }

    /// Renders a Markdown listing of the given registries, keys sorted.
    #[must_use]
    pub fn render_listing(&self, kinds: &[RegistryKind]) -> String {
        let mut out = String::new();

        for kind in kinds {
            let registry = self.registry(*kind);
            let _ = writeln!(out, "## {} ({})\n", kind.as_str(), registry.len());

            let mut entries: Vec<_> = registry.entries().iter().collect();
            entries.sort_by_key(|e| e.key);

            for entry in entries {
                let _ = write!(out, "- `{}`: {}", entry.key, entry.description);
                if !entry.aliases.is_empty() {
                    let _ = write!(out, " (aliases: {})", entry.aliases.join(", "));
                }
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    /// Renders the diagnostic for an unknown key in a closed registry.
    fn not_found(&self, kind: RegistryKind, key: &str, example: Option<&str>) -> String {
        let registry = self.registry(kind);
        let mut text = format!(
            "// {} '{key}' not found.\n// Available {}: {}\n",
            kind.label(),
            kind.plural_label(),
            registry.keys().join(", ")
        );

        if let Some(entry) = example.and_then(|k| registry.lookup(k)) {
            let _ = write!(text, "// Returning {} as example:\n\n", entry.key);
            text.push_str(entry.body);
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_registries_are_populated() {
        let catalog = catalog();
        for kind in RegistryKind::all() {
            assert!(!catalog.registry(*kind).is_empty(), "{kind} is empty");
            assert_eq!(catalog.registry(*kind).name(), kind.as_str());
        }
    }

    #[test]
    fn test_resolve_systematic_protocol() {
        let text = catalog().resolve(
            RegistryKind::Protocols,
            "reasoning.systematic",
            &ShellParams::default(),
        );
        assert!(text.contains("Break down complex problems into logical steps"));
    }

    #[test]
    fn test_registered_body_ignores_params() {
        let catalog = catalog();
        let plain = catalog.resolve(RegistryKind::Protocols, "code.analyze", &ShellParams::new());
        let with_params = catalog.resolve(
            RegistryKind::Protocols,
            "code.analyze",
            &ShellParams::new().with_name("Foo").with_intent("Bar"),
        );
        assert_eq!(plain, with_params);
        assert!(!with_params.contains("Foo"));
    }

    #[test]
    fn test_unknown_protocol_renders_shell_with_params() {
        let (text, outcome) = catalog().resolve_with_outcome(
            RegistryKind::Protocols,
            "nonexistent.protocol",
            &ShellParams::new().with_name("Foo").with_intent("Bar"),
        );
        assert_eq!(outcome, LookupOutcome::Shell);
        assert!(text.contains("/protocol.Foo{"));
        assert!(text.contains(r#"intent="Bar""#));
        assert!(!text.contains("not found"));
    }

    #[test]
    fn test_unknown_protocol_uses_key_as_name() {
        let text = catalog().resolve(
            RegistryKind::Protocols,
            "CustomProtocol",
            &ShellParams::new().with_intent("Testing"),
        );
        assert!(text.contains("/protocol.CustomProtocol{"));
        assert!(text.contains(r#"intent="Testing""#));
    }

    #[test]
    fn test_blank_key_uses_default_shell() {
        let text = catalog().resolve(RegistryKind::Protocols, "   ", &ShellParams::new());
        assert_eq!(text, format_protocol_shell(None, None));
    }

    #[test]
    fn test_unknown_cell_lists_sorted_keys_without_example() {
        let (text, outcome) = catalog().resolve_with_outcome(
            RegistryKind::Cells,
            "cell.protocol.unknown",
            &ShellParams::new(),
        );
        assert_eq!(outcome, LookupOutcome::NotFound);
        assert!(text.contains("'cell.protocol.unknown' not found"));
        assert!(text.contains(
            "cell.protocol.episodic_summary, cell.protocol.key_value, cell.protocol.windowed_memory"
        ));
        assert!(!text.contains("as example"));
    }

    #[test]
    fn test_unknown_organ_appends_example() {
        let text = catalog().resolve(RegistryKind::Organs, "organ.unknown", &ShellParams::new());
        assert!(text.starts_with("// Organ 'organ.unknown' not found.\n"));
        assert!(text.contains("// Available organs: debate_council, research_synthesis\n"));
        assert!(text.contains("// Returning debate_council as example:"));
        assert!(text.contains("/organ.debate_council{"));
    }

    #[test]
    fn test_unknown_program_appends_math_example() {
        let text = catalog().resolve(RegistryKind::Programs, "unknown_type", &ShellParams::new());
        assert!(text.contains("// Program 'unknown_type' not found."));
        assert!(text.contains("// Available programs: debug, math"));
        assert!(text.contains("// Prompt Program: Math Solver"));
    }

    #[test_case(RegistryKind::Organs, "debate_council" ; "organ snake")]
    #[test_case(RegistryKind::Organs, "Debate-Council" ; "organ kebab")]
    #[test_case(RegistryKind::Organs, "organ.debatecouncil" ; "organ qualified")]
    #[test_case(RegistryKind::Organs, "multiperspective" ; "organ alias")]
    #[test_case(RegistryKind::Cells, "cell.protocol.key_value" ; "cell qualified")]
    #[test_case(RegistryKind::Cells, "KeyValue" ; "cell bare")]
    #[test_case(RegistryKind::Programs, "MATH" ; "program upper")]
    #[test_case(RegistryKind::Programs, "program.math_solver" ; "program alias qualified")]
    #[test_case(RegistryKind::Protocols, "Workflow-Test-Driven" ; "protocol kebab")]
    #[test_case(RegistryKind::Protocols, "protocol.workflow.tdd" ; "protocol alias qualified")]
    fn test_variants_resolve(kind: RegistryKind, key: &str) {
        assert!(catalog().get(kind, key).is_some(), "{key} did not resolve in {kind}");
    }

    #[test]
    fn test_key_value_cell_mentions_new_state() {
        let body = catalog()
            .get(RegistryKind::Cells, "cell.protocol.key_value")
            .unwrap();
        assert!(body.contains("cell.protocol.key_value"));
        assert!(body.contains("new_state"));
    }

    #[test]
    fn test_every_listed_key_resolves() {
        let catalog = catalog();
        for kind in RegistryKind::all() {
            for key in catalog.registry(*kind).keys() {
                assert!(catalog.get(*kind, key).is_some(), "{key} missing in {kind}");
            }
        }
    }

    #[test_case("protocol", RegistryKind::Protocols)]
    #[test_case("Cells", RegistryKind::Cells)]
    #[test_case("cell-protocols", RegistryKind::Cells)]
    #[test_case("organ", RegistryKind::Organs)]
    #[test_case("prompt_programs", RegistryKind::Programs)]
    fn test_registry_kind_parse(input: &str, expected: RegistryKind) {
        assert_eq!(RegistryKind::parse(input), Some(expected));
        assert_eq!(input.parse::<RegistryKind>().ok(), Some(expected));
    }

    #[test]
    fn test_registry_kind_parse_unknown() {
        assert!(RegistryKind::parse("atoms").is_none());
        assert!("atoms".parse::<RegistryKind>().is_err());
    }
}

//! Property-based tests for template lookup.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Case and separator variants of a key resolve to the same body
//! - Normalization is idempotent
//! - Every unknown key gets a fallback, never an error
//! - Shell fields are inserted verbatim
//! - Task routing is total and deterministic

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use context_engineering_mcp::templates::{
    Catalog, KeyNormalizer, LookupOutcome, RegistryKind, SEPARATORS, ShellParams,
    format_protocol_shell, is_separator,
};
use context_engineering_mcp::{Complexity, classify};
use proptest::prelude::*;
use std::sync::LazyLock;

static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::builtin().expect("built-in catalog"));

/// Every (kind, raw key or alias) pair in the built-in catalog.
fn all_surface_keys() -> Vec<(RegistryKind, &'static str)> {
    RegistryKind::all()
        .iter()
        .flat_map(|kind| {
            CATALOG
                .registry(*kind)
                .entries()
                .iter()
                .flat_map(move |entry| {
                    std::iter::once(entry.key)
                        .chain(entry.aliases.iter().copied())
                        .map(move |raw| (*kind, raw))
                })
        })
        .collect()
}

/// Rewrites `raw` with per-character case flips and separator swaps.
fn mangle(raw: &str, upper: &[bool], separators: &[usize]) -> String {
    raw.chars()
        .enumerate()
        .map(|(i, c)| {
            if is_separator(c) {
                SEPARATORS[separators[i % separators.len()] % SEPARATORS.len()]
            } else if upper[i % upper.len()] {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

fn registry_kind() -> impl Strategy<Value = RegistryKind> {
    prop::sample::select(RegistryKind::all().to_vec())
}

// ============================================================================
// Key Normalization
// ============================================================================

proptest! {
    /// Property: case and separator variants of any key hit the same entry.
    #[test]
    fn prop_surface_variants_resolve_identically(
        (kind, raw) in prop::sample::select(all_surface_keys()),
        upper in prop::collection::vec(any::<bool>(), 1..8),
        separators in prop::collection::vec(0usize..3, 1..8),
        padding in "[ \t]{0,3}",
    ) {
        let variant = format!("{padding}{}{padding}", mangle(raw, &upper, &separators));
        let params = ShellParams::default();

        let (expected, outcome) = CATALOG.resolve_with_outcome(kind, raw, &params);
        prop_assert_eq!(outcome, LookupOutcome::Hit);

        let (actual, outcome) = CATALOG.resolve_with_outcome(kind, &variant, &params);
        prop_assert_eq!(outcome, LookupOutcome::Hit, "variant {:?}", variant);
        prop_assert_eq!(actual, expected);
    }

    /// Property: normalizing twice equals normalizing once.
    #[test]
    fn prop_normalize_idempotent(kind in registry_kind(), raw in "[A-Za-z0-9._-]{0,40}") {
        let once = kind.normalizer().normalize(&raw);
        prop_assert!(!once.chars().any(is_separator));
        let plain = KeyNormalizer::new();
        prop_assert_eq!(plain.normalize(&once), once);
    }

    /// Property: normalized keys never contain upper-case ASCII.
    #[test]
    fn prop_normalize_lowercases(raw in "[A-Za-z._-]{0,40}") {
        let normalized = KeyNormalizer::new().normalize(&raw);
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
    }
}

// ============================================================================
// Fallbacks
// ============================================================================

proptest! {
    /// Property: unknown keys in closed registries produce a diagnostic
    /// listing every canonical key.
    #[test]
    fn prop_unknown_closed_key_lists_all_keys(
        kind in prop::sample::select(vec![
            RegistryKind::Cells,
            RegistryKind::Organs,
            RegistryKind::Programs,
        ]),
        suffix in "[a-z0-9]{0,16}",
    ) {
        let key = format!("zq{suffix}");
        let (text, outcome) = CATALOG.resolve_with_outcome(kind, &key, &ShellParams::default());

        prop_assert_eq!(outcome, LookupOutcome::NotFound);
        let expected_header = format!("// {} '{}' not found.", kind.label(), key);
        prop_assert!(text.starts_with(&expected_header));
        for canonical in CATALOG.registry(kind).keys() {
            prop_assert!(text.contains(canonical));
        }
    }

    /// Property: unknown protocol keys become a shell named after the key.
    #[test]
    fn prop_unknown_protocol_key_names_the_shell(suffix in "[A-Za-z0-9]{0,16}") {
        let key = format!("Zq{suffix}");
        let (text, outcome) =
            CATALOG.resolve_with_outcome(RegistryKind::Protocols, &key, &ShellParams::default());

        prop_assert_eq!(outcome, LookupOutcome::Shell);
        let expected = format!("/protocol.{key}{{");
        prop_assert!(text.contains(&expected));
    }

    /// Property: resolving is deterministic.
    #[test]
    fn prop_resolve_deterministic(kind in registry_kind(), key in "\\PC{0,24}") {
        let params = ShellParams::default();
        prop_assert_eq!(
            CATALOG.resolve_with_outcome(kind, &key, &params),
            CATALOG.resolve_with_outcome(kind, &key, &params)
        );
    }
}

// ============================================================================
// Shell Formatting
// ============================================================================

proptest! {
    /// Property: name and intent appear verbatim in the shell.
    #[test]
    fn prop_shell_inserts_fields_verbatim(
        name in "[^{}\"\n]{0,24}",
        intent in "[^\n]{1,48}",
    ) {
        let shell = format_protocol_shell(Some(&name), Some(&intent));

        let expected_name = format!("/protocol.{name}{{");
        prop_assert!(shell.contains(&expected_name));
        let expected_intent = format!("intent=\"{intent}\",");
        prop_assert!(shell.contains(&expected_intent));
        prop_assert!(shell.contains("param1=\"value1\""));
    }
}

// ============================================================================
// Task Routing
// ============================================================================

proptest! {
    /// Property: classification is total and the fallback is the only Low.
    #[test]
    fn prop_classify_total(task in "\\PC{0,80}") {
        let assessment = classify(&task);

        prop_assert!(!assessment.recommended_tool.is_empty());
        prop_assert!(!assessment.reasoning.is_empty());
        prop_assert_eq!(
            assessment.complexity == Complexity::Low,
            assessment.recommended_tool == "Standard Molecule"
        );
        prop_assert_eq!(classify(&task), assessment);
    }

    /// Property: a project term anywhere wins over later tiers.
    #[test]
    fn prop_project_terms_take_priority(
        before in "[a-z ]{0,20}",
        after in "[a-z ]{0,20}",
        term in prop::sample::select(vec!["project", "repo", "codebase", "architecture"]),
    ) {
        let task = format!("{before} {term} test analyze {after}");
        prop_assert_eq!(classify(&task).recommended_tool, "project.explore");
    }
}

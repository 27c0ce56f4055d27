//! Immutable template registries.
//!
//! A [`TemplateRegistry`] maps normalized keys to static template bodies.
//! Each entry has one canonical key plus any number of aliases; all of them
//! are normalized with the registry's [`KeyNormalizer`] when the registry is
//! built, and a collision between any two is rejected.

use super::key::KeyNormalizer;
use crate::{Error, Result};
use std::collections::HashMap;

/// A registered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Canonical key, as shown to callers.
    pub key: &'static str,
    /// Additional surface forms that resolve to this entry.
    pub aliases: &'static [&'static str],
    /// One-line description for listings.
    pub description: &'static str,
    /// The template body, returned verbatim.
    pub body: &'static str,
}

impl TemplateEntry {
    /// Creates an entry without aliases.
    #[must_use]
    pub const fn new(key: &'static str, description: &'static str, body: &'static str) -> Self {
        Self {
            key,
            aliases: &[],
            description,
            body,
        }
    }

    /// Adds aliases to the entry.
    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Read-only mapping from normalized key to template entry.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    /// Registry name used in logs and errors.
    name: &'static str,
    /// Normalizer applied to every key at build and lookup time.
    normalizer: KeyNormalizer,
    /// Entries in registration order.
    entries: Vec<TemplateEntry>,
    /// Normalized key or alias to index in `entries`.
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Builds a registry from a list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if two keys or aliases normalize to
    /// the same string. An alias equal to its own canonical key is allowed.
    pub fn build(
        name: &'static str,
        normalizer: KeyNormalizer,
        entries: impl IntoIterator<Item = TemplateEntry>,
    ) -> Result<Self> {
        let entries: Vec<TemplateEntry> = entries.into_iter().collect();
        let mut index = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            for raw in std::iter::once(entry.key).chain(entry.aliases.iter().copied()) {
                let normalized = normalizer.normalize(raw);
                match index.insert(normalized.clone(), position) {
                    Some(existing) if existing != position => {
                        return Err(Error::DuplicateKey {
                            registry: name.to_string(),
                            key: normalized,
                        });
                    },
                    _ => {},
                }
            }
        }

        tracing::debug!(
            registry = name,
            entries = entries.len(),
            keys = index.len(),
            "Built template registry"
        );

        Ok(Self {
            name,
            normalizer,
            entries,
            index,
        })
    }

    /// Returns the registry name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the normalizer this registry uses.
    #[must_use]
    pub const fn normalizer(&self) -> KeyNormalizer {
        self.normalizer
    }

    /// Looks up an entry by raw (non-normalized) key.
    ///
    /// Absence is an ordinary outcome, not an error.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&TemplateEntry> {
        let normalized = self.normalizer.normalize(raw);
        self.index
            .get(&normalized)
            .and_then(|&position| self.entries.get(position))
    }

    /// Returns the body for a raw key, if registered.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.lookup(raw).map(|entry| entry.body)
    }

    /// Returns true if the raw key resolves to an entry.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.lookup(raw).is_some()
    }

    /// Returns the canonical keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.entries.iter().map(|e| e.key).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: TemplateEntry = TemplateEntry::new("alpha.one", "first", "ALPHA BODY")
        .with_aliases(&["first", "alpha_1"]);
    const BETA: TemplateEntry = TemplateEntry::new("beta", "second", "BETA BODY");

    fn registry() -> TemplateRegistry {
        TemplateRegistry::build("test", KeyNormalizer::with_prefix(&["t"]), [BETA, ALPHA])
            .unwrap()
    }

    #[test]
    fn test_lookup_canonical_and_aliases() {
        let registry = registry();
        assert_eq!(registry.get("alpha.one"), Some("ALPHA BODY"));
        assert_eq!(registry.get("ALPHA-ONE"), Some("ALPHA BODY"));
        assert_eq!(registry.get("first"), Some("ALPHA BODY"));
        assert_eq!(registry.get("t.alpha_1"), Some("ALPHA BODY"));
        assert_eq!(registry.get("t-beta"), Some("BETA BODY"));
    }

    #[test]
    fn test_absent_key() {
        let registry = registry();
        assert!(registry.get("gamma").is_none());
        assert!(registry.get("").is_none());
        assert!(!registry.contains("alph"));
    }

    #[test]
    fn test_keys_sorted() {
        let registry = registry();
        assert_eq!(registry.keys(), vec!["alpha.one", "beta"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let registry = registry();
        let keys: Vec<_> = registry.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["beta", "alpha.one"]);
    }

    #[test]
    fn test_duplicate_normalized_key_rejected() {
        let clash = TemplateEntry::new("Alpha_One", "clash", "OTHER");
        let result = TemplateRegistry::build("test", KeyNormalizer::new(), [ALPHA, clash]);

        assert!(matches!(
            result,
            Err(Error::DuplicateKey { ref registry, ref key })
                if registry == "test" && key == "alphaone"
        ));
    }

    #[test]
    fn test_alias_equal_to_own_key_allowed() {
        let entry = TemplateEntry::new("debate", "d", "D").with_aliases(&["Debate"]);
        let registry = TemplateRegistry::build("test", KeyNormalizer::new(), [entry]).unwrap();
        assert_eq!(registry.get("DEBATE"), Some("D"));
    }

    #[test]
    fn test_empty_registry() {
        let registry =
            TemplateRegistry::build("empty", KeyNormalizer::new(), Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.keys().is_empty());
        assert_eq!(registry.name(), "empty");
    }
}

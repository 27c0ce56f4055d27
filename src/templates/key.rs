//! Template key normalization.
//!
//! Callers name templates loosely: `organ.debate_council`, `Debate-Council`
//! and `debatecouncil` all mean the same entry. A [`KeyNormalizer`] folds
//! every surface form onto one compact key before lookup.

/// Characters that carry no meaning when matching keys.
pub const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// Returns true if `c` is a key separator.
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Canonicalizes caller-supplied template identifiers.
///
/// Normalization lower-cases the input, removes the registry's category
/// prefix (for example `organ.` or `cell.protocol.`) and strips all
/// separators. It never fails: any string, including the empty string,
/// normalizes to some string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyNormalizer {
    /// Category prefix as separator-free segments, e.g. `["cell", "protocol"]`.
    prefix: &'static [&'static str],
}

impl KeyNormalizer {
    /// Creates a normalizer with no category prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self { prefix: &[] }
    }

    /// Creates a normalizer that strips the given category prefix.
    ///
    /// The prefix is given as segments; in the raw key the segments may be
    /// joined by any separator (`cell.protocol.`, `cell_protocol-`, ...).
    #[must_use]
    pub const fn with_prefix(prefix: &'static [&'static str]) -> Self {
        Self { prefix }
    }

    /// Normalizes a raw key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use context_engineering_mcp::templates::KeyNormalizer;
    ///
    /// let organs = KeyNormalizer::with_prefix(&["organ"]);
    /// assert_eq!(organs.normalize("organ.debate_council"), "debatecouncil");
    /// assert_eq!(organs.normalize("Debate-Council"), "debatecouncil");
    /// assert_eq!(organs.normalize("DebateCouncil"), "debatecouncil");
    /// ```
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.trim().to_lowercase();
        let unprefixed = self.strip_prefix(&lowered).unwrap_or(&lowered);
        unprefixed.chars().filter(|c| !is_separator(*c)).collect()
    }

    /// Removes the category prefix if `lowered` starts with it.
    ///
    /// Every prefix segment must be followed by a separator so that a bare
    /// name which merely begins with the category word is left intact.
    fn strip_prefix<'a>(&self, lowered: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return None;
        }

        let mut rest = lowered;
        for segment in self.prefix {
            rest = rest.strip_prefix(segment)?;
            rest = rest.strip_prefix(is_separator)?;
        }
        Some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ORGANS: KeyNormalizer = KeyNormalizer::with_prefix(&["organ"]);
    const CELLS: KeyNormalizer = KeyNormalizer::with_prefix(&["cell", "protocol"]);

    #[test_case("debate_council" ; "snake case")]
    #[test_case("Debate-Council" ; "kebab title case")]
    #[test_case("DebateCouncil" ; "pascal case")]
    #[test_case("organ.debate_council" ; "qualified")]
    #[test_case("organ.debatecouncil" ; "qualified compact")]
    #[test_case("ORGAN-DEBATE-COUNCIL" ; "shouting")]
    #[test_case("  organ_debate.council  " ; "padded mixed separators")]
    fn test_organ_variants_normalize_identically(raw: &str) {
        assert_eq!(ORGANS.normalize(raw), "debatecouncil");
    }

    #[test]
    fn test_multi_segment_prefix() {
        assert_eq!(CELLS.normalize("cell.protocol.key_value"), "keyvalue");
        assert_eq!(CELLS.normalize("Cell_Protocol-Key-Value"), "keyvalue");
        assert_eq!(CELLS.normalize("key_value"), "keyvalue");
    }

    #[test]
    fn test_partial_prefix_is_kept() {
        // Only the first segment matches; nothing is stripped.
        assert_eq!(CELLS.normalize("cell.keyvalue"), "cellkeyvalue");
    }

    #[test]
    fn test_prefix_word_without_separator_is_kept() {
        assert_eq!(ORGANS.normalize("organism"), "organism");
    }

    #[test]
    fn test_no_prefix_normalizer() {
        let plain = KeyNormalizer::new();
        assert_eq!(plain.normalize("reasoning.systematic"), "reasoningsystematic");
        assert_eq!(plain.normalize("organ.debate"), "organdebate");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(ORGANS.normalize(""), "");
        assert_eq!(ORGANS.normalize("._-"), "");
        assert_eq!(ORGANS.normalize("organ."), "");
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator('.'));
        assert!(is_separator('_'));
        assert!(is_separator('-'));
        assert!(!is_separator(' '));
        assert!(!is_separator('/'));
    }
}

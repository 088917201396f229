//! Synonym expansion toward the corpus vocabulary.
//!
//! A whole-query rewrite: when the user's utterance is close to a known
//! variant phrase ("who are you", "tech stack"), the query is replaced by
//! that entry's canonical term before retrieval. Matching is whole-string
//! only; partial overlap with a variant must not rewrite a longer query
//! that carries its own content words.

use tracing::debug;

use crate::query::normalize::normalize;
use crate::search::distance::normalized_distance;
use crate::types::SynonymEntry;

/// One searchable phrase and the canonical term it rewrites to.
#[derive(Debug, Clone)]
struct Rewrite {
    phrase: String,
    canonical: String,
}

pub struct SynonymExpander {
    rewrites: Vec<Rewrite>,
}

impl SynonymExpander {
    /// Flatten the entries into phrase → canonical rewrites. Canonicals are
    /// indexed alongside their variants, which keeps expansion stable when
    /// the input already is the canonical term.
    pub fn new(entries: &[SynonymEntry]) -> Self {
        let mut rewrites = Vec::new();
        for entry in entries {
            let canonical = normalize(&entry.canonical);
            if canonical.is_empty() {
                continue;
            }
            rewrites.push(Rewrite {
                phrase: canonical.clone(),
                canonical: canonical.clone(),
            });
            for variant in &entry.variants {
                let phrase = normalize(variant);
                if !phrase.is_empty() {
                    rewrites.push(Rewrite {
                        phrase,
                        canonical: canonical.clone(),
                    });
                }
            }
        }
        Self { rewrites }
    }

    pub fn len(&self) -> usize {
        self.rewrites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }

    /// Rewrite `query` to the best-matching canonical term, or return it
    /// unchanged when nothing comes within `threshold`. Phrases shorter than
    /// `min_match_len` only match exactly.
    pub fn expand(&self, query: &str, threshold: f64, min_match_len: usize) -> String {
        let query = normalize(query);
        if query.is_empty() {
            return query;
        }

        let mut best_distance = f64::INFINITY;
        let mut best_rewrite: Option<&Rewrite> = None;
        for rewrite in &self.rewrites {
            if rewrite.phrase != query && rewrite.phrase.chars().count() < min_match_len {
                continue;
            }
            let d = normalized_distance(&query, &rewrite.phrase);
            if d < best_distance {
                best_distance = d;
                best_rewrite = Some(rewrite);
            }
        }

        match best_rewrite {
            Some(rewrite) if best_distance < threshold => {
                if rewrite.canonical != query {
                    debug!("synonym expansion '{}' -> '{}'", query, rewrite.canonical);
                }
                rewrite.canonical.clone()
            }
            _ => query,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn entry(canonical: &str, variants: &[&str]) -> SynonymEntry {
        SynonymEntry {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn expander() -> SynonymExpander {
        SynonymExpander::new(&[
            entry("projects", &["portfolio", "apps", "applications", "things built"]),
            entry("skills", &["tech stack", "technologies", "expertise"]),
            entry("about", &["who are you", "tell me about yourself"]),
        ])
    }

    #[test_case("portfolio", "projects" ; "exact variant")]
    #[test_case("tech stack", "skills" ; "multiword variant")]
    #[test_case("who are you", "about" ; "small talk style variant")]
    #[test_case("portfolis", "projects" ; "typo within threshold")]
    fn expands_variants(input: &str, expected: &str) {
        assert_eq!(expander().expand(input, 0.3, 2), expected);
    }

    #[test]
    fn canonical_input_is_stable() {
        let e = expander();
        assert_eq!(e.expand("projects", 0.3, 2), "projects");
        assert_eq!(e.expand("skills", 0.3, 2), "skills");
    }

    #[test]
    fn expansion_is_idempotent() {
        let e = expander();
        let once = e.expand("portfolio", 0.3, 2);
        assert_eq!(e.expand(&once, 0.3, 2), once);
    }

    #[test]
    fn unrelated_query_passes_through() {
        assert_eq!(
            expander().expand("which databases do you know", 0.3, 2),
            "which databases do you know"
        );
    }

    #[test]
    fn partial_variant_overlap_does_not_rewrite() {
        // "react skills" shares a word with the "skills" entry but carries
        // its own content; a whole-query rewrite would destroy it.
        assert_eq!(expander().expand("react skills", 0.3, 2), "react skills");
    }

    #[test]
    fn input_is_normalized_before_matching() {
        assert_eq!(expander().expand("  Who are YOU?  ", 0.3, 2), "about");
    }

    #[test]
    fn empty_query_stays_empty() {
        assert_eq!(expander().expand("", 0.3, 2), "");
        assert_eq!(expander().expand("?!", 0.3, 2), "");
    }

    #[test]
    fn empty_table_changes_nothing() {
        let e = SynonymExpander::new(&[]);
        assert!(e.is_empty());
        assert_eq!(e.expand("portfolio", 0.3, 2), "portfolio");
    }
}

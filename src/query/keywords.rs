//! Keyword extraction: alias substitution, then stop-word removal.
//!
//! Aliases map short forms and nicknames onto the vocabulary the corpus
//! actually uses ("ml" to "machine learning", a project's pet name to its
//! real title). Substitution is whole-word so "ml" never rewrites inside
//! "html". What survives the stop-word filter is the retrieval text; when
//! nothing survives, callers fall back to the pre-extraction query.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use tracing::warn;

use crate::query::normalize::{contains_phrase, normalize};

/// Words carrying no retrieval signal: articles, question scaffolding,
/// generic request verbs. A profile may override the list wholesale.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "do", "does", "did", "what", "whats", "which",
    "who", "how", "why", "when", "where", "there", "me", "my", "your", "you", "i", "we", "they",
    "it", "of", "in", "on", "at", "for", "to", "with", "and", "or", "about", "tell", "show",
    "give", "list", "can", "could", "please", "used", "use", "know", "have", "has", "any", "ever",
    "good", "other", "else",
];

/// Whole-word alias pattern plus its canonical replacement.
struct AliasRule {
    pattern: Regex,
    replacement: String,
}

pub struct KeywordExtractor {
    aliases: Vec<AliasRule>,
    stop_words: HashSet<String>,
}

impl KeywordExtractor {
    /// Compile the alias table and stop-word set. An empty `stop_words`
    /// slice selects [`DEFAULT_STOP_WORDS`]. Alias patterns that fail to
    /// compile are skipped with a warning, not fatal.
    pub fn new(aliases: &BTreeMap<String, String>, stop_words: &[String]) -> Self {
        let mut rules = Vec::new();
        for (alias, replacement) in aliases {
            let alias = normalize(alias);
            let replacement = normalize(replacement);
            if alias.is_empty() || replacement.is_empty() {
                continue;
            }
            match Regex::new(&format!(r"\b{}\b", regex::escape(&alias))) {
                Ok(pattern) => rules.push(AliasRule {
                    pattern,
                    replacement,
                }),
                Err(err) => warn!("skipping alias '{}': {}", alias, err),
            }
        }

        let stop_words: HashSet<String> = if stop_words.is_empty() {
            DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect()
        } else {
            stop_words.iter().map(|s| normalize(s)).collect()
        };

        Self {
            aliases: rules,
            stop_words,
        }
    }

    /// Extract retrieval keywords from a normalized query. May return an
    /// empty string when every token is a stop word.
    pub fn extract(&self, query: &str) -> String {
        let mut text = normalize(query);

        for rule in &self.aliases {
            // Skip rules whose target phrase is already present, otherwise
            // "mern" -> "mern stack" would double the word on queries that
            // spell the full phrase out.
            if contains_phrase(&text, &rule.replacement) {
                continue;
            }
            text = rule.pattern.replace_all(&text, &rule.replacement).to_string();
        }

        text.split_whitespace()
            .filter(|token| !self.stop_words.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn extractor() -> KeywordExtractor {
        let mut aliases = BTreeMap::new();
        aliases.insert("ml".to_string(), "machine learning".to_string());
        aliases.insert("js".to_string(), "javascript".to_string());
        aliases.insert("mern".to_string(), "mern stack".to_string());
        KeywordExtractor::new(&aliases, &[])
    }

    // -- stop words ----------------------------------------------------------

    #[test_case("what projects have you built", "projects built" ; "question scaffolding")]
    #[test_case("tell me about your skills", "skills" ; "request verbs")]
    #[test_case("which projects used mern stack", "projects mern stack" ; "kept phrase")]
    #[test_case("react", "react" ; "single keyword untouched")]
    fn strips_stop_words(input: &str, expected: &str) {
        assert_eq!(extractor().extract(input), expected);
    }

    #[test]
    fn all_stop_words_yields_empty() {
        assert_eq!(extractor().extract("tell me about it"), "");
    }

    #[test]
    fn keeps_token_order() {
        assert_eq!(
            extractor().extract("did you use graphql on lumo health"),
            "graphql lumo health"
        );
    }

    // -- aliases -------------------------------------------------------------

    #[test]
    fn alias_expands_short_form() {
        assert_eq!(
            extractor().extract("do you know ml"),
            "machine learning"
        );
    }

    #[test]
    fn alias_is_whole_word_only() {
        // "ml" inside "html" must not rewrite.
        assert_eq!(extractor().extract("html and css"), "html css");
    }

    #[test]
    fn alias_skips_when_target_already_present() {
        assert_eq!(
            extractor().extract("mern stack experience"),
            "mern stack experience"
        );
    }

    #[test]
    fn alias_applies_mid_sentence() {
        assert_eq!(
            extractor().extract("projects built with js and react"),
            "projects built javascript react"
        );
    }

    // -- overrides -----------------------------------------------------------

    #[test]
    fn custom_stop_words_replace_default() {
        let custom = vec!["banana".to_string()];
        let e = KeywordExtractor::new(&BTreeMap::new(), &custom);
        assert_eq!(e.extract("tell me banana things"), "tell me things");
    }

    #[test]
    fn empty_tables_pass_text_through() {
        let e = KeywordExtractor::new(&BTreeMap::new(), &["unused".to_string()]);
        assert_eq!(e.extract("Exactly What Was Typed"), "exactly what was typed");
    }
}

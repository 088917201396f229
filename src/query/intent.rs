//! Intent classification over example phrases.
//!
//! Each intent carries a handful of example phrases and the category it
//! routes to. Matching uses the same position-agnostic field distance as the
//! indices, so a short phrase contained in a longer utterance ("skills"
//! inside "react skills") still routes. A confident intent match sends the
//! query straight to one category index instead of cross-category fusion.

use tracing::debug;

use crate::query::normalize::normalize;
use crate::search::distance::{field_distance, Terms};
use crate::types::{Category, IntentEntry};

/// A confident routing decision.
#[derive(Debug, Clone)]
pub struct IntentMatch {
    pub label: String,
    pub category: Category,
    pub distance: f64,
}

/// One flattened example phrase.
struct Phrase {
    terms: Terms,
    label: String,
    category: Category,
}

pub struct IntentClassifier {
    phrases: Vec<Phrase>,
}

impl IntentClassifier {
    pub fn new(entries: &[IntentEntry]) -> Self {
        let phrases = entries
            .iter()
            .flat_map(|entry| {
                entry.phrases.iter().filter_map(|phrase| {
                    let terms = Terms::new(&normalize(phrase));
                    (!terms.is_empty()).then(|| Phrase {
                        terms,
                        label: entry.label.clone(),
                        category: entry.category,
                    })
                })
            })
            .collect();
        Self { phrases }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Best phrase match strictly below `threshold`, if any. Ties keep the
    /// table's declaration order.
    pub fn classify(
        &self,
        query: &str,
        threshold: f64,
        min_match_len: usize,
    ) -> Option<IntentMatch> {
        let query = Terms::new(&normalize(query));
        if query.is_empty() {
            return None;
        }

        let mut best_distance = f64::INFINITY;
        let mut best_phrase: Option<&Phrase> = None;
        for phrase in &self.phrases {
            let d = field_distance(&query, &phrase.terms, min_match_len);
            if d < best_distance {
                best_distance = d;
                best_phrase = Some(phrase);
            }
        }

        match best_phrase {
            Some(phrase) if best_distance < threshold => {
                debug!(
                    "intent '{}' routed to {} at distance {:.3}",
                    phrase.label, phrase.category, best_distance
                );
                Some(IntentMatch {
                    label: phrase.label.clone(),
                    category: phrase.category,
                    distance: best_distance,
                })
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! The assistant facade: one struct wiring corpus, indices, query
//! understanding, fusion, and synthesis into a turn-at-a-time pipeline.
//!
//! A turn is fully synchronous over in-memory indices built once at
//! construction. The contract is that every non-empty input produces a
//! displayable [`Reply`]; retrieval failures downgrade to fallback copy
//! instead of propagating.

use tracing::{debug, info, warn};

use crate::config::SabaConfig;
use crate::corpus::Profile;
use crate::error::{Result, SabaError};
use crate::query::intent::IntentClassifier;
use crate::query::keywords::KeywordExtractor;
use crate::query::normalize::normalize;
use crate::query::synonyms::SynonymExpander;
use crate::reply::synthesizer;
use crate::search::fusion::{fuse, FusionOutcome};
use crate::search::index::SearchIndex;
use crate::session::Session;
use crate::types::{Category, Record, Reply};

pub struct Assistant {
    profile: Profile,
    config: SabaConfig,
    indices: Vec<SearchIndex>,
    expander: SynonymExpander,
    extractor: KeywordExtractor,
    classifier: IntentClassifier,
    session: Session,
}

impl Assistant {
    /// Build every per-category index and the query-understanding tables.
    pub fn new(profile: Profile, config: SabaConfig) -> Self {
        for warning in profile.validate() {
            warn!("profile: {}", warning);
        }

        let indices: Vec<SearchIndex> = Category::ALL
            .iter()
            .map(|&category| {
                let records = profile.records(category);
                info!("indexed {} {} records", records.len(), category);
                SearchIndex::build(category, records)
            })
            .collect();
        info!("assistant ready with {} records", profile.record_count());

        let expander = SynonymExpander::new(&profile.synonyms);
        let extractor = KeywordExtractor::new(&profile.aliases, &profile.stop_words);
        let classifier = IntentClassifier::new(&profile.intents);

        Self {
            profile,
            config,
            indices,
            expander,
            extractor,
            classifier,
            session: Session::new(),
        }
    }

    /// Assistant over the embedded default profile.
    pub fn embedded(config: SabaConfig) -> Result<Self> {
        Ok(Self::new(Profile::embedded()?, config))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Clear the transcript and the topic context.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Run one full turn: record the user message, retrieve, synthesize,
    /// record the reply, and replace the topic context.
    ///
    /// Blank input is the one refused case; nothing is recorded for it.
    pub fn respond(&mut self, input: &str) -> Result<Reply> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Err(SabaError::EmptyQuery);
        }

        self.session.record_user(input);

        if let Some(reply) =
            synthesizer::small_talk(&normalized, self.config.limits.max_follow_ups)
        {
            // Small talk bypasses retrieval and leaves the topic untouched.
            self.session.record_reply(&reply);
            return Ok(reply);
        }

        let (reply, winner) = match self.retrieve(&normalized) {
            Ok(turn) => turn,
            Err(e) if e.is_recoverable() => {
                debug!("turn recovered from {}", e);
                (synthesizer::not_ready_reply(), None)
            }
            Err(e) => return Err(e),
        };

        self.session.set_topic(winner);
        self.session.record_reply(&reply);
        Ok(reply)
    }

    /// The retrieval half of a turn. Returns the reply plus the record that
    /// should become the new topic, if any.
    fn retrieve(&self, normalized: &str) -> Result<(Reply, Option<Record>)> {
        if !self.indices.iter().any(SearchIndex::has_content) {
            return Err(SabaError::IndexNotReady);
        }

        let thresholds = &self.config.thresholds;
        let min_match_len = self.config.limits.min_match_len;
        let max_follow_ups = self.config.limits.max_follow_ups;

        let expanded = self
            .expander
            .expand(normalized, thresholds.synonym, min_match_len);
        let keywords = self.extractor.extract(&expanded);
        let search_text = if keywords.is_empty() { expanded } else { keywords };
        debug!("retrieving with '{}' (from '{}')", search_text, normalized);

        // A confident intent match routes to one category and stops there;
        // a routed miss falls back to the generic prompt, never to fusion.
        if let Some(intent) = self
            .classifier
            .classify(&search_text, thresholds.intent, min_match_len)
        {
            let hit = self
                .index(intent.category)
                .query(&search_text, thresholds.accept, min_match_len)
                .into_iter()
                .find(|hit| !hit.record.is_empty_payload());
            return Ok(match hit {
                Some(hit) => {
                    let reply = synthesizer::for_record(
                        &hit.record,
                        normalized,
                        &self.profile,
                        max_follow_ups,
                    );
                    (reply, Some(hit.record))
                }
                None => (synthesizer::default_reply(max_follow_ups), None),
            });
        }

        // Cross-category fusion. The topic bias only gets a say when the
        // plain query produced no winner, so a fresh question is never
        // dragged back to the previous topic.
        let mut outcome = fuse(&self.indices, &search_text, &self.config);
        if !matches!(outcome, FusionOutcome::Winner(_)) {
            if let Some(bias) = self.session.context().bias() {
                let biased = format!("{search_text} {bias}");
                debug!("retrying fusion with topic bias '{}'", bias);
                if let FusionOutcome::Winner(hit) = fuse(&self.indices, &biased, &self.config) {
                    outcome = FusionOutcome::Winner(hit);
                }
            }
        }

        Ok(match outcome {
            FusionOutcome::Winner(hit) => {
                let reply = synthesizer::for_record(
                    &hit.record,
                    normalized,
                    &self.profile,
                    max_follow_ups,
                );
                (reply, Some(hit.record))
            }
            FusionOutcome::NearMisses(hits) => {
                (synthesizer::for_near_misses(&hits, max_follow_ups), None)
            }
            FusionOutcome::NoMatch => (synthesizer::default_reply(max_follow_ups), None),
        })
    }

    fn index(&self, category: Category) -> &SearchIndex {
        // Indices are built in Category::ALL order.
        let position = Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        &self.indices[position]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Fusion ranking across all category indices.
//!
//! Every query runs against every category index and the per-category hit
//! lists are merged into one ranking. A first pass uses the strict accept
//! threshold; if it comes back empty, a single retry with the relaxed
//! threshold collects near misses that the reply layer can offer as
//! suggestions instead of a direct answer.

use tracing::debug;

use crate::config::SabaConfig;
use crate::search::index::{Hit, SearchIndex};

/// What the two-pass ranking produced.
#[derive(Debug, Clone)]
pub enum FusionOutcome {
    /// A hit under the accept threshold; answer with this record.
    Winner(Hit),
    /// No direct winner, but the relaxed retry found close-but-not-quite
    /// records worth suggesting. Ordered best first, already capped.
    NearMisses(Vec<Hit>),
    /// Neither pass found anything usable.
    NoMatch,
}

impl FusionOutcome {
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Run the two-pass ranking for `query_text` over every index.
pub fn fuse(indices: &[SearchIndex], query_text: &str, config: &SabaConfig) -> FusionOutcome {
    let min_match_len = config.limits.min_match_len;

    let strict = gather(indices, query_text, config.thresholds.accept, min_match_len);
    if let Some(winner) = strict.into_iter().next() {
        debug!(
            "fusion winner '{}' at distance {:.3}",
            winner.record.display_name(),
            winner.distance
        );
        return FusionOutcome::Winner(winner);
    }

    // Pass one found nothing below accept, so every retry hit lands in the
    // [accept, relaxed) band. Those become suggestions, never answers.
    let mut near = gather(indices, query_text, config.thresholds.relaxed, min_match_len);
    near.truncate(config.limits.max_fallback_candidates);

    if near.is_empty() {
        debug!("fusion found nothing for '{}'", query_text);
        FusionOutcome::NoMatch
    } else {
        debug!("fusion retry produced {} near misses", near.len());
        FusionOutcome::NearMisses(near)
    }
}

/// Query every index at `threshold`, drop records with nothing to say, and
/// merge into one ascending ranking. The sort is stable, so ties keep the
/// category-then-corpus order the indices were supplied in.
fn gather(
    indices: &[SearchIndex],
    query_text: &str,
    threshold: f64,
    min_match_len: usize,
) -> Vec<Hit> {
    let mut hits: Vec<Hit> = indices
        .iter()
        .flat_map(|index| index.query(query_text, threshold, min_match_len))
        .filter(|hit| !hit.record.is_empty_payload())
        .collect();

    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

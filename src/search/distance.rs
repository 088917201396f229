//! Fuzzy distance primitives.
//!
//! Everything the indices score with lives here: character-level edit
//! distance, plus a position-agnostic field scorer that handles whole-string
//! equality, substring containment, and token-by-token alignment. All
//! distances are normalized into [0,1] where 0 is an exact match and lower
//! is always better.
//!
//! Inputs are expected to be pre-normalized (lowercase, punctuation
//! stripped); see [`crate::query::normalize`].

// ---------------------------------------------------------------------------
// Scoring shape constants
// ---------------------------------------------------------------------------

/// Scale for substring containment: the shorter string found inside the
/// longer one scores `0.5 * (1 - shorter/longer)`, so a large uncovered
/// remainder pushes the distance toward the acceptance boundary instead
/// of past it.
const CONTAINMENT_SCALE: f64 = 0.5;

/// Scale for prefix matches between tokens ("datab" against "database").
const PREFIX_SCALE: f64 = 0.3;

/// Penalty per fully-unmatched share of a long field, so a term buried in
/// a paragraph ranks behind the same term standing alone in a title.
const LENGTH_PENALTY: f64 = 0.1;

// ---------------------------------------------------------------------------
// Edit distance
// ---------------------------------------------------------------------------

/// Character-level Levenshtein distance (two-row DP).
///
/// ```
/// use saba::search::distance::levenshtein;
/// assert_eq!(levenshtein("react", "react"), 0);
/// assert_eq!(levenshtein("react", "reacr"), 1);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut cur = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b_chars.len()]
}

/// Edit distance normalized by the longer string's character count.
/// Identical strings (including two empties) score 0.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    if a == b {
        return 0.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / max_len as f64
}

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// A normalized text plus its whitespace tokens, computed once so indices
/// never re-tokenize per query.
#[derive(Debug, Clone)]
pub struct Terms {
    pub text: String,
    pub tokens: Vec<String>,
}

impl Terms {
    /// Wrap an already-normalized string.
    pub fn new(normalized: &str) -> Self {
        Self {
            text: normalized.to_string(),
            tokens: normalized.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Field scoring
// ---------------------------------------------------------------------------

/// Distance between a query and one searchable field, ignoring position.
///
/// The score is the best of three views:
/// - whole-string equality → 0,
/// - substring containment in either direction, scaled by the uncovered
///   remainder,
/// - mean over query tokens of each token's best match among the field's
///   tokens, plus a small penalty for fields much longer than the query.
///
/// Tokens shorter than `min_match_len` only count when they match exactly.
pub fn field_distance(query: &Terms, field: &Terms, min_match_len: usize) -> f64 {
    if query.is_empty() || field.is_empty() {
        return 1.0;
    }
    if query.text == field.text {
        return 0.0;
    }

    let mut best = 1.0f64;
    if let Some(d) = containment(&query.text, &field.text, min_match_len) {
        best = best.min(d);
    }
    best.min(tokenwise(query, field, min_match_len))
}

/// Substring containment in either direction. The shorter string must be at
/// least `min_match_len` chars.
fn containment(a: &str, b: &str, min_match_len: usize) -> Option<f64> {
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let (shorter, s_len, longer, l_len) = if a_len <= b_len {
        (a, a_len, b, b_len)
    } else {
        (b, b_len, a, a_len)
    };
    if s_len < min_match_len || !longer.contains(shorter) {
        return None;
    }
    Some(CONTAINMENT_SCALE * (1.0 - s_len as f64 / l_len as f64))
}

/// Mean best-token distance, penalized by the field's unmatched length.
fn tokenwise(query: &Terms, field: &Terms, min_match_len: usize) -> f64 {
    if query.tokens.is_empty() || field.tokens.is_empty() {
        return 1.0;
    }

    let sum: f64 = query
        .tokens
        .iter()
        .map(|tok| best_token_distance(tok, &field.tokens, min_match_len))
        .sum();
    let mean = sum / query.tokens.len() as f64;

    let penalty = if field.tokens.len() > query.tokens.len() {
        LENGTH_PENALTY * (1.0 - query.tokens.len() as f64 / field.tokens.len() as f64)
    } else {
        0.0
    };

    (mean + penalty).min(1.0)
}

/// Best match for one query token among the field's tokens.
fn best_token_distance(query_tok: &str, field_tokens: &[String], min_match_len: usize) -> f64 {
    let q_len = query_tok.chars().count();
    let mut best = 1.0f64;

    for field_tok in field_tokens {
        if query_tok == field_tok.as_str() {
            return 0.0;
        }
        if q_len < min_match_len {
            continue;
        }
        let d = if field_tok.starts_with(query_tok) {
            let f_len = field_tok.chars().count();
            PREFIX_SCALE * (1.0 - q_len as f64 / f_len as f64)
        } else {
            normalized_distance(query_tok, field_tok)
        };
        if d < best {
            best = d;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

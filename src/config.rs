//! Tunable retrieval configuration.
//!
//! The fuzzy-match thresholds are empirical, not law, so they live here as
//! YAML-overridable knobs with the observed values as defaults. A partial
//! config file overrides only the fields it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SabaError};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SabaConfig {
    /// Fuzzy-match distance bounds.
    pub thresholds: Thresholds,

    /// Cardinality knobs.
    pub limits: Limits,
}

impl SabaConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SabaError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| SabaError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Load from `path` when given, else from [`Self::default_path`] when
    /// that file exists, else built-in defaults. An explicit path that
    /// fails to load is an error; an absent default location is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::load(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `$XDG_CONFIG_HOME/saba/config.yaml` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "saba")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Distance bounds for the pipeline stages. All distances live in [0,1],
/// lower = closer; a stage fires only when its best hit is *below* the
/// bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Best synonym-variant hit must beat this to rewrite the query.
    #[serde(default = "default_synonym")]
    pub synonym: f64,

    /// Best intent-phrase hit must beat this to pre-route a category.
    #[serde(default = "default_intent")]
    pub intent: f64,

    /// A fused best hit below this wins the turn outright.
    #[serde(default = "default_accept")]
    pub accept: f64,

    /// Retry bound when the first fusion pass comes back empty. Hits in
    /// [accept, relaxed) become near-miss candidates, never winners.
    #[serde(default = "default_relaxed")]
    pub relaxed: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            synonym: default_synonym(),
            intent: default_intent(),
            accept: default_accept(),
            relaxed: default_relaxed(),
        }
    }
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Cardinality knobs for matching and reply construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Tokens shorter than this never match fuzzily.
    #[serde(default = "default_min_match_len")]
    pub min_match_len: usize,

    /// Near-miss candidates listed by the clarifying fallback.
    #[serde(default = "default_max_fallback_candidates")]
    pub max_fallback_candidates: usize,

    /// Upper bound on generated follow-up suggestions.
    #[serde(default = "default_max_follow_ups")]
    pub max_follow_ups: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_match_len: default_min_match_len(),
            max_fallback_candidates: default_max_fallback_candidates(),
            max_follow_ups: default_max_follow_ups(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_synonym() -> f64 {
    0.3
}

fn default_intent() -> f64 {
    0.4
}

fn default_accept() -> f64 {
    0.5
}

fn default_relaxed() -> f64 {
    0.6
}

fn default_min_match_len() -> usize {
    2
}

fn default_max_fallback_candidates() -> usize {
    3
}

fn default_max_follow_ups() -> usize {
    4
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

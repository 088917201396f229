//! The profile corpus: every fact the assistant can answer with, plus the
//! vocabulary tables that steer retrieval toward it.
//!
//! Profiles load from JSON. A complete default profile is compiled into the
//! binary so the assistant runs with zero setup; a host may point at its own
//! profile file instead. Missing fields deserialize to empty defaults rather
//! than failing the load, and [`Profile::validate`] reports what a sparse or
//! sloppy profile is missing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SabaError};
use crate::types::{
    Bio, Category, Experience, IntentEntry, Project, Record, Skill, SynonymEntry, Testimonial,
};

const EMBEDDED_PROFILE: &str = include_str!("../../data/profile.json");

/// The five record corpora plus the retrieval vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
    pub bio: Bio,
    pub synonyms: Vec<SynonymEntry>,
    pub intents: Vec<IntentEntry>,
    pub aliases: BTreeMap<String, String>,
    pub stop_words: Vec<String>,
}

impl Profile {
    /// The profile compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_PROFILE, "embedded profile")
    }

    /// Load a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| SabaError::Profile(format!("{}: {}", path.display(), e)))?;
        Self::parse(&source, &path.display().to_string())
    }

    /// Load from `path` when given, else fall back to the embedded profile.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    fn parse(source: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| SabaError::Profile(format!("{origin}: {e}")))
    }

    /// All records of one category, tagged. The single bio object becomes a
    /// one-element corpus.
    pub fn records(&self, category: Category) -> Vec<Record> {
        match category {
            Category::Project => self.projects.iter().cloned().map(Record::Project).collect(),
            Category::Skill => self.skills.iter().cloned().map(Record::Skill).collect(),
            Category::Experience => self
                .experience
                .iter()
                .cloned()
                .map(Record::Experience)
                .collect(),
            Category::Testimonial => self
                .testimonials
                .iter()
                .cloned()
                .map(Record::Testimonial)
                .collect(),
            Category::Bio => vec![Record::Bio(self.bio.clone())],
        }
    }

    pub fn record_count(&self) -> usize {
        Category::ALL
            .iter()
            .map(|c| self.records(*c).len())
            .sum()
    }

    /// Non-fatal quality warnings: empty corpora, content-free records,
    /// out-of-range proficiencies, vocabulary entries that can never match.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for category in Category::ALL {
            let records = self.records(category);
            if records.is_empty() {
                warnings.push(format!("no {category} records"));
                continue;
            }
            for (i, record) in records.iter().enumerate() {
                if record.is_empty_payload() {
                    warnings.push(format!("{category} record {} has no content", i + 1));
                }
            }
        }

        for skill in &self.skills {
            if skill.proficiency > 100 {
                warnings.push(format!(
                    "skill '{}' proficiency {} exceeds 100",
                    skill.name, skill.proficiency
                ));
            }
        }

        for project in &self.projects {
            for link in &project.links {
                if link.text.trim().is_empty() || link.url.trim().is_empty() {
                    warnings.push(format!("project '{}' has an incomplete link", project.title));
                }
            }
        }

        for entry in &self.synonyms {
            if entry.variants.is_empty() {
                warnings.push(format!("synonym '{}' has no variants", entry.canonical));
            }
        }

        for entry in &self.intents {
            if entry.phrases.is_empty() {
                warnings.push(format!("intent '{}' has no phrases", entry.label));
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_profile_parses() {
        let profile = Profile::embedded().unwrap();
        assert_eq!(profile.projects.len(), 4);
        assert_eq!(profile.skills.len(), 9);
        assert_eq!(profile.experience.len(), 3);
        assert_eq!(profile.testimonials.len(), 3);
        assert_eq!(profile.bio.full_name, "Saba Daniels");
    }

    #[test]
    fn embedded_profile_covers_every_category() {
        let profile = Profile::embedded().unwrap();
        for category in Category::ALL {
            assert!(
                !profile.records(category).is_empty(),
                "missing {category} records"
            );
        }
        assert_eq!(profile.record_count(), 4 + 9 + 3 + 3 + 1);
    }

    #[test]
    fn embedded_profile_validates_clean() {
        let warnings = Profile::embedded().unwrap().validate();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn embedded_profile_has_vocabulary() {
        let profile = Profile::embedded().unwrap();
        assert!(!profile.synonyms.is_empty());
        assert!(!profile.intents.is_empty());
        assert!(!profile.aliases.is_empty());
    }

    #[test]
    fn records_carry_their_category() {
        let profile = Profile::embedded().unwrap();
        let projects = profile.records(Category::Project);
        assert!(projects.iter().all(|r| r.category() == Category::Project));
        assert_eq!(projects[0].display_name(), "Shopden");
    }

    #[test]
    fn loads_partial_profile_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"projects": [{{"title": "Solo", "description": "The only record"}}]}}"#
        )
        .unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.projects.len(), 1);
        assert!(profile.skills.is_empty());
        assert!(profile.bio.full_name.is_empty());
        // Sparse profiles are loadable but loudly imperfect.
        assert!(!profile.validate().is_empty());
    }

    #[test]
    fn load_missing_file_is_a_profile_error() {
        let err = Profile::load(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, SabaError::Profile(_)));
    }

    #[test]
    fn load_invalid_json_is_a_profile_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        let err = Profile::load(file.path()).unwrap_err();
        assert!(matches!(err, SabaError::Profile(_)));
    }

    #[test]
    fn load_or_embedded_falls_back() {
        let fallback = Profile::load_or_embedded(None).unwrap();
        assert_eq!(fallback.record_count(), Profile::embedded().unwrap().record_count());
    }

    #[test]
    fn validate_flags_overrange_proficiency() {
        let mut profile = Profile::embedded().unwrap();
        profile.skills[0].proficiency = 150;
        let warnings = profile.validate();
        assert!(warnings.iter().any(|w| w.contains("exceeds 100")));
    }

    #[test]
    fn validate_flags_empty_corpus() {
        let mut profile = Profile::embedded().unwrap();
        profile.testimonials.clear();
        let warnings = profile.validate();
        assert!(warnings.iter().any(|w| w.contains("no testimonial records")));
    }
}

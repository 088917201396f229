//! Per-category fuzzy search index.
//!
//! One [`SearchIndex`] is built per category at startup and never mutated.
//! Each record contributes a handful of weighted fields; identifying fields
//! (title, name, synonyms) carry full weight so an exact term hit there
//! always outranks the same term buried in long-form text.

use crate::query::normalize::normalize;
use crate::search::distance::{field_distance, Terms};
use crate::types::{Category, Record};

// ---------------------------------------------------------------------------
// Field weights
// ---------------------------------------------------------------------------

/// Identifying fields: titles, names, synonym lists.
const WEIGHT_IDENTITY: f64 = 1.0;
/// Keyword-ish fields: technologies, tags, roles, skill groups.
const WEIGHT_KEYWORDS: f64 = 0.85;
/// Long-form fields: descriptions, accomplishments, summaries.
const WEIGHT_BODY: f64 = 0.7;
/// Quote text, the loosest signal of all.
const WEIGHT_QUOTE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Hits
// ---------------------------------------------------------------------------

/// One scored hit out of an index query. Distance ∈ [0,1], 0 = exact.
#[derive(Debug, Clone)]
pub struct Hit {
    pub record: Record,
    pub distance: f64,
}

impl Hit {
    pub fn category(&self) -> Category {
        self.record.category()
    }
}

// ---------------------------------------------------------------------------
// SearchIndex
// ---------------------------------------------------------------------------

/// A weighted searchable field, normalized and tokenized at build time.
#[derive(Debug, Clone)]
struct IndexedField {
    terms: Terms,
    weight: f64,
}

/// One record's precomputed entry.
#[derive(Debug, Clone)]
struct IndexEntry {
    record_idx: usize,
    fields: Vec<IndexedField>,
}

/// Immutable fuzzy index over one category's records.
pub struct SearchIndex {
    category: Category,
    records: Vec<Record>,
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build the index for `category` from its records. Records keep their
    /// corpus order, which is also the tiebreak order for equal distances.
    pub fn build(category: Category, records: Vec<Record>) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .map(|(record_idx, record)| IndexEntry {
                record_idx,
                fields: extract_fields(record),
            })
            .collect();

        Self {
            category,
            records,
            entries,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when at least one record carries displayable content.
    pub fn has_content(&self) -> bool {
        self.records.iter().any(|r| !r.is_empty_payload())
    }

    /// All hits strictly below `threshold`, ascending by distance. The sort
    /// is stable, so equal distances keep corpus order.
    pub fn query(&self, query_text: &str, threshold: f64, min_match_len: usize) -> Vec<Hit> {
        let query = Terms::new(&normalize(query_text));
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<Hit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let distance = entry_distance(&query, entry, min_match_len);
                (distance < threshold).then(|| Hit {
                    record: self.records[entry.record_idx].clone(),
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits
    }

    /// Best single hit below `threshold`, if any.
    pub fn best(&self, query_text: &str, threshold: f64, min_match_len: usize) -> Option<Hit> {
        self.query(query_text, threshold, min_match_len)
            .into_iter()
            .next()
    }
}

/// Minimum weighted field distance for one entry, capped at 1.0.
fn entry_distance(query: &Terms, entry: &IndexEntry, min_match_len: usize) -> f64 {
    let mut best = 1.0f64;
    for field in &entry.fields {
        let raw = field_distance(query, &field.terms, min_match_len);
        let weighted = (raw / field.weight).min(1.0);
        if weighted < best {
            best = weighted;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------------------

/// Loose names a category answers to, indexed at full weight on every record
/// so broad queries ("projects", "about") land inside the right corpus.
fn category_keywords(category: Category) -> &'static str {
    match category {
        Category::Project => "project projects portfolio built work",
        Category::Skill => "skill skills technologies tech",
        Category::Experience => "experience work career employment",
        Category::Testimonial => "testimonial testimonials references",
        Category::Bio => "bio about biography education entrepreneurship startup",
    }
}

fn extract_fields(record: &Record) -> Vec<IndexedField> {
    let mut fields: Vec<(String, f64)> = Vec::new();

    match record {
        Record::Project(p) => {
            fields.push((p.title.clone(), WEIGHT_IDENTITY));
            fields.push((join(&p.technologies), WEIGHT_KEYWORDS));
            fields.push((join(&p.tags), WEIGHT_KEYWORDS));
            fields.push((format!("{} {}", p.description, p.problem), WEIGHT_BODY));
            fields.push((
                format!("{} {}", join(&p.accomplishments), join(&p.lessons)),
                WEIGHT_BODY,
            ));
        }
        Record::Skill(s) => {
            fields.push((s.name.clone(), WEIGHT_IDENTITY));
            fields.push((join(&s.synonyms), WEIGHT_IDENTITY));
            fields.push((s.category.clone(), WEIGHT_KEYWORDS));
        }
        Record::Experience(e) => {
            fields.push((e.role.clone(), WEIGHT_IDENTITY));
            fields.push((e.company.clone(), WEIGHT_IDENTITY));
            fields.push((join(&e.skills_used), WEIGHT_KEYWORDS));
            fields.push((e.period.clone(), WEIGHT_KEYWORDS));
            fields.push((
                format!("{} {}", e.description, join(&e.accomplishments)),
                WEIGHT_BODY,
            ));
        }
        Record::Testimonial(t) => {
            fields.push((t.author.clone(), WEIGHT_IDENTITY));
            fields.push((format!("{} {}", t.position, t.company), WEIGHT_KEYWORDS));
            fields.push((t.quote.clone(), WEIGHT_QUOTE));
        }
        Record::Bio(b) => {
            fields.push((b.full_name.clone(), WEIGHT_IDENTITY));
            fields.push((b.title.clone(), WEIGHT_KEYWORDS));
            fields.push((b.location.clone(), WEIGHT_KEYWORDS));
            fields.push((b.summary.clone(), WEIGHT_BODY));
            fields.push((
                format!(
                    "{} {} {}",
                    b.education.degree, b.education.institution, b.education.period
                ),
                WEIGHT_BODY,
            ));
            fields.push((b.entrepreneurship.clone(), WEIGHT_BODY));
        }
    }

    fields.push((
        category_keywords(record.category()).to_string(),
        WEIGHT_IDENTITY,
    ));

    fields
        .into_iter()
        .filter_map(|(text, weight)| {
            let terms = Terms::new(&normalize(&text));
            (!terms.is_empty()).then_some(IndexedField { terms, weight })
        })
        .collect()
}

fn join(parts: &[String]) -> String {
    parts.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Project, Skill, Testimonial};

    fn make_project(title: &str, technologies: &[&str], description: &str) -> Record {
        Record::Project(Project {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        })
    }

    fn make_skill(name: &str, synonyms: &[&str]) -> Record {
        Record::Skill(Skill {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            proficiency: 80,
            ..Default::default()
        })
    }

    fn project_index() -> SearchIndex {
        SearchIndex::build(
            Category::Project,
            vec![
                make_project(
                    "Shopden",
                    &["MongoDB", "Express", "React", "Node.js"],
                    "An online marketplace for independent shops",
                ),
                make_project(
                    "Lumo Health",
                    &["React Native", "GraphQL", "PostgreSQL"],
                    "Telemedicine app connecting rural patients with doctors",
                ),
                make_project(
                    "FieldPay",
                    &["TypeScript", "Node.js", "Redis"],
                    "Offline-first payments for field agents",
                ),
            ],
        )
    }

    // -- build ---------------------------------------------------------------

    #[test]
    fn build_preserves_record_count() {
        let index = project_index();
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
        assert_eq!(index.category(), Category::Project);
    }

    #[test]
    fn empty_corpus_builds_empty_index() {
        let index = SearchIndex::build(Category::Skill, Vec::new());
        assert!(index.is_empty());
        assert!(!index.has_content());
        assert!(index.query("anything", 0.5, 2).is_empty());
    }

    #[test]
    fn content_free_records_do_not_count_as_content() {
        let index = SearchIndex::build(
            Category::Project,
            vec![Record::Project(Default::default())],
        );
        assert!(!index.is_empty());
        assert!(!index.has_content());
        assert!(project_index().has_content());
    }

    // -- self-match ----------------------------------------------------------

    #[test]
    fn own_title_is_top_hit_at_distance_zero() {
        let index = project_index();
        for title in ["Shopden", "Lumo Health", "FieldPay"] {
            let hits = index.query(title, 0.5, 2);
            assert!(!hits.is_empty(), "no hits for {title}");
            assert_eq!(hits[0].record.display_name(), title);
            assert_eq!(hits[0].distance, 0.0, "self-match for {title}");
        }
    }

    #[test]
    fn own_name_with_punctuation_still_matches() {
        let index = SearchIndex::build(
            Category::Skill,
            vec![make_skill("Node.js", &["node", "nodejs"])],
        );
        let hits = index.query("Node.js", 0.5, 2);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].distance, 0.0);
    }

    // -- ranking -------------------------------------------------------------

    #[test]
    fn results_sorted_ascending_by_distance() {
        let index = project_index();
        let hits = index.query("health app", 0.8, 2);
        for pair in hits.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn technology_query_finds_the_right_project() {
        let index = project_index();
        let hits = index.query("graphql", 0.5, 2);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].record.display_name(), "Lumo Health");
    }

    #[test]
    fn exact_name_scores_zero_despite_other_fields() {
        let index = SearchIndex::build(
            Category::Skill,
            vec![make_skill("React", &["reactjs", "react.js"])],
        );
        let hits = index.query("react", 0.5, 2);
        assert_eq!(hits[0].distance, 0.0);
    }

    #[test]
    fn name_hit_outranks_body_mention() {
        let index = SearchIndex::build(
            Category::Project,
            vec![
                make_project("Inventory Sync", &["Go"], "Uses Redis for caching"),
                make_project("Redis Tools", &["Rust"], "CLI helpers for operators"),
            ],
        );
        let hits = index.query("redis", 0.8, 2);
        assert!(hits.len() >= 2);
        assert_eq!(hits[0].record.display_name(), "Redis Tools");
    }

    #[test]
    fn fuzzy_title_typo_matches() {
        let index = project_index();
        let hits = index.query("lumo helth", 0.5, 2);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].record.display_name(), "Lumo Health");
    }

    #[test]
    fn threshold_excludes_weak_hits() {
        let index = project_index();
        let strict = index.query("payments", 0.2, 2);
        let loose = index.query("payments", 0.8, 2);
        assert!(strict.len() <= loose.len());
    }

    #[test]
    fn unrelated_query_returns_nothing_at_default_threshold() {
        let index = project_index();
        let hits = index.query("watercolor pottery", 0.5, 2);
        assert!(hits.is_empty(), "got {:?}", hits.first().map(|h| h.distance));
    }

    // -- category keywords ---------------------------------------------------

    #[test]
    fn category_name_query_hits_every_record() {
        let index = project_index();
        let hits = index.query("projects", 0.5, 2);
        assert_eq!(hits.len(), 3, "category keyword should reach all records");
        // Stable sort keeps corpus order for the tied keyword distances.
        assert_eq!(hits[0].record.display_name(), "Shopden");
    }

    // -- best ----------------------------------------------------------------

    #[test]
    fn best_returns_first_ranked_hit() {
        let index = project_index();
        let best = index.best("telemedicine", 0.5, 2);
        assert!(best.is_some());
        assert_eq!(
            best.map(|h| h.record.display_name()),
            Some("Lumo Health".to_string())
        );
    }

    #[test]
    fn best_returns_none_when_nothing_qualifies() {
        let index = project_index();
        assert!(index.best("quantum knitting", 0.3, 2).is_none());
    }

    // -- malformed records ---------------------------------------------------

    #[test]
    fn empty_fields_are_not_indexed() {
        let index = SearchIndex::build(
            Category::Testimonial,
            vec![Record::Testimonial(Testimonial {
                author: "Dana Riley".into(),
                quote: String::new(),
                ..Default::default()
            })],
        );
        // Still findable by author; the empty quote field is simply absent.
        let hits = index.query("dana riley", 0.5, 2);
        assert!(!hits.is_empty());
    }
}

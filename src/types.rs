//! Core data model: categories, records, chat messages, and replies.
//!
//! Everything here is plain data. Records are loaded once from a profile,
//! wrapped into category-tagged [`Record`] values for the search indices,
//! and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The five knowledge corpora. Every record belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Project,
    Skill,
    Experience,
    Testimonial,
    Bio,
}

impl Category {
    /// All categories, in the order indices are queried and ties broken.
    pub const ALL: [Category; 5] = [
        Category::Project,
        Category::Skill,
        Category::Experience,
        Category::Testimonial,
        Category::Bio,
    ];

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Skill => "skill",
            Self::Experience => "experience",
            Self::Testimonial => "testimonial",
            Self::Bio => "bio",
        }
    }

    /// Parse from a loose string (case-insensitive, plural accepted).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "project" | "projects" => Some(Self::Project),
            "skill" | "skills" => Some(Self::Skill),
            "experience" | "work" => Some(Self::Experience),
            "testimonial" | "testimonials" => Some(Self::Testimonial),
            "bio" | "about" | "biography" => Some(Self::Bio),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record payloads
// ---------------------------------------------------------------------------

/// A clickable reference attached to a reply ("GitHub", "Live Demo", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// One portfolio project.
///
/// All fields are serde-defaulted: a record missing fields loads as empty
/// strings/lists instead of failing the whole profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// The problem statement this project addressed.
    pub problem: String,
    pub technologies: Vec<String>,
    pub accomplishments: Vec<String>,
    pub lessons: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<Link>,
}

/// One skill with a 0–100 proficiency score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Skill group label ("Frontend", "DevOps", ...), not a [`Category`].
    pub category: String,
    pub proficiency: u8,
    pub synonyms: Vec<String>,
}

/// One employment entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub accomplishments: Vec<String>,
    pub skills_used: Vec<String>,
}

/// One third-party quote about the profile owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub author: String,
    pub position: String,
    pub company: String,
    pub quote: String,
}

/// Education sub-record inside [`Bio`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

/// The single biography record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bio {
    pub full_name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub education: Education,
    pub entrepreneurship: String,
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One retrievable fact, tagged with exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Record {
    Project(Project),
    Skill(Skill),
    Experience(Experience),
    Testimonial(Testimonial),
    Bio(Bio),
}

impl Record {
    /// The category this record belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Project(_) => Category::Project,
            Self::Skill(_) => Category::Skill,
            Self::Experience(_) => Category::Experience,
            Self::Testimonial(_) => Category::Testimonial,
            Self::Bio(_) => Category::Bio,
        }
    }

    /// Identifying display name: project title, skill name, role + company,
    /// testimonial author, or the bio's full name.
    pub fn display_name(&self) -> String {
        match self {
            Self::Project(p) => p.title.clone(),
            Self::Skill(s) => s.name.clone(),
            Self::Experience(e) => match (e.role.is_empty(), e.company.is_empty()) {
                (false, false) => format!("{} at {}", e.role, e.company),
                (false, true) => e.role.clone(),
                (true, false) => e.company.clone(),
                (true, true) => String::new(),
            },
            Self::Testimonial(t) => t.author.clone(),
            Self::Bio(b) => b.full_name.clone(),
        }
    }

    /// True when the record carries nothing worth showing. Fusion drops
    /// these hits so a half-empty corpus entry never wins a turn.
    pub fn is_empty_payload(&self) -> bool {
        match self {
            Self::Project(p) => p.title.trim().is_empty() && p.description.trim().is_empty(),
            Self::Skill(s) => s.name.trim().is_empty(),
            Self::Experience(e) => e.role.trim().is_empty() && e.description.trim().is_empty(),
            Self::Testimonial(t) => t.quote.trim().is_empty(),
            Self::Bio(b) => b.full_name.trim().is_empty() && b.summary.trim().is_empty(),
        }
    }
}

// ---------------------------------------------------------------------------
// Vocabulary tables
// ---------------------------------------------------------------------------

/// Canonical term plus the variant phrases that rewrite to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymEntry {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// Intent label, the category it routes to, and its example phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentEntry {
    pub label: String,
    pub category: Category,
    #[serde(default)]
    pub phrases: Vec<String>,
}

// ---------------------------------------------------------------------------
// Proficiency labels
// ---------------------------------------------------------------------------

/// Map a 0–100 proficiency score onto its fixed band label.
pub fn proficiency_label(value: u8) -> &'static str {
    match value {
        v if v >= 90 => "expert-level",
        v if v >= 75 => "advanced",
        v if v >= 50 => "intermediate",
        _ => "familiar",
    }
}

// ---------------------------------------------------------------------------
// Messages and replies
// ---------------------------------------------------------------------------

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one pipeline turn produces for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// May contain line breaks; ready for direct rendering.
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub links: Vec<Link>,
    /// 0–4 suggested next queries.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub follow_ups: Vec<String>,
}

/// One entry in the session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub follow_ups: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Build a user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            links: Vec::new(),
            follow_ups: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Build an assistant message from a synthesized reply, stamped now.
    pub fn assistant(reply: &Reply) -> Self {
        Self {
            role: Role::Assistant,
            text: reply.text.clone(),
            links: reply.links.clone(),
            follow_ups: reply.follow_ups.clone(),
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

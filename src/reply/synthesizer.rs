//! Response synthesis: canned small talk and per-category reply templates.
//!
//! Everything here is a pure function from retrieval output to a [`Reply`];
//! recording the turn and updating conversation state stay with the caller.
//! Template text is short multi-line copy with emoji section markers, in the
//! assistant's voice, speaking about the profile owner in third person.

use crate::corpus::Profile;
use crate::query::normalize::{contains_phrase, normalize};
use crate::reply::followups;
use crate::search::index::Hit;
use crate::types::{proficiency_label, Bio, Experience, Project, Record, Reply, Skill, Testimonial};

// ---------------------------------------------------------------------------
// Small talk
// ---------------------------------------------------------------------------

const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "hi there",
    "hello there",
    "hey there",
    "good morning",
    "good afternoon",
    "good evening",
    "howdy",
];

const THANKS: &[&str] = &[
    "thanks",
    "thank you",
    "thanks a lot",
    "thank you so much",
    "cheers",
    "much appreciated",
];

const FAREWELLS: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "see you later",
    "take care",
    "good night",
];

/// Canned replies for greeting/thanks/farewell phrases. Matches the whole
/// normalized query only, so "hi" inside a real question never triggers.
pub fn small_talk(normalized_query: &str, max_follow_ups: usize) -> Option<Reply> {
    if GREETINGS.contains(&normalized_query) {
        return Some(Reply {
            text: "Hey there! 👋 Ask me anything about the projects, skills, experience, \
                   and people behind this portfolio."
                .to_string(),
            links: Vec::new(),
            follow_ups: followups::generic(max_follow_ups),
        });
    }
    if THANKS.contains(&normalized_query) {
        return Some(Reply {
            text: "You're welcome! Happy to dig into anything else.".to_string(),
            links: Vec::new(),
            follow_ups: Vec::new(),
        });
    }
    if FAREWELLS.contains(&normalized_query) {
        return Some(Reply {
            text: "Thanks for stopping by! 👋 Come back any time.".to_string(),
            links: Vec::new(),
            follow_ups: Vec::new(),
        });
    }
    None
}

// ---------------------------------------------------------------------------
// Category templates
// ---------------------------------------------------------------------------

/// Render the winning record. `raw_query` steers the bio template toward a
/// requested sub-fact; `profile` supplies the skill template's related
/// projects.
pub fn for_record(
    record: &Record,
    raw_query: &str,
    profile: &Profile,
    max_follow_ups: usize,
) -> Reply {
    let (text, links) = match record {
        Record::Project(p) => (project_text(p), p.links.clone()),
        Record::Skill(s) => (skill_text(s, profile), Vec::new()),
        Record::Experience(e) => (experience_text(e, &record.display_name()), Vec::new()),
        Record::Testimonial(t) => (testimonial_text(t), Vec::new()),
        Record::Bio(b) => (bio_text(b, raw_query), Vec::new()),
    };

    Reply {
        text,
        links,
        follow_ups: followups::for_record(record, max_follow_ups),
    }
}

fn project_text(p: &Project) -> String {
    let mut text = format!("✨ {}\n\n{}", p.title, p.description);
    if !p.problem.trim().is_empty() {
        text.push_str(&format!("\n\n📌 The problem: {}", p.problem));
    }
    if !p.technologies.is_empty() {
        text.push_str(&format!("\n\n🔧 Built with: {}", p.technologies.join(", ")));
    }
    push_bullets(&mut text, "Highlights:", &p.accomplishments);
    push_bullets(&mut text, "Lessons learned:", &p.lessons);
    text
}

fn skill_text(s: &Skill, profile: &Profile) -> String {
    let mut text = format!(
        "🔧 {}\n\nProficiency: {} ({}/100).",
        s.name,
        proficiency_label(s.proficiency),
        s.proficiency
    );
    let related = related_projects(profile, s);
    if !related.is_empty() {
        text.push_str(&format!("\n\n🚀 Related projects: {}", related.join(", ")));
    }
    text
}

/// Titles of projects whose technologies or tags mention the skill by name
/// or by one of its synonyms.
fn related_projects(profile: &Profile, skill: &Skill) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let canonical = normalize(&skill.name);
    if !canonical.is_empty() {
        names.push(canonical);
    }
    names.extend(skill.synonyms.iter().map(|s| normalize(s)).filter(|s| !s.is_empty()));

    profile
        .projects
        .iter()
        .filter(|project| {
            let haystack = normalize(&format!(
                "{} {}",
                project.technologies.join(" "),
                project.tags.join(" ")
            ));
            names.iter().any(|name| contains_phrase(&haystack, name))
        })
        .map(|project| project.title.clone())
        .collect()
}

fn experience_text(e: &Experience, headline: &str) -> String {
    let mut text = format!("💼 {headline}");
    if !e.period.trim().is_empty() {
        text.push_str(&format!(" ({})", e.period));
    }
    if !e.description.trim().is_empty() {
        text.push_str(&format!("\n\n{}", e.description));
    }
    let highlights: Vec<String> = e.accomplishments.iter().take(2).cloned().collect();
    push_bullets(&mut text, "Highlights:", &highlights);
    text
}

fn testimonial_text(t: &Testimonial) -> String {
    let mut text = format!("“{}”", t.quote);
    let origin = match (t.position.trim(), t.company.trim()) {
        ("", "") => String::new(),
        (position, "") => position.to_string(),
        ("", company) => company.to_string(),
        (position, company) => format!("{position} at {company}"),
    };
    match (t.author.trim(), origin.as_str()) {
        ("", "") => {}
        (author, "") => text.push_str(&format!("\n\n— {author}")),
        ("", origin) => text.push_str(&format!("\n\n— {origin}")),
        (author, origin) => text.push_str(&format!("\n\n— {author}, {origin}")),
    }
    text
}

const EDUCATION_CUES: &[&str] = &[
    "education", "degree", "university", "studied", "study", "studies", "school",
];

const VENTURE_CUES: &[&str] = &[
    "entrepreneurship",
    "entrepreneur",
    "entrepreneurial",
    "founder",
    "founded",
    "startup",
    "venture",
];

fn bio_text(b: &Bio, raw_query: &str) -> String {
    let query = normalize(raw_query);
    let wants = |cues: &[&str]| cues.iter().any(|cue| contains_phrase(&query, cue));

    if wants(EDUCATION_CUES) && !b.education.degree.trim().is_empty() {
        let mut text = format!("🎓 {}", b.education.degree);
        if !b.education.institution.trim().is_empty() {
            text.push_str(&format!(", {}", b.education.institution));
        }
        if !b.education.period.trim().is_empty() {
            text.push_str(&format!(" ({})", b.education.period));
        }
        return text;
    }

    if wants(VENTURE_CUES) && !b.entrepreneurship.trim().is_empty() {
        return format!("🚀 {}", b.entrepreneurship);
    }

    let mut text = String::new();
    if !b.full_name.trim().is_empty() {
        text.push_str(&format!("✨ {}", b.full_name));
        if !b.title.trim().is_empty() {
            text.push_str(&format!(", {}", b.title));
        }
        if !b.location.trim().is_empty() {
            text.push_str(&format!(", based in {}", b.location));
        }
    }
    if !b.summary.trim().is_empty() {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(&b.summary);
    }
    text
}

fn push_bullets(text: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    text.push_str(&format!("\n\n{heading}"));
    for item in items {
        text.push_str(&format!("\n• {item}"));
    }
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Clarifying reply listing near-miss candidates as "name (category)".
pub fn for_near_misses(candidates: &[Hit], max_follow_ups: usize) -> Reply {
    let mut text =
        String::from("I couldn't find an exact match for that, but these come close:");
    for hit in candidates {
        text.push_str(&format!(
            "\n• {} ({})",
            hit.record.display_name(),
            hit.record.category()
        ));
    }
    text.push_str("\n\nTry asking about one of them directly.");

    Reply {
        text,
        links: Vec::new(),
        follow_ups: followups::generic(max_follow_ups),
    }
}

/// Generic category-prompt reply for queries nothing matched.
pub fn default_reply(max_follow_ups: usize) -> Reply {
    Reply {
        text: "Hmm, that's outside what I know. I can tell you about projects, skills, \
               work experience, testimonials, or the person behind this portfolio."
            .to_string(),
        links: Vec::new(),
        follow_ups: followups::generic(max_follow_ups),
    }
}

/// Shown when input arrives before the indices are ready.
pub fn not_ready_reply() -> Reply {
    Reply {
        text: "One moment, still warming up. Ask me again in a second!".to_string(),
        links: Vec::new(),
        follow_ups: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

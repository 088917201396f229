//! Follow-up question suggestions.
//!
//! Generated from the winning record's category and identifying fields. The
//! strings are written to round-trip: typing one back into the pipeline
//! should land on the record (or category) it points at.

use crate::types::Record;

/// Suggestions tailored to `record`, capped at `max`.
pub fn for_record(record: &Record, max: usize) -> Vec<String> {
    let mut suggestions = match record {
        Record::Project(p) => vec![
            format!("What problem does {} solve?", p.title),
            format!("What technologies power {}?", p.title),
            format!("What were the lessons from {}?", p.title),
        ],
        Record::Skill(s) => vec![
            format!("Which projects used {}?", s.name),
            format!("What experience do you have with {}?", s.name),
            "What other skills are in the stack?".to_string(),
        ],
        Record::Experience(e) => vec![
            format!("What was accomplished at {}?", e.company),
            format!("What technologies were used at {}?", e.company),
            "Where else have you worked?".to_string(),
        ],
        Record::Testimonial(t) => vec![
            "Are there more testimonials?".to_string(),
            format!("What was it like working with {}?", t.author),
        ],
        Record::Bio(_) => vec![
            "What is your education?".to_string(),
            "Did you ever run a startup?".to_string(),
            "What have you built?".to_string(),
        ],
    };
    suggestions.truncate(max);
    suggestions
}

/// The fixed list offered when no record won.
pub fn generic(max: usize) -> Vec<String> {
    let mut suggestions = vec![
        "What have you built?".to_string(),
        "What are your strongest skills?".to_string(),
        "Where have you worked?".to_string(),
        "What do people say about you?".to_string(),
    ];
    suggestions.truncate(max);
    suggestions
}

//! Reply layer: response templates and follow-up suggestions.

pub mod followups;
pub mod synthesizer;

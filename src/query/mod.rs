//! Query understanding: normalization, synonym expansion, keyword
//! extraction, and intent classification.

pub mod intent;
pub mod keywords;
pub mod normalize;
pub mod synonyms;

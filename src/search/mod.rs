//! Search layer: fuzzy distance primitives, per-category indices, and
//! cross-category fusion ranking.

pub mod distance;
pub mod fusion;
pub mod index;

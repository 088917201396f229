//! Saba — portfolio knowledge assistant library.
//!
//! Provides fuzzy multi-corpus retrieval, intent routing, and templated
//! answer synthesis over a fixed professional profile.

pub mod assistant;
pub mod config;
pub mod corpus;
pub mod error;
pub mod observability;
pub mod query;
pub mod reply;
pub mod search;
pub mod session;
pub mod types;

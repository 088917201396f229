//! Crate-wide error type and result alias.
//!
//! Only host-boundary failures (unreadable profile, bad config) surface to
//! the binary. Everything that can go wrong inside a conversational turn is
//! recovered into a displayable reply by the pipeline itself; see
//! [`crate::assistant`].

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SabaError>;

/// All error conditions the assistant can report.
#[derive(Debug, Error)]
pub enum SabaError {
    /// Profile JSON could not be read or parsed.
    #[error("profile error: {0}")]
    Profile(String),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Input was blank after normalization; nothing to retrieve.
    /// Recoverable: the caller skips the turn without recording a message.
    #[error("empty query")]
    EmptyQuery,

    /// The category indices have not been built yet.
    /// Recoverable: the user is told to retry on the next input.
    #[error("search indices not ready")]
    IndexNotReady,

    /// Underlying I/O failure while loading host-side files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything that doesn't fit the categories above.
    #[error("{0}")]
    Other(String),
}

impl SabaError {
    /// True for the error kinds a turn recovers from locally. The pipeline
    /// contract is that every turn still produces a displayable reply.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyQuery | Self::IndexNotReady)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

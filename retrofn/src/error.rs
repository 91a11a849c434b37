//! Error types for the consumer contracts
//!
//! The library defines exactly two failure kinds: a fail-fast composition
//! error (an `after` consumer was required but absent) and the opaque
//! failure a consumer's own side effect may raise. Composition never wraps,
//! translates, or swallows a callback failure - it is passed through to the
//! caller exactly as the consumer produced it.

/// Result type for consumer operations
pub type Result<T> = std::result::Result<T, ConsumerError>;

/// Errors that can surface when composing or invoking consumers
#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    /// `and_then` was called with `None` - raised at composition time,
    /// before either consumer runs
    #[error("composition requires an `after` consumer, but none was supplied")]
    MissingAfter,

    /// I/O failure inside a consumer's side effect
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure raised by a consumer's side effect, carried
    /// unmodified
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

impl ConsumerError {
    /// Wrap an arbitrary error as an opaque callback failure
    pub fn callback(err: impl Into<anyhow::Error>) -> Self {
        ConsumerError::Callback(err.into())
    }

    /// True if this is the fail-fast composition error
    pub fn is_missing_after(&self) -> bool {
        matches!(self, ConsumerError::MissingAfter)
    }
}

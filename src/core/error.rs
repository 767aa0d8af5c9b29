//! Error types shared by every module.
//!
//! All failures are surfaced to the caller immediately. Nothing in the engine
//! retries or recovers silently; the turn loop decides how to react.

use thiserror::Error;

/// Errors raised by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A constructor or operation received an unusable argument
    /// (missing tree root, bad suit, card with no values, too many players).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Peek or removal on an empty heap, or a draw from an exhausted deck.
    #[error("empty collection: {0}")]
    EmptyCollection(String),

    /// Operation not allowed in the current game phase.
    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl GameError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn empty(msg: impl Into<String>) -> Self {
        Self::EmptyCollection(msg.into())
    }

    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

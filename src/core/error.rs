//! Engine error taxonomy.
//!
//! Two failure classes exist:
//! - `Configuration`: the engine was set up in a way no round can run with
//!   (empty word bank, infeasible decoy request). Fatal, surfaced at start.
//! - `InvalidState`: a mutating call arrived in a status that forbids it
//!   (e.g. answering a finished round).
//!
//! Everything else is a total function over its domain.

use thiserror::Error;

use super::state::RoundStatus;

/// Errors surfaced by the quiz engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The engine configuration cannot produce a playable round.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A mutating call was made in a status that forbids it.
    #[error("invalid state: expected {expected:?}, round is {actual:?}")]
    InvalidState {
        /// Status the operation requires.
        expected: RoundStatus,
        /// Status the round was actually in.
        actual: RoundStatus,
    },
}

/// Convenience alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

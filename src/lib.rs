//! # spellquiz
//!
//! A deterministic word-spelling quiz engine. The player is shown a target
//! word and must pick the correctly spelled variant among decoys; points
//! accumulate over a fixed-length round and rank against a synthetic
//! leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: the engine owns state and transitions; UIs
//!    observe snapshots and forward selections. No rendering, no event
//!    loop, no I/O.
//!
//! 2. **Deterministic**: every random draw (word shuffle, decoy
//!    substitution, leaderboard synthesis) flows through a seedable RNG
//!    with independent context streams, so seeded rounds replay
//!    identically.
//!
//! 3. **Cheap snapshots**: observable state uses `im` persistent
//!    structures, so a presentation layer can snapshot after every
//!    mutating call in O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, clock, errors, round state
//! - `words`: word bank and round-word selection
//! - `decoys`: single-substitution misspelling generation
//! - `leaderboard`: synthetic score ranking
//! - `engine`: round lifecycle, scoring, observable surface
//!
//! ## Example
//!
//! ```
//! use spellquiz::{AnswerOutcome, RoundEngine, RoundStatus};
//!
//! let mut engine = RoundEngine::new(42);
//! engine.start()?;
//!
//! while engine.state().status == RoundStatus::Playing {
//!     // A real UI renders engine.state().current_options and waits for
//!     // a tap; here we always pick the first option.
//!     let pick = engine.state().current_options[0].clone();
//!     let _outcome: AnswerOutcome = engine.answer(&pick)?;
//! }
//!
//! assert_eq!(engine.leaderboard().len(), 6);
//! # Ok::<(), spellquiz::EngineError>(())
//! ```

pub mod core;
pub mod decoys;
pub mod engine;
pub mod leaderboard;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    AnswerOutcome, Clock, EngineError, EngineResult, ManualClock, QuizRng, RoundState,
    RoundStatus, SystemClock,
};

pub use crate::engine::{RoundConfig, RoundEngine, RoundEngineBuilder};

pub use crate::leaderboard::{build_leaderboard, Leaderboard, ScoreEntry};

pub use crate::words::{Word, WordBank};

pub use crate::decoys::generate_options;

//! Core engine types: RNG, clock, errors, round state.
//!
//! These are the building blocks shared by every component; none of them
//! know about word banks, decoys, or leaderboards.

pub mod clock;
pub mod error;
pub mod rng;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{EngineError, EngineResult};
pub use rng::QuizRng;
pub use state::{AnswerOutcome, RoundState, RoundStatus};

//! Round state: the single observable state object.
//!
//! ## RoundState
//!
//! Everything the presentation layer may read:
//! - Word sequence, current index, current options
//! - Score and round status
//! - Timing (start, finish, duration)
//! - A revision counter for change polling
//!
//! The state is exclusively owned and mutated by `RoundEngine`; readers get
//! cheap snapshots. `im` persistent structures make `clone()` O(1), so the
//! presentation layer can snapshot after every mutating call.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::words::Word;

/// Durable round lifecycle status.
///
/// `Correct`/`Wrong` feedback is deliberately not part of this enum; it is a
/// transient signal carried by [`AnswerOutcome`] and lasts until the next
/// mutating call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No round has been started yet.
    NotStarted,
    /// A round is in progress; answers are accepted.
    Playing,
    /// The word sequence is exhausted; state is read-only.
    Finished,
}

/// Transient feedback for the most recent answer.
///
/// Presentation layers may read this for one frame (e.g. flash green/red)
/// and should treat it as cleared once consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// The selected option matched the target word.
    Correct,
    /// The selected option was a decoy.
    Wrong,
}

/// Observable state of one quiz round.
///
/// Invariants maintained by the engine:
/// - `status == Finished` iff `current_index == word_sequence.len()`
///   (for any started round)
/// - while `status == Playing`, `current_options` contains exactly one
///   case-insensitive match of the current word
/// - `score` has no bounds in either direction
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// Words for this round, fixed at start, no duplicates.
    pub word_sequence: Vector<Word>,

    /// Index of the word being asked, in `[0, word_sequence.len()]`.
    pub current_index: usize,

    /// Options offered for the current word. Shrinks when wrong answers
    /// are eliminated; never empty while playing.
    pub current_options: Vector<String>,

    /// Accumulated score. May go negative; no upper clamp.
    pub score: i32,

    /// Durable lifecycle status.
    pub status: RoundStatus,

    /// Feedback for the most recent answer, if any.
    pub last_outcome: Option<AnswerOutcome>,

    /// Epoch millis when the round started. Zero before the first start.
    pub started_at_epoch_millis: u64,

    /// Epoch millis when the round finished. Zero until finished.
    pub finished_at_epoch_millis: u64,

    /// Measured round duration. Zero until finished.
    pub duration_millis: u64,

    revision: u64,
}

impl RoundState {
    /// Create the pre-round state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            word_sequence: Vector::new(),
            current_index: 0,
            current_options: Vector::new(),
            score: 0,
            status: RoundStatus::NotStarted,
            last_outcome: None,
            started_at_epoch_millis: 0,
            finished_at_epoch_millis: 0,
            duration_millis: 0,
            revision: 0,
        }
    }

    /// The word currently being asked, or `None` once the sequence is
    /// exhausted (or before the first start).
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.word_sequence.get(self.current_index)
    }

    /// Number of words in this round.
    #[must_use]
    pub fn round_length(&self) -> usize {
        self.word_sequence.len()
    }

    /// Whether the round has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    /// Monotonic change counter; bumped on every engine mutation.
    ///
    /// A presentation layer can poll this instead of diffing snapshots.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

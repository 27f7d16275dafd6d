//! Round engine: lifecycle, scoring, and the observable surface.
//!
//! ## State machine
//!
//! `NotStarted -> Playing -> Finished`, with `start()` also serving as
//! restart from any status. All operations run to completion synchronously
//! on the caller's thread; the engine assumes at most one in-flight
//! mutating call at a time and holds no locks.
//!
//! ## Observation model
//!
//! The presentation layer reads [`RoundState`] snapshots (O(1) clone) and
//! polls [`RoundEngine::revision`] to detect changes; there is no callback
//! registry. Transient answer feedback is consumed via
//! [`RoundEngine::take_last_outcome`].

use std::sync::Arc;

use tracing::debug;

use crate::core::{
    AnswerOutcome, Clock, EngineError, EngineResult, QuizRng, RoundState, RoundStatus,
    SystemClock,
};
use crate::decoys;
use crate::leaderboard::{self, Leaderboard};
use crate::words::{Word, WordBank};

/// Tunable round parameters.
///
/// The defaults reproduce the classic game: ten words, four options,
/// +4 / -1 scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    /// Words per round (the bank may supply fewer).
    pub round_length: usize,
    /// Options shown per word, correct answer included.
    pub option_count: usize,
    /// Points awarded for a correct answer.
    pub points_correct: i32,
    /// Points deducted for a wrong answer.
    pub wrong_penalty: i32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_length: 10,
            option_count: 4,
            points_correct: 4,
            wrong_penalty: 1,
        }
    }
}

/// Builder for [`RoundEngine`].
///
/// ```
/// use spellquiz::engine::RoundEngine;
///
/// let mut engine = RoundEngine::builder()
///     .seed(42)
///     .round_length(5)
///     .build();
/// engine.start().unwrap();
/// assert_eq!(engine.state().round_length(), 5);
/// ```
pub struct RoundEngineBuilder {
    config: RoundConfig,
    bank: WordBank,
    seed: Option<u64>,
    clock: Arc<dyn Clock>,
}

impl Default for RoundEngineBuilder {
    fn default() -> Self {
        Self {
            config: RoundConfig::default(),
            bank: WordBank::builtin(),
            seed: None,
            clock: Arc::new(SystemClock),
        }
    }
}

impl RoundEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the built-in word bank.
    pub fn word_bank(mut self, bank: WordBank) -> Self {
        self.bank = bank;
        self
    }

    /// Words per round.
    pub fn round_length(mut self, length: usize) -> Self {
        self.config.round_length = length;
        self
    }

    /// Options per word, correct answer included.
    pub fn option_count(mut self, count: usize) -> Self {
        self.config.option_count = count;
        self
    }

    /// Points for a correct answer.
    pub fn points_correct(mut self, points: i32) -> Self {
        self.config.points_correct = points;
        self
    }

    /// Points deducted for a wrong answer.
    pub fn wrong_penalty(mut self, penalty: i32) -> Self {
        self.config.wrong_penalty = penalty;
        self
    }

    /// Seed for all engine randomness. Unseeded builds draw from OS
    /// entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the wall clock (tests use [`crate::core::ManualClock`]).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the engine. Configuration problems surface at
    /// [`RoundEngine::start`], not here.
    #[must_use]
    pub fn build(self) -> RoundEngine {
        let root = match self.seed {
            Some(seed) => QuizRng::new(seed),
            None => QuizRng::from_entropy(),
        };

        RoundEngine {
            config: self.config,
            bank: self.bank,
            word_rng: root.for_context("words"),
            decoy_rng: root.for_context("decoys"),
            board_rng: root.for_context("leaderboard"),
            clock: self.clock,
            state: RoundState::new(),
            player_name: String::new(),
            leaderboard: Leaderboard::default(),
            show_leaderboard: false,
        }
    }
}

/// The round engine: owns the single mutable [`RoundState`].
///
/// Word shuffling, decoy substitution, and leaderboard synthesis each draw
/// from an independent deterministic stream derived from one seed, so a
/// seeded engine replays identically.
pub struct RoundEngine {
    config: RoundConfig,
    bank: WordBank,
    word_rng: QuizRng,
    decoy_rng: QuizRng,
    board_rng: QuizRng,
    clock: Arc<dyn Clock>,
    state: RoundState,
    player_name: String,
    leaderboard: Leaderboard,
    show_leaderboard: bool,
}

impl RoundEngine {
    /// Engine with default configuration and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::builder().seed(seed).build()
    }

    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> RoundEngineBuilder {
        RoundEngineBuilder::new()
    }

    // === Lifecycle ===

    /// Start (or restart) a round.
    ///
    /// Picks the word sequence, resets index and score, records the start
    /// timestamp, and populates the first word's options. Restarting
    /// discards any prior round outcome.
    ///
    /// Fails with [`EngineError::Configuration`] when the bank is empty or
    /// the decoy request is infeasible for a picked word.
    pub fn start(&mut self) -> EngineResult<()> {
        let sequence = self
            .bank
            .pick_round_words(&mut self.word_rng, self.config.round_length)?;

        // Surface infeasible decoy requests now rather than mid-round.
        for word in &sequence {
            decoys::ensure_feasible(word, self.config.option_count)?;
        }

        debug!(words = sequence.len(), "starting round");

        self.state.word_sequence = sequence;
        self.state.current_index = 0;
        self.state.score = 0;
        self.state.status = RoundStatus::Playing;
        self.state.last_outcome = None;
        self.state.current_options.clear();
        self.state.started_at_epoch_millis = self.clock.now_millis();
        self.state.finished_at_epoch_millis = 0;
        self.state.duration_millis = 0;
        self.show_leaderboard = false;

        self.advance()?;
        self.state.bump_revision();
        Ok(())
    }

    /// Move to the word at `current_index`, or finish the round when the
    /// sequence is exhausted.
    fn advance(&mut self) -> EngineResult<()> {
        if self.state.current_index < self.state.word_sequence.len() {
            let word = self.state.word_sequence[self.state.current_index].clone();
            let options =
                decoys::generate_options(&mut self.decoy_rng, &word, self.config.option_count)?;
            self.state.current_options = options.into_iter().collect();
        } else {
            self.state.status = RoundStatus::Finished;
            self.state.finished_at_epoch_millis = self.clock.now_millis();
            self.state.duration_millis = self
                .state
                .finished_at_epoch_millis
                .saturating_sub(self.state.started_at_epoch_millis);
            debug!(
                score = self.state.score,
                duration_millis = self.state.duration_millis,
                "round finished"
            );
            self.submit_leaderboard();
        }
        Ok(())
    }

    /// Answer the current word.
    ///
    /// Case-insensitive comparison against the target. Correct answers add
    /// `points_correct`; wrong answers subtract `wrong_penalty` and
    /// eliminate the selected option. The round advances either way, so the
    /// elimination is only observable to a presentation layer re-rendering
    /// before the advance (and on the final word, whose options survive
    /// into the finished state).
    ///
    /// Fails with [`EngineError::InvalidState`] unless the round is
    /// Playing.
    pub fn answer(&mut self, selected: &str) -> EngineResult<AnswerOutcome> {
        if self.state.status != RoundStatus::Playing {
            return Err(EngineError::InvalidState {
                expected: RoundStatus::Playing,
                actual: self.state.status,
            });
        }

        let word = self
            .state
            .current_word()
            .cloned()
            .expect("playing round always has a current word");

        let outcome = if word.matches(selected) {
            self.state.score += self.config.points_correct;
            AnswerOutcome::Correct
        } else {
            self.state.score -= self.config.wrong_penalty;
            if let Some(pos) = self
                .state
                .current_options
                .iter()
                .position(|o| o.as_str() == selected)
            {
                self.state.current_options.remove(pos);
            }
            AnswerOutcome::Wrong
        };

        debug!(
            word = %word,
            ?outcome,
            score = self.state.score,
            "answer recorded"
        );

        self.state.last_outcome = Some(outcome);
        self.state.current_index += 1;
        self.advance()?;
        self.state.bump_revision();
        Ok(outcome)
    }

    /// Set the player's display name for leaderboard entries.
    ///
    /// A blank name falls back to
    /// [`crate::leaderboard::DEFAULT_PLAYER_NAME`] at build time.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
        self.state.bump_revision();
    }

    /// Regenerate the leaderboard from the current score and name, and
    /// make it visible.
    ///
    /// Every call draws a fresh synthetic sample; nothing is cached. The
    /// engine calls this itself when a round finishes; presentations call
    /// it again after name entry.
    pub fn submit_leaderboard(&mut self) {
        self.leaderboard = leaderboard::build_leaderboard(
            &mut self.board_rng,
            self.state.score,
            &self.player_name,
        );
        self.show_leaderboard = true;
        self.state.bump_revision();
    }

    // === Observable surface (read-only to presentation) ===

    /// The current round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// An owned snapshot of the round state. O(1) thanks to persistent
    /// structures; safe to hold across later mutations.
    #[must_use]
    pub fn snapshot(&self) -> RoundState {
        self.state.clone()
    }

    /// The word currently being asked.
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.state.current_word()
    }

    /// The most recently built leaderboard. Empty until a round finishes
    /// or [`RoundEngine::submit_leaderboard`] is called.
    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// The player's display name ("" until set).
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Whether the presentation should render the leaderboard.
    #[must_use]
    pub fn show_leaderboard(&self) -> bool {
        self.show_leaderboard
    }

    /// Change counter for presentation polling. Consuming transient
    /// feedback via [`RoundEngine::take_last_outcome`] does not count as a
    /// change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Consume the transient feedback for the most recent answer.
    ///
    /// Presentation layers read this once per frame (flash green/red);
    /// it is cleared on consumption and on the next `start()`.
    pub fn take_last_outcome(&mut self) -> Option<AnswerOutcome> {
        self.state.last_outcome.take()
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
}

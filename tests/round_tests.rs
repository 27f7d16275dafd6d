//! End-to-end round lifecycle tests.
//!
//! These drive the engine the way a presentation layer would: start a
//! round, read the observable state, forward selections, and render the
//! leaderboard once finished.

use std::sync::Arc;

use spellquiz::core::ManualClock;
use spellquiz::{AnswerOutcome, EngineError, RoundEngine, RoundStatus, WordBank};

/// The option matching the current word.
fn correct_option(engine: &RoundEngine) -> String {
    let word = engine.current_word().expect("round in progress").clone();
    engine
        .state()
        .current_options
        .iter()
        .find(|o| word.matches(o))
        .expect("options always contain the correct answer")
        .clone()
}

/// Some decoy option.
fn wrong_option(engine: &RoundEngine) -> String {
    let word = engine.current_word().expect("round in progress").clone();
    engine
        .state()
        .current_options
        .iter()
        .find(|o| !word.matches(o))
        .expect("options always contain a decoy")
        .clone()
}

/// Score after N answers equals `4*correct - wrong`.
#[test]
fn test_score_formula_over_mixed_answers() {
    let mut engine = RoundEngine::new(42);
    engine.start().unwrap();

    let mut correct = 0i32;
    let mut wrong = 0i32;

    while engine.state().status == RoundStatus::Playing {
        // Alternate correct and wrong picks.
        if engine.state().current_index % 2 == 0 {
            let pick = correct_option(&engine);
            assert_eq!(engine.answer(&pick).unwrap(), AnswerOutcome::Correct);
            correct += 1;
        } else {
            let pick = wrong_option(&engine);
            assert_eq!(engine.answer(&pick).unwrap(), AnswerOutcome::Wrong);
            wrong += 1;
        }
    }

    assert_eq!(correct + wrong, 10);
    assert_eq!(engine.state().score, 4 * correct - wrong);
}

/// An all-wrong round goes negative; there is no lower clamp.
#[test]
fn test_all_wrong_round_is_negative() {
    let mut engine = RoundEngine::new(42);
    engine.start().unwrap();

    while engine.state().status == RoundStatus::Playing {
        let pick = wrong_option(&engine);
        engine.answer(&pick).unwrap();
    }

    assert_eq!(engine.state().score, -10);

    // The player entry still carries the exact (negative) score.
    let player = engine
        .leaderboard()
        .entries()
        .iter()
        .find(|e| e.name == "You")
        .unwrap();
    assert_eq!(player.score, -10);
}

/// Case-insensitive answers count as correct.
#[test]
fn test_uppercase_answer_is_correct() {
    let mut engine = RoundEngine::builder()
        .seed(42)
        .word_bank(WordBank::new(["Cat"]).unwrap())
        .build();
    engine.start().unwrap();

    assert_eq!(engine.current_word().unwrap().as_str(), "cat");
    assert_eq!(engine.answer("CAT").unwrap(), AnswerOutcome::Correct);
    assert_eq!(engine.state().score, 4);
}

/// A bank smaller than the requested round length shortens the round
/// instead of failing.
#[test]
fn test_two_word_bank_runs_two_word_round() {
    let mut engine = RoundEngine::builder()
        .seed(42)
        .word_bank(WordBank::new(["cat", "dog"]).unwrap())
        .build();
    engine.start().unwrap();

    assert_eq!(engine.state().round_length(), 2);

    let pick = correct_option(&engine);
    engine.answer(&pick).unwrap();
    let pick = correct_option(&engine);
    engine.answer(&pick).unwrap();

    assert_eq!(engine.state().status, RoundStatus::Finished);
    assert_eq!(engine.state().score, 8);
}

/// No answer call succeeds once finished; restart re-enters Playing.
#[test]
fn test_finished_rejects_answers_until_restart() {
    let mut engine = RoundEngine::builder()
        .seed(42)
        .word_bank(WordBank::new(["cat"]).unwrap())
        .build();
    engine.start().unwrap();

    let pick = correct_option(&engine);
    engine.answer(&pick).unwrap();
    assert_eq!(engine.state().status, RoundStatus::Finished);

    assert!(matches!(
        engine.answer("cat"),
        Err(EngineError::InvalidState { .. })
    ));

    engine.start().unwrap();
    assert_eq!(engine.state().status, RoundStatus::Playing);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().current_index, 0);
    assert!(engine.answer("cat").is_ok());
}

/// Restarting after a finished round resets score and index regardless of
/// the prior outcome, and picks a fresh word order.
#[test]
fn test_restart_after_full_round() {
    let mut engine = RoundEngine::new(42);
    engine.start().unwrap();
    let first_sequence = engine.state().word_sequence.clone();

    while engine.state().status == RoundStatus::Playing {
        let pick = correct_option(&engine);
        engine.answer(&pick).unwrap();
    }
    assert_eq!(engine.state().score, 40);

    engine.start().unwrap();
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().current_index, 0);

    // Fresh shuffle from an advancing stream; order almost surely differs.
    assert_ne!(engine.state().word_sequence, first_sequence);
}

/// Round duration is measured from the injected clock.
#[test]
fn test_round_duration() {
    let clock = Arc::new(ManualClock::new(7_000));
    let mut engine = RoundEngine::builder()
        .seed(1)
        .word_bank(WordBank::new(["cat", "dog", "owl"]).unwrap())
        .clock(clock.clone())
        .build();

    engine.start().unwrap();

    clock.advance(1_500);
    while engine.state().status == RoundStatus::Playing {
        let pick = correct_option(&engine);
        engine.answer(&pick).unwrap();
    }

    assert_eq!(engine.state().started_at_epoch_millis, 7_000);
    assert_eq!(engine.state().finished_at_epoch_millis, 8_500);
    assert_eq!(engine.state().duration_millis, 1_500);
}

/// A snapshot taken mid-round is unaffected by later mutations.
#[test]
fn test_snapshot_isolation() {
    let mut engine = RoundEngine::new(42);
    engine.start().unwrap();

    let pick = correct_option(&engine);
    engine.answer(&pick).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, 4);
    assert_eq!(snapshot.current_index, 1);

    while engine.state().status == RoundStatus::Playing {
        let pick = wrong_option(&engine);
        engine.answer(&pick).unwrap();
    }

    assert_eq!(snapshot.score, 4);
    assert_eq!(snapshot.current_index, 1);
    assert_eq!(snapshot.status, RoundStatus::Playing);
}

/// Round state snapshots survive a serde round-trip.
#[test]
fn test_state_serde_round_trip() {
    let mut engine = RoundEngine::new(42);
    engine.start().unwrap();
    let pick = correct_option(&engine);
    engine.answer(&pick).unwrap();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: spellquiz::RoundState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.score, snapshot.score);
    assert_eq!(restored.current_index, snapshot.current_index);
    assert_eq!(restored.status, snapshot.status);
    assert_eq!(restored.word_sequence, snapshot.word_sequence);
    assert_eq!(restored.current_options, snapshot.current_options);
}

/// Two engines with the same seed play back identical rounds.
#[test]
fn test_seeded_replay() {
    let mut a = RoundEngine::new(99);
    let mut b = RoundEngine::new(99);

    a.start().unwrap();
    b.start().unwrap();

    assert_eq!(a.state().word_sequence, b.state().word_sequence);

    while a.state().status == RoundStatus::Playing {
        assert_eq!(a.state().current_options, b.state().current_options);
        let pick = a.state().current_options[0].clone();
        let oa = a.answer(&pick).unwrap();
        let ob = b.answer(&pick).unwrap();
        assert_eq!(oa, ob);
    }

    assert_eq!(a.state().score, b.state().score);
    assert_eq!(a.leaderboard(), b.leaderboard());
}

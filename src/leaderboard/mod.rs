//! Synthetic leaderboard generation.
//!
//! There is no persisted ranking: every submission draws a fresh sample of
//! five synthetic rivals and ranks the player's score among them. Scores
//! are drawn uniformly from a band derived from the nominal maximum round
//! score (10 words x 4 points), names are three random uppercase letters.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::QuizRng;

/// Nominal maximum round score (10 words, 4 points each).
pub const MAX_POSSIBLE_SCORE: i32 = 40;

/// Synthetic rivals per leaderboard.
pub const SYNTHETIC_ENTRIES: usize = 5;

/// Lowest synthetic score: `floor(0.15 * MAX) + 10`.
pub const MIN_SYNTHETIC_SCORE: i32 = (MAX_POSSIBLE_SCORE as f64 * 0.15) as i32 + 10;

/// Highest synthetic score: `floor(0.85 * MAX)`.
pub const MAX_SYNTHETIC_SCORE: i32 = (MAX_POSSIBLE_SCORE as f64 * 0.85) as i32;

/// Name used when the player has not entered one.
pub const DEFAULT_PLAYER_NAME: &str = "You";

/// One ranked score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Display name; three uppercase letters for synthetic rivals.
    pub name: String,
    /// The entry's score.
    pub score: i32,
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// A ranked list of exactly six entries: five synthetic rivals plus the
/// player, sorted by score descending. Ties keep generation order, so the
/// player sorts below a rival with an equal score generated before them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: SmallVec<[ScoreEntry; SYNTHETIC_ENTRIES + 1]>,
}

impl Leaderboard {
    /// The ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board holds no entries (only before the first build).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based rank of the first entry with the given name.
    #[must_use]
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

/// A random three-letter uppercase name.
fn random_name(rng: &mut QuizRng) -> String {
    (0..3)
        .map(|_| {
            let offset = rng.gen_range_usize(0..26) as u8;
            (b'A' + offset) as char
        })
        .collect()
}

/// Build a fresh leaderboard around the player's score.
///
/// Five synthetic entries with scores uniform in
/// `[MIN_SYNTHETIC_SCORE, MAX_SYNTHETIC_SCORE]`, plus the player entry
/// (named [`DEFAULT_PLAYER_NAME`] when `player_name` is blank), stably
/// sorted by score descending. Regenerated on every call; never cached.
pub fn build_leaderboard(
    rng: &mut QuizRng,
    player_score: i32,
    player_name: &str,
) -> Leaderboard {
    let mut entries: SmallVec<[ScoreEntry; SYNTHETIC_ENTRIES + 1]> = SmallVec::new();

    for _ in 0..SYNTHETIC_ENTRIES {
        entries.push(ScoreEntry {
            name: random_name(rng),
            score: rng.gen_range_inclusive(MIN_SYNTHETIC_SCORE..=MAX_SYNTHETIC_SCORE),
        });
    }

    let name = player_name.trim();
    entries.push(ScoreEntry {
        name: if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        },
        score: player_score,
    });

    // Slice sort is stable: ties keep generation order.
    entries.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(player_score, "built leaderboard");
    Leaderboard { entries }
}

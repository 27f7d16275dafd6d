//! Word bank: the pool of target words for a round.
//!
//! The built-in bank carries ten commonly misspelled English words. Custom
//! banks can be supplied for testing or themed rounds; entries are
//! lowercased and deduplicated at construction so a round can never contain
//! the same word twice.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, QuizRng};

/// Commonly misspelled words used by the default bank.
const BUILTIN_WORDS: &[&str] = &[
    "accommodate",
    "rhythm",
    "conscious",
    "embarrass",
    "parallel",
    "liaison",
    "occurrence",
    "recommend",
    "supersede",
    "noticeable",
];

/// A target word: non-empty, stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word(String);

impl Word {
    /// Create a word, lowercasing the input.
    ///
    /// Fails with [`EngineError::Configuration`] on empty (or all-whitespace)
    /// input.
    pub fn new(raw: impl AsRef<str>) -> EngineResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EngineError::Configuration(
                "words must be non-empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the word.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Case-insensitive comparison against a candidate answer.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate.trim())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The pool of candidate words rounds draw from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// The default ten-word bank.
    #[must_use]
    pub fn builtin() -> Self {
        let words = BUILTIN_WORDS
            .iter()
            .map(|w| Word(w.to_string()))
            .collect();
        Self { words }
    }

    /// Build a bank from custom entries.
    ///
    /// Entries are lowercased and deduplicated (first occurrence wins).
    /// Fails if any entry is empty. An empty iterator yields an empty bank,
    /// which is rejected later when a round is started.
    pub fn new<I, S>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = Vec::new();
        for entry in entries {
            let word = Word::new(entry)?;
            if !words.contains(&word) {
                words.push(word);
            }
        }
        Ok(Self { words })
    }

    /// Number of words in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in the bank, in insertion order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Select up to `pool_size` words without replacement, uniformly
    /// shuffled.
    ///
    /// A bank smaller than `pool_size` yields all of its words rather than
    /// failing; the round is just shorter. An empty bank (or a zero
    /// `pool_size`) is a fatal configuration error since a round needs at
    /// least one word.
    pub fn pick_round_words(
        &self,
        rng: &mut QuizRng,
        pool_size: usize,
    ) -> EngineResult<Vector<Word>> {
        if self.words.is_empty() {
            return Err(EngineError::Configuration(
                "word bank is empty".to_string(),
            ));
        }
        if pool_size == 0 {
            return Err(EngineError::Configuration(
                "round length must be at least 1".to_string(),
            ));
        }

        let mut pool = self.words.clone();
        rng.shuffle(&mut pool);
        pool.truncate(pool_size);
        Ok(pool.into_iter().collect())
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Decoy generation: plausible misspellings of a target word.
//!
//! A decoy is the target word with exactly one character position replaced
//! by a different lowercase letter. The generator keeps drawing variants
//! until the requested number of distinct options (target included) is
//! collected, then returns them in random order.
//!
//! Feasibility is checked up front: a word of length `L` reaches at most
//! `26 * L` single-substitution variants, so an impossible request fails
//! with a configuration error instead of looping forever.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{EngineError, EngineResult, QuizRng};
use crate::words::Word;

/// Substitution alphabet for decoy characters.
const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of distinct single-substitution variants reachable from `word`.
///
/// Each position contributes one variant per alphabet letter that differs
/// from the character already there: 25 for a lowercase letter, 26 for
/// anything else (digits, hyphens). Variants from different (position,
/// letter) pairs are always distinct strings.
fn reachable_variants(word: &Word) -> usize {
    word.as_str()
        .chars()
        .map(|c| if ALPHABET.contains(&c) { 25 } else { 26 })
        .sum()
}

/// Produce one variant of `chars` with a single random substitution.
fn substitute_one(rng: &mut QuizRng, chars: &[char]) -> String {
    let pos = rng.gen_range_usize(0..chars.len());
    let original = chars[pos];

    // Alphabet minus the original character; never empty, even for
    // length-1 words or non-alphabetic characters.
    let candidates: Vec<char> = ALPHABET
        .iter()
        .copied()
        .filter(|&c| c != original)
        .collect();
    let replacement = *rng
        .choose(&candidates)
        .unwrap_or(&ALPHABET[0]);

    let mut variant: Vec<char> = chars.to_vec();
    variant[pos] = replacement;
    variant.into_iter().collect()
}

/// Check that `correct` can yield `count` distinct options.
///
/// Fails with [`EngineError::Configuration`] when `count` is zero or when
/// the word cannot produce `count - 1` distinct decoys. Called by the
/// engine at round start so infeasible configurations surface before any
/// answer is taken.
pub fn ensure_feasible(correct: &Word, count: usize) -> EngineResult<()> {
    if count == 0 {
        return Err(EngineError::Configuration(
            "option count must be at least 1".to_string(),
        ));
    }

    let decoys_needed = count - 1;
    let reachable = reachable_variants(correct);
    if decoys_needed > reachable {
        return Err(EngineError::Configuration(format!(
            "word '{correct}' can produce at most {reachable} decoys, {decoys_needed} requested"
        )));
    }
    Ok(())
}

/// Generate `count` distinct answer options for `correct`.
///
/// Exactly one returned option equals the target word; the rest are decoys.
/// Options come back shuffled so the correct answer's position is uniform.
///
/// Same failure modes as [`ensure_feasible`].
pub fn generate_options(
    rng: &mut QuizRng,
    correct: &Word,
    count: usize,
) -> EngineResult<Vec<String>> {
    ensure_feasible(correct, count)?;

    let chars: Vec<char> = correct.as_str().chars().collect();

    let mut options: Vec<String> = Vec::with_capacity(count);
    let mut seen: FxHashSet<String> = FxHashSet::default();

    options.push(correct.as_str().to_string());
    seen.insert(correct.as_str().to_string());

    // Rejection sampling over a feasible space; terminates with
    // probability 1.
    while options.len() < count {
        let variant = substitute_one(rng, &chars);
        if seen.insert(variant.clone()) {
            options.push(variant);
        }
    }

    rng.shuffle(&mut options);
    trace!(word = %correct, count, "generated answer options");
    Ok(options)
}

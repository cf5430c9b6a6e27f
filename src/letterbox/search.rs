use serde::Deserialize;

use super::puzzle::Puzzle;
use super::solutions::{Solution, SolutionStore};

/// Bounds that keep the backtracking search tractable. The defaults are the
/// values the solver normally runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Chains are never extended past this many words.
    pub max_chain_length: usize,
    /// Once this many chains of some length are stored, branches that would
    /// produce more chains of that length are cut off.
    pub max_solutions_per_length: usize,
    /// Abandon a branch as soon as a candidate fails to add a new letter.
    /// Candidates are ordered longest-first, so this assumes no shorter
    /// candidate further down the list would add one either. That assumption
    /// can be wrong; it trades completeness for a much smaller search space.
    pub only_increase_coverage: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_chain_length: 4,
            max_solutions_per_length: 10,
            only_increase_coverage: true,
        }
    }
}

/// Runs the full search: one backtracking pass rooted at every letter of
/// every side, in side order. Letters that start no feasible word contribute
/// nothing. The result is deterministic for fixed inputs and limits.
pub fn solve(puzzle: &Puzzle, limits: &SearchLimits) -> SolutionStore {
    let mut store = SolutionStore::new();
    for side in puzzle.sides() {
        for &letter in side {
            extend_chain(puzzle, limits, &mut store, &Solution::empty(), letter);
        }
    }
    store
}

/// Tries to grow `current` by one word starting at `next_letter`, recursing
/// on every viable extension. Completed chains go into `store`; the bounds
/// and pruning rules below are the only ways a branch ends early.
fn extend_chain(
    puzzle: &Puzzle,
    limits: &SearchLimits,
    store: &mut SolutionStore,
    current: &Solution,
    next_letter: char,
) {
    if current.length() >= limits.max_chain_length {
        return;
    }
    // Enough chains of the length we are about to produce already exist.
    // Earlier sibling branches fill these buckets, so this cutoff depends on
    // visiting roots and candidates in their fixed order.
    if store.count_at_length(current.length() + 1) >= limits.max_solutions_per_length {
        return;
    }

    for candidate in puzzle.candidates_from(next_letter) {
        let coverage = current.coverage().union(&candidate.letters);
        if limits.only_increase_coverage && coverage.len() <= current.coverage().len() {
            // Give up on the whole candidate list, not just this word: the
            // remaining candidates are no longer than this one.
            return;
        }
        let extended = current.extended(&candidate.word, coverage);
        if store.any_word_used_at_length(extended.length(), extended.words()) {
            continue;
        }
        if extended.solves(puzzle.alphabet()) {
            store.insert(extended);
            return;
        }
        extend_chain(puzzle, limits, store, &extended, candidate.last_letter);
    }
}

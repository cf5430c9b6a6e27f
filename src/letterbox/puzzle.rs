use itertools::Itertools;
use thiserror::Error;

use super::candidates::{Candidate, CandidateIndex};
use super::letter_set::LetterSet;
use super::trie::WordTrie;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// The sides must be pairwise disjoint in letters.
    #[error("letter '{letter}' appears on more than one side")]
    OverlappingSides { letter: char },
    #[error("a puzzle needs at least two sides")]
    TooFewSides,
    /// Side letters must fit the letter-set representation; anything wider
    /// would silently escape the alphabet and disjointness checks.
    #[error("letter '{letter}' cannot be used as a puzzle letter")]
    UnsupportedLetter { letter: char },
}

/// One puzzle instance: the sides, the alphabet they span, and the word
/// index built from the dictionary for exactly this set of letters.
/// Everything here is immutable once `new` returns.
#[derive(Debug)]
pub struct Puzzle {
    sides: Vec<Vec<char>>,
    alphabet: LetterSet,
    candidates: CandidateIndex,
}

impl Puzzle {
    /// Filters the dictionary down to feasible words and precomputes the
    /// per-starting-letter candidate lists. Fails only on malformed sides;
    /// unusable dictionary entries are dropped silently.
    pub fn new<'a, I>(dictionary: I, sides: Vec<Vec<char>>) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if sides.len() < 2 {
            return Err(PuzzleError::TooFewSides);
        }
        if let Some(&letter) = sides.iter().flatten().find(|&&l| !LetterSet::tracks(l)) {
            return Err(PuzzleError::UnsupportedLetter { letter });
        }
        for (a, b) in sides.iter().tuple_combinations() {
            let b_set: LetterSet = b.iter().copied().collect();
            if let Some(&letter) = a.iter().find(|&&l| b_set.contains(l)) {
                return Err(PuzzleError::OverlappingSides { letter });
            }
        }

        let alphabet: LetterSet = sides.iter().flatten().copied().collect();
        let trie = WordTrie::build(dictionary, &alphabet);
        let candidates = CandidateIndex::build(&trie, &sides);
        Ok(Self {
            sides,
            alphabet,
            candidates,
        })
    }

    pub fn sides(&self) -> &[Vec<char>] {
        &self.sides
    }

    /// Every distinct letter across all sides.
    pub fn alphabet(&self) -> &LetterSet {
        &self.alphabet
    }

    /// Playable words starting with `letter`, longest first.
    pub fn candidates_from(&self, letter: char) -> &[Candidate] {
        self.candidates.words_from(letter)
    }
}

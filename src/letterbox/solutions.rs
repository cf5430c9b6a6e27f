use std::collections::BTreeMap;

use fxhash::FxHashSet;

use super::letter_set::LetterSet;

/// A possibly partial word chain. Adjacent words always link up (the search
/// only ever extends a chain from the previous word's last letter), so the
/// chaining invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    words: Vec<String>,
    coverage: LetterSet,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    /// How many words in this chain.
    pub fn length(&self) -> usize {
        self.words.len()
    }

    /// Distinct letters used across the whole chain.
    pub fn coverage(&self) -> &LetterSet {
        &self.coverage
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// A new chain with `word` appended and `coverage` as the updated letter
    /// coverage (computed by the caller, which already has the word's set).
    pub fn extended(&self, word: &str, coverage: LetterSet) -> Self {
        let mut words = self.words.clone();
        words.push(word.to_string());
        Self { words, coverage }
    }

    /// Whether this chain covers every puzzle letter.
    pub fn solves(&self, alphabet: &LetterSet) -> bool {
        self.coverage == *alphabet
    }
}

/// Completed solutions bucketed by chain length, plus the per-length record
/// of every word consumed by a completed solution of that length. The word
/// record only ever grows; it backs the cross-solution deduplication rule.
#[derive(Debug, Default)]
pub struct SolutionStore {
    by_length: BTreeMap<usize, Vec<Solution>>,
    used_words: BTreeMap<usize, FxHashSet<String>>,
}

impl SolutionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, solution: Solution) {
        let length = solution.length();
        self.used_words
            .entry(length)
            .or_default()
            .extend(solution.words().iter().cloned());
        self.by_length.entry(length).or_default().push(solution);
    }

    /// How many completed solutions of exactly `length` words.
    pub fn count_at_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// Whether any word of `words` already appears in a completed solution
    /// of the given chain length.
    pub fn any_word_used_at_length(&self, length: usize, words: &[String]) -> bool {
        self.used_words
            .get(&length)
            .map_or(false, |used| words.iter().any(|w| used.contains(w)))
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    pub fn total(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    /// Solutions grouped by length, shortest chains first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Solution])> {
        self.by_length.iter().map(|(&len, sols)| (len, sols.as_slice()))
    }

    pub fn at_length(&self, length: usize) -> &[Solution] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(words: &[&str]) -> Solution {
        let mut s = Solution::empty();
        for word in words {
            let coverage = s.coverage().union(&LetterSet::from_word(word));
            s = s.extended(word, coverage);
        }
        s
    }

    #[test]
    fn test_extended_tracks_words_and_coverage() {
        let s = solution(&["cat", "tao"]);
        assert_eq!(s.length(), 2);
        assert_eq!(s.words(), &["cat".to_string(), "tao".to_string()]);
        assert_eq!(*s.coverage(), LetterSet::from_word("cato"));
        assert!(s.solves(&LetterSet::from_word("cato")));
        assert!(!s.solves(&LetterSet::from_word("catos")));
    }

    #[test]
    fn test_store_buckets_by_length() {
        let mut store = SolutionStore::new();
        assert!(store.is_empty());
        store.insert(solution(&["taco"]));
        store.insert(solution(&["cat", "tao"]));
        store.insert(solution(&["cot", "tab"]));
        assert_eq!(store.count_at_length(1), 1);
        assert_eq!(store.count_at_length(2), 2);
        assert_eq!(store.count_at_length(3), 0);
        assert_eq!(store.total(), 3);

        let lengths: Vec<usize> = store.iter().map(|(len, _)| len).collect();
        assert_eq!(lengths, vec![1, 2]);
    }

    #[test]
    fn test_used_words_accumulate_per_length() {
        let mut store = SolutionStore::new();
        store.insert(solution(&["cat", "tao"]));
        store.insert(solution(&["big", "gift"]));

        let probe = |w: &str| vec![w.to_string()];
        assert!(store.any_word_used_at_length(2, &probe("cat")));
        assert!(store.any_word_used_at_length(2, &probe("gift")));
        assert!(!store.any_word_used_at_length(2, &probe("dog")));
        // a different bucket knows nothing about length-2 words
        assert!(!store.any_word_used_at_length(1, &probe("cat")));
    }
}

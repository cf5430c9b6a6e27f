use fxhash::FxHashMap;

use super::letter_set::LetterSet;
use super::trie::{NodeId, WordTrie, ROOT};
use super::MIN_WORD_LEN;

/// A complete dictionary word reachable from some starting letter under the
/// side-alternation rule, with the pieces the search needs cached up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    /// Final letter, i.e. where the next word in a chain must start
    pub last_letter: char,
    /// Distinct letters of the word
    pub letters: LetterSet,
}

impl Candidate {
    fn new(word: &str) -> Option<Self> {
        let last_letter = word.chars().last()?;
        Some(Self {
            word: word.to_string(),
            last_letter,
            letters: LetterSet::from_word(word),
        })
    }
}

/// Per-starting-letter lists of playable words, each list sorted by
/// descending word length. Discovery runs once per puzzle; its result
/// depends only on the starting letter, never on search history.
#[derive(Debug, Default)]
pub struct CandidateIndex {
    by_letter: FxHashMap<char, Vec<Candidate>>,
}

impl CandidateIndex {
    /// Runs the discovery traversal from every letter of every side.
    pub fn build(trie: &WordTrie, sides: &[Vec<char>]) -> Self {
        let mut by_letter = FxHashMap::default();
        for (side_index, side) in sides.iter().enumerate() {
            for &letter in side {
                let root = match trie.child(ROOT, letter) {
                    Some(node) => node,
                    // No feasible word starts here; searches rooted at this
                    // letter simply find nothing.
                    None => continue,
                };
                let mut found = Vec::new();
                let mut prefix = String::new();
                prefix.push(letter);
                find_words(trie, sides, root, side_index, &mut prefix, &mut found);
                if found.is_empty() {
                    continue;
                }
                // Greedy search order: longest continuations first. The sort
                // is stable, so equal lengths keep discovery order.
                found.sort_by_key(|c| std::cmp::Reverse(c.word.chars().count()));
                by_letter.insert(letter, found);
            }
        }
        Self { by_letter }
    }

    /// Candidates startable from `letter`, longest first. Empty when no
    /// feasible word starts there.
    pub fn words_from(&self, letter: char) -> &[Candidate] {
        self.by_letter.get(&letter).map_or(&[], Vec::as_slice)
    }
}

/// Exhaustive depth-first walk over side-alternating trie paths. The side
/// restriction applies per step: the next letter may come from any side other
/// than the one that supplied the previous letter. Complete words of length
/// >= MIN_WORD_LEN are recorded after all their extensions, matching the
/// discovery order the stable sort above ties back to.
fn find_words(
    trie: &WordTrie,
    sides: &[Vec<char>],
    node: NodeId,
    from_side: usize,
    prefix: &mut String,
    found: &mut Vec<Candidate>,
) {
    for (side_index, side) in sides.iter().enumerate() {
        if side_index == from_side {
            continue;
        }
        for &letter in side {
            let child = match trie.child(node, letter) {
                Some(child) => child,
                None => continue,
            };
            prefix.push(letter);
            find_words(trie, sides, child, side_index, prefix, found);
            prefix.pop();
        }
    }
    if trie.is_terminal(node) && prefix.chars().count() >= MIN_WORD_LEN {
        if let Some(candidate) = Candidate::new(prefix) {
            found.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sides(groups: &[&str]) -> Vec<Vec<char>> {
        groups.iter().map(|g| g.chars().collect()).collect()
    }

    fn index(dictionary: &[&str], groups: &[&str]) -> CandidateIndex {
        let s = sides(groups);
        let alphabet: LetterSet = s.iter().flatten().copied().collect();
        let trie = WordTrie::build(dictionary.iter().copied(), &alphabet);
        CandidateIndex::build(&trie, &s)
    }

    fn words(index: &CandidateIndex, letter: char) -> Vec<&str> {
        index
            .words_from(letter)
            .iter()
            .map(|c| c.word.as_str())
            .collect()
    }

    #[test]
    fn test_finds_side_alternating_word() {
        // c on side 0, a on side 1, t on side 2: every step changes side
        let index = index(&["cat", "tab"], &["cb", "ai", "tg"]);
        assert_eq!(words(&index, 'c'), vec!["cat"]);
        assert_eq!(words(&index, 't'), vec!["tab"]);
    }

    #[test]
    fn test_rejects_same_side_adjacency() {
        // 'c' and 'a' share a side, so "cat" cannot be traced
        let index = index(&["cat"], &["ca", "tb", "og"]);
        assert!(words(&index, 'c').is_empty());
    }

    #[test]
    fn test_same_side_letters_may_reappear_nonadjacent() {
        // t-a-t revisits side 0 with one side-1 letter in between
        let index = index(&["tat"], &["to", "ab"]);
        assert_eq!(words(&index, 't'), vec!["tat"]);
    }

    #[rstest]
    #[case("at")]
    #[case("ta")]
    fn test_short_words_are_not_candidates(#[case] word: &str) {
        let index = index(&[word], &["to", "ab"]);
        for letter in ['a', 't'] {
            assert!(words(&index, letter).is_empty());
        }
    }

    #[test]
    fn test_candidates_sorted_longest_first() {
        let index = index(&["tab", "tabo", "tao"], &["t", "a", "b", "o"]);
        assert_eq!(words(&index, 't'), vec!["tabo", "tab", "tao"]);
    }

    #[test]
    fn test_candidate_caches_last_letter_and_coverage() {
        let index = index(&["cat"], &["cb", "ai", "tg"]);
        let candidate = &index.words_from('c')[0];
        assert_eq!(candidate.last_letter, 't');
        assert_eq!(candidate.letters, LetterSet::from_word("cat"));
    }

    #[test]
    fn test_absent_starting_letter_is_empty() {
        let index = index(&["cat"], &["cb", "ai", "tg"]);
        assert!(words(&index, 'g').is_empty());
        assert!(words(&index, 'q').is_empty());
    }
}

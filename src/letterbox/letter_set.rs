#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct LetterSet {
    // bit is one if letter is in it
    bits: [u128; 2],
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { bits: [0; 2] }
    }

    pub fn from_word(word: &str) -> Self {
        word.chars().collect()
    }

    /// Whether the set can represent this letter at all. Callers that accept
    /// arbitrary input (side definitions, raw dictionary entries) must check
    /// this or test letters individually with `contains`; `insert` ignores
    /// untrackable letters.
    pub fn tracks(letter: char) -> bool {
        (letter as usize) < 256
    }

    pub fn contains(&self, letter: char) -> bool {
        let i = letter as usize;
        if i >= 256 {
            return false;
        }
        (self.bits[i / 128] & (1 << (i % 128))) != 0
    }

    pub fn insert(&mut self, letter: char) {
        let i = letter as usize;
        if i < 256 {
            self.bits[i / 128] |= 1 << (i % 128)
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: [self.bits[0] | other.bits[0], self.bits[1] | other.bits[1]],
        }
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.union(other) == *other
    }

    /// Number of letters in the set
    pub fn len(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..=255).filter_map(move |i| {
            let c = i as char;
            self.contains(c).then(|| c)
        })
    }
}

impl std::iter::FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut tmp = Self::empty();
        iter.into_iter().for_each(|l| tmp.insert(l));
        tmp
    }
}

use std::fmt;

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for l in self.iter() {
            write!(f, "{}", l)?;
        }
        write!(f, "}}")
    }
}

pub mod candidates;
pub mod letter_set;
pub mod puzzle;
pub mod search;
pub mod solutions;
pub mod trie;

/// Words shorter than this never count, no matter how they trace the sides.
pub const MIN_WORD_LEN: usize = 3;

/// Dictionary entries containing this character are excluded by puzzle rules.
pub const WORD_SEPARATOR: char = '-';

pub use self::puzzle::{Puzzle, PuzzleError};
pub use self::search::{solve, SearchLimits};
pub use self::solutions::{Solution, SolutionStore};

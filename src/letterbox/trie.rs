use super::letter_set::LetterSet;
use super::WORD_SEPARATOR;

/// Index of a node inside the trie arena. The root is always index 0.
pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct TrieNode {
    /// Outgoing edges, kept sorted by letter for binary search
    children: Vec<(char, NodeId)>,
    terminal: bool,
}

/// Prefix tree over the puzzle-feasible part of the dictionary. Nodes are
/// arena-allocated and referenced by index rather than owned pointers.
#[derive(Debug)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
}

impl WordTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Builds the trie from a dictionary, keeping only words that contain no
    /// separator character and draw all their letters from `alphabet`.
    /// Rejected entries are dropped silently.
    pub fn build<'a, I>(dictionary: I, alphabet: &LetterSet) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut trie = Self::new();
        for word in dictionary {
            if word.contains(WORD_SEPARATOR) {
                // Not allowed by the puzzle rules.
                continue;
            }
            // Checked letter by letter: a set built from the word would drop
            // characters the bitset cannot track and pass vacuously.
            if !word.chars().all(|letter| alphabet.contains(letter)) {
                continue;
            }
            trie.insert(word);
        }
        trie
    }

    /// Adds a word by walking/creating one node per letter and marking the
    /// final node terminal. Empty input is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = ROOT;
        for letter in word.chars() {
            node = match self.nodes[node]
                .children
                .binary_search_by_key(&letter, |&(l, _)| l)
            {
                Ok(pos) => self.nodes[node].children[pos].1,
                Err(pos) => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(pos, (letter, child));
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// The child reached from `node` along `letter`, if the edge exists.
    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.nodes[node]
            .children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|pos| self.nodes[node].children[pos].1)
    }

    /// Whether a complete dictionary word ends at `node`.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn walk(&self, word: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for letter in word.chars() {
            node = self.child(node, letter)?;
        }
        Some(node)
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains_word(&self, word: &str) -> bool {
        !word.is_empty() && self.walk(word).map_or(false, |n| self.is_terminal(n))
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

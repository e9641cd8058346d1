//! Prefix trie for exact, case-insensitive word membership.

use std::collections::{HashMap, VecDeque};

/// One trie node: children keyed by character, plus a terminal marker for
/// nodes that end a complete word.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// A case-insensitive prefix trie.
///
/// Lookups and insertions case-fold their argument and walk one node per
/// character, so both are O(word length) regardless of vocabulary size.
/// The empty string is never a word.
///
/// # Examples
///
/// ```
/// use quill::spelling::Trie;
///
/// let mut trie = Trie::new();
/// trie.add_word("Apple");
/// assert!(trie.is_word("apple"));
/// assert!(trie.is_word("APPLE"));
/// assert!(!trie.is_word("app"));
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Insert a word, case-folded. Empty strings are ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in word.to_lowercase().chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
    }

    /// Test membership, case-folded.
    ///
    /// True only if the full path exists and ends on a terminal node.
    pub fn is_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for c in word.to_lowercase().chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Count distinct words by visiting every node breadth-first and
    /// tallying the terminal ones.
    pub fn unique_words(&self) -> usize {
        let mut count = 0;
        let mut queue = VecDeque::new();
        queue.push_back(&self.root);
        while let Some(node) = queue.pop_front() {
            if node.terminal {
                count += 1;
            }
            queue.extend(node.children.values());
        }
        count
    }
}

//! Prefix trie over dictionary words.
//!
//! The search prunes on "does any word start with this prefix" after every
//! single-letter extension, so both queries must cost O(len) regardless of
//! dictionary size. Each node maps a character to a child and carries a
//! terminal marker for complete words.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// A set of words queryable by prefix.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word. Duplicates are a no-op, and the empty string is
    /// rejected: marking the root terminal would make every traversal start
    /// look like a completed word.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Whether some stored word starts with `prefix` (`prefix` itself
    /// included).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.len > 0 && self.walk(prefix).is_some()
    }

    /// Whether `word` was inserted verbatim.
    pub fn is_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.terminal)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in s.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

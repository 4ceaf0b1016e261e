//! Boggle solver: trie-pruned depth-first search over board paths.
//!
//! Every cell starts an independent traversal. A path grows one adjacent,
//! unvisited cell at a time, and a branch is abandoned the moment its
//! letters stop being a dictionary prefix, so the search never explores
//! past a dead prefix. Words shorter than the minimum length are still
//! recorded during the walk (they keep longer words reachable through
//! them) and are dropped in a single filter pass at the end.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use rayon::prelude::*;

use crate::board::{Board, Pos};
use crate::trie::Trie;
use crate::{load_dictionary, DEFAULT_MIN_WORD_LEN};

/// Solved words mapped to the path that produced them.
///
/// When several paths spell the same word, the path kept is the one found
/// last in row-major traversal order.
pub type Solutions = HashMap<String, Vec<Pos>>;

/// The main Boggle solver.
#[derive(Debug, Clone)]
pub struct BoggleSolver {
    dictionary: Trie,
}

impl BoggleSolver {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            dictionary: Trie::from_words(&words),
        }
    }

    /// Load the dictionary from a line-delimited word file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(load_dictionary(path)?))
    }

    /// Number of distinct dictionary words.
    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Find all dictionary words of at least [`DEFAULT_MIN_WORD_LEN`]
    /// letters on the board.
    pub fn solve(&self, board: &Board) -> Solutions {
        self.solve_with_min_length(board, DEFAULT_MIN_WORD_LEN)
    }

    /// Find all dictionary words of at least `min_length` letters on the
    /// board.
    ///
    /// Each starting cell is searched on the rayon pool; the per-cell
    /// traversals share only the board and the trie, both read-only, so the
    /// partial results merge without synchronization. Merging runs in
    /// row-major cell order to keep the retained path for duplicate words
    /// deterministic.
    pub fn solve_with_min_length(&self, board: &Board, min_length: usize) -> Solutions {
        let partials: Vec<Solutions> = board
            .cells()
            .par_iter()
            .map(|&start| {
                let mut found = Solutions::new();
                let mut path = vec![start];
                self.search(board, &mut path, &mut found);
                found
            })
            .collect();

        let mut solutions = Solutions::new();
        for partial in partials {
            solutions.extend(partial);
        }
        solutions.retain(|word, _| word.chars().count() >= min_length);
        solutions
    }

    /// Extend `path` depth-first, recording every complete word it spells.
    /// `path` is restored to its input state before returning.
    fn search(&self, board: &Board, path: &mut Vec<Pos>, found: &mut Solutions) {
        let prefix: String = path.iter().map(|&pos| board.letter(pos)).collect();
        if !self.dictionary.has_prefix(&prefix) {
            return;
        }
        if self.dictionary.is_word(&prefix) {
            found.insert(prefix, path.clone());
        }
        let Some(&last) = path.last() else {
            return;
        };
        for next in board.neighbors(last) {
            if path.contains(&next) {
                continue;
            }
            path.push(next);
            self.search(board, path, found);
            path.pop();
        }
    }
}

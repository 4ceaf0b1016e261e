//! # Boggle Solver
//!
//! A multithreaded Boggle solver using a trie-pruned depth-first search.
//!
//! The solver indexes the dictionary in a prefix trie, then walks every
//! simple adjacency path on the board, abandoning each branch as soon as
//! its letters stop being a prefix of any dictionary word.

pub mod board;
pub mod solver;
pub mod trie;

pub use board::{Board, BoardError, Pos};
pub use solver::{BoggleSolver, Solutions};
pub use trie::Trie;

use std::io;
use std::path::Path;

/// Default minimum word length for a solution
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Load a dictionary from a line-delimited word file.
///
/// Each line is trimmed and lowercased; blank lines are skipped so an empty
/// word can never reach the trie.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect())
}

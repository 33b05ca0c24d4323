//! Validated, ordered set of move names defining a game variant.

use std::collections::HashSet;
use thiserror::Error;

/// Errors from move-set validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("expected at least 3 moves, got {0}")]
    TooFew(usize),

    #[error("expected an odd number of moves, got {0}")]
    EvenCount(usize),

    #[error("duplicate move: {0}")]
    Duplicate(String),
}

/// Ordered sequence of distinct move names, odd length >= 3.
///
/// Moves are identified by their 0-based index into this list. The set is
/// validated on construction and immutable afterwards; the odd length is what
/// makes the cyclic win rule partition every move's opponents evenly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set from raw names.
    ///
    /// Comparison is case-sensitive: `Rock` and `rock` are distinct moves.
    pub fn parse(names: Vec<String>) -> Result<Self, MoveSetError> {
        if names.len() < 3 {
            return Err(MoveSetError::TooFew(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(names.len()));
        }
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Number of moves in the set (always odd)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: validation rejects fewer than 3 moves
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of moves each move beats: `len / 2`
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    /// Display name of the move at `index`
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// All move names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

//! The generalized cyclic win rule.
//!
//! On an odd-length move cycle each move beats the `len / 2` moves cyclically
//! behind it and loses to the `len / 2` moves ahead of it, so wins and losses
//! partition the other moves evenly. For (rock, paper, scissors) this is the
//! classic game: paper beats rock, rock beats scissors, scissors beats paper.

use super::MoveSet;
use std::fmt;

/// Result of a single round, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    /// Announcement line printed after the round
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "You win!",
            Outcome::ComputerWins => "Computer wins!",
            Outcome::Draw => "Draw!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True when move `a` beats move `b` on a cycle of `n` moves.
///
/// The single relation shared by the resolver and the payoff table, so the
/// two can never disagree.
pub fn beats(n: usize, a: usize, b: usize) -> bool {
    let half = n / 2;
    let lead = (n + a - b) % n;
    (1..=half).contains(&lead)
}

/// Determine the round outcome for the given player and computer moves.
///
/// Both arguments are indices into `moves`. For any odd-length set the three
/// outcomes are mutually exclusive and exhaustive; the final Draw arm is
/// unreachable but kept so a malformed set cannot panic the resolver.
pub fn resolve(moves: &MoveSet, player: usize, computer: usize) -> Outcome {
    let n = moves.len();
    if player == computer {
        Outcome::Draw
    } else if beats(n, player, computer) {
        Outcome::PlayerWins
    } else if beats(n, computer, player) {
        Outcome::ComputerWins
    } else {
        Outcome::Draw
    }
}

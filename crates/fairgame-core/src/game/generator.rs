//! Uniform random move selection for the computer.

use super::MoveSet;
use rand::Rng;

/// Picks the computer's move.
///
/// Uses the thread-local generator via `gen_range`, which is uniform over the
/// index range. This source is deliberately separate from the one backing
/// [`crate::crypto::CommitmentKey`]: move indices need no cryptographic
/// strength, and the key must never share a generator with anything else.
pub struct MoveGenerator;

impl MoveGenerator {
    /// Draw a uniformly random index into the move set
    pub fn pick(moves: &MoveSet) -> usize {
        rand::thread_rng().gen_range(0..moves.len())
    }
}

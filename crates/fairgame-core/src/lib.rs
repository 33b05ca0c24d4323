//! Fairgame Core Library
//!
//! This crate provides the move-set model, the generalized cyclic win rule,
//! the payoff table, and the commitment-scheme primitives for a provably-fair
//! single-round game against the computer.

pub mod crypto;
pub mod game;

pub use crypto::{Commitment, CommitmentKey, KeyError};
pub use game::{resolve, MoveGenerator, MoveSet, MoveSetError, Outcome, PayoffTable};

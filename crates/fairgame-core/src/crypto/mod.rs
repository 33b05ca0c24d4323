//! Cryptographic primitives for the commitment scheme.
//!
//! This module provides:
//! - CommitmentKey: the per-session 32-byte secret, revealed after the round
//! - Commitment: the HMAC-SHA3-256 digest binding the computer's move to the key

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::{CommitmentKey, KeyError};

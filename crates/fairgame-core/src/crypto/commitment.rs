//! HMAC commitment binding the computer's move to the session key.

use hmac::{Hmac, Mac};
use sha3::Sha3_256;
use std::fmt;

use super::CommitmentKey;

type HmacSha3 = Hmac<Sha3_256>;

/// Commitment = HMAC-SHA3-256(key, move name)
///
/// Published (hex-encoded, via `Display`) before the player's choice is
/// requested. Once the key is revealed, recomputing the digest over the
/// announced move confirms the move was not switched mid-round.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Compute the commitment for a message under the given key.
    ///
    /// Deterministic: the same (key, message) pair always yields the same
    /// digest, which is what makes the reveal verifiable.
    pub fn new(key: &CommitmentKey, message: &[u8]) -> Self {
        let mut mac =
            HmacSha3::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
        mac.update(message);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and message produce this commitment
    pub fn verify(&self, key: &CommitmentKey, message: &[u8]) -> bool {
        *self == Self::new(key, message)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_is_deterministic() {
        let key = CommitmentKey::from_bytes([7u8; 32]);
        let commitment1 = Commitment::new(&key, b"rock");
        let commitment2 = Commitment::new(&key, b"rock");

        assert_eq!(commitment1, commitment2);
    }

    #[test]
    fn test_commitment_verification() {
        let key = CommitmentKey::generate().unwrap();
        let commitment = Commitment::new(&key, b"rock");

        assert!(commitment.verify(&key, b"rock"));
    }

    #[test]
    fn test_different_messages_different_commitments() {
        let key = CommitmentKey::generate().unwrap();
        let commitment1 = Commitment::new(&key, b"rock");
        let commitment2 = Commitment::new(&key, b"paper");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let key1 = CommitmentKey::generate().unwrap();
        let key2 = CommitmentKey::generate().unwrap();
        let commitment1 = Commitment::new(&key1, b"rock");
        let commitment2 = Commitment::new(&key2, b"rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_message_fails_verification() {
        let key = CommitmentKey::generate().unwrap();
        let commitment = Commitment::new(&key, b"rock");

        assert!(!commitment.verify(&key, b"paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = CommitmentKey::generate().unwrap();
        let key2 = CommitmentKey::generate().unwrap();
        let commitment = Commitment::new(&key1, b"rock");

        assert!(!commitment.verify(&key2, b"rock"));
    }

    #[test]
    fn test_display_is_64_hex_chars() {
        let key = CommitmentKey::from_bytes([0u8; 32]);
        let displayed = Commitment::new(&key, b"rock").to_string();

        assert_eq!(displayed.len(), 64);
        assert!(displayed.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

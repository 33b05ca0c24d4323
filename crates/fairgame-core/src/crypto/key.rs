//! Per-session secret key for the commitment scheme.

use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use thiserror::Error;

/// Errors from key generation
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

/// 256-bit secret key, generated fresh per session from the OS entropy source.
///
/// The key stays in memory for the lifetime of the session and is revealed
/// (hex-encoded, via `Display`) only after the round resolves. Index
/// selection uses a separate, non-cryptographic source; the two must never
/// share a generator.
#[derive(Clone, PartialEq, Eq)]
pub struct CommitmentKey([u8; 32]);

impl CommitmentKey {
    /// Generate a fresh key from the OS secure random source.
    ///
    /// Fails rather than falling back to a weaker generator.
    pub fn generate() -> Result<Self, KeyError> {
        let mut bytes = [0u8; 32];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentKey({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_differ() {
        let key1 = CommitmentKey::generate().unwrap();
        let key2 = CommitmentKey::generate().unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_reveal_is_64_hex_chars() {
        let key = CommitmentKey::generate().unwrap();
        let revealed = key.to_string();

        assert_eq!(revealed.len(), 64);
        assert!(revealed.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_debug_does_not_print_full_key() {
        let key = CommitmentKey::from_bytes([0xab; 32]);
        let debug = format!("{:?}", key);

        assert!(!debug.contains(&key.to_string()));
    }
}

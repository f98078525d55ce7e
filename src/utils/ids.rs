//! Identifier and fingerprint helpers for stored designs.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of hex characters kept in a short fingerprint.
pub const FINGERPRINT_LEN: usize = 12;

/// Generate a random 128-bit identifier, hex encoded.
pub fn random_id() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Short SHA-256 fingerprint of some content, hex encoded.
pub fn fingerprint(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let mut hex = hex::encode(digest);
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_are_unique_hex() {
        let ids: HashSet<String> = (0..100).map(|_| random_id()).collect();
        assert_eq!(ids.len(), 100);
        for id in &ids {
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = fingerprint(b"data:image/png;base64,AAAA");
        let b = fingerprint(b"data:image/png;base64,AAAA");
        let c = fingerprint(b"data:image/png;base64,BBBB");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), FINGERPRINT_LEN);
    }
}

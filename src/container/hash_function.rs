use crate::common::config::HashValue;

const DJB2_SEED: HashValue = 5381;

/// DJB2 byte-sequence hash.
///
/// Chosen for simplicity and adequate distribution on short ASCII keys. It is
/// not collision resistant: never use it where an adversary can choose keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashFunction;

impl HashFunction {
    /// Creates a new `HashFunction`.
    pub fn new() -> Self {
        Self
    }

    /// Returns the hash value of the given key.
    ///
    /// Computes `h = h * 33 + b` over the key bytes starting from the DJB2
    /// seed. Overflow wraps; the wraparound is part of the algorithm, not an
    /// error condition.
    pub fn get_hash(&self, key: &[u8]) -> HashValue {
        let mut hash = DJB2_SEED;
        for &byte in key {
            // (h << 5) + h == h * 33
            hash = hash
                .wrapping_shl(5)
                .wrapping_add(hash)
                .wrapping_add(byte as HashValue);
        }
        hash
    }
}

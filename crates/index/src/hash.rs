//! Word hash function
//!
//! A deterministic polynomial rolling hash over a word's bytes, processed
//! from the last byte to the first. Lookup and deletion must land in the
//! same bucket as the original insertion, so the function is pure and
//! byte-for-byte reproducible; collisions are resolved by the bucket
//! chains, not here.

use rolodex_core::config::{HASH_BASE, HASH_PRIME, TABLE_SIZE};

/// Polynomial rolling hash of a word, in `[0, HASH_PRIME)`.
///
/// Bytes are folded in reverse order:
/// `h = (h * HASH_BASE + byte) % HASH_PRIME` for each byte from last to
/// first. The empty word hashes to 0.
pub fn word_hash(word: &str) -> u64 {
    let mut hash = 0u64;
    for &byte in word.as_bytes().iter().rev() {
        hash = (hash * HASH_BASE + u64::from(byte)) % HASH_PRIME;
    }
    hash
}

/// Bucket index for a word, in `[0, TABLE_SIZE)`.
pub fn bucket_for(word: &str) -> usize {
    (word_hash(word) % TABLE_SIZE as u64) as usize
}

//! Table and hash configuration constants
//!
//! The directory uses a fixed-size table with separate chaining and no
//! rehashing. The table never grows; collisions are absorbed by the chains.
//! These values are part of the on-lookup contract: a word must land in the
//! same bucket at lookup and deletion as it did at insertion, so changing
//! any of them invalidates every live directory.

/// Number of buckets in the directory's hash table.
///
/// Deliberately fixed: the directory does not resize or rehash.
pub const TABLE_SIZE: usize = 263;

/// Base of the polynomial rolling hash.
pub const HASH_BASE: u64 = 263;

/// Modulus of the polynomial rolling hash.
pub const HASH_PRIME: u64 = 1_000_000_007;

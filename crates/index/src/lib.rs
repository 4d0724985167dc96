//! Chained hash index for the rolodex contact directory
//!
//! This crate provides:
//! - `hash`: the word hash function and bucket mapping
//! - `tokenizer`: the shared name/query tokenization rule
//! - `Directory`: the fixed-size chained index with insertion,
//!   relevance-ranked fetch, entry counting and deletion
//!
//! Names and queries go through the exact same tokenizer and hash, which
//! is what makes lookup and deletion land in the buckets insertion filled.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod chain;
pub mod directory;
pub mod hash;
pub mod tokenizer;

// Re-export commonly used types
pub use directory::{Directory, QueryMatch};
pub use hash::{bucket_for, word_hash};
pub use tokenizer::tokenize;

//! Rolodex - in-memory contact directory with word-level fuzzy lookup
//!
//! A contact can be found by any single word occurring in its name; matches
//! are ranked by how many query words match the contact's name words. The
//! index is a fixed-size hash table with separate chaining where each chain
//! entry holds one (word hash, record handle) pair.
//!
//! # Quick Start
//!
//! ```
//! use rolodex::{ContactRecord, Directory};
//!
//! let mut dir = Directory::new();
//! let john = ContactRecord::handle(
//!     "John Doe",
//!     "XYZ Corp",
//!     vec!["1234567890".into(), "9876543210".into()],
//! )?;
//! dir.insert(john.clone());
//!
//! let matches = dir.fetch_contacts("John");
//! assert_eq!(matches[0].name(), "John Doe");
//!
//! assert!(dir.delete_contact("John"));
//! assert!(dir.fetch_contacts("Doe").is_empty());
//! # Ok::<(), rolodex::Error>(())
//! ```
//!
//! # Architecture
//!
//! Records are immutable and shared: the directory stores handles, never
//! copies, so a record outlives its index entries automatically. Lookup and
//! deletion reuse insertion's tokenizer and hash, which is what makes them
//! land in the same buckets. Not-found is data, not an error: an unmatched
//! fetch is an empty list and an unmatched delete is `false`.

// Re-export the public API from the core and index crates
pub use rolodex_core::{ContactHandle, ContactRecord, Error, Result, TABLE_SIZE};
pub use rolodex_index::{Directory, QueryMatch};

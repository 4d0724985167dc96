//! Core types for the rolodex contact directory
//!
//! This crate defines the foundational types used throughout the system:
//! - ContactRecord: immutable contact value (name, organisation, numbers)
//! - ContactHandle: shared-ownership handle to a record
//! - Error: error type hierarchy
//! - config: table and hash constants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod contact;
pub mod error;

// Re-export commonly used types
pub use config::{HASH_BASE, HASH_PRIME, TABLE_SIZE};
pub use contact::{ContactHandle, ContactRecord};
pub use error::{Error, Result};

//! Error types for the rolodex contact directory
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Not-found is data, not an error: an unmatched query yields an empty
//! result list and a failed deletion yields `false`. `Error` only covers
//! contract violations at construction time.

use thiserror::Error;

/// Result type alias for rolodex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the rolodex contact directory
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A contact record was constructed with an empty name
    #[error("Contact name must not be empty")]
    EmptyName,
}

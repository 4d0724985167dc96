//! Name and query tokenizer
//!
//! Splits on the single space character, literally. There is no trimming,
//! case folding, or normalization: the same byte sequence must hash to the
//! same bucket whether it came from a name at insertion or a query at
//! lookup, so both sides share this one rule.
//!
//! Delimiter handling follows delimiter-consuming line-read semantics:
//! consecutive spaces yield empty tokens (which are hashed and indexed like
//! any other token), a trailing space does not yield a final empty token,
//! and the empty string yields no tokens at all.

/// Split `text` into word tokens on single spaces.
///
/// # Example
///
/// ```
/// use rolodex_index::tokenizer::tokenize;
///
/// assert_eq!(tokenize("John Doe"), vec!["John", "Doe"]);
/// assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
/// assert_eq!(tokenize("a "), vec!["a"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = text.split(' ').collect();
    if text.ends_with(' ') {
        // The segment after the final delimiter is never a token.
        tokens.pop();
    }
    tokens
}

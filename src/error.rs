//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt ciphers.
///
/// Every failure is a deterministic function of the key or the input text,
/// so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key failed validation: non-positive column count, or a substitution
    /// key character outside the alphabet.
    #[error("Key is invalid")]
    InvalidKey,
    /// Substitution key is empty.
    #[error("Key must be at least 1 character long")]
    EmptyKey,
    /// Substitution key is longer than one character and every character is identical.
    #[error("Key is weak: all characters are identical")]
    WeakKey,
    /// Input text is empty, or nothing remains after filtering.
    #[error("Text is empty")]
    EmptyText,
    /// Route-cipher input contains no letters.
    #[error("Text contains no letters")]
    NoLetters,
    /// Route-cipher input is not longer than the column count.
    #[error("Text length must be greater than the number of columns")]
    TextTooShort,
    /// Substitution ciphertext contains a character that is not an uppercase alphabet letter.
    #[error("Cipher text contains invalid characters")]
    InvalidCipherText,
}

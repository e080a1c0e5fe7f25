//! Common interface of the text cipher engines.

use crate::error::CipherError;

/// A keyed, stateless text cipher.
///
/// Implementations validate their key at construction and never mutate
/// during `encrypt`/`decrypt`, so a single instance can serve any number of
/// calls, from any number of threads.
pub trait TextCipher {
    /// Encrypts `text`, returning the ciphertext.
    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    /// Decrypts `text`, returning the normalized plaintext.
    fn decrypt(&self, text: &str) -> Result<String, CipherError>;
}

//! PolyalphabeticSubstitution: repeating-key shift cipher over the Russian alphabet.
//!
//! Each letter's alphabet position is shifted by the position of the key
//! letter aligned with it, modulo 33; the key repeats over the text.
//! Encryption filters its input down to alphabet letters, while decryption
//! only accepts canonical (uppercase, alphabet-only) ciphertext.

use tracing::{debug, trace};

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::TextCipher;
use crate::error::CipherError;
use crate::utils::text;

/// Polyalphabetic substitution cipher keyed by a word in the Russian alphabet.
///
/// # Examples
///
/// ```
/// use classicrypt::PolyalphabeticSubstitution;
///
/// let cipher = PolyalphabeticSubstitution::new("ключ").unwrap();
/// let encrypted = cipher.encrypt("Привет, мир!").unwrap();
/// assert_eq!(encrypted, "ЪЬЖЩПЮКАЫ");
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРИВЕТМИР");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyalphabeticSubstitution {
    key: Vec<usize>,
}

impl PolyalphabeticSubstitution {
    /// Creates a cipher from `key`.
    ///
    /// The key may mix upper and lower case; it is stored uppercased.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKey`] if `key` is empty.
    /// - [`CipherError::InvalidKey`] if any character is not an alphabet letter.
    /// - [`CipherError::WeakKey`] if `key` has more than one character and
    ///   all of them are the same letter.
    ///
    /// ```
    /// use classicrypt::{CipherError, PolyalphabeticSubstitution};
    ///
    /// assert!(PolyalphabeticSubstitution::new("А").is_ok());
    /// assert_eq!(
    ///     PolyalphabeticSubstitution::new("ааа"),
    ///     Err(CipherError::WeakKey)
    /// );
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            debug!("polyalphabetic key rejected: empty");
            return Err(CipherError::EmptyKey);
        }

        let key = key
            .chars()
            .map(|c| alphabet::to_upper(c).and_then(alphabet::index_of))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(|| {
                debug!("polyalphabetic key rejected: character outside alphabet");
                CipherError::InvalidKey
            })?;

        if key.len() > 1 && key.iter().all(|&k| k == key[0]) {
            debug!(key_len = key.len(), "polyalphabetic key rejected: weak");
            return Err(CipherError::WeakKey);
        }

        debug!(key_len = key.len(), "polyalphabetic cipher created");
        Ok(PolyalphabeticSubstitution { key })
    }

    /// Returns the validated, uppercased key.
    pub fn key(&self) -> String {
        text::from_indices(self.key.iter().copied())
    }

    /// Returns the number of letters in the key.
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Encrypts `open_text`.
    ///
    /// Characters outside the alphabet (Latin letters, digits, spaces,
    /// punctuation) are dropped and lowercase letters are uppercased.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if no alphabet letters remain.
    pub fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        let work = text::alphabet_indices(open_text);
        if work.is_empty() {
            debug!("polyalphabetic encrypt rejected: no alphabet letters");
            return Err(CipherError::EmptyText);
        }

        let output = text::from_indices(
            work.iter()
                .zip(self.key.iter().cycle())
                .map(|(&v, &k)| (v + k) % ALPHABET_LEN),
        );

        trace!(len = work.len(), "polyalphabetic encrypt");
        Ok(output)
    }

    /// Decrypts `cipher_text`.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if `cipher_text` is empty.
    /// - [`CipherError::InvalidCipherText`] if any character is not an
    ///   uppercase alphabet letter.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        if cipher_text.is_empty() {
            debug!("polyalphabetic decrypt rejected: empty text");
            return Err(CipherError::EmptyText);
        }

        let work = cipher_text
            .chars()
            .map(alphabet::index_of)
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(|| {
                debug!("polyalphabetic decrypt rejected: invalid cipher text");
                CipherError::InvalidCipherText
            })?;

        let output = text::from_indices(
            work.iter()
                .zip(self.key.iter().cycle())
                .map(|(&v, &k)| (v + ALPHABET_LEN - k) % ALPHABET_LEN),
        );

        trace!(len = work.len(), "polyalphabetic decrypt");
        Ok(output)
    }
}

impl TextCipher for PolyalphabeticSubstitution {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        PolyalphabeticSubstitution::encrypt(self, text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        PolyalphabeticSubstitution::decrypt(self, text)
    }
}

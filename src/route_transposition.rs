//! RouteTransposition: columnar route transposition cipher.
//!
//! The normalized text is written into a table row by row, left to right,
//! and read out column by column starting from the rightmost column, each
//! column from the bottom row up. Cells past the end of the text in the last
//! row stay blank and are skipped on output; decryption recomputes that blank
//! layout from the text length alone.

use tracing::{debug, trace};

use crate::cipher::TextCipher;
use crate::error::CipherError;
use crate::utils::text;

/// Route transposition cipher keyed by a column count.
///
/// # Examples
///
/// ```
/// use classicrypt::RouteTransposition;
///
/// let cipher = RouteTransposition::new(3).unwrap();
/// assert_eq!(cipher.encrypt("hello").unwrap(), "LOELH");
/// assert_eq!(cipher.decrypt("LOELH").unwrap(), "HELLO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTransposition {
    columns: usize,
}

impl RouteTransposition {
    /// Creates a cipher whose table has `columns` columns.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `columns <= 0`.
    ///
    /// ```
    /// use classicrypt::{CipherError, RouteTransposition};
    ///
    /// assert_eq!(RouteTransposition::new(0), Err(CipherError::InvalidKey));
    /// ```
    pub fn new(columns: i64) -> Result<Self, CipherError> {
        let columns = usize::try_from(columns)
            .ok()
            .filter(|&c| c > 0)
            .ok_or_else(|| {
                debug!(columns, "route transposition key rejected");
                CipherError::InvalidKey
            })?;
        debug!(columns, "route transposition cipher created");
        Ok(RouteTransposition { columns })
    }

    /// Returns the column count this cipher was built with.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Encrypts `text`.
    ///
    /// Non-letters are dropped and the remaining letters uppercased before
    /// the table is filled.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if `text` is empty.
    /// - [`CipherError::NoLetters`] if `text` contains no letters.
    /// - [`CipherError::TextTooShort`] if the letter count is not greater
    ///   than the column count.
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let letters = self.valid_text(text)?;
        let len = letters.len();

        let output: String = self
            .route(len)
            .map(|cell| letters[cell])
            .collect();

        trace!(columns = self.columns, len, "route transposition encrypt");
        Ok(output)
    }

    /// Decrypts `text`.
    ///
    /// The input is normalized exactly like [`encrypt`](Self::encrypt)
    /// input, so stray punctuation or lowercase letters are tolerated.
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let letters = self.valid_text(text)?;
        let len = letters.len();

        // Only the first `len` cells (row-major) are filled; place the
        // ciphertext into them following the encryption read route.
        let mut table = vec!['\0'; len];
        for (cell, &c) in self.route(len).zip(letters.iter()) {
            table[cell] = c;
        }

        trace!(columns = self.columns, len, "route transposition decrypt");
        Ok(table.into_iter().collect())
    }

    /// Yields the row-major indices of the filled cells of a table holding
    /// `len` letters, in route order: rightmost column first, bottom row first.
    fn route(&self, len: usize) -> impl Iterator<Item = usize> {
        let columns = self.columns;
        let rows = len.div_ceil(columns);
        (0..columns).rev().flat_map(move |col| {
            (0..rows)
                .rev()
                .map(move |row| row * columns + col)
                .filter(move |&cell| cell < len)
        })
    }

    /// Normalizes `text` and checks it is longer than the column count.
    fn valid_text(&self, text: &str) -> Result<Vec<char>, CipherError> {
        if text.is_empty() {
            debug!("route transposition rejected empty text");
            return Err(CipherError::EmptyText);
        }
        let letters = text::latin_letters_upper(text);
        if letters.is_empty() {
            debug!("route transposition rejected text without letters");
            return Err(CipherError::NoLetters);
        }
        if letters.len() <= self.columns {
            debug!(
                len = letters.len(),
                columns = self.columns,
                "route transposition rejected short text"
            );
            return Err(CipherError::TextTooShort);
        }
        Ok(letters)
    }
}

impl TextCipher for RouteTransposition {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        RouteTransposition::encrypt(self, text)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        RouteTransposition::decrypt(self, text)
    }
}

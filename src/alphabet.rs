//! The 33-letter Russian alphabet used by the polyalphabetic cipher.
//!
//! Symbols are stored in uppercase, in dictionary order (`Ё` sits between
//! `Е` and `Ж`, outside the contiguous `А..=Я` code point range).

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 33;

/// Uppercase alphabet symbols in order; a symbol's position is its numeric value.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Symbol to position map, built on first use and shared by every cipher instance.
static SYMBOL_TO_INDEX: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i))
        .collect()
});

/// Returns the position of an uppercase alphabet symbol.
///
/// Lowercase letters and anything outside the alphabet yield `None`.
pub fn index_of(c: char) -> Option<usize> {
    SYMBOL_TO_INDEX.get(&c).copied()
}

/// Returns the symbol at position `index`, wrapping modulo [`ALPHABET_LEN`].
pub fn symbol_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN]
}

/// Returns `true` if `c` is an uppercase alphabet symbol.
pub fn is_upper(c: char) -> bool {
    index_of(c).is_some()
}

/// Maps a letter of the alphabet in either case to its uppercase symbol.
///
/// # Returns
/// `Some(symbol)` for `А..=Я`, `а..=я`, `Ё` and `ё`; `None` otherwise.
pub fn to_upper(c: char) -> Option<char> {
    match c {
        'а'..='я' => char::from_u32(c as u32 - 'а' as u32 + 'А' as u32),
        'ё' => Some('Ё'),
        _ if is_upper(c) => Some(c),
        _ => None,
    }
}

//! Text filtering and case folding used by the engines' normalization steps.

use crate::alphabet;

/// Keeps the ASCII letters of `text`, uppercased, in their original order.
///
/// Classification is byte-oriented like C-locale `isalpha`: any non-ASCII
/// character, Cyrillic included, is dropped.
pub(crate) fn latin_letters_upper(text: &str) -> Vec<char> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Keeps the letters of `text` that belong to the Cyrillic alphabet (either
/// case), mapped to their uppercase symbol positions.
pub(crate) fn alphabet_indices(text: &str) -> Vec<usize> {
    text.chars()
        .filter_map(alphabet::to_upper)
        .filter_map(alphabet::index_of)
        .collect()
}

/// Builds a string from alphabet positions.
pub(crate) fn from_indices<I>(indices: I) -> String
where
    I: IntoIterator<Item = usize>,
{
    indices.into_iter().map(alphabet::symbol_at).collect()
}

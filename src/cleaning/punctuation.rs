use lazy_static::lazy_static;
use std::collections::HashSet;

/// Characters stripped from every word, wherever they appear in it.
pub const PUNCTUATION: [char; 15] = [
    '«', '»', ',', '.', ';', ':', '-', '\'', '"', '!', '?', '–', '—', '“', '”',
];

lazy_static! {
    static ref PUNCTUATION_SET: HashSet<char> = PUNCTUATION.iter().copied().collect();
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION_SET.contains(&c)
}

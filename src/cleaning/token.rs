use super::punctuation::is_punctuation;

/// Counters collected while tokenizing, used for the run report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeStats {
    pub words_seen: usize,
    pub words_dropped: usize,
}

/// Remove every punctuation character from a word.
/// Returns `None` when nothing is left.
pub fn clean_word(word: &str) -> Option<String> {
    let cleaned: String = word.chars().filter(|&c| !is_punctuation(c)).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Split a line on whitespace runs and push the cleaned words onto `tokens`,
/// left to right. Words that clean down to nothing are skipped.
pub fn tokenize_line(line: &str, tokens: &mut Vec<String>, stats: &mut TokenizeStats) {
    for word in line.split_whitespace() {
        stats.words_seen += 1;
        match clean_word(word) {
            Some(token) => tokens.push(token),
            None => stats.words_dropped += 1,
        }
    }
}

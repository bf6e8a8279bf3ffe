pub mod punctuation;
pub mod token;

pub use punctuation::{is_punctuation, PUNCTUATION};
pub use token::{clean_word, tokenize_line, TokenizeStats};

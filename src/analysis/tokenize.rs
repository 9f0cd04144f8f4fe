//! Literal tokenization: sentence, word and character counts.
//!
//! These deliberately count split *segments*, not grammatical units. A
//! trailing `.` yields a final empty segment and two consecutive spaces yield
//! an empty word token; downstream formulas depend on these exact semantics.

pub fn is_sentence_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Number of segments between sentence delimiters, empty segments included.
pub fn count_sentences(text: &str) -> usize {
    text.split(is_sentence_delimiter).count()
}

/// Word tokens: every run between single space characters, empties included.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

pub fn count_words(text: &str) -> usize {
    split_words(text).count()
}

/// Length of the document with all space characters removed. Punctuation and
/// sentence delimiters count.
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|&c| c != ' ').count()
}

//! Character classification for German text.
//!
//! The tokenizer never uses regexes; instead every character is classified
//! by `is_word_char`, which covers the ASCII letters and digits plus the
//! Latin Unicode ranges needed for German (umlauts, ß, and the Latin
//! Extended-A block used by loanwords and names).

/// Character classes used during tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// A word character (letter, digit, underscore, extended Latin)
    Word,
    /// Whitespace (space, tab, newline, and Unicode space variants)
    Space,
    /// Anything else (punctuation, symbols)
    Other,
}

/// Multiplication and division signs sit inside the Latin-1/Extended-A
/// letter range and must not count as word characters.
const NON_LETTER_IN_LATIN_RANGE: &[char] = &['\u{00D7}', '\u{00F7}'];

/// Check whether a character can be part of a word core.
///
/// Covers ASCII alphanumerics and `_`, the Latin-1 Supplement and Latin
/// Extended-A letters (U+00C0..=U+017F, so ä ö ü ß é č ł all qualify), and
/// the capital sharp s ẞ (U+1E9E), which lives outside those blocks.
pub fn is_word_char(c: char) -> bool {
    if c.is_ascii_alphanumeric() || c == '_' || c == '\u{1E9E}' {
        return true;
    }
    ('\u{00C0}'..='\u{017F}').contains(&c) && !NON_LETTER_IN_LATIN_RANGE.contains(&c)
}

/// Classify a single character
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Other
    }
}
